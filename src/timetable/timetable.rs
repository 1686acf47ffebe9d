use chrono::{
    DateTime,
    Utc
};

use crate::timetable::datainterval::DataInterval;
use crate::timetable::runinfo::ScheduleDecision;
use crate::timetable::timerestriction::TimeRestriction;

/// What a host scheduler needs from a timetable.
pub trait Timetable: Send + Sync {
    /// Short label shown by the host.
    fn summary(&self) -> &str;

    /// Interval for a run triggered by hand at `run_after`.
    fn infer_manual_data_interval(&self, run_after: DateTime<Utc>) -> DataInterval;

    /// Next interval after `last_automated_data_interval`, or why there is none.
    fn next_run_info(&self,
                     last_automated_data_interval: Option<&DataInterval>,
                     restriction: &TimeRestriction) -> ScheduleDecision;
}
