use std::fmt;

use chrono::{
    DateTime,
    Utc
};
use serde::{
    Serialize,
    Deserialize
};

use crate::timetable::datainterval::DataInterval;

/// A run the host should dispatch once `run_after` has passed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RunInfo {
    run_after: DateTime<Utc>,
    data_interval: DataInterval
}

impl RunInfo {
    /// Runs as soon as the interval closes.
    pub fn interval(data_interval: DataInterval) -> RunInfo {
        RunInfo { run_after: data_interval.end(), data_interval }
    }

    pub fn run_after(&self) -> DateTime<Utc> {
        self.run_after
    }

    pub fn data_interval(&self) -> &DataInterval {
        &self.data_interval
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum NoRunReason {
    /// First run and the restriction has no `earliest`.
    NoEarliest,
    /// The next start lies past the restriction's `latest`.
    AfterLatest,
    /// The next interval would end past the last representable instant.
    OutOfRange
}

impl fmt::Display for NoRunReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoRunReason::NoEarliest => write!(f, "no earliest start configured"),
            NoRunReason::AfterLatest => write!(f, "next start is past the latest bound"),
            NoRunReason::OutOfRange => write!(f, "next interval is out of the supported date range")
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ScheduleDecision {
    Schedule(RunInfo),
    NoRun(NoRunReason)
}

impl ScheduleDecision {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, ScheduleDecision::Schedule(_))
    }

    pub fn run_info(&self) -> Option<&RunInfo> {
        match self {
            ScheduleDecision::Schedule(info) => Some(info),
            ScheduleDecision::NoRun(_) => None
        }
    }

    pub fn data_interval(&self) -> Option<&DataInterval> {
        self.run_info().map(|info| info.data_interval())
    }
}
