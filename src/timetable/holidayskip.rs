use chrono::{
    DateTime,
    Days,
    Utc
};
use serde::{
    Serialize,
    Deserialize
};
use tracing::trace;

use crate::time::holiday::holidaytable::HolidayTable;
use crate::time::utility::add_days;

/// How far ahead of an interval start the next workday sits.
const LOOK_AHEAD: Days = Days::new(2);

/// How many holiday spans one skip may jump over.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum HolidaySkip {
    /// At most one span per call; a holiday right after the skipped span is
    /// not detected.
    #[default]
    SingleHop,
    /// Repeat until the look-ahead date starts no holiday.
    UntilClear
}

impl HolidaySkip {
    /// If `start + 2 days` begins a holiday span, moves `start` forward by the
    /// span's length.
    ///
    /// `None` only when the skip would leave chrono's date range.
    pub fn apply(&self, holidays: &HolidayTable, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            HolidaySkip::SingleHop => match holiday_ahead(holidays, start) {
                Some(days) => add_days(start, days),
                None => Some(start)
            },
            HolidaySkip::UntilClear => {
                let mut current = start;
                // A table cannot hold more spans than entries, so this ends.
                for _ in 0..=holidays.len() {
                    match holiday_ahead(holidays, current) {
                        Some(days) => current = add_days(current, days)?,
                        None => break
                    }
                }
                Some(current)
            }
        }
    }
}

/// Span of the holiday starting two days after `start`, if any.
fn holiday_ahead(holidays: &HolidayTable, start: DateTime<Utc>) -> Option<u32> {
    // No holiday can start past the last representable date.
    let look_ahead = start.date_naive().checked_add_days(LOOK_AHEAD)?;
    let days = holidays.lookup(look_ahead)?;
    trace!(%look_ahead, days, "holiday ahead");
    Some(days)
}
