use chrono::{
    DateTime,
    Utc
};
use serde::{
    Serialize,
    Deserialize
};
use thiserror::Error;

use crate::time::utility::{
    is_midnight,
    ONE_DAY
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval [{start}, {end}] does not span exactly one day")]
    NotOneDay { start: DateTime<Utc>, end: DateTime<Utc> },
    #[error("interval start {0} is not at midnight UTC")]
    NotMidnight(DateTime<Utc>)
}

/// The one-day window a single run covers.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DataInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>
}

impl DataInterval {
    /// Checks that `start` is at midnight and `end` is one day later.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<DataInterval, IntervalError> {
        if !is_midnight(start) {
            return Err(IntervalError::NotMidnight(start));
        }
        if end - start != ONE_DAY {
            return Err(IntervalError::NotOneDay { start, end });
        }
        Ok(DataInterval { start, end })
    }

    /// `[start, start + 1 day]`, without checking `start`.
    pub fn exact(start: DateTime<Utc>) -> DataInterval {
        DataInterval { start, end: start + ONE_DAY }
    }

    /// `[start, start + 1 day]`, or `None` if the end is not representable.
    pub fn checked(start: DateTime<Utc>) -> Option<DataInterval> {
        let end = start.checked_add_signed(ONE_DAY)?;
        Some(DataInterval { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}
