use chrono::{
    DateTime,
    Utc
};
use serde::{
    Serialize,
    Deserialize
};

/// Bounds on what a timetable may schedule.
///
/// `earliest` and `latest` limit the instants that may start an interval.
/// `catchup` decides whether occurrences already in the past are scheduled.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TimeRestriction {
    #[serde(default)]
    earliest: Option<DateTime<Utc>>,
    #[serde(default)]
    latest: Option<DateTime<Utc>>,
    #[serde(default)]
    catchup: bool
}

impl TimeRestriction {
    pub fn new(earliest: Option<DateTime<Utc>>, latest: Option<DateTime<Utc>>, catchup: bool) -> TimeRestriction {
        TimeRestriction { earliest, latest, catchup }
    }

    pub fn earliest(&self) -> Option<DateTime<Utc>> {
        self.earliest
    }

    pub fn latest(&self) -> Option<DateTime<Utc>> {
        self.latest
    }

    pub fn catchup(&self) -> bool {
        self.catchup
    }
}
