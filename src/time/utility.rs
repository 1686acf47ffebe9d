use chrono::{
    DateTime,
    Datelike,
    Duration,
    NaiveTime,
    Utc
};

pub const ONE_DAY: Duration = Duration::days(1);

/// Truncates `instant` to 00:00:00 UTC of the same UTC calendar day.
#[inline]
pub fn normalize_midnight(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

#[inline]
pub fn is_midnight(instant: DateTime<Utc>) -> bool {
    instant.time() == NaiveTime::MIN
}

/// Weekday of `instant` counted from Sunday (Sunday = 0, Saturday = 6).
#[inline]
pub fn day_of_week(instant: DateTime<Utc>) -> u32 {
    instant.weekday().num_days_from_sunday()
}

/// `None` when the result falls outside chrono's representable range.
#[inline]
pub fn add_days(instant: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>> {
    instant.checked_add_signed(Duration::days(days as i64))
}
