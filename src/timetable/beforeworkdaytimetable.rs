use std::sync::Arc;

use chrono::{
    DateTime,
    Utc
};
use tracing::{
    debug,
    info
};

use crate::time::clock::{
    Clock,
    SystemClock
};
use crate::time::holiday::holidaytable::HolidayTable;
use crate::time::utility::{
    add_days,
    day_of_week,
    is_midnight,
    normalize_midnight,
    ONE_DAY
};
use crate::timetable::datainterval::DataInterval;
use crate::timetable::holidayskip::HolidaySkip;
use crate::timetable::runinfo::{
    NoRunReason,
    RunInfo,
    ScheduleDecision
};
use crate::timetable::timerestriction::TimeRestriction;
use crate::timetable::timetable::Timetable;

pub const BEFORE_WORKDAY_SUMMARY: &str = "@beforework";

// Counted from Sunday, as `day_of_week` does.
const SUNDAY: u32 = 0;
const THURSDAY: u32 = 4;
const FRIDAY: u32 = 5;
const SATURDAY: u32 = 6;
const DAYS_PER_WEEK: u32 = 7;

/// One run per workday, scheduled over the day *before* that workday.
///
/// The interval `[Sun, Mon)` belongs to Monday, `[Thu, Fri)` to Friday, and so
/// on. After the Thursday interval the next one is the following Sunday's.
/// Holidays are found by looking two days past an interval start; a hit moves
/// the start forward by the holiday's span.
pub struct BeforeWorkdayTimetable {
    holidays: Arc<HolidayTable>,
    holiday_skip: HolidaySkip,
    clock: Arc<dyn Clock>
}

impl BeforeWorkdayTimetable {
    pub fn new(holidays: Arc<HolidayTable>,
               holiday_skip: HolidaySkip,
               clock: Arc<dyn Clock>) -> BeforeWorkdayTimetable {
        BeforeWorkdayTimetable { holidays, holiday_skip, clock }
    }

    /// Builtin holidays, single-hop skipping, wall clock.
    pub fn with_builtin_holidays() -> BeforeWorkdayTimetable {
        BeforeWorkdayTimetable::new(HolidayTable::builtin(), HolidaySkip::SingleHop, Arc::new(SystemClock))
    }

    pub fn skip_holidays(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.holiday_skip.apply(&self.holidays, start)
    }

    /// Same as [`Timetable::next_run_info`] with `now` in place of the clock.
    pub fn next_run_info_at(&self,
                            last_automated_data_interval: Option<&DataInterval>,
                            restriction: &TimeRestriction,
                            now: DateTime<Utc>) -> ScheduleDecision {
        let next_start = match last_automated_data_interval {
            Some(last) => self.next_start_after(last),
            None => {
                let Some(earliest) = restriction.earliest() else {
                    info!("no earliest start, not scheduling");
                    return ScheduleDecision::NoRun(NoRunReason::NoEarliest);
                };
                self.first_start(earliest, restriction.catchup(), now)
            }
        };
        let Some(next_start) = next_start else {
            info!("next start out of range, not scheduling");
            return ScheduleDecision::NoRun(NoRunReason::OutOfRange);
        };

        if let Some(latest) = restriction.latest() {
            if next_start > latest {
                info!(%next_start, %latest, "past latest, not scheduling");
                return ScheduleDecision::NoRun(NoRunReason::AfterLatest);
            }
        }
        match DataInterval::checked(next_start) {
            Some(interval) => ScheduleDecision::Schedule(RunInfo::interval(interval)),
            None => {
                info!(%next_start, "interval end out of range, not scheduling");
                ScheduleDecision::NoRun(NoRunReason::OutOfRange)
            }
        }
    }

    fn next_start_after(&self, last: &DataInterval) -> Option<DateTime<Utc>> {
        let last_start = self.skip_holidays(normalize_midnight(last.start()))?;
        let weekday = day_of_week(last_start);
        let days = if (SUNDAY..THURSDAY).contains(&weekday) {
            1
        } else {
            DAYS_PER_WEEK - weekday
        };
        let next_start = add_days(last_start, days)?;
        debug!(prior = %last.start(), %last_start, weekday, %next_start, "next after prior run");
        Some(next_start)
    }

    fn first_start(&self, earliest: DateTime<Utc>, catchup: bool, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let next_start = if !catchup {
            earliest.max(normalize_midnight(now))
        } else if !is_midnight(earliest) {
            normalize_midnight(earliest.checked_add_signed(ONE_DAY)?)
        } else {
            earliest
        };

        let next_start = self.skip_holidays(next_start)?;
        let weekday = day_of_week(next_start);
        let next_start = if weekday == FRIDAY || weekday == SATURDAY {
            add_days(next_start, DAYS_PER_WEEK - weekday)?
        } else {
            next_start
        };
        debug!(%earliest, catchup, %next_start, "first run");
        Some(next_start)
    }
}

impl Timetable for BeforeWorkdayTimetable {
    fn summary(&self) -> &str {
        BEFORE_WORKDAY_SUMMARY
    }

    fn infer_manual_data_interval(&self, run_after: DateTime<Utc>) -> DataInterval {
        let end = normalize_midnight(run_after);
        DataInterval::exact(end - ONE_DAY)
    }

    fn next_run_info(&self,
                     last_automated_data_interval: Option<&DataInterval>,
                     restriction: &TimeRestriction) -> ScheduleDecision {
        self.next_run_info_at(last_automated_data_interval, restriction, self.clock.now())
    }
}
