use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{
    Arc,
    LazyLock
};

use chrono::NaiveDate;
use thiserror::Error;

use crate::time::holiday::holiday::Holiday;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HolidayTableError {
    #[error("holiday starting on {0} is listed more than once")]
    DuplicateDate(NaiveDate),
    #[error("holiday starting on {0} spans zero days")]
    ZeroSpan(NaiveDate)
}

/// (year, month, day, days)
const BUILTIN_HOLIDAYS: [(i32, u32, u32, u32); 8] = [
    (2022, 8, 15, 1),
    (2022, 9, 9, 4),
    (2022, 10, 3, 1),
    (2022, 10, 9, 1),
    (2022, 12, 25, 1),
    (2023, 1, 21, 4),
    (2023, 3, 1, 1),
    (2023, 5, 5, 1)
];

static BUILTIN: LazyLock<Arc<HolidayTable>> = LazyLock::new(|| {
    let holidays = BUILTIN_HOLIDAYS
        .iter()
        .map(|&(y, m, d, days)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("builtin holiday date is valid");
            Holiday::new(date, days)
        })
        .collect();
    Arc::new(HolidayTable::new(holidays).expect("builtin holidays are unique"))
});

/// Holiday spans keyed by their first day.
///
/// Read-only once built. Lookup is by exact starting date: a date that falls
/// inside a span but is not its first day is not reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HolidayTable {
    spans: BTreeMap<NaiveDate, u32>
}

impl HolidayTable {
    /// Fails on a repeated starting date or a zero-day span.
    pub fn new(holidays: Vec<Holiday>) -> Result<HolidayTable, HolidayTableError> {
        let mut spans = BTreeMap::new();
        for holiday in holidays {
            if holiday.days() == 0 {
                return Err(HolidayTableError::ZeroSpan(holiday.date()));
            }
            match spans.entry(holiday.date()) {
                Entry::Occupied(_) => return Err(HolidayTableError::DuplicateDate(holiday.date())),
                Entry::Vacant(slot) => {
                    slot.insert(holiday.days());
                }
            }
        }
        Ok(HolidayTable { spans })
    }

    pub fn empty() -> HolidayTable {
        HolidayTable::default()
    }

    /// The compiled-in table shared by the whole process.
    pub fn builtin() -> Arc<HolidayTable> {
        Arc::clone(&*BUILTIN)
    }

    pub fn lookup(&self, d: NaiveDate) -> Option<u32> {
        self.spans.get(&d).copied()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Holiday> + '_ {
        self.spans.iter().map(|(&date, &days)| Holiday::new(date, days))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builtin_table_has_every_entry() {
        let table = HolidayTable::builtin();
        assert_eq!(table.len(), BUILTIN_HOLIDAYS.len());
        assert_eq!(table.lookup(ymd(2022, 9, 9)), Some(4));
        assert_eq!(table.lookup(ymd(2023, 1, 21)), Some(4));
        assert_eq!(table.lookup(ymd(2022, 10, 3)), Some(1));
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let table = HolidayTable::builtin();
        // 2022-09-10 lies inside the 4-day span but does not start it.
        assert_eq!(table.lookup(ymd(2022, 9, 10)), None);
        assert_eq!(table.lookup(ymd(2022, 8, 27)), None);
    }

    #[test]
    fn repeated_lookup_is_stable() {
        let table = HolidayTable::builtin();
        let first = table.lookup(ymd(2022, 12, 25));
        for _ in 0..5 {
            assert_eq!(table.lookup(ymd(2022, 12, 25)), first);
        }
    }

    #[test]
    fn duplicate_start_date_is_rejected() {
        let result = HolidayTable::new(vec![
            Holiday::single(ymd(2022, 10, 3)),
            Holiday::new(ymd(2022, 10, 3), 2)
        ]);
        assert_eq!(result, Err(HolidayTableError::DuplicateDate(ymd(2022, 10, 3))));
    }

    #[test]
    fn zero_span_is_rejected() {
        let result = HolidayTable::new(vec![Holiday::new(ymd(2022, 10, 3), 0)]);
        assert_eq!(result, Err(HolidayTableError::ZeroSpan(ymd(2022, 10, 3))));
    }

    #[test]
    fn iter_yields_holidays_in_date_order() {
        let table = HolidayTable::new(vec![
            Holiday::single(ymd(2023, 3, 1)),
            Holiday::new(ymd(2022, 9, 9), 4)
        ]).unwrap();
        let dates: Vec<NaiveDate> = table.iter().map(|h| h.date()).collect();
        assert_eq!(dates, vec![ymd(2022, 9, 9), ymd(2023, 3, 1)]);
        assert!(HolidayTable::empty().is_empty());
    }
}
