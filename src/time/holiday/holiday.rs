use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

const fn one_day() -> u32 {
    1
}

/// A run of `days` consecutive non-working days starting at `date`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    #[serde(default = "one_day")]
    days: u32
}

impl Holiday {
    pub fn new(date: NaiveDate, days: u32) -> Holiday {
        Holiday { date, days }
    }

    pub fn single(date: NaiveDate) -> Holiday {
        Holiday { date, days: one_day() }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn days(&self) -> u32 {
        self.days
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_defaults_to_one_day() {
        let holiday: Holiday = serde_json::from_str(r#"{"date": "2022-10-03"}"#).unwrap();
        assert_eq!(holiday, Holiday::single(NaiveDate::from_ymd_opt(2022, 10, 3).unwrap()));
    }

    #[test]
    fn explicit_span_is_kept() {
        let holiday: Holiday = serde_json::from_str(r#"{"date": "2022-09-09", "days": 4}"#).unwrap();
        assert_eq!(holiday.date(), NaiveDate::from_ymd_opt(2022, 9, 9).unwrap());
        assert_eq!(holiday.days(), 4);
    }
}
