use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::time::holiday::holiday::Holiday;
use crate::time::holiday::holidaytable::HolidayTable;

#[derive(Deserialize)]
struct HolidayTableJsonProp {
    holidays: Vec<Holiday>
}

fn get_holiday_table_from_json(json_value: serde_json::Value) -> Result<Arc<HolidayTable>, ManagerError> {
    let json_prop: HolidayTableJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    let table = HolidayTable::new(json_prop.holidays)?;
    Ok(Arc::new(table))
}


pub struct HolidayTableManager;


impl HolidayTableManager {
    pub fn new() -> Manager<Arc<HolidayTable>> {
        Manager::new(get_holiday_table_from_json)
    }
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::manager::manager::IManager;
    use crate::time::holiday::holidaytable::HolidayTableError;

    #[test]
    fn table_is_built_from_json() {
        let manager = HolidayTableManager::new();
        manager.insert_obj_from_json(json!({
            "name": "office",
            "holidays": [
                {"date": "2022-09-09", "days": 4},
                {"date": "2022-10-03"}
            ]
        }), &()).unwrap();
        let table = manager.get("office").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(NaiveDate::from_ymd_opt(2022, 9, 9).unwrap()), Some(4));
    }

    #[test]
    fn duplicate_holiday_fails_the_load() {
        let manager = HolidayTableManager::new();
        let err = manager.insert_obj_from_json(json!({
            "name": "office",
            "holidays": [{"date": "2022-10-03"}, {"date": "2022-10-03", "days": 2}]
        }), &()).unwrap_err();
        assert!(matches!(err, ManagerError::HolidayTableError(HolidayTableError::DuplicateDate(_))));
        assert!(!manager.contains("office"));
    }
}
