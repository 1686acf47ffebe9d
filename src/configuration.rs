use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::time::clock::Clock;
use crate::time::holiday::holidaytable::HolidayTable;
use crate::time::holiday::holidaytablemanager::HolidayTableManager;
use crate::timetable::timetablemanager::TimetableManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_tables: Vec<serde_json::Value>,
    #[serde(default)]
    timetables: Vec<serde_json::Value>
}

/// Holiday tables and timetables loaded once at start-up.
pub struct Configuration {
    holiday_table_manager_cell: RefCell<Manager<Arc<HolidayTable>>>,
    timetable_manager_cell: RefCell<TimetableManager>
}


impl Configuration {
    pub fn new(clock: Arc<dyn Clock>) -> Configuration {
        Configuration {
            holiday_table_manager_cell: RefCell::new(HolidayTableManager::new()),
            timetable_manager_cell: RefCell::new(TimetableManager::new(clock))
        }
    }

    pub fn holiday_table_manager(&self) -> RefMut<'_, Manager<Arc<HolidayTable>>> {
        self.holiday_table_manager_cell.borrow_mut()
    }

    pub fn timetable_manager(&self) -> RefMut<'_, TimetableManager> {
        self.timetable_manager_cell.borrow_mut()
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path.as_ref())?;
        info!(path = %file_path.as_ref().display(), "loading configuration");
        self.from_json_reader(BufReader::new(file))
    }

    /// Holiday tables go first so timetables can refer to them by name.
    pub fn from_json_reader<R: Read>(&self, reader: R) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let holiday_table_manager = self.holiday_table_manager_cell.borrow_mut();
        holiday_table_manager.insert_obj_from_json_vec(&json_prop.holiday_tables, &())?;
        let timetable_manager = self.timetable_manager_cell.borrow_mut();
        timetable_manager.insert_obj_from_json_vec(&json_prop.timetables, &holiday_table_manager)?;
        info!(
            holiday_tables = json_prop.holiday_tables.len(),
            timetables = json_prop.timetables.len(),
            "configuration loaded"
        );
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use chrono::{
        TimeZone,
        Utc
    };

    use super::*;
    use crate::time::clock::FixedClock;

    const CONFIG: &str = r#"{
        "holiday_tables": [
            {"name": "office", "holidays": [{"date": "2022-09-09", "days": 4}]}
        ],
        "timetables": [
            {"name": "report", "timetable_type": "BeforeWorkday", "holiday_table": "office"},
            {"name": "builtin", "timetable_type": "BeforeWorkday"}
        ]
    }"#;

    fn configuration() -> Configuration {
        let now = Utc.with_ymd_and_hms(2022, 8, 1, 0, 0, 0).unwrap();
        Configuration::new(Arc::new(FixedClock::new(now)))
    }

    #[test]
    fn loads_tables_then_timetables() {
        let config = configuration();
        config.from_json_reader(CONFIG.as_bytes()).unwrap();
        assert_eq!(config.holiday_table_manager().get("office").unwrap().len(), 1);
        assert_eq!(config.timetable_manager().names(), vec!["builtin".to_owned(), "report".to_owned()]);
    }

    #[test]
    fn empty_document_is_accepted() {
        let config = configuration();
        config.from_json_reader("{}".as_bytes()).unwrap();
        assert!(config.timetable_manager().names().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = configuration().from_reader("/nonexistent/beforework.json").unwrap_err();
        assert!(matches!(err, ManagerError::IOError(_)));
    }
}
