use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;
use crate::manager::namedobject::NamedJsonObject;
use crate::time::clock::Clock;
use crate::time::holiday::holidaytable::HolidayTable;
use crate::timetable::beforeworkdaytimetable::BeforeWorkdayTimetable;
use crate::timetable::holidayskip::HolidaySkip;
use crate::timetable::timetable::Timetable;

#[derive(Deserialize)]
enum TimetableType {
    BeforeWorkday
}

#[derive(Deserialize)]
struct TimetableTypedObject {
    timetable_type: TimetableType
}

#[derive(Deserialize)]
struct BeforeWorkdayTimetableJsonProp {
    /// Omitted means the builtin table.
    #[serde(default)]
    holiday_table: Option<String>,
    #[serde(default)]
    holiday_skip: HolidaySkip
}

/// Builds timetables from JSON, resolving holiday tables by name.
pub struct TimetableManager {
    map_cell: RefCell<HashMap<String, Arc<dyn Timetable>>>,
    clock: Arc<dyn Clock>
}

impl TimetableManager {
    pub fn new(clock: Arc<dyn Clock>) -> TimetableManager {
        TimetableManager { map_cell: RefCell::new(HashMap::new()), clock }
    }

    fn before_workday_from_json(&self,
                                json_value: serde_json::Value,
                                holiday_tables: &Manager<Arc<HolidayTable>>) -> Result<Arc<dyn Timetable>, ManagerError> {
        let json_prop: BeforeWorkdayTimetableJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let holidays = match json_prop.holiday_table {
            Some(name) => holiday_tables.get(&name)?,
            None => HolidayTable::builtin()
        };
        let timetable = BeforeWorkdayTimetable::new(holidays, json_prop.holiday_skip, Arc::clone(&self.clock));
        Ok(Arc::new(timetable))
    }
}

impl IManager<Arc<dyn Timetable>, Manager<Arc<HolidayTable>>> for TimetableManager {
    fn map(&self) -> RefMut<'_, HashMap<String, Arc<dyn Timetable>>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &Manager<Arc<HolidayTable>>) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let typed_obj: TimetableTypedObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let timetable = match typed_obj.timetable_type {
            TimetableType::BeforeWorkday => self.before_workday_from_json(json_value, supports)?
        };
        self.insert(named_obj.name(), timetable)
    }
}
