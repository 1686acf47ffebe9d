use std::sync::Arc;

use crate::timetable::beforeworkdaytimetable::BeforeWorkdayTimetable;
use crate::timetable::timetable::Timetable;

pub const WORKDAY_PLUGIN_NAME: &str = "workday_timetable_plugin";

/// The set of timetables a host can register under one plugin name.
pub struct TimetablePlugin {
    name: String,
    timetables: Vec<Arc<dyn Timetable>>
}

impl TimetablePlugin {
    pub fn new(name: String, timetables: Vec<Arc<dyn Timetable>>) -> TimetablePlugin {
        TimetablePlugin { name, timetables }
    }

    /// `workday_timetable_plugin` carrying the before-workday timetable over
    /// the builtin holidays.
    pub fn workday() -> TimetablePlugin {
        let timetable: Arc<dyn Timetable> = Arc::new(BeforeWorkdayTimetable::with_builtin_holidays());
        TimetablePlugin::new(WORKDAY_PLUGIN_NAME.to_owned(), vec![timetable])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timetables(&self) -> &[Arc<dyn Timetable>] {
        &self.timetables
    }

    pub fn find(&self, summary: &str) -> Option<Arc<dyn Timetable>> {
        self.timetables
            .iter()
            .find(|t| t.summary() == summary)
            .cloned()
    }
}
