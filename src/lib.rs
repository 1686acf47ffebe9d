pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod clock;

    pub mod holiday {
        pub mod holiday;
        pub mod holidaytable;
        pub mod holidaytablemanager;
    }
}

pub mod timetable {
    pub mod datainterval;
    pub mod timerestriction;
    pub mod runinfo;
    pub mod timetable;
    pub mod holidayskip;
    pub mod beforeworkdaytimetable;
    pub mod timetablemanager;
    pub mod timetableplugin;
}
