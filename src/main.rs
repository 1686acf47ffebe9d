use std::env;
use std::sync::Arc;

use chrono::{
    TimeZone,
    Utc
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use beforework::configuration::Configuration;
use beforework::manager::manager::IManager;
use beforework::manager::managererror::ManagerError;
use beforework::time::clock::SystemClock;
use beforework::timetable::datainterval::DataInterval;
use beforework::timetable::runinfo::ScheduleDecision;
use beforework::timetable::timerestriction::TimeRestriction;

const DEFAULT_CONFIG_PATH: &str = "json/config.json";
const TIMETABLE_NAME: &str = "example_workday_timetable_dag";
const DEFAULT_CYCLES: usize = 30;

fn main() -> Result<(), ManagerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let cycles = args
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_CYCLES);

    let config = Configuration::new(Arc::new(SystemClock));
    config.from_reader(&config_path)?;
    let timetable = config
        .timetable_manager()
        .get(TIMETABLE_NAME)?;

    let start_date = Utc.with_ymd_and_hms(2022, 8, 25, 0, 0, 0).single();
    let restriction = TimeRestriction::new(start_date, None, true);
    let mut last: Option<DataInterval> = None;
    println!("{} ({})", TIMETABLE_NAME, timetable.summary());
    for _ in 0..cycles {
        match timetable.next_run_info(last.as_ref(), &restriction) {
            ScheduleDecision::Schedule(info) => {
                let interval = info.data_interval();
                println!("{}, {}, {}",
                         interval.start().format("%a %Y-%m-%d"),
                         interval.end().format("%a %Y-%m-%d"),
                         info.run_after());
                last = Some(*interval);
            },
            ScheduleDecision::NoRun(reason) => {
                warn!(%reason, "stopped");
                break;
            }
        }
    }
    Ok(())
}
