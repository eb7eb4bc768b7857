mod sequencer_tests;

use crate::calendar::BusinessCalendar;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::models::Employee;
use chrono::NaiveDate;
use std::path::PathBuf;

pub(super) fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2025-03-03, a Monday with no nearby holidays.
pub(super) fn monday() -> NaiveDate {
    ymd(2025, 3, 3)
}

pub(super) fn plain_calendar() -> BusinessCalendar {
    BusinessCalendar::new()
}

pub(super) fn employee(name: &str, area: &str, days: u32) -> Employee {
    Employee::new(name, Some(area), days)
}

fn temp_logs_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("vacaplan-scheduler-logs-{nanos}"))
}

pub(super) fn make_ctx() -> AppContext {
    let mut config = Config::default();
    config.set("HOLIDAY_CALENDAR", "none").unwrap();
    config.set("START_DATE", "2025-03-03").unwrap();
    AppContext::with_config(config, temp_logs_dir())
}
