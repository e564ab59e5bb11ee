#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use findash_core::{
    config::{Config, ConfigManager},
    time::FixedClock,
    Dashboard,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Seeded dashboard pinned to 2024-08-01, with a config manager rooted in a temp dir
/// that lives for the rest of the test run.
pub fn setup_test_env() -> (Dashboard, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");
    TEST_DIRS.lock().expect("lock test dirs").push(temp);

    let config = manager.load().unwrap_or_else(|_| Config::default());
    let dashboard = Dashboard::seeded(Arc::new(FixedClock::new(today())), config);
    (dashboard, manager)
}
