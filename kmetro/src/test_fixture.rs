use std::{path::PathBuf, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime};
use kmetro_core::dataset::{Dataset, DatasetLoader, DirectorySource};

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("kmetro-core")
        .join("test")
        .join("kochi_mini")
}

pub fn kochi_mini() -> Arc<Dataset> {
    DatasetLoader::new(Box::new(DirectorySource::new(fixture_dir())))
        .snapshot()
        .expect("fixture dataset should load")
}

/// Wednesday 2025-01-08, a WK service day
pub fn weekday_at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 8)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid test instant")
}

/// Sunday 2025-01-12, a WE service day
pub fn sunday_at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 12)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid test instant")
}
