//! Snapshot report discovery.
//!
//! The daily report's reporting date is embedded in its file name as
//! `MM-DD-YYYY.csv`. Discovery scans the data directory and picks the newest
//! matching file, so a refreshed export is picked up without configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use covid_model::{PipelineError, Result};

/// Date format embedded in snapshot file names.
pub const REPORT_DATE_FORMAT: &str = "%m-%d-%Y";

/// Parse the reporting date out of a snapshot file name, if it matches.
pub fn report_date_from_name(path: &Path) -> Option<NaiveDate> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    NaiveDate::parse_from_str(stem, REPORT_DATE_FORMAT).ok()
}

/// Locate the newest daily snapshot report in the data directory.
pub fn discover_daily_report(data_dir: &Path) -> Result<(PathBuf, NaiveDate)> {
    let mut newest: Option<(PathBuf, NaiveDate)> = None;
    for entry in std::fs::read_dir(data_dir)? {
        let path = entry?.path();
        let Some(date) = report_date_from_name(&path) else {
            continue;
        };
        match &newest {
            Some((_, seen)) if *seen >= date => {}
            _ => newest = Some((path, date)),
        }
    }
    match newest {
        Some((path, date)) => {
            debug!(path = %path.display(), %date, "discovered daily report");
            Ok((path, date))
        }
        None => Err(PipelineError::SourceNotFound {
            path: data_dir.to_path_buf(),
        }),
    }
}
