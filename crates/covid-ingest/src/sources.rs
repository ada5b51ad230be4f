//! Readers for the four fixed-name COVID-19 source exports.
//!
//! Each reader validates the expected column set up front and returns the
//! table verbatim; no value transformation happens here.

use std::path::{Path, PathBuf};

use tracing::debug;

use covid_model::Result;

use crate::csv_table::{CsvTable, read_csv_table};

pub const CONFIRMED_FILE: &str = "time_series_covid19_confirmed_global.csv";
pub const DEATHS_FILE: &str = "time_series_covid19_deaths_global.csv";
pub const VACCINE_FILE: &str = "time_series_covid19_vaccine_global.csv";

/// Identity columns of the wide-format confirmed/deaths exports.
/// Every remaining column is a `month/day/2-digit-year` date header.
pub const WIDE_ID_COLUMNS: [&str; 4] = ["Province/State", "Country/Region", "Lat", "Long"];

/// Columns of the long-format vaccine export that survive normalization.
/// `UID` and `People_at_least_one_dose` are dropped by the transform layer.
pub const VACCINE_COLUMNS: [&str; 4] = ["Province_State", "Country_Region", "Date", "Doses_admin"];

/// Snapshot columns, in the order they map onto the `daily_report` schema.
pub const REPORT_COLUMNS: [&str; 7] = [
    "Country_Region",
    "Province_State",
    "Admin2",
    "Confirmed",
    "Deaths",
    "Lat",
    "Long_",
];

/// A source table together with the path it was read from, for error context.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub path: PathBuf,
    pub table: CsvTable,
}

fn read_source(path: PathBuf, required: &[&str]) -> Result<SourceTable> {
    let table = read_csv_table(&path)?;
    table.require_columns(required, &path)?;
    debug!(path = %path.display(), rows = table.rows.len(), "read source table");
    Ok(SourceTable { path, table })
}

/// Read the wide-format confirmed-cases export.
pub fn read_confirmed(data_dir: &Path) -> Result<SourceTable> {
    read_source(data_dir.join(CONFIRMED_FILE), &WIDE_ID_COLUMNS)
}

/// Read the wide-format deaths export (same schema as confirmed).
pub fn read_deaths(data_dir: &Path) -> Result<SourceTable> {
    read_source(data_dir.join(DEATHS_FILE), &WIDE_ID_COLUMNS)
}

/// Read the long-format vaccine-doses export.
pub fn read_vaccine(data_dir: &Path) -> Result<SourceTable> {
    read_source(data_dir.join(VACCINE_FILE), &VACCINE_COLUMNS)
}

/// Read a single-day snapshot report from an explicit path.
pub fn read_daily_report(path: &Path) -> Result<SourceTable> {
    read_source(path.to_path_buf(), &REPORT_COLUMNS)
}
