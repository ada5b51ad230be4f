//! Persisted record types for the two output tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage format for calendar dates.
///
/// The destination store has no native date type, so dates are persisted as
/// zero-padded `YYYY-MM-DD` strings. Lexical ordering of the stored strings
/// matches chronological ordering.
pub const DATE_STORAGE_FORMAT: &str = "%Y-%m-%d";

/// One row of the `time_series` table: cumulative country-level counts for a
/// single reporting date.
///
/// After aggregation exactly one record exists per (country, reported_on)
/// pair. Counts are cumulative-to-date; monotonicity across dates is a
/// property of the source data, not enforced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    pub country: String,
    pub reported_on: NaiveDate,
    pub confirmed: i64,
    pub deaths: i64,
    pub doses_administered: i64,
}

impl TimeSeriesRecord {
    /// The reporting date as stored, `YYYY-MM-DD`.
    pub fn storage_date(&self) -> String {
        self.reported_on.format(DATE_STORAGE_FORMAT).to_string()
    }
}

/// One row of the `daily_report` table: a single administrative unit's
/// snapshot at the reporting date embedded in the source file name.
///
/// Granularity varies per row. Country-level rows carry neither province nor
/// county, province-level rows carry no county, county-level rows carry all
/// three. Blank source cells become `None`, never empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReportRecord {
    pub country: String,
    pub province: Option<String>,
    pub county: Option<String>,
    pub confirmed: i64,
    pub deaths: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
