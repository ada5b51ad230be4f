//! Snapshot report normalization.
//!
//! Pure column selection and renaming; the rows are already at the desired
//! mixed country/province/county granularity, so no merge or aggregation
//! happens here and row order is preserved.

use tracing::info;

use covid_ingest::{REPORT_COLUMNS, SourceTable, blank_to_none, parse_count, parse_f64};
use covid_model::{DailyReportRecord, Result};

/// Normalize the snapshot report into `daily_report` records.
pub fn build_daily_report(source: &SourceTable) -> Result<Vec<DailyReportRecord>> {
    let table = &source.table;
    let indices = table.require_columns(&REPORT_COLUMNS, &source.path)?;
    let (country_idx, province_idx, county_idx) = (indices[0], indices[1], indices[2]);
    let (confirmed_idx, deaths_idx, lat_idx, long_idx) =
        (indices[3], indices[4], indices[5], indices[6]);

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
        records.push(DailyReportRecord {
            country: cell(country_idx).trim().to_string(),
            province: blank_to_none(cell(province_idx)),
            county: blank_to_none(cell(county_idx)),
            // Blank counts read as zero; coordinates stay absent when blank.
            confirmed: parse_count(cell(confirmed_idx)).unwrap_or(0),
            deaths: parse_count(cell(deaths_idx)).unwrap_or(0),
            latitude: parse_f64(cell(lat_idx)),
            longitude: parse_f64(cell(long_idx)),
        });
    }
    info!(rows = records.len(), "built daily report");
    Ok(records)
}
