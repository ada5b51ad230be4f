//! Wide-to-long reshaping of the confirmed/deaths exports.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use covid_ingest::{SourceTable, WIDE_ID_COLUMNS, blank_to_none, parse_count};
use covid_model::{PipelineError, Result};

/// Date format used by the wide-table column headers, e.g. `1/22/20`.
pub const WIDE_DATE_FORMAT: &str = "%m/%d/%y";

/// One melted long-format data point, keyed by (province, country, date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub province: Option<String>,
    pub country: String,
    pub date: NaiveDate,
    pub value: Option<i64>,
}

impl Observation {
    /// The merge key shared by all three time-series sources.
    pub fn key(&self) -> (Option<String>, String, NaiveDate) {
        (self.province.clone(), self.country.clone(), self.date)
    }
}

/// Melt every date column of a wide table into row-per-date observations.
///
/// The Lat/Long identity columns are dropped; (province, country) travel
/// with each observation as the stable key. Observations come out
/// column-major: all rows of the first date column, then the next.
pub fn melt_wide(source: &SourceTable) -> Result<Vec<Observation>> {
    let table = &source.table;
    let id_indices = table.require_columns(&WIDE_ID_COLUMNS, &source.path)?;
    let province_idx = id_indices[0];
    let country_idx = id_indices[1];
    let id_set: BTreeSet<usize> = id_indices.into_iter().collect();

    let mut date_columns = Vec::with_capacity(table.headers.len().saturating_sub(id_set.len()));
    for (col, header) in table.headers.iter().enumerate() {
        if id_set.contains(&col) {
            continue;
        }
        let date = NaiveDate::parse_from_str(header, WIDE_DATE_FORMAT).map_err(|_| {
            PipelineError::InvalidDate {
                value: header.clone(),
                path: source.path.clone(),
            }
        })?;
        date_columns.push((col, date));
    }

    let mut observations = Vec::with_capacity(date_columns.len() * table.rows.len());
    for (col, date) in date_columns {
        for row in &table.rows {
            observations.push(Observation {
                province: blank_to_none(row.get(province_idx).map(String::as_str).unwrap_or("")),
                country: row
                    .get(country_idx)
                    .map(|value| value.trim().to_string())
                    .unwrap_or_default(),
                date,
                value: parse_count(row.get(col).map(String::as_str).unwrap_or("")),
            });
        }
    }
    Ok(observations)
}
