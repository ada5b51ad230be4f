//! Normalization of the long-format vaccine export.

use chrono::NaiveDate;

use covid_ingest::{SourceTable, VACCINE_COLUMNS, blank_to_none, parse_f64};
use covid_model::{PipelineError, Result};

/// Date format of the vaccine export's `Date` column.
pub const VACCINE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One dose count keyed like the melted confirmed/deaths observations.
///
/// Doses stay decimal-capable until the final truncation after grouping,
/// because null propagation through the left-merges makes the metric
/// non-integral.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseObservation {
    pub province: Option<String>,
    pub country: String,
    pub date: NaiveDate,
    pub doses: Option<f64>,
}

/// Normalize the vaccine export to the shared (province, country, date) key
/// schema. The internal `UID` and `People_at_least_one_dose` columns are
/// dropped by never being selected.
pub fn vaccine_observations(source: &SourceTable) -> Result<Vec<DoseObservation>> {
    let table = &source.table;
    let indices = table.require_columns(&VACCINE_COLUMNS, &source.path)?;
    let (province_idx, country_idx, date_idx, doses_idx) =
        (indices[0], indices[1], indices[2], indices[3]);

    let mut observations = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let raw_date = row.get(date_idx).map(String::as_str).unwrap_or("");
        let date = NaiveDate::parse_from_str(raw_date, VACCINE_DATE_FORMAT).map_err(|_| {
            PipelineError::InvalidDate {
                value: raw_date.to_string(),
                path: source.path.clone(),
            }
        })?;
        observations.push(DoseObservation {
            province: blank_to_none(row.get(province_idx).map(String::as_str).unwrap_or("")),
            country: row
                .get(country_idx)
                .map(|value| value.trim().to_string())
                .unwrap_or_default(),
            date,
            doses: parse_f64(row.get(doses_idx).map(String::as_str).unwrap_or("")),
        });
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use covid_ingest::CsvTable;

    use super::*;

    fn vaccine_source(rows: &[&[&str]]) -> SourceTable {
        let headers = [
            "UID",
            "Province_State",
            "Country_Region",
            "Date",
            "Doses_admin",
            "People_at_least_one_dose",
        ];
        SourceTable {
            path: "vaccine.csv".into(),
            table: CsvTable {
                headers: headers.iter().map(|h| (*h).to_string()).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                    .collect(),
            },
        }
    }

    #[test]
    fn normalizes_key_columns_and_drops_extras() {
        let source = vaccine_source(&[
            &["392", "", "Japan", "2021-01-22", "1000", "800"],
            &["124", "Ontario", "Canada", "2021-01-22", "500", "400"],
        ]);
        let observations = vaccine_observations(&source).expect("normalize");
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].province, None);
        assert_eq!(observations[0].doses, Some(1000.0));
        assert_eq!(observations[1].province.as_deref(), Some("Ontario"));
        assert_eq!(
            observations[1].date,
            NaiveDate::from_ymd_opt(2021, 1, 22).expect("valid date")
        );
    }

    #[test]
    fn malformed_date_cell_fails() {
        let source = vaccine_source(&[&["392", "", "Japan", "01/22/21", "1000", "800"]]);
        let error = vaccine_observations(&source).expect_err("bad date");
        assert!(matches!(error, PipelineError::InvalidDate { .. }));
    }
}
