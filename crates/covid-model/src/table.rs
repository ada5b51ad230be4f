//! Named table frames handed to the persistence sink.

use polars::prelude::DataFrame;

/// Destination table name for the country-level time series.
pub const TIME_SERIES_TABLE: &str = "time_series";

/// Destination table name for the per-location snapshot.
pub const DAILY_REPORT_TABLE: &str = "daily_report";

/// A finished output table ready for persistence.
///
/// The destination schema is implied by the frame's column names and dtypes;
/// the sink performs no schema migration of its own.
#[derive(Debug, Clone)]
pub struct TableFrame {
    /// Destination table name.
    pub name: String,
    /// The table contents as a Polars DataFrame.
    pub data: DataFrame,
}

impl TableFrame {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Number of rows in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}
