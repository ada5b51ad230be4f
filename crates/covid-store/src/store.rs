//! DuckDB-backed persistence.
//!
//! [`CovidStore`] is the explicit data-access handle: constructed once at
//! process start, it owns the connection for both the replace-style writes of
//! the pipeline and the two full-table reads the presentation layer issues.

use std::path::Path;

use chrono::NaiveDate;
use duckdb::types::Value;
use duckdb::{Connection, Transaction, params_from_iter};
use polars::prelude::{AnyValue, DataType};
use tracing::{debug, info};

use covid_model::{
    DAILY_REPORT_TABLE, DATE_STORAGE_FORMAT, DailyReportRecord, PipelineError, Result,
    TIME_SERIES_TABLE, TableFrame, TimeSeriesRecord,
};

/// Data-access handle over the destination store.
pub struct CovidStore {
    connection: Connection,
}

fn write_failure(error: duckdb::Error) -> PipelineError {
    PipelineError::WriteFailure(error.to_string())
}

fn query_failure(error: duckdb::Error) -> PipelineError {
    PipelineError::Message(format!("store query failed: {error}"))
}

impl CovidStore {
    /// Open (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let connection = Connection::open(path).map_err(write_failure)?;
        Ok(Self { connection })
    }

    /// Open a transient in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(write_failure)?;
        Ok(Self { connection })
    }

    /// Replace the destination tables with the given frames.
    ///
    /// All drops, creates, and inserts run inside one transaction, so a
    /// reader never observes a half-replaced store; on failure the
    /// transaction rolls back and the prior contents survive.
    pub fn replace_all(&mut self, frames: &[TableFrame]) -> Result<()> {
        let tx = self.connection.transaction().map_err(write_failure)?;
        for frame in frames {
            replace_table(&tx, frame)?;
        }
        tx.commit().map_err(write_failure)?;
        info!(tables = frames.len(), "replaced destination tables");
        Ok(())
    }

    /// Full read of the `time_series` table, ordered by (country, date).
    pub fn load_time_series(&self) -> Result<Vec<TimeSeriesRecord>> {
        let mut statement = self
            .connection
            .prepare(&format!(
                "SELECT country, reported_on, confirmed, deaths, doses_administered \
                 FROM {TIME_SERIES_TABLE} ORDER BY country, reported_on"
            ))
            .map_err(query_failure)?;
        let rows = statement
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })
            .map_err(query_failure)?;

        let mut records = Vec::new();
        for row in rows {
            let (country, stored_date, confirmed, deaths, doses_administered) =
                row.map_err(query_failure)?;
            let reported_on = NaiveDate::parse_from_str(&stored_date, DATE_STORAGE_FORMAT)
                .map_err(|_| PipelineError::InvalidDate {
                    value: stored_date,
                    path: TIME_SERIES_TABLE.into(),
                })?;
            records.push(TimeSeriesRecord {
                country,
                reported_on,
                confirmed,
                deaths,
                doses_administered,
            });
        }
        Ok(records)
    }

    /// Full read of the `daily_report` table in insertion order.
    pub fn load_daily_report(&self) -> Result<Vec<DailyReportRecord>> {
        let mut statement = self
            .connection
            .prepare(&format!(
                "SELECT country, province, county, confirmed, deaths, latitude, longitude \
                 FROM {DAILY_REPORT_TABLE}"
            ))
            .map_err(query_failure)?;
        let rows = statement
            .query_map([], |row| {
                Ok(DailyReportRecord {
                    country: row.get(0)?,
                    province: row.get(1)?,
                    county: row.get(2)?,
                    confirmed: row.get(3)?,
                    deaths: row.get(4)?,
                    latitude: row.get(5)?,
                    longitude: row.get(6)?,
                })
            })
            .map_err(query_failure)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(query_failure)?);
        }
        Ok(records)
    }
}

/// Drop-and-recreate one destination table from a frame.
///
/// The column list of the `CREATE TABLE` comes straight from the frame's
/// dtypes; there is no schema migration beyond the full replace.
fn replace_table(tx: &Transaction<'_>, frame: &TableFrame) -> Result<()> {
    let table = quote_identifier(&frame.name);
    tx.execute(&format!("DROP TABLE IF EXISTS {table}"), [])
        .map_err(write_failure)?;

    let columns = frame.data.get_columns();
    let column_sql: Vec<String> = columns
        .iter()
        .map(|column| {
            format!(
                "{} {}",
                quote_identifier(column.name()),
                sql_type(column.dtype())
            )
        })
        .collect();
    tx.execute(
        &format!("CREATE TABLE {table} ({})", column_sql.join(", ")),
        [],
    )
    .map_err(write_failure)?;

    let placeholders = vec!["?"; columns.len()].join(", ");
    let mut insert = tx
        .prepare(&format!("INSERT INTO {table} VALUES ({placeholders})"))
        .map_err(write_failure)?;
    for idx in 0..frame.data.height() {
        let values: Result<Vec<Value>> = columns
            .iter()
            .map(|column| {
                column
                    .get(idx)
                    .map(any_to_value)
                    .map_err(|error| PipelineError::Message(format!("row {idx}: {error}")))
            })
            .collect();
        insert
            .execute(params_from_iter(values?))
            .map_err(write_failure)?;
    }
    debug!(table = %frame.name, rows = frame.record_count(), "wrote table");
    Ok(())
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sql_type(dtype: &DataType) -> &'static str {
    match dtype {
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => "BIGINT",
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => "BIGINT",
        DataType::Float32 | DataType::Float64 => "DOUBLE",
        DataType::Boolean => "BOOLEAN",
        _ => "VARCHAR",
    }
}

fn any_to_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Boolean(v),
        AnyValue::Int8(v) => Value::BigInt(i64::from(v)),
        AnyValue::Int16(v) => Value::BigInt(i64::from(v)),
        AnyValue::Int32(v) => Value::BigInt(i64::from(v)),
        AnyValue::Int64(v) => Value::BigInt(v),
        AnyValue::UInt8(v) => Value::BigInt(i64::from(v)),
        AnyValue::UInt16(v) => Value::BigInt(i64::from(v)),
        AnyValue::UInt32(v) => Value::BigInt(i64::from(v)),
        AnyValue::UInt64(v) => Value::BigInt(v as i64),
        AnyValue::Float32(v) => Value::Double(f64::from(v)),
        AnyValue::Float64(v) => Value::Double(v),
        AnyValue::String(v) => Value::Text(v.to_string()),
        AnyValue::StringOwned(v) => Value::Text(v.to_string()),
        other => Value::Text(other.to_string()),
    }
}
