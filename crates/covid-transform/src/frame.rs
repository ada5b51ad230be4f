//! Builders for the persisted output frames.
//!
//! Column order here defines the destination schema; the sink derives its
//! `CREATE TABLE` statements from these frames' dtypes.

use polars::prelude::{DataFrame, NamedFrom, Series};

use covid_model::{
    DAILY_REPORT_TABLE, DailyReportRecord, PipelineError, Result, TIME_SERIES_TABLE, TableFrame,
    TimeSeriesRecord,
};

/// Build the `time_series` frame: country, reported_on (`YYYY-MM-DD` string),
/// confirmed, deaths, doses_administered.
pub fn time_series_frame(records: &[TimeSeriesRecord]) -> Result<TableFrame> {
    let country: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
    let reported_on: Vec<String> = records.iter().map(TimeSeriesRecord::storage_date).collect();
    let confirmed: Vec<i64> = records.iter().map(|r| r.confirmed).collect();
    let deaths: Vec<i64> = records.iter().map(|r| r.deaths).collect();
    let doses: Vec<i64> = records.iter().map(|r| r.doses_administered).collect();

    let data = DataFrame::new(vec![
        Series::new("country".into(), country).into(),
        Series::new("reported_on".into(), reported_on).into(),
        Series::new("confirmed".into(), confirmed).into(),
        Series::new("deaths".into(), deaths).into(),
        Series::new("doses_administered".into(), doses).into(),
    ])
    .map_err(|error| PipelineError::Message(format!("time_series frame: {error}")))?;
    Ok(TableFrame::new(TIME_SERIES_TABLE, data))
}

/// Build the `daily_report` frame: country, province, county, confirmed,
/// deaths, latitude, longitude, with nullable province/county/coordinates.
pub fn daily_report_frame(records: &[DailyReportRecord]) -> Result<TableFrame> {
    let country: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
    let province: Vec<Option<&str>> = records.iter().map(|r| r.province.as_deref()).collect();
    let county: Vec<Option<&str>> = records.iter().map(|r| r.county.as_deref()).collect();
    let confirmed: Vec<i64> = records.iter().map(|r| r.confirmed).collect();
    let deaths: Vec<i64> = records.iter().map(|r| r.deaths).collect();
    let latitude: Vec<Option<f64>> = records.iter().map(|r| r.latitude).collect();
    let longitude: Vec<Option<f64>> = records.iter().map(|r| r.longitude).collect();

    let data = DataFrame::new(vec![
        Series::new("country".into(), country).into(),
        Series::new("province".into(), province).into(),
        Series::new("county".into(), county).into(),
        Series::new("confirmed".into(), confirmed).into(),
        Series::new("deaths".into(), deaths).into(),
        Series::new("latitude".into(), latitude).into(),
        Series::new("longitude".into(), longitude).into(),
    ])
    .map_err(|error| PipelineError::Message(format!("daily_report frame: {error}")))?;
    Ok(TableFrame::new(DAILY_REPORT_TABLE, data))
}
