//! Pipeline orchestration with explicit stages.
//!
//! 1. **Ingest**: read the four raw CSV exports
//! 2. **Transform**: melt, merge, aggregate the time series; normalize the
//!    snapshot
//! 3. **Write**: replace both destination tables in one transaction
//!
//! Any stage failure aborts the run before the write begins; there is no
//! partial-success mode.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use covid_ingest::{
    SourceTable, discover_daily_report, read_confirmed, read_daily_report, read_deaths,
    read_vaccine, report_date_from_name,
};
use covid_model::{DailyReportRecord, TimeSeriesRecord};
use covid_store::CovidStore;
use covid_transform::{
    build_daily_report, build_time_series, daily_report_frame, time_series_frame,
};

use crate::cli::BuildArgs;

/// Raw inputs of one pipeline run.
pub struct IngestResult {
    pub confirmed: SourceTable,
    pub deaths: SourceTable,
    pub vaccine: SourceTable,
    pub report: SourceTable,
    pub report_date: Option<NaiveDate>,
}

/// Transformed tables of one pipeline run.
pub struct TransformResult {
    pub time_series: Vec<TimeSeriesRecord>,
    pub daily_report: Vec<DailyReportRecord>,
}

/// What happened in a completed run, for the summary printout.
#[derive(Debug)]
pub struct RunSummary {
    pub db_path: PathBuf,
    pub report_path: PathBuf,
    pub report_date: Option<NaiveDate>,
    pub time_series_rows: usize,
    pub countries: usize,
    pub date_span: Option<(NaiveDate, NaiveDate)>,
    pub daily_report_rows: usize,
    pub elapsed: Duration,
    pub dry_run: bool,
}

/// Read the three time-series exports and the snapshot report.
pub fn ingest(args: &BuildArgs) -> Result<IngestResult> {
    let span = info_span!("ingest", data_dir = %args.data_dir.display());
    let _guard = span.enter();

    let confirmed = read_confirmed(&args.data_dir).context("read confirmed time series")?;
    let deaths = read_deaths(&args.data_dir).context("read deaths time series")?;
    let vaccine = read_vaccine(&args.data_dir).context("read vaccine time series")?;

    let report_path = match &args.report {
        Some(path) => path.clone(),
        None => {
            let (path, _) = discover_daily_report(&args.data_dir)
                .context("discover daily snapshot report")?;
            path
        }
    };
    let report_date = report_date_from_name(&report_path);
    let report = read_daily_report(&report_path).context("read daily snapshot report")?;
    Ok(IngestResult {
        confirmed,
        deaths,
        vaccine,
        report,
        report_date,
    })
}

/// Produce both output tables from the raw inputs.
pub fn transform(ingested: &IngestResult) -> Result<TransformResult> {
    let span = info_span!("transform");
    let _guard = span.enter();

    let time_series = build_time_series(&ingested.confirmed, &ingested.deaths, &ingested.vaccine)
        .context("build time series")?;
    let daily_report = build_daily_report(&ingested.report).context("build daily report")?;
    Ok(TransformResult {
        time_series,
        daily_report,
    })
}

/// Run the whole pipeline for the `build` command.
pub fn run_build(args: &BuildArgs) -> Result<RunSummary> {
    let started = Instant::now();
    let ingested = ingest(args)?;
    let transformed = transform(&ingested)?;

    let db_path = args
        .db_path
        .clone()
        .unwrap_or_else(|| args.data_dir.join("covid_19.db"));

    if args.dry_run {
        info!("dry run, skipping database write");
    } else {
        let span = info_span!("write", db = %db_path.display());
        let _guard = span.enter();
        let frames = [
            time_series_frame(&transformed.time_series).context("build time_series frame")?,
            daily_report_frame(&transformed.daily_report).context("build daily_report frame")?,
        ];
        let mut store = CovidStore::open(&db_path).context("open destination store")?;
        store.replace_all(&frames).context("replace tables")?;
    }

    let countries = {
        // Records are sorted by country, so distinct countries are adjacent.
        let mut count = 0usize;
        let mut last: Option<&str> = None;
        for record in &transformed.time_series {
            if last != Some(record.country.as_str()) {
                count += 1;
                last = Some(record.country.as_str());
            }
        }
        count
    };
    let date_span = {
        let dates: Vec<NaiveDate> = transformed
            .time_series
            .iter()
            .map(|r| r.reported_on)
            .collect();
        dates
            .iter()
            .min()
            .copied()
            .zip(dates.iter().max().copied())
    };

    Ok(RunSummary {
        db_path,
        report_path: ingested.report.path.clone(),
        report_date: ingested.report_date,
        time_series_rows: transformed.time_series.len(),
        countries,
        date_span,
        daily_report_rows: transformed.daily_report.len(),
        elapsed: started.elapsed(),
        dry_run: args.dry_run,
    })
}
