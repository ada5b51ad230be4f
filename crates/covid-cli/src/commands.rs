//! Subcommand entry points.

use anyhow::{Context, Result};

use covid_store::CovidStore;

use crate::cli::TablesArgs;
use crate::summary::{print_daily_report_preview, print_time_series_preview};

/// Read both destination tables back and print previews.
pub fn run_tables(args: &TablesArgs) -> Result<()> {
    let store = CovidStore::open(&args.db_path).context("open database")?;
    let time_series = store.load_time_series().context("load time_series")?;
    let daily_report = store.load_daily_report().context("load daily_report")?;
    print_time_series_preview(&time_series, args.limit);
    print_daily_report_preview(&daily_report, args.limit);
    Ok(())
}
