//! Console output for the build summary and table previews.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use covid_model::{DailyReportRecord, TimeSeriesRecord};

use crate::pipeline::RunSummary;

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn print_summary(summary: &RunSummary) {
    if summary.dry_run {
        println!("Dry run, database not written.");
    } else {
        println!("Database: {}", summary.db_path.display());
    }
    println!("Snapshot: {}", summary.report_path.display());

    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Detail"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);

    let span = match summary.date_span {
        Some((first, last)) => format!("{} countries, {first} to {last}", summary.countries),
        None => format!("{} countries", summary.countries),
    };
    table.add_row(vec![
        Cell::new("time_series"),
        Cell::new(summary.time_series_rows),
        Cell::new(span),
    ]);
    let report_detail = match summary.report_date {
        Some(date) => format!("reporting date {date}"),
        None => "reporting date unknown".to_string(),
    };
    table.add_row(vec![
        Cell::new("daily_report"),
        Cell::new(summary.daily_report_rows),
        Cell::new(report_detail),
    ]);
    println!("{table}");
    println!("Completed in {:.2}s", summary.elapsed.as_secs_f64());
}

pub fn print_time_series_preview(records: &[TimeSeriesRecord], limit: usize) {
    println!("time_series: {} rows", records.len());
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Reported on"),
        header_cell("Confirmed"),
        header_cell("Deaths"),
        header_cell("Doses"),
    ]);
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records.iter().take(limit) {
        table.add_row(vec![
            Cell::new(&record.country),
            Cell::new(record.storage_date()),
            Cell::new(record.confirmed),
            Cell::new(record.deaths),
            Cell::new(record.doses_administered),
        ]);
    }
    println!("{table}");
}

pub fn print_daily_report_preview(records: &[DailyReportRecord], limit: usize) {
    println!("daily_report: {} rows", records.len());
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Location"),
        header_cell("Confirmed"),
        header_cell("Deaths"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for record in records.iter().take(limit) {
        table.add_row(vec![
            Cell::new(record.location().label()),
            Cell::new(record.confirmed),
            Cell::new(record.deaths),
        ]);
    }
    println!("{table}");
}
