pub mod csv_table;
pub mod discovery;
pub mod sources;
pub mod value;

pub use csv_table::{CsvTable, read_csv_table};
pub use discovery::{REPORT_DATE_FORMAT, discover_daily_report, report_date_from_name};
pub use sources::{
    CONFIRMED_FILE, DEATHS_FILE, REPORT_COLUMNS, SourceTable, VACCINE_COLUMNS, VACCINE_FILE,
    WIDE_ID_COLUMNS, read_confirmed, read_daily_report, read_deaths, read_vaccine,
};
pub use value::{blank_to_none, parse_count, parse_f64, parse_i64};
