pub mod daily_report;
pub mod frame;
pub mod melt;
pub mod time_series;
pub mod vaccine;

pub use daily_report::build_daily_report;
pub use frame::{daily_report_frame, time_series_frame};
pub use melt::{Observation, WIDE_DATE_FORMAT, melt_wide};
pub use time_series::build_time_series;
pub use vaccine::{DoseObservation, VACCINE_DATE_FORMAT, vaccine_observations};
