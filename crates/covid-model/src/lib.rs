pub mod error;
pub mod location;
pub mod record;
pub mod table;

pub use error::{PipelineError, Result};
pub use location::Location;
pub use record::{DATE_STORAGE_FORMAT, DailyReportRecord, TimeSeriesRecord};
pub use table::{DAILY_REPORT_TABLE, TIME_SERIES_TABLE, TableFrame};

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn report_row(province: Option<&str>, county: Option<&str>) -> DailyReportRecord {
        DailyReportRecord {
            country: "Canada".to_string(),
            province: province.map(str::to_string),
            county: county.map(str::to_string),
            confirmed: 100,
            deaths: 2,
            latitude: Some(51.2538),
            longitude: Some(-85.3232),
        }
    }

    #[test]
    fn location_resolves_most_specific_first() {
        let country = report_row(None, None);
        assert_eq!(country.location().label(), "Canada");

        let province = report_row(Some("Ontario"), None);
        assert_eq!(
            province.location(),
            Location::Province {
                country: "Canada".to_string(),
                province: "Ontario".to_string(),
            }
        );
        assert_eq!(province.location().label(), "Ontario, Canada");

        let county = report_row(Some("Ontario"), Some("Toronto"));
        assert_eq!(county.location().label(), "Toronto, Ontario, Canada");
        assert_eq!(county.location().country(), "Canada");
    }

    #[test]
    fn county_without_province_degrades_to_country() {
        let odd = report_row(None, Some("Orphan"));
        assert_eq!(odd.location().label(), "Canada");
    }

    #[test]
    fn storage_date_is_sortable() {
        let record = TimeSeriesRecord {
            country: "Japan".to_string(),
            reported_on: NaiveDate::from_ymd_opt(2023, 3, 9).expect("valid date"),
            confirmed: 33_320_438,
            deaths: 73_049,
            doses_administered: 382_749_334,
        };
        assert_eq!(record.storage_date(), "2023-03-09");

        let earlier = NaiveDate::from_ymd_opt(2022, 12, 31).expect("valid date");
        assert!(earlier.format(DATE_STORAGE_FORMAT).to_string() < record.storage_date());
    }

    #[test]
    fn time_series_record_serializes() {
        let record = TimeSeriesRecord {
            country: "Taiwan*".to_string(),
            reported_on: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
            confirmed: 10,
            deaths: 1,
            doses_administered: 0,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: TimeSeriesRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
