//! Snapshot location granularity.

use crate::record::DailyReportRecord;

/// The administrative granularity of a snapshot row, chosen by which optional
/// fields are present, most specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Country {
        country: String,
    },
    Province {
        country: String,
        province: String,
    },
    County {
        country: String,
        province: String,
        county: String,
    },
}

impl Location {
    /// Display label for the location, most specific field first.
    pub fn label(&self) -> String {
        match self {
            Location::Country { country } => country.clone(),
            Location::Province { country, province } => format!("{province}, {country}"),
            Location::County {
                country,
                province,
                county,
            } => format!("{county}, {province}, {country}"),
        }
    }

    pub fn country(&self) -> &str {
        match self {
            Location::Country { country }
            | Location::Province { country, .. }
            | Location::County { country, .. } => country,
        }
    }
}

impl DailyReportRecord {
    /// Resolve the row's granularity from its present fields.
    ///
    /// A county without a province does not occur in the source; such a row
    /// degrades to country level rather than inventing a province.
    pub fn location(&self) -> Location {
        match (&self.province, &self.county) {
            (Some(province), Some(county)) => Location::County {
                country: self.country.clone(),
                province: province.clone(),
                county: county.clone(),
            },
            (Some(province), None) => Location::Province {
                country: self.country.clone(),
                province: province.clone(),
            },
            _ => Location::Country {
                country: self.country.clone(),
            },
        }
    }
}
