//! Reshape-and-merge of the three time-series sources.
//!
//! The confirmed table anchors the merge: its (province, country, date) keys
//! define which rows exist at all. Deaths and doses are looked up per key and
//! folded straight into one accumulator per (country, date), so the merged
//! provincial-level table is never materialized. Deaths or doses for keys
//! absent from confirmed are lost; this asymmetry is a preserved property of
//! the merge order, not a bug.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::{debug, info};

use covid_ingest::SourceTable;
use covid_model::{Result, TimeSeriesRecord};

use crate::melt::melt_wide;
use crate::vaccine::vaccine_observations;

type MergeKey = (Option<String>, String, NaiveDate);

#[derive(Debug, Default, Clone, Copy)]
struct CountryDayTotals {
    confirmed: i64,
    deaths: i64,
    doses: f64,
}

/// Build the country-level time series from the three raw sources.
///
/// Output is one record per (country, reported_on), ordered by country then
/// date, with provincial values summed away. Missing deaths/doses contribute
/// zero to the sums; the summed doses are truncated to an integer at the end.
pub fn build_time_series(
    confirmed: &SourceTable,
    deaths: &SourceTable,
    vaccine: &SourceTable,
) -> Result<Vec<TimeSeriesRecord>> {
    let confirmed_observations = melt_wide(confirmed)?;
    let death_observations = melt_wide(deaths)?;
    let dose_observations = vaccine_observations(vaccine)?;
    debug!(
        confirmed = confirmed_observations.len(),
        deaths = death_observations.len(),
        doses = dose_observations.len(),
        "melted time-series sources"
    );

    // Lookup sides of the two left-merges. A duplicate key keeps the last
    // occurrence; unique keys per source are an input-quality assumption.
    let mut deaths_by_key: HashMap<MergeKey, Option<i64>> =
        HashMap::with_capacity(death_observations.len());
    for observation in death_observations {
        deaths_by_key.insert(observation.key(), observation.value);
    }
    let mut doses_by_key: HashMap<MergeKey, Option<f64>> =
        HashMap::with_capacity(dose_observations.len());
    for observation in dose_observations {
        doses_by_key.insert(
            (
                observation.province.clone(),
                observation.country.clone(),
                observation.date,
            ),
            observation.doses,
        );
    }

    // Merge-then-aggregate in a single pass over the anchor rows. The BTreeMap
    // gives the deterministic (country, date) output order.
    let mut grouped: BTreeMap<(String, NaiveDate), CountryDayTotals> = BTreeMap::new();
    for observation in confirmed_observations {
        let key = observation.key();
        let death_value = deaths_by_key.get(&key).copied().flatten();
        let dose_value = doses_by_key.get(&key).copied().flatten();
        let totals = grouped
            .entry((observation.country, observation.date))
            .or_default();
        totals.confirmed += observation.value.unwrap_or(0);
        totals.deaths += death_value.unwrap_or(0);
        totals.doses += dose_value.unwrap_or(0.0);
    }

    let records: Vec<TimeSeriesRecord> = grouped
        .into_iter()
        .map(|((country, reported_on), totals)| TimeSeriesRecord {
            country,
            reported_on,
            confirmed: totals.confirmed,
            deaths: totals.deaths,
            // Truncation, not rounding: matches integer coercion of the
            // decimal-capable dose sum.
            doses_administered: totals.doses as i64,
        })
        .collect();
    info!(rows = records.len(), "built time series");
    Ok(records)
}
