//! Merge and aggregation behavior of the time-series engine.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use covid_ingest::{CsvTable, SourceTable};
use covid_transform::{build_time_series, time_series_frame};

fn source(name: &str, headers: &[&str], rows: &[&[&str]]) -> SourceTable {
    SourceTable {
        path: name.into(),
        table: CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        },
    }
}

fn wide(name: &str, rows: &[&[&str]]) -> SourceTable {
    source(
        name,
        &["Province/State", "Country/Region", "Lat", "Long", "1/1/23"],
        rows,
    )
}

fn vaccine(rows: &[&[&str]]) -> SourceTable {
    source(
        "vaccine.csv",
        &[
            "UID",
            "Province_State",
            "Country_Region",
            "Date",
            "Doses_admin",
            "People_at_least_one_dose",
        ],
        rows,
    )
}

fn empty_vaccine() -> SourceTable {
    vaccine(&[])
}

#[test]
fn provinces_sum_and_partial_deaths_merge() {
    // Two provinces of X confirmed; deaths known only for province A.
    let confirmed = wide(
        "confirmed.csv",
        &[
            &["A", "X", "1.0", "2.0", "10"],
            &["B", "X", "3.0", "4.0", "5"],
        ],
    );
    let deaths = wide("deaths.csv", &[&["A", "X", "1.0", "2.0", "1"]]);

    let records = build_time_series(&confirmed, &deaths, &empty_vaccine()).expect("build");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.country, "X");
    assert_eq!(
        record.reported_on,
        NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
    );
    assert_eq!(record.confirmed, 15);
    assert_eq!(record.deaths, 1);
    assert_eq!(record.doses_administered, 0);
}

#[test]
fn single_province_country_is_unchanged_by_summation() {
    let confirmed = wide("confirmed.csv", &[&["", "Japan", "36.2", "138.2", "42"]]);
    let deaths = wide("deaths.csv", &[&["", "Japan", "36.2", "138.2", "3"]]);
    let vaccine = vaccine(&[&["392", "", "Japan", "2023-01-01", "7", "5"]]);

    let records = build_time_series(&confirmed, &deaths, &vaccine).expect("build");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].confirmed, 42);
    assert_eq!(records[0].deaths, 3);
    assert_eq!(records[0].doses_administered, 7);
}

#[test]
fn confirmed_coverage_anchors_the_merge() {
    // Deaths carry a country absent from confirmed; it must not surface.
    let confirmed = wide("confirmed.csv", &[&["", "X", "1.0", "2.0", "10"]]);
    let deaths = wide(
        "deaths.csv",
        &[&["", "X", "1.0", "2.0", "1"], &["", "Y", "5.0", "6.0", "9"]],
    );

    let records = build_time_series(&confirmed, &deaths, &empty_vaccine()).expect("build");
    let countries: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(countries, vec!["X"]);
}

#[test]
fn output_keys_are_unique_and_ordered() {
    let confirmed = source(
        "confirmed.csv",
        &["Province/State", "Country/Region", "Lat", "Long", "1/2/23", "1/1/23"],
        &[
            &["A", "X", "1.0", "2.0", "12", "10"],
            &["B", "X", "3.0", "4.0", "6", "5"],
            &["", "Albania", "41.1", "20.1", "2", "1"],
        ],
    );
    let deaths = source(
        "deaths.csv",
        &["Province/State", "Country/Region", "Lat", "Long", "1/2/23", "1/1/23"],
        &[],
    );

    let records = build_time_series(&confirmed, &deaths, &empty_vaccine()).expect("build");
    let keys: Vec<(String, NaiveDate)> = records
        .iter()
        .map(|r| (r.country.clone(), r.reported_on))
        .collect();
    let unique: BTreeSet<&(String, NaiveDate)> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len());

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "output ordered by country then date");
    assert_eq!(records[0].country, "Albania");
}

#[test]
fn doses_stay_integral_with_partial_vaccine_coverage() {
    // Province B has no vaccine record at all; its contribution is zero.
    let confirmed = wide(
        "confirmed.csv",
        &[
            &["A", "X", "1.0", "2.0", "10"],
            &["B", "X", "3.0", "4.0", "5"],
        ],
    );
    let deaths = wide("deaths.csv", &[]);
    let vaccine = vaccine(&[&["1", "A", "X", "2023-01-01", "1234", "900"]]);

    let records = build_time_series(&confirmed, &deaths, &vaccine).expect("build");
    assert_eq!(records[0].doses_administered, 1234);
    assert!(records[0].doses_administered >= 0);
}

#[test]
fn fractional_dose_sum_truncates() {
    let confirmed = wide(
        "confirmed.csv",
        &[
            &["A", "X", "1.0", "2.0", "1"],
            &["B", "X", "3.0", "4.0", "1"],
        ],
    );
    let deaths = wide("deaths.csv", &[]);
    let vaccine = vaccine(&[
        &["1", "A", "X", "2023-01-01", "1.5", ""],
        &["2", "B", "X", "2023-01-01", "1.4", ""],
    ]);

    let records = build_time_series(&confirmed, &deaths, &vaccine).expect("build");
    assert_eq!(records[0].doses_administered, 2);
}

#[test]
fn deterministic_across_runs() {
    let confirmed = wide(
        "confirmed.csv",
        &[
            &["A", "X", "1.0", "2.0", "10"],
            &["B", "X", "3.0", "4.0", "5"],
            &["", "Japan", "36.2", "138.2", "42"],
        ],
    );
    let deaths = wide(
        "deaths.csv",
        &[
            &["A", "X", "1.0", "2.0", "1"],
            &["", "Japan", "36.2", "138.2", "3"],
        ],
    );
    let vaccine = vaccine(&[&["392", "", "Japan", "2023-01-01", "7", "5"]]);

    let first = build_time_series(&confirmed, &deaths, &vaccine).expect("first run");
    let second = build_time_series(&confirmed, &deaths, &vaccine).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn frame_serializes_dates_as_sortable_strings() {
    let confirmed = source(
        "confirmed.csv",
        &["Province/State", "Country/Region", "Lat", "Long", "12/31/22", "1/1/23"],
        &[&["", "X", "1.0", "2.0", "8", "10"]],
    );
    let deaths = source(
        "deaths.csv",
        &["Province/State", "Country/Region", "Lat", "Long", "12/31/22", "1/1/23"],
        &[],
    );

    let records = build_time_series(&confirmed, &deaths, &empty_vaccine()).expect("build");
    let frame = time_series_frame(&records).expect("frame");
    assert_eq!(frame.name, "time_series");
    assert_eq!(
        frame.column_names(),
        vec!["country", "reported_on", "confirmed", "deaths", "doses_administered"]
    );

    let reported_on = frame
        .data
        .column("reported_on")
        .expect("reported_on column")
        .str()
        .expect("string dtype");
    let stored: Vec<&str> = (0..frame.record_count())
        .map(|idx| reported_on.get(idx).expect("stored date"))
        .collect();
    assert_eq!(stored, vec!["2022-12-31", "2023-01-01"]);

    // Lexical order equals chronological order, and the strings parse back.
    let mut lexical = stored.clone();
    lexical.sort_unstable();
    assert_eq!(lexical, stored);
    for (value, record) in stored.iter().zip(&records) {
        let parsed =
            NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("round-trip parse");
        assert_eq!(parsed, record.reported_on);
    }
}
