//! Cross-check against the published list of national holidays.
//!
//! `syukujitsu.csv` follows the layout of the Cabinet Office list: a header row, then one
//! `YYYY/M/D,name` row per holiday. Substitute and bridge holidays are listed as `休日`.

use crate::calendars::HolidayCal;
use chrono::prelude::*;
use std::collections::BTreeMap;

const PUBLISHED: &str = include_str!("syukujitsu.csv");

/// Years listed in full, so that no extra holiday may be computed for them.
const COMPLETE_YEARS: [i32; 15] = [
    1970, 1980, 1992, 1997, 2003, 2006, 2009, 2018, 2019, 2020, 2021, 2022, 2023, 2024, 2025,
];

fn published() -> BTreeMap<NaiveDate, String> {
    PUBLISHED
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (date, name) = line.trim().split_once(',').unwrap();
            let date = NaiveDate::parse_from_str(date, "%Y/%m/%d").unwrap();
            (date, name.to_string())
        })
        .collect()
}

fn matches_published(computed: &str, published: &str) -> bool {
    match published {
        "休日" => computed == "振替休日" || computed == "国民の休日",
        _ => computed == published,
    }
}

/// A Sunday between two holidays is computed as 国民の休日 but is already a rest day, so the
/// published list omits it.
fn is_unpublished_bridge(date: &NaiveDate, title: &str) -> bool {
    title == "国民の休日" && date.weekday() == Weekday::Sun
}

#[test]
fn every_published_holiday_is_computed() {
    let cal = HolidayCal::new();
    let published = published();
    assert!(!published.is_empty());
    for (date, name) in published.iter() {
        let computed = cal.holiday_on(date);
        assert!(
            computed.as_deref().is_some_and(|c| matches_published(c, name)),
            "{date}: published {name}, computed {computed:?}"
        );
    }
}

#[test]
fn no_unpublished_holiday_in_complete_years() {
    let cal = HolidayCal::new();
    let published = published();
    for year in COMPLETE_YEARS {
        let map = cal.get_holiday_map(year);
        let listed = published.keys().filter(|d| d.year() == year).count();
        let computed: Vec<(&NaiveDate, &str)> = map
            .iter()
            .filter(|(d, t)| !is_unpublished_bridge(d, t))
            .collect();
        assert_eq!(computed.len(), listed, "{year}");
        for (date, title) in computed {
            assert!(published.contains_key(date), "{date}: unpublished {title}");
        }
    }
}

#[test]
fn rules_before_2000_match_published_days() {
    let cal = HolidayCal::new();
    let cases = [
        ("1980-01-15", Some("成人の日")),
        ("1980-01-16", None),
        ("1992-10-10", Some("体育の日")),
        ("1992-10-11", None),
        ("1980-09-15", Some("敬老の日")),
        ("1997-07-20", Some("海の日")),
        ("1980-04-29", Some("天皇誕生日")),
        ("1992-04-29", Some("みどりの日")),
    ];
    for (date, expected) in cases {
        assert_eq!(cal.get_holiday(date).as_deref(), expected, "{date}");
    }
}

#[test]
fn sunday_bridge_is_computed_but_unpublished() {
    let cal = HolidayCal::new();
    let date = NaiveDate::from_ymd_opt(1997, 5, 4).unwrap();
    assert_eq!(cal.holiday_on(&date).as_deref(), Some("国民の休日"));
    assert!(!published().contains_key(&date));
}
