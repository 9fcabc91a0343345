use chrono::prelude::*;
use indexmap::map::IndexMap;
use serde::{Deserialize, Serialize};

use crate::calendars::{expand_primary, resolve_substitutes, EquinoxDays, HolidayRule};

/// The holidays of a single year, ordered by date, mapping each date to its holiday title.
///
/// Serializes to a JSON object keyed by `"YYYY-MM-DD"` strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayMap {
    days: IndexMap<NaiveDate, String>,
}

impl HolidayMap {
    /// Create an empty map.
    pub fn new() -> Self {
        HolidayMap {
            days: IndexMap::new(),
        }
    }

    /// Expand `rules` into the complete holiday map of `year`.
    ///
    /// The primary holidays are expanded first, then the substitute holidays are resolved
    /// against them, and the result is sorted by date.
    pub fn build(year: i32, rules: &[HolidayRule]) -> Self {
        let equinox = EquinoxDays::for_year(year);
        let mut map = expand_primary(year, rules, &equinox);
        resolve_substitutes(year, rules, &mut map);
        map.days.sort_keys();
        map
    }

    /// Return the holiday title of `date`, if any.
    pub fn get(&self, date: &NaiveDate) -> Option<&str> {
        self.days.get(date).map(String::as_str)
    }

    /// Returns whether `date` is a holiday.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.days.contains_key(date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over `(date, title)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &str)> {
        self.days.iter().map(|(d, t)| (d, t.as_str()))
    }

    /// Return the holidays keyed by `"YYYY-MM-DD"` strings, in date order.
    pub fn to_ymd_map(&self) -> IndexMap<String, String> {
        self.days
            .iter()
            .map(|(d, t)| (d.format("%Y-%m-%d").to_string(), t.clone()))
            .collect()
    }

    pub(crate) fn insert(&mut self, date: NaiveDate, title: &str) {
        self.days.insert(date, title.to_string());
    }
}

impl<'a> IntoIterator for &'a HolidayMap {
    type Item = (&'a NaiveDate, &'a String);
    type IntoIter = indexmap::map::Iter<'a, NaiveDate, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
