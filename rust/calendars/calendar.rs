use chrono::prelude::*;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::calendars::named::{get_rule_table_by_name, jp};
use crate::calendars::{validate, HolidayMap, HolidayRule, RuleError, RuleTable};
use crate::json::JSON;

/// The years for which holidays are computed. Lookups outside of these find no holidays.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1948..=2099;

/// A public holiday calendar driven by an ordered table of [`HolidayRule`].
///
/// A calendar is formed of 2 components:
///
/// - `rules`: the rule store, whose order is significant since the last rule selecting a date
///   determines its title.
/// - a cache of the [`HolidayMap`] of each year already queried. Every mutation of the rule
///   store clears the entire cache.
///
/// Lookups take `&self` and never fail. Mutations take `&mut self` and validate the rule
/// before applying it; a rejected rule leaves the store unchanged.
///
/// # Examples
/// ```rust
/// # use jp_holidays::calendars::HolidayCal;
/// let cal = HolidayCal::new();
/// assert_eq!(cal.get_holiday("2008-05-06").as_deref(), Some("振替休日"));
/// assert_eq!(cal.get_holiday("2024-07-16"), None);
/// assert_eq!(cal.get_holiday("invalid-date"), None);
/// ```
#[derive(Debug)]
pub struct HolidayCal {
    locale: String,
    rules: Vec<HolidayRule>,
    cache: RwLock<HashMap<i32, Arc<HolidayMap>>>,
}

impl HolidayCal {
    /// Create a calendar from the built-in rule table of Japan.
    pub fn new() -> Self {
        let table = RuleTable::from_json(jp::RULES).expect("Built-in rule table contains bad data");
        Self::from_rule_table(table)
    }

    /// Create a calendar from a rule table.
    ///
    /// The rules are taken as given and are not validated.
    pub fn from_rule_table(table: RuleTable) -> Self {
        HolidayCal {
            locale: table.locale,
            rules: table.rules,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a calendar from a JSON rule table document.
    pub fn try_from_json(json: &str) -> Result<Self, RuleError> {
        Ok(Self::from_rule_table(RuleTable::from_json(json)?))
    }

    /// Create a calendar from a built-in rule table, e.g. `"jp"`.
    pub fn try_from_name(name: &str) -> Result<Self, RuleError> {
        Ok(Self::from_rule_table(get_rule_table_by_name(name)?))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Return a copy of the current rules as a rule table, e.g. for serialization.
    pub fn rule_table(&self) -> RuleTable {
        RuleTable::new(&self.locale, self.rules.clone())
    }

    /// Return the holiday title of a `"YYYY-MM-DD"` date string.
    ///
    /// Any string which is not a valid date in exactly that format returns `None`.
    pub fn get_holiday(&self, date: &str) -> Option<String> {
        let date = parse_ymd(date)?;
        self.holiday_on(&date)
    }

    /// Return the holiday title of `date`.
    pub fn holiday_on(&self, date: &NaiveDate) -> Option<String> {
        self.get_holiday_map(date.year())
            .get(date)
            .map(str::to_string)
    }

    /// Returns whether `date` is a holiday.
    pub fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.get_holiday_map(date.year()).contains(date)
    }

    /// Return every holiday of `year`, building and caching it on first request.
    ///
    /// Years outside of [`SUPPORTED_YEARS`] return an empty map, which is not cached.
    pub fn get_holiday_map(&self, year: i32) -> Arc<HolidayMap> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Arc::new(HolidayMap::new());
        }
        if let Some(map) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            debug!(year, "holiday map cache hit");
            return Arc::clone(map);
        }

        let map = HolidayMap::build(year, &self.rules);
        debug!(year, holidays = map.len(), "built holiday map");
        let mut w = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(w.entry(year).or_insert_with(|| Arc::new(map)))
    }

    /// Return the holidays between `start` and `end`, both inclusive, in date order.
    pub fn holidays_between(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<(NaiveDate, String)> {
        (start.year()..=end.year())
            .flat_map(|year| {
                let map = self.get_holiday_map(year);
                map.iter()
                    .filter(|(d, _)| start <= *d && *d <= end)
                    .map(|(d, t)| (*d, t.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Return the rule store, in table order.
    pub fn list_rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Append a rule to the rule store.
    ///
    /// Errors if the rule is invalid, see [`validate`], or a rule with the same `name` exists.
    pub fn add_rule(&mut self, rule: HolidayRule) -> Result<(), RuleError> {
        validate(&rule)?;
        if self.rules.iter().any(|r| r.name == rule.name) {
            return Err(RuleError::DuplicateName(rule.name));
        }
        self.rules.push(rule);
        self.invalidate();
        Ok(())
    }

    /// Remove every rule named `name`. Nothing happens if there is none.
    pub fn remove_rule(&mut self, name: &str) {
        self.rules.retain(|r| r.name != name);
        self.invalidate();
    }

    /// Replace, in place, the first rule with the same `name` as `rule`.
    ///
    /// Errors if the rule is invalid. If no rule has that name the store is left unchanged and
    /// no error is returned; the rule is not appended.
    pub fn update_rule(&mut self, rule: HolidayRule) -> Result<(), RuleError> {
        validate(&rule)?;
        if let Some(existing) = self.rules.iter_mut().find(|r| r.name == rule.name) {
            *existing = rule;
        }
        self.invalidate();
        Ok(())
    }

    fn invalidate(&mut self) {
        let cache = self.cache.get_mut().unwrap_or_else(PoisonError::into_inner);
        debug!(years = cache.len(), "clearing holiday map cache");
        cache.clear();
    }
}

impl Default for HolidayCal {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HolidayCal {
    /// Clone the rule store. The clone starts with an empty cache.
    fn clone(&self) -> Self {
        HolidayCal {
            locale: self.locale.clone(),
            rules: self.rules.clone(),
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl From<RuleTable> for HolidayCal {
    fn from(item: RuleTable) -> Self {
        HolidayCal::from_rule_table(item)
    }
}

/// Parse a date given strictly as `"YYYY-MM-DD"`.
pub(crate) fn parse_ymd(date: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    (parsed.format("%Y-%m-%d").to_string() == date).then_some(parsed)
}
