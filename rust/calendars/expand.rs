use chrono::prelude::*;

use crate::calendars::{EquinoxDays, HolidayMap, HolidayRule, Logic};

/// Iterate over every date of `year`, from 1st January to 31st December.
///
/// Yields nothing if `year` cannot be represented.
pub(crate) fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |d| d.year() == year)
}

/// Returns whether `rule` selects `date` without reference to any other holiday.
///
/// The selectors are tried in order: a fixed `date`, then a `date_range` (filtered by
/// `weekday`), then an equinox `logic`. Substitute logics never match here.
fn selects(rule: &HolidayRule, date: &NaiveDate, equinox: &EquinoxDays) -> bool {
    if rule.month.is_some_and(|m| m != date.month()) {
        return false;
    }
    let day = date.day();
    if rule.date == Some(day) {
        return true;
    }
    if rule.date_range.is_some_and(|r| r.contains(day)) {
        return rule.weekday.map_or(true, |w| w == date.weekday());
    }
    match rule.logic {
        Some(Logic::VernalEquinoxDay) => equinox.vernal == Some(day),
        Some(Logic::AutumnalEquinoxDay) => equinox.autumnal == Some(day),
        _ => false,
    }
}

/// Expand the holidays of `year` which follow directly from `rules`, excluding substitutes.
///
/// Every rule in force for `year` is tried against every day. When more than one rule selects
/// a date the last one in table order wins, so a later entry can override an earlier, more
/// general one. The winning rule's `title` is recorded.
pub fn expand_primary(year: i32, rules: &[HolidayRule], equinox: &EquinoxDays) -> HolidayMap {
    let active: Vec<&HolidayRule> = rules.iter().filter(|r| r.applies_to(year)).collect();
    let mut map = HolidayMap::new();
    for date in days_of_year(year) {
        let winner = active
            .iter()
            .filter(|r| selects(r, &date, equinox))
            .last();
        if let Some(rule) = winner {
            map.insert(date, &rule.title);
        }
    }
    map
}
