use chrono::prelude::*;
use std::iter::successors;
use tracing::trace;

use crate::calendars::expand::days_of_year;
use crate::calendars::{HolidayMap, HolidayRule, Logic};

/// A day whose previous and next days are both holidays.
fn is_bridged(map: &HolidayMap, date: &NaiveDate) -> bool {
    let prev = date.pred_opt().is_some_and(|d| map.contains(&d));
    let next = date.succ_opt().is_some_and(|d| map.contains(&d));
    prev && next
}

/// A Monday following a holiday, which must then have fallen on a Sunday.
fn is_monday_after_holiday(map: &HolidayMap, date: &NaiveDate) -> bool {
    date.weekday() == Weekday::Mon && date.pred_opt().is_some_and(|d| map.contains(&d))
}

/// A day ending an unbroken run of holidays which includes a Sunday.
///
/// The run must end with a holiday titled other than `title`, so that a date is not chained
/// onto a substitute already granted for the same Sunday.
fn ends_sunday_holiday_run(map: &HolidayMap, date: &NaiveDate, title: &str) -> bool {
    let Some(prev) = date.pred_opt() else {
        return false;
    };
    match map.get(&prev) {
        Some(t) if t != title => successors(Some(prev), |d| d.pred_opt())
            .take_while(|d| map.contains(d))
            .any(|d| d.weekday() == Weekday::Sun),
        _ => false,
    }
}

/// Add the substitute holidays of `year` to a map of its primary holidays.
///
/// Days are visited in ascending order and only days without a holiday are considered. Each
/// rule in force carrying a substitute [`Logic`] is tried in table order, the last one to fire
/// wins, and the day is added to the map before the next day is visited. A day granted here
/// therefore counts as a holiday for every later day of the pass.
///
/// - [`Logic::NationalHoliday`]: the previous and next days are both holidays.
/// - [`Logic::HolidayInLieu`]: the day is a Monday and the previous day is a holiday.
/// - [`Logic::HolidayInLieu2007`]: walking backwards from the previous day through consecutive
///   holidays reaches a Sunday.
///
/// Neighbouring days in another year are never holidays.
pub fn resolve_substitutes(year: i32, rules: &[HolidayRule], map: &mut HolidayMap) {
    let active: Vec<&HolidayRule> = rules
        .iter()
        .filter(|r| r.applies_to(year) && r.logic.is_some_and(|l| l.is_substitute()))
        .collect();
    if active.is_empty() {
        return;
    }

    for date in days_of_year(year) {
        if map.contains(&date) {
            continue;
        }
        let winner = active
            .iter()
            .filter(|r| match r.logic {
                Some(Logic::NationalHoliday) => is_bridged(map, &date),
                Some(Logic::HolidayInLieu) => is_monday_after_holiday(map, &date),
                Some(Logic::HolidayInLieu2007) => ends_sunday_holiday_run(map, &date, &r.title),
                _ => false,
            })
            .last();
        if let Some(rule) = winner {
            trace!(%date, rule = %rule.name, "substitute holiday");
            map.insert(date, &rule.title);
        }
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{expand_primary, EquinoxDays, YearRange};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn golden_week_rules() -> Vec<HolidayRule> {
        vec![
            HolidayRule::new("昭和の日", "昭和の日", YearRange::new(2007, 9999))
                .with_month(4)
                .with_date(29),
            HolidayRule::new("憲法記念日", "憲法記念日", YearRange::new(1948, 9999))
                .with_month(5)
                .with_date(3),
            HolidayRule::new("みどりの日", "みどりの日", YearRange::new(2007, 9999))
                .with_month(5)
                .with_date(4),
            HolidayRule::new("こどもの日", "こどもの日", YearRange::new(1948, 9999))
                .with_month(5)
                .with_date(5),
            HolidayRule::new("国民の休日", "国民の休日", YearRange::new(1985, 9999))
                .with_logic(Logic::NationalHoliday),
            HolidayRule::new("振替休日", "振替休日", YearRange::new(1973, 2007))
                .with_logic(Logic::HolidayInLieu),
            HolidayRule::new("振替休日2007", "振替休日", YearRange::new(2007, 9999))
                .with_logic(Logic::HolidayInLieu2007),
        ]
    }

    fn resolve(year: i32, rules: &[HolidayRule]) -> HolidayMap {
        let mut map = expand_primary(year, rules, &EquinoxDays::for_year(year));
        resolve_substitutes(year, rules, &mut map);
        map
    }

    #[test]
    fn test_substitute_after_sunday_chain() {
        // 2008-05-04 is a Sunday, 05-05 a Monday holiday, so the substitute lands on 05-06
        let map = resolve(2008, &golden_week_rules());
        assert_eq!(map.get(&ymd(2008, 5, 6)), Some("振替休日"));
        assert_eq!(map.get(&ymd(2008, 5, 7)), None);
    }

    #[test]
    fn test_substitute_only_once_per_sunday() {
        // 2020-05-03 is a Sunday; 05-04 and 05-05 are holidays, 05-06 the substitute
        let map = resolve(2020, &golden_week_rules());
        assert_eq!(map.get(&ymd(2020, 5, 6)), Some("振替休日"));
        // 05-07 follows a day titled 振替休日, so no further substitute is chained on
        assert_eq!(map.get(&ymd(2020, 5, 7)), None);
    }

    #[test]
    fn test_no_substitute_without_sunday() {
        // 2024-05-03..05 is Friday to Sunday, substitute on Monday 05-06 only
        let map = resolve(2024, &golden_week_rules());
        assert_eq!(map.get(&ymd(2024, 5, 6)), Some("振替休日"));
        assert_eq!(map.get(&ymd(2024, 4, 30)), None);
        // 2022-05-03..05 is Tuesday to Thursday, no Sunday in the run
        let map = resolve(2022, &golden_week_rules());
        assert_eq!(map.get(&ymd(2022, 5, 6)), None);
    }

    #[test]
    fn test_pre_2007_monday_only() {
        let rules = vec![
            HolidayRule::new("こどもの日", "こどもの日", YearRange::new(1948, 9999))
                .with_month(5)
                .with_date(5),
            HolidayRule::new("振替休日", "振替休日", YearRange::new(1973, 2007))
                .with_logic(Logic::HolidayInLieu),
        ];
        // 1996-05-05 is a Sunday
        let map = resolve(1996, &rules);
        assert_eq!(map.get(&ymd(1996, 5, 6)), Some("振替休日"));
        // 1997-05-05 is a Monday, nothing follows on Tuesday
        let map = resolve(1997, &rules);
        assert_eq!(map.len(), 1);
        // before the rule came into force
        let map = resolve(1968, &rules);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_bridge_holiday() {
        // 1988-05-04 is a Wednesday between 憲法記念日 and こどもの日
        let map = resolve(1988, &golden_week_rules());
        assert_eq!(map.get(&ymd(1988, 5, 4)), Some("国民の休日"));
        // before 1985 the bridge rule is not in force
        let map = resolve(1984, &golden_week_rules());
        assert_eq!(map.get(&ymd(1984, 5, 4)), None);
    }

    #[test]
    fn test_later_substitute_rule_wins() {
        let constitution = HolidayRule::new("憲法記念日", "憲法記念日", YearRange::new(1948, 9999))
            .with_month(5)
            .with_date(3);
        let children = HolidayRule::new("こどもの日", "こどもの日", YearRange::new(1948, 9999))
            .with_month(5)
            .with_date(5);
        let bridge = HolidayRule::new("国民の休日", "国民の休日", YearRange::new(1985, 9999))
            .with_logic(Logic::NationalHoliday);
        let lieu = HolidayRule::new("振替休日", "振替休日", YearRange::new(1973, 2007))
            .with_logic(Logic::HolidayInLieu);
        // 1992-05-04 is a Monday after a Sunday holiday and between two holidays
        let date = ymd(1992, 5, 4);

        let rules = vec![constitution.clone(), children.clone(), bridge.clone(), lieu.clone()];
        assert_eq!(resolve(1992, &rules).get(&date), Some("振替休日"));

        let rules = vec![constitution, children, lieu, bridge];
        assert_eq!(resolve(1992, &rules).get(&date), Some("国民の休日"));
    }

    #[test]
    fn test_bridge_sees_earlier_substitutes() {
        let rules = vec![
            HolidayRule::new("a", "A", YearRange::new(2000, 2100))
                .with_month(3)
                .with_date(1),
            HolidayRule::new("b", "B", YearRange::new(2000, 2100))
                .with_month(3)
                .with_date(3),
            HolidayRule::new("bridge", "橋", YearRange::new(2000, 2100))
                .with_logic(Logic::NationalHoliday),
        ];
        let map = resolve(2025, &rules);
        assert_eq!(map.get(&ymd(2025, 3, 2)), Some("橋"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_year_boundary_neighbours_are_not_holidays() {
        let rules = vec![
            HolidayRule::new("大晦日", "大晦日", YearRange::new(2000, 2100))
                .with_month(12)
                .with_date(30),
            HolidayRule::new("bridge", "橋", YearRange::new(2000, 2100))
                .with_logic(Logic::NationalHoliday),
        ];
        // 12-31 is not bridged since 01-01 of the next year is outside this year's map
        let map = resolve(2024, &rules);
        assert_eq!(map.get(&ymd(2024, 12, 31)), None);
    }

    #[test]
    fn test_substitute_rules_out_of_force() {
        let mut rules = golden_week_rules();
        rules.retain(|r| r.logic.is_some());
        let map = resolve(2008, &rules);
        assert!(map.is_empty());
    }
}
