use crate::calendars::{HolidayRule, RuleError};

/// Check a rule before it enters a rule store.
///
/// Checks are made in a fixed order and the first failure is returned:
///
/// 1. `name` is not empty.
/// 2. `title` is not empty.
/// 3. `year_range` is given, with a non-zero `begin` and `end`, and `begin <= end`.
/// 4. `month`, if given, is within 1..=12.
/// 5. `date`, if given, is within 1..=31.
/// 6. `date_range`, if given, has non-zero bounds and `begin <= end`.
/// 7. `date` and `weekday` are not both given.
///
/// Weekday and logic names are checked when they are parsed into [`chrono::Weekday`] and
/// [`Logic`](crate::calendars::Logic), so a constructed rule cannot hold an invalid one. A
/// document rule with a bad weekday or logic name therefore fails to load with that error,
/// ahead of any check listed above, e.g. an out of range `month`.
///
/// Combinations such as `date` with `logic` are accepted. The evaluator tolerates them and
/// applies each populated selector in turn.
pub fn validate(rule: &HolidayRule) -> Result<(), RuleError> {
    if rule.name.is_empty() {
        return Err(RuleError::EmptyName);
    }
    let name = || rule.name.clone();
    if rule.title.is_empty() {
        return Err(RuleError::EmptyTitle { name: name() });
    }

    let year_range = rule
        .year_range
        .ok_or_else(|| RuleError::MissingYearRange { name: name() })?;
    if year_range.begin == 0 {
        return Err(RuleError::MissingYearBegin { name: name() });
    }
    if year_range.end == 0 {
        return Err(RuleError::MissingYearEnd { name: name() });
    }
    if year_range.begin > year_range.end {
        return Err(RuleError::InvalidYearRange {
            name: name(),
            begin: year_range.begin,
            end: year_range.end,
        });
    }

    if let Some(month) = rule.month {
        if !(1..=12).contains(&month) {
            return Err(RuleError::InvalidMonth {
                name: name(),
                month,
            });
        }
    }
    if let Some(date) = rule.date {
        if !(1..=31).contains(&date) {
            return Err(RuleError::InvalidDate { name: name(), date });
        }
    }
    if let Some(date_range) = rule.date_range {
        if date_range.begin == 0 || date_range.end == 0 {
            return Err(RuleError::MissingDateRangeBound { name: name() });
        }
        if date_range.begin > date_range.end {
            return Err(RuleError::InvalidDateRange {
                name: name(),
                begin: date_range.begin,
                end: date_range.end,
            });
        }
    }

    if rule.date.is_some() && rule.weekday.is_some() {
        return Err(RuleError::DateWithWeekday { name: name() });
    }
    Ok(())
}
