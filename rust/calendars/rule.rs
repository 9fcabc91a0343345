use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calendars::RuleError;

/// Weekday names accepted in a rule table, in `Weekday::num_days_from_sunday` order.
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// An inclusive range of years during which a rule is in force.
///
/// A bound of `0` is treated as absent by the validator; the document format allows either
/// bound to be omitted so that the omission can be reported rather than failing to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    #[serde(default)]
    pub begin: i32,
    #[serde(default)]
    pub end: i32,
}

impl YearRange {
    pub fn new(begin: i32, end: i32) -> Self {
        YearRange { begin, end }
    }

    /// Returns whether `year` is within `[begin, end]`.
    pub fn contains(&self, year: i32) -> bool {
        self.begin <= year && year <= self.end
    }
}

/// An inclusive range of days-of-month, used with a weekday to select "the Nth weekday".
///
/// The second Monday of a month, for example, is the Monday within `[8, 14]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub begin: u32,
    #[serde(default)]
    pub end: u32,
}

impl DateRange {
    pub fn new(begin: u32, end: u32) -> Self {
        DateRange { begin, end }
    }

    /// Returns whether both bounds are given and `day` is within `[begin, end]`.
    pub fn contains(&self, day: u32) -> bool {
        self.begin != 0 && self.end != 0 && self.begin <= day && day <= self.end
    }
}

/// A computed-date identifier which replaces a fixed `date` in a rule.
///
/// The two equinox variants are resolved while expanding the primary holidays of a year. The
/// remaining three derive a holiday from neighbouring holidays and are only resolved once the
/// primary holidays of the whole year are known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Logic {
    /// Day of the March equinox.
    VernalEquinoxDay,
    /// Day of the September equinox.
    AutumnalEquinoxDay,
    /// A single day sandwiched between two holidays becomes a holiday.
    NationalHoliday,
    /// A Monday following a Sunday holiday becomes a holiday (rules before 2007).
    HolidayInLieu,
    /// The first non-holiday after a Sunday holiday becomes a holiday (rules from 2007).
    HolidayInLieu2007,
}

impl Logic {
    /// All variants, in the order they are documented.
    pub const ALL: [Logic; 5] = [
        Logic::VernalEquinoxDay,
        Logic::AutumnalEquinoxDay,
        Logic::NationalHoliday,
        Logic::HolidayInLieu,
        Logic::HolidayInLieu2007,
    ];

    /// The identifier used for this logic in a rule table document.
    ///
    /// `NationalHoliday` keeps the historical spelling `Natinal Holiday` so that existing rule
    /// tables remain readable.
    pub fn as_str(&self) -> &'static str {
        match self {
            Logic::VernalEquinoxDay => "Vernal Equinox Day",
            Logic::AutumnalEquinoxDay => "Autumnal Equinox Day",
            Logic::NationalHoliday => "Natinal Holiday",
            Logic::HolidayInLieu => "Holiday in lieu",
            Logic::HolidayInLieu2007 => "Holiday in lieu(2007)",
        }
    }

    /// Returns whether the logic depends on the neighbouring holidays of a date.
    pub fn is_substitute(&self) -> bool {
        matches!(
            self,
            Logic::NationalHoliday | Logic::HolidayInLieu | Logic::HolidayInLieu2007
        )
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Logic {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Logic::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| RuleError::InvalidLogic(s.to_string()))
    }
}

impl TryFrom<String> for Logic {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Logic> for String {
    fn from(value: Logic) -> Self {
        value.as_str().to_string()
    }
}

/// Parse an English weekday name, ignoring case.
///
/// Only the seven full names are accepted; abbreviations such as `mon` are rejected.
pub fn parse_weekday(name: &str) -> Result<Weekday, RuleError> {
    let lower = name.to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .position(|n| *n == lower)
        .map(|i| WEEKDAYS[i])
        .ok_or_else(|| RuleError::InvalidWeekday(name.to_string()))
}

/// The lower case English name of a weekday, as written to a rule table document.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

mod weekday_serde {
    use super::{parse_weekday, weekday_name};
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Weekday>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(w) => s.serialize_some(weekday_name(*w)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Weekday>, D::Error> {
        let name: Option<String> = Option::deserialize(d)?;
        name.map(|n| parse_weekday(&n))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

/// A single row of a declarative holiday rule table.
///
/// A rule is in force for every year of its `year_range`. Which date it selects depends on which
/// of the optional fields are populated:
///
/// - `date`: a fixed day of `month`.
/// - `date_range` with `weekday`: the given weekday within a range of days of `month`.
/// - `logic`: a computed date, see [`Logic`].
///
/// The evaluator does not require these to be exclusive; the [`validate`](crate::calendars::validate)
/// function rejects only the combination of `date` and `weekday`.
///
/// # Examples
/// ```rust
/// # use jp_holidays::calendars::{HolidayRule, YearRange};
/// # use chrono::Weekday;
/// let coming_of_age = HolidayRule::new("成人の日", "成人の日", YearRange::new(2000, 9999))
///     .with_month(1)
///     .with_date_range(8, 14)
///     .with_weekday(Weekday::Mon);
/// assert!(coming_of_age.applies_to(2024));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRule {
    /// Identifier of the rule, unique within a rule store.
    #[serde(default)]
    pub name: String,
    /// Name of the holiday as displayed and returned by lookups.
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_range: Option<YearRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "weekday_serde")]
    pub weekday: Option<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<Logic>,
}

impl HolidayRule {
    /// Create a rule with no date selector. Add one with the `with_*` methods.
    pub fn new(name: &str, title: &str, year_range: YearRange) -> Self {
        HolidayRule {
            name: name.to_string(),
            title: title.to_string(),
            year_range: Some(year_range),
            month: None,
            date: None,
            date_range: None,
            weekday: None,
            logic: None,
        }
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_date(mut self, date: u32) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_date_range(mut self, begin: u32, end: u32) -> Self {
        self.date_range = Some(DateRange::new(begin, end));
        self
    }

    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn with_logic(mut self, logic: Logic) -> Self {
        self.logic = Some(logic);
        self
    }

    /// Returns whether the rule is in force for `year`.
    ///
    /// A rule without a `year_range` is never in force.
    pub fn applies_to(&self, year: i32) -> bool {
        self.year_range.is_some_and(|r| r.contains(year))
    }
}

/// A named, ordered collection of holiday rules as loaded from a rule table document.
///
/// Rule order is significant: when two rules select the same date the later one wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default)]
    pub locale: String,
    pub rules: Vec<HolidayRule>,
}

impl RuleTable {
    pub fn new(locale: &str, rules: Vec<HolidayRule>) -> Self {
        RuleTable {
            locale: locale.to_string(),
            rules,
        }
    }
}
