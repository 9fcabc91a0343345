//! Compute public holidays from a declarative table of date rules.
//!
//! ### Basic usage
//!
//! A [`HolidayCal`] owns an ordered table of [`HolidayRule`] and answers lookups by date. The
//! default calendar carries the built-in rule table of Japan, covering 1948 to 2099.
//!
//! ```rust
//! # use jp_holidays::calendars::HolidayCal;
//! let cal = HolidayCal::new();
//! assert_eq!(cal.get_holiday("2024-01-01").as_deref(), Some("元日"));
//! // Sunday 11th February 2024 is moved to the Monday.
//! assert_eq!(cal.get_holiday("2024-02-12").as_deref(), Some("振替休日"));
//! ```
//!
//! ### Holiday maps
//!
//! The holidays of a year are expanded in two passes. The first selects, for each day, the last
//! rule in table order which matches it by fixed date, by weekday within a range of days, or by
//! equinox. The second visits the remaining days in order and applies the substitute and bridge
//! holiday logics against the holidays found so far. The resulting [`HolidayMap`] is cached
//! per year.
//!
//! ```rust
//! # use jp_holidays::calendars::HolidayCal;
//! # let cal = HolidayCal::new();
//! let map = cal.get_holiday_map(2019);
//! let golden_week: Vec<&str> = map
//!     .iter()
//!     .filter(|(d, _)| d.format("%m").to_string() == "05")
//!     .map(|(_, t)| t)
//!     .collect();
//! assert_eq!(
//!     golden_week,
//!     vec!["休日（祝日扱い）", "国民の休日", "憲法記念日", "みどりの日", "こどもの日", "振替休日"]
//! );
//! ```
//!
//! ### Mutating rules
//!
//! Rules can be added, removed and updated. Each mutation clears the cached maps.
//!
//! ```rust
//! # use jp_holidays::calendars::{HolidayCal, HolidayRule, YearRange};
//! let mut cal = HolidayCal::new();
//! let rule = HolidayRule::new("記念日", "記念日", YearRange::new(2024, 2024))
//!     .with_month(7)
//!     .with_date(16);
//! cal.add_rule(rule).unwrap();
//! assert_eq!(cal.get_holiday("2024-07-16").as_deref(), Some("記念日"));
//! ```

mod calendar;
pub use crate::calendars::calendar::{HolidayCal, SUPPORTED_YEARS};

mod equinox;
pub use crate::calendars::equinox::{autumnal_equinox_day, vernal_equinox_day, EquinoxDays};

mod error;
pub use crate::calendars::error::RuleError;

mod expand;
pub use crate::calendars::expand::expand_primary;

mod holiday_map;
pub use crate::calendars::holiday_map::HolidayMap;

pub mod named;
pub use crate::calendars::named::get_rule_table_by_name;

mod rule;
pub use crate::calendars::rule::{
    parse_weekday, weekday_name, DateRange, HolidayRule, Logic, RuleTable, YearRange,
};

mod substitute;
pub use crate::calendars::substitute::resolve_substitutes;

mod validate;
pub use crate::calendars::validate::validate;

mod serde;
