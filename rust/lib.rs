//! This is the documentation for jp-holidays
//!
//! The public holidays of Japan are computed from an ordered, declarative table of date rules
//! rather than from a fixed list of dates. See the [`calendars`] module for the rule format,
//! the expansion of a year's holidays and the calendar API.
//!
//! ```rust
//! use jp_holidays::HolidayCal;
//!
//! let cal = HolidayCal::new();
//! assert_eq!(cal.get_holiday("2008-05-06").as_deref(), Some("振替休日"));
//! ```

#[cfg(test)]
mod tests;

pub mod json;

pub mod calendars;
pub use calendars::{HolidayCal, HolidayMap, HolidayRule, RuleError, RuleTable};
