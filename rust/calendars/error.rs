//! Error types raised when a holiday rule or rule table is rejected.

/// Error type for every fallible operation on a rule store.
///
/// Lookups never produce one of these; only rule mutation and rule table loading do.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The rule `name` is an empty string.
    #[error("`name` must not be empty")]
    EmptyName,

    /// The rule `title` is an empty string.
    #[error("`title` must not be empty (rule '{name}')")]
    EmptyTitle { name: String },

    /// The rule has no `yearRange`.
    #[error("`yearRange` is required (rule '{name}')")]
    MissingYearRange { name: String },

    /// `yearRange.begin` is missing or zero.
    #[error("`yearRange.begin` is required (rule '{name}')")]
    MissingYearBegin { name: String },

    /// `yearRange.end` is missing or zero.
    #[error("`yearRange.end` is required (rule '{name}')")]
    MissingYearEnd { name: String },

    /// `yearRange.begin` is after `yearRange.end`.
    #[error("`yearRange.begin` {begin} is after `yearRange.end` {end} (rule '{name}')")]
    InvalidYearRange { name: String, begin: i32, end: i32 },

    #[error("invalid month: {month} (must be 1..=12, rule '{name}')")]
    InvalidMonth { name: String, month: u32 },

    #[error("invalid date: {date} (must be 1..=31, rule '{name}')")]
    InvalidDate { name: String, date: u32 },

    /// `dateRange` is given without both of its bounds.
    #[error("`dateRange.begin` and `dateRange.end` are required (rule '{name}')")]
    MissingDateRangeBound { name: String },

    #[error("`dateRange.begin` {begin} is after `dateRange.end` {end} (rule '{name}')")]
    InvalidDateRange { name: String, begin: u32, end: u32 },

    /// A weekday name outside `sunday` ..= `saturday`.
    #[error("invalid weekday: '{0}' (expected one of {expected})", expected = super::rule::WEEKDAY_NAMES.join(", "))]
    InvalidWeekday(String),

    /// `date` and `weekday` cannot be combined in one rule.
    #[error("`date` and `weekday` cannot both be set (rule '{name}')")]
    DateWithWeekday { name: String },

    /// A logic name that is not one of the five computed-date identifiers.
    #[error("invalid logic: '{0}'")]
    InvalidLogic(String),

    /// `add_rule` was given a name that already exists in the store.
    #[error("rule '{0}' already exists, use `update_rule` or first `remove_rule`")]
    DuplicateName(String),

    /// No built-in rule table is registered under the requested name.
    #[error("'{0}' is not found in list of existing rule tables")]
    UnknownTable(String),

    /// The rule table document could not be parsed.
    #[error("could not read rule table: {0}")]
    Json(#[from] serde_json::Error),
}
