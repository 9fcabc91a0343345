//! Static data for pre-existing named holiday rule tables.
//!

pub mod jp;

use crate::calendars::{RuleError, RuleTable};
use crate::json::JSON;
use std::collections::HashMap;

/// Return the document of a built-in rule table by name, ignoring case.
pub(crate) fn get_rules_json_by_name(name: &str) -> Result<&'static str, RuleError> {
    let hmap: HashMap<&str, &str> = HashMap::from([("jp", jp::RULES), ("japan", jp::RULES)]);
    match hmap.get(name.to_lowercase().as_str()) {
        None => Err(RuleError::UnknownTable(name.to_string())),
        Some(value) => Ok(value),
    }
}

/// Return a built-in [`RuleTable`] by name, ignoring case.
///
/// # Examples
/// ```rust
/// # use jp_holidays::calendars::get_rule_table_by_name;
/// let table = get_rule_table_by_name("jp").unwrap();
/// assert_eq!(table.locale, "japan");
/// ```
pub fn get_rule_table_by_name(name: &str) -> Result<RuleTable, RuleError> {
    let json = get_rules_json_by_name(name)?;
    Ok(RuleTable::from_json(json)?)
}
