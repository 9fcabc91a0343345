use crate::calendars::{HolidayMap, HolidayRule, RuleTable};
use crate::json::JSON;

impl JSON for HolidayRule {}
impl JSON for RuleTable {}
impl JSON for HolidayMap {}
