//! Rule table of the public holidays of Japan, from the enactment of the
//! National Holidays Act in 1948.
//!
//! Rules superseded by an amendment carry the year of the amendment in their `name` and keep
//! the holiday's `title`.

pub const RULES: &str = include_str!("jp.json");
