//! Equinox days of the Gregorian years 1900 to 2099, as observed in Japan.
//!
//! The day of each equinox drifts by one calendar day within a four year leap cycle and
//! gradually earlier across the century. The tables below are the published historical and
//! predicted dates: within each residue of `year mod 4` the day is constant over contiguous
//! spans of years. They are not computed astronomically.

/// Return the day of March on which the vernal equinox falls in `year`.
///
/// Returns `None` for years outside 1900..=2099.
///
/// # Examples
/// ```rust
/// # use jp_holidays::calendars::vernal_equinox_day;
/// assert_eq!(vernal_equinox_day(2024), Some(20));
/// assert_eq!(vernal_equinox_day(2023), Some(21));
/// assert_eq!(vernal_equinox_day(2100), None);
/// ```
pub fn vernal_equinox_day(year: i32) -> Option<u32> {
    match (year.rem_euclid(4), year) {
        (0, 1900..=1956) => Some(21),
        (0, 1960..=2088) => Some(20),
        (0, 2092..=2096) => Some(19),
        (1, 1901..=1989) => Some(21),
        (1, 1993..=2097) => Some(20),
        (2, 1902..=2022) => Some(21),
        (2, 2026..=2098) => Some(20),
        (3, 1903..=1923) => Some(22),
        (3, 1927..=2055) => Some(21),
        (3, 2059..=2099) => Some(20),
        _ => None,
    }
}

/// Return the day of September on which the autumnal equinox falls in `year`.
///
/// Returns `None` for years outside 1900..=2099.
pub fn autumnal_equinox_day(year: i32) -> Option<u32> {
    match (year.rem_euclid(4), year) {
        (0, 1900..=2008) => Some(23),
        (0, 2012..=2096) => Some(22),
        (1, 1901..=1917) => Some(24),
        (1, 1921..=2041) => Some(23),
        (1, 2045..=2097) => Some(22),
        (2, 1902..=1946) => Some(24),
        (2, 1950..=2074) => Some(23),
        (2, 2078..=2098) => Some(22),
        (3, 1903..=1979) => Some(24),
        (3, 1983..=2099) => Some(23),
        _ => None,
    }
}

/// The equinox days of a single year, computed once per expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquinoxDays {
    pub vernal: Option<u32>,
    pub autumnal: Option<u32>,
}

impl EquinoxDays {
    pub fn for_year(year: i32) -> Self {
        EquinoxDays {
            vernal: vernal_equinox_day(year),
            autumnal: autumnal_equinox_day(year),
        }
    }
}
