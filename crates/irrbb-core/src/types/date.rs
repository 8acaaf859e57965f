//! Calendar date type for curve and scenario calculations.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};

/// A calendar date.
///
/// Newtype wrapper around `chrono::NaiveDate`. All arithmetic is plain
/// calendar arithmetic; no business-day or holiday adjustment is applied
/// anywhere in this crate.
///
/// # Example
///
/// ```rust
/// use irrbb_core::types::Date;
///
/// let date = Date::from_ymd(2024, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of year (1-366).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Checks if the year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Returns the number of days in the date's year.
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Checks if the date is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Checks if the date is the last day of February (28th or 29th).
    pub fn is_last_day_of_february(&self) -> bool {
        self.month() == 2 && self.is_end_of_month()
    }

    /// Adds a number of calendar days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {days} days")))
    }

    /// Adds a number of months.
    ///
    /// If the resulting day would not exist (e.g. Jan 31 + 1 month) it is
    /// clamped to the last day of the target month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(step)
        } else {
            self.0.checked_sub_months(step)
        };
        shifted
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {months} months")))
    }

    /// Adds a number of years, clamping Feb 29 to Feb 28 in non-leap years.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {years} years")))?;
        self.add_months(months)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    ///
    /// Panics on overflow past chrono's supported range, like integer
    /// overflow in debug builds. Use [`Date::add_days`] for a checked version.
    fn add(self, days: i64) -> Self::Output {
        Date(self.0 + Duration::days(days))
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(date.add_months(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(date.add_months(3).unwrap(), Date::from_ymd(2025, 4, 30).unwrap());
        assert_eq!(date.add_months(12).unwrap(), Date::from_ymd(2026, 1, 31).unwrap());
    }

    #[test]
    fn test_add_months_crosses_year() {
        let date = Date::from_ymd(2024, 11, 15).unwrap();
        assert_eq!(date.add_months(3).unwrap(), Date::from_ymd(2025, 2, 15).unwrap());
        assert_eq!(date.add_months(-11).unwrap(), Date::from_ymd(2023, 12, 15).unwrap());
    }

    #[test]
    fn test_add_years_from_leap_day() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(date.add_years(4).unwrap(), Date::from_ymd(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_out_of_range_arithmetic_is_an_error() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        for months in [i32::MAX, i32::MIN, 12 * 300_000] {
            assert!(
                matches!(date.add_months(months), Err(CoreError::InvalidDate { .. })),
                "{months}"
            );
        }
        for years in [i32::MAX, i32::MIN, 300_000] {
            assert!(
                matches!(date.add_years(years), Err(CoreError::InvalidDate { .. })),
                "{years}"
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(Date::from_ymd(2024, 2, 10).unwrap().days_in_month(), 29);
        assert_eq!(Date::from_ymd(2100, 2, 10).unwrap().days_in_month(), 28);
        assert_eq!(Date::from_ymd(2025, 4, 10).unwrap().days_in_month(), 30);
        assert_eq!(Date::from_ymd(2025, 12, 10).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_last_day_of_february() {
        assert!(Date::from_ymd(2024, 2, 29).unwrap().is_last_day_of_february());
        assert!(Date::from_ymd(2023, 2, 28).unwrap().is_last_day_of_february());
        assert!(!Date::from_ymd(2024, 2, 28).unwrap().is_last_day_of_february());
        assert!(!Date::from_ymd(2024, 3, 31).unwrap().is_last_day_of_february());
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2100, 1, 1).unwrap().is_leap_year());
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
        assert_eq!(Date::from_ymd(2024, 7, 1).unwrap().days_in_year(), 366);
    }

    #[test]
    fn test_days_between_and_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = d1 + 30;
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2 - d1, 30);
        assert_eq!(d1.add_days(-1).unwrap(), Date::from_ymd(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_and_display() {
        let date = Date::parse(" 2025-06-15 ").unwrap();
        assert_eq!(date.to_string(), "2025-06-15");
        assert!(Date::parse("15/06/2025").is_err());
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
