//! Tenor codes and tenor-to-date arithmetic.
//!
//! Tenors are maturity labels relative to an analysis date: `ON` (overnight),
//! `2W`, `3M`, `10Y`. Dates are produced with plain calendar arithmetic; no
//! business-day or holiday adjustment is applied. Callers that need adjusted
//! dates post-process the result.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// A parsed tenor code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tenor {
    /// One calendar day (`ON`, `O/N`, `1D`).
    Overnight,
    /// A number of weeks (`1W`).
    Weeks(u32),
    /// A number of calendar months (`3M`).
    Months(u32),
    /// A number of calendar years (`5Y`).
    Years(u32),
}

impl Tenor {
    /// Parses a tenor code, case-insensitively and ignoring surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedTenor` for any suffix other than
    /// `W`/`M`/`Y` or a magnitude that is not a non-negative integer.
    pub fn parse(code: &str) -> CoreResult<Self> {
        let normalized = code.trim().to_uppercase();

        if matches!(normalized.as_str(), "ON" | "O/N" | "1D") {
            return Ok(Tenor::Overnight);
        }

        let Some(unit) = normalized.chars().last() else {
            return Err(CoreError::unsupported_tenor(code));
        };
        // Whitespace may separate the number from the unit ("3 M")
        let magnitude = normalized[..normalized.len() - unit.len_utf8()].trim_end();
        if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::unsupported_tenor(code));
        }
        let n: u32 = magnitude
            .parse()
            .map_err(|_| CoreError::unsupported_tenor(code))?;

        match unit {
            'W' => Ok(Tenor::Weeks(n)),
            'M' => Ok(Tenor::Months(n)),
            'Y' => Ok(Tenor::Years(n)),
            _ => Err(CoreError::unsupported_tenor(code)),
        }
    }

    /// Returns the date `self` after `date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result falls outside the
    /// supported date range.
    pub fn add_to(&self, date: Date) -> CoreResult<Date> {
        match *self {
            Tenor::Overnight => date.add_days(1),
            Tenor::Weeks(n) => date.add_days(7 * i64::from(n)),
            Tenor::Months(n) => date.add_months(to_offset(n)?),
            Tenor::Years(n) => date.add_years(to_offset(n)?),
        }
    }

    /// Returns the normalized code (`ON`, `2W`, `3M`, `5Y`).
    pub fn code(&self) -> String {
        self.to_string()
    }
}

fn to_offset(n: u32) -> CoreResult<i32> {
    i32::try_from(n).map_err(|_| CoreError::invalid_date(format!("tenor offset {n} out of range")))
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenor::Overnight => write!(f, "ON"),
            Tenor::Weeks(n) => write!(f, "{n}W"),
            Tenor::Months(n) => write!(f, "{n}M"),
            Tenor::Years(n) => write!(f, "{n}Y"),
        }
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tenor::parse(s)
    }
}

/// Adds a tenor code to a date.
///
/// # Example
///
/// ```rust
/// use irrbb_core::tenors::add_tenor;
/// use irrbb_core::types::Date;
///
/// let d = Date::from_ymd(2024, 1, 31).unwrap();
/// assert_eq!(add_tenor(d, "ON").unwrap(), Date::from_ymd(2024, 2, 1).unwrap());
/// assert_eq!(add_tenor(d, "1m").unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
/// ```
///
/// # Errors
///
/// Returns `CoreError::UnsupportedTenor` if the code cannot be parsed.
pub fn add_tenor(date: Date, code: &str) -> CoreResult<Date> {
    Tenor::parse(code)?.add_to(date)
}
