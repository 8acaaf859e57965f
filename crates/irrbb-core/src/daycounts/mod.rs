//! Day count conventions for curve calculations.
//!
//! A day count convention turns a date interval into a year fraction. Four
//! conventions are supported:
//!
//! - [`Act360`]: Actual/360 - money market convention
//! - [`Act365`]: Actual/365 (Fixed)
//! - [`ActActIsda`]: Actual/Actual ISDA - split at calendar-year boundaries
//! - [`Thirty360US`]: 30/360 US (NASD) with February end-of-month rules
//!
//! Market data arrives with free-text labels ("A/365", "30E/360", "Actual/Actual
//! (ISDA)", ...). [`DayCountConvention::normalize`] maps every accepted
//! spelling onto one of the four conventions.
//!
//! # Usage
//!
//! ```rust
//! use irrbb_core::daycounts::DayCountConvention;
//! use irrbb_core::types::Date;
//!
//! let dc = DayCountConvention::normalize("30/360 (US)").unwrap();
//! assert_eq!(dc, DayCountConvention::Thirty360US);
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//! assert_eq!(dc.year_fraction(start, end).unwrap(), 0.5);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use actact::ActActIsda;
pub use thirty360::Thirty360US;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations do not check the order of their arguments; the checked
/// entry point is [`DayCountConvention::year_fraction`].
pub trait DayCount: Send + Sync {
    /// Returns the canonical name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    ///
    /// Actual calendar days for ACT conventions, 30-day months for 30/360.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// The supported day count conventions.
///
/// Serializes as its canonical name and deserializes through
/// [`DayCountConvention::normalize`], so any accepted spelling round-trips
/// into the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365,
    /// Actual/Actual ISDA
    ActActIsda,
    /// 30/360 US (NASD)
    Thirty360US,
}

/// Accepted spellings after label cleaning.
const DAY_COUNT_SYNONYMS: &[(&str, DayCountConvention)] = &[
    // ACT/360
    ("ACT/360", DayCountConvention::Act360),
    ("ACT360", DayCountConvention::Act360),
    ("A/360", DayCountConvention::Act360),
    ("ACTUAL/360", DayCountConvention::Act360),
    ("ACTUAL/360.0", DayCountConvention::Act360),
    // ACT/365
    ("ACT/365", DayCountConvention::Act365),
    ("ACT365", DayCountConvention::Act365),
    ("A/365", DayCountConvention::Act365),
    ("ACTUAL/365", DayCountConvention::Act365),
    ("ACTUAL/365F", DayCountConvention::Act365),
    ("ACT/365F", DayCountConvention::Act365),
    // ACT/ACT
    ("ACT/ACT", DayCountConvention::ActActIsda),
    ("ACTACT", DayCountConvention::ActActIsda),
    ("A/A", DayCountConvention::ActActIsda),
    ("ACTUAL/ACTUAL", DayCountConvention::ActActIsda),
    ("ACTUAL/ACT", DayCountConvention::ActActIsda),
    ("ACT/ACTISDA", DayCountConvention::ActActIsda),
    ("ACTUAL/ACTUALISDA", DayCountConvention::ActActIsda),
    // 30/360
    ("30/360", DayCountConvention::Thirty360US),
    ("30360", DayCountConvention::Thirty360US),
    ("30E/360", DayCountConvention::Thirty360US),
    ("30E360", DayCountConvention::Thirty360US),
    ("30E/360ISDA", DayCountConvention::Thirty360US),
    ("30E360ISDA", DayCountConvention::Thirty360US),
];

/// Uppercases and strips decoration so that label variants collapse onto the
/// synonym table.
fn clean_label(label: &str) -> String {
    let stripped: String = label
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '[' | ']' | '-'))
        .collect();

    stripped
        .replace("30/360E", "30E/360")
        .replace("US", "")
        .replace("NASD", "")
        .replace("FIXED", "F")
}

impl DayCountConvention {
    /// Normalizes a free-text day count label.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedConvention` if the cleaned label
    /// matches none of the accepted spellings.
    pub fn normalize(label: &str) -> CoreResult<Self> {
        let cleaned = clean_label(label);
        DAY_COUNT_SYNONYMS
            .iter()
            .find(|(alias, _)| *alias == cleaned)
            .map(|(_, convention)| *convention)
            .ok_or_else(|| CoreError::unsupported_convention(label))
    }

    /// Returns the day count implementation for this convention.
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365 => &Act365,
            DayCountConvention::ActActIsda => &ActActIsda,
            DayCountConvention::Thirty360US => &Thirty360US,
        }
    }

    /// Returns the canonical name of the convention.
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Returns all supported conventions.
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365,
            DayCountConvention::ActActIsda,
            DayCountConvention::Thirty360US,
        ]
    }

    /// Year fraction from `start` to `end` under this convention.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateOrder` if `end` precedes `start`.
    pub fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        if end < start {
            return Err(CoreError::invalid_date_order(start, end));
        }
        if end == start {
            return Ok(0.0);
        }
        Ok(self.to_day_count().year_fraction(start, end))
    }
}

/// Year fraction from `start` to `end` under `convention`.
///
/// Free-function form of [`DayCountConvention::year_fraction`].
pub fn year_fraction(start: Date, end: Date, convention: DayCountConvention) -> CoreResult<f64> {
    convention.year_fraction(start, end)
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::normalize(&value)
    }
}

impl From<DayCountConvention> for String {
    fn from(value: DayCountConvention) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_every_synonym() {
        for (alias, expected) in DAY_COUNT_SYNONYMS {
            assert_eq!(DayCountConvention::normalize(alias).unwrap(), *expected, "{alias}");
        }
    }

    #[test]
    fn test_normalize_decorated_labels() {
        let cases = [
            ("act/360", DayCountConvention::Act360),
            (" Actual/360 ", DayCountConvention::Act360),
            ("ACT-360", DayCountConvention::Act360),
            ("ACT/365 Fixed", DayCountConvention::Act365),
            ("Actual/365 (Fixed)", DayCountConvention::Act365),
            ("Actual/Actual (ISDA)", DayCountConvention::ActActIsda),
            ("ACT/ACT-ISDA", DayCountConvention::ActActIsda),
            ("30/360 (US)", DayCountConvention::Thirty360US),
            ("30/360 US NASD", DayCountConvention::Thirty360US),
            ("30/360-US", DayCountConvention::Thirty360US),
            ("30/360E", DayCountConvention::Thirty360US),
            ("30E/360 [ISDA]", DayCountConvention::Thirty360US),
        ];
        for (label, expected) in cases {
            assert_eq!(DayCountConvention::normalize(label).unwrap(), expected, "{label}");
        }
    }

    #[test]
    fn test_normalize_rejects_unknown() {
        for label in ["", "BUS/252", "ACT/364", "30/365", "NL/365"] {
            let err = DayCountConvention::normalize(label).unwrap_err();
            assert_eq!(err, CoreError::unsupported_convention(label));
        }
    }

    #[test]
    fn test_names_round_trip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(parsed, *convention);
        }
    }

    #[test]
    fn test_year_fraction_same_day_is_zero() {
        let d = date(2024, 2, 29);
        for convention in DayCountConvention::all() {
            assert_eq!(convention.year_fraction(d, d).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_year_fraction_rejects_reversed_dates() {
        let start = date(2024, 6, 1);
        let end = date(2024, 5, 31);
        for convention in DayCountConvention::all() {
            assert_eq!(
                convention.year_fraction(start, end),
                Err(CoreError::invalid_date_order(start, end))
            );
        }
    }

    #[test]
    fn test_act360_half_year() {
        let yf = year_fraction(date(2024, 1, 1), date(2024, 7, 1), DayCountConvention::Act360);
        assert_eq!(yf.unwrap(), 182.0 / 360.0);
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&DayCountConvention::ActActIsda).unwrap();
        assert_eq!(json, "\"ACT/ACT-ISDA\"");

        let parsed: DayCountConvention = serde_json::from_str("\"A/365\"").unwrap();
        assert_eq!(parsed, DayCountConvention::Act365);

        assert!(serde_json::from_str::<DayCountConvention>("\"BUS/252\"").is_err());
    }
}
