//! Actual/Actual ISDA day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The interval is split at calendar-year boundaries. Each fragment is
/// divided by the length of the year it falls in (365 or 366) and the
/// fragments are summed. Whole calendar years strictly between the start and
/// end years contribute exactly 1.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT-ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start >= end {
            return 0.0;
        }

        let start_basis = f64::from(start.days_in_year());
        if start.year() == end.year() {
            return start.days_between(&end) as f64 / start_basis;
        }

        // Days from `start` up to Jan 1 of the following year
        let head = start.days_in_year() - start.day_of_year() + 1;
        // Days from Jan 1 of the end year up to `end`
        let tail = end.day_of_year() - 1;
        let whole_years = end.year() - start.year() - 1;

        f64::from(head) / start_basis
            + f64::from(whole_years)
            + f64::from(tail) / f64::from(end.days_in_year())
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
