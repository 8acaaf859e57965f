//! 30/360 US day count convention.

use super::DayCount;
use crate::types::Date;

/// 30/360 US (NASD) day count convention.
///
/// # Rules
///
/// Applied in this order, where D1 is the start day and D2 the end day:
///
/// 1. If the start date is the last day of February, D1 = 30
/// 2. If the end date is the last day of February and D1 (after rule 1) is
///    30 or 31, D2 = 30
/// 3. If D1 is 31, D1 = 30
/// 4. If D2 is 31 and D1 is 30 or 31, D2 = 30
///
/// Rule 2 looks at D1 before rule 3 clamps it, so a start on the 31st also
/// moves an end on the last day of February to 30.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360-US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = i64::from(start.year());
        let y2 = i64::from(end.year());
        let m1 = i64::from(start.month());
        let m2 = i64::from(end.month());
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        // Rule 1
        if start.is_last_day_of_february() {
            d1 = 30;
        }
        // Rule 2
        if end.is_last_day_of_february() && d1 >= 30 {
            d2 = 30;
        }
        // Rule 3
        if d1 == 31 {
            d1 = 30;
        }
        // Rule 4
        if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_thirty360_us_full_year() {
        let dc = Thirty360US;
        assert_eq!(dc.day_count(date(2025, 1, 1), date(2026, 1, 1)), 360);
        assert_eq!(dc.year_fraction(date(2025, 1, 1), date(2026, 1, 1)), 1.0);
    }

    #[test]
    fn test_thirty360_us_month_end_to_leap_february() {
        // Jan 31 starts at 31, so Feb 29 clamps to 30; Jan 31 then clamps to 30
        let dc = Thirty360US;
        assert_eq!(dc.day_count(date(2024, 1, 31), date(2024, 2, 29)), 30);
        assert_eq!(dc.year_fraction(date(2024, 1, 31), date(2024, 2, 29)), 30.0 / 360.0);
    }

    #[test]
    fn test_thirty360_us_mid_month_to_february_end() {
        // D1 = 15 is below 30, so Feb 29 stays 29
        let dc = Thirty360US;
        assert_eq!(dc.day_count(date(2024, 1, 15), date(2024, 2, 29)), 44);
    }

    #[test]
    fn test_thirty360_us_february_end_start() {
        let dc = Thirty360US;

        // Feb 28 (non-leap) counts as 30, so Mar 31 clamps to 30
        assert_eq!(dc.day_count(date(2025, 2, 28), date(2025, 3, 31)), 30);
        // Feb 28 to Feb 28 of the next non-leap year
        assert_eq!(dc.day_count(date(2025, 2, 28), date(2026, 2, 28)), 360);
        // Feb 28 in a leap year is not the month end
        assert_eq!(dc.day_count(date(2024, 2, 28), date(2024, 3, 31)), 33);
    }

    #[test]
    fn test_thirty360_us_day_31() {
        let dc = Thirty360US;

        assert_eq!(dc.day_count(date(2025, 3, 31), date(2025, 5, 31)), 60);
        // D2 = 31 stays when D1 < 30
        assert_eq!(dc.day_count(date(2025, 3, 15), date(2025, 5, 31)), 76);
    }

    #[test]
    fn test_thirty360_us_accrual_period() {
        // 2019-12-15 to 2020-04-29: 360*1 + 30*(4-12) + (29-15)
        let dc = Thirty360US;
        assert_eq!(dc.day_count(date(2019, 12, 15), date(2020, 4, 29)), 134);
    }
}
