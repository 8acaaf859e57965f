//! Forward curve with log-linear discount factor interpolation.

use irrbb_core::table::Table;

use super::CurvePoint;
use crate::columns::CurveColumns;
use crate::error::{CurveError, CurveResult};

/// An immutable, validated curve for one rate index.
///
/// Pillars are held sorted by year fraction, strictly increasing. Queries
/// interpolate linearly in `ln DF`, where each pillar contributes
/// `ln DF_i = -rate_i * year_frac_i`:
///
/// - `t <= 0`: `DF = 1`
/// - `0 < t <= t_1`: between the origin `(0, 0)` and the first pillar
/// - `t_1 < t < t_n`: between the bracketing pillars
/// - `t >= t_n`: the final segment's slope is continued, i.e. a flat
///   instantaneous forward rate in the tail (not a flat zero rate)
///
/// A single-pillar curve uses the origin-to-pillar line everywhere.
///
/// # Example
///
/// ```rust
/// use irrbb_core::types::Date;
/// use irrbb_curves::curves::{CurvePoint, ForwardCurve};
///
/// let date = Date::from_ymd(2025, 1, 1).unwrap();
/// let curve = ForwardCurve::new(
///     "EUR_ESTR",
///     vec![
///         CurvePoint::new(1.0, 0.02, "1Y", date),
///         CurvePoint::new(2.0, 0.03, "2Y", date),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(curve.discount_factor(0.0), 1.0);
/// assert!((curve.discount_factor(1.5) - (-0.04f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCurve {
    index_name: String,
    points: Vec<CurvePoint>,
    /// Pillar year fractions, parallel to `points`.
    year_fracs: Vec<f64>,
    /// Pillar `ln DF`, parallel to `points`.
    ln_dfs: Vec<f64>,
}

impl ForwardCurve {
    /// Creates a curve from pillars in any order.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if:
    /// - no pillars are given
    /// - a year fraction or rate is NaN or infinite
    /// - a year fraction is negative
    /// - two pillars share a year fraction
    pub fn new(index_name: impl Into<String>, mut points: Vec<CurvePoint>) -> CurveResult<Self> {
        let index_name = index_name.into();

        if points.is_empty() {
            return Err(CurveError::invalid_curve(index_name, "no pillars"));
        }

        if let Some(p) = points
            .iter()
            .find(|p| !p.year_frac().is_finite() || !p.rate().is_finite())
        {
            return Err(CurveError::invalid_curve(
                index_name,
                format!(
                    "non-finite pillar at tenor {}: year_frac={}, rate={}",
                    p.tenor(),
                    p.year_frac(),
                    p.rate()
                ),
            ));
        }

        if let Some(p) = points.iter().find(|p| p.year_frac() < 0.0) {
            return Err(CurveError::invalid_curve(
                index_name,
                format!("negative year fraction {} at tenor {}", p.year_frac(), p.tenor()),
            ));
        }

        points.sort_by(|a, b| a.year_frac().total_cmp(&b.year_frac()));

        // Check monotonicity
        for pair in points.windows(2) {
            if pair[1].year_frac() <= pair[0].year_frac() {
                return Err(CurveError::invalid_curve(
                    index_name,
                    format!(
                        "pillars not strictly increasing: {} ({:.6}) and {} ({:.6})",
                        pair[0].tenor(),
                        pair[0].year_frac(),
                        pair[1].tenor(),
                        pair[1].year_frac()
                    ),
                ));
            }
        }

        let year_fracs = points.iter().map(CurvePoint::year_frac).collect();
        let ln_dfs = points.iter().map(CurvePoint::ln_discount_factor).collect();

        Ok(Self {
            index_name,
            points,
            year_fracs,
            ln_dfs,
        })
    }

    /// Builds the curve for `index_name` from the rows of a long-form table.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveTable` if columns are missing or
    /// mistyped, and `CurveError::InvalidCurve` if no row belongs to the
    /// index, a selected row has a null cell, or the pillars are invalid.
    pub fn from_table(
        table: &Table,
        index_name: &str,
        columns: &CurveColumns,
    ) -> CurveResult<Self> {
        let points = columns.view(table)?.points_for(index_name)?;
        if points.is_empty() {
            return Err(CurveError::invalid_curve(
                index_name,
                format!("no rows in column '{}'", columns.index),
            ));
        }
        Self::new(index_name, points)
    }

    /// Index this curve belongs to.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Pillars, sorted by year fraction.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Pillar year fractions, ascending.
    pub fn year_fracs(&self) -> &[f64] {
        &self.year_fracs
    }

    /// Pillar rates, in pillar order.
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(CurvePoint::rate).collect()
    }

    /// Number of pillars.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a curve has at least one pillar.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Year fraction of the last pillar.
    pub fn max_year_frac(&self) -> f64 {
        self.year_fracs[self.year_fracs.len() - 1]
    }

    /// Natural log of the discount factor at `t` years.
    pub fn ln_discount_factor(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let xs = &self.year_fracs;
        let ys = &self.ln_dfs;
        let n = xs.len();

        if n == 1 || t <= xs[0] {
            return interpolate(0.0, 0.0, xs[0], ys[0], t);
        }

        // Flat-forward tail: continue the last segment
        if t >= xs[n - 1] {
            return interpolate(xs[n - 2], ys[n - 2], xs[n - 1], ys[n - 1], t);
        }

        // Smallest pillar >= t; in 1..n-1 here
        let hi = xs.partition_point(|&x| x < t);
        interpolate(xs[hi - 1], ys[hi - 1], xs[hi], ys[hi], t)
    }

    /// Discount factor at `t` years from the analysis date.
    pub fn discount_factor(&self, t: f64) -> f64 {
        self.ln_discount_factor(t).exp()
    }

    /// Continuously compounded zero rate at `t` years.
    ///
    /// The zero rate is undefined at `t = 0`; for `t <= 0` the first
    /// pillar's quoted rate is returned.
    pub fn zero_rate(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return self.points[0].rate();
        }
        -self.ln_discount_factor(t) / t
    }

    /// Alias for [`ForwardCurve::zero_rate`].
    pub fn rate(&self, t: f64) -> f64 {
        self.zero_rate(t)
    }
}

/// Straight line through `(x0, y0)` and `(x1, y1)` evaluated at `x`.
fn interpolate(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    if x1 == x0 {
        return y1;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use irrbb_core::types::Date;

    fn pillar(year_frac: f64, rate: f64, tenor: &str) -> CurvePoint {
        CurvePoint::new(year_frac, rate, tenor, Date::from_ymd(2025, 1, 1).unwrap())
    }

    fn two_pillar() -> ForwardCurve {
        ForwardCurve::new("EUR_ESTR", vec![pillar(1.0, 0.02, "1Y"), pillar(2.0, 0.03, "2Y")])
            .unwrap()
    }

    #[test]
    fn test_discount_factor_at_origin() {
        let curve = two_pillar();
        assert_eq!(curve.discount_factor(0.0), 1.0);
        assert_eq!(curve.discount_factor(-1.0), 1.0);
    }

    #[test]
    fn test_log_linear_between_pillars() {
        let curve = two_pillar();
        let expected = (-0.02_f64 + (-0.06 - -0.02) * (1.5 - 1.0) / (2.0 - 1.0)).exp();
        assert_eq!(curve.discount_factor(1.5), expected);
        assert_relative_eq!(curve.discount_factor(1.5), (-0.04f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_pillars_are_reproduced() {
        let curve = two_pillar();
        assert_relative_eq!(curve.discount_factor(1.0), (-0.02f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(curve.discount_factor(2.0), (-0.06f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(curve.zero_rate(2.0), 0.03, epsilon = 1e-15);
    }

    #[test]
    fn test_short_end_anchors_at_origin() {
        let curve = two_pillar();
        // ln DF = -0.02 * 0.5 on the origin-to-1Y line
        assert_relative_eq!(curve.discount_factor(0.5), (-0.01f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(curve.zero_rate(0.5), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_tail_is_flat_forward() {
        let curve = two_pillar();
        // Last segment slope is -0.04 per year: ln DF(3) = -0.06 - 0.04
        assert_relative_eq!(curve.discount_factor(3.0), (-0.10f64).exp(), epsilon = 1e-14);
        // A flat zero rate would give exp(-0.09)
        assert!((curve.discount_factor(3.0) - (-0.09f64).exp()).abs() > 1e-4);
        // The tail zero rate drifts toward the 4% forward
        assert!(curve.zero_rate(10.0) > curve.zero_rate(3.0));
    }

    #[test]
    fn test_single_pillar_uses_origin_line() {
        let curve = ForwardCurve::new("USD_SOFR", vec![pillar(1.0, 0.05, "1Y")]).unwrap();
        assert_relative_eq!(curve.discount_factor(0.5), (-0.025f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(curve.discount_factor(4.0), (-0.20f64).exp(), epsilon = 1e-14);
        assert_relative_eq!(curve.zero_rate(4.0), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_at_origin_is_first_quote() {
        let curve = two_pillar();
        assert_eq!(curve.zero_rate(0.0), 0.02);
        assert_eq!(curve.rate(0.0), 0.02);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let curve = ForwardCurve::new(
            "EUR_ESTR",
            vec![pillar(2.0, 0.03, "2Y"), pillar(0.25, 0.01, "3M"), pillar(1.0, 0.02, "1Y")],
        )
        .unwrap();
        assert_eq!(curve.year_fracs(), &[0.25, 1.0, 2.0]);
        assert_eq!(curve.rates(), vec![0.01, 0.02, 0.03]);
        assert_eq!(curve.points()[0].tenor(), "3M");
        assert_eq!(curve.max_year_frac(), 2.0);
    }

    #[test]
    fn test_invalid_curves() {
        assert!(matches!(
            ForwardCurve::new("X", vec![]),
            Err(CurveError::InvalidCurve { .. })
        ));
        assert!(matches!(
            ForwardCurve::new("X", vec![pillar(1.0, 0.02, "1Y"), pillar(1.0, 0.03, "12M")]),
            Err(CurveError::InvalidCurve { .. })
        ));
        assert!(matches!(
            ForwardCurve::new("X", vec![pillar(f64::NAN, 0.02, "1Y")]),
            Err(CurveError::InvalidCurve { .. })
        ));
        assert!(matches!(
            ForwardCurve::new("X", vec![pillar(1.0, f64::INFINITY, "1Y")]),
            Err(CurveError::InvalidCurve { .. })
        ));
        assert!(matches!(
            ForwardCurve::new("X", vec![pillar(-0.5, 0.02, "1Y")]),
            Err(CurveError::InvalidCurve { .. })
        ));
    }

    #[test]
    fn test_duplicate_message_names_both_tenors() {
        let err = ForwardCurve::new("X", vec![pillar(1.0, 0.02, "1Y"), pillar(1.0, 0.03, "12M")])
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("1Y") && msg.contains("12M"), "{msg}");
    }
}
