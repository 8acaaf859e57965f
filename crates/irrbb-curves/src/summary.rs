//! Serializable curve listings for reporting and charting.

use irrbb_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::curves::{CurvePoint, ForwardCurve};

/// One pillar with its discount factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePointSummary {
    /// Normalized tenor code.
    pub tenor: String,
    /// Pillar date.
    pub tenor_date: Date,
    /// Year fraction from the analysis date.
    pub year_frac: f64,
    /// Continuously compounded rate.
    pub rate: f64,
    /// `exp(-rate * year_frac)`.
    pub discount_factor: f64,
}

impl From<&CurvePoint> for CurvePointSummary {
    fn from(point: &CurvePoint) -> Self {
        Self {
            tenor: point.tenor().to_string(),
            tenor_date: point.tenor_date(),
            year_frac: point.year_frac(),
            rate: point.rate(),
            discount_factor: point.discount_factor(),
        }
    }
}

/// Shape of one curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    /// Index name.
    pub index_name: String,
    /// Number of pillars.
    pub pillar_count: usize,
    /// Shortest tenor.
    pub first_tenor: String,
    /// Longest tenor.
    pub last_tenor: String,
    /// Year fraction of the longest pillar.
    pub max_year_frac: f64,
}

impl From<&ForwardCurve> for CurveSummary {
    fn from(curve: &ForwardCurve) -> Self {
        let points = curve.points();
        let tenor_at = |i: usize| points.get(i).map(|p| p.tenor().to_string()).unwrap_or_default();

        Self {
            index_name: curve.index_name().to_string(),
            pillar_count: points.len(),
            first_tenor: tenor_at(0),
            last_tenor: tenor_at(points.len().saturating_sub(1)),
            max_year_frac: curve.max_year_frac(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_summary_serializes() {
        let point = CurvePoint::new(1.0, 0.0, "1Y", Date::from_ymd(2026, 1, 1).unwrap());
        let json = serde_json::to_value(CurvePointSummary::from(&point)).unwrap();
        assert_eq!(json["tenor"], "1Y");
        assert_eq!(json["tenor_date"], "2026-01-01");
        assert_eq!(json["discount_factor"], 1.0);
    }
}
