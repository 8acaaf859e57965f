//! Curve pillars.

use irrbb_core::types::Date;
use serde::{Deserialize, Serialize};

/// A quoted pillar of a forward curve.
///
/// The rate is a continuously compounded decimal; the pillar's discount
/// factor is `exp(-rate * year_frac)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    year_frac: f64,
    rate: f64,
    tenor: String,
    tenor_date: Date,
}

impl CurvePoint {
    /// Creates a pillar. The tenor code is trimmed and uppercased.
    pub fn new(year_frac: f64, rate: f64, tenor: impl AsRef<str>, tenor_date: Date) -> Self {
        Self {
            year_frac,
            rate,
            tenor: tenor.as_ref().trim().to_uppercase(),
            tenor_date,
        }
    }

    /// Year fraction from the analysis date.
    pub fn year_frac(&self) -> f64 {
        self.year_frac
    }

    /// Continuously compounded rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Normalized tenor code.
    pub fn tenor(&self) -> &str {
        &self.tenor
    }

    /// Pillar date.
    pub fn tenor_date(&self) -> Date {
        self.tenor_date
    }

    /// Natural log of the pillar discount factor.
    pub fn ln_discount_factor(&self) -> f64 {
        -self.rate * self.year_frac
    }

    /// Pillar discount factor.
    pub fn discount_factor(&self) -> f64 {
        self.ln_discount_factor().exp()
    }
}
