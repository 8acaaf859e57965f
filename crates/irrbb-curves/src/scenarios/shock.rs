//! Parallel shock definitions.

use serde::{Deserialize, Serialize};

/// Basis points per unit rate.
const BPS_PER_UNIT: f64 = 10_000.0;

/// A named, uniform additive rate shift.
///
/// # Example
///
/// ```rust
/// use irrbb_curves::scenarios::ParallelShock;
///
/// let shock = ParallelShock::new("parallel_up", 200.0);
/// assert_eq!(shock.shift_decimal(), 0.02);
///
/// let down = ParallelShock::down(200.0);
/// assert_eq!(down.name(), "parallel_down");
/// assert_eq!(down.shift_bps(), -200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelShock {
    name: String,
    shift_bps: f64,
}

impl ParallelShock {
    /// Creates a shock of `shift_bps` basis points.
    pub fn new(name: impl Into<String>, shift_bps: f64) -> Self {
        Self {
            name: name.into(),
            shift_bps,
        }
    }

    /// Upward shift named `parallel_up`; `bps` is taken as a magnitude.
    pub fn up(bps: f64) -> Self {
        Self::new("parallel_up", bps.abs())
    }

    /// Downward shift named `parallel_down`; `bps` is taken as a magnitude.
    pub fn down(bps: f64) -> Self {
        Self::new("parallel_down", -bps.abs())
    }

    /// Scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shift in basis points.
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Shift as a decimal rate (`shift_bps / 10000`).
    pub fn shift_decimal(&self) -> f64 {
        self.shift_bps / BPS_PER_UNIT
    }
}

/// Which indices a shock moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ShockTarget {
    /// Every index of the base set.
    #[default]
    All,
    /// Only the named indices.
    Indices(Vec<String>),
}

impl ShockTarget {
    /// Targets the named indices.
    pub fn indices<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ShockTarget::Indices(names.into_iter().map(Into::into).collect())
    }
}

impl From<Option<Vec<String>>> for ShockTarget {
    fn from(value: Option<Vec<String>>) -> Self {
        value.map_or(ShockTarget::All, ShockTarget::Indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_decimal() {
        assert_eq!(ParallelShock::new("s", 25.0).shift_decimal(), 0.0025);
        assert_eq!(ParallelShock::new("s", -100.0).shift_decimal(), -0.01);
        assert_eq!(ParallelShock::new("s", 0.0).shift_decimal(), 0.0);
    }

    #[test]
    fn test_up_down_pair() {
        assert_eq!(ParallelShock::up(-200.0), ParallelShock::new("parallel_up", 200.0));
        assert_eq!(ParallelShock::down(200.0), ParallelShock::new("parallel_down", -200.0));
    }

    #[test]
    fn test_target_from_option() {
        assert_eq!(ShockTarget::from(None), ShockTarget::All);
        assert_eq!(
            ShockTarget::from(Some(vec!["EUR_ESTR".to_string()])),
            ShockTarget::indices(["EUR_ESTR"])
        );
    }
}
