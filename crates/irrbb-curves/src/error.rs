//! Error types for curve construction, curve-set queries and scenarios.

use irrbb_core::CoreError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A curve's pillar set is empty, non-finite or not strictly increasing.
    #[error("Invalid curve '{index_name}': {reason}")]
    InvalidCurve {
        /// Index the curve was built for.
        index_name: String,
        /// Description of the violated invariant.
        reason: String,
    },

    /// The canonical long table is missing columns or has the wrong shape.
    #[error("Invalid curve table: {reason}")]
    InvalidCurveTable {
        /// Description of the table problem.
        reason: String,
    },

    /// One or more requested indices have no curve.
    #[error("Unknown index {missing:?}; available: {available:?}")]
    UnknownIndex {
        /// Every requested name without a curve.
        missing: Vec<String>,
        /// Every index the set holds.
        available: Vec<String>,
    },

    /// A shock target was given explicitly but names no index.
    #[error("Shock target is empty")]
    EmptyShockTarget,

    /// Two scenarios in one batch share a name.
    #[error("Duplicate scenario name: '{name}'")]
    DuplicateScenario {
        /// The repeated name.
        name: String,
    },

    /// Floating positions without an index name.
    #[error("{total} floating position(s) without an index name, rows {rows:?}")]
    MissingFloatIndexCoverage {
        /// Report row numbers of the first offending positions (at most 10).
        rows: Vec<usize>,
        /// Number of offending positions.
        total: usize,
    },

    /// The positions table lacks a column needed for coverage checks.
    #[error("Missing column: '{column}'")]
    MissingColumn {
        /// The missing column name.
        column: String,
    },

    /// Quote tenors that cannot be turned into dates.
    #[error("Unsupported tenors: {tenors:?}")]
    UnsupportedTenors {
        /// Offending tenor codes, sorted and unique.
        tenors: Vec<String>,
    },

    /// A scenario configuration failed to load or validate.
    #[error("Invalid scenario configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Failure from date, day count, tenor or table handling.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(index_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            index_name: index_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid curve table error.
    #[must_use]
    pub fn invalid_curve_table(reason: impl Into<String>) -> Self {
        Self::InvalidCurveTable {
            reason: reason.into(),
        }
    }

    /// Creates an unknown index error.
    #[must_use]
    pub fn unknown_index(missing: Vec<String>, available: Vec<String>) -> Self {
        Self::UnknownIndex { missing, available }
    }

    /// Creates a duplicate scenario error.
    #[must_use]
    pub fn duplicate_scenario(name: impl Into<String>) -> Self {
        Self::DuplicateScenario { name: name.into() }
    }

    /// Creates a missing column error.
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
