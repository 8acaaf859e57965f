//! Error types for the core crate.
//!
//! Every failure here is a data or programmer error and is surfaced to the
//! caller immediately; nothing is retried or recovered.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for dates, day counts, tenors and tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date construction or arithmetic.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// The day count label matches none of the supported conventions.
    #[error("Unsupported day count convention: '{label}'")]
    UnsupportedConvention {
        /// The label as supplied by the caller.
        label: String,
    },

    /// The end of an interval precedes its start.
    #[error("Invalid date order: end {end} precedes start {start}")]
    InvalidDateOrder {
        /// Interval start.
        start: Date,
        /// Interval end.
        end: Date,
    },

    /// The tenor code could not be parsed.
    #[error("Unsupported tenor: '{tenor}'")]
    UnsupportedTenor {
        /// The tenor code as supplied by the caller.
        tenor: String,
    },

    /// A table column is missing, has the wrong type or the wrong length.
    #[error("Column error: {reason}")]
    ColumnMismatch {
        /// Description of the mismatch.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported_convention(label: impl Into<String>) -> Self {
        Self::UnsupportedConvention {
            label: label.into(),
        }
    }

    /// Creates an invalid date order error.
    #[must_use]
    pub fn invalid_date_order(start: Date, end: Date) -> Self {
        Self::InvalidDateOrder { start, end }
    }

    /// Creates an unsupported tenor error.
    #[must_use]
    pub fn unsupported_tenor(tenor: impl Into<String>) -> Self {
        Self::UnsupportedTenor {
            tenor: tenor.into(),
        }
    }

    /// Creates a column mismatch error.
    #[must_use]
    pub fn column_mismatch(reason: impl Into<String>) -> Self {
        Self::ColumnMismatch {
            reason: reason.into(),
        }
    }
}
