//! # IRRBB Core
//!
//! Foundational building blocks for interest-rate-risk curve analytics:
//!
//! - **Types**: [`Date`], a calendar date with month/year arithmetic
//! - **Day Count Conventions**: label normalization and year fractions for
//!   ACT/360, ACT/365, ACT/ACT-ISDA and 30/360-US
//! - **Tenors**: tenor codes (`ON`, `1W`, `3M`, `5Y`) and calendar date offsets
//! - **Tables**: the column-oriented [`Table`] used to hand curve quotes and
//!   positions between the ingestion layer and the curve engine
//!
//! ## Example
//!
//! ```rust
//! use irrbb_core::prelude::*;
//!
//! let convention = DayCountConvention::normalize("act/360").unwrap();
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = add_tenor(start, "6M").unwrap();
//!
//! let yf = convention.year_fraction(start, end).unwrap();
//! assert_eq!(yf, 182.0 / 360.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]

pub mod daycounts;
pub mod error;
pub mod table;
pub mod tenors;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{year_fraction, DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::table::{Column, ColumnKind, Table};
    pub use crate::tenors::{add_tenor, Tenor};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use daycounts::DayCountConvention;
pub use error::{CoreError, CoreResult};
pub use table::{Column, Table};
pub use tenors::Tenor;
pub use types::Date;
