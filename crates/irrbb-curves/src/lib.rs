//! # IRRBB Curves
//!
//! Forward curve construction, curve-set queries and parallel rate
//! scenarios for banking-book interest rate risk (EVE/NII).
//!
//! This crate provides:
//!
//! - **Curves**: [`ForwardCurve`], a validated pillar set with log-linear
//!   discount factor interpolation and flat-forward tail extrapolation
//! - **Curve Sets**: [`ForwardCurveSet`], the dated per-index collection
//!   queried by downstream analytics, with position coverage checks
//! - **Quotes**: flattening and dating of wide quote grids
//! - **Scenarios**: named parallel shocks deriving new, independent sets
//! - **Configuration**: scenario batches loaded from TOML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use irrbb_curves::prelude::*;
//!
//! let quotes = WideQuotes::new(["3M", "1Y", "5Y"])
//!     .with_row("EUR_ESTR", vec!["3.10%".into(), "2.95%".into(), "2.70%".into()])
//!     .unwrap();
//!
//! let analysis = Date::from_ymd(2025, 1, 1).unwrap();
//! let base = ForwardCurveSet::from_quotes(&quotes, analysis, DayCountConvention::Act365).unwrap();
//!
//! let scenarios = ScenarioConfig::eba_parallel(200.0, 200.0).run(&base).unwrap();
//!
//! let date = Date::from_ymd(2028, 1, 1).unwrap();
//! let df_base = base.discount_factor_on_date("EUR_ESTR", date).unwrap();
//! let df_up = scenarios["parallel_up"].discount_factor_on_date("EUR_ESTR", date).unwrap();
//! assert!(df_up < df_base);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod columns;
pub mod config;
pub mod coverage;
pub mod curve_set;
pub mod curves;
pub mod error;
pub mod quotes;
pub mod scenarios;
pub mod summary;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::columns::CurveColumns;
    pub use crate::config::{ScenarioConfig, ShockSpec, ValidationIssue};
    pub use crate::coverage::CoverageOptions;
    pub use crate::curve_set::ForwardCurveSet;
    pub use crate::curves::{CurvePoint, ForwardCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::quotes::{enrich_with_dates, parse_rate, wide_to_long, QuoteCell, WideQuotes};
    pub use crate::scenarios::{
        apply_parallel_shock, apply_parallel_shocks, ParallelShock, ShockTarget,
    };
    pub use crate::summary::{CurvePointSummary, CurveSummary};

    pub use irrbb_core::prelude::*;
}

// Re-export commonly used types at crate root
pub use curve_set::ForwardCurveSet;
pub use curves::{CurvePoint, ForwardCurve};
pub use error::{CurveError, CurveResult};
pub use scenarios::{ParallelShock, ShockTarget};
