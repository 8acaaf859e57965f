//! Per-index forward curves.
//!
//! - [`CurvePoint`]: one quoted pillar (tenor, date, year fraction, rate)
//! - [`ForwardCurve`]: a validated pillar set with log-linear discount
//!   factor interpolation and flat-forward tail extrapolation

mod forward;
mod point;

pub use forward::ForwardCurve;
pub use point::CurvePoint;
