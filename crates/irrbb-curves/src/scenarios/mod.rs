//! Rate scenarios derived from a base curve set.
//!
//! A scenario is a named [`ParallelShock`]. Applying it never touches the
//! base [`ForwardCurveSet`](crate::curve_set::ForwardCurveSet): the backing
//! table is copied, the selected indices' rates are shifted and every curve
//! is rebuilt and re-validated into a new set.

mod apply;
mod shock;

#[cfg(feature = "parallel")]
pub use apply::apply_parallel_shocks_par;
pub use apply::{apply_parallel_shock, apply_parallel_shocks};
pub(crate) use apply::ensure_unique_names;
pub use shock::{ParallelShock, ShockTarget};
