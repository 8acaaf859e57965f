//! Shock application.

use std::collections::{BTreeMap, BTreeSet};

use crate::curve_set::ForwardCurveSet;
use crate::error::{CurveError, CurveResult};

use super::{ParallelShock, ShockTarget};

/// Derives a new curve set with `shock` added to the targeted indices.
///
/// The base set's backing table is copied, `shift_decimal` is added to the
/// rate of every row whose index is targeted, and all curves are rebuilt.
/// Rows of other indices keep their rates bit for bit. The result has the
/// base's analysis date, day count and column names.
///
/// # Errors
///
/// - `CurveError::InvalidCurveTable` if the backing table lacks a required
///   column
/// - `CurveError::EmptyShockTarget` if an explicit target names no index
///   once trimmed
/// - `CurveError::UnknownIndex` listing targeted names absent from the base
/// - `CurveError::InvalidCurve` if a rebuilt curve fails validation
pub fn apply_parallel_shock(
    base: &ForwardCurveSet,
    shock: &ParallelShock,
    target: &ShockTarget,
) -> CurveResult<ForwardCurveSet> {
    let columns = base.columns();
    let raw = base.raw_points();
    columns.require(raw)?;

    let index_cells = raw
        .text(&columns.index)
        .map_err(|e| CurveError::invalid_curve_table(e.to_string()))?;
    let available: BTreeSet<&str> = index_cells.iter().flatten().map(String::as_str).collect();
    let selected = resolve_target(target, &available)?;

    let shift = shock.shift_decimal();
    let mut shocked = raw.clone();
    let rates = shocked
        .float_mut(&columns.rate)
        .map_err(|e| CurveError::invalid_curve_table(e.to_string()))?;
    for (rate, index_name) in rates.iter_mut().zip(index_cells) {
        let targeted = index_name
            .as_deref()
            .is_some_and(|name| selected.contains(name));
        if let (true, Some(rate)) = (targeted, rate) {
            *rate += shift;
        }
    }

    let derived = base.derive(shocked)?;

    tracing::info!(
        scenario = shock.name(),
        shift_bps = shock.shift_bps(),
        indices = ?selected,
        "Applied parallel shock"
    );

    Ok(derived)
}

/// Applies every shock to the same base, keyed by scenario name.
///
/// # Errors
///
/// Returns `CurveError::DuplicateScenario` before building anything if two
/// shocks share a name; otherwise the first failure of
/// [`apply_parallel_shock`].
pub fn apply_parallel_shocks(
    base: &ForwardCurveSet,
    shocks: &[ParallelShock],
    target: &ShockTarget,
) -> CurveResult<BTreeMap<String, ForwardCurveSet>> {
    ensure_unique_names(shocks.iter().map(ParallelShock::name))?;

    shocks
        .iter()
        .map(|shock| {
            apply_parallel_shock(base, shock, target).map(|set| (shock.name().to_string(), set))
        })
        .collect()
}

/// Like [`apply_parallel_shocks`], deriving the scenarios on the rayon pool.
///
/// Results are identical to the sequential version.
#[cfg(feature = "parallel")]
pub fn apply_parallel_shocks_par(
    base: &ForwardCurveSet,
    shocks: &[ParallelShock],
    target: &ShockTarget,
) -> CurveResult<BTreeMap<String, ForwardCurveSet>> {
    use rayon::prelude::*;

    ensure_unique_names(shocks.iter().map(ParallelShock::name))?;

    shocks
        .par_iter()
        .map(|shock| {
            apply_parallel_shock(base, shock, target).map(|set| (shock.name().to_string(), set))
        })
        .collect()
}

/// Fails on the first scenario name seen twice.
pub(crate) fn ensure_unique_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> CurveResult<()> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CurveError::duplicate_scenario(name));
        }
    }
    Ok(())
}

/// Resolves a target against the indices present in the table.
fn resolve_target(
    target: &ShockTarget,
    available: &BTreeSet<&str>,
) -> CurveResult<BTreeSet<String>> {
    let ShockTarget::Indices(names) = target else {
        return Ok(available.iter().map(|name| (*name).to_string()).collect());
    };

    let requested: BTreeSet<String> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if requested.is_empty() {
        return Err(CurveError::EmptyShockTarget);
    }

    let unknown: Vec<String> = requested
        .iter()
        .filter(|name| !available.contains(name.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(CurveError::unknown_index(
            unknown,
            available.iter().map(|name| (*name).to_string()).collect(),
        ));
    }

    Ok(requested)
}
