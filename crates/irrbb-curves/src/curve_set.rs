//! Dated collection of forward curves keyed by index name.
//!
//! A [`ForwardCurveSet`] is the aggregate handed to downstream EVE/NII
//! analytics. It owns the canonical long table it was built from, so that
//! scenario shocks can derive new sets by shifting the table and rebuilding.

use std::collections::{BTreeMap, BTreeSet};

use irrbb_core::daycounts::DayCountConvention;
use irrbb_core::table::Table;
use irrbb_core::types::Date;

use crate::columns::CurveColumns;
use crate::curves::ForwardCurve;
use crate::error::{CurveError, CurveResult};
use crate::quotes::{enrich_with_dates, wide_to_long, WideQuotes};
use crate::summary::{CurvePointSummary, CurveSummary};

/// Forward curves for every index quoted on one analysis date.
///
/// # Thread Safety
///
/// The set is never mutated after construction and is `Send + Sync`; any
/// number of threads may query it or derive scenarios from it concurrently.
///
/// # Example
///
/// ```rust
/// use irrbb_core::prelude::*;
/// use irrbb_curves::curve_set::ForwardCurveSet;
///
/// let analysis = Date::from_ymd(2025, 1, 1).unwrap();
/// let table = Table::new()
///     .with_column("IndexName", Column::text(["EUR_ESTR", "EUR_ESTR"])).unwrap()
///     .with_column("Tenor", Column::text(["1Y", "2Y"])).unwrap()
///     .with_column("FwdRate", Column::float([0.02, 0.03])).unwrap()
///     .with_column("TenorDate", Column::date([
///         Date::from_ymd(2026, 1, 1).unwrap(),
///         Date::from_ymd(2027, 1, 1).unwrap(),
///     ])).unwrap()
///     .with_column("YearFrac", Column::float([1.0, 2.0])).unwrap();
///
/// let set = ForwardCurveSet::from_table(analysis, DayCountConvention::Act365, table).unwrap();
/// assert_eq!(set.available_indices(), ["EUR_ESTR"]);
///
/// let df = set.discount_factor_on_date("EUR_ESTR", analysis).unwrap();
/// assert_eq!(df, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCurveSet {
    analysis_date: Date,
    day_count: DayCountConvention,
    /// Canonical long table the curves were built from.
    raw_points: Table,
    curves: BTreeMap<String, ForwardCurve>,
    columns: CurveColumns,
}

impl ForwardCurveSet {
    /// Assembles a set from already-built curves.
    ///
    /// `raw_points` must be the table the curves were built from, under the
    /// default column names: shocks rebuild every curve from it, so the
    /// curves are checked against a rebuild of the table.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if two curves share an index name,
    /// and `CurveError::InvalidCurveTable` if the curves differ from those
    /// `raw_points` describes.
    pub fn new(
        analysis_date: Date,
        day_count: DayCountConvention,
        raw_points: Table,
        curves: Vec<ForwardCurve>,
    ) -> CurveResult<Self> {
        let mut by_index = BTreeMap::new();
        for curve in curves {
            let name = curve.index_name().to_string();
            if by_index.insert(name.clone(), curve).is_some() {
                return Err(CurveError::invalid_curve(name, "duplicate curve for index"));
            }
        }

        let columns = CurveColumns::default();
        let rebuilt = build_curves(&raw_points, &columns)?;
        if let Some(name) = first_mismatch(&by_index, &rebuilt) {
            return Err(CurveError::invalid_curve_table(format!(
                "curve for index '{name}' does not match the raw points"
            )));
        }

        Ok(Self {
            analysis_date,
            day_count,
            raw_points,
            curves: by_index,
            columns,
        })
    }

    /// Builds one curve per index of a canonical long table.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveTable` if required columns are
    /// missing, and `CurveError::InvalidCurve` if any index's pillars are
    /// invalid.
    pub fn from_table(
        analysis_date: Date,
        day_count: DayCountConvention,
        table: Table,
    ) -> CurveResult<Self> {
        Self::with_columns(analysis_date, day_count, table, CurveColumns::default())
    }

    /// Like [`ForwardCurveSet::from_table`] with custom column names.
    pub fn with_columns(
        analysis_date: Date,
        day_count: DayCountConvention,
        table: Table,
        columns: CurveColumns,
    ) -> CurveResult<Self> {
        let curves = build_curves(&table, &columns)?;

        tracing::debug!(
            %analysis_date,
            %day_count,
            indices = curves.len(),
            rows = table.len(),
            "Built forward curve set"
        );

        Ok(Self {
            analysis_date,
            day_count,
            raw_points: table,
            curves,
            columns,
        })
    }

    /// Builds a set from a wide quote grid.
    ///
    /// The grid is flattened into a long table, every tenor is dated from
    /// `analysis_date` and year fractions are computed under `day_count`.
    ///
    /// # Errors
    ///
    /// Fails on an empty grid, unsupported tenors or invalid curves.
    pub fn from_quotes(
        quotes: &WideQuotes,
        analysis_date: Date,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
        let columns = CurveColumns::default();
        let long = wide_to_long(quotes, &columns)?;
        let table = enrich_with_dates(&long, analysis_date, day_count, &columns)?;
        Self::with_columns(analysis_date, day_count, table, columns)
    }

    /// Rebuilds a set of the same date and convention from a new table.
    pub(crate) fn derive(&self, table: Table) -> CurveResult<Self> {
        Self::with_columns(self.analysis_date, self.day_count, table, self.columns.clone())
    }

    /// The date all year fractions are measured from.
    pub fn analysis_date(&self) -> Date {
        self.analysis_date
    }

    /// The convention turning dates into year fractions.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// The canonical long table backing the curves.
    pub fn raw_points(&self) -> &Table {
        &self.raw_points
    }

    /// Column names of the backing table.
    pub fn columns(&self) -> &CurveColumns {
        &self.columns
    }

    /// All curves, ordered by index name.
    pub fn curves(&self) -> impl Iterator<Item = &ForwardCurve> {
        self.curves.values()
    }

    /// Index names with a curve, sorted.
    pub fn available_indices(&self) -> Vec<String> {
        self.curves.keys().cloned().collect()
    }

    /// Returns true if the set has a curve for `index_name`.
    pub fn contains(&self, index_name: &str) -> bool {
        self.curves.contains_key(index_name)
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if the set holds no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Returns the curve for `index_name`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::UnknownIndex` listing the available indices.
    pub fn get(&self, index_name: &str) -> CurveResult<&ForwardCurve> {
        self.curves.get(index_name).ok_or_else(|| {
            CurveError::unknown_index(vec![index_name.to_string()], self.available_indices())
        })
    }

    /// Checks that every named index has a curve.
    ///
    /// Names are trimmed; blanks and repeats are ignored.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::UnknownIndex` listing every missing name (sorted)
    /// and every available index.
    pub fn require_indices<I, S>(&self, names: I) -> CurveResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let missing: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty() && !self.contains(name))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CurveError::unknown_index(
                missing.into_iter().collect(),
                self.available_indices(),
            ))
        }
    }

    /// Year fraction from the analysis date to `date` under the set's
    /// convention.
    ///
    /// # Errors
    ///
    /// Fails with `CoreError::InvalidDateOrder` for dates before the
    /// analysis date.
    pub fn year_fraction_from_analysis(&self, date: Date) -> CurveResult<f64> {
        Ok(self.day_count.year_fraction(self.analysis_date, date)?)
    }

    /// Zero rate of `index_name` at `date`.
    pub fn rate_on_date(&self, index_name: &str, date: Date) -> CurveResult<f64> {
        let curve = self.get(index_name)?;
        let t = self.year_fraction_from_analysis(date)?;
        Ok(curve.zero_rate(t))
    }

    /// Discount factor of `index_name` at `date`.
    pub fn discount_factor_on_date(&self, index_name: &str, date: Date) -> CurveResult<f64> {
        let curve = self.get(index_name)?;
        let t = self.year_fraction_from_analysis(date)?;
        Ok(curve.discount_factor(t))
    }

    /// Pillars of one curve with their discount factors.
    pub fn curve_points(&self, index_name: &str) -> CurveResult<Vec<CurvePointSummary>> {
        Ok(self
            .get(index_name)?
            .points()
            .iter()
            .map(CurvePointSummary::from)
            .collect())
    }

    /// One summary line per curve, ordered by index name.
    pub fn curve_summaries(&self) -> Vec<CurveSummary> {
        self.curves.values().map(CurveSummary::from).collect()
    }
}

/// Groups a long table into one validated curve per index.
fn build_curves(
    table: &Table,
    columns: &CurveColumns,
) -> CurveResult<BTreeMap<String, ForwardCurve>> {
    columns
        .view(table)?
        .group()?
        .into_iter()
        .map(|(name, points)| ForwardCurve::new(name.clone(), points).map(|curve| (name, curve)))
        .collect()
}

/// First index whose curve is missing from, extra to or different in `rebuilt`.
fn first_mismatch<'a>(
    given: &'a BTreeMap<String, ForwardCurve>,
    rebuilt: &'a BTreeMap<String, ForwardCurve>,
) -> Option<&'a str> {
    given
        .keys()
        .chain(rebuilt.keys())
        .find(|name| given.get(*name) != rebuilt.get(*name))
        .map(String::as_str)
}
