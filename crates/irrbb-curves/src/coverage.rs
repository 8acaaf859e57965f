//! Index coverage checks for floating-rate positions.

use serde::{Deserialize, Serialize};

use irrbb_core::table::Table;

use crate::curve_set::ForwardCurveSet;
use crate::error::{CurveError, CurveResult};

/// Largest number of offending rows reported in one error.
pub const MAX_REPORTED_ROWS: usize = 10;

/// Where to find rate types and index names in a positions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageOptions {
    /// Text column holding `fixed` / `float`.
    pub rate_type_column: String,
    /// Text column holding the floating index name.
    pub index_column: String,
    /// Added to the zero-based row position to form the reported row number.
    ///
    /// The default of 2 matches a spreadsheet with one header row.
    pub row_offset: usize,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            rate_type_column: "rate_type".to_string(),
            index_column: "index_name".to_string(),
            row_offset: 2,
        }
    }
}

impl ForwardCurveSet {
    /// Checks that every floating position names an index with a curve.
    ///
    /// A position is floating when its rate type, trimmed and lowercased,
    /// is `float`. Fixed positions are ignored.
    ///
    /// # Errors
    ///
    /// - `CurveError::MissingColumn` if either column is absent
    /// - `CurveError::MissingFloatIndexCoverage` if floating positions have a
    ///   blank index name, listing the first ten report row numbers
    /// - `CurveError::UnknownIndex` if a referenced index has no curve
    pub fn require_float_index_coverage(
        &self,
        positions: &Table,
        options: &CoverageOptions,
    ) -> CurveResult<()> {
        for column in [&options.rate_type_column, &options.index_column] {
            if !positions.has_column(column) {
                return Err(CurveError::missing_column(column.as_str()));
            }
        }

        let rate_types = positions.text(&options.rate_type_column)?;
        let index_names = positions.text(&options.index_column)?;

        let mut uncovered = Vec::new();
        let mut referenced = Vec::new();
        for (row, (rate_type, index_name)) in rate_types.iter().zip(index_names).enumerate() {
            let is_float = rate_type
                .as_deref()
                .is_some_and(|s| s.trim().eq_ignore_ascii_case("float"));
            if !is_float {
                continue;
            }

            match index_name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => referenced.push(name),
                _ => uncovered.push(row + options.row_offset),
            }
        }

        if !uncovered.is_empty() {
            tracing::warn!(
                total = uncovered.len(),
                first_rows = ?&uncovered[..uncovered.len().min(MAX_REPORTED_ROWS)],
                "Floating positions without an index name"
            );
            let total = uncovered.len();
            uncovered.truncate(MAX_REPORTED_ROWS);
            return Err(CurveError::MissingFloatIndexCoverage {
                rows: uncovered,
                total,
            });
        }

        if let Err(err) = self.require_indices(referenced) {
            tracing::warn!(error = %err, "Floating positions reference indices without a curve");
            return Err(err);
        }
        Ok(())
    }
}
