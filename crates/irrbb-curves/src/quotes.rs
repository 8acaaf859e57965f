//! Quote grid normalization.
//!
//! Market data usually arrives as a wide grid: one row per index, one column
//! per tenor, cells holding rates either as numbers or as text such as
//! `"3.25%"` or `"3,25%"`. This module flattens such a grid into the
//! canonical long table and dates every pillar from the analysis date.
//!
//! ```rust
//! use irrbb_core::prelude::*;
//! use irrbb_curves::columns::CurveColumns;
//! use irrbb_curves::quotes::{enrich_with_dates, wide_to_long, QuoteCell, WideQuotes};
//!
//! let quotes = WideQuotes::new(["1M", "1Y"])
//!     .with_row("EUR_ESTR", vec![QuoteCell::from("3,10%"), QuoteCell::from(0.029)])
//!     .unwrap();
//!
//! let columns = CurveColumns::default();
//! let long = wide_to_long(&quotes, &columns).unwrap();
//! assert_eq!(long.len(), 2);
//!
//! let analysis = Date::from_ymd(2025, 1, 1).unwrap();
//! let table = enrich_with_dates(&long, analysis, DayCountConvention::Act365, &columns).unwrap();
//! assert_eq!(table.float("YearFrac").unwrap()[1], Some(1.0));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use irrbb_core::daycounts::DayCountConvention;
use irrbb_core::table::{Column, Table};
use irrbb_core::tenors::Tenor;
use irrbb_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::columns::CurveColumns;
use crate::error::{CurveError, CurveResult};

/// A raw quote cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteCell {
    /// A numeric cell, already a decimal rate.
    Number(f64),
    /// A text cell, possibly a percentage or using a decimal comma.
    Text(String),
    /// A blank cell.
    Empty,
}

impl From<f64> for QuoteCell {
    fn from(value: f64) -> Self {
        QuoteCell::Number(value)
    }
}

impl From<&str> for QuoteCell {
    fn from(value: &str) -> Self {
        QuoteCell::Text(value.to_string())
    }
}

impl From<String> for QuoteCell {
    fn from(value: String) -> Self {
        QuoteCell::Text(value)
    }
}

impl From<Option<f64>> for QuoteCell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(QuoteCell::Empty, QuoteCell::Number)
    }
}

/// Parses a quote cell into a decimal rate.
///
/// Text is trimmed; a `%` anywhere marks a percentage, spaces are removed
/// and a decimal comma becomes a point. Blank, unparsable and non-finite
/// cells yield `None`.
///
/// ```rust
/// use irrbb_curves::quotes::{parse_rate, QuoteCell};
///
/// assert_eq!(parse_rate(&QuoteCell::from(0.03)), Some(0.03));
/// assert_eq!(parse_rate(&QuoteCell::from("0.03")), Some(0.03));
/// assert_eq!(parse_rate(&QuoteCell::from("3,25%")), Some(0.0325));
/// assert_eq!(parse_rate(&QuoteCell::from("n/a")), None);
/// ```
pub fn parse_rate(cell: &QuoteCell) -> Option<f64> {
    let value = match cell {
        QuoteCell::Number(x) => *x,
        QuoteCell::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            let is_pct = text.contains('%');
            let cleaned = text.replace(['%', ' '], "").replace(',', ".");
            let parsed: f64 = cleaned.parse().ok()?;
            if is_pct {
                parsed / 100.0
            } else {
                parsed
            }
        }
        QuoteCell::Empty => return None,
    };

    value.is_finite().then_some(value)
}

/// One index row of a quote grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// Index name as found in the grid.
    pub index_name: String,
    /// One cell per grid tenor.
    pub cells: Vec<QuoteCell>,
}

/// A wide quote grid: tenors across, indices down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WideQuotes {
    /// Tenor headers, in grid order.
    pub tenors: Vec<String>,
    /// Index rows.
    pub rows: Vec<QuoteRow>,
}

impl WideQuotes {
    /// Creates an empty grid with the given tenor headers.
    pub fn new<I, S>(tenors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tenors: tenors.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends an index row.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveTable` if the row does not have one
    /// cell per tenor.
    pub fn with_row(
        mut self,
        index_name: impl Into<String>,
        cells: Vec<QuoteCell>,
    ) -> CurveResult<Self> {
        let index_name = index_name.into();
        check_row_len(&index_name, cells.len(), self.tenors.len())?;
        self.rows.push(QuoteRow { index_name, cells });
        Ok(self)
    }
}

fn check_row_len(index_name: &str, cells: usize, tenors: usize) -> CurveResult<()> {
    if cells == tenors {
        Ok(())
    } else {
        Err(CurveError::invalid_curve_table(format!(
            "row '{index_name}' has {cells} cells for {tenors} tenors"
        )))
    }
}

/// Flattens a quote grid into a long table of index, tenor and rate.
///
/// Index names are trimmed and tenors trimmed and uppercased. Rows with a
/// blank index name, columns with a blank tenor and cells that do not parse
/// as a rate are dropped.
///
/// # Errors
///
/// Returns `CurveError::InvalidCurveTable` if the grid has no tenors or a
/// row's length differs from the tenor count.
pub fn wide_to_long(quotes: &WideQuotes, columns: &CurveColumns) -> CurveResult<Table> {
    if quotes.tenors.is_empty() {
        return Err(CurveError::invalid_curve_table("quote grid has no tenor columns"));
    }

    let tenors: Vec<String> = quotes
        .tenors
        .iter()
        .map(|t| t.trim().to_uppercase())
        .collect();

    let mut index_col = Vec::new();
    let mut tenor_col = Vec::new();
    let mut rate_col = Vec::new();

    for row in &quotes.rows {
        check_row_len(&row.index_name, row.cells.len(), tenors.len())?;

        let index_name = row.index_name.trim();
        if index_name.is_empty() {
            continue;
        }

        for (tenor, cell) in tenors.iter().zip(&row.cells) {
            if tenor.is_empty() {
                continue;
            }
            if let Some(rate) = parse_rate(cell) {
                index_col.push(Some(index_name.to_string()));
                tenor_col.push(Some(tenor.clone()));
                rate_col.push(Some(rate));
            }
        }
    }

    Ok(Table::new()
        .with_column(columns.index.as_str(), Column::Text(index_col))?
        .with_column(columns.tenor.as_str(), Column::Text(tenor_col))?
        .with_column(columns.rate.as_str(), Column::Float(rate_col))?)
}

/// Adds pillar dates and year fractions to a long table.
///
/// Each row's tenor is added to `analysis_date` and the year fraction is
/// measured under `day_count`. The input table is left untouched.
///
/// # Errors
///
/// - `CurveError::InvalidCurveTable` if the table is empty or its tenor
///   column is missing, mistyped or has null cells
/// - `CurveError::UnsupportedTenors` listing every tenor that cannot be
///   dated, sorted and without repeats
pub fn enrich_with_dates(
    long: &Table,
    analysis_date: Date,
    day_count: DayCountConvention,
    columns: &CurveColumns,
) -> CurveResult<Table> {
    if long.is_empty() {
        return Err(CurveError::invalid_curve_table("no curve points to enrich"));
    }

    let tenors = long
        .text(&columns.tenor)
        .map_err(|e| CurveError::invalid_curve_table(e.to_string()))?;

    let mut dated: BTreeMap<&str, (Date, f64)> = BTreeMap::new();
    let mut unsupported = BTreeSet::new();
    for (row, tenor) in tenors.iter().enumerate() {
        let Some(tenor) = tenor.as_deref() else {
            return Err(CurveError::invalid_curve_table(format!(
                "row {row} has null {}",
                columns.tenor
            )));
        };
        if dated.contains_key(tenor) || unsupported.contains(tenor) {
            continue;
        }

        let date = Tenor::parse(tenor).and_then(|t| t.add_to(analysis_date));
        match date {
            Ok(date) => {
                let year_frac = day_count.year_fraction(analysis_date, date)?;
                dated.insert(tenor, (date, year_frac));
            }
            Err(_) => {
                unsupported.insert(tenor);
            }
        }
    }

    if !unsupported.is_empty() {
        return Err(CurveError::UnsupportedTenors {
            tenors: unsupported.into_iter().map(str::to_string).collect(),
        });
    }

    // Every row is dated at this point
    let lookup = |tenor: &Option<String>| tenor.as_deref().and_then(|t| dated.get(t)).copied();
    let tenor_dates = tenors.iter().map(|t| lookup(t).map(|(d, _)| d)).collect();
    let year_fracs = tenors.iter().map(|t| lookup(t).map(|(_, yf)| yf)).collect();

    let mut enriched = long.clone();
    enriched.set_column(columns.tenor_date.as_str(), Column::Date(tenor_dates))?;
    enriched.set_column(columns.year_frac.as_str(), Column::Float(year_fracs))?;

    tracing::debug!(
        rows = enriched.len(),
        tenors = dated.len(),
        %analysis_date,
        %day_count,
        "Dated curve quotes"
    );

    Ok(enriched)
}
