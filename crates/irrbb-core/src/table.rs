//! Column-oriented tables.
//!
//! The ingestion layer hands curve quotes and position listings to the curve
//! engine as tables of named, typed columns. Cells are nullable, because the
//! sources are spreadsheets and blanks carry meaning (a floating position
//! without an index, a quote that could not be parsed).
//!
//! ```rust
//! use irrbb_core::table::{Column, Table};
//!
//! let table = Table::new()
//!     .with_column("IndexName", Column::text(["EUR_ESTR", "EUR_ESTR"]))
//!     .unwrap()
//!     .with_column("FwdRate", Column::float([0.031, 0.029]))
//!     .unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.float("FwdRate").unwrap()[1], Some(0.029));
//! ```

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// The type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Text cells.
    Text,
    /// Floating-point cells.
    Float,
    /// Calendar date cells.
    Date,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Text => "text",
            ColumnKind::Float => "float",
            ColumnKind::Date => "date",
        };
        f.write_str(name)
    }
}

/// A typed column of nullable cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Text cells.
    Text(Vec<Option<String>>),
    /// Floating-point cells.
    Float(Vec<Option<f64>>),
    /// Calendar date cells.
    Date(Vec<Option<Date>>),
}

impl Column {
    /// Creates a text column with no nulls.
    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Column::Text(values.into_iter().map(|v| Some(v.into())).collect())
    }

    /// Creates a float column with no nulls.
    pub fn float<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Column::Float(values.into_iter().map(Some).collect())
    }

    /// Creates a date column with no nulls.
    pub fn date<I: IntoIterator<Item = Date>>(values: I) -> Self {
        Column::Date(values.into_iter().map(Some).collect())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Date(v) => v.len(),
        }
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the column type.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Text(_) => ColumnKind::Text,
            Column::Float(_) => ColumnKind::Float,
            Column::Date(_) => ColumnKind::Date,
        }
    }
}

/// A table of equally long, uniquely named columns.
///
/// Column order is preserved. Tables are plain values: cloning one yields an
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, consuming and returning the table.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ColumnMismatch` if the name is already taken or
    /// the length differs from the existing columns.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> CoreResult<Self> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(CoreError::column_mismatch(format!(
                "duplicate column '{name}'"
            )));
        }
        self.set_column(name, column)?;
        Ok(self)
    }

    /// Inserts a column, replacing any existing column of the same name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ColumnMismatch` if the length differs from the
    /// other columns.
    pub fn set_column(&mut self, name: impl Into<String>, column: Column) -> CoreResult<()> {
        let name = name.into();
        let position = self.columns.iter().position(|(n, _)| *n == name);
        let others = self.columns.len() - usize::from(position.is_some());

        if others > 0 && column.len() != self.rows {
            return Err(CoreError::column_mismatch(format!(
                "column '{name}' has {} rows, table has {}",
                column.len(),
                self.rows
            )));
        }

        self.rows = column.len();
        match position {
            Some(i) => self.columns[i].1 = column,
            None => self.columns.push((name, column)),
        }
        Ok(())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Returns true if a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Returns the column with the given name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }

    /// Names from `required` that are not columns of this table, in the
    /// order given.
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// Returns the cells of a text column.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ColumnMismatch` if the column is absent or not text.
    pub fn text(&self, name: &str) -> CoreResult<&[Option<String>]> {
        match self.column(name) {
            Some(Column::Text(values)) => Ok(values),
            other => Err(type_error(name, other, ColumnKind::Text)),
        }
    }

    /// Returns the cells of a float column.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ColumnMismatch` if the column is absent or not float.
    pub fn float(&self, name: &str) -> CoreResult<&[Option<f64>]> {
        match self.column(name) {
            Some(Column::Float(values)) => Ok(values),
            other => Err(type_error(name, other, ColumnKind::Float)),
        }
    }

    /// Returns the cells of a date column.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ColumnMismatch` if the column is absent or not date.
    pub fn date(&self, name: &str) -> CoreResult<&[Option<Date>]> {
        match self.column(name) {
            Some(Column::Date(values)) => Ok(values),
            other => Err(type_error(name, other, ColumnKind::Date)),
        }
    }

    /// Returns the cells of a float column for in-place updates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ColumnMismatch` if the column is absent or not float.
    pub fn float_mut(&mut self, name: &str) -> CoreResult<&mut [Option<f64>]> {
        let column = self
            .columns
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column);

        match column {
            Some(Column::Float(values)) => Ok(values),
            other => Err(type_error(name, other.map(|c| &*c), ColumnKind::Float)),
        }
    }
}

fn type_error(name: &str, found: Option<&Column>, expected: ColumnKind) -> CoreError {
    match found {
        None => CoreError::column_mismatch(format!("missing column '{name}'")),
        Some(column) => CoreError::column_mismatch(format!(
            "column '{name}' is {}, expected {expected}",
            column.kind()
        )),
    }
}
