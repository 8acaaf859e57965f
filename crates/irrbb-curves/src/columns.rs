//! Column names of the canonical long-form curve table.
//!
//! The ingestion layer produces one row per `(index, tenor)` quote with five
//! columns. The names default to `IndexName`, `Tenor`, `FwdRate`, `TenorDate`
//! and `YearFrac` and can be overridden for tables produced under other
//! naming schemes.

use std::collections::BTreeMap;

use irrbb_core::table::Table;
use irrbb_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::curves::CurvePoint;
use crate::error::{CurveError, CurveResult};

/// Names of the five canonical curve-table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveColumns {
    /// Index name column (text).
    pub index: String,
    /// Tenor code column (text).
    pub tenor: String,
    /// Continuously compounded rate column (float).
    pub rate: String,
    /// Pillar date column (date).
    pub tenor_date: String,
    /// Year fraction from the analysis date column (float).
    pub year_frac: String,
}

impl Default for CurveColumns {
    fn default() -> Self {
        Self {
            index: "IndexName".to_string(),
            tenor: "Tenor".to_string(),
            rate: "FwdRate".to_string(),
            tenor_date: "TenorDate".to_string(),
            year_frac: "YearFrac".to_string(),
        }
    }
}

impl CurveColumns {
    /// The five column names, in canonical order.
    pub fn required(&self) -> [&str; 5] {
        [
            self.index.as_str(),
            self.tenor.as_str(),
            self.rate.as_str(),
            self.tenor_date.as_str(),
            self.year_frac.as_str(),
        ]
    }

    /// Required columns absent from `table`.
    pub fn missing<'a>(&'a self, table: &Table) -> Vec<&'a str> {
        table.missing_columns(&self.required())
    }

    /// Checks that `table` carries every required column.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveTable` naming all missing columns.
    pub fn require(&self, table: &Table) -> CurveResult<()> {
        let missing = self.missing(table);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CurveError::invalid_curve_table(format!(
                "missing required columns {missing:?}"
            )))
        }
    }

    /// Typed, borrowed view of the curve columns of `table`.
    pub(crate) fn view<'a>(&self, table: &'a Table) -> CurveResult<CurveTableView<'a>> {
        self.require(table)?;
        let typed = |e: irrbb_core::CoreError| CurveError::invalid_curve_table(e.to_string());

        Ok(CurveTableView {
            index: table.text(&self.index).map_err(typed)?,
            tenor: table.text(&self.tenor).map_err(typed)?,
            rate: table.float(&self.rate).map_err(typed)?,
            tenor_date: table.date(&self.tenor_date).map_err(typed)?,
            year_frac: table.float(&self.year_frac).map_err(typed)?,
            columns: self.clone(),
        })
    }
}

/// Borrowed cells of a validated curve table.
pub(crate) struct CurveTableView<'a> {
    index: &'a [Option<String>],
    tenor: &'a [Option<String>],
    rate: &'a [Option<f64>],
    tenor_date: &'a [Option<Date>],
    year_frac: &'a [Option<f64>],
    columns: CurveColumns,
}

impl CurveTableView<'_> {
    /// Builds the pillar stored in `row`, attributed to `index_name`.
    fn point(&self, row: usize, index_name: &str) -> CurveResult<CurvePoint> {
        let null = |column: &str| {
            CurveError::invalid_curve(index_name, format!("row {row} has null {column}"))
        };

        let year_frac = self.year_frac[row].ok_or_else(|| null(&self.columns.year_frac))?;
        let rate = self.rate[row].ok_or_else(|| null(&self.columns.rate))?;
        let tenor = self.tenor[row]
            .as_deref()
            .ok_or_else(|| null(&self.columns.tenor))?;
        let tenor_date = self.tenor_date[row].ok_or_else(|| null(&self.columns.tenor_date))?;

        Ok(CurvePoint::new(year_frac, rate, tenor, tenor_date))
    }

    /// Pillars of the rows whose index equals `index_name`, in row order.
    pub(crate) fn points_for(&self, index_name: &str) -> CurveResult<Vec<CurvePoint>> {
        self.index
            .iter()
            .enumerate()
            .filter(|(_, name)| name.as_deref() == Some(index_name))
            .map(|(row, _)| self.point(row, index_name))
            .collect()
    }

    /// Pillars of every row grouped by index name.
    ///
    /// A row without an index name cannot be attributed to a curve and makes
    /// the whole table invalid.
    pub(crate) fn group(&self) -> CurveResult<BTreeMap<String, Vec<CurvePoint>>> {
        let mut groups: BTreeMap<String, Vec<CurvePoint>> = BTreeMap::new();
        for (row, name) in self.index.iter().enumerate() {
            let Some(name) = name.as_deref() else {
                return Err(CurveError::invalid_curve_table(format!(
                    "row {row} has null {}",
                    self.columns.index
                )));
            };
            let point = self.point(row, name)?;
            groups.entry(name.to_string()).or_default().push(point);
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irrbb_core::table::Column;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn table() -> Table {
        Table::new()
            .with_column("IndexName", Column::text(["EUR_ESTR", "USD_SOFR", "EUR_ESTR"]))
            .unwrap()
            .with_column("Tenor", Column::text(["1Y", "1Y", "2Y"]))
            .unwrap()
            .with_column("FwdRate", Column::float([0.02, 0.04, 0.03]))
            .unwrap()
            .with_column(
                "TenorDate",
                Column::date([d(2025, 1, 1), d(2025, 1, 1), d(2026, 1, 1)]),
            )
            .unwrap()
            .with_column("YearFrac", Column::float([1.0, 1.0, 2.0]))
            .unwrap()
    }

    #[test]
    fn test_missing_columns_are_all_reported() {
        let table = Table::new()
            .with_column("IndexName", Column::text(["EUR_ESTR"]))
            .unwrap();
        let err = CurveColumns::default().require(&table).unwrap_err();
        let msg = err.to_string();
        for column in ["Tenor", "FwdRate", "TenorDate", "YearFrac"] {
            assert!(msg.contains(column), "{msg}");
        }
    }

    #[test]
    fn test_wrong_column_type() {
        let mut table = table();
        table
            .set_column("YearFrac", Column::text(["1", "1", "2"]))
            .unwrap();
        assert!(matches!(
            CurveColumns::default().view(&table).err(),
            Some(CurveError::InvalidCurveTable { .. })
        ));
    }

    #[test]
    fn test_group_by_index() {
        let table = table();
        let columns = CurveColumns::default();
        let groups = columns.view(&table).unwrap().group().unwrap();
        assert_eq!(groups.keys().collect::<Vec<_>>(), ["EUR_ESTR", "USD_SOFR"]);
        assert_eq!(groups["EUR_ESTR"].len(), 2);
        assert_eq!(groups["USD_SOFR"][0].rate(), 0.04);
    }

    #[test]
    fn test_null_rate_names_the_index() {
        let mut table = table();
        table
            .set_column("FwdRate", Column::Float(vec![Some(0.02), Some(0.04), None]))
            .unwrap();
        let columns = CurveColumns::default();
        let err = columns.view(&table).unwrap().points_for("EUR_ESTR").unwrap_err();
        assert!(matches!(err, CurveError::InvalidCurve { ref index_name, .. } if index_name == "EUR_ESTR"));
    }

    #[test]
    fn test_custom_names_from_toml() {
        let columns: CurveColumns = toml::from_str("rate = \"Rate\"").unwrap();
        assert_eq!(columns.rate, "Rate");
        assert_eq!(columns.index, "IndexName");
    }
}
