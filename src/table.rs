//! In-memory table of accident records.
//!
//! Holds the file's own column names plus every row as raw strings, with
//! typed extraction for the handful of columns the pipeline computes on.
//! Columns the pipeline does not model pass through untouched.

use std::collections::BTreeSet;

use csv::StringRecord;

use crate::error::{ReportError, Result};

/// One year of accident records: headers plus raw rows.
#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Table { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Position of a named column, if the file carries it.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
    }

    /// All values of an integer column, one per row.
    pub fn int_column(&self, name: &str) -> Result<Vec<i64>> {
        let idx = self.require_column(name)?;
        self.rows
            .iter()
            .map(|row| parse_int(name, row.get(idx).unwrap_or("")))
            .collect()
    }

    /// All values of a float column, one per row.
    pub fn float_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.require_column(name)?;
        self.rows
            .iter()
            .map(|row| {
                let cell = row.get(idx).unwrap_or("");
                cell.trim()
                    .parse::<f64>()
                    .map_err(|_| ReportError::InvalidCell {
                        column: name.to_string(),
                        value: cell.to_string(),
                    })
            })
            .collect()
    }

    /// Distinct values of an integer column, ascending.
    pub fn distinct_ints(&self, name: &str) -> Result<Vec<i64>> {
        let values = self.int_column(name)?;
        let set: BTreeSet<i64> = values.into_iter().collect();
        Ok(set.into_iter().collect())
    }

    /// New table keeping only rows whose integer column equals `value`.
    pub fn filter_eq_int(&self, name: &str, value: i64) -> Result<Table> {
        let idx = self.require_column(name)?;
        let mut rows = Vec::new();
        for row in &self.rows {
            let cell = row.get(idx).unwrap_or("");
            if parse_int(name, cell)? == value {
                rows.push(row.clone());
            }
        }
        Ok(Table::new(self.headers.clone(), rows))
    }
}

/// Integer cells in the source data are occasionally written with a decimal
/// point, so fall back to float parsing with truncation.
fn parse_int(column: &str, cell: &str) -> Result<i64> {
    let trimmed = cell.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(v);
    }
    trimmed
        .parse::<f64>()
        .map(|v| v.trunc() as i64)
        .map_err(|_| ReportError::InvalidCell {
            column: column.to_string(),
            value: cell.to_string(),
        })
}
