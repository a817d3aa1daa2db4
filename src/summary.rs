//! Month-by-year observation counts.
//!
//! Unions the loaded years, groups by (year, month), counts, and pivots the
//! years into columns. Missing years are dropped before the union, so the
//! summary covers exactly the years whose files exist.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::aggregate::read_years;
use crate::load::LoadOptions;

/// One pivoted row: a month and its count for each year column, in the same
/// order as [`MonthlySummary::years`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub month: i64,
    pub counts: Vec<u64>,
}

/// Pivoted month × year count matrix.
///
/// Rows cover every month observed in at least one loaded year, ascending;
/// columns cover the loaded years, ascending. Cells are explicit zeros when
/// a year has no observations in an otherwise-observed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub years: Vec<i32>,
    pub rows: Vec<SummaryRow>,
}

impl MonthlySummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every cell; equals the total record count across loaded years.
    pub fn total_count(&self) -> u64 {
        self.rows.iter().map(|r| r.counts.iter().sum::<u64>()).sum()
    }
}

/// Builds the pivoted summary for the requested years.
///
/// Years whose files are absent degrade to a warning inside
/// [`read_years`]; if every year is missing the result is an empty summary,
/// not an error.
pub fn summarize_years(years: &[i32], opts: &LoadOptions) -> MonthlySummary {
    // year -> month -> count
    let mut grouped: BTreeMap<i32, BTreeMap<i64, u64>> = BTreeMap::new();

    for entry in read_years(years, opts) {
        let Some(obs) = entry.loaded() else { continue };
        let per_year = grouped.entry(obs.year).or_default();
        for &month in &obs.months {
            *per_year.entry(month).or_insert(0) += 1;
        }
    }

    let year_columns: Vec<i32> = grouped.keys().copied().collect();

    let mut months: BTreeSet<i64> = BTreeSet::new();
    for per_year in grouped.values() {
        months.extend(per_year.keys().copied());
    }

    let rows = months
        .into_iter()
        .map(|month| SummaryRow {
            month,
            counts: year_columns
                .iter()
                .map(|year| grouped[year].get(&month).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    MonthlySummary {
        years: year_columns,
        rows,
    }
}
