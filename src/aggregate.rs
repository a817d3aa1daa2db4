//! Per-year loading and projection.
//!
//! Each requested year loads independently; a year whose file is absent (or
//! unreadable) becomes an explicit [`YearEntry::Missing`] with a warning,
//! so one bad year never fails the others.

use tracing::warn;

use crate::error::Result;
use crate::files::accident_filename;
use crate::load::{LoadOptions, load_table};
use crate::table::Table;

/// The minimal projection of one loaded year: its tag and one MONTH value
/// per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearObservations {
    pub year: i32,
    pub months: Vec<i64>,
}

impl YearObservations {
    pub fn record_count(&self) -> usize {
        self.months.len()
    }
}

/// Per-year result of [`read_years`]: loaded observations or an explicit
/// missing marker for the failed year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearEntry {
    Loaded(YearObservations),
    Missing(i32),
}

impl YearEntry {
    pub fn is_missing(&self) -> bool {
        matches!(self, YearEntry::Missing(_))
    }

    pub fn loaded(&self) -> Option<&YearObservations> {
        match self {
            YearEntry::Loaded(obs) => Some(obs),
            YearEntry::Missing(_) => None,
        }
    }
}

/// Loads and projects each requested year, in order.
///
/// The result always has the same length and order as the input. Failures
/// are contained per year: the entry becomes [`YearEntry::Missing`] and an
/// "invalid year" warning is emitted.
pub fn read_years(years: &[i32], opts: &LoadOptions) -> Vec<YearEntry> {
    years
        .iter()
        .map(|&year| match read_year(year, opts) {
            Ok(obs) => YearEntry::Loaded(obs),
            Err(e) => {
                warn!(year, error = %e, "invalid year");
                YearEntry::Missing(year)
            }
        })
        .collect()
}

fn read_year(year: i32, opts: &LoadOptions) -> Result<YearObservations> {
    let filename = accident_filename(year);
    let table = load_table(&filename, opts)?;
    project(year, &table)
}

fn project(year: i32, table: &Table) -> Result<YearObservations> {
    let months = table.int_column("MONTH")?;
    Ok(YearObservations { year, months })
}
