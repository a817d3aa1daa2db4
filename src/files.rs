//! Filename derivation for annual accident files.

/// Returns the canonical filename for one year of accident data.
///
/// Non-integer years are truncated toward zero, not rounded, matching the
/// source dataset's naming convention.
pub fn accident_filename<Y: Into<f64>>(year: Y) -> String {
    format!("accident_{}.csv.bz2", year.into().trunc() as i64)
}
