//! Output formatting and persistence for monthly summaries.
//!
//! Supports aligned text rendering, JSON serialization, and CSV export.

use std::path::Path;

use anyhow::Result;
use chrono::Month;
use tracing::{debug, info};

use crate::summary::MonthlySummary;

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &MonthlySummary) {
    debug!("{:#?}", summary);
}

/// Logs a summary as pretty-printed JSON.
pub fn print_json(summary: &MonthlySummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Three-letter month label, falling back to the raw number for values
/// outside 1..=12.
fn month_label(month: i64) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Renders the pivoted summary as an aligned text table.
pub fn render_text(summary: &MonthlySummary) -> String {
    if summary.is_empty() {
        return "(empty summary)\n".to_string();
    }

    let mut out = String::new();
    out.push_str("month");
    for year in &summary.years {
        out.push_str(&format!("  {year:>6}"));
    }
    out.push('\n');

    for row in &summary.rows {
        out.push_str(&format!("{:<5}", month_label(row.month)));
        for count in &row.counts {
            out.push_str(&format!("  {count:>6}"));
        }
        out.push('\n');
    }
    out
}

/// Writes the pivoted summary to a CSV file with a `month` column followed
/// by one column per year.
pub fn write_csv(path: &Path, summary: &MonthlySummary) -> Result<()> {
    debug!(path = %path.display(), "Writing summary CSV");

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["month".to_string()];
    header.extend(summary.years.iter().map(|y| y.to_string()));
    writer.write_record(&header)?;

    for row in &summary.rows {
        let mut record = vec![row.month.to_string()];
        record.extend(row.counts.iter().map(|c| c.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}
