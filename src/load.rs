//! Loading one annual accident file into a [`Table`].
//!
//! The CSV parser and bz2 decoder are collaborators; this module's job is to
//! resolve the filename against the data directory, check existence, and
//! delegate.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use bzip2::read::MultiBzDecoder;
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::table::Table;

/// Where and how accident files are read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory holding the `accident_<year>.csv.bz2` files.
    pub data_dir: PathBuf,
    /// Emit per-file parse diagnostics. Off by default; parsing is silent.
    pub verbose: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            data_dir: PathBuf::from("data"),
            verbose: false,
        }
    }
}

impl LoadOptions {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        LoadOptions {
            data_dir: data_dir.into(),
            verbose: false,
        }
    }
}

/// Reads one accident file into memory.
///
/// # Errors
///
/// Returns [`ReportError::NotFound`] when the resolved path does not exist,
/// or a CSV error when the file cannot be parsed.
pub fn load_table(filename: &str, opts: &LoadOptions) -> Result<Table> {
    let path = opts.data_dir.join(filename);
    if !path.exists() {
        return Err(ReportError::NotFound(path));
    }

    if opts.verbose {
        debug!(path = %path.display(), "Reading accident file");
    }

    let file = File::open(&path)?;
    let raw: Box<dyn Read> = if path.extension().is_some_and(|e| e == "bz2") {
        Box::new(MultiBzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(raw);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }

    if opts.verbose {
        debug!(
            path = %path.display(),
            rows = rows.len(),
            columns = headers.len(),
            "Accident file parsed"
        );
    }

    Ok(Table::new(headers, rows))
}
