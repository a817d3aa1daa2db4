//! CLI entry point for the FARS report tool.
//!
//! Provides subcommands for deriving accident filenames, summarizing
//! observation counts by month and year, and drawing a region map.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use fars_report::{
    files::accident_filename,
    load::LoadOptions,
    map::{MapOutcome, map_region},
    output::{print_json, render_text, write_csv},
    plot::SvgMap,
    summary::summarize_years,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "fars-report")]
#[command(about = "Monthly summaries and region maps from annual accident files", long_about = None)]
struct Cli {
    /// Directory holding the accident_<year>.csv.bz2 files
    #[arg(long, env = "FARS_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Emit per-file parse diagnostics while loading
    #[arg(long, default_value_t = false, global = true)]
    verbose_load: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical filename for one year of accident data
    Filename {
        /// Year of data; fractional input is truncated
        #[arg(value_name = "YEAR")]
        year: f64,
    },
    /// Pivoted month-by-year observation counts
    Summarize {
        /// Years to include; missing years degrade to a warning
        #[arg(value_name = "YEARS", num_args = 1.., required = true)]
        years: Vec<i32>,

        /// Also write the summary to this CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Also log the summary as pretty-printed JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Draw an SVG scatter of one region's accident locations for one year
    Map {
        /// Region code as it appears in the STATE column
        #[arg(value_name = "REGION")]
        region: i64,

        /// Year of data to map
        #[arg(value_name = "YEAR")]
        year: i32,

        /// SVG file to write
        #[arg(short, long, default_value = "region_map.svg")]
        output: PathBuf,

        /// Output width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Output height in pixels
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/fars_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("fars_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let opts = LoadOptions {
        data_dir: cli.data_dir,
        verbose: cli.verbose_load,
    };

    match cli.command {
        Commands::Filename { year } => {
            println!("{}", accident_filename(year));
        }
        Commands::Summarize { years, csv, json } => {
            let summary = summarize_years(&years, &opts);
            print!("{}", render_text(&summary));

            if json {
                print_json(&summary)?;
            }
            if let Some(path) = csv {
                write_csv(&path, &summary)?;
                info!(path = %path.display(), "Summary CSV written");
            }
        }
        Commands::Map {
            region,
            year,
            output,
            width,
            height,
        } => {
            let mut backend = SvgMap::new(&output).with_size(width, height);
            match map_region(region, year, &opts, &mut backend)? {
                MapOutcome::Plotted { points } => {
                    info!(region, year, points, path = %output.display(), "Region map written");
                }
                MapOutcome::Empty => {
                    // already logged as "no accidents to plot"
                }
            }
        }
    }

    Ok(())
}
