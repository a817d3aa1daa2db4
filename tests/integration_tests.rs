use std::fs::File;
use std::io::Write;

use bzip2::Compression;
use bzip2::write::BzEncoder;
use tempfile::TempDir;

use fars_report::aggregate::{YearEntry, read_years};
use fars_report::error::ReportError;
use fars_report::files::accident_filename;
use fars_report::load::{LoadOptions, load_table};
use fars_report::map::{MapOutcome, map_region};
use fars_report::output::{render_text, write_csv};
use fars_report::plot::SvgMap;
use fars_report::summary::summarize_years;

/// Writes one year's accident file, rows as (STATE, MONTH, LATITUDE, LONGITUD).
fn write_year(dir: &TempDir, year: i32, rows: &[(i64, i64, f64, f64)]) {
    let path = dir.path().join(accident_filename(year));
    let file = File::create(path).unwrap();
    let mut encoder = BzEncoder::new(file, Compression::default());
    writeln!(encoder, "STATE,MONTH,DAY,LATITUDE,LONGITUD").unwrap();
    for (state, month, lat, lon) in rows {
        // DAY is an unmodeled pass-through column
        writeln!(encoder, "{state},{month},15,{lat},{lon}").unwrap();
    }
    encoder.finish().unwrap();
}

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_year(
        &dir,
        2013,
        &[
            (1, 1, 32.5, -86.3),
            (1, 1, 32.7, -86.1),
            (1, 2, 33.1, -86.9),
            (4, 1, 34.0, -111.0),
            (4, 12, 99.9999, 999.9999), // sentinel coordinates
        ],
    );
    write_year(
        &dir,
        2014,
        &[(1, 2, 32.6, -86.4), (4, 3, 33.5, -112.0)],
    );
    dir
}

#[test]
fn test_load_then_summarize_pipeline() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());

    let table = load_table(&accident_filename(2013), &opts).unwrap();
    assert_eq!(table.len(), 5);

    let summary = summarize_years(&[2013, 2014], &opts);
    assert_eq!(summary.years, vec![2013, 2014]);
    assert!(summary.rows.len() >= 1 && summary.rows.len() <= 12);

    // cells sum to the total record count across both files
    assert_eq!(summary.total_count(), 7);

    // month 1: 4 records in 2013, none in 2014 (explicit zero)
    let month1 = summary.rows.iter().find(|r| r.month == 1).unwrap();
    assert_eq!(month1.counts, vec![4, 0]);
}

#[test]
fn test_summarize_with_one_bad_year() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());

    let entries = read_years(&[2013, 9999], &opts);
    assert_eq!(entries.len(), 2);
    assert!(matches!(entries[0], YearEntry::Loaded(_)));
    assert_eq!(entries[1], YearEntry::Missing(9999));

    // the bad year degrades; the good year still summarizes
    let summary = summarize_years(&[2013, 9999], &opts);
    assert_eq!(summary.years, vec![2013]);
    assert_eq!(summary.total_count(), 5);
}

#[test]
fn test_summarize_twice_is_identical() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());
    let first = summarize_years(&[2013, 2014], &opts);
    let second = summarize_years(&[2013, 2014], &opts);
    assert_eq!(first, second);
}

#[test]
fn test_summary_csv_export() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());
    let summary = summarize_years(&[2013, 2014], &opts);

    let csv_path = dir.path().join("summary.csv");
    write_csv(&csv_path, &summary).unwrap();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents.starts_with("month,2013,2014"));

    let text = render_text(&summary);
    assert!(text.contains("Jan"));
}

#[test]
fn test_map_region_end_to_end() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());

    let svg_path = dir.path().join("region_1.svg");
    let mut backend = SvgMap::new(&svg_path);

    let outcome = map_region(1, 2013, &opts, &mut backend).unwrap();
    assert_eq!(outcome, MapOutcome::Plotted { points: 3 });

    let contents = std::fs::read_to_string(&svg_path).unwrap();
    assert!(contents.contains("<svg"));
}

#[test]
fn test_map_region_sentinel_rows_dropped() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());

    let svg_path = dir.path().join("region_4.svg");
    let mut backend = SvgMap::new(&svg_path);

    // region 4 has two real rows in 2013 but one carries sentinel coordinates
    let outcome = map_region(4, 2013, &opts, &mut backend).unwrap();
    assert_eq!(outcome, MapOutcome::Plotted { points: 1 });
}

#[test]
fn test_map_region_unknown_region() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());
    let mut backend = SvgMap::new(dir.path().join("never_written.svg"));

    let err = map_region(73, 2013, &opts, &mut backend).unwrap_err();
    assert!(matches!(err, ReportError::InvalidRegion(73)));
    assert!(!dir.path().join("never_written.svg").exists());
}

#[test]
fn test_map_region_missing_year_is_fatal() {
    let dir = fixture_dir();
    let opts = LoadOptions::new(dir.path());
    let mut backend = SvgMap::new(dir.path().join("never_written.svg"));

    let err = map_region(1, 9999, &opts, &mut backend).unwrap_err();
    assert!(matches!(err, ReportError::NotFound(_)));
}
