//! Geographic scatter of one region's accidents for one year.
//!
//! Strict, single-shot pipeline: load the year (absence is fatal here,
//! unlike the summary path), validate the region code against the data,
//! filter, drop sentinel-coded coordinates, and hand the survivors to the
//! drawing backend.

use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::files::accident_filename;
use crate::load::{LoadOptions, load_table};

/// Source-dataset sentinel: longitudes above this mean "not recorded".
pub const LONGITUDE_SENTINEL: f64 = 900.0;
/// Source-dataset sentinel: latitudes above this mean "not recorded".
pub const LATITUDE_SENTINEL: f64 = 90.0;

/// One plottable accident location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Bounding box over the recorded points of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

impl GeoBounds {
    /// Tight bounds over the given points; `None` when there are no points.
    pub fn from_points(points: &[GeoPoint]) -> Option<GeoBounds> {
        let first = points.first()?;
        let mut bounds = GeoBounds {
            min_longitude: first.longitude,
            max_longitude: first.longitude,
            min_latitude: first.latitude,
            max_latitude: first.latitude,
        };
        for p in &points[1..] {
            bounds.min_longitude = bounds.min_longitude.min(p.longitude);
            bounds.max_longitude = bounds.max_longitude.max(p.longitude);
            bounds.min_latitude = bounds.min_latitude.min(p.latitude);
            bounds.max_latitude = bounds.max_latitude.max(p.latitude);
        }
        Some(bounds)
    }
}

/// Drawing collaborator: given a region outline identifier and the bounding
/// box, draw a backdrop, then each point as a minimal marker.
pub trait MapBackend {
    fn draw(
        &mut self,
        region: i64,
        bounds: &GeoBounds,
        points: &[GeoPoint],
    ) -> anyhow::Result<()>;
}

/// How a successful mapping call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOutcome {
    /// The backend drew this many points.
    Plotted { points: usize },
    /// Nothing to draw for this region and year; no backend call was made.
    Empty,
}

/// True when both coordinates carry recorded values rather than sentinels.
fn is_recorded(latitude: f64, longitude: f64) -> bool {
    latitude <= LATITUDE_SENTINEL && longitude <= LONGITUDE_SENTINEL
}

/// Maps one region's accidents for one year.
///
/// # Errors
///
/// [`ReportError::NotFound`] when the year's file is absent,
/// [`ReportError::InvalidRegion`] when the region code never occurs in the
/// loaded data. A region with zero plottable accidents is a successful
/// no-op, not an error.
pub fn map_region(
    region: i64,
    year: i32,
    opts: &LoadOptions,
    backend: &mut dyn MapBackend,
) -> Result<MapOutcome> {
    let filename = accident_filename(year);
    let table = load_table(&filename, opts)?;

    let regions = table.distinct_ints("STATE")?;
    if !regions.contains(&region) {
        return Err(ReportError::InvalidRegion(region));
    }

    let filtered = table.filter_eq_int("STATE", region)?;
    if filtered.is_empty() {
        info!(region, year, "no accidents to plot");
        return Ok(MapOutcome::Empty);
    }

    let latitudes = filtered.float_column("LATITUDE")?;
    let longitudes = filtered.float_column("LONGITUD")?;

    let points: Vec<GeoPoint> = latitudes
        .iter()
        .zip(&longitudes)
        .filter(|&(&lat, &lon)| is_recorded(lat, lon))
        .map(|(&lat, &lon)| GeoPoint {
            longitude: lon,
            latitude: lat,
        })
        .collect();

    let dropped = filtered.len() - points.len();
    if dropped > 0 {
        debug!(region, year, dropped, "Dropped sentinel-coded coordinates");
    }

    let Some(bounds) = GeoBounds::from_points(&points) else {
        // every surviving record had sentinel coordinates
        info!(region, year, "no accidents to plot");
        return Ok(MapOutcome::Empty);
    };

    backend.draw(region, &bounds, &points)?;
    Ok(MapOutcome::Plotted {
        points: points.len(),
    })
}
