//! SVG drawing backend for region maps.
//!
//! Backdrop first (light graticule plus the bounding frame standing in for
//! the region outline), then one single-pixel marker per accident location.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use plotters::prelude::*;
use tracing::debug;

use crate::map::{GeoBounds, GeoPoint, MapBackend};

const GRATICULE_LINES: usize = 6;
const GRATICULE_COLOR: RGBColor = RGBColor(210, 210, 210);

/// Draws region maps into an SVG file.
pub struct SvgMap {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SvgMap {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SvgMap {
            path: path.into(),
            width: 800,
            height: 600,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Widens a degenerate or tight range so edge points stay visible.
fn padded(min: f64, max: f64) -> (f64, f64) {
    let pad = ((max - min) * 0.02).max(0.05);
    (min - pad, max + pad)
}

impl MapBackend for SvgMap {
    fn draw(
        &mut self,
        region: i64,
        bounds: &GeoBounds,
        points: &[GeoPoint],
    ) -> anyhow::Result<()> {
        debug!(
            region,
            points = points.len(),
            path = %self.path.display(),
            "Rendering region map"
        );

        let (lon_min, lon_max) = padded(bounds.min_longitude, bounds.max_longitude);
        let (lat_min, lat_max) = padded(bounds.min_latitude, bounds.max_latitude);

        let root = SVGBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("drawing failed: {e}"))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(lon_min..lon_max, lat_min..lat_max)
            .map_err(|e| anyhow!("drawing failed: {e}"))?;

        // backdrop: graticule then the bounding frame
        for i in 0..=GRATICULE_LINES {
            let t = i as f64 / GRATICULE_LINES as f64;
            let lon = lon_min + t * (lon_max - lon_min);
            let lat = lat_min + t * (lat_max - lat_min);
            chart
                .draw_series(LineSeries::new(
                    [(lon, lat_min), (lon, lat_max)],
                    &GRATICULE_COLOR,
                ))
                .map_err(|e| anyhow!("drawing failed: {e}"))?;
            chart
                .draw_series(LineSeries::new(
                    [(lon_min, lat), (lon_max, lat)],
                    &GRATICULE_COLOR,
                ))
                .map_err(|e| anyhow!("drawing failed: {e}"))?;
        }

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![
                    (lon_min, lat_min),
                    (lon_max, lat_min),
                    (lon_max, lat_max),
                    (lon_min, lat_max),
                    (lon_min, lat_min),
                ],
                BLACK.stroke_width(1),
            )))
            .map_err(|e| anyhow!("drawing failed: {e}"))?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|p| Pixel::new((p.longitude, p.latitude), &BLACK)),
            )
            .map_err(|e| anyhow!("drawing failed: {e}"))?;

        root.present().map_err(|e| anyhow!("drawing failed: {e}"))?;
        Ok(())
    }
}
