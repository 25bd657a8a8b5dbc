//! Parcel measurement pipeline
//!
//! Runs vertex extraction, drawing-space area and real-world scaling over a
//! segment chain. Nothing is cached: callers re-run the pipeline whenever the
//! segments or settings change.

use serde::Serialize;

use crate::area::polygon_area;
use crate::scaling::{select_strategy, AreaStrategy};
use crate::segment::{Point, Segment};
use crate::settings::PlotSettings;
use crate::vertices::extract_vertices;

/// Result of measuring a traced parcel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelMeasurement {
    /// Closed polygon vertices in drawing space
    pub vertices: Vec<Point>,
    /// Area in squared drawing-space units
    pub pixel_area: f64,
    /// Strategy used to reach real-world units
    pub strategy: AreaStrategy,
    /// Area in square meters
    pub area: f64,
}

impl ParcelMeasurement {
    /// Area label with unit, e.g. `200.00m²`
    pub fn formatted_area(&self) -> String {
        format!("{:.2}m²", self.area)
    }
}

/// Measure the parcel outlined by `segments`
///
/// `settings.scale` is only display metadata and does not alter the area.
pub fn measure_parcel(segments: &[Segment], settings: &PlotSettings) -> ParcelMeasurement {
    let vertices = extract_vertices(segments);
    let pixel_area = polygon_area(&vertices);
    let strategy = select_strategy(segments);
    let area = strategy.apply(pixel_area);

    log::debug!(
        "measured {} segments at {}: {} strategy, {:.3} px² -> {:.3} m²",
        segments.len(),
        settings.scale_label(),
        strategy.name(),
        pixel_area,
        area
    );

    ParcelMeasurement { vertices, pixel_area, strategy, area }
}

/// Sum of the declared real-world lengths, in meters
pub fn declared_perimeter(segments: &[Segment]) -> f64 {
    segments.iter().map(|segment| segment.length).sum()
}

/// Sum of the drawn segment lengths, in drawing-space units
pub fn pixel_perimeter(segments: &[Segment]) -> f64 {
    segments.iter().map(Segment::pixel_length).sum()
}
