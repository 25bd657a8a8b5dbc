//! Real-world area scaling
//!
//! Converts a drawing-space area into square meters using the lengths the
//! user declared for each segment. Two strategies exist:
//!
//! - **Rectangle**: exactly four segments whose opposite declared lengths
//!   agree within [`RECTANGLE_TOLERANCE_M`]. The area is the product of two
//!   adjacent declared lengths and the drawn geometry is ignored.
//! - **Ratio projection**: every segment with a non-zero pixel length gives a
//!   meters-per-pixel sample; the pixel area is multiplied by the square of
//!   their mean.

use serde::Serialize;

use crate::segment::Segment;

/// Absolute tolerance, in meters, for opposite sides of a rectangle
///
/// Not relative to the side length.
pub const RECTANGLE_TOLERANCE_M: f64 = 0.1;

/// How a drawing-space area is turned into a real-world area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AreaStrategy {
    /// Declared side lengths of an (approximate) rectangle
    Rectangle { width: f64, height: f64 },
    /// Mean meters-per-pixel ratio over `samples` segments
    RatioProjection { ratio: f64, samples: usize },
    /// No closed shape or no usable ratio; the area is zero
    Degenerate,
}

impl AreaStrategy {
    /// Real-world area for the given drawing-space area
    pub fn apply(&self, pixel_area: f64) -> f64 {
        match *self {
            AreaStrategy::Rectangle { width, height } => width * height,
            AreaStrategy::RatioProjection { ratio, .. } => pixel_area * ratio * ratio,
            AreaStrategy::Degenerate => 0.0,
        }
    }

    /// Short name for reports
    pub fn name(&self) -> &'static str {
        match self {
            AreaStrategy::Rectangle { .. } => "rectangle",
            AreaStrategy::RatioProjection { .. } => "ratio_projection",
            AreaStrategy::Degenerate => "degenerate",
        }
    }
}

/// Whether the declared lengths describe a rectangle
///
/// Only opposite-side equality is checked (segments 0/2 and 1/3); angles are
/// never looked at, so any quadrilateral with matching opposite sides passes.
pub fn is_rectangle(segments: &[Segment]) -> bool {
    let [a, b, c, d] = segments else {
        return false;
    };
    (a.length - c.length).abs() < RECTANGLE_TOLERANCE_M
        && (b.length - d.length).abs() < RECTANGLE_TOLERANCE_M
}

/// Mean meters-per-pixel ratio, skipping segments without a pixel length
pub fn mean_pixel_ratio(segments: &[Segment]) -> Option<f64> {
    ratio_samples(segments).map(|(ratio, _)| ratio)
}

fn ratio_samples(segments: &[Segment]) -> Option<(f64, usize)> {
    let (sum, count) = segments
        .iter()
        .filter_map(Segment::pixel_ratio)
        .fold((0.0, 0usize), |(sum, count), ratio| (sum + ratio, count + 1));

    if count == 0 {
        return None;
    }
    Some((sum / count as f64, count))
}

/// Pick the scaling strategy for a segment chain
pub fn select_strategy(segments: &[Segment]) -> AreaStrategy {
    if segments.len() < 3 {
        return AreaStrategy::Degenerate;
    }

    if is_rectangle(segments) {
        return AreaStrategy::Rectangle { width: segments[0].length, height: segments[1].length };
    }

    match ratio_samples(segments) {
        Some((ratio, samples)) => AreaStrategy::RatioProjection { ratio, samples },
        None => AreaStrategy::Degenerate,
    }
}

/// Convert a drawing-space area to square meters
///
/// `_scale` is the "1:N" display ratio shown next to the plot. It is carried
/// for callers but takes no part in the result; the scale factor comes from
/// the declared segment lengths alone.
pub fn scale_to_real_world(pixel_area: f64, segments: &[Segment], _scale: f64) -> f64 {
    select_strategy(segments).apply(pixel_area)
}
