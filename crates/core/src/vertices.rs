//! Polygon vertex extraction
//!
//! Turns the ordered segment chain coming from the drawing surface into the
//! vertex list of a closed polygon.

use crate::segment::{Point, Segment};

/// Default tolerance (drawing-space units) for the connectivity check
pub const DEFAULT_CONNECTIVITY_TOLERANCE: f64 = 1.0;

/// Build the polygon vertex list from an ordered segment chain
///
/// The list starts at the first segment's start point followed by every
/// segment's end point. Once there are at least three vertices the loop is
/// closed by repeating the first vertex, unless the chain already ends on it.
///
/// Connectivity between consecutive segments is assumed, not checked.
pub fn extract_vertices(segments: &[Segment]) -> Vec<Point> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };

    let mut vertices = Vec::with_capacity(segments.len() + 2);
    vertices.push(first.start);
    vertices.extend(segments.iter().map(|segment| segment.end));

    if vertices.len() >= 3 && vertices.first() != vertices.last() {
        vertices.push(first.start);
    }

    vertices
}

/// A break in the segment chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectivityGap {
    /// Index of the segment whose end point does not meet the next start
    pub index: usize,
    /// Index of the following segment (wraps to 0 for the closing pair)
    pub next_index: usize,
    /// Drawing-space distance between the two points
    pub distance: f64,
}

/// Report every place where the chain is not connected within `tolerance`
///
/// The closing pair (last end to first start) is checked whenever
/// [`extract_vertices`] would close the loop, i.e. from two segments on. An
/// empty result means the chain forms a connected loop.
pub fn check_connectivity(segments: &[Segment], tolerance: f64) -> Vec<ConnectivityGap> {
    let n = segments.len();
    if n < 2 {
        return Vec::new();
    }

    (0..n)
        .filter_map(|index| {
            let next_index = (index + 1) % n;
            let distance = segments[index].end.distance_to(&segments[next_index].start);
            (distance > tolerance).then_some(ConnectivityGap { index, next_index, distance })
        })
        .collect()
}
