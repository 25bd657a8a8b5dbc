//! Segment data model
//!
//! Straight-line segments traced over a plot drawing. Coordinates live in
//! drawing space (canvas pixels); each segment also carries the real-world
//! length the user declared for it, in meters.

use serde::{Deserialize, Serialize};

/// Identifier of a drawn segment
///
/// Uniqueness is maintained by the drawing surface, not checked here.
pub type SegmentId = u64;

/// Drawing-space coordinate
///
/// Unit-less; in practice device pixels of the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean_distance(*self, *other)
    }
}

/// Straight-line distance between two drawing-space points
pub fn euclidean_distance(p: Point, q: Point) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    (dx * dx + dy * dy).sqrt()
}

/// Validation failures for a single segment
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentError {
    #[error("segment {id} has non-positive length {length}")]
    NonPositiveLength { id: SegmentId, length: f64 },

    #[error("segment {id} has a non-finite length or coordinate")]
    NonFinite { id: SegmentId },
}

/// A traced segment with its declared real-world length
///
/// Serialized with the field names the saved-plot format uses
/// (`startPoint` / `endPoint`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    #[serde(rename = "startPoint")]
    pub start: Point,
    #[serde(rename = "endPoint")]
    pub end: Point,
    /// Declared real-world length in meters
    pub length: f64,
}

impl Segment {
    /// Create a new segment
    pub fn new(id: SegmentId, start: Point, end: Point, length: f64) -> Self {
        Self { id, start, end, length }
    }

    /// Length of the segment in drawing space
    pub fn pixel_length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Meters per drawing-space unit for this segment, if it has a pixel length
    pub fn pixel_ratio(&self) -> Option<f64> {
        let pixel_length = self.pixel_length();
        if pixel_length == 0.0 {
            return None;
        }
        Some(self.length / pixel_length)
    }

    /// Check the declared length and coordinates are usable
    ///
    /// The geometry functions never call this; it is meant for input
    /// boundaries such as loading a saved plot.
    pub fn validate(&self) -> Result<(), SegmentError> {
        let coords = [self.start.x, self.start.y, self.end.x, self.end.y];
        if !self.length.is_finite() || coords.iter().any(|c| !c.is_finite()) {
            return Err(SegmentError::NonFinite { id: self.id });
        }
        if self.length <= 0.0 {
            return Err(SegmentError::NonPositiveLength { id: self.id, length: self.length });
        }
        Ok(())
    }
}
