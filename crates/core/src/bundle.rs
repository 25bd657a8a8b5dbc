//! Saved measurement bundle
//!
//! The `{lines, area}` document a plot is persisted and exported as. The
//! stored `area` is whatever was last written; [`MeasurementBundle::recompute`]
//! is the only trusted source for it.

use serde::{Deserialize, Serialize};

use crate::measurement::measure_parcel;
use crate::segment::{Segment, SegmentError};
use crate::settings::PlotSettings;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BundleError {
    #[error(transparent)]
    Segment(#[from] SegmentError),

    #[error("stored area must be a non-negative number, got {0}")]
    InvalidArea(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBundle {
    /// Segments in drawing order
    pub lines: Vec<Segment>,
    /// Real-world area in square meters
    pub area: f64,
}

impl MeasurementBundle {
    /// Build a bundle, measuring the segments
    pub fn from_segments(lines: Vec<Segment>, settings: &PlotSettings) -> Self {
        let area = measure_parcel(&lines, settings).area;
        Self { lines, area }
    }

    /// Refresh `area` from the current segments, returning the new value
    pub fn recompute(&mut self, settings: &PlotSettings) -> f64 {
        self.area = measure_parcel(&self.lines, settings).area;
        self.area
    }

    /// Validate every segment, stopping at the first bad one, then the area
    ///
    /// A non-negative area may still be stale; only its sign and finiteness
    /// are checked here.
    pub fn validate(&self) -> Result<(), BundleError> {
        self.lines.iter().try_for_each(Segment::validate)?;
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(BundleError::InvalidArea(self.area));
        }
        Ok(())
    }
}
