//! Plot settings
//!
//! Values the measurement panel supplies alongside the drawing: the "1:N"
//! display scale and the length given to newly drawn segments.

use serde::{Deserialize, Serialize};

/// Default "1:N" display scale
pub const DEFAULT_SCALE: u32 = 100;

/// Default declared length, in meters, of a newly drawn segment
pub const DEFAULT_SEGMENT_LENGTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("scale must be a positive integer")]
    ZeroScale,

    #[error("default segment length must be positive, got {0}")]
    InvalidDefaultLength(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotSettings {
    /// Display scale denominator, shown as "1:scale"
    pub scale: u32,
    /// Length in meters assigned to a segment when it is first drawn
    pub default_length: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE, default_length: DEFAULT_SEGMENT_LENGTH }
    }
}

impl PlotSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.scale == 0 {
            return Err(SettingsError::ZeroScale);
        }
        if !self.default_length.is_finite() || self.default_length <= 0.0 {
            return Err(SettingsError::InvalidDefaultLength(self.default_length));
        }
        Ok(())
    }

    /// Display form of the scale, e.g. `1:100`
    pub fn scale_label(&self) -> String {
        format!("1:{}", self.scale)
    }
}
