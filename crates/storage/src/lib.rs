use directories::ProjectDirs;
use landplot_core::{BundleError, MeasurementBundle, PlotSettings, SettingsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unable to resolve local data directory")]
    NoDataDirectory,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid plot: {0}")]
    InvalidBundle(#[from] BundleError),
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsEnvelope {
    version: u32,
    settings: PlotSettings,
}

impl Storage {
    pub fn from_default_project() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("dev", "LandPlot", "LandPlot")
            .ok_or(StorageError::NoDataDirectory)?;

        Ok(Self { root: dirs.data_local_dir().to_path_buf() })
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load_settings(&self) -> Result<PlotSettings, StorageError> {
        let path = self.settings_path();
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(PlotSettings::default());
        }

        let bytes = fs::read(path)?;
        let envelope: SettingsEnvelope = serde_json::from_slice(&bytes)?;
        envelope.settings.validate()?;

        Ok(envelope.settings)
    }

    pub fn save_settings(&self, settings: &PlotSettings) -> Result<(), StorageError> {
        settings.validate()?;
        fs::create_dir_all(&self.root)?;

        let envelope =
            SettingsEnvelope { version: SETTINGS_SCHEMA_VERSION, settings: settings.clone() };

        let bytes = serde_json::to_vec_pretty(&envelope)?;
        fs::write(self.settings_path(), bytes)?;
        Ok(())
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("settings.json")
    }
}

/// Read a saved plot, rejecting segments without a usable length
///
/// A negative stored area is rejected; a stale one is not detected, so callers
/// that need the area should recompute it.
pub fn load_bundle(path: &Path) -> Result<MeasurementBundle, StorageError> {
    let bytes = fs::read(path)?;
    let bundle: MeasurementBundle = serde_json::from_slice(&bytes)?;
    bundle.validate()?;

    log::debug!("loaded {} segments from {}", bundle.lines.len(), path.display());
    Ok(bundle)
}

pub fn save_bundle(path: &Path, bundle: &MeasurementBundle) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let bytes = serde_json::to_vec_pretty(bundle)?;
    fs::write(path, bytes)?;
    Ok(())
}
