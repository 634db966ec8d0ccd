//! Configuration types for FrameKit

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{EdgeThresholds, ProcessingMode, Resolution};
use serde::{Deserialize, Serialize};

/// Frame processor configuration
///
/// Loadable from TOML; missing fields take their defaults:
///
/// ```toml
/// mode = "edges"
///
/// [resolution]
/// width = 1280
/// height = 720
///
/// [thresholds]
/// low = 40.0
/// high = 120.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Processing mode applied to each frame
    pub mode: ProcessingMode,
    /// Camera frame resolution
    pub resolution: Resolution,
    /// Edge detection hysteresis thresholds
    pub thresholds: EdgeThresholds,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            mode: ProcessingMode::PassThrough,
            resolution: Resolution::VGA,
            thresholds: EdgeThresholds::default(),
        }
    }
}

impl ProcessorConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Resolution::new(width, height);
        self
    }

    pub fn with_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_thresholds(mut self, low: f64, high: f64) -> Self {
        self.thresholds = EdgeThresholds::new(low, high);
        self
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}
