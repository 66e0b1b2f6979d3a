//! Transform settings (pxkit.yaml / pxkit.json).
//!
//! Settings hold the defaults a caller would otherwise pass to each
//! transform by hand: crop margin, opacity threshold, grid style and
//! pixelation factor.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PxError, Result};
use crate::ops::{GridStyle, DEFAULT_OPACITY_THRESHOLD};

/// Transform settings loaded from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixels trimmed from each edge by `crop_border`.
    pub crop_margin: u32,

    /// Alpha cut-off for `masked_grayscale`. Stored wide so that
    /// out-of-range values can be clamped instead of rejected.
    pub opacity_threshold: i64,

    /// Style for `overlay_grid_lines`.
    pub grid: GridStyle,

    /// Block size for `downsample_upsample`.
    pub pixelate_factor: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crop_margin: 1,
            opacity_threshold: i64::from(DEFAULT_OPACITY_THRESHOLD),
            grid: GridStyle::default(),
            pixelate_factor: 2,
        }
    }
}

impl Settings {
    /// Load settings from a file. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Parse settings from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PxError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some("Check the YAML syntax and field types".to_string()),
        })
    }

    /// Parse settings from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| PxError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some("Check the JSON syntax and field types".to_string()),
        })
    }

    /// The opacity threshold clamped into `0..=255`.
    pub fn opacity_threshold(&self) -> u8 {
        let clamped = self.opacity_threshold.clamp(0, 255);
        if clamped != self.opacity_threshold {
            warn!(
                requested = self.opacity_threshold,
                clamped, "opacity threshold out of range"
            );
        }
        clamped as u8
    }
}
