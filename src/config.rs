// Host configuration: which camera to open, how the framing rect is laid out,
// and the overlay's StyleConfig. Stored as JSON, every key optional.
// See config/viewfinder.example.json.

use crate::error::Result;
use crate::geometry::DEFAULT_MARGIN_FRACTION;
use crate::style::{DEFAULT_TICK_INTERVAL_MS, StyleConfig};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub camera_index: u32,
    /// Requested capture size; the camera may pick something close.
    pub resolution: (u32, u32),
    /// Fixed framing rect size. `None` derives it from the margin fraction.
    pub framing_size: Option<(i32, i32)>,
    pub margin_fraction: f64,
    /// Image for the scan line. `None` uses the built-in gradient.
    pub laser_asset: Option<PathBuf>,
    pub tick_interval_ms: u64,
    pub style: StyleConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            resolution: (640, 480),
            framing_size: None,
            margin_fraction: DEFAULT_MARGIN_FRACTION,
            laser_asset: None,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            style: StyleConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
