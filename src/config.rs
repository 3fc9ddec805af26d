//! Configuration loading for the visualization pipelines.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration for both pipelines.
///
/// Axis bounds are a fixed policy, not derived from the loaded data, so the
/// animation keeps a stable viewport across frames.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VizConfig {
    /// Directory holding the simulation CSV artifacts and the chart outputs.
    pub data_dir: PathBuf,
    /// Upper bound of the day axis.
    pub max_day: u32,
    /// Upper bound of the population axis (total simulated population).
    pub population_cap: u64,
    /// Plot every n-th daily record as an animation frame.
    pub frame_stride: usize,
    /// Playback delay between animation frames, in milliseconds.
    pub frame_interval_ms: u32,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("datos"),
            max_day: 365,
            population_cap: 1_000_000,
            frame_stride: 2,
            frame_interval_ms: 50,
        }
    }
}

impl VizConfig {
    /// Load configuration from a TOML file, falling back to the defaults
    /// when the file does not exist. A file that exists but cannot be read
    /// or parsed is an error.
    pub fn load_or_default(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            log::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path).with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    /// Create the data directory if it is absent.
    pub fn ensure_data_dir(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| format!("Failed to create data directory {}", self.data_dir.display()))
    }
}
