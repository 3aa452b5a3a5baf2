//! Display configuration.
//!
//! Everything the display can be tuned with, serializable to JSON so a run
//! can be described by a file:
//!
//! ```json
//! {
//!   "lines": ["HELLO", "WORLD"],
//!   "motion": { "repulsion_radius": 150.0 },
//!   "seed": 7
//! }
//! ```
//!
//! Missing fields take their defaults.

use crate::error::ConfigError;
use crate::layout::LayoutConfig;
use crate::motion::MotionConfig;
use crate::particle::ParticleStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete display configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    /// Initial logical window size.
    pub window_size: [u32; 2],
    /// Lines of text, top to bottom.
    pub lines: Vec<String>,
    pub layout: LayoutConfig,
    pub motion: MotionConfig,
    pub style: ParticleStyle,
    /// Seed for fly-in offsets and initial glow hues. Random when absent.
    pub seed: Option<u64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Neon Text".into(),
            window_size: [1280, 720],
            lines: vec!["MICROSOFT".into(), "WINUI 3".into(), "MEHDIMYADI".into()],
            layout: LayoutConfig::default(),
            motion: MotionConfig::default(),
            style: ParticleStyle::default(),
            seed: None,
        }
    }
}

impl DisplayConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
