//! Serializable effect configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "center": [400.0, 300.0], "intensity": 0.8 }
//! ```

use crate::emission::Emission;
use crate::error::Result;
use crate::simulation::ShatterSimulation;
use crate::spawn::SpawnContext;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one effect run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShatterConfig {
    /// Anchor point all fragments spawn from.
    pub center: [f32; 2],
    /// Initial intensity, nominally `0.0..=1.0`.
    pub intensity: f32,
    /// Emission formula coefficients.
    pub emission: Emission,
    /// Frames to run in the headless driver.
    pub frames: u32,
    /// Seconds per frame in the headless driver.
    pub fixed_delta: f32,
    /// Simulation speed multiplier (1.0 = normal, 0.5 = half speed).
    pub time_scale: f32,
}

impl Default for ShatterConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            intensity: 0.5,
            emission: Emission::default(),
            frames: 120,
            fixed_delta: 1.0 / 60.0,
            time_scale: 1.0,
        }
    }
}

impl ShatterConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    pub fn anchor(&self) -> Vec2 {
        Vec2::from_array(self.center)
    }

    /// Build a simulation from this configuration.
    pub fn build(&self) -> ShatterSimulation {
        ShatterSimulation::with_context(
            self.anchor(),
            self.intensity,
            self.emission,
            SpawnContext::from_entropy(),
        )
    }
}
