//! Intensity-driven emission formulas.
//!
//! Intensity is a scalar control, nominally in `[0, 1]`, that drives three
//! quantities:
//!
//! | Quantity | Formula (defaults) |
//! |----------|--------------------|
//! | Initial burst | `floor(20 + i * 80)` |
//! | Per-step spawn probability | `i * 0.3` |
//! | Spawn batch size | `floor(1 + i * 5)` |
//!
//! Intensity is clamped to `0.0..=MAX_INTENSITY` before use, and every count
//! is capped at [`MAX_EMIT_COUNT`], so no input can ask for an allocation
//! larger than that.
//!
//! # Example
//!
//! ```
//! use shatter::Emission;
//!
//! let emission = Emission::default();
//! assert_eq!(emission.burst_count(1.0), 100);
//! assert_eq!(emission.batch_size(0.5), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Largest intensity the formulas accept; larger values are clamped to it.
pub const MAX_INTENSITY: f32 = 100.0;

/// Upper bound for a burst or batch, whatever the coefficients.
pub const MAX_EMIT_COUNT: usize = 1 << 16;

/// Coefficients of the emission formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emission {
    /// Burst size at zero intensity.
    pub burst_base: f32,
    /// Additional burst particles per unit of intensity.
    pub burst_scale: f32,
    /// Spawn probability per unit of intensity.
    pub spawn_chance_scale: f32,
    /// Batch size at zero intensity.
    pub batch_base: f32,
    /// Additional batch particles per unit of intensity.
    pub batch_scale: f32,
}

impl Default for Emission {
    fn default() -> Self {
        Self {
            burst_base: 20.0,
            burst_scale: 80.0,
            spawn_chance_scale: 0.3,
            batch_base: 1.0,
            batch_scale: 5.0,
        }
    }
}

impl Emission {
    /// Number of particles created with a new simulation.
    pub fn burst_count(&self, intensity: f32) -> usize {
        floor_count(self.burst_base + sanitize_intensity(intensity) * self.burst_scale)
    }

    /// Probability that one step spawns a batch.
    pub fn spawn_probability(&self, intensity: f32) -> f32 {
        sanitize_intensity(intensity) * self.spawn_chance_scale
    }

    /// Number of particles in one spawned batch.
    pub fn batch_size(&self, intensity: f32) -> usize {
        floor_count(self.batch_base + sanitize_intensity(intensity) * self.batch_scale)
    }
}

/// Map intensity onto the domain the formulas accept.
///
/// NaN and negative values become `0.0`; values above [`MAX_INTENSITY`],
/// including `+inf`, become `MAX_INTENSITY`.
#[inline]
pub fn sanitize_intensity(intensity: f32) -> f32 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, MAX_INTENSITY)
    }
}

fn floor_count(value: f32) -> usize {
    // `as` saturates: negatives and NaN become 0
    (value.floor() as usize).min(MAX_EMIT_COUNT)
}
