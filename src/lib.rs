//! # shatter - shattering particle burst simulation
//!
//! A small real-time particle system: a burst of ember-colored fragments
//! flies out of an anchor point, fades, and is replenished over time, all
//! controlled by a single intensity value.
//!
//! Rendering is left to the host. The simulation hands its state over as
//! JSON records or as packed GPU instances.
//!
//! ## Quick Start
//!
//! ```
//! use shatter::prelude::*;
//!
//! let mut sim = ShatterSimulation::new(400.0, 300.0, 0.8);
//!
//! // Once per animation frame:
//! sim.update(1.0 / 60.0, 0.8);
//! for p in sim.particles() {
//!     let _ = (p.position(), p.size(), p.color());
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A [`Particle`] has a position, a constant velocity, a remaining lifetime,
//! a size and one of three [`EmberColor`]s. It expires once its lifetime
//! reaches zero.
//!
//! ### Intensity
//!
//! Intensity (nominally `0.0..=1.0`) sizes the initial burst and governs
//! how often, and how many, new fragments are emitted each step. See
//! [`Emission`] for the formulas.
//!
//! ### Stepping
//!
//! Each [`ShatterSimulation::step`] advances every particle, removes the
//! expired ones, then rolls once to emit a new batch at the anchor.
//!
//! ## Feature Overview
//!
//! | Area | Types |
//! |------|-------|
//! | Simulation | [`ShatterSimulation`], [`StepReport`] |
//! | Fragments | [`Particle`], [`EmberColor`], [`SpawnContext`] |
//! | Emission | [`Emission`] |
//! | Export | [`ParticleRecord`], [`ParticleInstance`] |
//! | Hosting | [`SimulationRegistry`], [`ShatterConfig`], [`time::FrameClock`] |

pub mod config;
mod emission;
mod error;
pub mod export;
mod palette;
mod particle;
pub mod registry;
mod simulation;
mod spawn;
pub mod time;

pub use config::ShatterConfig;
pub use emission::{sanitize_intensity, Emission, MAX_EMIT_COUNT, MAX_INTENSITY};
pub use error::{Result, ShatterError};
pub use export::{ParticleInstance, ParticleRecord};
pub use glam::{Vec2, Vec3};
pub use palette::EmberColor;
pub use particle::{Particle, LIFETIME_RANGE, MAX_SPAWN_SPEED, SIZE_RANGE};
pub use registry::{SimulationId, SimulationRegistry};
pub use simulation::{ShatterSimulation, StepReport};
pub use spawn::SpawnContext;

/// Convenient re-exports for common usage.
///
/// ```
/// use shatter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ShatterConfig;
    pub use crate::emission::Emission;
    pub use crate::export::{ParticleInstance, ParticleRecord};
    pub use crate::palette::EmberColor;
    pub use crate::particle::Particle;
    pub use crate::registry::{SimulationId, SimulationRegistry};
    pub use crate::simulation::{ShatterSimulation, StepReport};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::{FrameClock, TimestampDelta};
    pub use crate::{Vec2, Vec3};
}
