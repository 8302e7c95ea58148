//! Handing particle state to a renderer.
//!
//! Two transports are provided:
//!
//! - **JSON** ([`to_json`]): an array of [`ParticleRecord`]s with fields
//!   `x`, `y`, `size`, `life`, `color`. An empty collection is `[]`.
//!   Numbers use plain decimal form; a NaN or infinite value (only
//!   possible from a non-finite anchor) is written as `null`.
//! - **Instance buffer** ([`to_instances`], [`instance_bytes`]): tightly
//!   packed [`ParticleInstance`]s ready for a GPU vertex/instance buffer.
//!
//! Every call allocates a fresh value owned by the caller.

use crate::error::Result;
use crate::particle::Particle;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// One particle as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub life: f32,
    pub color: [f32; 3],
}

impl From<&Particle> for ParticleRecord {
    fn from(p: &Particle) -> Self {
        let position = p.position();
        Self {
            x: position.x,
            y: position.y,
            size: p.size(),
            life: p.lifetime(),
            color: p.color().to_array(),
        }
    }
}

/// GPU-ready particle instance.
///
/// Layout (32 bytes, no padding): `position.xy`, `size`, `life`,
/// `color.rgb`, `alpha`. `alpha` is `min(life, 1)` so fragments fade out
/// over their final second.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub size: f32,
    pub life: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

impl ParticleInstance {
    /// Number of `f32`s per instance.
    pub const FLOATS: usize = 8;
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position().to_array(),
            size: p.size(),
            life: p.lifetime(),
            color: p.color().to_array(),
            alpha: p.lifetime().clamp(0.0, 1.0),
        }
    }
}

/// Records for every particle, in collection order.
pub fn to_records(particles: &[Particle]) -> Vec<ParticleRecord> {
    particles.iter().map(ParticleRecord::from).collect()
}

/// Serialize particles to a JSON array of records.
pub fn to_json(particles: &[Particle]) -> Result<String> {
    Ok(serde_json::to_string(&to_records(particles))?)
}

/// Parse a JSON array produced by [`to_json`].
pub fn records_from_json(json: &str) -> Result<Vec<ParticleRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Instances for every particle, in collection order.
pub fn to_instances(particles: &[Particle]) -> Vec<ParticleInstance> {
    particles.iter().map(ParticleInstance::from).collect()
}

/// Raw bytes of [`to_instances`], for direct buffer upload.
pub fn instance_bytes(particles: &[Particle]) -> Vec<u8> {
    bytemuck::cast_slice(&to_instances(particles)).to_vec()
}

/// Flattened `f32`s of [`to_instances`], [`ParticleInstance::FLOATS`] per particle.
pub fn instance_floats(particles: &[Particle]) -> Vec<f32> {
    bytemuck::cast_slice(&to_instances(particles)).to_vec()
}
