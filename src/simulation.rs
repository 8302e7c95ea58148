//! The shattering effect: a burst of fragments around an anchor point.

use crate::emission::{sanitize_intensity, Emission};
use crate::error::Result;
use crate::export;
use crate::particle::Particle;
use crate::spawn::SpawnContext;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

/// What happened during one [`ShatterSimulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Particles removed because their lifetime ran out.
    pub expired: usize,
    /// Particles appended by the spawn gate (0 or one full batch).
    pub spawned: usize,
    /// Particles alive after the step.
    pub alive: usize,
}

/// A running shatter effect.
///
/// Owns its particles and its random source. The host calls [`step`](Self::step)
/// once per frame and reads [`particles`](Self::particles) for rendering.
///
/// ```
/// use shatter::ShatterSimulation;
///
/// let mut sim = ShatterSimulation::new(0.0, 0.0, 1.0);
/// assert_eq!(sim.len(), 100);
///
/// sim.update(1.0 / 60.0, 0.5);
/// let json = sim.export_json().unwrap();
/// assert!(json.starts_with('['));
/// ```
#[derive(Debug, Clone)]
pub struct ShatterSimulation<R = SmallRng> {
    anchor: Vec2,
    intensity: f32,
    emission: Emission,
    particles: Vec<Particle>,
    ctx: SpawnContext<R>,
}

impl ShatterSimulation<SmallRng> {
    /// Create a simulation anchored at `(center_x, center_y)`, seeded from
    /// OS entropy, with the initial burst sized by `intensity`.
    pub fn new(center_x: f32, center_y: f32, intensity: f32) -> Self {
        Self::with_context(
            Vec2::new(center_x, center_y),
            intensity,
            Emission::default(),
            SpawnContext::from_entropy(),
        )
    }
}

impl<R: Rng> ShatterSimulation<R> {
    /// Create a simulation drawing from a caller-supplied generator.
    pub fn with_rng(anchor: Vec2, intensity: f32, rng: R) -> Self {
        Self::with_context(anchor, intensity, Emission::default(), SpawnContext::from_rng(rng))
    }

    /// Create a simulation with custom emission coefficients.
    pub fn with_context(
        anchor: Vec2,
        intensity: f32,
        emission: Emission,
        mut ctx: SpawnContext<R>,
    ) -> Self {
        let intensity = checked_intensity(intensity, None);
        let count = emission.burst_count(intensity);
        let particles = (0..count).map(|_| Particle::spawn(anchor, &mut ctx)).collect();

        log::debug!(
            "Shatter created at ({}, {}) with intensity {} and {} particles",
            anchor.x,
            anchor.y,
            intensity,
            count
        );

        Self {
            anchor,
            intensity,
            emission,
            particles,
            ctx,
        }
    }

    /// Advance the effect by `dt` seconds.
    ///
    /// Order is fixed: advance every particle, drop the expired ones, then
    /// roll once for a new batch at the anchor. Negative or non-finite
    /// deltas are treated as zero.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let dt = checked_delta(dt);

        for particle in &mut self.particles {
            particle.advance(dt);
        }

        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        let expired = before - self.particles.len();

        let mut spawned = 0;
        if self.ctx.chance(self.emission.spawn_probability(self.intensity)) {
            spawned = self.emission.batch_size(self.intensity);
            let anchor = self.anchor;
            self.particles.reserve(spawned);
            for _ in 0..spawned {
                let particle = Particle::spawn(anchor, &mut self.ctx);
                self.particles.push(particle);
            }
        }

        let report = StepReport {
            expired,
            spawned,
            alive: self.particles.len(),
        };
        log::trace!("Shatter step dt={dt}: {report:?}");
        report
    }

    /// Set the intensity used by later steps. Existing particles are unaffected.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = checked_intensity(intensity, Some(self.intensity));
    }

    /// Set the intensity, then step. This is the per-frame call a host makes.
    pub fn update(&mut self, dt: f32, intensity: f32) -> StepReport {
        self.set_intensity(intensity);
        self.step(dt)
    }

    /// Current (sanitized) intensity.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Fixed point every fragment spawns from.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Coefficients used for bursts and batches.
    pub fn emission(&self) -> &Emission {
        &self.emission
    }

    /// Live particles. The borrow ends before the next step.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// `true` when no particle is alive.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current particles as a fresh JSON string.
    pub fn export_json(&self) -> Result<String> {
        export::to_json(&self.particles)
    }

    /// Current particles as packed GPU instances.
    pub fn instance_bytes(&self) -> Vec<u8> {
        export::instance_bytes(&self.particles)
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    #[cfg(test)]
    pub(crate) fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Sanitize `intensity`, warning only when the stored value would change,
/// so a host repeating the same bad value every frame warns once.
fn checked_intensity(intensity: f32, previous: Option<f32>) -> f32 {
    let sanitized = sanitize_intensity(intensity);
    if sanitized != intensity && previous != Some(sanitized) {
        log::warn!("Intensity {intensity} is out of range; using {sanitized}");
    }
    sanitized
}

fn checked_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame delta {dt}");
        0.0
    }
}
