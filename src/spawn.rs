//! Random draws used when fragments are spawned.
//!
//! A [`SpawnContext`] owns the generator for one simulation. It is seeded
//! once from OS entropy and then reused for every draw, so consecutive
//! particles are independent without reseeding per call.

use crate::palette::EmberColor;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random source plus the helpers the emitter needs.
///
/// ```ignore
/// let mut ctx = SpawnContext::from_entropy();
/// let velocity = ctx.random_velocity(2.0);
/// let color = ctx.random_ember();
/// ```
#[derive(Debug, Clone)]
pub struct SpawnContext<R = SmallRng> {
    rng: R,
}

impl SpawnContext<SmallRng> {
    /// Context seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Context with a fixed seed. Only useful for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for SpawnContext<SmallRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> SpawnContext<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    // ========== Random primitives ==========

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max]`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..=max)
    }

    /// One gate draw: `true` with the given probability.
    ///
    /// Probabilities at or below 0 never fire, at or above 1 always fire.
    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        self.random() < probability
    }

    // ========== Fragment attributes ==========

    /// Velocity with each axis drawn independently from `[-max_speed, max_speed]`.
    pub fn random_velocity(&mut self, max_speed: f32) -> Vec2 {
        Vec2::new(
            self.random_range(-max_speed, max_speed),
            self.random_range(-max_speed, max_speed),
        )
    }

    /// Uniformly chosen ember color.
    pub fn random_ember(&mut self) -> EmberColor {
        EmberColor::random(&mut self.rng)
    }
}
