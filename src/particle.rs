//! A single shattered fragment.
//!
//! Fragments move in a straight line at the velocity they were born with and
//! count their remaining lifetime down. Velocity, size and color never change
//! after construction; only position and lifetime evolve.

use crate::palette::EmberColor;
use crate::spawn::SpawnContext;
use glam::{Vec2, Vec3};
use rand::Rng;

/// Maximum absolute speed per axis for a freshly spawned fragment.
pub const MAX_SPAWN_SPEED: f32 = 2.0;
/// Lifetime range in seconds for a freshly spawned fragment.
pub const LIFETIME_RANGE: (f32, f32) = (0.5, 2.0);
/// Size range for a freshly spawned fragment.
pub const SIZE_RANGE: (f32, f32) = (2.0, 8.0);

/// One point-mass fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    lifetime: f32,
    size: f32,
    color: Vec3,
}

impl Particle {
    /// Build a fragment from explicit values.
    pub fn new(position: Vec2, velocity: Vec2, lifetime: f32, size: f32, color: Vec3) -> Self {
        Self {
            position,
            velocity,
            lifetime,
            size,
            color,
        }
    }

    /// Spawn a fragment at `position` with randomized velocity, lifetime,
    /// size and ember color.
    pub fn spawn<R: Rng>(position: Vec2, ctx: &mut SpawnContext<R>) -> Self {
        let velocity = ctx.random_velocity(MAX_SPAWN_SPEED);
        let lifetime = ctx.random_range(LIFETIME_RANGE.0, LIFETIME_RANGE.1);
        let size = ctx.random_range(SIZE_RANGE.0, SIZE_RANGE.1);
        let color = ctx.random_ember();

        Self::new(position, velocity, lifetime, size, color.rgb())
    }

    /// Move by `velocity * dt` and burn `dt` seconds of lifetime.
    ///
    /// No clamping is applied here; [`ShatterSimulation::step`](crate::ShatterSimulation::step)
    /// sanitizes the delta before it reaches particles.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.lifetime -= dt;
    }

    /// `true` once the remaining lifetime has reached zero or below.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Constant velocity in units per second.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Remaining lifetime in seconds.
    #[inline]
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Render size.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// RGB color, one of the ember palette entries.
    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Palette entry this fragment was colored with, if any.
    pub fn ember(&self) -> Option<EmberColor> {
        EmberColor::matching(self.color)
    }
}
