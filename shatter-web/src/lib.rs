//! Browser binding for the shatter simulation.
//!
//! Exposes one owned JS class, `ShatterHandle`. JavaScript creates it,
//! steps it once per animation frame, and reads particles either as JSON or
//! as a `Float32Array` of packed instances:
//!
//! ```js
//! const handle = new ShatterHandle(width / 2, height / 2, 0.6);
//! function frame(ts) {
//!   handle.tick(ts, intensity);
//!   const particles = JSON.parse(handle.export());
//!   draw(particles);
//!   requestAnimationFrame(frame);
//! }
//! // when the effect is no longer needed
//! handle.destroy();
//! ```
//!
//! After `destroy()` (or `free()`) the JS wrapper no longer points at a live
//! value and any further call throws instead of touching freed memory.

use shatter::time::TimestampDelta;
use shatter::{ParticleInstance, ShatterSimulation};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// One running shatter effect owned by JavaScript.
#[wasm_bindgen]
pub struct ShatterHandle {
    sim: ShatterSimulation,
    timestamps: TimestampDelta,
}

#[wasm_bindgen]
impl ShatterHandle {
    /// Create an effect anchored at `(center_x, center_y)`.
    #[wasm_bindgen(constructor)]
    pub fn new(center_x: f32, center_y: f32, intensity: f32) -> ShatterHandle {
        log::debug!("ShatterHandle created at ({center_x}, {center_y})");
        ShatterHandle {
            sim: ShatterSimulation::new(center_x, center_y, intensity),
            timestamps: TimestampDelta::new(),
        }
    }

    /// Set intensity, then advance by `dt` seconds.
    pub fn step(&mut self, dt: f32, intensity: f32) {
        self.sim.update(dt, intensity);
    }

    /// Step using a `requestAnimationFrame` timestamp in milliseconds.
    ///
    /// The first call only records the timestamp and steps with a zero delta.
    pub fn tick(&mut self, timestamp_ms: f64, intensity: f32) {
        let dt = self.timestamps.next(timestamp_ms);
        self.sim.update(dt, intensity);
    }

    /// Forget the last `tick` timestamp, e.g. after the animation loop was
    /// paused, so the next tick does not apply the whole gap at once.
    #[wasm_bindgen(js_name = resetClock)]
    pub fn reset_clock(&mut self) {
        self.timestamps.reset();
    }

    #[wasm_bindgen(js_name = setIntensity)]
    pub fn set_intensity(&mut self, intensity: f32) {
        self.sim.set_intensity(intensity);
    }

    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> f32 {
        self.sim.intensity()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.sim.len()
    }

    /// Particles as a JSON array of `{x, y, size, life, color}` records.
    /// Returns a new string on every call.
    pub fn export(&self) -> Result<String, JsError> {
        self.sim.export_json().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Particles as packed floats, `instanceStride()` per particle:
    /// `x, y, size, life, r, g, b, alpha`.
    #[wasm_bindgen(js_name = instanceData)]
    pub fn instance_data(&self) -> Vec<f32> {
        shatter::export::instance_floats(self.sim.particles())
    }

    #[wasm_bindgen(js_name = instanceStride)]
    pub fn instance_stride() -> usize {
        ParticleInstance::FLOATS
    }

    /// Release the effect. The handle cannot be used afterwards.
    pub fn destroy(self) {
        log::debug!("ShatterHandle destroyed with {} particles", self.sim.len());
    }
}
