//! Frame timing for hosts that drive a simulation.
//!
//! [`FrameClock`] hands out a fixed, scaled delta per frame for headless
//! runs that must be reproducible. [`TimestampDelta`] turns the millisecond
//! timestamps an animation-frame callback receives into second deltas, for
//! hosts that already have their own clock.
//!
//! # Example
//!
//! ```
//! use shatter::time::FrameClock;
//!
//! let mut clock = FrameClock::new(1.0 / 60.0);
//!
//! let dt = clock.tick();
//! assert!((dt - 1.0 / 60.0).abs() < 1e-6);
//! assert_eq!(clock.frame(), 1);
//! ```

/// Fixed-step delta source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Unscaled seconds per frame.
    step: f32,
    /// Multiplier applied to `step` (1.0 = normal speed).
    time_scale: f32,
    /// Simulated seconds handed out so far.
    elapsed_secs: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Clock handing out `step` seconds per tick. Negative or non-finite
    /// steps become 0.
    pub fn new(step: f32) -> Self {
        Self {
            step: non_negative(step),
            time_scale: 1.0,
            elapsed_secs: 0.0,
            frame_count: 0,
        }
    }

    /// Advance one frame and return the delta to step with.
    pub fn tick(&mut self) -> f32 {
        let delta = self.delta();
        self.elapsed_secs += delta;
        self.frame_count += 1;
        delta
    }

    /// Delta every [`tick`](Self::tick) returns: step times time scale.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.step * self.time_scale
    }

    /// Simulated seconds handed out since creation.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Number of ticks so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale multiplier. Negative or non-finite values clamp to 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = non_negative(scale);
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Converts animation-frame timestamps (milliseconds) to deltas (seconds).
///
/// The first timestamp only primes the converter and yields 0. Timestamps
/// that go backwards also yield 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampDelta {
    last_ms: Option<f64>,
}

impl TimestampDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta in seconds since the previous timestamp.
    pub fn next(&mut self, timestamp_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) if timestamp_ms > last => ((timestamp_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        delta
    }

    /// Forget the last timestamp, e.g. after the host loop was stopped.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new(0.5);
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.time_scale(), 1.0);
        assert_eq!(clock.delta(), 0.5);
    }

    #[test]
    fn test_clock_tick() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(), 0.25);
        assert_eq!(clock.tick(), 0.25);
        assert_eq!(clock.elapsed(), 0.5);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_time_scale() {
        let mut clock = FrameClock::new(0.25);
        clock.set_time_scale(2.0);
        assert_eq!(clock.tick(), 0.5);

        clock.set_time_scale(-1.0);
        assert_eq!(clock.time_scale(), 0.0);
        assert_eq!(clock.tick(), 0.0);
        // Frames still count while time is frozen
        assert_eq!(clock.frame(), 2);
        assert_eq!(clock.elapsed(), 0.5);
    }

    #[test]
    fn test_invalid_step_is_zero() {
        assert_eq!(FrameClock::new(-0.1).delta(), 0.0);
        assert_eq!(FrameClock::new(f32::NAN).delta(), 0.0);

        let mut clock = FrameClock::new(0.1);
        clock.set_time_scale(f32::INFINITY);
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn test_timestamp_delta() {
        let mut ts = TimestampDelta::new();
        assert_eq!(ts.next(1000.0), 0.0);
        assert!((ts.next(1016.0) - 0.016).abs() < 1e-6);
        assert_eq!(ts.next(1010.0), 0.0);
        assert!((ts.next(1510.0) - 0.5).abs() < 1e-6);

        ts.reset();
        assert_eq!(ts.next(9000.0), 0.0);
    }
}
