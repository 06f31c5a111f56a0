//! Continuous bidirectional wave motion
//!
//! Tracks the oscillating wave endpoint used by the palette tide effect.
//! The position sweeps forward under `f(t) = k*sin(t/s) + c*sqrt(t)`,
//! bounded to the strip; hitting either boundary flips the direction and
//! re-anchors the time origin so both terms restart from zero.

use embassy_time::Instant;

use super::{Direction, WaveShape};

/// Origin stretch applied when re-anchoring at the far boundary
///
/// Doubling the origin makes the receding sweep retrace the forward sweep
/// in mirrored time. Kept as a tunable, not a law.
const DEFAULT_RESET_STRETCH: f64 = 2.0;

/// One sampled frame of wave motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// Wave endpoint position, always within `[0, num_to_fill]`
    pub position: f64,
    /// `floor(position)`, clamped to the strip
    pub pixel: usize,
    /// Gradient offset that makes the palette trail the wave
    ///
    /// May be negative; wraps modulo 256 at palette lookup.
    pub palette_index: i32,
}

/// Per-instance state of the continuous wave animation
#[derive(Debug, Clone)]
pub struct WaveMotion {
    shape: WaveShape,
    direction: Direction,
    /// Time origin in milliseconds; None until the first sample
    ///
    /// Stored as f64 rather than Instant: the far-boundary re-anchor
    /// stretches the origin past `now`, which an Instant cannot hold.
    origin_ms: Option<f64>,
    reset_stretch: f64,
}

impl WaveMotion {
    pub const fn new(shape: WaveShape) -> Self {
        Self {
            shape,
            direction: Direction::Flow,
            origin_ms: None,
            reset_stretch: DEFAULT_RESET_STRETCH,
        }
    }

    /// Override the far-boundary origin stretch
    #[must_use]
    pub const fn with_reset_stretch(mut self, reset_stretch: f64) -> Self {
        self.reset_stretch = reset_stretch;
        self
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Forget the time origin and start a fresh flow sweep
    pub fn reset(&mut self) {
        self.direction = Direction::Flow;
        self.origin_ms = None;
    }

    /// Compute the wave position for this frame
    ///
    /// `num_to_fill` is the strip length; the returned position lies in
    /// `[0, num_to_fill]`. Boundary hits flip the direction for the next
    /// frame and re-anchor the time origin.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn sample(&mut self, now: Instant, num_to_fill: usize) -> WaveSample {
        let now_ms = now.as_millis() as f64;
        let origin_ms = *self.origin_ms.get_or_insert(now_ms);

        let mut t = (now_ms - origin_ms) / 1000.0;
        if self.direction == Direction::Ebb {
            t = -t;
        }

        let (sin_term, sqrt_term) = self.shape.terms(t);
        let limit = num_to_fill as f64;
        let position = (sin_term + sqrt_term).clamp(0.0, limit);

        let pixel = (libm::floor(position) as usize).min(num_to_fill);
        let palette_index =
            pixel as i32 - libm::floor(2.0 * sin_term + sqrt_term) as i32;

        let at_far_end = self.direction == Direction::Flow && position == limit;
        let at_near_end = self.direction == Direction::Ebb && position == 0.0;
        if at_far_end || at_near_end {
            self.direction = self.direction.flipped();
            let mut origin = now_ms;
            if at_far_end {
                origin *= self.reset_stretch;
            }
            self.origin_ms = Some(origin);
        }

        WaveSample {
            position,
            pixel,
            palette_index,
        }
    }
}
