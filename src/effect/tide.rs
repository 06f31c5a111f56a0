//! Palette tide effect
//!
//! An oscillating wave over two 16-stop palettes: water behind the wave
//! point, sand ahead of it, and a white marker blended across the
//! fractional wave position. The marker width follows the wave's speed,
//! sampled at most every 100 ms so frame-to-frame jitter does not make it
//! flicker.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{
    color::{Palette16, PaletteBlend, Rgb, fill_from_palette},
    fractional::draw_fractional_pixels,
    wave::{WaveMotion, WaveShape},
};

const MARKER_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Marker width per LED of wave velocity
const MARKER_MULTIPLIER: f64 = 15.0;

/// Hold time between marker width updates
const MARKER_HOLD: Duration = Duration::from_millis(100);

/// Palette tide with a fractional wave marker
#[derive(Debug, Clone)]
pub struct TideEffect {
    motion: WaveMotion,
    water: Palette16,
    sand: Palette16,
    /// Wave position of the previous frame
    last_position: f64,
    /// Smoothed marker width, held between updates
    marker_width: f32,
    marker_updated: Option<Instant>,
}

impl TideEffect {
    pub const fn new(shape: WaveShape, water: Palette16, sand: Palette16) -> Self {
        Self {
            motion: WaveMotion::new(shape),
            water,
            sand,
            last_position: 0.0,
            marker_width: 1.0,
            marker_updated: None,
        }
    }

    /// Recompute the marker width from the wave velocity, at most every
    /// [`MARKER_HOLD`]
    #[allow(clippy::cast_possible_truncation)]
    fn update_marker_width(&mut self, now: Instant, position: f64) {
        let due = match self.marker_updated {
            None => true,
            Some(at) => now.duration_since(at) >= MARKER_HOLD,
        };
        if due {
            let velocity = libm::fabs(position - self.last_position);
            self.marker_width = (MARKER_MULTIPLIER * velocity).max(1.0) as f32;
            self.marker_updated = Some(now);
        }
    }
}

impl Effect for TideEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let num_to_fill = leds.len();
        let sample = self.motion.sample(now, num_to_fill);

        leds.fill(Rgb::default());

        // The palette index walks half the gradient across the strip, and
        // starts at the trailing index so the gradient follows the wave.
        let index_step = (255 / (num_to_fill * 2)).min(255) as u8;
        let start_index = sample.palette_index as u8;

        let (water, sand) = leds.split_at_mut(sample.pixel);
        fill_from_palette(
            water,
            start_index,
            index_step,
            &self.water,
            255,
            PaletteBlend::Linear,
        );
        fill_from_palette(
            sand,
            start_index,
            index_step,
            &self.sand,
            255,
            PaletteBlend::Linear,
        );

        self.update_marker_width(now, sample.position);

        // Position and width are bounded, so the draw cannot fail; if it
        // ever does, the frame goes out without a marker.
        let _ = draw_fractional_pixels(
            leds,
            sample.position as f32,
            self.marker_width,
            MARKER_COLOR,
        );

        self.last_position = sample.position;
    }

    fn reset(&mut self) {
        self.motion.reset();
        self.last_position = 0.0;
        self.marker_width = 1.0;
        self.marker_updated = None;
    }
}
