//! Two-color shore effect
//!
//! A single forward sweep of the wave equation over solid water and sand
//! colors. The wave position is not bounded; once the crest runs past the
//! strip the marker is dropped and the whole strip reads as water.

use embassy_time::Instant;

use super::Effect;
use crate::{
    color::{Rgb, add_colors},
    fractional::draw_fractional_pixels,
    wave::WaveShape,
};

const MARKER_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Fraction of the strip covered by the wave marker
const MARKER_SHARE: f32 = 1.0 / 15.0;

/// Two solid color regions with a fractional wave marker
#[derive(Debug, Clone)]
pub struct ShoreEffect {
    shape: WaveShape,
    water: Rgb,
    sand: Rgb,
    /// Time origin; None until the first frame
    origin: Option<Instant>,
}

impl ShoreEffect {
    pub const fn new(shape: WaveShape, water: Rgb, sand: Rgb) -> Self {
        Self {
            shape,
            water,
            sand,
            origin: None,
        }
    }
}

impl Effect for ShoreEffect {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let origin = *self.origin.get_or_insert(now);
        let t_secs = now.duration_since(origin).as_millis() as f64 / 1000.0;
        let position = self.shape.position_at(t_secs);

        let num_to_fill = leds.len();
        let marker_width = (num_to_fill as f32 * MARKER_SHARE).max(1.0);

        leds.fill(Rgb::default());

        // Marker first; the region fills below accumulate on top of it.
        // Once the crest has moved past the strip the draw reports
        // out-of-range and the marker is simply dropped.
        let _ = draw_fractional_pixels(leds, position as f32, marker_width, MARKER_COLOR);

        let wave_pixel = if position < 0.0 {
            0
        } else {
            (libm::floor(position) as usize).min(num_to_fill)
        };
        for led in &mut leds[..wave_pixel] {
            *led = add_colors(*led, self.water);
        }
        for led in &mut leds[wave_pixel..] {
            *led = add_colors(*led, self.sand);
        }
    }

    fn reset(&mut self) {
        self.origin = None;
    }
}
