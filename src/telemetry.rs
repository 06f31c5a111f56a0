//! Figures for the status display
//!
//! Frame rate, estimated power draw and the power-capped brightness are
//! computed here from the post-render buffer; formatting and the display
//! itself stay outside the crate.

use crate::color::Rgb;

// Per-channel cost of a fully driven WS2812-class LED at 5V, in milliwatts
const RED_MW: u32 = 16 * 5;
const GREEN_MW: u32 = 11 * 5;
const BLUE_MW: u32 = 15 * 5;

/// Quiescent draw of one LED, milliwatts
const IDLE_MW: u32 = 5;

/// Exponentially weighted frames-per-second tracker
///
/// Each recorded frame contributes 10% to the average, so short stalls do
/// not make the displayed figure jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsTracker {
    fps: f64,
}

impl FpsTracker {
    pub const fn new() -> Self {
        Self { fps: 0.0 }
    }

    /// Record one frame that took `frame_seconds` and return the average
    ///
    /// Non-positive durations (a stalled or re-anchored clock) are
    /// ignored.
    pub fn record(&mut self, frame_seconds: f64) -> f64 {
        if frame_seconds > 0.0 {
            self.fps = (self.fps * 0.9) + (1.0 / frame_seconds * 0.1);
        }
        self.fps
    }

    pub const fn fps(&self) -> f64 {
        self.fps
    }
}

/// Estimate the power a frame draws once committed, in milliwatts
///
/// Sums the per-channel weighted cost of the buffer contents at full
/// brightness plus the idle draw of every LED on the strip.
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_power_mw(leds: &[Rgb]) -> u32 {
    let mut red: u32 = 0;
    let mut green: u32 = 0;
    let mut blue: u32 = 0;
    for led in leds {
        red += u32::from(led.r);
        green += u32::from(led.g);
        blue += u32::from(led.b);
    }

    let channel_mw =
        ((red * RED_MW) >> 8) + ((green * GREEN_MW) >> 8) + ((blue * BLUE_MW) >> 8);
    let idle_mw = leds.len() as u32 * IDLE_MW;
    channel_mw + idle_mw
}

/// Cap a requested brightness so the frame stays within a power budget
///
/// `unscaled_mw` is the frame's draw at full brightness (from
/// [`estimate_power_mw`]). The result never exceeds the requested
/// brightness.
#[allow(clippy::cast_possible_truncation)]
pub fn max_brightness_for_power(
    unscaled_mw: u32,
    brightness: u8,
    limit_mw: u32,
) -> u8 {
    if unscaled_mw == 0 {
        return brightness;
    }

    let requested_mw = (u64::from(unscaled_mw) * u64::from(brightness)) / 256;
    if requested_mw <= u64::from(limit_mw) {
        return brightness;
    }

    let capped = (u64::from(limit_mw) * 256) / u64::from(unscaled_mw);
    capped.min(u64::from(brightness)) as u8
}
