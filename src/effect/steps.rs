//! Stepping wave effect
//!
//! The integer-step ancestor of the tide: the wave endpoint walks one LED
//! per frame, flowing forward then ebbing back, with a white tip and a
//! randomized trail of fading saturation behind it.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    wave::{Direction, StepShape, WaveStepper},
};

/// Trail dither threshold: a trail LED lights when `hash % 10 > 3`
const TRAIL_CHANCE: u32 = 3;

/// Integer stepping wave with randomized trail
#[derive(Debug, Clone)]
pub struct StepWaveEffect {
    stepper: WaveStepper,
    shape: StepShape,
    flow_hue: u8,
    ebb_hue: u8,
    /// Frame counter seeding the trail dither
    frame_count: u32,
}

impl StepWaveEffect {
    pub const fn new(shape: StepShape, flow_hue: u8, ebb_hue: u8) -> Self {
        Self {
            stepper: WaveStepper::new(shape),
            shape,
            flow_hue,
            ebb_hue,
            frame_count: 0,
        }
    }

    /// Simple deterministic hash for the trail dither
    #[inline]
    const fn hash(x: u64) -> u32 {
        // SplitMix64-style mixing, then fold down to u32.
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            (z ^ (z >> 31)) as u32
        }
    }

    #[allow(clippy::cast_sign_loss)]
    fn trail_lit(&self, index: i32) -> bool {
        let seed = (u64::from(self.frame_count) << 32) | (index as u64 & 0xFFFF_FFFF);
        Self::hash(seed) % 10 > TRAIL_CHANCE
    }

    fn solid(hue: u8) -> Rgb {
        hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        })
    }
}

impl Effect for StepWaveEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let num_to_fill = leds.len();
        let last = num_to_fill - 1;
        let frame = self.stepper.advance(num_to_fill);

        #[cfg(feature = "esp32-log")]
        println!(
            "[StepWaveEffect] direction={:?} pos={} start_pos={}",
            frame.direction, frame.pos, frame.start_pos
        );

        // Re-anchor the canvas to the ebb hue at the start of a cycle
        if frame.reset_canvas {
            leds.fill(Self::solid(self.ebb_hue));
        }

        let pos = frame.pos.clamp(0, last as i32) as usize;
        match frame.direction {
            Direction::Flow => {
                let fade_step = 255 / self.shape.flow_length();

                // White tip, flow hue behind it
                leds[pos] = hsv2rgb(Hsv {
                    hue: self.flow_hue,
                    sat: 0,
                    val: 255,
                });
                for led in &mut leds[..pos] {
                    *led = Self::solid(self.flow_hue);
                }
                // Trail of fading saturation, randomly dithered
                for i in frame.start_pos.max(0)..frame.pos.min(num_to_fill as i32) {
                    let saturation = ((frame.pos - i) * fade_step) as u8;
                    if self.trail_lit(i) {
                        leds[i as usize] = hsv2rgb(Hsv {
                            hue: self.flow_hue,
                            sat: saturation,
                            val: 255,
                        });
                    }
                }
            }
            Direction::Ebb => {
                let fade_step = 255 / self.shape.ebb_length();

                leds[pos] = hsv2rgb(Hsv {
                    hue: self.ebb_hue,
                    sat: 0,
                    val: 255,
                });
                for led in &mut leds[pos + 1..] {
                    *led = Self::solid(self.ebb_hue);
                }
                for i in frame.pos.max(0)..frame.start_pos.min(num_to_fill as i32) {
                    let saturation = ((frame.pos - i) * fade_step) as u8;
                    if self.trail_lit(i) {
                        leds[i as usize] = hsv2rgb(Hsv {
                            hue: self.ebb_hue,
                            sat: saturation,
                            val: 255,
                        });
                    }
                }
            }
        }

        self.frame_count = self.frame_count.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.stepper.reset();
        self.frame_count = 0;
    }
}
