//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod shore;
mod steps;
mod tide;

use embassy_time::Instant;
pub use shore::ShoreEffect;
pub use steps::StepWaveEffect;
pub use tide::TideEffect;

use crate::color::{Palette16, Rgb};
use crate::wave::{StepShape, WaveShape};

const EFFECT_NAME_TIDE: &str = "tide";
const EFFECT_NAME_SHORE: &str = "shore";
const EFFECT_NAME_STEP_WAVE: &str = "step_wave";

const EFFECT_ID_TIDE: u8 = 0;
const EFFECT_ID_SHORE: u8 = 1;
const EFFECT_ID_STEP_WAVE: u8 = 2;

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Tunables used to build effect instances
///
/// Owned by the renderer so an effect switch can construct the new slot
/// without asking the caller for parameters.
#[derive(Debug, Clone)]
pub struct EffectPresets {
    /// Gradient drawn behind the wave point
    pub water: Palette16,
    /// Gradient drawn ahead of the wave point
    pub sand: Palette16,
    /// Solid water color for the plain two-color wave
    pub water_color: Rgb,
    /// Solid sand color for the plain two-color wave
    pub sand_color: Rgb,
    /// Hues for the stepping wave
    pub flow_hue: u8,
    pub ebb_hue: u8,
    /// Continuous wave equation constants
    pub wave_shape: WaveShape,
    /// Stepper lengths
    pub step_shape: StepShape,
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Palette tide with a fractional wave marker
    Tide(TideEffect),
    /// Two solid color regions with a fractional wave marker
    Shore(ShoreEffect),
    /// Integer stepping wave with randomized trail
    StepWave(StepWaveEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Tide = EFFECT_ID_TIDE,
    Shore = EFFECT_ID_SHORE,
    StepWave = EFFECT_ID_STEP_WAVE,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_TIDE => Self::Tide,
            EFFECT_ID_SHORE => Self::Shore,
            EFFECT_ID_STEP_WAVE => Self::StepWave,
            _ => return None,
        })
    }

    pub fn to_slot(self, presets: &EffectPresets) -> EffectSlot {
        match self {
            Self::Tide => EffectSlot::Tide(TideEffect::new(
                presets.wave_shape,
                presets.water,
                presets.sand,
            )),
            Self::Shore => EffectSlot::Shore(ShoreEffect::new(
                presets.wave_shape,
                presets.water_color,
                presets.sand_color,
            )),
            Self::StepWave => EffectSlot::StepWave(StepWaveEffect::new(
                presets.step_shape,
                presets.flow_hue,
                presets.ebb_hue,
            )),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tide => EFFECT_NAME_TIDE,
            Self::Shore => EFFECT_NAME_SHORE,
            Self::StepWave => EFFECT_NAME_STEP_WAVE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_TIDE => Some(Self::Tide),
            EFFECT_NAME_SHORE => Some(Self::Shore),
            EFFECT_NAME_STEP_WAVE => Some(Self::StepWave),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Tide(effect) => effect.render(now, leds),
            Self::Shore(effect) => effect.render(now, leds),
            Self::StepWave(effect) => effect.render(now, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Tide(effect) => Effect::reset(effect),
            Self::Shore(effect) => Effect::reset(effect),
            Self::StepWave(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Tide(_) => EffectId::Tide,
            Self::Shore(_) => EffectId::Shore,
            Self::StepWave(_) => EffectId::StepWave,
        }
    }
}
