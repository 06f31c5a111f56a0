#![no_std]

pub mod bounds;
pub mod color;
pub mod command;
pub mod effect;
pub mod fade;
pub mod fractional;
pub mod frame_scheduler;
pub mod math8;
pub mod renderer;
pub mod telemetry;
pub mod wave;

pub use bounds::RenderingBounds;
pub use color::{Hsv, Palette16, PaletteBlend, Rgb};
pub use command::{Command, CommandQueue, CommandReceiver, CommandSender};
pub use effect::{Effect, EffectId, EffectPresets, EffectSlot};
pub use embassy_time::{Duration, Instant};
pub use fractional::{RenderError, draw_fractional_pixels};
pub use frame_scheduler::FrameScheduler;
pub use renderer::{Renderer, StripConfig};
pub use telemetry::{FpsTracker, estimate_power_mw, max_brightness_for_power};
pub use wave::{
    ConfigError, Direction, StepShape, WaveMotion, WaveShape, WaveStepper,
};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
