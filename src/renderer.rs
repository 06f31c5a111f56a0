use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::{RenderingBounds, bounded};
use crate::color::Rgb;
use crate::command::{Command, CommandReceiver};
use crate::effect::{EffectId, EffectPresets, EffectSlot};
use crate::fade::Fade;
use crate::math8::scale8;
use crate::telemetry::{estimate_power_mw, max_brightness_for_power};

/// Configuration for the strip renderer
#[derive(Clone)]
pub struct StripConfig {
    pub effect: EffectId,
    pub presets: EffectPresets,
    pub bounds: RenderingBounds,
    /// Target brightness (0-255)
    pub brightness: u8,
    /// Window for brightness and power fades
    pub brightness_fade: Duration,
    /// Power budget for a committed frame, milliwatts; None disables the cap
    pub power_limit_mw: Option<u32>,
}

/// Strip renderer - the main orchestrator
///
/// Owns the frame buffer and the active effect. Call [`Renderer::render`]
/// once per frame; the returned slice is what the output driver commits.
pub struct Renderer<'a, const MAX_LEDS: usize, const COMMAND_QUEUE_SIZE: usize> {
    // External dependencies and configuration
    commands: CommandReceiver<'a, COMMAND_QUEUE_SIZE>,
    presets: EffectPresets,
    bounds: RenderingBounds,
    brightness_fade: Duration,
    power_limit_mw: Option<u32>,

    // Internal state
    effect: EffectSlot,
    brightness: Fade<u8>,
    target_brightness: u8,
    powered: bool,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize, const COMMAND_QUEUE_SIZE: usize>
    Renderer<'a, MAX_LEDS, COMMAND_QUEUE_SIZE>
{
    /// Create a new renderer reading commands from `commands`
    pub fn new(
        commands: CommandReceiver<'a, COMMAND_QUEUE_SIZE>,
        config: &StripConfig,
    ) -> Self {
        Self {
            commands,
            effect: config.effect.to_slot(&config.presets),
            presets: config.presets.clone(),
            bounds: config.bounds,
            brightness_fade: config.brightness_fade,
            power_limit_mw: config.power_limit_mw,
            brightness: Fade::new_u8(config.brightness),
            target_brightness: config.brightness,
            powered: true,
            frame_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this continuously.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_commands(now);
        self.brightness.tick(now);

        let frame = bounded(&mut self.frame_buffer, self.bounds);
        self.effect.render(now, frame);

        let mut level = self.brightness.current();
        if let Some(limit_mw) = self.power_limit_mw {
            level = max_brightness_for_power(estimate_power_mw(frame), level, limit_mw);
        }
        Self::apply_brightness(frame, level);

        frame
    }

    /// Get the id of the active effect
    pub fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    /// Get the brightness level currently applied to frames
    pub fn brightness(&self) -> u8 {
        self.brightness.current()
    }

    pub const fn bounds(&self) -> RenderingBounds {
        self.bounds
    }

    /// Drain pending commands from the queue (non-blocking)
    fn process_commands(&mut self, now: Instant) {
        while let Some(command) = self.commands.try_receive() {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer] command {:?}", command);

            match command {
                Command::SwitchEffect(id) => {
                    self.effect = id.to_slot(&self.presets);
                    self.effect.reset();
                }
                Command::SetBrightness(brightness) => {
                    self.target_brightness = brightness;
                    if self.powered {
                        self.brightness.set(brightness, self.brightness_fade, now);
                    }
                }
                Command::SetBounds(bounds) => {
                    self.bounds = bounds;
                }
                Command::PowerOn => {
                    self.powered = true;
                    self.brightness
                        .set(self.target_brightness, self.brightness_fade, now);
                }
                Command::PowerOff => {
                    self.powered = false;
                    self.brightness.set(0, self.brightness_fade, now);
                }
            }
        }
    }

    /// Scale a frame by a brightness level
    fn apply_brightness(frame: &mut [Rgb], level: u8) {
        if level == 255 {
            return;
        }
        if level == 0 {
            frame.fill(Rgb::default());
            return;
        }
        for pixel in frame {
            pixel.r = scale8(pixel.r, level);
            pixel.g = scale8(pixel.g, level);
            pixel.b = scale8(pixel.b, level);
        }
    }
}
