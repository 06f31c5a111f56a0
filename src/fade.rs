//! Time-based value fades
//!
//! A [`Fade`] moves a value toward a target over a fixed window, sampled
//! once per frame with the frame timestamp.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, blend_colors};
use crate::math8::{blend8, progress8};

/// Blends two values of type `T` using a progress value (0-255)
pub type FadeBlender<T> = fn(T, T, u8) -> T;

/// A value that can fade toward a target over time
#[derive(Debug, Clone)]
pub struct Fade<T: Copy> {
    /// Blender function
    blend: FadeBlender<T>,
    /// Current interpolated value
    current: T,
    /// Value at the start of the fade
    from: T,
    /// Target value (None when idle)
    target: Option<T>,
    /// Fade window
    started_at: Instant,
    window: Duration,
}

impl<T: Copy> Fade<T> {
    /// Create an idle fade holding `initial`
    pub const fn new(initial: T, blend: FadeBlender<T>) -> Self {
        Self {
            blend,
            current: initial,
            from: initial,
            target: None,
            started_at: Instant::from_millis(0),
            window: Duration::from_millis(0),
        }
    }

    /// Get the current value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Check if a fade is in progress
    pub const fn is_fading(&self) -> bool {
        self.target.is_some()
    }

    /// Start fading toward `value` over `window`
    ///
    /// A zero window applies the value immediately.
    pub fn set(&mut self, value: T, window: Duration, now: Instant) {
        self.started_at = now;
        if window.as_millis() == 0 {
            self.current = value;
            self.from = value;
            self.target = None;
            self.window = Duration::from_millis(0);
        } else {
            self.from = self.current;
            self.target = Some(value);
            self.window = window;
        }
    }

    /// Advance the fade
    ///
    /// Call once per frame with the frame timestamp.
    pub fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        let elapsed = now.duration_since(self.started_at);
        if elapsed >= self.window {
            self.current = target;
            self.from = target;
            self.target = None;
            return;
        }

        let progress = progress8(elapsed, self.window);
        self.current = (self.blend)(self.from, target, progress);
    }
}

impl Fade<u8> {
    /// Create a new u8 fade
    pub const fn new_u8(initial: u8) -> Self {
        Self::new(initial, blend8)
    }
}

impl Fade<Rgb> {
    /// Create a new rgb fade
    pub const fn new_rgb(initial: Rgb) -> Self {
        Self::new(initial, blend_colors)
    }
}
