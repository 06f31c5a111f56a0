//! 16-stop color palettes with 8-bit indexed lookup
//!
//! A palette maps a wrapping 0-255 index onto 16 RGB stops. The high
//! nibble of the index selects the stop, the low nibble interpolates
//! toward the next stop (15 wraps back to 0).

use crate::{
    color::{Rgb, blend_colors},
    math8::scale8,
};

/// Number of stops in a palette
const STOPS: usize = 16;

/// Blend mode for palette lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteBlend {
    /// Snap to the nearest stop
    None,
    /// Interpolate linearly between adjacent stops
    Linear,
}

/// An ordered, immutable sequence of 16 RGB color stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    stops: [Rgb; STOPS],
}

impl Palette16 {
    /// Create a palette from explicit stops
    pub const fn new(stops: [Rgb; STOPS]) -> Self {
        Self { stops }
    }

    /// Create a palette with every stop set to one color
    pub const fn solid(color: Rgb) -> Self {
        Self {
            stops: [color; STOPS],
        }
    }

    /// Create a palette by spreading anchor colors evenly across the stops
    ///
    /// Falls back to black for an empty anchor list.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_gradient(anchors: &[Rgb]) -> Self {
        let mut stops = [Rgb::default(); STOPS];
        let Some(&first) = anchors.first() else {
            return Self { stops };
        };
        if anchors.len() == 1 {
            return Self::solid(first);
        }

        let segments = anchors.len() - 1;
        for (i, stop) in stops.iter_mut().enumerate() {
            // Position of this stop in segment space, in units of 1/(STOPS-1)
            let pos = i * segments;
            let segment = (pos / (STOPS - 1)).min(segments - 1);
            let local_t = if pos / (STOPS - 1) >= segments {
                255
            } else {
                ((pos % (STOPS - 1)) * 255 / (STOPS - 1)) as u8
            };
            *stop = blend_colors(anchors[segment], anchors[segment + 1], local_t);
        }
        Self { stops }
    }

    /// Access the raw stops
    pub const fn stops(&self) -> &[Rgb; STOPS] {
        &self.stops
    }
}

/// Look up a palette color by 8-bit index
///
/// The index wraps: entry 15 interpolates toward entry 0. The result is
/// scaled by `brightness` (255 = full).
pub fn color_from_palette(
    palette: &Palette16,
    index: u8,
    brightness: u8,
    blend: PaletteBlend,
) -> Rgb {
    let hi4 = (index >> 4) as usize;
    let lo4 = index & 0x0F;

    let entry = palette.stops[hi4];
    let color = if blend == PaletteBlend::None || lo4 == 0 {
        entry
    } else {
        let next = palette.stops[(hi4 + 1) % STOPS];
        blend_colors(entry, next, lo4 << 4)
    };

    if brightness == 255 {
        color
    } else {
        Rgb {
            r: scale8(color.r, brightness),
            g: scale8(color.g, brightness),
            b: scale8(color.b, brightness),
        }
    }
}

/// Fill a strip segment by walking the palette index
///
/// Starts at `start_index` and advances the (wrapping) index by
/// `index_step` per LED.
pub fn fill_from_palette(
    leds: &mut [Rgb],
    start_index: u8,
    index_step: u8,
    palette: &Palette16,
    brightness: u8,
    blend: PaletteBlend,
) {
    let mut index = start_index;
    for led in leds {
        *led = color_from_palette(palette, index, brightness, blend);
        index = index.wrapping_add(index_step);
    }
}
