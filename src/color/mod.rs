mod palette;
mod utils;

pub use palette::{Palette16, PaletteBlend, color_from_palette, fill_from_palette};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{add_colors, blend_colors, color_fraction, hsv2rgb, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
