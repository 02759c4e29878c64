mod palette;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use palette::{PARTY_COLORS, Palette16, color_from_palette};
pub use utils::{
    add_saturating, fade_to_black_by, fill_rainbow, fill_solid, hsv, hsv2rgb, max_channels,
    rgb_from_u32,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
