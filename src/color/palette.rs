//! 16-entry color palettes
//!
//! Lookups blend linearly between neighbouring entries, so a palette of 16
//! colors still produces a smooth 256 step ramp.

use crate::{
    color::{Rgb, rgb_from_u32},
    math8::scale8,
};

pub type Palette16 = [Rgb; 16];

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Purple, red, orange and yellow party palette
#[allow(clippy::unreadable_literal)]
pub const PARTY_COLORS: Palette16 = hex_palette![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B,
    0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
    0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E,
    0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
];

/// Sample `palette` at `index` (0-255, wrapping) and scale by `brightness`
pub fn color_from_palette(palette: &Palette16, index: u8, brightness: u8) -> Rgb {
    let hi4 = usize::from(index >> 4);
    let lo4 = index & 0x0F;

    let entry = palette[hi4];
    let mut color = if lo4 == 0 {
        entry
    } else {
        let next = palette[(hi4 + 1) % palette.len()];
        let amount_of_next = lo4 << 4;
        let amount_of_entry = 255 - amount_of_next;
        Rgb {
            r: scale8(entry.r, amount_of_entry) + scale8(next.r, amount_of_next),
            g: scale8(entry.g, amount_of_entry) + scale8(next.g, amount_of_next),
            b: scale8(entry.b, amount_of_entry) + scale8(next.b, amount_of_next),
        }
    };

    if brightness != 255 {
        color.r = scale8(color.r, brightness);
        color.g = scale8(color.g, brightness);
        color.b = scale8(color.b, brightness);
    }
    color
}
