pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::scale8,
};

/// Saturation used by `fill_rainbow`
const RAINBOW_SATURATION: u8 = 240;

/// Shorthand for converting a hue/saturation/value triple
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Add two colors channel by channel, clamping at 255
#[inline]
pub const fn add_saturating(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Keep the brighter value of each channel
#[inline]
pub fn max_channels(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}

/// Dim every pixel by `amount`/256 of its current brightness
///
/// Called once per frame this leaves fading trails behind moving dots.
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}

pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Fill with a rainbow starting at `initial_hue`, stepping `delta_hue` per pixel
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv(hue, RAINBOW_SATURATION, 255);
        hue = hue.wrapping_add(delta_hue);
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
