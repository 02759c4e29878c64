//! Master brightness
//!
//! A fixed scale applied to every channel on the way out.

use super::Filter;
use crate::{color::Rgb, math8::scale8};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    /// Scale factor (0-255 = 0.0-1.0)
    level: u8,
}

impl BrightnessFilter {
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    pub const fn level(self) -> u8 {
        self.level
    }

    pub fn set(&mut self, level: u8) {
        self.level = level;
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        if self.level == 255 {
            return;
        }

        if self.level == 0 {
            for pixel in frame.iter_mut() {
                *pixel = Rgb { r: 0, g: 0, b: 0 };
            }
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.level);
            pixel.g = scale8(pixel.g, self.level);
            pixel.b = scale8(pixel.b, self.level);
        }
    }
}
