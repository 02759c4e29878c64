//! Static correction profile
//!
//! Cheap strips drive green and blue harder than red, so a white frame comes
//! out cold. The profile scales each channel down to compensate.

use super::Filter;
use crate::{color::Rgb, math8::scale8};

/// Typical SMD5050 strip, green and blue toned down (0xFFB0F0)
pub const TYPICAL_LED_STRIP: Rgb = Rgb {
    r: 0xFF,
    g: 0xB0,
    b: 0xF0,
};

/// Leaves every channel as is
pub const UNCORRECTED: Rgb = Rgb {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCorrection {
    profile: Rgb,
}

impl ColorCorrection {
    pub const fn new(profile: Rgb) -> Self {
        Self { profile }
    }

    pub const fn profile(self) -> Rgb {
        self.profile
    }

    /// False for [`UNCORRECTED`], the filter is skipped then
    pub const fn is_active(self) -> bool {
        !matches!(
            self.profile,
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        )
    }

    pub const fn correct(self, color: Rgb) -> Rgb {
        Rgb {
            r: scale8(color.r, self.profile.r),
            g: scale8(color.g, self.profile.g),
            b: scale8(color.b, self.profile.b),
        }
    }
}

impl Filter for ColorCorrection {
    fn apply(&self, frame: &mut [Rgb]) {
        if !self.is_active() {
            return;
        }
        for pixel in frame {
            *pixel = self.correct(*pixel);
        }
    }
}
