use crate::{
    Rgb,
    error::{BufferBoundsError, ConfigurationError},
};

/// Contiguous run of pixels forming one region (a ring of the flower)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    pub start: u8,
    pub end: u8,
}

impl RegionBounds {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Get the number of LEDs in the region
    pub const fn count(self) -> u8 {
        self.end.saturating_sub(self.start)
    }

    /// Buffer index of the pixel `step` positions into the region, wrapping
    pub const fn pixel(self, step: u8) -> usize {
        let count = self.count();
        if count == 0 {
            return self.start as usize;
        }
        self.start as usize + (step % count) as usize
    }

    pub const fn validate(self, led_count: usize) -> Result<(), ConfigurationError> {
        if self.start >= self.end || self.end as usize > led_count {
            return Err(ConfigurationError::RegionOutOfRange {
                start: self.start,
                end: self.end,
                led_count,
            });
        }
        Ok(())
    }
}

/// Get a slice of the LEDs within the bounds
pub fn bounded(leds: &mut [Rgb], bounds: RegionBounds) -> Result<&mut [Rgb], BufferBoundsError> {
    let len = leds.len();
    leds.get_mut(usize::from(bounds.start)..usize::from(bounds.end))
        .ok_or(BufferBoundsError {
            index: usize::from(bounds.end).saturating_sub(1),
            len,
        })
}

/// Get a single LED, checked
pub fn pixel_mut(leds: &mut [Rgb], index: usize) -> Result<&mut Rgb, BufferBoundsError> {
    let len = leds.len();
    leds.get_mut(index).ok_or(BufferBoundsError { index, len })
}
