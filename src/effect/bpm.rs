//! Colored stripes pulsing at a defined beats-per-minute

use super::{Effect, FrameContext};
use crate::{
    color::{PARTY_COLORS, Palette16, color_from_palette},
    error::BufferBoundsError,
    math8::beatsin8,
};

#[derive(Debug, Clone)]
pub struct BpmEffect {
    bpm: u16,
    palette: &'static Palette16,
}

impl Default for BpmEffect {
    fn default() -> Self {
        Self {
            bpm: 62,
            palette: &PARTY_COLORS,
        }
    }
}

impl Effect for BpmEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        let beat = beatsin8(self.bpm, 64, 255, frame.now);
        let hue = frame.hue;

        for (i, led) in frame.leds.iter_mut().enumerate() {
            // Palette index and brightness wrap every 256 steps
            let i = i as u8;
            let index = hue.wrapping_add(i.wrapping_mul(2));
            let brightness = beat.wrapping_sub(hue).wrapping_add(i.wrapping_mul(10));
            *led = color_from_palette(self.palette, index, brightness);
        }
        Ok(())
    }
}
