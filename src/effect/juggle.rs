//! Eight colored dots, weaving in and out of sync with each other

use super::{Effect, FrameContext};
use crate::{
    bounds::pixel_mut,
    color::{fade_to_black_by, hsv, max_channels},
    error::BufferBoundsError,
    math8::beatsin16,
};

const DOT_COUNT: u16 = 8;
const DOT_HUE_STEP: u8 = 32;

#[derive(Debug, Clone)]
pub struct JuggleEffect {
    fade: u8,
    /// Tempo of the slowest dot, each further dot is one BPM faster
    base_bpm: u16,
}

impl Default for JuggleEffect {
    fn default() -> Self {
        Self {
            fade: 20,
            base_bpm: 7,
        }
    }
}

impl Effect for JuggleEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        fade_to_black_by(frame.leds, self.fade);
        let Some(last) = frame.leds.len().checked_sub(1) else {
            return Ok(());
        };
        let last = u16::try_from(last).unwrap_or(u16::MAX);

        let mut dot_hue: u8 = 0;
        for dot in 0..DOT_COUNT {
            let pos = beatsin16(self.base_bpm + dot, 0, last, frame.now);
            let led = pixel_mut(frame.leds, usize::from(pos))?;
            *led = max_channels(*led, hsv(dot_hue, 200, 255));
            dot_hue = dot_hue.wrapping_add(DOT_HUE_STEP);
        }
        Ok(())
    }
}
