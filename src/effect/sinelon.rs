//! A colored dot sweeping back and forth, with fading trails

use super::{Effect, FrameContext};
use crate::{
    bounds::pixel_mut,
    color::{add_saturating, fade_to_black_by, hsv},
    error::BufferBoundsError,
    math8::beatsin16,
};

#[derive(Debug, Clone)]
pub struct SinelonEffect {
    bpm: u16,
    fade: u8,
}

impl Default for SinelonEffect {
    fn default() -> Self {
        Self { bpm: 13, fade: 20 }
    }
}

impl Effect for SinelonEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        fade_to_black_by(frame.leds, self.fade);
        let Some(last) = frame.leds.len().checked_sub(1) else {
            return Ok(());
        };

        let last = u16::try_from(last).unwrap_or(u16::MAX);
        let pos = beatsin16(self.bpm, 0, last, frame.now);
        let led = pixel_mut(frame.leds, usize::from(pos))?;
        *led = add_saturating(*led, hsv(frame.hue, 255, 192));
        Ok(())
    }
}
