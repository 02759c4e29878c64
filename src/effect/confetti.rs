//! Random colored speckles that blink in and fade smoothly

use rand::Rng;

use super::{Effect, FrameContext};
use crate::{
    color::{add_saturating, fade_to_black_by, hsv},
    error::BufferBoundsError,
};

#[derive(Debug, Clone)]
pub struct ConfettiEffect {
    fade: u8,
    /// Speckle hues are picked from `hue..hue + hue_spread`
    hue_spread: u8,
}

impl Default for ConfettiEffect {
    fn default() -> Self {
        Self {
            fade: 10,
            hue_spread: 64,
        }
    }
}

impl Effect for ConfettiEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        fade_to_black_by(frame.leds, self.fade);
        if frame.leds.is_empty() {
            return Ok(());
        }

        let pos = frame.rng.random_range(0..frame.leds.len());
        let hue = frame
            .hue
            .wrapping_add(frame.rng.random_range(0..self.hue_spread.max(1)));
        frame.leds[pos] = add_saturating(frame.leds[pos], hsv(hue, 200, 255));
        Ok(())
    }
}
