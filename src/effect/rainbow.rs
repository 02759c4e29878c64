//! Rainbow across the whole chain
//!
//! The rainbow starts at the shared base hue, so it drifts along the chain
//! as the hue rotates. The glitter variant sprinkles a white spark on top
//! every few frames.

use rand::Rng;

use super::{Effect, FrameContext};
use crate::{
    color::{WHITE, add_saturating, fill_rainbow},
    error::BufferBoundsError,
};

const DEFAULT_DELTA_HUE: u8 = 7;

/// Rainbow effect built on `fill_rainbow`
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Hue step between neighbouring pixels
    delta_hue: u8,
    /// Chance (out of 256) of a glitter spark per frame
    glitter_chance: Option<u8>,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            delta_hue: DEFAULT_DELTA_HUE,
            glitter_chance: None,
        }
    }
}

impl RainbowEffect {
    /// Add glitter with the given per-frame chance (0-255)
    #[must_use]
    pub fn with_glitter(mut self, chance: u8) -> Self {
        self.glitter_chance = Some(chance);
        self
    }

    /// Set the hue step between pixels
    #[must_use]
    pub fn with_delta_hue(mut self, delta_hue: u8) -> Self {
        self.delta_hue = delta_hue;
        self
    }

    pub const fn has_glitter(&self) -> bool {
        self.glitter_chance.is_some()
    }
}

impl Effect for RainbowEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        fill_rainbow(frame.leds, frame.hue, self.delta_hue);

        let Some(chance) = self.glitter_chance else {
            return Ok(());
        };
        if frame.leds.is_empty() || frame.rng.random::<u8>() >= chance {
            return Ok(());
        }
        let pos = frame.rng.random_range(0..frame.leds.len());
        frame.leds[pos] = add_saturating(frame.leds[pos], WHITE);
        Ok(())
    }
}
