//! Startup test pattern
//!
//! Shows solid red, green and blue for one step each so a miswired strip
//! or a wrong color order is obvious at power-on. Runs before the playlist
//! and never again.

use embassy_time::{Duration, Instant};

use super::{Effect, FrameContext};
use crate::{
    color::{Rgb, fill_solid},
    error::BufferBoundsError,
};

const COLORS: [Rgb; 3] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];

#[derive(Debug, Clone)]
pub struct TestPatternEffect {
    step: Duration,
    started: Option<Instant>,
}

impl TestPatternEffect {
    pub const fn new(step: Duration) -> Self {
        Self {
            step,
            started: None,
        }
    }

    /// Color for the step active at `now`, `None` once all steps ran
    fn color_at(&self, now: Instant) -> Option<Rgb> {
        let started = self.started?;
        let step_ms = self.step.as_millis().max(1);
        let elapsed = now.checked_duration_since(started)?.as_millis();
        let index = usize::try_from(elapsed / step_ms).ok()?;
        COLORS.get(index).copied()
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.started.is_some() && self.color_at(now).is_none()
    }
}

impl Effect for TestPatternEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        self.started.get_or_insert(frame.now);
        if let Some(color) = self.color_at(frame.now) {
            fill_solid(frame.leds, color);
        }
        Ok(())
    }
}
