//! Dots circling the flower rings
//!
//! Two dots, half a ring apart, travel around each ring together. The rings
//! are offset in hue from each other and the second dot sits on the
//! opposite side of the color wheel.

use embassy_time::Duration;

use super::{Effect, FrameContext};
use crate::{
    bounds::{RegionBounds, pixel_mut},
    color::fade_to_black_by,
    error::{BufferBoundsError, ConfigurationError},
    geometry::PanelLayout,
    periodic::Periodic,
};

const STEP_INTERVAL: Duration = Duration::from_millis(50);
const FADE: u8 = 20;
const RING_HUE_STEP: u8 = 20;
const OPPOSITE_HUE: u8 = 128;
const CENTER_HUE: u8 = 80;

#[derive(Debug, Clone)]
pub struct CirclesEffect {
    rings: [RegionBounds; 3],
    center: u8,
    leading: u8,
    trailing: u8,
    timer: Periodic,
}

impl CirclesEffect {
    pub const fn new(rings: [RegionBounds; 3], center: u8) -> Self {
        Self {
            rings,
            center,
            leading: 0,
            trailing: rings[0].count() / 2,
            timer: Periodic::immediate(STEP_INTERVAL),
        }
    }

    /// Positions of both dots along the rings
    pub const fn positions(&self) -> (u8, u8) {
        (self.leading, self.trailing)
    }
}

impl Effect for CirclesEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        if self.timer.ready(frame.now) {
            let count = self.rings[0].count().max(1);
            self.leading = (self.leading + 1) % count;
            self.trailing = (self.trailing + 1) % count;
        }

        fade_to_black_by(frame.leds, FADE);

        let painter = frame.painter;
        let mut hue = frame.hue;
        for ring in &self.rings {
            *pixel_mut(frame.leds, ring.pixel(self.leading))? = painter.color(hue);
            *pixel_mut(frame.leds, ring.pixel(self.trailing))? =
                painter.color(hue.wrapping_add(OPPOSITE_HUE));
            hue = hue.wrapping_add(RING_HUE_STEP);
        }
        *pixel_mut(frame.leds, usize::from(self.center))? =
            painter.color(frame.hue.wrapping_add(CENTER_HUE));
        Ok(())
    }

    fn validate(&self, layout: PanelLayout) -> Result<(), ConfigurationError> {
        let led_count = layout.led_count();
        for ring in &self.rings {
            ring.validate(led_count)?;
        }
        RegionBounds::new(self.center, self.center.saturating_add(1)).validate(led_count)
    }
}
