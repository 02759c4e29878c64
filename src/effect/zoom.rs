//! Rings cycling through hues from the outside in

use embassy_time::Duration;

use super::{Effect, FrameContext};
use crate::{
    bounds::{RegionBounds, bounded},
    color::fill_solid,
    error::{BufferBoundsError, ConfigurationError},
    geometry::PanelLayout,
    periodic::Periodic,
};

const STEP_INTERVAL: Duration = Duration::from_millis(30);
const HUE_STEP: u8 = 20;
const RING_HUE_SPACING: u8 = 50;

#[derive(Debug, Clone)]
pub struct ZoomEffect {
    rings: [RegionBounds; 3],
    offset: u8,
    timer: Periodic,
}

impl ZoomEffect {
    pub const fn new(rings: [RegionBounds; 3]) -> Self {
        Self {
            rings,
            offset: 0,
            timer: Periodic::immediate(STEP_INTERVAL),
        }
    }
}

impl Effect for ZoomEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        if self.timer.ready(frame.now) {
            self.offset = self.offset.wrapping_sub(HUE_STEP);
        }

        let painter = frame.painter;
        let mut hue = self.offset;
        for ring in &self.rings {
            fill_solid(bounded(frame.leds, *ring)?, painter.color(hue));
            hue = hue.wrapping_add(RING_HUE_SPACING);
        }
        Ok(())
    }

    fn validate(&self, layout: PanelLayout) -> Result<(), ConfigurationError> {
        let led_count = layout.led_count();
        for ring in &self.rings {
            ring.validate(led_count)?;
        }
        Ok(())
    }
}
