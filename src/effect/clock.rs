use embassy_time::Duration;

use super::{Effect, FrameContext};
use crate::{
    error::{BufferBoundsError, ConfigurationError},
    geometry::{PanelLayout, PatternTable},
    rotator::{Direction, Rotator},
};

const SWEEP_INTERVAL: Duration = Duration::from_millis(100);

/// Clock-hand sweep: one subsection of the edge table lights up at a time,
/// moving forward on every panel in lock-step
#[derive(Debug, Clone)]
pub struct ClockEffect {
    rotator: Rotator,
}

impl ClockEffect {
    pub const fn new(edges: PatternTable) -> Result<Self, ConfigurationError> {
        match Rotator::new(edges, SWEEP_INTERVAL, Direction::Forward) {
            Ok(rotator) => Ok(Self { rotator }),
            Err(err) => Err(err),
        }
    }

    pub const fn rotator(&self) -> &Rotator {
        &self.rotator
    }
}

impl Effect for ClockEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        let painter = frame.painter;
        let panels = 0..painter.layout().panel_count;
        self.rotator
            .rotate_panels(frame.now, &painter, frame.leds, panels, frame.hue)?;
        Ok(())
    }

    fn validate(&self, layout: PanelLayout) -> Result<(), ConfigurationError> {
        self.rotator.table().validate(layout.pixels_per_panel)
    }
}
