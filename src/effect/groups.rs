//! Petal groups painted on every panel
//!
//! Repaints two petal tables on each panel with hues a quarter turn apart.
//! The repaint only happens every 100 ms since the colors follow the slowly
//! rotating base hue anyway.

use embassy_time::Duration;

use super::{Effect, FrameContext};
use crate::{
    error::{BufferBoundsError, ConfigurationError},
    geometry::{PanelLayout, PatternTable},
    periodic::Periodic,
};

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);
const QUARTER_TURN: u8 = 255 / 4;

#[derive(Debug, Clone)]
pub struct GroupsEffect {
    inner: PatternTable,
    outer: PatternTable,
    timer: Periodic,
}

impl GroupsEffect {
    pub const fn new(inner: PatternTable, outer: PatternTable) -> Self {
        Self {
            inner,
            outer,
            timer: Periodic::immediate(REPAINT_INTERVAL),
        }
    }
}

impl Effect for GroupsEffect {
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        if !self.timer.ready(frame.now) {
            return Ok(());
        }

        let painter = frame.painter;
        for panel in 0..painter.layout().panel_count {
            painter.paint(frame.leds, panel, &self.inner, frame.hue)?;
            painter.paint(
                frame.leds,
                panel,
                &self.outer,
                frame.hue.wrapping_add(QUARTER_TURN),
            )?;
        }
        Ok(())
    }

    fn validate(&self, layout: PanelLayout) -> Result<(), ConfigurationError> {
        self.inner.validate(layout.pixels_per_panel)?;
        self.outer.validate(layout.pixels_per_panel)
    }
}
