//! Timed region rotator
//!
//! Lights one subsection of a pattern table at a time and moves on to the
//! next subsection once per interval. Only the newly selected subsection is
//! painted; whatever was lit before keeps its color until something else
//! (usually a fade) touches it, which is what gives the marching look.
//!
//! The gate is a plain time comparison, so calling [`Rotator::rotate`]
//! every frame is cheap: most calls return without touching the buffer.

use core::ops::Range;

use embassy_time::{Duration, Instant};

use crate::{
    color::Rgb,
    error::{BufferBoundsError, ConfigurationError},
    geometry::PatternTable,
    painter::RegionPainter,
};

/// Which way the lit subsection travels through the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Mutable state of one rotator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    next_update: Instant,
    segment_offset: i32,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    pub const fn new() -> Self {
        Self {
            next_update: Instant::from_millis(0),
            segment_offset: 0,
        }
    }

    pub const fn next_update(&self) -> Instant {
        self.next_update
    }

    pub const fn segment_offset(&self) -> i32 {
        self.segment_offset
    }

    /// Active subsection index, always within `0..segment_count`
    #[allow(clippy::cast_sign_loss)]
    pub fn active_segment(&self, segment_count: usize) -> usize {
        let count = i32::try_from(segment_count).unwrap_or(i32::MAX);
        if count == 0 {
            return 0;
        }
        // rem_euclid never returns a negative value for a positive divisor
        self.segment_offset.rem_euclid(count) as usize
    }

    /// Advance one step if the interval elapsed
    ///
    /// Returns the newly active subsection, or `None` while gated.
    pub fn step(
        &mut self,
        now: Instant,
        interval: Duration,
        direction: Direction,
        segment_count: usize,
    ) -> Option<usize> {
        if now < self.next_update || segment_count == 0 {
            return None;
        }
        self.next_update = now + interval;

        let count = i32::try_from(segment_count).unwrap_or(i32::MAX);
        self.segment_offset = self
            .segment_offset
            .wrapping_add(direction.step())
            .rem_euclid(count);
        Some(self.active_segment(segment_count))
    }
}

/// Moves a lit subsection through a pattern table on a timer
#[derive(Debug, Clone)]
pub struct Rotator {
    table: PatternTable,
    interval: Duration,
    direction: Direction,
    state: RotationState,
}

impl Rotator {
    /// Rejects tables whose subsections would not cover them evenly
    pub const fn new(
        table: PatternTable,
        interval: Duration,
        direction: Direction,
    ) -> Result<Self, ConfigurationError> {
        if let Err(err) = table.validate_subsections() {
            return Err(err);
        }
        Ok(Self {
            table,
            interval,
            direction,
            state: RotationState::new(),
        })
    }

    pub const fn state(&self) -> RotationState {
        self.state
    }

    pub const fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Rotate on a single panel
    ///
    /// Returns whether the rotator fired this frame.
    pub fn rotate(
        &mut self,
        now: Instant,
        painter: &RegionPainter,
        leds: &mut [Rgb],
        panel: usize,
        hue: u8,
    ) -> Result<bool, BufferBoundsError> {
        self.rotate_panels(now, painter, leds, panel..panel + 1, hue)
    }

    /// Rotate every panel in `panels` in lock-step
    ///
    /// One timer and one offset drive all panels, so the same subsection is
    /// lit on each of them.
    pub fn rotate_panels(
        &mut self,
        now: Instant,
        painter: &RegionPainter,
        leds: &mut [Rgb],
        panels: Range<usize>,
        hue: u8,
    ) -> Result<bool, BufferBoundsError> {
        let segment_count = self.table.segment_count();
        let Some(segment) = self
            .state
            .step(now, self.interval, self.direction, segment_count)
        else {
            return Ok(false);
        };

        let Some(offsets) = self.table.segment(segment) else {
            return Ok(true);
        };
        for panel in panels {
            painter.paint_offsets(leds, panel, offsets, hue)?;
        }
        Ok(true)
    }
}
