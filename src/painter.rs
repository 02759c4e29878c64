//! Region painter
//!
//! Writes one color into every pixel a pattern table maps to on a panel.

use crate::{
    color::{Rgb, hsv},
    error::BufferBoundsError,
    geometry::{PanelLayout, PatternTable},
};

const DEFAULT_SATURATION: u8 = 200;
const DEFAULT_VALUE: u8 = 255;

/// Paints pattern tables onto panels of a fixed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPainter {
    layout: PanelLayout,
    saturation: u8,
    value: u8,
}

impl RegionPainter {
    pub const fn new(layout: PanelLayout) -> Self {
        Self {
            layout,
            saturation: DEFAULT_SATURATION,
            value: DEFAULT_VALUE,
        }
    }

    pub const fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Color painted for `hue`
    pub fn color(&self, hue: u8) -> Rgb {
        hsv(hue, self.saturation, self.value)
    }

    /// Paint every offset of `table` on `panel`
    pub fn paint(
        &self,
        leds: &mut [Rgb],
        panel: usize,
        table: &PatternTable,
        hue: u8,
    ) -> Result<(), BufferBoundsError> {
        self.paint_offsets(leds, panel, table.offsets(), hue)
    }

    /// Paint a raw list of offsets on `panel`
    ///
    /// All indices are checked before the first write, so a bad offset
    /// leaves the buffer untouched.
    pub fn paint_offsets(
        &self,
        leds: &mut [Rgb],
        panel: usize,
        offsets: &[u8],
        hue: u8,
    ) -> Result<(), BufferBoundsError> {
        for &offset in offsets {
            self.index(leds, panel, offset)?;
        }

        let color = self.color(hue);
        for &offset in offsets {
            let index = self.index(leds, panel, offset)?;
            leds[index] = color;
        }
        Ok(())
    }

    fn index(&self, leds: &[Rgb], panel: usize, offset: u8) -> Result<usize, BufferBoundsError> {
        let index = self.layout.pixel_index(panel, offset)?;
        if index >= leds.len() {
            return Err(BufferBoundsError {
                index,
                len: leds.len(),
            });
        }
        Ok(index)
    }
}
