use crate::error::BufferBoundsError;

/// How the pixel chain is cut into identical panels
///
/// Non-panelled fixtures use a single panel spanning the whole chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub panel_count: usize,
    pub pixels_per_panel: usize,
}

impl PanelLayout {
    pub const fn new(panel_count: usize, pixels_per_panel: usize) -> Self {
        Self {
            panel_count,
            pixels_per_panel,
        }
    }

    /// A single region covering `led_count` pixels
    pub const fn single(led_count: usize) -> Self {
        Self::new(1, led_count)
    }

    /// Total number of pixels in the chain
    pub const fn led_count(self) -> usize {
        self.panel_count * self.pixels_per_panel
    }

    /// Buffer index of `offset` within `panel`
    ///
    /// An offset past the end of its panel is rejected even when the index
    /// would still land inside the chain.
    #[allow(clippy::cast_lossless)]
    pub const fn pixel_index(self, panel: usize, offset: u8) -> Result<usize, BufferBoundsError> {
        let len = self.led_count();
        let offset = offset as usize;
        if panel >= self.panel_count || offset >= self.pixels_per_panel {
            return Err(BufferBoundsError {
                index: panel.saturating_mul(self.pixels_per_panel).saturating_add(offset),
                len,
            });
        }
        Ok(panel * self.pixels_per_panel + offset)
    }
}
