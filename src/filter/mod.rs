use crate::color::Rgb;

mod brightness;
mod color_correction;
mod color_order;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

pub use brightness::BrightnessFilter;
pub use color_correction::{ColorCorrection, TYPICAL_LED_STRIP, UNCORRECTED};
pub use color_order::ColorOrder;

#[derive(Debug, Clone, Copy)]
pub struct FilterProcessorConfig {
    /// Master brightness
    pub brightness: u8,
    /// Color correction factors
    pub color_correction: Rgb,
    /// Channel order expected by the strip
    pub color_order: ColorOrder,
}

/// Filter processor - turns the pixel buffer into what goes on the wire
///
/// The pixel buffer itself is never filtered; effects read it back on the
/// next frame. Correction runs first, then brightness, then color order.
#[derive(Debug, Clone, Copy)]
pub struct FilterProcessor {
    pub brightness: BrightnessFilter,
    pub color_correction: ColorCorrection,
    pub color_order: ColorOrder,
}

impl FilterProcessor {
    pub const fn new(config: &FilterProcessorConfig) -> Self {
        Self {
            brightness: BrightnessFilter::new(config.brightness),
            color_correction: ColorCorrection::new(config.color_correction),
            color_order: config.color_order,
        }
    }

    /// Copy `pixels` into `output` and filter the copy
    pub fn process(&self, pixels: &[Rgb], output: &mut [Rgb]) {
        for (out, pixel) in output.iter_mut().zip(pixels) {
            *out = *pixel;
        }
        self.color_correction.apply(output);
        self.brightness.apply(output);
        self.color_order.apply(output);
    }
}
