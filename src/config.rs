use embassy_time::Duration;

use crate::{
    color::Rgb,
    filter::{ColorOrder, FilterProcessorConfig, TYPICAL_LED_STRIP},
};

/// Compile-time settings of one fixture's light output
#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    /// Master brightness (0-255)
    pub brightness: u8,
    pub frames_per_second: u32,
    /// How often the shared base hue moves one step
    pub hue_interval: Duration,
    /// How long each effect of the playlist runs
    pub pattern_interval: Duration,
    pub color_order: ColorOrder,
    pub color_correction: Rgb,
    /// Data pin handed to the output driver
    pub data_pin: u8,
    /// Duration of each color of the startup test pattern, `None` skips it
    pub startup_test_step: Option<Duration>,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            brightness: 96,
            frames_per_second: 30,
            hue_interval: Duration::from_millis(20),
            pattern_interval: Duration::from_secs(30),
            color_order: ColorOrder::Rgb,
            color_correction: TYPICAL_LED_STRIP,
            data_pin: 2,
            startup_test_step: None,
        }
    }
}

impl LightConfig {
    /// Frame duration for the configured frame rate
    #[allow(clippy::cast_lossless)]
    pub const fn frame_duration(&self) -> Duration {
        let fps = if self.frames_per_second == 0 {
            1
        } else {
            self.frames_per_second
        };
        Duration::from_millis(1000 / fps as u64)
    }

    pub const fn filters(&self) -> FilterProcessorConfig {
        FilterProcessorConfig {
            brightness: self.brightness,
            color_correction: self.color_correction,
            color_order: self.color_order,
        }
    }
}
