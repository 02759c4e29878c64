//! Flower fixture
//!
//! A single 100 LED chain wound into three concentric rings of 24 LEDs plus
//! a center pixel. The rings are contiguous, so they are plain regions
//! rather than pattern tables.

use embassy_time::Duration;

use crate::{
    bounds::RegionBounds,
    config::LightConfig,
    effect::{
        BpmEffect, CirclesEffect, ConfettiEffect, EffectSlot, JuggleEffect, RainbowEffect,
        SinelonEffect, ZoomEffect,
    },
    error::ConfigurationError,
    filter::{ColorOrder, TYPICAL_LED_STRIP},
    geometry::PanelLayout,
    scheduler::PatternScheduler,
};

use super::FixtureConfig;

pub const LED_COUNT: usize = 100;

pub const LAYOUT: PanelLayout = PanelLayout::single(LED_COUNT);

pub const OUTSIDE: RegionBounds = RegionBounds::new(0, 24);
pub const MIDDLE: RegionBounds = RegionBounds::new(24, 48);
pub const INSIDE: RegionBounds = RegionBounds::new(48, 72);
pub const CENTER: RegionBounds = RegionBounds::new(73, 74);

/// Rings from the outside in
pub const RINGS: [RegionBounds; 3] = [OUTSIDE, MIDDLE, INSIDE];

const GLITTER_CHANCE: u8 = 80;

const _: () = assert!(OUTSIDE.validate(LED_COUNT).is_ok());
const _: () = assert!(MIDDLE.validate(LED_COUNT).is_ok());
const _: () = assert!(INSIDE.validate(LED_COUNT).is_ok());
const _: () = assert!(CENTER.validate(LED_COUNT).is_ok());

pub const CONFIG: FixtureConfig = FixtureConfig {
    name: "Flower",
    layout: LAYOUT,
    tables: &[],
    regions: &[OUTSIDE, MIDDLE, INSIDE, CENTER],
    light: LightConfig {
        brightness: 255,
        frames_per_second: 120,
        hue_interval: Duration::from_millis(20),
        pattern_interval: Duration::from_secs(30),
        color_order: ColorOrder::Grb,
        color_correction: TYPICAL_LED_STRIP,
        // D6 on the ESP8266 board
        data_pin: 12,
        startup_test_step: None,
    },
};

/// Effects the flower cycles through
pub fn playlist() -> Result<PatternScheduler, ConfigurationError> {
    PatternScheduler::new([
        EffectSlot::Circles(CirclesEffect::new(RINGS, CENTER.start)),
        EffectSlot::Zoom(ZoomEffect::new(RINGS)),
        EffectSlot::Juggle(JuggleEffect::default()),
        EffectSlot::Confetti(ConfettiEffect::default()),
        EffectSlot::Sinelon(SinelonEffect::default()),
        EffectSlot::Bpm(BpmEffect::default()),
        EffectSlot::Rainbow(RainbowEffect::default().with_glitter(GLITTER_CHANCE)),
    ])
}
