//! Tetragonal deltohedron lantern
//!
//! Eight kite-shaped stained glass panels with 27 LEDs each. Offsets in the
//! tables are relative to a panel's first LED; every panel is wired the
//! same way.

use embassy_time::Duration;

use crate::{
    config::LightConfig,
    effect::{
        BpmEffect, ClockEffect, ConfettiEffect, EffectSlot, GroupsEffect, JuggleEffect,
        RainbowEffect, SinelonEffect,
    },
    error::ConfigurationError,
    filter::{ColorOrder, TYPICAL_LED_STRIP},
    geometry::{PanelLayout, PatternTable},
    scheduler::PatternScheduler,
};

use super::FixtureConfig;

pub const PANEL_COUNT: usize = 8;
pub const PIXELS_PER_PANEL: usize = 27;
pub const LED_COUNT: usize = PANEL_COUNT * PIXELS_PER_PANEL;

pub const LAYOUT: PanelLayout = PanelLayout::new(PANEL_COUNT, PIXELS_PER_PANEL);

/// Innermost ring of petals
pub const FIRST_LEVEL_PETALS: PatternTable = PatternTable::new(&[7, 8, 9, 11, 14, 21, 22, 23]);

/// Second ring of petals
pub const SECOND_LEVEL_PETALS: PatternTable = PatternTable::new(&[3, 1, 10, 13, 15, 20, 25, 6]);

/// Outer edge, in groups of three walking around the panel
pub const THIRD_LEVEL_PETALS: PatternTable = PatternTable::new(&[
    8, 3, 5, //
    7, 6, 26, //
    23, 25, 24, //
    22, 20, 19, //
    21, 15, 16, //
    14, 13, 12, //
    11, 10, 0, //
    9, 1, 2,
])
.with_subsection_size(3);

const _: () = assert!(FIRST_LEVEL_PETALS.is_valid_for(PIXELS_PER_PANEL));
const _: () = assert!(SECOND_LEVEL_PETALS.is_valid_for(PIXELS_PER_PANEL));
const _: () = assert!(THIRD_LEVEL_PETALS.is_valid_for(PIXELS_PER_PANEL));

pub const CONFIG: FixtureConfig = FixtureConfig {
    name: "TetragonalDeltohedron",
    layout: LAYOUT,
    tables: &[FIRST_LEVEL_PETALS, SECOND_LEVEL_PETALS, THIRD_LEVEL_PETALS],
    regions: &[],
    light: LightConfig {
        brightness: 96,
        frames_per_second: 30,
        hue_interval: Duration::from_millis(20),
        pattern_interval: Duration::from_secs(30),
        color_order: ColorOrder::Rgb,
        color_correction: TYPICAL_LED_STRIP,
        // D4 on the ESP8266 board
        data_pin: 2,
        startup_test_step: Some(Duration::from_secs(1)),
    },
};

/// Effects the lantern cycles through
pub fn playlist() -> Result<PatternScheduler, ConfigurationError> {
    PatternScheduler::new([
        EffectSlot::Clock(ClockEffect::new(THIRD_LEVEL_PETALS)?),
        EffectSlot::Groups(GroupsEffect::new(FIRST_LEVEL_PETALS, SECOND_LEVEL_PETALS)),
        EffectSlot::Confetti(ConfettiEffect::default()),
        EffectSlot::Rainbow(RainbowEffect::default()),
        EffectSlot::Sinelon(SinelonEffect::default()),
        EffectSlot::Bpm(BpmEffect::default()),
        EffectSlot::Juggle(JuggleEffect::default()),
    ])
}
