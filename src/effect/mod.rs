//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and keeps its own state
//! (positions, timers, rotators) between frames; effects never share state.

mod bpm;
mod circles;
mod clock;
mod confetti;
mod groups;
mod juggle;
mod rainbow;
mod sinelon;
mod test_pattern;
mod zoom;

use embassy_time::Instant;
use rand::rngs::SmallRng;

pub use bpm::BpmEffect;
pub use circles::CirclesEffect;
pub use clock::ClockEffect;
pub use confetti::ConfettiEffect;
pub use groups::GroupsEffect;
pub use juggle::JuggleEffect;
pub use rainbow::RainbowEffect;
pub use sinelon::SinelonEffect;
pub use test_pattern::TestPatternEffect;
pub use zoom::ZoomEffect;

use crate::{
    color::Rgb,
    error::{BufferBoundsError, ConfigurationError},
    geometry::PanelLayout,
    painter::RegionPainter,
};

const EFFECT_NAME_CONFETTI: &str = "confetti";
const EFFECT_NAME_SINELON: &str = "sinelon";
const EFFECT_NAME_BPM: &str = "bpm";
const EFFECT_NAME_JUGGLE: &str = "juggle";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_RAINBOW_WITH_GLITTER: &str = "rainbow_with_glitter";
const EFFECT_NAME_GROUPS: &str = "groups";
const EFFECT_NAME_CLOCK: &str = "clock";
const EFFECT_NAME_CIRCLES: &str = "circles";
const EFFECT_NAME_ZOOM: &str = "zoom";

const EFFECT_ID_CONFETTI: u8 = 0;
const EFFECT_ID_SINELON: u8 = 1;
const EFFECT_ID_BPM: u8 = 2;
const EFFECT_ID_JUGGLE: u8 = 3;
const EFFECT_ID_RAINBOW: u8 = 4;
const EFFECT_ID_RAINBOW_WITH_GLITTER: u8 = 5;
const EFFECT_ID_GROUPS: u8 = 6;
const EFFECT_ID_CLOCK: u8 = 7;
const EFFECT_ID_CIRCLES: u8 = 8;
const EFFECT_ID_ZOOM: u8 = 9;

/// Everything an effect may read or write during one frame
pub struct FrameContext<'a> {
    /// Frame timestamp
    pub now: Instant,
    /// Rotating base hue shared by all effects
    pub hue: u8,
    /// The shared pixel buffer
    pub leds: &'a mut [Rgb],
    /// Painter bound to the fixture's panel layout
    pub painter: RegionPainter,
    pub rng: &'a mut SmallRng,
}

pub trait Effect {
    /// Render a single frame into `frame.leds`
    ///
    /// Must return quickly; the frame rate depends on it.
    fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError>;

    /// Check the tables and regions the effect addresses against `layout`
    ///
    /// Effects that only touch the buffer through its length have nothing
    /// to check.
    fn validate(&self, _layout: PanelLayout) -> Result<(), ConfigurationError> {
        Ok(())
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Random speckles that blink in and fade
    Confetti(ConfettiEffect),
    /// A dot sweeping back and forth with a trail
    Sinelon(SinelonEffect),
    /// Palette stripes pulsing to a beat
    Bpm(BpmEffect),
    /// Eight dots weaving in and out of sync
    Juggle(JuggleEffect),
    /// Rainbow across the whole chain
    Rainbow(RainbowEffect),
    /// Petal groups painted on every panel
    Groups(GroupsEffect),
    /// Edge segments sweeping around every panel
    Clock(ClockEffect),
    /// Dots circling the flower rings
    Circles(CirclesEffect),
    /// Rings cycling through hues from the outside in
    Zoom(ZoomEffect),
}

/// Known effect ids, used for naming effects in logs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Confetti = EFFECT_ID_CONFETTI,
    Sinelon = EFFECT_ID_SINELON,
    Bpm = EFFECT_ID_BPM,
    Juggle = EFFECT_ID_JUGGLE,
    Rainbow = EFFECT_ID_RAINBOW,
    RainbowWithGlitter = EFFECT_ID_RAINBOW_WITH_GLITTER,
    Groups = EFFECT_ID_GROUPS,
    Clock = EFFECT_ID_CLOCK,
    Circles = EFFECT_ID_CIRCLES,
    Zoom = EFFECT_ID_ZOOM,
}

impl EffectId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confetti => EFFECT_NAME_CONFETTI,
            Self::Sinelon => EFFECT_NAME_SINELON,
            Self::Bpm => EFFECT_NAME_BPM,
            Self::Juggle => EFFECT_NAME_JUGGLE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::RainbowWithGlitter => EFFECT_NAME_RAINBOW_WITH_GLITTER,
            Self::Groups => EFFECT_NAME_GROUPS,
            Self::Clock => EFFECT_NAME_CLOCK,
            Self::Circles => EFFECT_NAME_CIRCLES,
            Self::Zoom => EFFECT_NAME_ZOOM,
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, frame: &mut FrameContext<'_>) -> Result<(), BufferBoundsError> {
        match self {
            Self::Confetti(effect) => effect.render(frame),
            Self::Sinelon(effect) => effect.render(frame),
            Self::Bpm(effect) => effect.render(frame),
            Self::Juggle(effect) => effect.render(frame),
            Self::Rainbow(effect) => effect.render(frame),
            Self::Groups(effect) => effect.render(frame),
            Self::Clock(effect) => effect.render(frame),
            Self::Circles(effect) => effect.render(frame),
            Self::Zoom(effect) => effect.render(frame),
        }
    }

    /// Validate the current effect against the fixture layout
    pub fn validate(&self, layout: PanelLayout) -> Result<(), ConfigurationError> {
        match self {
            Self::Confetti(effect) => effect.validate(layout),
            Self::Sinelon(effect) => effect.validate(layout),
            Self::Bpm(effect) => effect.validate(layout),
            Self::Juggle(effect) => effect.validate(layout),
            Self::Rainbow(effect) => effect.validate(layout),
            Self::Groups(effect) => effect.validate(layout),
            Self::Clock(effect) => effect.validate(layout),
            Self::Circles(effect) => effect.validate(layout),
            Self::Zoom(effect) => effect.validate(layout),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Confetti(_) => EffectId::Confetti,
            Self::Sinelon(_) => EffectId::Sinelon,
            Self::Bpm(_) => EffectId::Bpm,
            Self::Juggle(_) => EffectId::Juggle,
            Self::Rainbow(effect) if effect.has_glitter() => EffectId::RainbowWithGlitter,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Groups(_) => EffectId::Groups,
            Self::Clock(_) => EffectId::Clock,
            Self::Circles(_) => EffectId::Circles,
            Self::Zoom(_) => EffectId::Zoom,
        }
    }
}
