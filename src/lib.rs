#![no_std]

pub mod bounds;
pub mod color;
pub mod config;
pub mod effect;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod frame_driver;
pub mod geometry;
pub mod math8;
pub mod painter;
pub mod periodic;
pub mod rotator;
pub mod scheduler;

pub use bounds::RegionBounds;
pub use config::LightConfig;
pub use effect::{EffectId, EffectSlot};
pub use error::{BufferBoundsError, ConfigurationError};
pub use filter::{ColorOrder, FilterProcessorConfig};
pub use fixture::FixtureConfig;
pub use frame_driver::{FrameDriver, FrameResult};
pub use geometry::{PanelLayout, PatternTable};
pub use painter::RegionPainter;
pub use rotator::{Direction, RotationState, Rotator};
pub use scheduler::PatternScheduler;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame driver is generic over this trait.
pub trait OutputDriver {
    /// Prepare a chain of `led_count` LEDs on `data_pin`, called once
    fn configure(&mut self, _led_count: usize, _data_pin: u8) {}

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
