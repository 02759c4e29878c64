//! Error types
//!
//! Both errors describe a fixture that was wired up wrong. Neither is a
//! retry condition: a configuration error stops the driver from starting,
//! a bounds error means a table slipped past validation.

use thiserror::Error;

/// Fixture geometry or playlist rejected at startup
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("pattern table is empty")]
    EmptyTable,
    #[error("offset {offset} at position {position} is outside a region of {region_size} pixels")]
    OffsetOutOfRange {
        position: usize,
        offset: u8,
        region_size: usize,
    },
    #[error("subsection size must be greater than zero")]
    ZeroSubsection,
    #[error("{len} offsets do not split into subsections of {subsection_size}")]
    UnevenSubsections { len: usize, subsection_size: usize },
    #[error("region {start}..{end} does not fit into {led_count} pixels")]
    RegionOutOfRange { start: u8, end: u8, led_count: usize },
    #[error("pixel buffer holds {actual} pixels, layout needs {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("playlist is empty")]
    EmptyPlaylist,
    #[error("playlist holds more than {0} effects")]
    PlaylistFull(usize),
}

/// A computed pixel index fell outside the pixel buffer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pixel {index} is outside a buffer of {len} pixels")]
pub struct BufferBoundsError {
    pub index: usize,
    pub len: usize,
}
