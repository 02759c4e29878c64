//! 8 and 16 bit fixed-point helpers
//!
//! Integer scaling plus the beat/wave generators the animations are timed
//! with. A "beat" is a sawtooth that wraps once per beat of the given BPM,
//! `beatsin*` maps that sawtooth through a sine into a range.

use core::f32::consts::TAU;

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Sine over a 0-255 circle, output 1-255 centered on 128
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(theta: u8) -> u8 {
    let angle = f32::from(theta) / 256.0 * TAU;
    libm::roundf(128.0 + 127.0 * libm::sinf(angle)) as u8
}

/// Sine over a 0-65535 circle, output -32767..=32767
#[allow(clippy::cast_possible_truncation)]
pub fn sin16(theta: u16) -> i16 {
    let angle = f32::from(theta) / 65536.0 * TAU;
    libm::roundf(32767.0 * libm::sinf(angle)) as i16
}

/// Sawtooth for a tempo in Q8.8 beats per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beat88(bpm88: u16, now: Instant) -> u16 {
    // 280 / 65536 converts ms * bpm88 into 1/65536ths of a beat
    (now.as_millis()
        .wrapping_mul(u64::from(bpm88))
        .wrapping_mul(280)
        >> 16) as u16
}

/// 16-bit sawtooth for a whole-number tempo
pub fn beat16(bpm: u16, now: Instant) -> u16 {
    let bpm88 = if bpm < 256 { bpm << 8 } else { bpm };
    beat88(bpm88, now)
}

/// 8-bit sawtooth for a whole-number tempo
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u16, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave oscillating between `low` and `high` (inclusive) at `bpm`
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, now: Instant) -> u16 {
    let beat = beat16(bpm, now);
    let wave = (i32::from(sin16(beat)) + 32768) as u16;
    let range = high.saturating_sub(low);
    low + scale16(wave, range)
}

/// 8-bit variant of [`beatsin16`]
pub fn beatsin8(bpm: u16, low: u8, high: u8, now: Instant) -> u8 {
    let wave = sin8(beat8(bpm, now));
    let range = high.saturating_sub(low);
    low + scale8(wave, range)
}
