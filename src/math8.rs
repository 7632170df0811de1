//! Integer helpers for 8-bit brightness values
//!
//! Everything here is `const`, branch-light and free of floats, so it can run
//! inside a timer interrupt on cores without an FPU.

use embassy_time::Duration;

/// Scale `value` by `scale / 256`, where a scale of 255 keeps the value
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Linear blend from `a` to `b`, `amount_of_b` of 255 lands on `b`
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Progress of `elapsed` through `duration` as 0-255
///
/// A zero duration reports no progress.
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    if duration.as_millis() == 0 {
        return 0;
    }
    if elapsed.as_millis() >= duration.as_millis() {
        return 255;
    }

    ((elapsed.as_millis() * 255) / duration.as_millis()) as u8
}

/// Map a brightness linearly onto `0..=max_duty`
///
/// Exact identity for an 8-bit timer.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn linear_duty(value: u8, max_duty: u16) -> u16 {
    ((value as u32 * (max_duty as u32 + 1)) >> 8) as u16
}

/// Map a brightness onto `0..=max_duty` along a square curve
///
/// The eye is far more sensitive at the dark end, so the square spends most
/// of the timer resolution there. On a 14-bit timer this is `value² / 4`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn quadratic_duty(value: u8, max_duty: u16) -> u16 {
    let square = value as u64 * value as u64;
    ((square * (max_duty as u64 + 1)) >> 16) as u16
}

/// Function that reshapes a brightness value
pub type U8Adjuster = fn(value: u8) -> u8;
