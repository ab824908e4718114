//! Duty-cycle scaling from logical channel values.
//!
//! Logical values live in the 0-255 range. The functions here map them onto
//! the hardware PWM range (the *ceiling*), optionally dimmed by an intensity.
//! Every division truncates, and the order of operations is fixed: changing it
//! changes the output at low brightness.

/// Full logical scale of a channel value and of the intensity.
pub const FULL_SCALE: i32 = 255;

/// Ceiling for 8-bit PWM peripherals.
pub const PWM_8_BIT_CEILING: i32 = 255;

/// Ceiling for 10-bit PWM peripherals.
pub const PWM_10_BIT_CEILING: i32 = 1023;

/// Ceiling a strip starts with.
pub const DEFAULT_MAX_INTENSITY: i32 = PWM_10_BIT_CEILING;

/// White level a strip starts with.
pub const DEFAULT_WHITE_VALUE: i32 = 200;

/// Scales a color channel value by `intensity`, then maps it onto `ceiling`.
///
/// Computes `((base * intensity) / 255 * ceiling) / 255` with a truncating
/// division after each step. Returns 0 when either `base` or `intensity` is 0.
///
/// Inputs are not validated. Out-of-range values produce out-of-range duty
/// cycles, and products that overflow `i32` wrap instead of panicking.
#[inline]
pub const fn scale(base: i32, intensity: i32, ceiling: i32) -> i32 {
    if base == 0 || intensity == 0 {
        return 0;
    }

    let dimmed = base.wrapping_mul(intensity) / FULL_SCALE;
    dimmed.wrapping_mul(ceiling) / FULL_SCALE
}

/// Maps the white channel value onto `ceiling`, ignoring intensity.
#[inline]
pub const fn scale_white_only(base: i32, ceiling: i32) -> i32 {
    if base == 0 {
        return 0;
    }

    base.wrapping_mul(ceiling) / FULL_SCALE
}
