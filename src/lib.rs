#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbwStrip`**: Owns the four PWM outputs of one strip, its logical channel values, intensity, ceiling and fade position
//! - **`StripBuilder`**: Entry point `StripBuilder::new()`; configures intensity, ceiling, white level and the first fade color before construction
//! - **`PwmChannel`**: Trait to implement for each output of your hardware
//! - **`HalChannel`**: Ready-made `PwmChannel` for any `embedded-hal` PWM output
//! - **`FadeState`**: Position in the built-in fade cycle (color mask, level, direction)
//! - **`FadeMask`**: Which of red/green/blue the cycle is fading, always 1-7
//!
//! Channel values, intensity and ceiling are plain `i32`s and are never validated.
//! The strip turns them into duty cycles with fixed-order truncating integer math
//! (see [`scale`](crate::scale())).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod channel;
pub mod fade;
pub mod scale;
pub mod strip;

pub use channel::{Channel, ChannelValues, HalChannel, PwmChannel};
pub use fade::{FadeDirection, FadeError, FadeMask, FadeState};
pub use scale::{
    DEFAULT_MAX_INTENSITY, DEFAULT_WHITE_VALUE, FULL_SCALE, PWM_8_BIT_CEILING, PWM_10_BIT_CEILING,
    scale, scale_white_only,
};
pub use strip::{RgbwStrip, StripBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_defaults_start_on_red() {
        let state = FadeState::default();
        assert_eq!(state.mask(), FadeMask::RED);
        assert_eq!(state.level(), 0);
        assert_eq!(state.direction(), FadeDirection::Rising);
    }
}
