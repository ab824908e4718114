#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rgbw_strip::{FadeMask, PWM_10_BIT_CEILING, PwmChannel, RgbwStrip, StripBuilder};

// ============================================================================
// Minimal Channel Implementation
// ============================================================================

/// Zero-size channel implementation for measuring library overhead
pub struct MinimalChannel;

impl PwmChannel for MinimalChannel {
    fn write_duty(&mut self, duty: i32) {
        // Minimal no-op implementation
        core::hint::black_box(duty);
    }
}

// ============================================================================
// Strip Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_strip() {
    let mut strip = RgbwStrip::create(
        core::hint::black_box(128),
        MinimalChannel,
        MinimalChannel,
        MinimalChannel,
        MinimalChannel,
    );

    strip.set_max_intensity(PWM_10_BIT_CEILING);
    strip.set_value(255, 64, 0, 200);
    strip.turn_on();
    strip.turn_white_on();

    for _ in 0..core::hint::black_box(32) {
        strip.next();
    }

    strip.set_fade_mask(FadeMask::CYAN);
    strip.next();
    strip.turn_off();
    core::hint::black_box(strip);

    // Builder path
    let mut built = StripBuilder::new()
        .intensity(255)
        .max_intensity(255)
        .white(0)
        .build(MinimalChannel, MinimalChannel, MinimalChannel, MinimalChannel);
    built.next();
    core::hint::black_box(built);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_strip();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
