//! Integration tests for RgbwStrip

mod common;
use common::*;

use rgbw_strip::fade::STEPS_PER_COLOR;
use rgbw_strip::{
    ChannelValues, FadeDirection, FadeMask, FadeState, PWM_8_BIT_CEILING, Srgb, StripBuilder,
};

#[test]
fn create_configures_all_outputs_and_writes_nothing() {
    let strip = mock_strip(128);

    let (r, g, b, w) = strip.channels();
    for channel in [r, g, b, w] {
        assert!(channel.is_configured());
        assert!(channel.history().is_empty());
    }
    assert_eq!(strip.intensity(), 128);
    assert_eq!(strip.max_intensity(), 1023);
    assert_eq!(strip.values().white, 200);
    assert_eq!(*strip.fade(), FadeState::default());
}

#[test]
fn setters_do_not_touch_hardware() {
    let mut strip = mock_strip(255);
    strip.set_value(10, 20, 30, 40);
    strip.set_intensity(64);
    strip.set_max_intensity(PWM_8_BIT_CEILING);

    assert_eq!(last_duties(&strip), [None; 4]);
    assert_eq!(strip.values(), ChannelValues::new(10, 20, 30, 40));
    assert_eq!(strip.intensity(), 64);
    assert_eq!(strip.max_intensity(), 255);
}

#[test]
fn turn_on_writes_scaled_values() {
    let mut strip = mock_strip(255);
    strip.set_max_intensity(PWM_8_BIT_CEILING);
    strip.set_value(255, 128, 0, 100);
    strip.turn_on();

    assert_eq!(last_duties(&strip), [Some(255), Some(128), Some(0), Some(100)]);
}

#[test]
fn turn_on_dims_colors_but_not_white() {
    let mut strip = mock_strip(0);
    strip.set_value(255, 255, 255, 255);
    strip.turn_on();
    assert_eq!(last_duties(&strip), [Some(0), Some(0), Some(0), Some(1023)]);

    strip.set_intensity(128);
    strip.turn_on();
    // 255 * 128 / 255 = 128, 128 * 1023 / 255 = 513
    assert_eq!(last_duties(&strip), [Some(513), Some(513), Some(513), Some(1023)]);
    assert_eq!(strip.output(), ChannelValues::new(513, 513, 513, 1023));
}

#[test]
fn turn_white_on_writes_only_white() {
    let mut strip = mock_strip(255);
    strip.turn_white_on();

    assert_eq!(last_duties(&strip), [None, None, None, Some(802)]);
}

#[test]
fn turn_off_writes_zero_everywhere_and_keeps_values() {
    let mut strip = mock_strip(255);
    strip.set_value(255, 255, 255, 255);
    strip.turn_on();
    strip.turn_off();

    assert_eq!(last_duties(&strip), [Some(0); 4]);
    assert_eq!(strip.values(), ChannelValues::new(255, 255, 255, 255));

    strip.turn_on();
    assert_eq!(last_duties(&strip), [Some(1023); 4]);
}

#[test]
fn turn_off_ignores_ceiling_and_fresh_state() {
    let mut strip = mock_strip(0);
    strip.set_max_intensity(-1);
    strip.turn_off();

    assert_eq!(last_duties(&strip), [Some(0); 4]);
}

#[test]
fn next_fades_red_in_then_out() {
    let mut strip = mock_strip(255);
    strip.set_max_intensity(PWM_8_BIT_CEILING);

    for _ in 0..16 {
        strip.next();
    }

    let (r, g, b, w) = strip.channels();
    assert_eq!(
        r.history(),
        &[1, 3, 7, 15, 31, 63, 127, 255, 127, 63, 31, 15, 7, 3, 1, 0]
    );
    assert!(g.history().iter().all(|&duty| duty == 0));
    assert!(b.history().iter().all(|&duty| duty == 0));
    assert_eq!(w.history(), &[200; 16]);

    assert_eq!(strip.fade().mask(), FadeMask::GREEN);
    assert_eq!(strip.fade().direction(), FadeDirection::Rising);

    strip.next();
    assert_eq!(strip.values(), ChannelValues::new(0, 1, 0, 200));
}

#[test]
fn next_overwrites_colors_but_keeps_white() {
    let mut strip = mock_strip(255);
    strip.set_value(90, 90, 90, 0);
    strip.next();

    assert_eq!(strip.values(), ChannelValues::new(1, 0, 0, 0));
    assert_eq!(last_duties(&strip)[3], Some(0));
}

#[test]
fn next_output_follows_intensity_and_ceiling() {
    let mut strip = mock_strip(128);
    for _ in 0..8 {
        strip.next();
    }

    // level 8: red 255 -> 128 after intensity -> 513 on a 1023 ceiling
    assert_eq!(last_duties(&strip), [Some(513), Some(0), Some(0), Some(802)]);
}

#[test]
fn fade_mask_can_be_chosen_and_reset() {
    let mut strip = mock_strip(255);
    strip.set_fade_mask(FadeMask::CYAN);
    assert_eq!(last_duties(&strip), [None; 4]);

    strip.next();
    assert_eq!(strip.values(), ChannelValues::new(0, 1, 1, 200));

    strip.reset_fade();
    strip.next();
    assert_eq!(strip.values(), ChannelValues::new(1, 0, 0, 200));
}

#[test]
fn builder_applies_configuration() {
    let mut strip = StripBuilder::new()
        .intensity(255)
        .max_intensity(PWM_8_BIT_CEILING)
        .white(50)
        .fade_mask(FadeMask::BLUE)
        .build(
            MockChannel::new(),
            MockChannel::new(),
            MockChannel::new(),
            MockChannel::new(),
        );

    strip.next();
    assert_eq!(last_duties(&strip), [Some(0), Some(0), Some(1), Some(50)]);
}

#[test]
fn set_color_copies_components() {
    let mut strip = mock_strip(255);
    strip.set_color(Srgb::new(10u8, 20, 30), 40);

    assert_eq!(strip.values(), ChannelValues::new(10, 20, 30, 40));
}

#[test]
fn strips_animate_independently() {
    let mut first = mock_strip(255);
    let mut second = mock_strip(255);

    for _ in 0..20 {
        first.next();
    }
    second.next();

    assert_eq!(first.fade().mask(), FadeMask::GREEN);
    assert_eq!(second.fade().mask(), FadeMask::RED);
    assert_eq!(second.fade().level(), 1);
}

#[test]
fn release_returns_channels_as_written() {
    let mut strip = mock_strip(255);
    strip.turn_off();

    let (r, _, _, w) = strip.release();
    assert_eq!(r.history(), &[0]);
    assert_eq!(w.history(), &[0]);
}

#[test]
fn full_cycle_records_every_write() {
    let mut strip = mock_strip(255);
    strip.set_max_intensity(PWM_8_BIT_CEILING);

    for _ in 0..(7 * STEPS_PER_COLOR) {
        strip.next();
    }

    let (r, g, b, w) = strip.channels();
    for channel in [r, g, b, w] {
        assert_eq!(channel.history().len(), 7 * STEPS_PER_COLOR);
    }
    // blue only lights for masks 4 through 7
    assert!(b.history()[..3 * STEPS_PER_COLOR].iter().all(|&duty| duty == 0));
    assert_eq!(b.history()[3 * STEPS_PER_COLOR + 7], 255);
    assert_eq!(*strip.fade(), FadeState::default());
}
