//! RGBW strip controller.
//!
//! Provides [`RgbwStrip`], which owns the four PWM outputs of a strip together
//! with its logical channel values, intensity, hardware ceiling and fade
//! cycle position, and [`StripBuilder`] for configuring one up front.

use crate::channel::{Channel, ChannelValues, PwmChannel};
use crate::fade::{FadeMask, FadeState};
use crate::scale::{DEFAULT_MAX_INTENSITY, DEFAULT_WHITE_VALUE, FULL_SCALE, scale, scale_white_only};
use palette::Srgb;

/// Controls one RGBW LED strip through four PWM channels.
///
/// Setters only store values; nothing reaches the hardware until
/// [`turn_on`](Self::turn_on), [`turn_white_on`](Self::turn_white_on),
/// [`turn_off`](Self::turn_off) or [`next`](Self::next) is called.
///
/// No input is validated. Values outside their nominal range flow through the
/// scaling arithmetic unchanged, so keeping them sane is up to the caller.
///
/// # Type Parameters
/// * `R`, `G`, `B`, `W` - Output for the red, green, blue and white channel
pub struct RgbwStrip<R: PwmChannel, G: PwmChannel, B: PwmChannel, W: PwmChannel> {
    red: R,
    green: G,
    blue: B,
    white: W,
    values: ChannelValues,
    intensity: i32,
    max_intensity: i32,
    fade: FadeState,
}

impl<R: PwmChannel, G: PwmChannel, B: PwmChannel, W: PwmChannel> RgbwStrip<R, G, B, W> {
    /// Creates a strip and configures its four channels as outputs.
    ///
    /// The ceiling starts at 1023, the white value at 200, and the fade cycle
    /// at red, level 0, rising. The strip writes no duty cycle itself, but a
    /// channel's [`configure_output`](PwmChannel::configure_output) may drive
    /// its output off ([`HalChannel`](crate::HalChannel) does).
    pub fn create(initial_intensity: i32, red: R, green: G, blue: B, white: W) -> Self {
        StripBuilder::new()
            .intensity(initial_intensity)
            .build(red, green, blue, white)
    }

    /// Stores raw logical channel values. No hardware write.
    pub fn set_value(&mut self, red: i32, green: i32, blue: i32, white: i32) {
        self.values = ChannelValues::new(red, green, blue, white);
    }

    /// Stores the color channels from an 8-bit color and the white level.
    pub fn set_color(&mut self, color: Srgb<u8>, white: u8) {
        self.set_value(
            i32::from(color.red),
            i32::from(color.green),
            i32::from(color.blue),
            i32::from(white),
        );
    }

    /// Sets the dimming factor for the color channels (0-255).
    pub fn set_intensity(&mut self, intensity: i32) {
        self.intensity = intensity;
    }

    /// Sets the hardware output ceiling, e.g. 255 for 8-bit or 1023 for
    /// 10-bit PWM.
    pub fn set_max_intensity(&mut self, max_intensity: i32) {
        self.max_intensity = max_intensity;
    }

    /// Duty cycles [`turn_on`](Self::turn_on) would write for the current
    /// state.
    ///
    /// Color channels are dimmed by the intensity, then mapped onto the
    /// ceiling. White only goes through the ceiling.
    pub fn output(&self) -> ChannelValues {
        ChannelValues {
            red: scale(self.values.red, self.intensity, self.max_intensity),
            green: scale(self.values.green, self.intensity, self.max_intensity),
            blue: scale(self.values.blue, self.intensity, self.max_intensity),
            white: scale_white_only(self.values.white, self.max_intensity),
        }
    }

    /// Writes the scaled values to all four channels.
    pub fn turn_on(&mut self) {
        let output = self.output();
        for channel in Channel::ALL {
            self.write(channel, output.get(channel));
        }
    }

    /// Writes only the white channel. The color channels keep whatever they
    /// were last given.
    pub fn turn_white_on(&mut self) {
        self.white
            .write_duty(scale_white_only(self.values.white, self.max_intensity));
    }

    /// Writes zero to all four channels. Stored values are kept.
    pub fn turn_off(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("strip off");

        for channel in Channel::ALL {
            self.write(channel, 0);
        }
    }

    /// Advances the fade cycle by one step and writes the result.
    ///
    /// The red, green and blue values are replaced by the fade levels; white
    /// is left as stored. Call this from a periodic tick. The cycle never ends.
    pub fn next(&mut self) {
        #[cfg(feature = "defmt")]
        let previous = self.fade;

        self.fade.advance();

        #[cfg(feature = "defmt")]
        {
            if self.fade.direction() != previous.direction() {
                defmt::trace!("fade {} -> {}", previous.direction(), self.fade.direction());
            }
            if self.fade.mask() != previous.mask() {
                defmt::debug!("fade target {} -> {}", previous.mask(), self.fade.mask());
            }
        }

        let [red, green, blue] = self.fade.levels();
        self.values.red = red;
        self.values.green = green;
        self.values.blue = blue;
        self.turn_on();
    }

    /// Restarts the fade cycle at `mask`, level 0, rising. No hardware write.
    pub fn set_fade_mask(&mut self, mask: FadeMask) {
        self.fade = FadeState::with_mask(mask);
    }

    /// Restarts the fade cycle from red. No hardware write.
    pub fn reset_fade(&mut self) {
        self.fade = FadeState::default();
    }

    /// Logical channel values.
    pub fn values(&self) -> ChannelValues {
        self.values
    }

    pub fn intensity(&self) -> i32 {
        self.intensity
    }

    pub fn max_intensity(&self) -> i32 {
        self.max_intensity
    }

    /// Position within the fade cycle.
    pub fn fade(&self) -> &FadeState {
        &self.fade
    }

    /// The red, green, blue and white outputs.
    pub fn channels(&self) -> (&R, &G, &B, &W) {
        (&self.red, &self.green, &self.blue, &self.white)
    }

    /// Mutable access to the outputs, e.g. to reconfigure the peripheral.
    pub fn channels_mut(&mut self) -> (&mut R, &mut G, &mut B, &mut W) {
        (&mut self.red, &mut self.green, &mut self.blue, &mut self.white)
    }

    /// Gives the four outputs back, leaving them as last written.
    pub fn release(self) -> (R, G, B, W) {
        (self.red, self.green, self.blue, self.white)
    }

    fn write(&mut self, channel: Channel, duty: i32) {
        match channel {
            Channel::Red => self.red.write_duty(duty),
            Channel::Green => self.green.write_duty(duty),
            Channel::Blue => self.blue.write_duty(duty),
            Channel::White => self.white.write_duty(duty),
        }
    }
}

/// Builder for [`RgbwStrip`].
///
/// Starts from the same defaults as [`RgbwStrip::create`] with full intensity.
/// The channel types are only fixed by [`build`](Self::build), so start from
/// [`StripBuilder::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripBuilder {
    intensity: i32,
    max_intensity: i32,
    white: i32,
    fade_mask: FadeMask,
}

impl StripBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            intensity: FULL_SCALE,
            max_intensity: DEFAULT_MAX_INTENSITY,
            white: DEFAULT_WHITE_VALUE,
            fade_mask: FadeMask::RED,
        }
    }

    /// Initial dimming factor (0-255).
    pub fn intensity(mut self, intensity: i32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Hardware output ceiling.
    pub fn max_intensity(mut self, max_intensity: i32) -> Self {
        self.max_intensity = max_intensity;
        self
    }

    /// Initial white value.
    pub fn white(mut self, white: i32) -> Self {
        self.white = white;
        self
    }

    /// Color the fade cycle starts with.
    pub fn fade_mask(mut self, mask: FadeMask) -> Self {
        self.fade_mask = mask;
        self
    }

    /// Builds the strip, configuring each channel as an output.
    pub fn build<R: PwmChannel, G: PwmChannel, B: PwmChannel, W: PwmChannel>(
        self,
        mut red: R,
        mut green: G,
        mut blue: B,
        mut white: W,
    ) -> RgbwStrip<R, G, B, W> {
        red.configure_output();
        green.configure_output();
        blue.configure_output();
        white.configure_output();

        RgbwStrip {
            red,
            green,
            blue,
            white,
            values: ChannelValues::new(0, 0, 0, self.white),
            intensity: self.intensity,
            max_intensity: self.max_intensity,
            fade: FadeState::with_mask(self.fade_mask),
        }
    }
}

impl Default for StripBuilder {
    fn default() -> Self {
        Self::new()
    }
}
