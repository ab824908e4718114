//! Output channels of an RGBW strip and the hardware abstraction behind them.

use embedded_hal::pwm::SetDutyCycle;

/// One of the four light outputs of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    /// All channels in write order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::White];

    /// The channels taking part in the fade cycle, in mask bit order.
    pub const COLORS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// Trait for abstracting a single PWM output.
///
/// Implement this for whatever drives one channel of your strip (a timer
/// channel, an LEDC channel, a pin number plus an `analogWrite`-style call).
/// Writes are fire-and-forget: handle hardware errors internally.
pub trait PwmChannel {
    /// Puts the underlying pin into output mode.
    ///
    /// Called once per channel when the strip is constructed.
    fn configure_output(&mut self) {}

    /// Writes a duty cycle.
    ///
    /// The value is expected in `[0, ceiling]` for the ceiling configured on
    /// the strip, but is passed through unchecked.
    fn write_duty(&mut self, duty: i32);
}

impl<T: PwmChannel + ?Sized> PwmChannel for &mut T {
    fn configure_output(&mut self) {
        T::configure_output(self);
    }

    fn write_duty(&mut self, duty: i32) {
        T::write_duty(self, duty);
    }
}

/// [`PwmChannel`] adapter for any `embedded-hal` PWM output.
///
/// [`configure_output`](PwmChannel::configure_output) drives the output fully
/// off. Duty cycles are clamped to `[0, max_duty_cycle]`. Set the strip ceiling to
/// the peripheral's maximum duty cycle to use its full resolution. HAL errors
/// are dropped.
pub struct HalChannel<P: SetDutyCycle> {
    pwm: P,
}

impl<P: SetDutyCycle> HalChannel<P> {
    /// Wraps a HAL PWM output.
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Maximum duty cycle the wrapped output accepts.
    pub fn max_duty_cycle(&self) -> u16 {
        self.pwm.max_duty_cycle()
    }

    /// Returns the wrapped output.
    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> PwmChannel for HalChannel<P> {
    fn configure_output(&mut self) {
        let _ = self.pwm.set_duty_cycle_fully_off();
    }

    fn write_duty(&mut self, duty: i32) {
        let max = i32::from(self.pwm.max_duty_cycle());
        // clamp() bounds the value to [0, u16::MAX]
        let duty = duty.clamp(0, max) as u16;
        let _ = self.pwm.set_duty_cycle(duty);
    }
}

/// Logical channel values of a strip, before any scaling.
///
/// Nominally 0-255 each. Values are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelValues {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub white: i32,
}

impl ChannelValues {
    /// All channels at zero.
    pub const OFF: Self = Self::new(0, 0, 0, 0);

    /// Creates a set of channel values.
    #[inline]
    pub const fn new(red: i32, green: i32, blue: i32, white: i32) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Value of a single channel.
    pub fn get(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }
}
