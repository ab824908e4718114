//! The built-in fade cycle.
//!
//! The cycle walks a 3-bit color mask through 1..=7 (red, green, yellow, blue,
//! magenta, cyan, white), fading each color in over eight steps and out over
//! eight more. Brightness follows an exponential ramp, `(1 << level) - 1`, so a
//! full step sequence reads 0, 1, 3, 7, 15, 31, 63, 127, 255.
//!
//! [`FadeState`] is plain data owned by each strip, so independent strips
//! animate independently.

use crate::channel::Channel;

/// Highest fade level, where the ramp reaches 255.
pub const MAX_FADE_LEVEL: u8 = 8;

/// Lowest fade level, where every channel is dark.
pub const MIN_FADE_LEVEL: u8 = 0;

/// Number of `advance` calls spent on each mask (8 rising + 8 falling).
pub const STEPS_PER_COLOR: usize = 2 * MAX_FADE_LEVEL as usize;

/// Fade state errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeError {
    /// Mask outside 1..=7. Black (0) is never part of the cycle.
    InvalidMask(u8),
}

impl core::fmt::Display for FadeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FadeError::InvalidMask(mask) => {
                write!(f, "fade mask {} is outside 1..=7", mask)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FadeError {}

/// Selects which of red (bit 0), green (bit 1) and blue (bit 2) the cycle is
/// currently fading.
///
/// Always in 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeMask(u8);

impl FadeMask {
    pub const RED: Self = Self(0b001);
    pub const GREEN: Self = Self(0b010);
    pub const YELLOW: Self = Self(0b011);
    pub const BLUE: Self = Self(0b100);
    pub const MAGENTA: Self = Self(0b101);
    pub const CYAN: Self = Self(0b110);
    pub const WHITE: Self = Self(0b111);

    /// Creates a mask, rejecting 0 and anything above 7.
    pub const fn new(bits: u8) -> Result<Self, FadeError> {
        match bits {
            1..=7 => Ok(Self(bits)),
            _ => Err(FadeError::InvalidMask(bits)),
        }
    }

    /// Raw mask bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The following mask in the cycle, wrapping from 7 back to 1.
    #[inline]
    pub const fn next(self) -> Self {
        if self.0 >= Self::WHITE.0 {
            Self::RED
        } else {
            Self(self.0 + 1)
        }
    }

    /// Whether `channel` is lit by this mask. White never is.
    pub fn contains(self, channel: Channel) -> bool {
        let bit = match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::White => return false,
        };
        self.0 & (1 << bit) != 0
    }
}

impl Default for FadeMask {
    fn default() -> Self {
        Self::RED
    }
}

impl TryFrom<u8> for FadeMask {
    type Error = FadeError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

/// Direction the fade level is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeDirection {
    /// Fading in, towards level 8.
    #[default]
    Rising,
    /// Fading out, towards level 0.
    Falling,
}

/// Position within the fade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeState {
    mask: FadeMask,
    level: u8,
    direction: FadeDirection,
}

impl FadeState {
    /// Start of the cycle for `mask`: level 0, rising.
    pub const fn with_mask(mask: FadeMask) -> Self {
        Self {
            mask,
            level: MIN_FADE_LEVEL,
            direction: FadeDirection::Rising,
        }
    }

    /// Moves one step through the cycle.
    ///
    /// Rising: the level goes up and flips to falling at 8. Falling: the
    /// level goes down; at 0 the mask moves on and the direction flips back
    /// to rising.
    pub fn advance(&mut self) {
        match self.direction {
            FadeDirection::Rising => {
                self.level = (self.level + 1).min(MAX_FADE_LEVEL);
                if self.level >= MAX_FADE_LEVEL {
                    self.direction = FadeDirection::Falling;
                }
            }
            FadeDirection::Falling => {
                self.level = self.level.saturating_sub(1);
                if self.level <= MIN_FADE_LEVEL {
                    self.mask = self.mask.next();
                    self.direction = FadeDirection::Rising;
                }
            }
        }
    }

    /// Ramp value for the current level: `(1 << level) - 1`.
    #[inline]
    pub const fn ramp(&self) -> i32 {
        (1 << self.level) - 1
    }

    /// Red, green and blue values for the current position.
    pub fn levels(&self) -> [i32; 3] {
        let ramp = self.ramp();
        Channel::COLORS.map(|channel| if self.mask.contains(channel) { ramp } else { 0 })
    }

    #[inline]
    pub const fn mask(&self) -> FadeMask {
        self.mask
    }

    #[inline]
    pub const fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub const fn direction(&self) -> FadeDirection {
        self.direction
    }
}
