//! Shared test infrastructure for rgbw-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgbw_strip::{PwmChannel, RgbwStrip};

// ============================================================================
// Mock Channel
// ============================================================================

/// Mock PWM output that records every duty cycle written to it
#[derive(Debug, Default)]
pub struct MockChannel {
    configured: bool,
    history: heapless::Vec<i32, 512>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn last_duty(&self) -> Option<i32> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[i32] {
        &self.history
    }
}

impl PwmChannel for MockChannel {
    fn configure_output(&mut self) {
        self.configured = true;
    }

    fn write_duty(&mut self, duty: i32) {
        assert!(self.history.push(duty).is_ok(), "mock channel history is full");
    }
}

pub type MockStrip = RgbwStrip<MockChannel, MockChannel, MockChannel, MockChannel>;

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Strip on fresh mock channels
pub fn mock_strip(initial_intensity: i32) -> MockStrip {
    RgbwStrip::create(
        initial_intensity,
        MockChannel::new(),
        MockChannel::new(),
        MockChannel::new(),
        MockChannel::new(),
    )
}

/// Last duty written to red, green, blue and white
pub fn last_duties(strip: &MockStrip) -> [Option<i32>; 4] {
    let (r, g, b, w) = strip.channels();
    [r.last_duty(), g.last_duty(), b.last_duty(), w.last_duty()]
}
