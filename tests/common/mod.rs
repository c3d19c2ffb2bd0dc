//! Shared test infrastructure for strip-effects integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_effects::{Effect, Rgb8, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

pub type TestEffect<'a, 't> = Effect<'a, 't, TestInstant, MockTimeSource>;

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use strip_effects::{BLACK, BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors allowing each channel to differ by `tolerance`
pub fn colors_within(a: Rgb8, b: Rgb8, tolerance: u8) -> bool {
    a.red.abs_diff(b.red) <= tolerance
        && a.green.abs_diff(b.green) <= tolerance
        && a.blue.abs_diff(b.blue) <= tolerance
}

/// Advance the clock by one frame and animate, asserting a frame was drawn
pub fn step_frame(effect: &mut TestEffect<'_, '_>, timer: &MockTimeSource, frame_length: u64) {
    timer.advance(TestDuration(frame_length));
    assert!(effect.animate(), "frame was due but animate() returned false");
}

/// Indices of all LEDs that are not black
pub fn lit_leds(leds: &[Rgb8]) -> heapless::Vec<usize, 64> {
    let mut lit = heapless::Vec::new();
    for (i, led) in leds.iter().enumerate() {
        if *led != BLACK {
            let _ = lit.push(i);
        }
    }
    lit
}
