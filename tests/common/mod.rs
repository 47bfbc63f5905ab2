//! Shared test infrastructure for button-machine integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use button_machine::{
    ButtonConfig, ChannelId, Clock, Level, LevelError, LevelSource, Span32, Tick32,
};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock clock with controllable time advancement
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Advance time by the given number of ticks
    pub fn advance(&self, ticks: u32) {
        self.now.set(self.now.get().wrapping_add(ticks));
    }

    /// Jump to an absolute counter value
    pub fn set(&self, ticks: u32) {
        self.now.set(ticks);
    }
}

impl Clock<Tick32> for MockClock {
    fn now(&self) -> Tick32 {
        Tick32(self.now.get())
    }
}

// ============================================================================
// Mock Level Sources
// ============================================================================

/// Mock level source serving `N` channels with controllable levels,
/// injectable failure, and a count of how often the hardware was sampled
pub struct MockLevels<const N: usize> {
    levels: [Cell<Level>; N],
    fail: Cell<bool>,
    reads: Cell<usize>,
}

impl<const N: usize> MockLevels<N> {
    /// All channels start at the given resting level
    pub fn resting_at(level: Level) -> Self {
        Self {
            levels: core::array::from_fn(|_| Cell::new(level)),
            fail: Cell::new(false),
            reads: Cell::new(0),
        }
    }

    pub fn set(&self, channel: ChannelId, level: Level) {
        self.levels[channel.0 as usize - 1].set(level);
    }

    /// Make every subsequent read fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.fail.set(failing);
    }

    /// Number of level reads performed so far
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl<const N: usize> LevelSource for MockLevels<N> {
    fn level(&self, channel: ChannelId) -> Result<Level, LevelError> {
        self.reads.set(self.reads.get() + 1);
        if self.fail.get() {
            return Err(LevelError);
        }
        let ch = channel.0 as usize;
        if ch == 0 || ch > N {
            return Err(LevelError);
        }
        Ok(self.levels[ch - 1].get())
    }
}

/// Level source pinned to a single level, for override tests
pub struct FixedLevel(pub Level);

impl LevelSource for FixedLevel {
    fn level(&self, _channel: ChannelId) -> Result<Level, LevelError> {
        Ok(self.0)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Active-low wiring: resting level high, pressed level low
pub const REST: Level = Level::High;
pub const ACTIVE: Level = Level::Low;

/// Config for an active-low button with the given windows (in ticks)
pub fn active_low(debounce: u32, long_press: u32) -> ButtonConfig<'static, Span32> {
    ButtonConfig::new(REST, Span32(debounce), Span32(long_press))
}
