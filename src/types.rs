//! Core types for button classification.

use crate::level::{Level, LevelSource};
use crate::time::TickDuration;

/// A transient button event, meaningful only for the poll that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// No transition fired on this poll.
    None,

    /// The press was confirmed (debounce window passed, or no debounce).
    Pressed,

    /// The press lasted past the long-press threshold.
    LongPressed,

    /// Released before the long-press threshold.
    ShortReleased,

    /// Released after the long-press threshold.
    LongReleased,
}

/// The stable classification of a channel, valid until the next transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button at rest, or a press still inside the debounce window.
    Idle,

    /// Confirmed pressed, long-press threshold not yet reached.
    ShortPressed,

    /// Confirmed long-pressed, waiting for release.
    Holding,

    /// Channel disabled; no input is sampled and no events fire.
    Disabled,
}

/// The outcome of one poll: an event (transient) and a state (persistent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollResult {
    /// Transition that fired during this poll, if any.
    pub event: ButtonEvent,

    /// Stable classification after this poll.
    pub state: ButtonState,
}

/// Per-channel button parameters.
///
/// Owned by the caller and borrowed by the engine for the lifetime of the
/// channel registration. Durations are in the ticks of whatever clock the
/// engine was given.
pub struct ButtonConfig<'r, D: TickDuration> {
    /// Minimum time a level must hold steady before a press or release is
    /// confirmed. `ZERO` disables debounce filtering entirely: raw
    /// transitions are acted on the poll they are observed.
    pub debounce_time: D,

    /// Time a confirmed press must persist before it is classified long.
    pub long_press_time: D,

    /// The raw level observed while the button is at rest. `Level::High`
    /// for active-low wiring, `Level::Low` for active-high.
    pub normal_level: Level,

    /// Whether the channel starts out enabled when registered.
    pub enabled: bool,

    /// Dedicated level reader for this channel, overriding the bank's
    /// shared one.
    pub reader: Option<&'r dyn LevelSource>,
}

impl<'r, D: TickDuration> ButtonConfig<'r, D> {
    /// Creates an enabled configuration using the bank's shared level source.
    pub fn new(normal_level: Level, debounce_time: D, long_press_time: D) -> Self {
        Self {
            debounce_time,
            long_press_time,
            normal_level,
            enabled: true,
            reader: None,
        }
    }

    /// Attaches a dedicated level reader for this channel.
    pub fn with_reader(mut self, reader: &'r dyn LevelSource) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Marks the channel as initially disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
