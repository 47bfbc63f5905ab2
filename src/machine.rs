//! Single-channel button engine with debounce and long-press timing.
//!
//! Provides [`ButtonMachine`] which classifies one button's raw level samples
//! into events and states, handling debounce windows, long-press timing and
//! the transition table lookup. Level acquisition is left to the caller (or
//! to [`ButtonBank`](crate::ButtonBank), which wraps machines per channel).

use crate::level::Level;
use crate::table::{Node, TRANSITIONS, situation};
use crate::time::{Clock, TickDuration, TickInstant};
use crate::types::{ButtonConfig, ButtonEvent, ButtonState, PollResult};

/// Classifies one button through the debounce/long-press state machine.
///
/// The machine borrows its configuration and clock; the running status
/// (current node plus latched timer start instants) is the only thing it
/// owns. Each [`poll`](ButtonMachine::poll) costs at most two table lookups
/// and two clock reads, so it is safe to call from a tight main loop or a
/// periodic scheduler tick.
///
/// # Type Parameters
/// * `'a` - Lifetime of the configuration and clock references
/// * `I` - Tick instant type
/// * `C` - Clock implementation type
pub struct ButtonMachine<'a, I: TickInstant, C: Clock<I>> {
    config: &'a ButtonConfig<'a, I::Duration>,
    clock: &'a C,
    node: Node,
    debounce_started: Option<I>,
    long_press_started: Option<I>,
}

impl<'a, I: TickInstant, C: Clock<I>> ButtonMachine<'a, I, C> {
    /// Creates an idle machine for the given configuration and clock.
    pub fn new(config: &'a ButtonConfig<'a, I::Duration>, clock: &'a C) -> Self {
        Self {
            config,
            clock,
            node: Node::Idle,
            debounce_started: None,
            long_press_started: None,
        }
    }

    /// Advances the machine one poll with the given raw level sample.
    ///
    /// Derives the situation (pressed-now, timed-out) for the current node,
    /// consults the transition table, and runs the entered transient node's
    /// side effects before settling into its paired stable node. The
    /// returned event belongs to this poll only; the returned state persists
    /// until the next transition.
    pub fn poll(&mut self, level: Level) -> PollResult {
        let pressed = level != self.config.normal_level;
        let now = self.clock.now();
        let code = situation(pressed, self.timed_out(now));

        let mut next = TRANSITIONS[self.node.index()][code];

        // Zero debounce skips the pending nodes entirely: the raw transition
        // is confirmed on the poll it is observed.
        if self.config.debounce_time == I::Duration::ZERO {
            next = match next {
                Node::JustPressed => Node::PressedConfirmed,
                Node::JustShortReleased => Node::ShortReleasedConfirmed,
                Node::JustLongReleased => Node::LongReleasedConfirmed,
                other => other,
            };
        }

        let mut event = ButtonEvent::None;
        if next.is_transient() {
            event = self.enter(next, now);
            // Transient rows advance unconditionally; the situation code is
            // irrelevant for them.
            next = TRANSITIONS[next.index()][code];
        }

        self.node = next;
        PollResult {
            event,
            state: visible(next),
        }
    }

    /// Returns the machine to idle with cleared timers.
    pub fn reset(&mut self) {
        self.node = Node::Idle;
        self.debounce_started = None;
        self.long_press_started = None;
    }

    /// Returns the current stable classification.
    pub fn state(&self) -> ButtonState {
        visible(self.node)
    }

    /// Returns the borrowed configuration.
    pub fn config(&self) -> &'a ButtonConfig<'a, I::Duration> {
        self.config
    }

    /// Whether the timer relevant to the current node has elapsed.
    ///
    /// Only the debounce-watch nodes and `ShortPressed` run a timer; for
    /// every other node the bit is false and the table ignores it.
    fn timed_out(&self, now: I) -> bool {
        match self.node {
            Node::PressPending | Node::ShortReleasePending | Node::LongReleasePending => {
                match self.debounce_started {
                    Some(started) => now.ticks_since(started) >= self.config.debounce_time,
                    None => false,
                }
            }
            Node::ShortPressed => match self.long_press_started {
                Some(started) => now.ticks_since(started) >= self.config.long_press_time,
                None => false,
            },
            _ => false,
        }
    }

    /// Runs the entry side effect of a transient node, once.
    fn enter(&mut self, node: Node, now: I) -> ButtonEvent {
        match node {
            Node::JustPressed | Node::JustShortReleased | Node::JustLongReleased => {
                self.debounce_started = Some(now);
                ButtonEvent::None
            }
            Node::PressedConfirmed => {
                self.long_press_started = Some(now);
                ButtonEvent::Pressed
            }
            Node::LongPressedConfirmed => ButtonEvent::LongPressed,
            Node::ShortReleasedConfirmed => ButtonEvent::ShortReleased,
            Node::LongReleasedConfirmed => ButtonEvent::LongReleased,
            // Stable nodes have no entry side effects.
            _ => ButtonEvent::None,
        }
    }
}

/// Collapses an internal node to the externally visible state.
///
/// Pending nodes report the stable classification they would fall back to if
/// the debounce check fails, so callers never observe a raw table node.
fn visible(node: Node) -> ButtonState {
    match node {
        Node::Idle
        | Node::JustPressed
        | Node::PressPending
        | Node::ShortReleasedConfirmed
        | Node::LongReleasedConfirmed => ButtonState::Idle,
        Node::PressedConfirmed
        | Node::ShortPressed
        | Node::JustShortReleased
        | Node::ShortReleasePending => ButtonState::ShortPressed,
        Node::LongPressedConfirmed
        | Node::Holding
        | Node::JustLongReleased
        | Node::LongReleasePending => ButtonState::Holding,
    }
}
