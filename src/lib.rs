#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonBank`**: drives up to `MAX_CHANNELS` independent button channels
//!   against a shared clock and level source
//! - **`ButtonMachine`**: classifies a single button; usable standalone when
//!   the caller reads the pin itself
//! - **`ButtonConfig`**: per-channel parameters: debounce window, long-press
//!   threshold, resting level, initial enable, optional dedicated reader
//! - **`Clock`**, **`TickInstant`**, **`TickDuration`**: traits to implement
//!   for your timing system; elapsed time is wrapping-safe
//! - **`Tick16`** / **`Tick32`**: ready-made free-running counter sample types
//! - **`LevelSource`**: trait to implement for your input hardware
//! - **`PollResult`**: one poll's outcome, a transient `ButtonEvent` plus a
//!   persistent `ButtonState`
//! - **`ChannelId`**: 1-based channel numbers
//!
//! Durations are in ticks of whatever clock you provide (conventionally
//! milliseconds). Poll each channel from your main loop or a periodic timer
//! tick; no call blocks and nothing allocates.

pub mod bank;
pub mod level;
pub mod machine;
pub mod table;
pub mod time;
pub mod types;

pub use bank::{BankError, ButtonBank, ChannelId};
pub use level::{Level, LevelError, LevelSource};
pub use machine::ButtonMachine;
pub use time::{Clock, Span16, Span32, Tick16, Tick32, TickDuration, TickInstant};
pub use types::{ButtonConfig, ButtonEvent, ButtonState, PollResult};
