//! Multi-channel front-end that owns the capability wiring.
//!
//! [`ButtonBank`] holds one optional [`ButtonMachine`] slot per channel,
//! reads the shared (or per-channel) level source on each poll, and routes
//! results back to the caller. Channels are fully independent; polling one
//! never touches another.

use crate::level::{Level, LevelSource};
use crate::machine::ButtonMachine;
use crate::time::{Clock, TickInstant};
use crate::types::{ButtonConfig, ButtonEvent, ButtonState, PollResult};

/// An identifier for a button channel.
///
/// Channel numbers are 1-based: `ChannelId(1)` is the first slot of a bank,
/// and `ChannelId(0)` is always invalid. This follows the convention of
/// keypad scan matrices and port expanders where channel 0 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

impl From<u8> for ChannelId {
    fn from(ch: u8) -> Self {
        ChannelId(ch)
    }
}

impl core::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur during bank operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankError {
    /// The channel number is outside `1..=MAX_CHANNELS`.
    ChannelOutOfRange {
        /// The offending channel number
        id: ChannelId,
        /// The bank's channel capacity
        max: usize,
    },

    /// The channel number is in range but was never configured.
    ChannelNotConfigured(ChannelId),

    /// The channel has no dedicated level reader and the bank was built
    /// without a shared one.
    MissingLevelSource(ChannelId),

    /// The level capability reported a failure while polling.
    LevelRead(ChannelId),
}

impl core::fmt::Display for BankError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BankError::ChannelOutOfRange { id, max } => {
                write!(f, "channel {} is outside the valid range 1..={}", id, max)
            }
            BankError::ChannelNotConfigured(id) => {
                write!(f, "channel {} has not been configured", id)
            }
            BankError::MissingLevelSource(id) => {
                write!(
                    f,
                    "channel {} has no level reader and no shared source is registered",
                    id
                )
            }
            BankError::LevelRead(id) => {
                write!(f, "raw level read failed for channel {}", id)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BankError {}

/// One registered channel: its machine plus the live enabled flag.
///
/// The flag lives here rather than in the caller's configuration because the
/// bank only borrows the configuration immutably; it is seeded from
/// `config.enabled` at registration and driven by
/// [`ButtonBank::set_enabled`] afterwards.
struct Channel<'a, I: TickInstant, C: Clock<I>> {
    machine: ButtonMachine<'a, I, C>,
    enabled: bool,
}

/// Manages a bank of independent button channels.
///
/// Registers the two acquisition capabilities (clock, level source) once and
/// drives one [`ButtonMachine`] per configured channel. All storage is
/// pre-sized by the `MAX_CHANNELS` parameter; nothing is allocated.
///
/// # Type Parameters
/// * `'a` - Lifetime of the clock, source and configuration references
/// * `I` - Tick instant type
/// * `C` - Clock implementation type
/// * `MAX_CHANNELS` - Number of channel slots in this bank
pub struct ButtonBank<'a, I: TickInstant, C: Clock<I>, const MAX_CHANNELS: usize> {
    channels: [Option<Channel<'a, I, C>>; MAX_CHANNELS],
    clock: &'a C,
    shared_source: Option<&'a dyn LevelSource>,
}

impl<'a, I: TickInstant, C: Clock<I>, const MAX_CHANNELS: usize>
    ButtonBank<'a, I, C, MAX_CHANNELS>
{
    /// Creates an empty bank without a shared level source.
    ///
    /// Every channel registered on such a bank must bring its own reader in
    /// its configuration; [`configure_channel`](ButtonBank::configure_channel)
    /// rejects one that does not.
    pub fn new(clock: &'a C) -> Self {
        Self {
            channels: core::array::from_fn(|_| None),
            clock,
            shared_source: None,
        }
    }

    /// Creates an empty bank with a shared level source keyed by channel.
    pub fn with_level_source(clock: &'a C, source: &'a dyn LevelSource) -> Self {
        Self {
            channels: core::array::from_fn(|_| None),
            clock,
            shared_source: Some(source),
        }
    }

    /// Registers (or re-registers) a channel with the given configuration.
    ///
    /// Stores the configuration by reference and resets the channel's
    /// running status to idle with cleared timers. Re-configuring an
    /// already-registered channel is allowed and performs the same reset.
    ///
    /// # Errors
    /// * `ChannelOutOfRange` - channel number not in `1..=MAX_CHANNELS`
    /// * `MissingLevelSource` - neither a per-channel nor a shared reader
    pub fn configure_channel(
        &mut self,
        id: ChannelId,
        config: &'a ButtonConfig<'a, I::Duration>,
    ) -> Result<(), BankError> {
        let slot = Self::slot(id)?;

        if config.reader.is_none() && self.shared_source.is_none() {
            return Err(BankError::MissingLevelSource(id));
        }

        self.channels[slot] = Some(Channel {
            machine: ButtonMachine::new(config, self.clock),
            enabled: config.enabled,
        });
        Ok(())
    }

    /// Enables or disables a channel.
    ///
    /// Both directions reset the channel's machine to idle so no stale
    /// debounce or long-press timer leaks into the next enabled session.
    /// While disabled, [`poll`](ButtonBank::poll) reports
    /// `(None, Disabled)` without sampling the hardware.
    pub fn set_enabled(&mut self, id: ChannelId, enabled: bool) -> Result<(), BankError> {
        let slot = Self::slot(id)?;
        let channel = self.channels[slot]
            .as_mut()
            .ok_or(BankError::ChannelNotConfigured(id))?;

        channel.enabled = enabled;
        channel.machine.reset();
        Ok(())
    }

    /// Polls one channel: reads its raw level, advances its machine, and
    /// returns the (event, state) outcome.
    ///
    /// A failed level read propagates as `LevelRead` and leaves the
    /// channel's running status exactly as it was.
    pub fn poll(&mut self, id: ChannelId) -> Result<PollResult, BankError> {
        let slot = Self::slot(id)?;
        let channel = self.channels[slot]
            .as_mut()
            .ok_or(BankError::ChannelNotConfigured(id))?;

        if !channel.enabled {
            return Ok(PollResult {
                event: ButtonEvent::None,
                state: ButtonState::Disabled,
            });
        }

        let level = Self::read_level(channel, self.shared_source, id)?;
        Ok(channel.machine.poll(level))
    }

    /// Returns the current stable classification of a channel.
    pub fn state(&self, id: ChannelId) -> Result<ButtonState, BankError> {
        let slot = Self::slot(id)?;
        let channel = self.channels[slot]
            .as_ref()
            .ok_or(BankError::ChannelNotConfigured(id))?;

        if !channel.enabled {
            return Ok(ButtonState::Disabled);
        }
        Ok(channel.machine.state())
    }

    /// Returns true if the channel is currently enabled.
    pub fn is_enabled(&self, id: ChannelId) -> Result<bool, BankError> {
        let slot = Self::slot(id)?;
        let channel = self.channels[slot]
            .as_ref()
            .ok_or(BankError::ChannelNotConfigured(id))?;
        Ok(channel.enabled)
    }

    /// Returns true if the bank contains a configured channel with this id.
    pub fn contains(&self, id: ChannelId) -> bool {
        match Self::slot(id) {
            Ok(slot) => self.channels[slot].is_some(),
            Err(_) => false,
        }
    }

    /// Returns the number of configured channels.
    pub fn len(&self) -> usize {
        self.channels.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if no channel is configured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates a 1-based channel number and maps it to a slot index.
    fn slot(id: ChannelId) -> Result<usize, BankError> {
        let ch = id.0 as usize;
        if ch == 0 || ch > MAX_CHANNELS {
            return Err(BankError::ChannelOutOfRange {
                id,
                max: MAX_CHANNELS,
            });
        }
        Ok(ch - 1)
    }

    /// Reads the raw level through the channel's dedicated reader, falling
    /// back to the bank's shared source.
    fn read_level(
        channel: &Channel<'a, I, C>,
        shared: Option<&'a dyn LevelSource>,
        id: ChannelId,
    ) -> Result<Level, BankError> {
        let source = channel
            .machine
            .config()
            .reader
            .or(shared)
            .ok_or(BankError::MissingLevelSource(id))?;
        source.level(id).map_err(|_| BankError::LevelRead(id))
    }
}
