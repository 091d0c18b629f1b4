//! Playback control between frames.
//!
//! A bounded channel built on `critical-section` and `heapless::Deque`, safe
//! to send into from interrupts or another core. The renderer drains it
//! before every frame; this is the only point where a running scroll or
//! animation reacts to the outside world.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::brightness::Brightness;

/// Capacity of the control channel
pub const CONTROL_CHANNEL_SIZE: usize = 4;

/// Commands a supervisor can send to a running renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Stop the scroll or animation in progress
    Cancel,
    /// Replace the brightness ceiling
    SetBrightnessCeiling(Brightness),
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub PlaybackCommand);

/// Bounded playback command queue
pub struct ControlChannel {
    inner: Mutex<RefCell<Deque<PlaybackCommand, CONTROL_CHANNEL_SIZE>>>,
}

impl ControlChannel {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> ControlSender<'_> {
        ControlSender { channel: self }
    }

    pub const fn receiver(&self) -> ControlReceiver<'_> {
        ControlReceiver { channel: self }
    }

    fn try_send(&self, command: PlaybackCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Option<PlaybackCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl Default for ControlChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlSender<'a> {
    channel: &'a ControlChannel,
}

impl ControlSender<'_> {
    /// Queue a command
    ///
    /// Returns the command back if the channel is full.
    pub fn try_send(&self, command: PlaybackCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }

    /// Ask the renderer to stop what it is playing
    pub fn cancel(&self) -> Result<(), TrySendError> {
        self.try_send(PlaybackCommand::Cancel)
    }
}

/// Receiving half of a [`ControlChannel`]
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a> {
    channel: &'a ControlChannel,
}

impl ControlReceiver<'_> {
    pub fn try_receive(&self) -> Option<PlaybackCommand> {
        self.channel.try_receive()
    }

    /// Drain all pending commands
    pub fn drain(&self) -> PendingControl {
        let mut pending = PendingControl::default();
        while let Some(command) = self.try_receive() {
            match command {
                PlaybackCommand::Cancel => pending.cancel = true,
                PlaybackCommand::SetBrightnessCeiling(ceiling) => pending.ceiling = Some(ceiling),
            }
        }
        pending
    }
}

/// Side effects of draining the control channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingControl {
    /// A cancel was requested
    pub cancel: bool,
    /// Latest requested ceiling
    pub ceiling: Option<Brightness>,
}
