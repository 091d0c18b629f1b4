//! No-hardware stand-ins used during bring-up and in tests.
//!
//! Each one records what it was asked to do instead of touching a bus.

use alloc::vec::Vec;
use core::convert::Infallible;

use embassy_time::Duration;

use crate::ambient::AmbientLight;
use crate::brightness::Brightness;
use crate::color::Rgb;
use crate::glyph::Frame;
use crate::pacer::Pacer;
use crate::transport::{Panel, PanelTransport};

/// Something a [`RecordingTransport`] was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEvent {
    Initialize,
    Frame(Frame),
    Brightness(Panel, Brightness),
}

/// Error injected by [`RecordingTransport::fail_after`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedFault;

/// Transport that keeps every call in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingTransport {
    events: Vec<TransportEvent>,
    fail_after: Option<usize>,
}

impl RecordingTransport {
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            fail_after: None,
        }
    }

    /// Fail every call once `count` events have been recorded
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    pub fn events(&self) -> &[TransportEvent] {
        &self.events
    }

    /// Frames written so far, in order
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.events.iter().filter_map(|event| match event {
            TransportEvent::Frame(frame) => Some(frame),
            _ => None,
        })
    }

    /// Latest brightness written to `panel`
    pub fn last_brightness(&self, panel: Panel) -> Option<Brightness> {
        self.events.iter().rev().find_map(|event| match event {
            TransportEvent::Brightness(p, level) if *p == panel => Some(*level),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: TransportEvent) -> Result<(), InjectedFault> {
        if self.fail_after.is_some_and(|limit| self.events.len() >= limit) {
            return Err(InjectedFault);
        }
        self.events.push(event);
        Ok(())
    }
}

impl PanelTransport for RecordingTransport {
    type Error = InjectedFault;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        self.record(TransportEvent::Initialize)
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.record(TransportEvent::Frame(*frame))
    }

    fn write_brightness(&mut self, panel: Panel, level: Brightness) -> Result<(), Self::Error> {
        self.record(TransportEvent::Brightness(panel, level))
    }
}

/// Pacer that returns immediately and remembers each pause
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl RecordingPacer {
    pub const fn new() -> Self {
        Self { pauses: Vec::new() }
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of all pauses, saturating at [`Duration::MAX`]
    pub fn total(&self) -> Duration {
        self.pauses
            .iter()
            .fold(Duration::from_ticks(0), |total, pause| {
                total.checked_add(*pause).unwrap_or(Duration::MAX)
            })
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Ambient light that remembers every colour
#[derive(Debug, Default, Clone)]
pub struct RecordingLight {
    colors: Vec<Rgb>,
}

impl RecordingLight {
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl AmbientLight for RecordingLight {
    type Error = Infallible;

    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.colors.push(color);
        Ok(())
    }
}
