//! Dual-panel compositor.
//!
//! Owns the panel transport. The only way to obtain a [`DualPanel`] is
//! [`DualPanel::initialize`], so chips are always configured exactly once
//! before the first frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::{Brightness, BrightnessLimit};
use crate::error::Error;
use crate::glyph::{Frame, Glyph};
use crate::transport::{Panel, PanelTransport};

/// Brightness settings applied by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessConfig {
    /// Level written during initialization (clamped like any other request)
    pub initial: Brightness,
    /// Process-wide ceiling
    pub limit: BrightnessLimit,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL_BRIGHTNESS,
            limit: BrightnessLimit::new(DEFAULT_BRIGHTNESS_CEILING),
        }
    }
}

/// Intensity right after power-up
pub const DEFAULT_INITIAL_BRIGHTNESS: Brightness = match Brightness::new(1) {
    Some(level) => level,
    None => Brightness::MIN,
};

/// Default ceiling for every brightness request
pub const DEFAULT_BRIGHTNESS_CEILING: Brightness = match Brightness::new(2) {
    Some(level) => level,
    None => Brightness::MAX,
};

/// Two 8x8 panels driven as one display
#[derive(Debug)]
pub struct DualPanel<T> {
    transport: T,
    limit: BrightnessLimit,
    brightness: [Brightness; 2],
}

impl<T: PanelTransport> DualPanel<T> {
    /// Initialize the chips and apply the initial brightness
    pub fn initialize(mut transport: T, config: BrightnessConfig) -> Result<Self, Error<T::Error>> {
        transport.initialize().map_err(Error::Transport)?;

        let mut panel = Self {
            transport,
            limit: config.limit,
            brightness: [Brightness::MIN; 2],
        };
        panel.set_brightness(config.initial.level())?;

        Ok(panel)
    }

    /// Show a glyph on each panel
    ///
    /// Row *i* of both panels goes out in the same transaction where the
    /// transport supports it.
    pub fn show(&mut self, left: &Glyph, right: &Glyph) -> Result<(), Error<T::Error>> {
        self.show_frame(&Frame::new(*left, *right))
    }

    pub fn show_frame(&mut self, frame: &Frame) -> Result<(), Error<T::Error>> {
        self.transport.write_frame(frame).map_err(Error::Transport)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) -> Result<(), Error<T::Error>> {
        self.show_frame(&Frame::default())
    }

    /// Set both panels' brightness
    ///
    /// Levels above 15 are rejected; anything above the ceiling is clamped.
    /// Returns the level actually applied.
    pub fn set_brightness(&mut self, level: u8) -> Result<Brightness, Error<T::Error>> {
        let brightness = self.limit.apply(level).ok_or(Error::BrightnessOutOfRange(level))?;
        for panel in Panel::ALL {
            self.write_brightness(panel, brightness)?;
        }
        Ok(brightness)
    }

    /// Set one panel's brightness, see [`DualPanel::set_brightness`]
    pub fn set_panel_brightness(
        &mut self,
        panel: Panel,
        level: u8,
    ) -> Result<Brightness, Error<T::Error>> {
        let brightness = self.limit.apply(level).ok_or(Error::BrightnessOutOfRange(level))?;
        self.write_brightness(panel, brightness)?;
        Ok(brightness)
    }

    fn write_brightness(&mut self, panel: Panel, level: Brightness) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[DualPanel.write_brightness] {:?} -> {}", panel, level);
        self.transport
            .write_brightness(panel, level)
            .map_err(Error::Transport)?;
        self.brightness[Self::slot(panel)] = level;
        Ok(())
    }

    /// Last brightness successfully written to a panel
    pub fn brightness(&self, panel: Panel) -> Brightness {
        self.brightness[Self::slot(panel)]
    }

    pub fn limit(&self) -> BrightnessLimit {
        self.limit
    }

    /// Replace the ceiling
    ///
    /// Panels currently above the new ceiling are dimmed to it.
    pub fn set_limit(&mut self, limit: BrightnessLimit) -> Result<(), Error<T::Error>> {
        self.limit = limit;
        for panel in Panel::ALL {
            let current = self.brightness(panel);
            let clamped = limit.clamp(current);
            if clamped != current {
                self.write_brightness(panel, clamped)?;
            }
        }
        Ok(())
    }

    /// Access the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Releases the transport
    pub fn release(self) -> T {
        self.transport
    }

    const fn slot(panel: Panel) -> usize {
        match panel {
            Panel::Left => 0,
            Panel::Right => 1,
        }
    }
}
