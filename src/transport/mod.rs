//! Panel transports.
//!
//! A transport owns the bus to both panels and turns frames and intensity
//! levels into bus transactions. The compositor is generic over
//! [`PanelTransport`]; [`TransportSlot`] selects a concrete transport from
//! configuration at startup.

pub mod ht16k33;
pub mod max7219;

use core::fmt;

use embedded_hal::{i2c::I2c, spi::SpiDevice};

pub use ht16k33::{Ht16k33Config, Ht16k33Pair};
pub use max7219::{Max7219Chain, Max7219Config};

use crate::{brightness::Brightness, glyph::Frame};

/// One of the two panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Left,
    Right,
}

impl Panel {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

/// Order in which the panels sit on a daisy chain
///
/// Data shifted out first ends up in the panel farthest from the
/// microcontroller. This is a wiring fact and differs between builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainOrder {
    /// Right panel data is shifted out first
    #[default]
    RightFirst,
    /// Left panel data is shifted out first
    LeftFirst,
}

impl ChainOrder {
    /// Order a (left, right) pair into transmission order
    pub const fn arrange<T: Copy>(self, left: T, right: T) -> [T; 2] {
        match self {
            Self::RightFirst => [right, left],
            Self::LeftFirst => [left, right],
        }
    }
}

/// Abstract transport to a pair of 8x8 panels
///
/// Implement this trait to support different driver chips.
/// All calls block until the bus transaction completes.
pub trait PanelTransport {
    type Error;

    /// Put the chips into a known operating state
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Write one full frame to both panels
    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Write the intensity of a single panel
    fn write_brightness(&mut self, panel: Panel, level: Brightness) -> Result<(), Self::Error>;
}

impl<T: PanelTransport + ?Sized> PanelTransport for &mut T {
    type Error = T::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        T::initialize(self)
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        T::write_frame(self, frame)
    }

    fn write_brightness(&mut self, panel: Panel, level: Brightness) -> Result<(), Self::Error> {
        T::write_brightness(self, panel, level)
    }
}

/// Transport slot - enum containing all supported transports
///
/// Built once from configuration so the rest of the application does not
/// carry the bus type around.
pub enum TransportSlot<SPI, I2C> {
    /// Two MAX7219 chips daisy-chained on SPI
    Max7219(Max7219Chain<SPI>),
    /// Two HT16K33 backpacks on I2C
    Ht16k33(Ht16k33Pair<I2C>),
}

/// Error of a [`TransportSlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError<SpiErr, I2cErr> {
    Spi(SpiErr),
    I2c(I2cErr),
}

impl<SpiErr: fmt::Debug, I2cErr: fmt::Debug> fmt::Display for SlotError<SpiErr, I2cErr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(err) => write!(f, "SPI transport failed: {err:?}"),
            Self::I2c(err) => write!(f, "I2C transport failed: {err:?}"),
        }
    }
}

impl<SPI: SpiDevice<u8>, I2C: I2c> PanelTransport for TransportSlot<SPI, I2C> {
    type Error = SlotError<SPI::Error, I2C::Error>;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        match self {
            Self::Max7219(chain) => chain.initialize().map_err(SlotError::Spi),
            Self::Ht16k33(pair) => pair.initialize().map_err(SlotError::I2c),
        }
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        match self {
            Self::Max7219(chain) => chain.write_frame(frame).map_err(SlotError::Spi),
            Self::Ht16k33(pair) => pair.write_frame(frame).map_err(SlotError::I2c),
        }
    }

    fn write_brightness(&mut self, panel: Panel, level: Brightness) -> Result<(), Self::Error> {
        match self {
            Self::Max7219(chain) => chain.write_brightness(panel, level).map_err(SlotError::Spi),
            Self::Ht16k33(pair) => pair.write_brightness(panel, level).map_err(SlotError::I2c),
        }
    }
}
