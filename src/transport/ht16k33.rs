//! Two HT16K33 backpacks on I2C.
//!
//! Each panel has its own bus address and display RAM, so a frame is two
//! RAM writes. The panels latch one after the other; at I2C fast-mode speed
//! the gap is well under one refresh.

use embedded_hal::i2c::I2c;

use super::{Panel, PanelTransport};
use crate::{brightness::Brightness, glyph::Glyph, glyph::Frame, glyph::PANEL_SIZE};

/// System setup: oscillator on
pub const CMD_OSCILLATOR_ON: u8 = 0x21;
/// Display setup: display on, blinking off
pub const CMD_DISPLAY_ON: u8 = 0x81;
/// Dimming set, low nibble is the level
pub const CMD_DIMMING: u8 = 0xE0;
/// First display RAM address
pub const RAM_START: u8 = 0x00;

/// RAM address byte plus two bytes per row
pub const RAM_PACKET_SIZE: usize = 1 + 2 * PANEL_SIZE;

pub const DEFAULT_LEFT_ADDRESS: u8 = 0x70;
pub const DEFAULT_RIGHT_ADDRESS: u8 = 0x71;

/// Which bit of a RAM byte drives the leftmost column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOrder {
    /// Bit 0 is leftmost (common 8x8 backpacks)
    #[default]
    LsbLeft,
    /// Bit 7 is leftmost, same as glyph rows
    MsbLeft,
}

/// Bus addresses and wiring of both backpacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ht16k33Config {
    pub left_address: u8,
    pub right_address: u8,
    pub columns: ColumnOrder,
}

impl Default for Ht16k33Config {
    fn default() -> Self {
        Self {
            left_address: DEFAULT_LEFT_ADDRESS,
            right_address: DEFAULT_RIGHT_ADDRESS,
            columns: ColumnOrder::LsbLeft,
        }
    }
}

/// Build a full display RAM write for one glyph
pub fn build_ram_packet(glyph: &Glyph, columns: ColumnOrder) -> [u8; RAM_PACKET_SIZE] {
    let mut packet = [0u8; RAM_PACKET_SIZE];
    packet[0] = RAM_START;
    for (i, row) in glyph.rows().iter().enumerate() {
        packet[1 + 2 * i] = match columns {
            ColumnOrder::LsbLeft => row.reverse_bits(),
            ColumnOrder::MsbLeft => *row,
        };
    }
    packet
}

/// Build the dimming command for a level
pub const fn build_dimming_command(level: Brightness) -> u8 {
    CMD_DIMMING | level.level()
}

/// Two HT16K33 chips on one bus
#[derive(Debug)]
pub struct Ht16k33Pair<I2C> {
    i2c: I2C,
    config: Ht16k33Config,
}

impl<I2C: I2c> Ht16k33Pair<I2C> {
    pub fn new(i2c: I2C, config: Ht16k33Config) -> Self {
        Self { i2c, config }
    }

    pub fn config(&self) -> Ht16k33Config {
        self.config
    }

    /// Releases the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    const fn address(&self, panel: Panel) -> u8 {
        match panel {
            Panel::Left => self.config.left_address,
            Panel::Right => self.config.right_address,
        }
    }
}

impl<I2C: I2c> PanelTransport for Ht16k33Pair<I2C> {
    type Error = I2C::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        for panel in Panel::ALL {
            let address = self.address(panel);
            self.i2c.write(address, &[CMD_OSCILLATOR_ON])?;
            self.i2c.write(address, &[CMD_DISPLAY_ON])?;
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let left = build_ram_packet(&frame.left, self.config.columns);
        let right = build_ram_packet(&frame.right, self.config.columns);
        self.i2c.write(self.config.left_address, &left)?;
        self.i2c.write(self.config.right_address, &right)
    }

    fn write_brightness(&mut self, panel: Panel, level: Brightness) -> Result<(), Self::Error> {
        let address = self.address(panel);
        self.i2c.write(address, &[build_dimming_command(level)])
    }
}
