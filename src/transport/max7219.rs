//! MAX7219 daisy chain on SPI.
//!
//! Each chip takes a 16-bit word (register, data). With two chips chained,
//! one chip-select frame carries two words; the first word shifted out lands
//! in the far chip. Every row write sends the row for both panels in the same
//! frame so they latch together.

use embedded_hal::spi::SpiDevice;

use super::{ChainOrder, Panel, PanelTransport};
use crate::{brightness::Brightness, glyph::Frame, glyph::PANEL_SIZE};

/// Register addresses
pub mod register {
    pub const NOOP: u8 = 0x00;
    pub const DIGIT0: u8 = 0x01;
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Number of chips on the chain
pub const CHAIN_LENGTH: usize = 2;

/// Bytes in one chip-select frame
pub const PACKET_SIZE: usize = 2 * CHAIN_LENGTH;

/// Register writes issued by [`Max7219Chain::initialize`], in order
///
/// Shutdown is entered first so the chip never shows half-configured state.
#[allow(clippy::cast_possible_truncation)]
pub const INIT_SEQUENCE: [(u8, u8); 5] = [
    (register::SHUTDOWN, 0),
    (register::DISPLAY_TEST, 0),
    (register::SCAN_LIMIT, (PANEL_SIZE - 1) as u8),
    (register::DECODE_MODE, 0),
    (register::SHUTDOWN, 1),
];

/// Chain configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Max7219Config {
    pub order: ChainOrder,
}

/// Build one frame addressing both chips
///
/// `left` and `right` are (register, data) words.
#[inline]
pub const fn build_packet(order: ChainOrder, left: (u8, u8), right: (u8, u8)) -> [u8; PACKET_SIZE] {
    let [first, second] = order.arrange(left, right);
    [first.0, first.1, second.0, second.1]
}

/// Build the same register write for both chips
#[inline]
pub const fn build_broadcast_packet(register: u8, data: u8) -> [u8; PACKET_SIZE] {
    [register, data, register, data]
}

/// Build a row write; `row` is 0-based
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn build_row_packet(order: ChainOrder, row: usize, left: u8, right: u8) -> [u8; PACKET_SIZE] {
    debug_assert!(row < PANEL_SIZE);
    let address = register::DIGIT0 + row as u8;
    build_packet(order, (address, left), (address, right))
}

/// Build an intensity write for one chip, the other chip gets a no-op
#[inline]
pub const fn build_intensity_packet(order: ChainOrder, panel: Panel, level: Brightness) -> [u8; PACKET_SIZE] {
    let write = (register::INTENSITY, level.level());
    let noop = (register::NOOP, 0);
    match panel {
        Panel::Left => build_packet(order, write, noop),
        Panel::Right => build_packet(order, noop, write),
    }
}

/// Two MAX7219 chips sharing one chip select
#[derive(Debug)]
pub struct Max7219Chain<SPI> {
    spi: SPI,
    config: Max7219Config,
}

impl<SPI> Max7219Chain<SPI>
where
    SPI: SpiDevice<u8>,
{
    /// Creates a new chain. Nothing is sent until [`PanelTransport::initialize`].
    pub fn new(spi: SPI, config: Max7219Config) -> Self {
        Self { spi, config }
    }

    pub fn config(&self) -> Max7219Config {
        self.config
    }

    /// Releases the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> PanelTransport for Max7219Chain<SPI>
where
    SPI: SpiDevice<u8>,
{
    type Error = SPI::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        for (register, data) in INIT_SEQUENCE {
            self.spi.write(&build_broadcast_packet(register, data))?;
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        for (row, (left, right)) in frame.left.rows().iter().zip(frame.right.rows()).enumerate() {
            let packet = build_row_packet(self.config.order, row, *left, *right);
            self.spi.write(&packet)?;
        }
        Ok(())
    }

    fn write_brightness(&mut self, panel: Panel, level: Brightness) -> Result<(), Self::Error> {
        let packet = build_intensity_packet(self.config.order, panel, level);
        self.spi.write(&packet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packets_follow_chain_order() {
        assert_eq!(
            build_row_packet(ChainOrder::RightFirst, 0, 0xAA, 0x55),
            [0x01, 0x55, 0x01, 0xAA]
        );
        assert_eq!(
            build_row_packet(ChainOrder::LeftFirst, 7, 0xAA, 0x55),
            [0x08, 0xAA, 0x08, 0x55]
        );
    }

    #[test]
    fn intensity_targets_one_chip() {
        let level = Brightness::new(9).unwrap();
        assert_eq!(
            build_intensity_packet(ChainOrder::RightFirst, Panel::Left, level),
            [register::NOOP, 0, register::INTENSITY, 9]
        );
        assert_eq!(
            build_intensity_packet(ChainOrder::RightFirst, Panel::Right, level),
            [register::INTENSITY, 9, register::NOOP, 0]
        );
        assert_eq!(
            build_intensity_packet(ChainOrder::LeftFirst, Panel::Left, level),
            [register::INTENSITY, 9, register::NOOP, 0]
        );
    }

    #[test]
    fn init_sequence_enables_all_rows_without_decode() {
        assert!(INIT_SEQUENCE.contains(&(register::SCAN_LIMIT, 7)));
        assert!(INIT_SEQUENCE.contains(&(register::DECODE_MODE, 0)));
        assert!(INIT_SEQUENCE.contains(&(register::DISPLAY_TEST, 0)));
        assert_eq!(INIT_SEQUENCE.last(), Some(&(register::SHUTDOWN, 1)));
    }
}
