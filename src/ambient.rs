//! Optional ambient RGB light.
//!
//! Some builds put a colour LED behind the eyes. The renderer changes its
//! colour once per frame, picking from a palette. Three wirings are covered:
//! plain GPIO per channel, PWM per channel, and addressable LEDs through
//! `smart-leds`.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use smart_leds::SmartLedsWrite;

use crate::color::{Rgb, invert};

/// A light that can show one colour
pub trait AmbientLight {
    type Error;

    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error>;
}

impl<L: AmbientLight + ?Sized> AmbientLight for &mut L {
    type Error = L::Error;

    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error> {
        L::set_color(self, color)
    }
}

/// No ambient light fitted
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmbient;

impl AmbientLight for NoAmbient {
    type Error = Infallible;

    fn set_color(&mut self, _color: Rgb) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// How the LED's common pin is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wiring {
    /// Common pin to supply, a channel lights when its pin is low
    CommonAnode,
    /// Common pin to ground, a channel lights when its pin is high
    #[default]
    CommonCathode,
}

/// RGB LED on three plain GPIOs
///
/// Each channel is either fully on or off; any non-zero component turns it
/// on.
#[derive(Debug)]
pub struct RgbPins<P> {
    red: P,
    green: P,
    blue: P,
    wiring: Wiring,
}

impl<P: OutputPin> RgbPins<P> {
    pub const fn new(red: P, green: P, blue: P, wiring: Wiring) -> Self {
        Self {
            red,
            green,
            blue,
            wiring,
        }
    }

    pub fn release(self) -> (P, P, P) {
        (self.red, self.green, self.blue)
    }

    fn drive(pin: &mut P, on: bool, wiring: Wiring) -> Result<(), P::Error> {
        let high = match wiring {
            Wiring::CommonCathode => on,
            Wiring::CommonAnode => !on,
        };
        if high { pin.set_high() } else { pin.set_low() }
    }
}

impl<P: OutputPin> AmbientLight for RgbPins<P> {
    type Error = P::Error;

    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error> {
        Self::drive(&mut self.red, color.r != 0, self.wiring)?;
        Self::drive(&mut self.green, color.g != 0, self.wiring)?;
        Self::drive(&mut self.blue, color.b != 0, self.wiring)
    }
}

/// RGB LED on three PWM channels
#[derive(Debug)]
pub struct PwmRgb<P> {
    red: P,
    green: P,
    blue: P,
    wiring: Wiring,
}

impl<P: SetDutyCycle> PwmRgb<P> {
    pub const fn new(red: P, green: P, blue: P, wiring: Wiring) -> Self {
        Self {
            red,
            green,
            blue,
            wiring,
        }
    }

    pub fn release(self) -> (P, P, P) {
        (self.red, self.green, self.blue)
    }

    fn drive(channel: &mut P, value: u8) -> Result<(), P::Error> {
        channel.set_duty_cycle_fraction(u16::from(value), u16::from(u8::MAX))
    }
}

impl<P: SetDutyCycle> AmbientLight for PwmRgb<P> {
    type Error = P::Error;

    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error> {
        let color = match self.wiring {
            Wiring::CommonCathode => color,
            Wiring::CommonAnode => invert(color),
        };
        Self::drive(&mut self.red, color.r)?;
        Self::drive(&mut self.green, color.g)?;
        Self::drive(&mut self.blue, color.b)
    }
}

/// A strip of addressable LEDs all set to the same colour
#[derive(Debug)]
pub struct SmartLedAmbient<W> {
    writer: W,
    count: usize,
}

impl<W> SmartLedAmbient<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub const fn new(writer: W, count: usize) -> Self {
        Self { writer, count }
    }

    pub fn release(self) -> W {
        self.writer
    }
}

impl<W> AmbientLight for SmartLedAmbient<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    type Error = W::Error;

    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.writer.write(core::iter::repeat_n(color, self.count))
    }
}

/// Order in which palette colours are picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteOrder {
    /// Walk the palette and wrap around
    Sequential,
    /// Pseudo-random pick per frame, reproducible for a given seed
    Shuffled { seed: u64 },
}

impl Default for PaletteOrder {
    fn default() -> Self {
        Self::Shuffled { seed: DEFAULT_SEED }
    }
}

/// Changes the ambient light once per frame
#[derive(Debug)]
pub struct AmbientDriver<'a, L> {
    light: L,
    palette: &'a [Rgb],
    order: PaletteOrder,
    counter: u64,
}

/// Seed of [`PaletteOrder::default`]
pub const DEFAULT_SEED: u64 = 0x5eed_e7e5;

impl<'a, L: AmbientLight> AmbientDriver<'a, L> {
    pub const fn new(light: L, palette: &'a [Rgb], order: PaletteOrder) -> Self {
        Self {
            light,
            palette,
            order,
            counter: 0,
        }
    }

    /// Colour the next tick will show, `None` for an empty palette
    pub fn peek(&self) -> Option<Rgb> {
        let len = self.palette.len() as u64;
        if len == 0 {
            return None;
        }
        let index = match self.order {
            PaletteOrder::Sequential => self.counter % len,
            PaletteOrder::Shuffled { seed } => u64::from(hash(seed ^ self.counter)) % len,
        };
        usize::try_from(index)
            .ok()
            .and_then(|index| self.palette.get(index).copied())
    }

    /// Show the next palette colour
    ///
    /// Does nothing with an empty palette.
    pub fn tick(&mut self) -> Result<(), L::Error> {
        let Some(color) = self.peek() else {
            return Ok(());
        };
        self.counter = self.counter.wrapping_add(1);
        self.light.set_color(color)
    }

    pub fn light(&self) -> &L {
        &self.light
    }

    pub fn release(self) -> L {
        self.light
    }
}

/// SplitMix64 finalizer folded to 32 bits
#[inline]
const fn hash(x: u64) -> u32 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    #[allow(clippy::cast_possible_truncation)]
    {
        (z ^ (z >> 31)) as u32
    }
}
