//! Panel intensity levels and the process-wide ceiling.

use core::fmt;

/// Highest intensity level the panel hardware understands
pub const MAX_LEVEL: u8 = 15;

/// Intensity of one panel, 0-15
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(MAX_LEVEL);

    /// Returns `None` when `level` is above 15
    pub const fn new(level: u8) -> Option<Self> {
        if level > MAX_LEVEL {
            return None;
        }
        Some(Self(level))
    }

    pub const fn level(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_LEVEL)
    }
}

/// Upper bound applied to every brightness request before it reaches hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessLimit {
    ceiling: Brightness,
}

impl BrightnessLimit {
    pub const fn new(ceiling: Brightness) -> Self {
        Self { ceiling }
    }

    pub const fn ceiling(self) -> Brightness {
        self.ceiling
    }

    /// Clamp a validated level against the ceiling
    pub const fn clamp(self, brightness: Brightness) -> Brightness {
        if brightness.0 > self.ceiling.0 {
            self.ceiling
        } else {
            brightness
        }
    }

    /// Validate a raw level, then clamp it
    ///
    /// Returns `None` for levels above 15; those are never clamped.
    pub const fn apply(self, level: u8) -> Option<Brightness> {
        match Brightness::new(level) {
            Some(brightness) => Some(self.clamp(brightness)),
            None => None,
        }
    }
}

impl Default for BrightnessLimit {
    fn default() -> Self {
        Self::new(Brightness::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_levels_above_hardware_range() {
        assert_eq!(Brightness::new(16), None);
        assert_eq!(Brightness::new(255), None);
        assert_eq!(Brightness::new(15), Some(Brightness::MAX));
    }

    #[test]
    fn clamps_to_ceiling() {
        let limit = BrightnessLimit::new(Brightness::new(2).unwrap());
        assert_eq!(limit.apply(0).unwrap().level(), 0);
        assert_eq!(limit.apply(2).unwrap().level(), 2);
        assert_eq!(limit.apply(3).unwrap().level(), 2);
        assert_eq!(limit.apply(15).unwrap().level(), 2);
        assert_eq!(limit.apply(16), None);
    }
}
