//! Colors for the ambient backlight.

use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const RED: Rgb = rgb_from_u32(0xFF0000);
pub const GREEN: Rgb = rgb_from_u32(0x00FF00);
pub const BLUE: Rgb = rgb_from_u32(0x0000FF);
pub const MAGENTA: Rgb = rgb_from_u32(0xFF00FF);
pub const ORANGE: Rgb = rgb_from_u32(0xFF6000);
pub const BLACK: Rgb = rgb_from_u32(0x000000);

/// Palette the pumpkin backlight cycles through by default
pub const SPOOKY_PALETTE: [Rgb; 3] = [RED, GREEN, MAGENTA];

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Returns the color a common-anode LED needs to show `color`
pub const fn invert(color: Rgb) -> Rgb {
    Rgb {
        r: 255 - color.r,
        g: 255 - color.g,
        b: 255 - color.b,
    }
}
