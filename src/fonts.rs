//! Built-in glyph data.
//!
//! `TEXT` covers printable ASCII letters, digits and common punctuation drawn
//! 5x7 with a blank column on each side, so adjacent glyphs keep a gap while
//! scrolling. `EYES` holds the eye poses and icons the bundled animations use.

use crate::glyph::{Glyph, ShapeFont, TextFont};

/// Scrolling text font
pub const TEXT: TextFont = TextFont::new(TEXT_GLYPHS);

/// Eyes and icons font
pub const EYES: ShapeFont = ShapeFont::new(EYES_GLYPHS);

#[rustfmt::skip]
const TEXT_GLYPHS: &[(char, Glyph)] = &[
    (' ', Glyph([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00])),
    ('!', Glyph([0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00])),
    ('"', Glyph([0x28, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00])),
    ('#', Glyph([0x28, 0x28, 0x7C, 0x28, 0x7C, 0x28, 0x28, 0x00])),
    ('\'', Glyph([0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00])),
    ('(', Glyph([0x08, 0x10, 0x20, 0x20, 0x20, 0x10, 0x08, 0x00])),
    (')', Glyph([0x20, 0x10, 0x08, 0x08, 0x08, 0x10, 0x20, 0x00])),
    ('*', Glyph([0x00, 0x28, 0x10, 0x7C, 0x10, 0x28, 0x00, 0x00])),
    ('+', Glyph([0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00])),
    (',', Glyph([0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x20])),
    ('-', Glyph([0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00])),
    ('.', Glyph([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00])),
    ('/', Glyph([0x04, 0x04, 0x08, 0x10, 0x20, 0x40, 0x40, 0x00])),
    ('0', Glyph([0x38, 0x44, 0x4C, 0x54, 0x64, 0x44, 0x38, 0x00])),
    ('1', Glyph([0x10, 0x30, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00])),
    ('2', Glyph([0x38, 0x44, 0x04, 0x08, 0x10, 0x20, 0x7C, 0x00])),
    ('3', Glyph([0x7C, 0x08, 0x10, 0x08, 0x04, 0x44, 0x38, 0x00])),
    ('4', Glyph([0x08, 0x18, 0x28, 0x48, 0x7C, 0x08, 0x08, 0x00])),
    ('5', Glyph([0x7C, 0x40, 0x78, 0x04, 0x04, 0x44, 0x38, 0x00])),
    ('6', Glyph([0x18, 0x20, 0x40, 0x78, 0x44, 0x44, 0x38, 0x00])),
    ('7', Glyph([0x7C, 0x04, 0x08, 0x10, 0x20, 0x20, 0x20, 0x00])),
    ('8', Glyph([0x38, 0x44, 0x44, 0x38, 0x44, 0x44, 0x38, 0x00])),
    ('9', Glyph([0x38, 0x44, 0x44, 0x3C, 0x04, 0x08, 0x30, 0x00])),
    (':', Glyph([0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00])),
    (';', Glyph([0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20])),
    ('<', Glyph([0x08, 0x10, 0x20, 0x40, 0x20, 0x10, 0x08, 0x00])),
    ('=', Glyph([0x00, 0x00, 0x7C, 0x00, 0x7C, 0x00, 0x00, 0x00])),
    ('>', Glyph([0x20, 0x10, 0x08, 0x04, 0x08, 0x10, 0x20, 0x00])),
    ('?', Glyph([0x38, 0x44, 0x04, 0x08, 0x10, 0x00, 0x10, 0x00])),
    ('@', Glyph([0x38, 0x44, 0x04, 0x34, 0x54, 0x54, 0x38, 0x00])),
    ('A', Glyph([0x38, 0x44, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x00])),
    ('B', Glyph([0x78, 0x44, 0x44, 0x78, 0x44, 0x44, 0x78, 0x00])),
    ('C', Glyph([0x38, 0x44, 0x40, 0x40, 0x40, 0x44, 0x38, 0x00])),
    ('D', Glyph([0x70, 0x48, 0x44, 0x44, 0x44, 0x48, 0x70, 0x00])),
    ('E', Glyph([0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00])),
    ('F', Glyph([0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x40, 0x00])),
    ('G', Glyph([0x38, 0x44, 0x40, 0x5C, 0x44, 0x44, 0x3C, 0x00])),
    ('H', Glyph([0x44, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00])),
    ('I', Glyph([0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00])),
    ('J', Glyph([0x1C, 0x08, 0x08, 0x08, 0x08, 0x48, 0x30, 0x00])),
    ('K', Glyph([0x44, 0x48, 0x50, 0x60, 0x50, 0x48, 0x44, 0x00])),
    ('L', Glyph([0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7C, 0x00])),
    ('M', Glyph([0x44, 0x6C, 0x54, 0x54, 0x44, 0x44, 0x44, 0x00])),
    ('N', Glyph([0x44, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x44, 0x00])),
    ('O', Glyph([0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00])),
    ('P', Glyph([0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x40, 0x00])),
    ('Q', Glyph([0x38, 0x44, 0x44, 0x44, 0x54, 0x48, 0x34, 0x00])),
    ('R', Glyph([0x78, 0x44, 0x44, 0x78, 0x50, 0x48, 0x44, 0x00])),
    ('S', Glyph([0x3C, 0x40, 0x40, 0x38, 0x04, 0x04, 0x78, 0x00])),
    ('T', Glyph([0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00])),
    ('U', Glyph([0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00])),
    ('V', Glyph([0x44, 0x44, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00])),
    ('W', Glyph([0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00])),
    ('X', Glyph([0x44, 0x44, 0x28, 0x10, 0x28, 0x44, 0x44, 0x00])),
    ('Y', Glyph([0x44, 0x44, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00])),
    ('Z', Glyph([0x7C, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7C, 0x00])),
    ('a', Glyph([0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00])),
    ('b', Glyph([0x40, 0x40, 0x58, 0x64, 0x44, 0x44, 0x78, 0x00])),
    ('c', Glyph([0x00, 0x00, 0x38, 0x40, 0x40, 0x44, 0x38, 0x00])),
    ('d', Glyph([0x04, 0x04, 0x34, 0x4C, 0x44, 0x44, 0x3C, 0x00])),
    ('e', Glyph([0x00, 0x00, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00])),
    ('f', Glyph([0x18, 0x24, 0x20, 0x70, 0x20, 0x20, 0x20, 0x00])),
    ('g', Glyph([0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x38])),
    ('h', Glyph([0x40, 0x40, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00])),
    ('i', Glyph([0x10, 0x00, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00])),
    ('j', Glyph([0x08, 0x00, 0x18, 0x08, 0x08, 0x48, 0x30, 0x00])),
    ('k', Glyph([0x40, 0x40, 0x48, 0x50, 0x60, 0x50, 0x48, 0x00])),
    ('l', Glyph([0x30, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00])),
    ('m', Glyph([0x00, 0x00, 0x68, 0x54, 0x54, 0x44, 0x44, 0x00])),
    ('n', Glyph([0x00, 0x00, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00])),
    ('o', Glyph([0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00])),
    ('p', Glyph([0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40])),
    ('q', Glyph([0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x04])),
    ('r', Glyph([0x00, 0x00, 0x58, 0x64, 0x40, 0x40, 0x40, 0x00])),
    ('s', Glyph([0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00])),
    ('t', Glyph([0x20, 0x20, 0x70, 0x20, 0x20, 0x24, 0x18, 0x00])),
    ('u', Glyph([0x00, 0x00, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00])),
    ('v', Glyph([0x00, 0x00, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00])),
    ('w', Glyph([0x00, 0x00, 0x44, 0x44, 0x54, 0x54, 0x28, 0x00])),
    ('x', Glyph([0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00])),
    ('y', Glyph([0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38])),
    ('z', Glyph([0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00])),
];

#[rustfmt::skip]
const EYES_GLYPHS: &[(&str, Glyph)] = &[
    ("open", Glyph([0x3C, 0x7E, 0xFF, 0xE7, 0xE7, 0xFF, 0x7E, 0x3C])),
    ("left", Glyph([0x3C, 0x7E, 0xFF, 0x9F, 0x9F, 0xFF, 0x7E, 0x3C])),
    ("right", Glyph([0x3C, 0x7E, 0xFF, 0xF9, 0xF9, 0xFF, 0x7E, 0x3C])),
    ("up", Glyph([0x3C, 0x66, 0xE7, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C])),
    ("down", Glyph([0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xE7, 0x66, 0x3C])),
    ("upLeft", Glyph([0x3C, 0x1E, 0x9F, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C])),
    ("upRight", Glyph([0x3C, 0x78, 0xF9, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C])),
    ("downLeft", Glyph([0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0x9F, 0x1E, 0x3C])),
    ("downRight", Glyph([0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xF9, 0x78, 0x3C])),
    ("big", Glyph([0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E, 0x3C])),
    ("dot", Glyph([0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00])),
    ("small", Glyph([0x00, 0x00, 0x18, 0x3C, 0x3C, 0x18, 0x00, 0x00])),
    ("medium", Glyph([0x00, 0x3C, 0x7E, 0x66, 0x66, 0x7E, 0x3C, 0x00])),
    ("closed", Glyph([0x00, 0x00, 0x00, 0x00, 0xFF, 0x7E, 0x00, 0x00])),
    ("half", Glyph([0x00, 0x00, 0x00, 0xFF, 0xE7, 0xFF, 0x7E, 0x3C])),
    ("ghost1", Glyph([0x3C, 0x7E, 0xDB, 0xFF, 0xFF, 0xFF, 0xFF, 0xB6])),
    ("ghost2", Glyph([0x3C, 0x7E, 0xB5, 0xFF, 0xFF, 0xFF, 0xFF, 0x6D])),
    ("pumpkin", Glyph([0x08, 0x38, 0x7E, 0xFF, 0xA5, 0xFF, 0xBD, 0x7E])),
    ("heart", Glyph([0x00, 0x6C, 0xFE, 0xFE, 0x7C, 0x38, 0x10, 0x00])),
    ("tree1", Glyph([0x10, 0x38, 0x7C, 0x38, 0x7C, 0xFE, 0x10, 0x10])),
    ("tree2", Glyph([0x08, 0x1C, 0x3E, 0x1C, 0x3E, 0x7F, 0x08, 0x08])),
    ("santaHat", Glyph([0x06, 0x0B, 0x1C, 0x3C, 0x7C, 0xFF, 0xFF, 0x00])),
    ("santaHat2", Glyph([0x60, 0xD0, 0x38, 0x3C, 0x3E, 0xFF, 0xFF, 0x00])),
    ("arrow", Glyph([0x10, 0x38, 0x54, 0x92, 0x10, 0x10, 0x10, 0x10])),
    ("star5", Glyph([0x10, 0x10, 0xFE, 0x7C, 0x38, 0x6C, 0x44, 0x00])),
    ("bunny1", Glyph([0x44, 0x44, 0x44, 0x7C, 0xD6, 0x7C, 0x28, 0x00])),
    ("invader1", Glyph([0x24, 0x18, 0x3C, 0x66, 0xFF, 0xBD, 0xA5, 0x18])),
    ("invader2", Glyph([0x24, 0x99, 0xBD, 0xE7, 0xFF, 0x7E, 0x24, 0x42])),
];
