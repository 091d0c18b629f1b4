//! Glyphs, fonts and the column-shift compositor.
//!
//! A glyph is eight row bytes. Bit 7 of a row is the leftmost column, which
//! is the bit order both panel chips latch, so rows go to hardware untouched.

use core::borrow::Borrow;

/// Number of rows (and columns) of one panel
pub const PANEL_SIZE: usize = 8;

/// One 8x8 bitmap, one byte per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph(pub [u8; PANEL_SIZE]);

impl Glyph {
    /// All pixels off
    pub const BLANK: Self = Self([0; PANEL_SIZE]);

    pub const fn new(rows: [u8; PANEL_SIZE]) -> Self {
        Self(rows)
    }

    pub const fn rows(&self) -> &[u8; PANEL_SIZE] {
        &self.0
    }

    pub const fn row(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Returns whether the pixel at (`column`, `row`) is lit
    pub const fn is_lit(&self, column: usize, row: usize) -> bool {
        self.0[row] & (0x80 >> column) != 0
    }
}

/// What both panels show at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub left: Glyph,
    pub right: Glyph,
}

impl Frame {
    pub const fn new(left: Glyph, right: Glyph) -> Self {
        Self { left, right }
    }

    /// Same glyph on both panels
    pub const fn mirrored(glyph: Glyph) -> Self {
        Self::new(glyph, glyph)
    }
}

/// Compose one row of the view that is `shift` columns into `current`
///
/// The two rows are joined into a 16 column strip and the 8 columns starting
/// at `shift` are returned: the rightmost columns of `current` slide out to
/// the left while the leftmost columns of `next` slide in from the right.
/// `shift` must be in `0..8`; shift 0 is `current` unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn compose_row(current: u8, next: u8, shift: u8) -> u8 {
    debug_assert!(shift < 8);
    let strip = ((current as u16) << 8) | next as u16;
    ((strip << shift) >> 8) as u8
}

/// Compose a whole glyph, see [`compose_row`]
pub const fn compose(current: &Glyph, next: &Glyph, shift: u8) -> Glyph {
    let mut rows = [0u8; PANEL_SIZE];
    let mut i = 0;
    while i < PANEL_SIZE {
        rows[i] = compose_row(current.0[i], next.0[i], shift);
        i += 1;
    }
    Glyph(rows)
}

/// Immutable mapping from a key to a glyph
///
/// Text fonts are keyed by `char`, shape fonts by name. Lookups are linear;
/// fonts are a few dozen entries and live in flash.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a, K> {
    glyphs: &'a [(K, Glyph)],
}

/// Font keyed by character, used for scrolling text
pub type TextFont = Font<'static, char>;

/// Font keyed by name, used for eyes and icons
pub type ShapeFont = Font<'static, &'static str>;

impl<'a, K> Font<'a, K> {
    pub const fn new(glyphs: &'a [(K, Glyph)]) -> Self {
        Self { glyphs }
    }

    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Look up a glyph
    pub fn get<Q>(&self, key: &Q) -> Option<Glyph>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.glyphs
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, glyph)| *glyph)
    }

    /// Look up a glyph, falling back to [`Glyph::BLANK`]
    pub fn get_or_blank<Q>(&self, key: &Q) -> Glyph
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).unwrap_or(Glyph::BLANK)
    }

    /// Iterate over all keys
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.glyphs.iter().map(|(k, _)| k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Glyph = Glyph([0x18, 0x24, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00]);
    const B: Glyph = Glyph([0xFC, 0x42, 0x42, 0x7C, 0x42, 0x42, 0xFC, 0x00]);

    #[test]
    fn shift_zero_passes_current_through() {
        for row in 0..PANEL_SIZE {
            assert_eq!(compose_row(A.row(row), B.row(row), 0), A.row(row));
            assert_eq!(compose_row(A.row(row), A.row(row), 0), A.row(row));
        }
    }

    #[test]
    fn shift_moves_one_column_per_step() {
        assert_eq!(compose_row(0b1000_0001, 0b1000_0000, 1), 0b0000_0011);
        assert_eq!(compose_row(0b0000_0001, 0b0000_0000, 7), 0b1000_0000);
        assert_eq!(compose_row(0b0000_0000, 0b1111_1111, 7), 0b0111_1111);
    }

    #[test]
    fn shift_is_masked_to_eight_columns() {
        assert_eq!(compose_row(0xFF, 0x00, 4), 0xF0);
        assert_eq!(compose_row(0x00, 0xFF, 4), 0x0F);
        assert_eq!(compose_row(0xFF, 0xFF, 7), 0xFF);
    }

    #[test]
    fn pixel_addressing_matches_bit_order() {
        let glyph = Glyph([0x80, 0x01, 0, 0, 0, 0, 0, 0]);
        assert!(glyph.is_lit(0, 0));
        assert!(!glyph.is_lit(7, 0));
        assert!(glyph.is_lit(7, 1));
    }

    #[test]
    fn font_lookup_by_char_and_name() {
        const GLYPHS: &[(char, Glyph)] = &[('A', A), ('B', B)];
        let text = Font::new(GLYPHS);
        assert_eq!(text.get(&'B'), Some(B));
        assert_eq!(text.get(&'Z'), None);
        assert_eq!(text.get_or_blank(&'Z'), Glyph::BLANK);

        const SHAPES: &[(&str, Glyph)] = &[("open", A)];
        let shapes = Font::new(SHAPES);
        let name = heapless::String::<8>::try_from("open").unwrap();
        assert_eq!(shapes.get(name.as_str()), Some(A));
        assert_eq!(shapes.get("closed"), None);
    }
}
