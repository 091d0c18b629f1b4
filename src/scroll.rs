//! Horizontal text scrolling.
//!
//! A message is turned into a stream of glyphs with blank padding on both
//! ends. A window over two adjacent glyphs is composed at shifts 0..8, then
//! slides one glyph on, so the text moves one column per frame.
//!
//! The frames are produced lazily by [`ScrollFrames`]; pacing and output are
//! up to the caller (see [`crate::Renderer::scroll`]).

use core::iter::FusedIterator;
use core::str::Chars;

use embassy_time::Duration;

use crate::glyph::{Font, Frame, Glyph, PANEL_SIZE, compose};

/// Blank glyphs added before and after the message
pub const DEFAULT_PADDING: u8 = 5;

/// Pause after every scroll frame
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(40);

#[allow(clippy::cast_possible_truncation)]
const SHIFTS: u8 = PANEL_SIZE as u8;

/// How the two panels share the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLayout {
    /// Both panels show the same view
    #[default]
    Lockstep,
    /// The right panel leads and the left panel trails `lag` glyphs behind
    ///
    /// With `lag: 1` the panels act as one 16 column marquee.
    Offset { lag: u8 },
}

impl ScrollLayout {
    const fn lag(self) -> usize {
        match self {
            Self::Lockstep => 0,
            Self::Offset { lag } => lag as usize,
        }
    }
}

/// Configuration for text scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Blank glyphs on each side of the message
    pub padding: u8,
    /// Pause after every frame
    pub delay: Duration,
    pub layout: ScrollLayout,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            delay: DEFAULT_SCROLL_DELAY,
            layout: ScrollLayout::Lockstep,
        }
    }
}

/// Number of frames a message scrolls for
pub fn frame_count(message: &str, padding: u8, layout: ScrollLayout) -> usize {
    pair_count(message.chars().count(), usize::from(padding), layout.lag()) * PANEL_SIZE
}

fn pair_count(chars: usize, padding: usize, lag: usize) -> usize {
    (2 * padding + chars + lag).saturating_sub(1)
}

/// Padded message as glyphs
#[derive(Debug, Clone)]
struct GlyphStream<'a> {
    font: Font<'a, char>,
    chars: Chars<'a>,
    lead: usize,
    trail: usize,
}

impl Iterator for GlyphStream<'_> {
    type Item = Glyph;

    fn next(&mut self) -> Option<Glyph> {
        if self.lead > 0 {
            self.lead -= 1;
            return Some(Glyph::BLANK);
        }
        if let Some(c) = self.chars.next() {
            return Some(self.font.get_or_blank(&c));
        }
        if self.trail > 0 {
            self.trail -= 1;
            return Some(Glyph::BLANK);
        }
        None
    }
}

/// Two adjacent glyphs of a stream
#[derive(Debug, Clone)]
struct Window<'a> {
    stream: GlyphStream<'a>,
    current: Glyph,
    next: Glyph,
}

impl<'a> Window<'a> {
    fn new(mut stream: GlyphStream<'a>) -> Self {
        let current = stream.next().unwrap_or(Glyph::BLANK);
        let next = stream.next().unwrap_or(Glyph::BLANK);
        Self {
            stream,
            current,
            next,
        }
    }

    fn advance(&mut self) {
        self.current = self.next;
        self.next = self.stream.next().unwrap_or(Glyph::BLANK);
    }

    fn view(&self, shift: u8) -> Glyph {
        compose(&self.current, &self.next, shift)
    }
}

/// Frames of one scroll pass
///
/// Finite: yields `(glyphs - 1) * 8` frames where `glyphs` counts the
/// message plus padding (plus lag for [`ScrollLayout::Offset`]).
/// Characters missing from the font scroll as blanks.
#[derive(Debug, Clone)]
pub struct ScrollFrames<'a> {
    leading: Window<'a>,
    trailing: Option<Window<'a>>,
    shift: u8,
    pairs_left: usize,
}

impl<'a> ScrollFrames<'a> {
    pub fn new(font: Font<'a, char>, message: &'a str, padding: u8, layout: ScrollLayout) -> Self {
        let padding = usize::from(padding);
        let lag = layout.lag();
        let stream = |lead, trail| GlyphStream {
            font,
            chars: message.chars(),
            lead,
            trail,
        };

        let leading = Window::new(stream(padding, padding + lag));
        let trailing = match layout {
            ScrollLayout::Lockstep => None,
            ScrollLayout::Offset { .. } => Some(Window::new(stream(padding + lag, padding))),
        };

        Self {
            leading,
            trailing,
            shift: 0,
            pairs_left: pair_count(message.chars().count(), padding, lag),
        }
    }

    /// Frames for a [`ScrollConfig`]
    pub fn with_config(font: Font<'a, char>, message: &'a str, config: &ScrollConfig) -> Self {
        Self::new(font, message, config.padding, config.layout)
    }
}

impl Iterator for ScrollFrames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.pairs_left == 0 {
            return None;
        }

        let right = self.leading.view(self.shift);
        let left = self
            .trailing
            .as_ref()
            .map_or(right, |window| window.view(self.shift));

        self.shift += 1;
        if self.shift == SHIFTS {
            self.shift = 0;
            self.pairs_left -= 1;
            self.leading.advance();
            if let Some(window) = &mut self.trailing {
                window.advance();
            }
        }

        Some(Frame::new(left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.pairs_left * PANEL_SIZE).saturating_sub(usize::from(self.shift));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScrollFrames<'_> {}

impl FusedIterator for ScrollFrames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_count_includes_padding_and_lag() {
        assert_eq!(frame_count("HI", 2, ScrollLayout::Lockstep), 40);
        assert_eq!(frame_count("", 3, ScrollLayout::Lockstep), 40);
        assert_eq!(frame_count("", 0, ScrollLayout::Lockstep), 0);
        assert_eq!(frame_count("A", 0, ScrollLayout::Lockstep), 0);
        assert_eq!(frame_count("HI", 2, ScrollLayout::Offset { lag: 1 }), 48);
    }

    #[test]
    fn multibyte_characters_count_once() {
        assert_eq!(frame_count("§§", 1, ScrollLayout::Lockstep), 24);
    }
}
