mod tests {
    use myrtio_eyes_composer::{
        Font, Frame, Glyph, ScrollFrames, ScrollLayout,
        fonts::TEXT,
        glyph::{compose, compose_row},
        scroll::frame_count,
    };

    const H: Glyph = Glyph([0x42, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00]);
    const I: Glyph = Glyph([0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00]);
    const GLYPHS: [(char, Glyph); 2] = [('H', H), ('I', I)];
    const FONT: Font<'static, char> = Font::new(&GLYPHS);

    fn scroll(message: &str, padding: u8, layout: ScrollLayout) -> Vec<Frame> {
        ScrollFrames::new(FONT, message, padding, layout).collect()
    }

    #[test]
    fn test_compose_identity() {
        for row in 0..=u8::MAX {
            assert_eq!(compose_row(row, row, 0), row);
            assert_eq!(compose_row(row, 0, 0), row);
        }
    }

    #[test]
    fn test_compose_continuity() {
        // one more column after shift 7 is the next glyph at shift 0
        let last = compose(&H, &I, 7);
        for row in 0..8 {
            let shifted = (last.row(row) << 1) | (I.row(row) & 0x01);
            assert_eq!(shifted, compose(&I, &H, 0).row(row));
        }
    }

    #[test]
    fn test_hi_frame_count() {
        let frames = scroll("HI", 2, ScrollLayout::Lockstep);
        assert_eq!(frames.len(), (2 + 2 + 2 - 1) * 8);
        assert_eq!(frames.len(), frame_count("HI", 2, ScrollLayout::Lockstep));
    }

    #[test]
    fn test_each_frame_moves_one_column() {
        let frames = scroll("HI", 2, ScrollLayout::Lockstep);
        for pair in frames.windows(2) {
            for row in 0..8 {
                let before = pair[0].right.row(row);
                let after = pair[1].right.row(row);
                // the 7 columns that stay on screen move left by one
                assert_eq!(before << 1, after & 0xFE);
            }
        }
    }

    #[test]
    fn test_single_character_round_trip() {
        let frames = scroll("H", 1, ScrollLayout::Lockstep);
        // padded: [blank, H, blank]; H is current from frame 8 on
        assert_eq!(frames.len(), 16);
        assert_eq!(frames[8].right, H);
        assert_eq!(frames[8].left, H);
        assert_eq!(frames[0].right, Glyph::BLANK);
    }

    #[test]
    fn test_unknown_characters_scroll_blank() {
        let frames = scroll("?", 0, ScrollLayout::Lockstep);
        assert!(frames.is_empty());

        let frames = scroll("H?", 0, ScrollLayout::Lockstep);
        assert_eq!(frames.len(), 8);
        assert_eq!(frames[0].right, H);
        assert_eq!(frames[7].right, compose(&H, &Glyph::BLANK, 7));
    }

    #[test]
    fn test_empty_message_still_scrolls_padding() {
        let frames = scroll("", 2, ScrollLayout::Lockstep);
        assert_eq!(frames.len(), 24);
        assert!(frames.iter().all(|frame| *frame == Frame::default()));
    }

    #[test]
    fn test_offset_layout_left_trails_right() {
        let lockstep = scroll("HI", 2, ScrollLayout::Lockstep);
        let offset = scroll("HI", 2, ScrollLayout::Offset { lag: 1 });
        assert_eq!(offset.len(), lockstep.len() + 8);

        // right panel leads with the same content as lockstep
        for (a, b) in lockstep.iter().zip(&offset) {
            assert_eq!(a.right, b.right);
        }
        // left panel shows what the right panel showed one glyph earlier
        for i in 8..offset.len() {
            assert_eq!(offset[i].left, offset[i - 8].right);
        }
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut frames = ScrollFrames::new(TEXT, "Boo!", 5, ScrollLayout::Lockstep);
        let total = frame_count("Boo!", 5, ScrollLayout::Lockstep);
        assert_eq!(frames.len(), total);
        frames.next();
        frames.next();
        assert_eq!(frames.len(), total - 2);
        assert_eq!(frames.count(), total - 2);
    }
}
