mod tests {
    use myrtio_eyes_composer::{
        AmbientDriver, AnimationSet, Brightness, ControlChannel, ControlSender, Duration, Error,
        EyesConfig, Font, Glyph, Pacer, PaletteOrder, Panel, Playback, PlaybackCommand, Renderer,
        ScrollConfig, ScrollLayout,
        color::SPOOKY_PALETTE,
        fonts::EYES,
        mock::{InjectedFault, RecordingLight, RecordingPacer, RecordingTransport, TransportEvent},
    };

    const H: Glyph = Glyph([0x42, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00]);
    const I: Glyph = Glyph([0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00]);
    const GLYPHS: [(char, Glyph); 2] = [('H', H), ('I', I)];
    const FONT: Font<'static, char> = Font::new(&GLYPHS);

    const BLINK: &[u8] = br#"{
        "blink": [
            { "l": "open", "r": "open", "d": 0.5 },
            { "l": "closed", "r": "closed", "d": 0.1 },
            { "l": "open", "r": "open", "d": 0.5 }
        ]
    }"#;

    fn config() -> EyesConfig {
        EyesConfig {
            scroll: ScrollConfig {
                padding: 2,
                delay: Duration::from_millis(50),
                layout: ScrollLayout::Lockstep,
            },
            ..EyesConfig::default()
        }
    }

    fn renderer<'a>() -> Renderer<'a, RecordingTransport, RecordingPacer> {
        Renderer::new(RecordingTransport::new(), RecordingPacer::new(), &config()).unwrap()
    }

    /// Sends a command on its n-th pause
    struct CommandingPacer<'a> {
        sender: ControlSender<'a>,
        command: PlaybackCommand,
        at: usize,
        pauses: usize,
    }

    impl Pacer for CommandingPacer<'_> {
        fn pause(&mut self, _duration: Duration) {
            self.pauses += 1;
            if self.pauses == self.at {
                self.sender.try_send(self.command).unwrap();
            }
        }
    }

    #[test]
    fn test_initialization_applies_initial_brightness() {
        let renderer = renderer();
        let transport = renderer.display().transport();
        let level = Brightness::new(1).unwrap();

        assert_eq!(
            transport.events(),
            [
                TransportEvent::Initialize,
                TransportEvent::Brightness(Panel::Left, level),
                TransportEvent::Brightness(Panel::Right, level),
            ]
        );
    }

    #[test]
    fn test_scroll_hi() {
        let mut renderer = renderer();
        assert_eq!(renderer.scroll(FONT, "HI"), Ok(Playback::Completed));

        assert_eq!(renderer.display().transport().frames().count(), 40);
        let pauses = renderer.pacer().pauses();
        assert_eq!(pauses.len(), 40);
        assert!(pauses.iter().all(|pause| *pause == Duration::from_millis(50)));
    }

    #[test]
    fn test_blink_animation() {
        let set = AnimationSet::from_json(BLINK).unwrap();
        let mut renderer = renderer();

        assert_eq!(
            renderer.run_animation(&set, "blink", &EYES),
            Ok(Playback::Completed)
        );

        let frames: Vec<_> = renderer.display().transport().frames().copied().collect();
        assert_eq!(frames.len(), 3);
        let closed = EYES.get("closed").unwrap();
        assert_eq!(frames[1].left, closed);
        assert_eq!(frames[1].right, closed);
        assert_eq!(
            renderer.pacer().pauses(),
            [
                Duration::from_millis(500),
                Duration::from_millis(100),
                Duration::from_millis(500),
            ]
        );
    }

    #[test]
    fn test_missing_animation_document() {
        let set = AnimationSet::load(None).unwrap();
        let mut renderer = renderer();

        assert_eq!(
            renderer.run_animation(&set, "stareAndBlink", &EYES),
            Err(Error::AnimationNotFound)
        );
        assert_eq!(renderer.display().transport().frames().count(), 0);
        assert!(renderer.pacer().pauses().is_empty());
    }

    #[test]
    fn test_unknown_glyph_keeps_display_but_still_waits() {
        let document = br#"{ "odd": [ { "l": "open", "r": "nope", "br": 9, "d": 0.2 } ] }"#;
        let set = AnimationSet::from_json(document).unwrap();
        let mut renderer = renderer();

        assert_eq!(renderer.run_animation(&set, "odd", &EYES), Ok(Playback::Completed));
        let transport = renderer.display().transport();
        assert_eq!(transport.frames().count(), 0);
        // brightness still applies, clamped to the default ceiling
        assert_eq!(transport.last_brightness(Panel::Left), Brightness::new(2));
        assert_eq!(renderer.pacer().pauses(), [Duration::from_millis(200)]);
    }

    #[test]
    fn test_cancel_before_scroll() {
        let channel = ControlChannel::new();
        let mut renderer = renderer().with_control(channel.receiver());

        channel.sender().cancel().unwrap();
        assert_eq!(renderer.scroll(FONT, "HI"), Ok(Playback::Cancelled));
        assert_eq!(renderer.display().transport().frames().count(), 0);

        // the command is consumed
        assert_eq!(renderer.scroll(FONT, "HI"), Ok(Playback::Completed));
    }

    #[test]
    fn test_cancel_mid_animation() {
        let set = AnimationSet::from_json(BLINK).unwrap();
        let channel = ControlChannel::new();
        let pacer = CommandingPacer {
            sender: channel.sender(),
            command: PlaybackCommand::Cancel,
            at: 1,
            pauses: 0,
        };
        let mut renderer = Renderer::new(RecordingTransport::new(), pacer, &config())
            .unwrap()
            .with_control(channel.receiver());

        assert_eq!(
            renderer.run_animation(&set, "blink", &EYES),
            Ok(Playback::Cancelled)
        );
        assert_eq!(renderer.display().transport().frames().count(), 1);
        assert_eq!(renderer.pacer().pauses, 1);
    }

    #[test]
    fn test_ceiling_command_applies_between_frames() {
        let channel = ControlChannel::new();
        let mut renderer = renderer().with_control(channel.receiver());
        let ceiling = Brightness::new(0).unwrap();

        channel
            .sender()
            .try_send(PlaybackCommand::SetBrightnessCeiling(ceiling))
            .unwrap();
        assert_eq!(renderer.scroll(FONT, "I"), Ok(Playback::Completed));

        let display = renderer.display();
        assert_eq!(display.limit().ceiling(), ceiling);
        assert_eq!(display.brightness(Panel::Left), ceiling);
        assert_eq!(display.brightness(Panel::Right), ceiling);
    }

    #[test]
    fn test_full_channel_rejects_commands() {
        let channel = ControlChannel::new();
        let sender = channel.sender();
        for _ in 0..myrtio_eyes_composer::control::CONTROL_CHANNEL_SIZE {
            sender.cancel().unwrap();
        }
        assert!(sender.cancel().is_err());
        assert!(channel.receiver().drain().cancel);
        assert_eq!(channel.receiver().try_receive(), None);
    }

    #[test]
    fn test_ambient_ticks_once_per_frame() {
        let ambient = AmbientDriver::new(
            RecordingLight::new(),
            &SPOOKY_PALETTE,
            PaletteOrder::Sequential,
        );
        let mut renderer = renderer().with_ambient(ambient);

        assert_eq!(renderer.scroll(FONT, "HI"), Ok(Playback::Completed));
        let colors = renderer.ambient().unwrap().light().colors();
        assert_eq!(colors.len(), 40);
        let [first, second, third] = SPOOKY_PALETTE;
        assert_eq!(colors[..4], [first, second, third, first]);
    }

    #[test]
    fn test_transport_failure_is_surfaced() {
        // init plus two brightness writes succeed, the first frame fails
        let transport = RecordingTransport::new().fail_after(3);
        let mut renderer = Renderer::new(transport, RecordingPacer::new(), &config()).unwrap();

        assert_eq!(
            renderer.scroll(FONT, "HI"),
            Err(Error::Transport(InjectedFault))
        );
        assert!(renderer.pacer().pauses().is_empty());
    }

    #[test]
    fn test_hold_shows_then_waits() {
        let mut renderer = renderer();
        let heart = EYES.get("heart").unwrap();
        renderer.hold(&heart, &heart, Duration::from_secs(1)).unwrap();

        let transport = renderer.display().transport();
        assert_eq!(transport.frames().count(), 1);
        assert_eq!(renderer.pacer().pauses(), [Duration::from_secs(1)]);
    }
}
