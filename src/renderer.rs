use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::ambient::{AmbientDriver, AmbientLight, NoAmbient};
use crate::brightness::BrightnessLimit;
use crate::compositor::{BrightnessConfig, DualPanel};
use crate::control::ControlReceiver;
use crate::error::Error;
use crate::glyph::{Font, Frame, Glyph, ShapeFont};
use crate::pacer::Pacer;
use crate::script::{AnimationSet, Keyframe};
use crate::scroll::{ScrollConfig, ScrollFrames};
use crate::transport::PanelTransport;

/// Configuration for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EyesConfig {
    pub brightness: BrightnessConfig,
    pub scroll: ScrollConfig,
}

/// How a scroll or animation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Every frame was shown
    Completed,
    /// Stopped early by a cancel command
    Cancelled,
}

/// Eyes renderer - the main orchestrator
///
/// Owns the compositor and the pacer. Every frame is written and then
/// followed by a pause; nothing overlaps. An ambient light and a control
/// receiver can be attached with [`Renderer::with_ambient`] and
/// [`Renderer::with_control`].
pub struct Renderer<'a, T, P, L = NoAmbient> {
    display: DualPanel<T>,
    pacer: P,
    ambient: Option<AmbientDriver<'a, L>>,
    control: Option<ControlReceiver<'a>>,
    scroll: ScrollConfig,
}

impl<'a, T: PanelTransport, P: Pacer> Renderer<'a, T, P, NoAmbient> {
    /// Initialize the panels and create a renderer
    pub fn new(transport: T, pacer: P, config: &EyesConfig) -> Result<Self, Error<T::Error>> {
        let display = DualPanel::initialize(transport, config.brightness)?;
        Ok(Self::from_display(display, pacer, config.scroll))
    }

    /// Create a renderer around an already initialized compositor
    pub fn from_display(display: DualPanel<T>, pacer: P, scroll: ScrollConfig) -> Self {
        Self {
            display,
            pacer,
            ambient: None,
            control: None,
            scroll,
        }
    }

    /// Attach an ambient light, ticked once per frame
    pub fn with_ambient<L: AmbientLight>(
        self,
        ambient: AmbientDriver<'a, L>,
    ) -> Renderer<'a, T, P, L> {
        Renderer {
            display: self.display,
            pacer: self.pacer,
            ambient: Some(ambient),
            control: self.control,
            scroll: self.scroll,
        }
    }
}

impl<'a, T: PanelTransport, P: Pacer, L: AmbientLight> Renderer<'a, T, P, L> {
    /// Attach a control receiver, drained before every frame
    #[must_use]
    pub fn with_control(mut self, control: ControlReceiver<'a>) -> Self {
        self.control = Some(control);
        self
    }

    /// Show a glyph pair and return immediately
    pub fn show(&mut self, left: &Glyph, right: &Glyph) -> Result<(), Error<T::Error, L::Error>> {
        self.display.show(left, right).map_err(Error::widen)
    }

    /// Show a glyph pair and hold it
    pub fn hold(
        &mut self,
        left: &Glyph,
        right: &Glyph,
        duration: Duration,
    ) -> Result<(), Error<T::Error, L::Error>> {
        self.tick_ambient()?;
        self.show(left, right)?;
        self.pacer.pause(duration);
        Ok(())
    }

    /// Set both panels' brightness, clamped to the ceiling
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error<T::Error, L::Error>> {
        self.display
            .set_brightness(level)
            .map(|_| ())
            .map_err(Error::widen)
    }

    /// Scroll a message once with the configured padding, delay and layout
    pub fn scroll(
        &mut self,
        font: Font<'_, char>,
        message: &str,
    ) -> Result<Playback, Error<T::Error, L::Error>> {
        let config = self.scroll;
        self.scroll_with(font, message, &config)
    }

    /// Scroll a message once with explicit settings
    pub fn scroll_with(
        &mut self,
        font: Font<'_, char>,
        message: &str,
        config: &ScrollConfig,
    ) -> Result<Playback, Error<T::Error, L::Error>> {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.scroll] {:?}", message);

        for frame in ScrollFrames::with_config(font, message, config) {
            if self.poll_control()? {
                return Ok(Playback::Cancelled);
            }
            self.tick_ambient()?;
            self.show_frame(&frame)?;
            self.pacer.pause(config.delay);
        }

        Ok(Playback::Completed)
    }

    /// Play a named animation from `set` using glyphs from `font`
    pub fn run_animation(
        &mut self,
        set: &AnimationSet,
        name: &str,
        font: &ShapeFont,
    ) -> Result<Playback, Error<T::Error, L::Error>> {
        let Some(animation) = set.get(name) else {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer.run_animation] unknown animation {:?}", name);
            return Err(Error::AnimationNotFound);
        };

        #[cfg(feature = "esp32-log")]
        println!("[Renderer.run_animation] {}", name);

        for keyframe in animation.keyframes() {
            if self.poll_control()? {
                return Ok(Playback::Cancelled);
            }
            self.play_keyframe(keyframe, font)?;
        }

        Ok(Playback::Completed)
    }

    fn play_keyframe(
        &mut self,
        keyframe: &Keyframe,
        font: &ShapeFont,
    ) -> Result<(), Error<T::Error, L::Error>> {
        self.tick_ambient()?;

        if let Some(glyphs) = &keyframe.glyphs {
            match (font.get(glyphs.left.as_str()), font.get(glyphs.right.as_str())) {
                (Some(left), Some(right)) => self.show(&left, &right)?,
                _ => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[Renderer.play_keyframe] glyph {:?}/{:?} not in font, keeping display",
                        glyphs.left, glyphs.right
                    );
                }
            }
        }

        if let Some(brightness) = keyframe.brightness {
            self.set_brightness(brightness.level())?;
        }

        self.pacer.pause(keyframe.delay);
        Ok(())
    }

    fn show_frame(&mut self, frame: &Frame) -> Result<(), Error<T::Error, L::Error>> {
        self.display.show_frame(frame).map_err(Error::widen)
    }

    fn tick_ambient(&mut self) -> Result<(), Error<T::Error, L::Error>> {
        match &mut self.ambient {
            Some(ambient) => ambient.tick().map_err(Error::Ambient),
            None => Ok(()),
        }
    }

    /// Apply pending control commands
    ///
    /// Returns whether playback should stop.
    fn poll_control(&mut self) -> Result<bool, Error<T::Error, L::Error>> {
        let Some(control) = &self.control else {
            return Ok(false);
        };
        let pending = control.drain();

        if let Some(ceiling) = pending.ceiling {
            self.display
                .set_limit(BrightnessLimit::new(ceiling))
                .map_err(Error::widen)?;
        }

        #[cfg(feature = "esp32-log")]
        if pending.cancel {
            println!("[Renderer.poll_control] playback cancelled");
        }
        Ok(pending.cancel)
    }

    /// Access the compositor
    pub fn display(&self) -> &DualPanel<T> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DualPanel<T> {
        &mut self.display
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn ambient(&self) -> Option<&AmbientDriver<'a, L>> {
        self.ambient.as_ref()
    }

    pub fn scroll_config(&self) -> &ScrollConfig {
        &self.scroll
    }

    /// Release the compositor and the pacer
    pub fn release(self) -> (DualPanel<T>, P) {
        (self.display, self.pacer)
    }
}
