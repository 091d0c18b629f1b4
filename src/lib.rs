#![no_std]

extern crate alloc;

pub mod ambient;
pub mod brightness;
pub mod color;
pub mod compositor;
pub mod control;
pub mod error;
pub mod fonts;
pub mod glyph;
pub mod mock;
pub mod pacer;
pub mod renderer;
pub mod script;
pub mod scroll;
pub mod transport;

pub use ambient::{
    AmbientDriver, AmbientLight, NoAmbient, PaletteOrder, PwmRgb, RgbPins, SmartLedAmbient, Wiring,
};
pub use brightness::{Brightness, BrightnessLimit};
pub use color::Rgb;
pub use compositor::{BrightnessConfig, DualPanel};
pub use control::{ControlChannel, ControlReceiver, ControlSender, PlaybackCommand};
pub use error::Error;
pub use glyph::{Font, Frame, Glyph, ShapeFont, TextFont};
pub use pacer::{DelayPacer, FrameScheduler, Pacer};
pub use renderer::{EyesConfig, Playback, Renderer};
pub use script::{Animation, AnimationSet, Keyframe, ScriptError};
pub use scroll::{ScrollConfig, ScrollFrames, ScrollLayout};
pub use transport::{ChainOrder, Panel, PanelTransport, TransportSlot};

pub use embassy_time::{Duration, Instant};
