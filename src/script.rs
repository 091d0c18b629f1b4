//! Animation scripts.
//!
//! An animation is an ordered list of keyframes. Each keyframe may swap the
//! glyph pair, may change brightness, and always holds for a delay. Scripts
//! come from a JSON document mapping names to keyframe arrays:
//!
//! ```json
//! { "blink": [ { "l": "open", "r": "open", "d": 0.5 },
//!              { "l": "closed", "r": "closed", "br": 3, "d": 0.1 } ] }
//! ```
//!
//! `l`/`r` name glyphs in a shape font, `br` is a brightness level (`bl` is
//! accepted as an older spelling), `d` is the delay in seconds. Unknown fields
//! are ignored.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use embassy_time::Duration;
use serde::Deserialize;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::Brightness;

/// Animations shipped with the crate, written against [`crate::fonts::EYES`]
pub const BUILTIN_ANIMATIONS: &[u8] = include_bytes!("../assets/eyes_ani.json");

/// Left and right glyph names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPair {
    pub left: String,
    pub right: String,
}

/// One step of an animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframe {
    /// Glyphs to show, `None` keeps the display as it is
    pub glyphs: Option<GlyphPair>,
    /// Brightness to apply before holding
    pub brightness: Option<Brightness>,
    /// How long to hold this keyframe
    pub delay: Duration,
}

/// Ordered keyframes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Animation {
    keyframes: Vec<Keyframe>,
}

impl Animation {
    pub fn new(keyframes: Vec<Keyframe>) -> Self {
        Self { keyframes }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Sum of all keyframe delays, saturating at [`Duration::MAX`]
    pub fn duration(&self) -> Duration {
        self.keyframes
            .iter()
            .fold(Duration::from_ticks(0), |total, keyframe| {
                total.checked_add(keyframe.delay).unwrap_or(Duration::MAX)
            })
    }
}

/// Named animations, read-only once loaded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimationSet {
    animations: BTreeMap<String, Animation>,
}

impl AnimationSet {
    pub const fn new() -> Self {
        Self {
            animations: BTreeMap::new(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(document: &[u8]) -> Result<Self, ScriptError> {
        let raw: BTreeMap<String, Vec<RawKeyframe>> =
            serde_json::from_slice(document).map_err(|err| ScriptError::Malformed {
                line: err.line(),
                column: err.column(),
            })?;

        let mut animations = BTreeMap::new();
        for (name, raw_keyframes) in raw {
            let keyframes = raw_keyframes
                .into_iter()
                .enumerate()
                .map(|(index, raw)| raw.validate(&name, index))
                .collect::<Result<Vec<_>, _>>()?;
            animations.insert(name, Animation::new(keyframes));
        }

        Ok(Self { animations })
    }

    /// Load a document, recovering from a missing or malformed one
    ///
    /// `None` stands for a document that could not be read. Missing and
    /// malformed documents give an empty set; a well-formed document with
    /// invalid keyframes is an error.
    pub fn load(document: Option<&[u8]>) -> Result<Self, ScriptError> {
        let Some(document) = document else {
            #[cfg(feature = "esp32-log")]
            println!("[AnimationSet.load] animation document not found, using empty set");
            return Ok(Self::new());
        };

        match Self::from_json(document) {
            #[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
            Err(err @ ScriptError::Malformed { .. }) => {
                #[cfg(feature = "esp32-log")]
                println!("[AnimationSet.load] {}, using empty set", err);
                Ok(Self::new())
            }
            result => result,
        }
    }

    /// The animations bundled with the crate
    pub fn builtin() -> Result<Self, ScriptError> {
        Self::from_json(BUILTIN_ANIMATIONS)
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, animation: Animation) -> Option<Animation> {
        self.animations.insert(name.into(), animation)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

/// Errors found while loading a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Not valid JSON, or not an object of keyframe arrays
    Malformed { line: usize, column: usize },
    /// A keyframe without `d`
    MissingDelay { animation: String, keyframe: usize },
    /// A negative or non-finite `d`
    InvalidDelay { animation: String, keyframe: usize },
    /// A brightness above 15
    BrightnessOutOfRange {
        animation: String,
        keyframe: usize,
        level: u32,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { line, column } => {
                write!(f, "malformed animation document at {line}:{column}")
            }
            Self::MissingDelay {
                animation,
                keyframe,
            } => write!(f, "keyframe {keyframe} of {animation:?} has no delay"),
            Self::InvalidDelay {
                animation,
                keyframe,
            } => write!(f, "keyframe {keyframe} of {animation:?} has an invalid delay"),
            Self::BrightnessOutOfRange {
                animation,
                keyframe,
                level,
            } => write!(
                f,
                "keyframe {keyframe} of {animation:?} has brightness {level} outside 0-15"
            ),
        }
    }
}

impl core::error::Error for ScriptError {}

/// Keyframe as written in the document
#[derive(Debug, Deserialize)]
struct RawKeyframe {
    l: Option<String>,
    r: Option<String>,
    br: Option<u32>,
    bl: Option<u32>,
    d: Option<f64>,
}

impl RawKeyframe {
    fn validate(self, animation: &str, keyframe: usize) -> Result<Keyframe, ScriptError> {
        let glyphs = match (self.l, self.r) {
            (Some(left), Some(right)) => Some(GlyphPair { left, right }),
            _ => None,
        };

        let brightness = match self.br.or(self.bl) {
            Some(level) => Some(
                u8::try_from(level)
                    .ok()
                    .and_then(Brightness::new)
                    .ok_or_else(|| ScriptError::BrightnessOutOfRange {
                        animation: animation.into(),
                        keyframe,
                        level,
                    })?,
            ),
            None => None,
        };

        let seconds = self.d.ok_or_else(|| ScriptError::MissingDelay {
            animation: animation.into(),
            keyframe,
        })?;
        let delay = seconds_to_duration(seconds).ok_or_else(|| ScriptError::InvalidDelay {
            animation: animation.into(),
            keyframe,
        })?;

        Ok(Keyframe {
            glyphs,
            brightness,
            delay,
        })
    }
}

/// Longest delay whose tick count fits the clock
const MAX_DELAY_MILLIS: u64 = u64::MAX / embassy_time::TICK_HZ;

/// Convert fractional seconds to a duration rounded to the millisecond
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn seconds_to_duration(seconds: f64) -> Option<Duration> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let millis = libm::round(seconds * 1000.0);
    if millis > MAX_DELAY_MILLIS as f64 {
        return None;
    }
    Some(Duration::from_millis(millis as u64))
}
