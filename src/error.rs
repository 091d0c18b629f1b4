//! Renderer errors.

use core::convert::Infallible;
use core::fmt;

/// Errors surfaced by the compositor and renderer
///
/// Generic over the panel transport error and the ambient light error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<TransportErr, AmbientErr = Infallible> {
    /// Panel bus transaction failed
    Transport(TransportErr),
    /// Ambient light write failed
    Ambient(AmbientErr),
    /// Brightness level above 15
    BrightnessOutOfRange(u8),
    /// No animation with the requested name in the loaded set
    AnimationNotFound,
}

impl<TransportErr> Error<TransportErr, Infallible> {
    /// Re-type a compositor error for a renderer with an ambient light
    pub fn widen<AmbientErr>(self) -> Error<TransportErr, AmbientErr> {
        match self {
            Self::Transport(err) => Error::Transport(err),
            Self::Ambient(never) => match never {},
            Self::BrightnessOutOfRange(level) => Error::BrightnessOutOfRange(level),
            Self::AnimationNotFound => Error::AnimationNotFound,
        }
    }
}

impl<TransportErr: fmt::Debug, AmbientErr: fmt::Debug> fmt::Display
    for Error<TransportErr, AmbientErr>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "panel transport failed: {err:?}"),
            Self::Ambient(err) => write!(f, "ambient light failed: {err:?}"),
            Self::BrightnessOutOfRange(level) => {
                write!(f, "brightness {level} is outside 0-15")
            }
            Self::AnimationNotFound => f.write_str("animation not found"),
        }
    }
}

impl<TransportErr: fmt::Debug, AmbientErr: fmt::Debug> core::error::Error
    for Error<TransportErr, AmbientErr>
{
}
