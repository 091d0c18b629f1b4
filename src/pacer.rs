//! Frame pacing.
//!
//! The renderer never sleeps on its own; after every frame it asks a
//! [`Pacer`] to wait. [`DelayPacer`] blocks on an `embedded-hal` delay, which
//! is all a single-purpose device loop needs. [`FrameScheduler`] keeps
//! deadlines on the `embassy-time` monotonic clock so the time spent writing
//! frames does not stretch the animation.

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

/// Waits between frames
pub trait Pacer {
    /// Block for `duration` after the frame just written
    fn pause(&mut self, duration: Duration);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        P::pause(self, duration);
    }
}

/// Plain blocking sleep
#[derive(Debug)]
pub struct DelayPacer<D> {
    delay: D,
}

impl<D: DelayNs> DelayPacer<D> {
    pub const fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Pacer for DelayPacer<D> {
    fn pause(&mut self, duration: Duration) {
        let mut micros = duration.as_micros();
        while micros > 0 {
            let chunk = u32::try_from(micros).unwrap_or(u32::MAX);
            self.delay.delay_us(chunk);
            micros -= u64::from(chunk);
        }
    }
}

/// Result of scheduling one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Deadline-based pacing on the monotonic clock
///
/// Each pause ends at the previous deadline plus the requested duration,
/// not at "now" plus the duration, so bus time is absorbed. If we fall more
/// than two pauses behind, the backlog is dropped instead of rushing frames
/// out to catch up.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    next_frame: Option<Instant>,
}

impl FrameScheduler {
    pub const fn new() -> Self {
        Self { next_frame: None }
    }

    /// Forget the current deadline, the next pause starts from "now"
    pub fn reset(&mut self) {
        self.next_frame = None;
    }

    /// Compute the next deadline given the current time
    pub fn schedule(&mut self, now: Instant, duration: Duration) -> FrameResult {
        let mut base = self.next_frame.unwrap_or(now);

        let max_drift = Duration::from_ticks(duration.as_ticks().saturating_mul(2));
        if now > base + max_drift {
            base = now;
        }

        let next_frame = base + duration;
        self.next_frame = Some(next_frame);

        let sleep_duration = if next_frame > now {
            next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: next_frame,
            sleep_duration,
        }
    }
}

impl Pacer for FrameScheduler {
    fn pause(&mut self, duration: Duration) {
        let result = self.schedule(Instant::now(), duration);
        embassy_time::block_for(result.sleep_duration);
    }
}
