// SPDX-License-Identifier: MPL-2.0
//! Tick-driven animation machinery shared by all loading indicators.
//!
//! Every indicator follows the same pattern: a periodic tick advances a
//! single scalar of animation state while the indicator is animating, and
//! leaves it untouched (frozen) while it is not. The circular indicators
//! advance a rotation angle directly on each [`Message::Tick`]; the bar
//! re-triggers a self-reversing eased [`Sweep`] whose in-flight motion is
//! driven by the finer-grained [`Message::Frame`].

use std::f32::consts::PI;
use std::time::Duration;

/// Period of the rotation tick for the circular indicators.
pub const ROTATION_TICK: Duration = Duration::from_millis(100);

/// Degrees the circular indicators advance on each tick.
///
/// One full revolution every ten ticks (one second).
pub const ROTATION_STEP_DEGREES: f32 = 36.0;

/// Period of the bar's sweep re-trigger tick.
pub const BAR_RETRIGGER_TICK: Duration = Duration::from_secs(1);

/// Duration of one leg of the bar sweep.
pub const SWEEP_DURATION: Duration = Duration::from_millis(500);

/// Redraw period while a sweep is in flight (~60 FPS).
pub const FRAME_TICK: Duration = Duration::from_millis(16);

/// Width of the bar indicator segment relative to the track width.
pub const INDICATOR_WIDTH_RATIO: f32 = 0.3;

/// Events delivered by an indicator's animation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Coarse advancement tick: a rotation step for the circular
    /// indicators, a sweep re-trigger for the bar.
    Tick,
    /// Fine-grained redraw tick advancing an in-flight sweep.
    ///
    /// Ignored by the circular indicators.
    Frame,
}

/// Sinusoidal ease-in-out over `t ∈ [0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    0.5 - 0.5 * (PI * t).cos()
}

/// A self-reversing eased transition across a normalized travel range.
///
/// The sweep moves in legs: forward from 0 to 1, then backward from 1 to 0,
/// and so on. While `keep_running` is passed to [`Sweep::advance`], a
/// completed leg immediately starts the opposite leg; once it stops being
/// passed, the current leg finishes and the sweep halts at whichever end it
/// reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Progress along the current leg, in `[0, 1]`.
    progress: f32,
    /// Whether the current leg travels away from the origin.
    forward: bool,
    running: bool,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            progress: 0.0,
            forward: true,
            running: false,
        }
    }
}

impl Sweep {
    /// Starts the sweep, or keeps it running if it already is.
    pub fn run(&mut self) {
        self.running = true;
    }

    /// Whether the sweep is currently in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the sweep by `dt`.
    ///
    /// When a leg completes and `keep_running` is true the sweep reverses
    /// into the opposite leg, carrying over any excess time. Otherwise it
    /// halts exactly at the end the leg reached.
    pub fn advance(&mut self, dt: Duration, keep_running: bool) {
        if !self.running {
            return;
        }

        self.progress += dt.as_secs_f32() / SWEEP_DURATION.as_secs_f32();
        while self.progress >= 1.0 {
            if keep_running {
                self.progress -= 1.0;
                self.forward = !self.forward;
            } else {
                self.progress = 1.0;
                self.running = false;
                break;
            }
        }
    }

    /// Eased position in `[0, 1]` along the travel range.
    ///
    /// 0 is the origin end, 1 the far end, regardless of leg direction.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        let eased = ease_in_out(self.progress.clamp(0.0, 1.0));
        if self.forward {
            eased
        } else {
            1.0 - eased
        }
    }
}

const _: () = {
    assert!(ROTATION_STEP_DEGREES > 0.0);
    assert!(ROTATION_STEP_DEGREES <= 360.0);
    assert!(INDICATOR_WIDTH_RATIO > 0.0 && INDICATOR_WIDTH_RATIO < 1.0);
};
