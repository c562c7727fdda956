// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the surface zoom scale, including:
//! - The current (clamped) zoom scale
//! - Animated transitions toward a target scale
//! - The double-tap toggle between fitted and zoomed

pub use crate::config::{DOUBLE_TAP_ZOOM_SCALE, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
use crate::domain::ui::{AnimationDuration, ZoomScale};
use std::time::{Duration, Instant};

/// Discrete view of the zoom scale used by the double-tap toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    /// Scale equals the minimum; the whole image is visible.
    Fitted,
    /// Scale is above the minimum.
    Zoomed,
}

/// An in-flight transition between two zoom scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnimation {
    from: ZoomScale,
    to: ZoomScale,
    started_at: Instant,
    duration: Duration,
}

impl ZoomAnimation {
    #[must_use]
    pub fn new(from: ZoomScale, to: ZoomScale, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Scale the animation converges to.
    #[must_use]
    pub fn target(&self) -> ZoomScale {
        self.to
    }

    /// Samples the animation at `now`, returning the scale and whether it has finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (ZoomScale, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t);
        let value = self.from.value() + (self.to.value() - self.from.value()) * eased;
        (ZoomScale::new(value), false)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Manages all zoom-related state for the surface
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    /// Current zoom scale (guaranteed valid by type).
    scale: ZoomScale,

    /// Transition currently driving `scale`, if any.
    animation: Option<ZoomAnimation>,

    /// Duration used for animated scale changes.
    duration: AnimationDuration,
}

impl ZoomState {
    #[must_use]
    pub fn new(duration: AnimationDuration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Current zoom scale.
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    /// Scale the surface is heading to: the animation target if animating.
    #[must_use]
    pub fn target(&self) -> ZoomScale {
        self.animation.map_or(self.scale, |anim| anim.target())
    }

    /// Mode of the live scale. A running animation does not count until it
    /// has moved the scale off the minimum.
    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        if self.scale.is_min() {
            ZoomMode::Fitted
        } else {
            ZoomMode::Zoomed
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn animation_duration(&self) -> AnimationDuration {
        self.duration
    }

    pub fn set_animation_duration(&mut self, duration: AnimationDuration) {
        self.duration = duration;
    }

    /// Sets the scale immediately, cancelling any running animation.
    /// Returns true when the scale changed.
    pub fn set_scale(&mut self, scale: ZoomScale) -> bool {
        self.animation = None;
        let changed = self.scale != scale;
        self.scale = scale;
        changed
    }

    /// Starts an animated transition toward `target`.
    ///
    /// Falls back to an immediate change when animations are disabled.
    /// Returns true when the scale changed immediately.
    pub fn animate_to(&mut self, target: ZoomScale, now: Instant) -> bool {
        if self.duration.is_instant() {
            return self.set_scale(target);
        }
        if self.scale == target {
            self.animation = None;
            return false;
        }
        self.animation = Some(ZoomAnimation::new(
            self.scale,
            target,
            now,
            self.duration.as_duration(),
        ));
        false
    }

    /// Advances the running animation. Returns true when the scale changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let (scale, finished) = animation.sample(now);
        if finished {
            self.animation = None;
        }
        let changed = self.scale != scale;
        self.scale = scale;
        changed
    }

    /// Scale a double-tap should move to from the current scale. A tap
    /// during an animation decides from where the animation has got to.
    #[must_use]
    pub fn double_tap_target(&self) -> ZoomScale {
        match self.mode() {
            ZoomMode::Zoomed => ZoomScale::MIN,
            ZoomMode::Fitted => ZoomScale::new(DOUBLE_TAP_ZOOM_SCALE),
        }
    }

    /// Resets to the fitted scale without animation.
    pub fn reset(&mut self) {
        self.set_scale(ZoomScale::MIN);
    }
}
