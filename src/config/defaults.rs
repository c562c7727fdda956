// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for the zoom bounds, gesture
//! thresholds and animation timing used by the image surface.
//!
//! # Categories
//!
//! - **Zoom**: Scale bounds, double-tap target, wheel step
//! - **Gesture**: Double-tap timing and slop
//! - **Animation**: Zoom animation duration and tick rate

use crate::domain::ui::newtypes::{animation_bounds, zoom_bounds};
use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Minimum zoom scale (the image aspect-fitted to the viewport).
pub const MIN_ZOOM_SCALE: f32 = zoom_bounds::MIN_SCALE;

/// Maximum zoom scale.
pub const MAX_ZOOM_SCALE: f32 = zoom_bounds::MAX_SCALE;

/// Scale reached by a double-tap while the image is fitted.
pub const DOUBLE_TAP_ZOOM_SCALE: f32 = 3.0;

/// Default multiplicative zoom step per wheel notch or keyboard press.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = zoom_bounds::DEFAULT_STEP;

/// Smallest allowed wheel zoom step.
pub const MIN_WHEEL_ZOOM_STEP: f32 = zoom_bounds::MIN_STEP;

/// Largest allowed wheel zoom step.
pub const MAX_WHEEL_ZOOM_STEP: f32 = zoom_bounds::MAX_STEP;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum delay between two taps of a double-tap.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(350);

/// Maximum distance (in logical pixels) between two taps of a double-tap.
pub const DOUBLE_TAP_SLOP: f32 = 24.0;

/// Finger distances below this are too noisy to derive a pinch ratio from.
pub const MIN_PINCH_DISTANCE: f32 = 10.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default zoom animation duration in milliseconds.
pub const DEFAULT_ZOOM_ANIMATION_MS: u64 = animation_bounds::DEFAULT_MS;

/// Maximum zoom animation duration in milliseconds.
pub const MAX_ZOOM_ANIMATION_MS: u64 = animation_bounds::MAX_MS;

/// Interval between animation ticks while a zoom animation is running.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(MAX_ZOOM_SCALE > MIN_ZOOM_SCALE);
    assert!(DOUBLE_TAP_ZOOM_SCALE > MIN_ZOOM_SCALE);
    assert!(DOUBLE_TAP_ZOOM_SCALE <= MAX_ZOOM_SCALE);

    assert!(MIN_WHEEL_ZOOM_STEP > 1.0);
    assert!(MAX_WHEEL_ZOOM_STEP >= MIN_WHEEL_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_ZOOM_STEP >= MIN_WHEEL_ZOOM_STEP);
    assert!(DEFAULT_WHEEL_ZOOM_STEP <= MAX_WHEEL_ZOOM_STEP);

    assert!(DOUBLE_TAP_SLOP > 0.0);
    assert!(MIN_PINCH_DISTANCE > 0.0);

    assert!(DEFAULT_ZOOM_ANIMATION_MS <= MAX_ZOOM_ANIMATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_bounds_match_surface_contract() {
        assert_eq!(MIN_ZOOM_SCALE, 1.0);
        assert_eq!(MAX_ZOOM_SCALE, 10.0);
        assert_eq!(DOUBLE_TAP_ZOOM_SCALE, 3.0);
    }

    #[test]
    fn animation_tick_is_shorter_than_default_animation() {
        assert!(ANIMATION_TICK < Duration::from_millis(DEFAULT_ZOOM_ANIMATION_MS));
    }
}
