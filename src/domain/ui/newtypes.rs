// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom scale bounds (1× to 10×).
pub mod zoom_bounds {
    /// Minimum zoom scale.
    pub const MIN_SCALE: f32 = 1.0;
    /// Maximum zoom scale.
    pub const MAX_SCALE: f32 = 10.0;
    /// Minimum multiplicative zoom step.
    pub const MIN_STEP: f32 = 1.01;
    /// Maximum multiplicative zoom step.
    pub const MAX_STEP: f32 = 2.0;
    /// Default multiplicative zoom step.
    pub const DEFAULT_STEP: f32 = 1.25;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale, guaranteed to be within valid range (1×–10×).
///
/// Non-finite inputs collapse to the minimum so a degenerate gesture can
/// never push the surface outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The fitted scale.
    pub const MIN: Self = Self(zoom_bounds::MIN_SCALE);

    /// The largest allowed scale.
    pub const MAX: Self = Self(zoom_bounds::MAX_SCALE);

    /// Creates a new zoom scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.clamp(zoom_bounds::MIN_SCALE, zoom_bounds::MAX_SCALE))
        } else {
            Self::MIN
        }
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a percentage (e.g., 1.5 → 150.0).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_SCALE
    }

    /// Multiplies the scale by `factor`, clamping the result.
    #[must_use]
    pub fn scaled_by(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::MIN
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Multiplicative zoom step, guaranteed to be within valid range (1.01–2.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() {
            Self(step.clamp(zoom_bounds::MIN_STEP, zoom_bounds::MAX_STEP))
        } else {
            Self::default()
        }
    }

    /// Returns the raw step factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the factor for `notches` wheel notches (negative zooms out).
    #[must_use]
    pub fn factor_for(self, notches: f32) -> f32 {
        self.0.powf(notches)
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_STEP)
    }
}

// =============================================================================
// Animation Bounds
// =============================================================================

/// Zoom animation duration bounds (0 to 2000 ms).
pub mod animation_bounds {
    /// Maximum animation duration in milliseconds.
    pub const MAX_MS: u64 = 2000;
    /// Default animation duration in milliseconds.
    pub const DEFAULT_MS: u64 = 250;
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Duration of animated zoom changes. Zero disables animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.min(animation_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when animations are disabled.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_scale_clamps() {
        assert_eq!(ZoomScale::new(0.2).value(), zoom_bounds::MIN_SCALE);
        assert_eq!(ZoomScale::new(42.0).value(), zoom_bounds::MAX_SCALE);
        assert!((ZoomScale::new(2.5).value() - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_scale_rejects_non_finite() {
        assert_eq!(ZoomScale::new(f32::NAN), ZoomScale::MIN);
        assert_eq!(ZoomScale::new(f32::INFINITY), ZoomScale::MIN);
    }

    #[test]
    fn zoom_scale_min_max() {
        assert!(ZoomScale::default().is_min());
        assert!(ZoomScale::MAX.is_max());
        assert!(!ZoomScale::new(3.0).is_min());
        assert!(!ZoomScale::new(3.0).is_max());
    }

    #[test]
    fn zoom_scale_scaled_by_stays_in_range() {
        let scale = ZoomScale::new(8.0);
        assert_eq!(scale.scaled_by(2.0), ZoomScale::MAX);
        assert_eq!(scale.scaled_by(0.01), ZoomScale::MIN);
        assert!((scale.scaled_by(0.5).value() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_scale_as_percent() {
        assert!((ZoomScale::new(1.5).as_percent() - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_step_clamps_and_computes_factor() {
        assert_eq!(ZoomStep::new(0.5).value(), zoom_bounds::MIN_STEP);
        assert_eq!(ZoomStep::new(5.0).value(), zoom_bounds::MAX_STEP);

        let step = ZoomStep::new(2.0);
        assert!((step.factor_for(1.0) - 2.0).abs() < f32::EPSILON);
        assert!((step.factor_for(-1.0) - 0.5).abs() < f32::EPSILON);
        assert!((step.factor_for(0.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn animation_duration_clamps() {
        assert_eq!(AnimationDuration::from_millis(10_000).millis(), animation_bounds::MAX_MS);
        assert!(AnimationDuration::from_millis(0).is_instant());
        assert_eq!(
            AnimationDuration::default().as_duration(),
            Duration::from_millis(animation_bounds::DEFAULT_MS)
        );
    }
}
