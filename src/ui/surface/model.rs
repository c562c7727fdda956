// SPDX-License-Identifier: MPL-2.0
//! Renderer-independent state of the zoomable surface.
//!
//! Content is the image aspect-fitted to the viewport, multiplied by the zoom
//! scale. Every scale change re-runs [`ScrollDelegate::did_zoom`] and moves
//! the offset so the zoom anchor stays put; every offset goes through
//! [`ScrollDelegate::did_scroll`].

use super::delegate::ScrollDelegate;
use super::geometry;
use crate::domain::ui::{AnimationDuration, ZoomScale};
use crate::media::ImageData;
use crate::ui::state::{ViewportState, ZoomState};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{Padding, Point, Rectangle, Size};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ZoomSurface {
    image: Option<ImageData>,
    zoom: ZoomState,
    viewport: ViewportState,
    insets: Padding,
}

impl ZoomSurface {
    #[must_use]
    pub fn new(animation: AnimationDuration) -> Self {
        Self {
            zoom: ZoomState::new(animation),
            ..Self::default()
        }
    }

    /// Replaces the displayed image and resets the zoom scale to the minimum
    /// without animation.
    pub fn set_image(&mut self, image: ImageData) {
        tracing::debug!(width = image.width, height = image.height, "surface image replaced");
        self.image = Some(image);
        self.zoom.reset();
        self.viewport.reset_offset();
        self.did_zoom();
    }

    /// Removes the image, returning to the empty state.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.zoom.reset();
        self.viewport.reset_offset();
        self.did_zoom();
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.zoom.scale()
    }

    #[must_use]
    pub fn zoom_target(&self) -> ZoomScale {
        self.zoom.target()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom.is_animating()
    }

    pub fn set_animation_duration(&mut self, duration: AnimationDuration) {
        self.zoom.set_animation_duration(duration);
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn offset(&self) -> AbsoluteOffset {
        self.viewport.offset
    }

    /// Insets computed by the last zoom notification.
    #[must_use]
    pub fn insets(&self) -> Padding {
        self.insets
    }

    /// Image size at the minimum scale.
    #[must_use]
    pub fn fitted_size(&self) -> Size {
        self.fitted_size_in(self.viewport.size())
    }

    /// Image size at the minimum scale for an arbitrary viewport size.
    #[must_use]
    pub fn fitted_size_in(&self, viewport: Size) -> Size {
        self.image
            .as_ref()
            .map_or(Size::ZERO, |image| geometry::fitted_size(image.size(), viewport))
    }

    /// Size of the zoomed content.
    #[must_use]
    pub fn content_size(&self) -> Size {
        geometry::content_size(self.fitted_size(), self.zoom.scale())
    }

    /// Current offset in the relative form understood by `snap_to`.
    #[must_use]
    pub fn relative_offset(&self) -> RelativeOffset {
        geometry::relative_offset(self.viewport.offset, self.viewport.size(), self.content_size())
    }

    /// Records the viewport bounds. On resize the insets and offset are recomputed.
    /// Returns true if the viewport size changed.
    pub fn set_viewport_bounds(&mut self, bounds: Rectangle) -> bool {
        let resized = self.viewport.update_bounds(bounds);
        if resized {
            self.did_zoom();
            let offset = self.viewport.offset;
            self.did_scroll(offset);
        }
        resized
    }

    /// Changes the zoom scale, optionally animated, around the viewport center.
    ///
    /// Returns true when the scale changed immediately (no animation pending).
    pub fn set_zoom_scale(&mut self, target: ZoomScale, animated: bool, now: Instant) -> bool {
        if self.view_for_zooming().is_none() {
            return false;
        }
        let anchor = self.viewport.local_center();
        if animated {
            self.rescale(anchor, |zoom| zoom.animate_to(target, now))
        } else {
            self.rescale(anchor, |zoom| zoom.set_scale(target))
        }
    }

    /// Applies the double-tap toggle: back to the minimum when zoomed,
    /// otherwise to the double-tap scale. Always animated.
    ///
    /// Returns the target scale, or `None` when there is nothing to zoom.
    pub fn double_tap(&mut self, now: Instant) -> Option<ZoomScale> {
        self.view_for_zooming()?;
        let target = self.zoom.double_tap_target();
        tracing::debug!(from = self.zoom.scale().value(), to = target.value(), "double-tap zoom");
        self.set_zoom_scale(target, true, now);
        Some(target)
    }

    /// Continuous zoom: multiplies the scale by `factor`, keeping the content
    /// under `anchor` (viewport-local) fixed. Cancels any running animation.
    ///
    /// Returns true when the scale changed.
    pub fn zoom_by(&mut self, factor: f32, anchor: Point) -> bool {
        if self.view_for_zooming().is_none() || !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let target = self.zoom.scale().scaled_by(factor);
        self.rescale(anchor, |zoom| zoom.set_scale(target))
    }

    /// Advances a running zoom animation. Returns true when the scale changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.zoom.is_animating() {
            return false;
        }
        let anchor = self.viewport.local_center();
        self.rescale(anchor, |zoom| zoom.tick(now))
    }

    fn rescale(&mut self, anchor: Point, change: impl FnOnce(&mut ZoomState) -> bool) -> bool {
        let old_content = self.content_size();
        if !change(&mut self.zoom) {
            return false;
        }
        let new_content = self.content_size();

        self.did_zoom();
        let proposed = geometry::anchored_offset(
            self.viewport.offset,
            anchor,
            self.viewport.size(),
            old_content,
            new_content,
        );
        self.did_scroll(proposed);
        true
    }
}

impl ScrollDelegate for ZoomSurface {
    fn view_for_zooming(&self) -> Option<&ImageData> {
        self.image.as_ref().filter(|image| !image.is_empty())
    }

    fn did_zoom(&mut self) -> Padding {
        self.insets = geometry::centering_insets(self.viewport.size(), self.content_size());
        self.insets
    }

    fn did_scroll(&mut self, proposed: AbsoluteOffset) -> AbsoluteOffset {
        let clamped =
            geometry::clamp_offset(proposed, self.viewport.size(), self.content_size());
        self.viewport.offset = clamped;
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, gray_image};
    use crate::ui::state::zoom::{DOUBLE_TAP_ZOOM_SCALE, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
    use std::time::Duration;

    fn surface_with_viewport(width: f32, height: f32) -> ZoomSurface {
        let mut surface = ZoomSurface::new(AnimationDuration::from_millis(200));
        surface.set_viewport_bounds(Rectangle::new(Point::ORIGIN, Size::new(width, height)));
        surface
    }

    fn finish_animation(surface: &mut ZoomSurface, start: Instant) {
        surface.tick(start + Duration::from_secs(5));
        assert!(!surface.is_animating());
    }

    #[test]
    fn set_image_resets_zoom_to_minimum() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(800, 600));
        surface.zoom_by(4.0, Point::new(200.0, 150.0));
        assert!(surface.scale().value() > MIN_ZOOM_SCALE);

        surface.set_image(gray_image(100, 100));
        assert_eq!(surface.scale(), ZoomScale::MIN);
        assert!(!surface.is_animating());
        assert_eq!(surface.offset(), AbsoluteOffset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn set_image_cancels_running_animation() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(800, 600));
        surface.double_tap(Instant::now());
        assert!(surface.is_animating());

        surface.set_image(gray_image(800, 600));
        assert!(!surface.is_animating());
        assert_eq!(surface.scale(), ZoomScale::MIN);
    }

    #[test]
    fn double_tap_when_fitted_animates_to_three() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(800, 600));
        let start = Instant::now();

        let target = surface.double_tap(start).expect("image is set");
        assert_abs_diff_eq!(target.value(), DOUBLE_TAP_ZOOM_SCALE);
        assert!(surface.is_animating());
        assert_eq!(surface.scale(), ZoomScale::MIN);

        finish_animation(&mut surface, start);
        assert_abs_diff_eq!(surface.scale().value(), DOUBLE_TAP_ZOOM_SCALE);
    }

    #[test]
    fn double_tap_when_zoomed_animates_to_minimum() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(800, 600));
        surface.set_zoom_scale(ZoomScale::new(5.0), false, Instant::now());
        let start = Instant::now();

        let target = surface.double_tap(start).expect("image is set");
        assert_eq!(target, ZoomScale::MIN);

        finish_animation(&mut surface, start);
        assert_eq!(surface.scale(), ZoomScale::MIN);
        assert_eq!(surface.offset(), AbsoluteOffset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn double_tap_mid_zoom_out_keeps_heading_to_minimum() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(800, 600));
        surface.set_zoom_scale(ZoomScale::new(3.0), false, Instant::now());
        let start = Instant::now();

        assert_eq!(surface.double_tap(start), Some(ZoomScale::MIN));
        surface.tick(start + Duration::from_millis(60));
        assert!(surface.scale().value() > MIN_ZOOM_SCALE);

        let second = start + Duration::from_millis(60);
        assert_eq!(surface.double_tap(second), Some(ZoomScale::MIN));
        finish_animation(&mut surface, second);
        assert_eq!(surface.scale(), ZoomScale::MIN);
    }

    #[test]
    fn double_tap_without_image_does_nothing() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        assert!(surface.double_tap(Instant::now()).is_none());
        assert!(!surface.is_animating());
    }

    #[test]
    fn zoom_by_stays_within_bounds() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(400, 300));

        surface.zoom_by(100.0, Point::new(0.0, 0.0));
        assert_abs_diff_eq!(surface.scale().value(), MAX_ZOOM_SCALE);

        surface.zoom_by(0.0001, Point::new(0.0, 0.0));
        assert_abs_diff_eq!(surface.scale().value(), MIN_ZOOM_SCALE);

        assert!(!surface.zoom_by(f32::NAN, Point::new(0.0, 0.0)));
        assert!(!surface.zoom_by(-2.0, Point::new(0.0, 0.0)));
    }

    #[test]
    fn zoom_by_keeps_anchor_under_cursor() {
        let mut surface = surface_with_viewport(400.0, 400.0);
        surface.set_image(gray_image(400, 400));

        surface.zoom_by(2.0, Point::new(100.0, 300.0));
        // Content point (100, 300) at 2× lives at (200, 600); minus anchor.
        assert_abs_diff_eq!(surface.offset().x, 100.0);
        assert_abs_diff_eq!(surface.offset().y, 300.0);
    }

    #[test]
    fn scroll_is_clamped_to_content_bounds() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(400, 300));
        surface.set_zoom_scale(ZoomScale::new(2.0), false, Instant::now());

        let clamped = surface.did_scroll(AbsoluteOffset { x: -20.0, y: 9999.0 });
        assert_eq!(clamped, AbsoluteOffset { x: 0.0, y: 300.0 });

        let clamped = surface.did_scroll(AbsoluteOffset { x: 9999.0, y: -1.0 });
        assert_eq!(clamped, AbsoluteOffset { x: 400.0, y: 0.0 });
        assert_eq!(surface.offset(), clamped);
    }

    #[test]
    fn fitted_image_is_centered() {
        let mut surface = surface_with_viewport(800.0, 600.0);
        surface.set_image(gray_image(400, 400));

        // Fitted to 600x600 inside 800x600.
        let insets = surface.insets();
        assert_abs_diff_eq!(insets.left, 100.0);
        assert_abs_diff_eq!(insets.right, 100.0);
        assert_abs_diff_eq!(insets.top, 0.0);
    }

    #[test]
    fn insets_shrink_as_content_grows() {
        let mut surface = surface_with_viewport(800.0, 600.0);
        surface.set_image(gray_image(400, 400));
        surface.set_zoom_scale(ZoomScale::new(2.0), false, Instant::now());

        let insets = surface.insets();
        assert_abs_diff_eq!(insets.left, 0.0);
        assert_abs_diff_eq!(insets.top, 0.0);
    }

    #[test]
    fn resize_recomputes_insets_and_clamps_offset() {
        let mut surface = surface_with_viewport(400.0, 400.0);
        surface.set_image(gray_image(400, 400));
        surface.set_zoom_scale(ZoomScale::new(2.0), false, Instant::now());
        surface.did_scroll(AbsoluteOffset { x: 400.0, y: 400.0 });

        // Larger viewport: fitted content grows, maximum offset changes.
        surface.set_viewport_bounds(Rectangle::new(Point::ORIGIN, Size::new(1000.0, 500.0)));
        let content = surface.content_size();
        assert_abs_diff_eq!(content.width, 1000.0);
        assert_abs_diff_eq!(content.height, 1000.0);
        assert!(surface.offset().x <= 0.0);
        assert!(surface.offset().y <= 500.0);
        assert_abs_diff_eq!(surface.insets().left, 0.0);
    }

    #[test]
    fn animation_steps_respect_scroll_bounds() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        surface.set_image(gray_image(800, 600));
        let start = Instant::now();
        surface.double_tap(start);

        for ms in (0..=250).step_by(25) {
            surface.tick(start + Duration::from_millis(ms));
            let content = surface.content_size();
            let offset = surface.offset();
            assert!(offset.x >= 0.0 && offset.x <= (content.width - 400.0).max(0.0) + 0.01);
            assert!(offset.y >= 0.0 && offset.y <= (content.height - 300.0).max(0.0) + 0.01);
            let scale = surface.scale().value();
            assert!((MIN_ZOOM_SCALE..=MAX_ZOOM_SCALE).contains(&scale));
        }
    }

    #[test]
    fn instant_animation_applies_double_tap_immediately() {
        let mut surface = ZoomSurface::new(AnimationDuration::from_millis(0));
        surface.set_viewport_bounds(Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)));
        surface.set_image(gray_image(800, 600));

        surface.double_tap(Instant::now());
        assert!(!surface.is_animating());
        assert_abs_diff_eq!(surface.scale().value(), DOUBLE_TAP_ZOOM_SCALE);
    }

    #[test]
    fn zoom_target_resolves_to_current_image() {
        let mut surface = surface_with_viewport(400.0, 300.0);
        assert!(surface.view_for_zooming().is_none());
        surface.set_image(gray_image(10, 10));
        assert!(surface.view_for_zooming().is_some());
        surface.clear_image();
        assert!(surface.view_for_zooming().is_none());
    }
}
