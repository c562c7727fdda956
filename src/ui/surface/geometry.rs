// SPDX-License-Identifier: MPL-2.0
//! Pure layout arithmetic for the zoomable surface.
//!
//! All sizes are in logical pixels. Offsets are expressed in the coordinate
//! space of the scrollable content, i.e. including the centering insets.

use crate::domain::ui::ZoomScale;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{Padding, Point, Size};

/// Aspect-fits `image` inside `viewport`.
///
/// Returns [`Size::ZERO`] for empty images or viewports.
#[must_use]
pub fn fitted_size(image: Size, viewport: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 || viewport.width <= 0.0 || viewport.height <= 0.0
    {
        return Size::ZERO;
    }

    let scale = (viewport.width / image.width).min(viewport.height / image.height);
    if !scale.is_finite() || scale <= 0.0 {
        return Size::ZERO;
    }

    Size::new(image.width * scale, image.height * scale)
}

/// Size of the zoomed content for a given fitted size.
#[must_use]
pub fn content_size(fitted: Size, scale: ZoomScale) -> Size {
    Size::new(fitted.width * scale.value(), fitted.height * scale.value())
}

/// Per-axis inset that keeps content smaller than the viewport centered.
///
/// Each side receives `max(0, (viewport - content) / 2)`.
#[must_use]
pub fn centering_insets(viewport: Size, content: Size) -> Padding {
    let horizontal = ((viewport.width - content.width) / 2.0).max(0.0);
    let vertical = ((viewport.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

/// Largest valid offset on each axis.
#[must_use]
pub fn max_offset(viewport: Size, content: Size) -> AbsoluteOffset {
    AbsoluteOffset {
        x: (content.width - viewport.width).max(0.0),
        y: (content.height - viewport.height).max(0.0),
    }
}

/// Clamps `offset` to `[0, max(0, content - viewport)]` on each axis.
///
/// Non-finite components clamp to zero.
#[must_use]
pub fn clamp_offset(offset: AbsoluteOffset, viewport: Size, content: Size) -> AbsoluteOffset {
    let max = max_offset(viewport, content);
    AbsoluteOffset {
        x: clamp_axis(offset.x, max.x),
        y: clamp_axis(offset.y, max.y),
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Converts an absolute offset into the relative form used by `snap_to`.
#[must_use]
pub fn relative_offset(offset: AbsoluteOffset, viewport: Size, content: Size) -> RelativeOffset {
    let max = max_offset(viewport, content);
    RelativeOffset {
        x: if max.x > 0.0 { offset.x / max.x } else { 0.0 },
        y: if max.y > 0.0 { offset.y / max.y } else { 0.0 },
    }
}

/// Offset that keeps the content point under `anchor` fixed on screen while
/// the content grows or shrinks from `old_content` to `new_content`.
///
/// `anchor` is relative to the viewport's top-left corner. The result is clamped.
#[must_use]
pub fn anchored_offset(
    offset: AbsoluteOffset,
    anchor: Point,
    viewport: Size,
    old_content: Size,
    new_content: Size,
) -> AbsoluteOffset {
    let old_insets = centering_insets(viewport, old_content);
    let new_insets = centering_insets(viewport, new_content);

    let x = anchor_axis(
        offset.x,
        anchor.x,
        old_insets.left,
        new_insets.left,
        old_content.width,
        new_content.width,
    );
    let y = anchor_axis(
        offset.y,
        anchor.y,
        old_insets.top,
        new_insets.top,
        old_content.height,
        new_content.height,
    );

    clamp_offset(AbsoluteOffset { x, y }, viewport, new_content)
}

fn anchor_axis(
    offset: f32,
    anchor: f32,
    old_inset: f32,
    new_inset: f32,
    old_len: f32,
    new_len: f32,
) -> f32 {
    if old_len <= 0.0 {
        return 0.0;
    }
    let fraction = ((offset + anchor - old_inset) / old_len).clamp(0.0, 1.0);
    fraction * new_len + new_inset - anchor
}
