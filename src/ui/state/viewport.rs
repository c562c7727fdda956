// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the scrollable viewport state including bounds and scroll offset.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport bounds, in window coordinates
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Resets the scroll offset to the origin.
    pub fn reset_offset(&mut self) {
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Records new bounds. Returns true if the viewport size changed.
    pub fn update_bounds(&mut self, bounds: Rectangle) -> bool {
        let resized = self.bounds.map_or(true, |prev| prev.size() != bounds.size());
        self.bounds = Some(bounds);
        resized
    }

    /// Size of the viewport, or zero before the first layout.
    #[must_use]
    pub fn size(&self) -> Size {
        self.bounds.map_or(Size::ZERO, |bounds| bounds.size())
    }

    /// Center of the viewport relative to its own top-left corner.
    #[must_use]
    pub fn local_center(&self) -> Point {
        let size = self.size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    /// Converts a window position into viewport-local coordinates, if it lies inside.
    #[must_use]
    pub fn to_local(&self, position: Point) -> Option<Point> {
        let bounds = self.bounds?;
        if bounds.contains(position) {
            Some(Point::new(position.x - bounds.x, position.y - bounds.y))
        } else {
            None
        }
    }
}
