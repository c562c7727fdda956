// SPDX-License-Identifier: MPL-2.0
//! Mouse panning.
//!
//! A pan remembers where the button went down and the offset at that moment.
//! Every cursor move proposes `origin offset − cursor travel`; the proposal is
//! raw and goes through the surface's scroll clamp like a scrollable report.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanOrigin {
    cursor: Point,
    offset: AbsoluteOffset,
}

/// Pan gesture driven by the left mouse button.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    origin: Option<PanOrigin>,
}

impl DragState {
    /// Begins panning from `cursor` with the surface currently at `offset`.
    pub fn start(&mut self, cursor: Point, offset: AbsoluteOffset) {
        self.origin = Some(PanOrigin { cursor, offset });
    }

    pub fn stop(&mut self) {
        self.origin = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Offset the pan asks for with the cursor at `cursor`, or `None` when
    /// no pan is running.
    #[must_use]
    pub fn proposed_offset(&self, cursor: Point) -> Option<AbsoluteOffset> {
        let origin = self.origin?;
        // Content follows the cursor, so the offset moves the other way.
        Some(AbsoluteOffset {
            x: origin.offset.x + origin.cursor.x - cursor.x,
            y: origin.offset.y + origin.cursor.y - cursor.y,
        })
    }
}
