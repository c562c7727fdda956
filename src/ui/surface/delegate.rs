// SPDX-License-Identifier: MPL-2.0
//! Callbacks the scrollable dispatches into the surface.
//!
//! The scroll view never decides zoom targets, insets or offset bounds on its
//! own: after every zoom change it asks [`ScrollDelegate::did_zoom`] for the
//! centering insets, and after every scroll it lets
//! [`ScrollDelegate::did_scroll`] overwrite the reported offset.

use crate::media::ImageData;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Padding;

pub trait ScrollDelegate {
    /// The content zoom gestures apply to. Zooming is disabled when `None`.
    fn view_for_zooming(&self) -> Option<&ImageData>;

    /// Notifies that the zoom scale changed. Returns the insets that center
    /// content smaller than the viewport.
    fn did_zoom(&mut self) -> Padding;

    /// Notifies that the viewport scrolled to `proposed`. Returns the offset
    /// that must actually be shown, clamped to the scrollable range.
    fn did_scroll(&mut self, proposed: AbsoluteOffset) -> AbsoluteOffset;
}

/// Outcome of dispatching a scroll through a delegate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCorrection {
    /// The reported offset was already valid.
    Accepted,
    /// The reported offset was out of range and must be replaced.
    Clamped(AbsoluteOffset),
}

/// Dispatches a scroll event and reports whether the toolkit must be corrected.
pub fn dispatch_scroll<D: ScrollDelegate + ?Sized>(
    delegate: &mut D,
    reported: AbsoluteOffset,
) -> ScrollCorrection {
    let clamped = delegate.did_scroll(reported);
    if offsets_match(clamped, reported) {
        ScrollCorrection::Accepted
    } else {
        ScrollCorrection::Clamped(clamped)
    }
}

fn offsets_match(a: AbsoluteOffset, b: AbsoluteOffset) -> bool {
    (a.x - b.x).abs() < 0.5 && (a.y - b.y).abs() < 0.5
}
