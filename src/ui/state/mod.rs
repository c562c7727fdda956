// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state for the surface, kept apart from the widget code so it
//! can be tested without a renderer.

pub mod drag;
pub mod gesture;
pub mod viewport;
pub mod zoom;

pub use drag::DragState;
pub use gesture::{PinchRecognizer, PinchSample, TapDetector};
pub use viewport::ViewportState;
pub use zoom::{ZoomMode, ZoomState};
