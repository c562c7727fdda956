// SPDX-License-Identifier: MPL-2.0
//! Zoomable image surface.
//!
//! The surface shows one image aspect-fitted to its viewport and lets the
//! user zoom between 1× and 10× with the wheel, pinch gestures, keyboard
//! shortcuts or a double-tap toggle. Content smaller than the viewport is
//! centered; scrolling never leaves the content bounds.
//!
//! - [`geometry`] - Pure layout math (fit, insets, clamping, anchoring)
//! - [`delegate`] - The scroll delegate contract
//! - [`model`] - Renderer-independent surface state
//! - [`component`] - Message handling and `iced` integration
//! - [`pane`] - The rendered view

pub mod component;
pub mod delegate;
mod empty_state;
pub mod geometry;
pub mod model;
mod pane;

pub use component::{Effect, Message, State, SCROLLABLE_ID};
pub use delegate::{dispatch_scroll, ScrollCorrection, ScrollDelegate};
pub use model::ZoomSurface;
