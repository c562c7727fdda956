// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`surface`] - The zoomable image surface
//! - [`state`] - Reusable state (zoom, viewport, drag, gestures)
//! - [`components`] - Reusable UI components (backgrounds)
//! - [`widgets`] - Custom Iced widgets (wheel zoom area)
//! - [`styles`] - Centralized styling (buttons, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod surface;
pub mod widgets;
