// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no framework dependencies.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::newtypes::ZoomScale),
//!   [`ZoomStep`](ui::newtypes::ZoomStep), [`AnimationDuration`](ui::newtypes::AnimationDuration))

pub mod ui;
