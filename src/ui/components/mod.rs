// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`background`] - Light, dark and checkerboard backgrounds behind the surface

pub mod background;
