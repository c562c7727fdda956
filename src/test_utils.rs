// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::media::ImageData;

/// Builds a solid gray image of the given size.
pub fn gray_image(width: u32, height: u32) -> ImageData {
    let pixels = vec![128_u8; (width * height * 4) as usize];
    ImageData::from_rgba(width, height, pixels)
}
