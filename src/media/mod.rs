// SPDX-License-Identifier: MPL-2.0
//! Image loading for the surface.

pub mod image;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};

pub mod extensions {
    /// Image file extensions offered by the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}
