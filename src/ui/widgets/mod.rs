// SPDX-License-Identifier: MPL-2.0
pub mod wheel_zoom_area;

pub use wheel_zoom_area::{wheel_zoom_area, WheelZoomArea};
