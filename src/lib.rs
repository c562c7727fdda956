// SPDX-License-Identifier: MPL-2.0
//! `zoom_lens` is a single-image viewer surface built with the Iced GUI framework.
//!
//! The heart of the crate is [`ui::surface`], a scrollable image surface that
//! supports pinch, wheel and double-tap zoom between fixed scale bounds, keeps
//! undersized content centered and clamps panning to the content bounds. The
//! [`app`] module hosts the surface in a window so it can be used standalone.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
