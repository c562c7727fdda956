// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Surface effects are translated here into dialogs, background image
//! loading and notices.

use super::{App, Message};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData, IMAGE_EXTENSIONS};
use crate::ui::surface;
use iced::Task;
use std::path::PathBuf;

/// Forwards a message to the surface and applies the resulting effect.
pub(super) fn handle_surface_message(app: &mut App, message: surface::Message) -> Task<Message> {
    let (effect, task) = app.surface.handle_message(message);
    let task = task.map(Message::Surface);

    let effect_task = match effect {
        surface::Effect::None => Task::none(),
        surface::Effect::ZoomChanged(scale) => {
            tracing::trace!(scale = scale.value(), "zoom changed");
            Task::none()
        }
        surface::Effect::OpenFileDialog => Task::done(Message::OpenFileDialog),
    };

    Task::batch([task, effect_task])
}

/// Opens the native file picker filtered to supported image formats.
pub(super) fn open_file_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("open-dialog-title");
    let filter_name = i18n.tr("open-dialog-filter-images");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Decodes the image at `path` off the update loop.
pub(super) fn load_image(path: PathBuf) -> Task<Message> {
    tracing::info!(path = %path.display(), "loading image");
    let load_path = path.clone();
    Task::perform(
        async move { media::load_image(&load_path) },
        move |result| Message::ImageLoaded { path, result },
    )
}

/// Shows a decoded image, or keeps the current one and shows a notice on failure.
pub(super) fn handle_image_loaded(
    app: &mut App,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            tracing::debug!(
                path = %path.display(),
                width = image.width,
                height = image.height,
                "image loaded"
            );
            app.current_path = Some(path);
            app.notice = None;
            app.surface.set_image(image).map(Message::Surface)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to load image");
            app.notice = Some(error.i18n_key().to_string());
            Task::none()
        }
    }
}
