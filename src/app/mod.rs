// SPDX-License-Identifier: MPL-2.0
//! Application root state hosting the zoom surface in a window.
//!
//! The `App` struct wires together the surface, localization and settings,
//! and translates surface effects into side effects like opening the file
//! dialog or decoding an image in the background.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, BackgroundTheme};
use crate::i18n::fluent::I18n;
use crate::ui::surface;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    surface: surface::State,
    /// Path of the image currently shown.
    current_path: Option<PathBuf>,
    /// Localization key of the notice shown above the surface, if any.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_path", &self.current_path)
            .field("scale", &self.surface.scale())
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 300;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            surface: surface::State::default(),
            current_path: None,
            notice: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// image loading for the path received on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        if config_warning.is_none() {
            if let Err(err) = config::write_default_if_missing() {
                tracing::warn!(%err, "could not write default configuration");
            }
        }
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            surface: surface::State::new(&config),
            current_path: None,
            notice: config_warning,
        };

        let task = match flags.file_path {
            Some(path) => update::load_image(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let name = self
            .current_path
            .as_ref()
            .filter(|_| self.surface.has_image())
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match name {
            Some(name) => {
                let percent = format!("{:.0}", self.surface.scale().as_percent());
                self.i18n.tr_with_args(
                    "window-title-with-image",
                    &[("name", name.as_str()), ("percent", percent.as_str())],
                )
            }
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        match self.surface.background() {
            BackgroundTheme::Light => Theme::Light,
            BackgroundTheme::Dark | BackgroundTheme::Checkerboard => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.surface.subscription().map(Message::Surface),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Surface(surface_message) => update::handle_surface_message(self, surface_message),
            Message::OpenFileDialog => {
                self.notice = None;
                update::open_file_dialog(&self.i18n)
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::OpenFileDialogResult(path) => match path {
                Some(path) => update::load_image(path),
                None => Task::none(),
            },
            Message::FileDropped(path) => update::load_image(path),
            Message::ImageLoaded { path, result } => update::handle_image_loaded(self, path, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            surface: &self.surface,
            notice: self.notice.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::gray_image;
    use crate::ui::surface::Message as SurfaceMessage;
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Point, Rectangle, Size};

    fn english_app() -> App {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &config::Config::default()),
            ..App::default()
        }
    }

    #[test]
    fn title_without_image_is_app_name() {
        let app = english_app();
        assert_eq!(app.title(), "ZoomLens");
    }

    #[test]
    fn loaded_image_sets_title_and_clears_notice() {
        let mut app = english_app();
        app.notice = Some("notification-config-load-error".to_string());
        let _ = app.update(Message::Surface(SurfaceMessage::ViewportChanged {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)),
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
        }));

        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("/photos/cat.png"),
            result: Ok(gray_image(40, 30)),
        });

        assert!(app.notice.is_none());
        assert_eq!(app.title(), "cat.png (100%) - ZoomLens");
    }

    #[test]
    fn failed_load_keeps_previous_image() {
        let mut app = english_app();
        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("/photos/cat.png"),
            result: Ok(gray_image(40, 30)),
        });
        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("/photos/broken.png"),
            result: Err(Error::Decode("bad header".into())),
        });

        assert!(app.surface.has_image());
        assert_eq!(app.current_path, Some(PathBuf::from("/photos/cat.png")));
        assert_eq!(app.notice.as_deref(), Some("error-load-image-decode"));
    }

    #[test]
    fn clicking_notice_dismisses_it() {
        let mut app = english_app();
        app.notice = Some("notification-config-load-error".to_string());

        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn opening_a_file_clears_stale_notice() {
        let mut app = english_app();
        app.notice = Some("error-load-image-decode".to_string());

        let _ = app.update(Message::OpenFileDialog);
        assert!(app.notice.is_none());
    }

    #[test]
    fn theme_follows_background() {
        let app = App::default();
        assert_eq!(app.theme(), Theme::Dark);
    }
}
