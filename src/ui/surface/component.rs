// SPDX-License-Identifier: MPL-2.0
//! Zoom surface component encapsulating state and update logic.
//!
//! Input arrives as raw window events (mouse, touch, keyboard), wheel zoom
//! requests from the view and scroll reports from the scrollable. Every
//! change that moves the content is followed by a `snap_to` task so the
//! scrollable shows the offset the surface decided on.

use super::delegate::{dispatch_scroll, ScrollCorrection, ScrollDelegate};
use super::model::ZoomSurface;
use super::pane;
use crate::config::{
    BackgroundTheme, Config, ANIMATION_TICK, DEFAULT_WHEEL_ZOOM_STEP, DEFAULT_ZOOM_ANIMATION_MS,
};
use crate::domain::ui::{AnimationDuration, ZoomScale, ZoomStep};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::state::{DragState, PinchRecognizer, TapDetector};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, time, touch, window};
use iced::{Element, Point, Rectangle, Subscription, Task};
use std::time::Instant;

/// Identifier used for the surface scrollable widget.
pub const SCROLLABLE_ID: &str = "zoom-surface-scrollable";

/// Messages emitted by the surface and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Wheel movement over the viewport; `anchor` is viewport-local.
    WheelZoom {
        steps: f32,
        anchor: Point,
    },
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    AnimationTick(Instant),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Request to open file dialog from empty state.
    OpenFileRequested,
}

/// Side effects the application should perform after handling a surface message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The displayed scale changed (title and indicator need refreshing).
    ZoomChanged(ZoomScale),
    OpenFileDialog,
}

/// Complete surface component state.
#[derive(Debug, Clone)]
pub struct State {
    surface: ZoomSurface,
    drag: DragState,
    taps: TapDetector,
    pinch: PinchRecognizer,
    cursor_position: Option<Point>,
    wheel_step: ZoomStep,
    background: BackgroundTheme,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl State {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut state = Self {
            surface: ZoomSurface::default(),
            drag: DragState::default(),
            taps: TapDetector::default(),
            pinch: PinchRecognizer::default(),
            cursor_position: None,
            wheel_step: ZoomStep::default(),
            background: BackgroundTheme::default(),
        };
        state.apply_config(config);
        state
    }

    /// Applies display and animation preferences.
    pub fn apply_config(&mut self, config: &Config) {
        self.background = config.display.background_theme.unwrap_or_default();
        self.wheel_step = ZoomStep::new(
            config
                .display
                .wheel_zoom_step
                .unwrap_or(DEFAULT_WHEEL_ZOOM_STEP),
        );
        self.surface.set_animation_duration(AnimationDuration::from_millis(
            config
                .animation
                .zoom_duration_ms
                .unwrap_or(DEFAULT_ZOOM_ANIMATION_MS),
        ));
    }

    /// Shows a new image at the minimum scale.
    pub fn set_image(&mut self, image: ImageData) -> Task<Message> {
        self.drag.stop();
        self.taps.reset();
        self.surface.set_image(image);
        self.snap_task()
    }

    #[must_use]
    pub fn surface(&self) -> &ZoomSurface {
        &self.surface
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.surface.image().is_some()
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.surface.scale()
    }

    #[must_use]
    pub fn background(&self) -> BackgroundTheme {
        self.background
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn cursor_over_viewport(&self) -> bool {
        self.cursor_position
            .and_then(|position| self.surface.viewport().to_local(position))
            .is_some()
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ViewportChanged { bounds, offset } => {
                if self.surface.set_viewport_bounds(bounds) {
                    // Our offset was re-clamped for the new size; the
                    // reported one is stale.
                    return (Effect::ZoomChanged(self.surface.scale()), self.snap_task());
                }
                if self.pinch.finger_count() > 1 {
                    // The scrollable pans with whichever finger moved last;
                    // during a pinch the anchored offset from `zoom_by` wins.
                    return (Effect::None, self.snap_task());
                }
                match dispatch_scroll(&mut self.surface, offset) {
                    ScrollCorrection::Accepted => (Effect::None, Task::none()),
                    ScrollCorrection::Clamped(_) => (Effect::None, self.snap_task()),
                }
            }
            Message::WheelZoom { steps, anchor } => {
                let factor = self.wheel_step.factor_for(steps);
                if self.surface.zoom_by(factor, anchor) {
                    self.zoom_changed()
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::AnimationTick(now) => {
                if self.surface.tick(now) {
                    self.zoom_changed()
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::ZoomIn => self.step_zoom(self.wheel_step.value()),
            Message::ZoomOut => self.step_zoom(1.0 / self.wheel_step.value()),
            Message::ResetZoom => self.animate_zoom(ZoomScale::MIN),
            Message::OpenFileRequested => (Effect::OpenFileDialog, Task::none()),
        }
    }

    /// Ticks the zoom animation while one is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.surface.is_animating() {
            time::every(ANIMATION_TICK).map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        pane::view(pane::ViewContext {
            background_theme: self.background,
            scrollable_id: SCROLLABLE_ID,
            i18n,
            surface: &self.surface,
            is_dragging: self.drag.is_dragging(),
            cursor_over_viewport: self.cursor_over_viewport(),
        })
    }

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        match event {
            event::Event::Window(
                window::Event::Resized(size) | window::Event::Opened { size, .. },
            ) => {
                // The surface fills the window until the scrollable reports its bounds.
                let bounds = self
                    .surface
                    .viewport()
                    .bounds
                    .map_or(Rectangle::new(Point::ORIGIN, size), |current| {
                        Rectangle::new(current.position(), size)
                    });
                if self.surface.set_viewport_bounds(bounds) {
                    self.zoom_changed()
                } else {
                    (Effect::None, Task::none())
                }
            }
            event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            event::Event::Touch(touch_event) => self.handle_touch_event(touch_event),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(ref c),
                modifiers,
                ..
            }) if !modifiers.command() && !modifiers.alt() => match c.as_str() {
                "+" | "=" => self.handle_message(Message::ZoomIn),
                "-" => self.handle_message(Message::ZoomOut),
                "0" => self.handle_message(Message::ResetZoom),
                _ => (Effect::None, Task::none()),
            },
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_mouse_event(&mut self, event: mouse::Event) -> (Effect, Task<Message>) {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(position) = self.cursor_position else {
                    return (Effect::None, Task::none());
                };
                if self.surface.viewport().to_local(position).is_none() {
                    return (Effect::None, Task::none());
                }
                if self.taps.register(position, Instant::now()) {
                    self.drag.stop();
                    self.double_tap()
                } else {
                    self.drag.start(position, self.surface.offset());
                    (Effect::None, Task::none())
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.drag.stop();
                (Effect::None, Task::none())
            }
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                match self.drag.proposed_offset(position) {
                    Some(proposed) => {
                        self.surface.did_scroll(proposed);
                        (Effect::None, self.snap_task())
                    }
                    None => (Effect::None, Task::none()),
                }
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.drag.stop();
                (Effect::None, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_touch_event(&mut self, event: touch::Event) -> (Effect, Task<Message>) {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.surface.viewport().to_local(position).is_none() {
                    return (Effect::None, Task::none());
                }
                self.pinch.finger_pressed(id.0, position);
                if self.pinch.finger_count() > 1 {
                    self.taps.reset();
                    return (Effect::None, Task::none());
                }
                if self.taps.register(position, Instant::now()) {
                    self.double_tap()
                } else {
                    (Effect::None, Task::none())
                }
            }
            touch::Event::FingerMoved { id, position } => {
                let Some(sample) = self.pinch.finger_moved(id.0, position) else {
                    return (Effect::None, Task::none());
                };
                let anchor = self
                    .surface
                    .viewport()
                    .to_local(sample.midpoint)
                    .unwrap_or_else(|| self.surface.viewport().local_center());
                if self.surface.zoom_by(sample.factor, anchor) {
                    self.zoom_changed()
                } else {
                    (Effect::None, Task::none())
                }
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.pinch.finger_lifted(id.0);
                (Effect::None, Task::none())
            }
        }
    }

    fn double_tap(&mut self) -> (Effect, Task<Message>) {
        if self.surface.double_tap(Instant::now()).is_none() {
            return (Effect::None, Task::none());
        }
        if self.surface.is_animating() {
            // Ticks carry the change from here.
            (Effect::None, Task::none())
        } else {
            self.zoom_changed()
        }
    }

    fn step_zoom(&mut self, factor: f32) -> (Effect, Task<Message>) {
        let target = self.surface.zoom_target().scaled_by(factor);
        self.animate_zoom(target)
    }

    fn animate_zoom(&mut self, target: ZoomScale) -> (Effect, Task<Message>) {
        if self.surface.set_zoom_scale(target, true, Instant::now()) {
            self.zoom_changed()
        } else {
            (Effect::None, Task::none())
        }
    }

    fn zoom_changed(&self) -> (Effect, Task<Message>) {
        (Effect::ZoomChanged(self.surface.scale()), self.snap_task())
    }

    fn snap_task(&self) -> Task<Message> {
        operation::snap_to(Id::new(SCROLLABLE_ID), self.surface.relative_offset())
    }
}
