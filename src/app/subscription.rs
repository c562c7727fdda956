// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, mouse, touch, window) are routed to the surface.
//! Wheel events never arrive here as surface input: the wheel zoom wrapper
//! consumes them inside the view so they do not also scroll.

use super::Message;
use crate::ui::surface;
use iced::{event, mouse, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        // Resizes and cursor tracking matter even when a widget captured them.
        let always_routed = matches!(
            event,
            event::Event::Window(window::Event::Resized(_) | window::Event::Opened { .. })
                | event::Event::Mouse(
                    mouse::Event::CursorMoved { .. }
                        | mouse::Event::CursorLeft
                        | mouse::Event::ButtonReleased(mouse::Button::Left)
                )
                | event::Event::Touch(_)
        );

        (always_routed || status == event::Status::Ignored).then(|| {
            Message::Surface(surface::Message::RawEvent {
                window: window_id,
                event,
            })
        })
    })
}
