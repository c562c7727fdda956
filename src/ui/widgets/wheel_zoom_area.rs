// SPDX-License-Identifier: MPL-2.0
//! A wrapper that turns mouse wheel input into zoom requests.
//!
//! Wheel events never reach the wrapped scrollable, so the wheel zooms while
//! dragging and touch panning keep scrolling. The cursor position is reported
//! relative to the wrapper, which covers the same area as the scroll viewport.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};

/// Wraps content and consumes wheel events over it.
pub struct WheelZoomArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_zoom: Option<Box<dyn Fn(f32, Point) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> WheelZoomArea<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_zoom: None,
        }
    }

    /// Sets the message produced for each wheel movement over the content.
    ///
    /// The closure receives the normalized wheel steps (positive zooms in)
    /// and the cursor position local to the wrapper.
    #[must_use]
    pub fn on_zoom(mut self, on_zoom: impl Fn(f32, Point) -> Message + 'a) -> Self {
        self.on_zoom = Some(Box::new(on_zoom));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for WheelZoomArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Event::Mouse(mouse::Event::WheelScrolled { delta }) = event {
            if let (Some(on_zoom), Some(position)) =
                (&self.on_zoom, cursor.position_in(layout.bounds()))
            {
                let steps = scroll_steps(delta);
                if steps.abs() > f32::EPSILON {
                    shell.publish(on_zoom(steps, position));
                    shell.capture_event();
                }
            }
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<WheelZoomArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: WheelZoomArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

pub fn wheel_zoom_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> WheelZoomArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    WheelZoomArea::new(content)
}

/// Normalizes wheel units (lines vs. pixels) so zooming feels the same
/// across platforms. One notch of a line-based wheel is one step.
#[must_use]
pub fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn line_deltas_are_whole_steps() {
        let delta = mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 };
        assert_abs_diff_eq!(scroll_steps(&delta), -2.0);
    }

    #[test]
    fn pixel_deltas_are_scaled_down() {
        let delta = mouse::ScrollDelta::Pixels { x: 30.0, y: 60.0 };
        assert_abs_diff_eq!(scroll_steps(&delta), 0.5);
    }

    #[test]
    fn horizontal_only_delta_is_no_step() {
        let delta = mouse::ScrollDelta::Lines { x: 3.0, y: 0.0 };
        assert_abs_diff_eq!(scroll_steps(&delta), 0.0);
    }
}
