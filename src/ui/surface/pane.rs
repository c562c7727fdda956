// SPDX-License-Identifier: MPL-2.0
//! Surface pane that renders the zoomed image inside the scrollable area with
//! the configured background, cursor interaction, and a zoom indicator.

use super::component::Message;
use super::empty_state;
use super::geometry;
use super::model::ZoomSurface;
use crate::config::BackgroundTheme;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::components::background;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::wheel_zoom_area;
use iced::mouse;
use iced::widget::{image, mouse_area, responsive, Container, Scrollable, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::scrollable::{Direction, Scrollbar, Viewport},
    widget::Id,
    ContentFit, Element, Length, Padding, Size,
};

pub struct ViewContext<'a> {
    pub background_theme: BackgroundTheme,
    pub scrollable_id: &'static str,
    pub i18n: &'a I18n,
    pub surface: &'a ZoomSurface,
    pub is_dragging: bool,
    pub cursor_over_viewport: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let Some(image) = ctx.surface.image() else {
        return empty_state::view(ctx.i18n);
    };

    // Layout follows the size actually available, even before the
    // scrollable has reported its bounds.
    responsive(move |available_size: Size| view_inner(&ctx, image, available_size)).into()
}

fn view_inner<'a>(
    ctx: &ViewContext<'a>,
    image_data: &'a ImageData,
    available_size: Size,
) -> Element<'a, Message> {
    let scale = ctx.surface.scale();
    let fitted = geometry::fitted_size(image_data.size(), available_size);
    let content = geometry::content_size(fitted, scale);
    let insets: Padding = geometry::centering_insets(available_size, content);

    let image_view = image(image_data.handle.clone())
        .width(Length::Fixed(content.width))
        .height(Length::Fixed(content.height))
        .content_fit(ContentFit::Fill);

    let image_container = Container::new(image_view).padding(insets);

    let scrollable = Scrollable::new(image_container)
        .id(Id::new(ctx.scrollable_id))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let zoom_area = wheel_zoom_area(scrollable)
        .on_zoom(|steps, anchor| Message::WheelZoom { steps, anchor });

    let cursor_interaction = if ctx.is_dragging {
        mouse::Interaction::Grabbing
    } else if ctx.cursor_over_viewport && !scale.is_min() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    };

    let surface_with_cursor = mouse_area(zoom_area).interaction(cursor_interaction);

    let surface_container = Container::new(surface_with_cursor)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let base_surface = background::wrap(ctx.background_theme, surface_container);

    let percent = format!("{:.0}", scale.as_percent());
    let indicator = Container::new(
        Text::new(ctx.i18n.tr_with_args("zoom-indicator", &[("percent", percent.as_str())]))
            .size(typography::CAPTION),
    )
    .padding(Padding {
        top: spacing::XXS,
        right: spacing::XS,
        bottom: spacing::XXS,
        left: spacing::XS,
    })
    .style(styles::overlay::indicator(radius::LG));

    Stack::new()
        .push(base_surface)
        .push(
            Container::new(indicator)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom),
        )
        .into()
}
