// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::surface;
use iced::{
    alignment::{Horizontal, Vertical},
    mouse,
    widget::{mouse_area, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub surface: &'a surface::State,
    /// Localization key of a notice to show above the surface.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface_view = Container::new(ctx.surface.view(ctx.i18n).map(Message::Surface))
        .width(Length::Fill)
        .height(Length::Fill);

    let Some(key) = ctx.notice else {
        return surface_view.into();
    };

    let content = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        .push(Text::new("×").size(typography::BODY));

    let notice = mouse_area(
        Container::new(content)
            .padding([spacing::XS, spacing::SM])
            .style(styles::overlay::indicator(radius::MD)),
    )
    .on_press(Message::DismissNotice)
    .interaction(mouse::Interaction::Pointer);

    Stack::new()
        .push(surface_view)
        .push(
            Container::new(notice)
                .width(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Top),
        )
        .into()
}
