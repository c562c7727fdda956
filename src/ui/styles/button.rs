// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary action button (the empty state's "Open image").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => filled(palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => button::Style::default(),
    }
}

fn filled(background: Color, border: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_lightens_primary() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let hovered = primary(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
        assert_eq!(hovered.text_color, WHITE);
    }
}
