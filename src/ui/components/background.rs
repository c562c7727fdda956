// SPDX-License-Identifier: MPL-2.0
//! Backgrounds drawn behind the surface, one per [`BackgroundTheme`].

use crate::config::BackgroundTheme;
use crate::ui::design_tokens::surface;
use iced::widget::{canvas, container, Container, Stack};
use iced::{mouse, Background, Color, Element, Length, Point, Rectangle, Size, Theme};

/// Checkerboard pattern, useful for judging transparent images.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkerboard;

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), surface::CHECKER_LIGHT);

        let (cols, rows) = tile_grid(bounds.size());
        for row in 0..rows {
            for col in 0..cols {
                if tile_color(row, col) != surface::CHECKER_DARK {
                    continue;
                }
                frame.fill_rectangle(
                    Point::new(col as f32 * surface::CHECKER_TILE, row as f32 * surface::CHECKER_TILE),
                    // Slight overlap hides seams between tiles.
                    Size::new(surface::CHECKER_TILE + 0.5, surface::CHECKER_TILE + 0.5),
                    surface::CHECKER_DARK,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Number of tile columns and rows needed to cover `size`.
fn tile_grid(size: Size) -> (u32, u32) {
    let cols = (size.width / surface::CHECKER_TILE).ceil().max(1.0) as u32;
    let rows = (size.height / surface::CHECKER_TILE).ceil().max(1.0) as u32;
    (cols, rows)
}

fn tile_color(row: u32, col: u32) -> Color {
    if (row + col) % 2 == 0 {
        surface::CHECKER_LIGHT
    } else {
        surface::CHECKER_DARK
    }
}

/// Places `content` over the background selected by `theme`.
pub fn wrap<'a, Message: 'a>(
    theme: BackgroundTheme,
    content: Container<'a, Message>,
) -> Element<'a, Message> {
    match theme {
        BackgroundTheme::Light => solid(content, surface::LIGHT),
        BackgroundTheme::Dark => solid(content, surface::DARK),
        BackgroundTheme::Checkerboard => Stack::new()
            .push(
                canvas::Canvas::new(Checkerboard)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(content)
            .into(),
    }
}

fn solid<'a, Message: 'a>(content: Container<'a, Message>, color: Color) -> Element<'a, Message> {
    content
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_alternate() {
        assert_eq!(tile_color(0, 0), surface::CHECKER_LIGHT);
        assert_eq!(tile_color(0, 1), surface::CHECKER_DARK);
        assert_eq!(tile_color(1, 0), surface::CHECKER_DARK);
        assert_eq!(tile_color(1, 1), surface::CHECKER_LIGHT);
    }

    #[test]
    fn grid_covers_partial_tiles() {
        assert_eq!(tile_grid(Size::new(50.0, 20.0)), (3, 1));
    }

    #[test]
    fn empty_area_still_has_one_tile() {
        assert_eq!(tile_grid(Size::ZERO), (1, 1));
    }
}
