// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the surface, its overlays and the empty state.
//!
//! - **Palette**: base colors
//! - **Surface**: backgrounds drawn behind the image
//! - **Opacity**: overlay transparency levels
//! - **Spacing**: 8px-grid spacing scale
//! - **Typography**: font size scale
//! - **Radius** and **Shadow**: control shapes
//!
//! ```
//! use zoom_lens::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let overlay_bg = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(overlay_bg.a < 1.0);
//! ```

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

pub mod surface {
    //! Backgrounds for each [`BackgroundTheme`](crate::config::BackgroundTheme).
    use super::palette;
    use iced::Color;

    pub const LIGHT: Color = palette::GRAY_100;
    pub const DARK: Color = palette::GRAY_900;

    /// Checkerboard tiles, alternating.
    pub const CHECKER_LIGHT: Color = palette::GRAY_100;
    pub const CHECKER_DARK: Color = palette::GRAY_200;

    /// Side of one checkerboard tile, in logical pixels.
    pub const CHECKER_TILE: f32 = 20.0;
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Secondary text such as the drop hint.
    pub const HINT: f32 = 0.5;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod typography {
    /// Empty state heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Standard body text, notices.
    pub const BODY: f32 = 14.0;

    /// Zoom indicator, hints.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Notice banner.
    pub const MD: f32 = 8.0;
    /// Zoom indicator pill.
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < 1.0);

    assert!(typography::TITLE_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(surface::CHECKER_TILE > 0.0);
};
