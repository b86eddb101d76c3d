// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and container styles for the explorer board.

use crate::geometry::CenterKind;
use crate::ui::design_tokens::{
    opacity,
    palette::{PRIMARY_200, PRIMARY_400, PRIMARY_500, PRIMARY_700},
};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Color, Theme};

/// Marker color for each center kind. The mapping is fixed and does not
/// follow the light/dark scheme.
pub fn center_color(kind: CenterKind) -> Color {
    match kind {
        CenterKind::Centroid => Color::from_rgb8(0xFF, 0x6B, 0x6B),
        CenterKind::Circumcenter => Color::from_rgb8(0x4E, 0xCD, 0xC4),
        CenterKind::Incenter => Color::from_rgb8(0x45, 0xB7, 0xD1),
        CenterKind::Orthocenter => Color::from_rgb8(0xFF, 0xA0, 0x7A),
    }
}

/// Soft interior fill of the triangle.
pub fn triangle_fill_color() -> Color {
    Color {
        a: opacity::SHAPE_FILL,
        ..PRIMARY_200
    }
}

/// Outline color of the triangle.
pub fn triangle_stroke_color() -> Color {
    PRIMARY_500
}

/// Fill color of an idle vertex handle.
pub fn vertex_color() -> Color {
    PRIMARY_500
}

/// Fill color of a hovered or dragged vertex handle.
pub fn vertex_hover_color() -> Color {
    PRIMARY_400
}

/// Ring color drawn around a hovered or dragged vertex handle.
pub fn vertex_ring_color() -> Color {
    PRIMARY_700
}

/// Style for the bordered drawing surface.
pub fn board_style(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_primary;
    let border_color = scheme.surface_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: border_color,
            width: 4.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the explanatory text panel below the board.
pub fn description_panel_style(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_secondary;
    let text = scheme.text_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background)),
        text_color: Some(text),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
