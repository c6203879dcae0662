// SPDX-License-Identifier: MPL-2.0
//! Button styles for carousel controls.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, GRAY_900, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round, translucent white arrow button drawn over the image.
///
/// Fully opaque while hovered or pressed.
pub fn nav_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_HOVER,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: GRAY_900,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Position dot. The active dot is blue; inactive dots are zinc and darken on hover.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::PRIMARY_500
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => palette::ZINC_400,
                _ => palette::ZINC_300,
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
