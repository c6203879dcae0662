// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::ui::StyleClass;
use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Rounded frame around the image strip.
///
/// The `Bordered` variant adds a thin border derived from the theme.
pub fn viewport(style_class: StyleClass) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let border = match style_class {
            StyleClass::Bordered => Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            StyleClass::Default | StyleClass::Compact => Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
        };

        container::Style {
            border,
            ..Default::default()
        }
    }
}

/// Semi-transparent black banner with white text at the bottom of a slide.
pub fn caption_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_banner_is_half_transparent_black() {
        let style = caption_banner(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert_eq!(bg.a, opacity::OVERLAY_MEDIUM);
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn only_bordered_viewport_has_border_width() {
        let theme = Theme::Dark;
        assert_eq!(viewport(StyleClass::Default)(&theme).border.width, 0.0);
        assert_eq!(viewport(StyleClass::Compact)(&theme).border.width, 0.0);
        assert_eq!(
            viewport(StyleClass::Bordered)(&theme).border.width,
            border::WIDTH_SM
        );
    }
}
