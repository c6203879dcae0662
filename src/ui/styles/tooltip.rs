// SPDX-License-Identifier: MPL-2.0
//! Tooltips carrying the text labels of carousel controls.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip surface contrasting with the theme background.
///
/// Dark themes get a light bubble and light themes a dark one.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (palette::WHITE, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::WHITE)
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps a control with its label shown on hover.
///
/// ```ignore
/// tooltip::styled(arrow, i18n.tr("carousel-next-image"), tooltip::Position::Left)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bubble = Container::new(Text::new(label.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, bubble, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_uses_dark_tooltip() {
        let style = tooltip_container(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_900)));
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn dark_theme_uses_light_tooltip() {
        let style = tooltip_container(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::WHITE)));
        assert_eq!(style.text_color, Some(palette::GRAY_900));
    }

    #[test]
    fn tooltip_container_has_shadow() {
        assert!(tooltip_container(&Theme::Light).shadow.blur_radius > 0.0);
    }
}
