// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{scrollable, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a carousel::State,
    pub notices: &'a [String],
}

/// Renders startup notices followed by the carousel, or the empty state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = if ctx.carousel.is_empty() {
        empty_state(ctx.i18n)
    } else {
        carousel::view(ctx.carousel, ctx.i18n).map(Message::Carousel)
    };

    let content = ctx
        .notices
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, notice| {
            column.push(
                Text::new(notice.as_str())
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
        })
        .push(body)
        .width(Length::Fill);

    Container::new(scrollable(
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    Container::new(
        Text::new(i18n.tr("carousel-empty"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}
