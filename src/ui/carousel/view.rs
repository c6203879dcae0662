// SPDX-License-Identifier: MPL-2.0
//! Rendering of the carousel: image strip, arrows and position dots.

use super::component::{Message, State};
use crate::domain::carousel::{CarouselLayout, Indicator, SlideLayout};
use crate::domain::ui::StyleClass;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::slide_strip;
use iced::widget::{button, image, tooltip, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Text labels of every interactive control, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlLabels {
    pub previous: Option<String>,
    pub next: Option<String>,
    pub indicators: Vec<String>,
}

impl ControlLabels {
    /// Localizes the labels for the controls present in `layout`.
    #[must_use]
    pub fn for_layout(layout: &CarouselLayout<'_>, i18n: &I18n) -> Self {
        let arrows = layout.navigation.is_some();
        Self {
            previous: arrows.then(|| i18n.tr("carousel-previous-image")),
            next: arrows.then(|| i18n.tr("carousel-next-image")),
            indicators: layout
                .indicators
                .iter()
                .map(|indicator| indicator_label(indicator, i18n))
                .collect(),
        }
    }
}

fn indicator_label(indicator: &Indicator, i18n: &I18n) -> String {
    i18n.tr_with_number("carousel-go-to-slide", "number", indicator.slide_number())
}

/// Renders the carousel. An empty carousel renders as an empty column.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let layout = state.layout();
    if layout.is_empty() {
        return Column::new().into();
    }
    let labels = ControlLabels::for_layout(&layout, i18n);
    let max_height = state.image_height().value();

    let slides = layout
        .slides
        .iter()
        .zip(state.handles())
        .map(|(slide, handle)| slide_view(slide, handle.clone(), max_height))
        .collect();

    let strip = slide_strip(slides, state.offset()).height(Length::Shrink);
    let mut viewport = Stack::new().width(Length::Fill).push(strip);

    if let (Some(previous), Some(next)) = (labels.previous, labels.next) {
        let prev_arrow = arrow(
            icons::chevron_left(),
            Message::Previous,
            previous,
            tooltip::Position::Right,
        );
        let next_arrow = arrow(
            icons::chevron_right(),
            Message::Next,
            next,
            tooltip::Position::Left,
        );

        viewport = viewport
            .push(edge(prev_arrow, alignment::Horizontal::Left))
            .push(edge(next_arrow, alignment::Horizontal::Right));
    }

    let frame_padding = match state.style_class() {
        StyleClass::Compact => 0.0,
        StyleClass::Default | StyleClass::Bordered => spacing::XXS,
    };
    let frame = Container::new(viewport)
        .width(Length::Fill)
        .padding(frame_padding)
        .clip(true)
        .style(styles::container::viewport(state.style_class()));

    let mut content = Column::new().width(Length::Fill).push(frame);

    if !layout.indicators.is_empty() {
        let dots = layout
            .indicators
            .iter()
            .zip(labels.indicators)
            .fold(Row::new().spacing(spacing::XS), |row, (indicator, label)| {
                row.push(dot(indicator, label))
            })
            .align_y(alignment::Vertical::Center);

        let gap = match state.style_class() {
            StyleClass::Compact => spacing::XS,
            StyleClass::Default | StyleClass::Bordered => spacing::MD,
        };
        content = content.spacing(gap).push(
            Container::new(dots)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );
    }

    content.into()
}

/// One slide: the contained image with an optional caption banner.
fn slide_view<'a>(
    slide: &SlideLayout<'a>,
    handle: image::Handle,
    max_height: f32,
) -> Element<'a, Message> {
    let picture = Container::new(
        Image::new(handle)
            .width(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
    .width(Length::Fill)
    .max_height(max_height)
    .align_x(alignment::Horizontal::Center);

    let picture = styles::tooltip::styled(
        picture,
        slide.alt_text.to_owned(),
        tooltip::Position::FollowCursor,
    );

    let Some(caption) = slide.caption else {
        return picture.into();
    };

    let banner = Container::new(
        Text::new(caption)
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::caption_banner);

    let overlay = Container::new(banner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom);

    Stack::new().push(picture).push(overlay).into()
}

fn arrow<'a>(
    icon: iced::widget::Svg<'static>,
    message: Message,
    label: String,
    position: tooltip::Position,
) -> Element<'a, Message> {
    let control = button(icons::tinted(icon, palette::GRAY_900))
        .padding(spacing::XS)
        .style(styles::button::nav_arrow)
        .on_press(message);

    styles::tooltip::styled(control, label, position).into()
}

/// Pins a control to the left or right edge, vertically centered.
fn edge<'a>(
    control: Element<'a, Message>,
    side: alignment::Horizontal,
) -> Element<'a, Message> {
    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn dot<'a>(indicator: &Indicator, label: String) -> Element<'a, Message> {
    let width = if indicator.active {
        sizing::DOT_ACTIVE_WIDTH
    } else {
        sizing::DOT
    };

    let control = button(Text::new(""))
        .width(Length::Fixed(width))
        .height(Length::Fixed(sizing::DOT))
        .padding(0.0)
        .style(styles::button::indicator(indicator.active))
        .on_press(Message::GoTo(indicator.index));

    styles::tooltip::styled(control, label, tooltip::Position::Bottom).into()
}
