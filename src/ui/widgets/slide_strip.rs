// SPDX-License-Identifier: MPL-2.0
//! A horizontal strip of full-width slides shifted by a fractional offset.
//!
//! Every slide gets the full width of the strip. Slide `i` is placed at
//! `(i - offset) * width`, so an offset of `1.0` shows the second slide and
//! `0.5` shows half of the first and half of the second. Content outside the
//! strip bounds is clipped.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size, Vector};
use std::ops::Range;

/// Slides laid out side by side, translated left by `offset` slide widths.
pub struct SlideStrip<'a, Message, Theme, Renderer> {
    slides: Vec<Element<'a, Message, Theme, Renderer>>,
    offset: f32,
    width: Length,
    height: Length,
}

impl<'a, Message, Theme, Renderer> SlideStrip<'a, Message, Theme, Renderer> {
    /// Creates a strip from its slides and the current offset.
    pub fn new(slides: Vec<Element<'a, Message, Theme, Renderer>>, offset: f32) -> Self {
        Self {
            slides,
            offset,
            width: Length::Fill,
            height: Length::Shrink,
        }
    }

    /// Sets the height of the strip. Defaults to the tallest slide.
    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    fn visible(&self) -> Range<usize> {
        visible_slides(self.offset, self.slides.len())
    }
}

/// Horizontal position of slide `index`, relative to the strip.
#[must_use]
pub fn slide_x(index: usize, offset: f32, slide_width: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)] // slide counts are tiny
    let index = index as f32;
    (index - offset) * slide_width
}

/// Indices of the slides that overlap the strip at `offset`.
///
/// At most two slides are ever visible: the one the offset rounds down to
/// and, mid-transition, its right neighbour.
#[must_use]
pub fn visible_slides(offset: f32, len: usize) -> Range<usize> {
    if len == 0 || !offset.is_finite() {
        return 0..0;
    }
    let clamped = offset.clamp(0.0, (len - 1) as f32);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped above
    let first = clamped.floor() as usize;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let last = clamped.ceil() as usize;
    first..(last + 1).min(len)
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SlideStrip<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let max = limits.max();
        let slide_width = max.width;
        let slide_limits = layout::Limits::new(
            Size::new(slide_width, 0.0),
            Size::new(slide_width, max.height),
        );

        let nodes: Vec<layout::Node> = self
            .slides
            .iter_mut()
            .zip(tree.children.iter_mut())
            .map(|(slide, state)| slide.as_widget_mut().layout(state, renderer, &slide_limits))
            .collect();

        let tallest = nodes
            .iter()
            .map(|node| node.size().height)
            .fold(0.0_f32, f32::max);
        let size = limits.resolve(self.width, self.height, Size::new(slide_width, tallest));

        let offset = self.offset;
        let children = nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let y = ((size.height - node.size().height) / 2.0).max(0.0);
                node.move_to(Point::new(slide_x(index, offset, size.width), y))
            })
            .collect();

        layout::Node::with_children(size, children)
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.slides.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.slides);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };
        let visible = self.visible();

        renderer.with_layer(clip, |renderer| {
            for (index, ((slide, state), child)) in self
                .slides
                .iter()
                .zip(&tree.children)
                .zip(layout.children())
                .enumerate()
            {
                if visible.contains(&index) {
                    slide
                        .as_widget()
                        .draw(state, renderer, theme, style, child, cursor, &clip);
                }
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let visible = self.visible();
        for (index, ((slide, state), child)) in self
            .slides
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
            .enumerate()
        {
            if visible.contains(&index) {
                slide.as_widget_mut().update(
                    state, event, child, cursor, renderer, clipboard, shell, viewport,
                );
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let visible = self.visible();
        self.slides
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .enumerate()
            .filter(|(index, _)| visible.contains(index))
            .map(|(_, ((slide, state), child))| {
                slide
                    .as_widget()
                    .mouse_interaction(state, child, cursor, viewport, renderer)
            })
            .max()
            .unwrap_or_default()
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        for ((slide, state), child) in self
            .slides
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
        {
            slide
                .as_widget_mut()
                .operate(state, child, renderer, operation);
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        overlay::from_children(
            &mut self.slides,
            tree,
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SlideStrip<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(strip: SlideStrip<'a, Message, Theme, Renderer>) -> Self {
        Self::new(strip)
    }
}

/// Helper function to create a slide strip.
pub fn slide_strip<'a, Message, Theme, Renderer>(
    slides: Vec<Element<'a, Message, Theme, Renderer>>,
    offset: f32,
) -> SlideStrip<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SlideStrip::new(slides, offset)
}
