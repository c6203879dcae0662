// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.

use crate::config::ANIMATION_TICK_MS;
use crate::domain::carousel::{CarouselItem, CarouselLayout, CarouselState};
use crate::domain::ui::{ImageHeight, StyleClass, TransitionDuration};
use crate::ui::state::SlideTransition;
use iced::widget::image;
use iced::Subscription;
use std::time::{Duration, Instant};

/// Messages emitted by the carousel controls and its animation clock.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    /// Jump to the slide at this zero-based index.
    GoTo(usize),
    /// Animation frame.
    Tick(Instant),
}

/// Side effects the host may react to after a carousel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The current slide changed to this index.
    SlideChanged(usize),
}

/// Carousel state: the items, the current position and the strip animation.
#[derive(Debug, Clone)]
pub struct State {
    items: Vec<CarouselItem>,
    handles: Vec<image::Handle>,
    position: CarouselState,
    transition: SlideTransition,
    style_class: StyleClass,
    image_height: ImageHeight,
}

impl State {
    /// Creates a carousel showing the first of `items`.
    #[must_use]
    pub fn new(items: Vec<CarouselItem>) -> Self {
        let handles = items
            .iter()
            .map(|item| image::Handle::from_path(item.source()))
            .collect();
        let position = CarouselState::new(items.len());

        Self {
            items,
            handles,
            position,
            transition: SlideTransition::new(TransitionDuration::default(), 0.0),
            style_class: StyleClass::default(),
            image_height: ImageHeight::default(),
        }
    }

    #[must_use]
    pub fn with_style_class(mut self, style_class: StyleClass) -> Self {
        self.style_class = style_class;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, duration: TransitionDuration) -> Self {
        self.transition = SlideTransition::new(duration, self.transition.current());
        self
    }

    #[must_use]
    pub fn with_image_height(mut self, image_height: ImageHeight) -> Self {
        self.image_height = image_height;
        self
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub(super) fn handles(&self) -> &[image::Handle] {
        &self.handles
    }

    /// Zero-based index of the slide being shown or transitioned to.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.position.current_index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn style_class(&self) -> StyleClass {
        self.style_class
    }

    #[must_use]
    pub fn image_height(&self) -> ImageHeight {
        self.image_height
    }

    /// On-screen strip offset in slide widths.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.transition.current()
    }

    /// Returns true while the strip is sliding.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Render model for the current position.
    #[must_use]
    pub fn layout(&self) -> CarouselLayout<'_> {
        CarouselLayout::build(&self.items, &self.position)
    }

    /// Handles a message using the wall clock for new transitions.
    pub fn update(&mut self, message: Message) -> Effect {
        self.handle(message, Instant::now())
    }

    /// Handles a message, starting any transition at `now`.
    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        let before = self.position.current_index();

        match message {
            Message::Previous => self.position.go_to_previous(),
            Message::Next => self.position.go_to_next(),
            Message::GoTo(index) => {
                if let Err(err) = self.position.go_to_index(index) {
                    tracing::warn!(%err, "ignoring slide jump");
                    return Effect::None;
                }
            }
            Message::Tick(instant) => {
                self.transition.tick(instant);
                if !self.transition.is_animating() {
                    tracing::trace!(offset = self.transition.current(), "slide transition settled");
                }
                return Effect::None;
            }
        }

        let after = self.position.current_index();
        if after == before {
            return Effect::None;
        }

        #[allow(clippy::cast_precision_loss)] // slide counts are tiny
        let target = after as f32;
        self.transition.retarget(target, now);
        tracing::debug!(from = before, to = after, "carousel slide changed");
        Effect::SlideChanged(after)
    }

    /// Animation clock, active only while a transition is in flight.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.transition.is_animating() {
            iced::time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
