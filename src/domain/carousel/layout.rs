// SPDX-License-Identifier: MPL-2.0
//! Framework-independent render model of the carousel.
//!
//! [`CarouselLayout::build`] is a pure function of the items and the
//! navigation state. The Iced view turns the result into widgets, and tests
//! inspect it directly.

use super::{CarouselItem, CarouselState};

/// What the carousel shows for a given `(items, state)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselLayout<'a> {
    /// One entry per item, in strip order.
    pub slides: Vec<SlideLayout<'a>>,
    /// Resting offset of the strip, in slide widths, towards the left.
    pub target_offset: f32,
    /// Previous/next arrows. `None` when there is at most one item.
    pub navigation: Option<NavigationControls>,
    /// Position dots. Empty when there is at most one item.
    pub indicators: Vec<Indicator>,
}

/// A single slide in the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideLayout<'a> {
    pub index: usize,
    pub source: &'a str,
    pub alt_text: &'a str,
    /// Present only for non-blank captions.
    pub caption: Option<&'a str>,
}

/// Arrow controls and the slide each one leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationControls {
    pub previous_target: usize,
    pub next_target: usize,
}

/// One position dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Zero-based slide index, used for navigation.
    pub index: usize,
    /// Whether this dot marks the displayed slide.
    pub active: bool,
}

impl Indicator {
    /// One-based number used in labels.
    #[must_use]
    pub fn slide_number(&self) -> usize {
        self.index + 1
    }
}

impl<'a> CarouselLayout<'a> {
    /// Derives the render model.
    ///
    /// `state` is expected to index into `items`; if the lengths ever
    /// disagree, `items` wins and the index is clamped.
    #[must_use]
    pub fn build(items: &'a [CarouselItem], state: &CarouselState) -> Self {
        let len = items.len();
        debug_assert_eq!(len, state.len(), "carousel state out of sync with items");

        let current = if len == 0 {
            0
        } else {
            state.current_index().min(len - 1)
        };

        let slides = items
            .iter()
            .enumerate()
            .map(|(index, item)| SlideLayout {
                index,
                source: item.source(),
                alt_text: item.alt_text(),
                caption: item.caption(),
            })
            .collect();

        let (navigation, indicators) = if len > 1 {
            let previous_target = (current + len - 1) % len;
            let next_target = (current + 1) % len;

            let indicators = (0..len)
                .map(|index| Indicator {
                    index,
                    active: index == current,
                })
                .collect();

            (
                Some(NavigationControls {
                    previous_target,
                    next_target,
                }),
                indicators,
            )
        } else {
            (None, Vec::new())
        };

        #[allow(clippy::cast_precision_loss)] // slide counts are tiny
        let target_offset = current as f32;

        Self {
            slides,
            target_offset,
            navigation,
            indicators,
        }
    }

    /// Index of the active indicator, if indicators are shown.
    #[must_use]
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().find(|i| i.active).map(|i| i.index)
    }

    /// Returns true when the carousel has nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
