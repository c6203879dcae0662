// SPDX-License-Identifier: MPL-2.0
//! Carousel domain types.
//!
//! The carousel is modeled as an immutable list of [`CarouselItem`]s, a
//! [`CarouselState`] holding the index of the displayed item, and a
//! [`CarouselLayout`] derived from both on every render.

pub mod item;
pub mod layout;
pub mod state;

pub use item::CarouselItem;
pub use layout::{CarouselLayout, Indicator, NavigationControls, SlideLayout};
pub use state::{CarouselState, IndexOutOfRange};
