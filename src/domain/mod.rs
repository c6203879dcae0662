// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core carousel logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) so the
//! navigation arithmetic and render model can be tested without a window.
//!
//! # Modules
//!
//! - [`carousel`]: Carousel data model ([`CarouselItem`](carousel::CarouselItem),
//!   [`CarouselState`](carousel::CarouselState), [`CarouselLayout`](carousel::CarouselLayout))
//! - [`ui`]: UI value objects ([`TransitionDuration`](ui::newtypes::TransitionDuration),
//!   [`ImageHeight`](ui::newtypes::ImageHeight), [`StyleClass`](ui::newtypes::StyleClass))

pub mod carousel;
pub mod ui;
