// SPDX-License-Identifier: MPL-2.0
//! Image carousel component.
//!
//! The carousel follows the "state down, messages up" pattern: the host owns
//! a [`State`], forwards [`Message`]s to [`State::update`], renders it with
//! [`view`] and merges [`State::subscription`] into its own subscriptions so
//! slide changes animate.
//!
//! ```ignore
//! let carousel = carousel::State::new(items).with_style_class(StyleClass::Bordered);
//! carousel::view(&carousel, &i18n).map(AppMessage::Carousel)
//! ```

pub mod component;
pub mod view;

pub use component::{Effect, Message, State};
pub use view::{view, ControlLabels};
