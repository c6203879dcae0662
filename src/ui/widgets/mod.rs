// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod slide_strip;

pub use slide_strip::{slide_strip, SlideStrip};
