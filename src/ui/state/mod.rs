// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that changes over time independently of user input lives here,
//! separate from the components that render it.

pub mod transition;

pub use transition::{CubicBezier, SlideTransition, EASE_IN_OUT};
