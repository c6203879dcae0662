// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`carousel`] - Image carousel with arrows, position dots and animated slides
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Time-based state (slide transition easing)
//! - [`widgets`] - Custom Iced widgets (slide strip)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG chevrons for the navigation arrows

pub mod carousel;
pub mod design_tokens;
pub mod icons;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
