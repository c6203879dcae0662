// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Transition**: Slide animation duration and tick rate
//! - **Layout**: Image height bounds
//! - **Locale**: Fallback language

use crate::domain::ui::newtypes::{image_height_bounds, transition_bounds};

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default slide transition duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: u32 = transition_bounds::DEFAULT_MS;

/// Minimum transition duration (0 disables the animation).
pub const MIN_TRANSITION_MS: u32 = transition_bounds::MIN_MS;

/// Maximum transition duration in milliseconds.
pub const MAX_TRANSITION_MS: u32 = transition_bounds::MAX_MS;

/// Interval between animation frames while a slide transition runs.
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default maximum image height in logical pixels.
pub const DEFAULT_MAX_IMAGE_HEIGHT: f32 = image_height_bounds::DEFAULT;

/// Minimum allowed maximum image height.
pub const MIN_MAX_IMAGE_HEIGHT: f32 = image_height_bounds::MIN;

/// Upper bound for the maximum image height.
pub const MAX_MAX_IMAGE_HEIGHT: f32 = image_height_bounds::MAX;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_TRANSITION_MS >= DEFAULT_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(ANIMATION_TICK_MS > 0);
    assert!((ANIMATION_TICK_MS as u32) < DEFAULT_TRANSITION_MS);

    assert!(MIN_MAX_IMAGE_HEIGHT > 0.0);
    assert!(DEFAULT_MAX_IMAGE_HEIGHT >= MIN_MAX_IMAGE_HEIGHT);
    assert!(DEFAULT_MAX_IMAGE_HEIGHT <= MAX_MAX_IMAGE_HEIGHT);
};
