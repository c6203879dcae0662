// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for carousel presentation values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// Transition Bounds
// =============================================================================

/// Slide transition duration bounds (0 to 2000 milliseconds).
pub mod transition_bounds {
    /// Minimum duration; zero disables the animation.
    pub const MIN_MS: u32 = 0;
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u32 = 2000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u32 = 500;
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Duration of the sliding animation between two slides.
///
/// # Example
///
/// ```
/// use iced_carousel::domain::ui::TransitionDuration;
///
/// assert_eq!(TransitionDuration::default().millis(), 500);
/// assert_eq!(TransitionDuration::new(10_000).millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u32);

impl TransitionDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true if slides change without animation.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Image Height Bounds
// =============================================================================

/// Maximum image height bounds, in logical pixels.
pub mod image_height_bounds {
    pub const MIN: f32 = 120.0;
    pub const MAX: f32 = 2000.0;
    /// 35rem at a 16px root font size.
    pub const DEFAULT: f32 = 560.0;
}

// =============================================================================
// ImageHeight
// =============================================================================

/// Maximum height of a slide image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageHeight(f32);

impl ImageHeight {
    /// Creates a new height, clamping to the valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_finite() {
            Self(pixels.clamp(image_height_bounds::MIN, image_height_bounds::MAX))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ImageHeight {
    fn default() -> Self {
        Self(image_height_bounds::DEFAULT)
    }
}

// =============================================================================
// StyleClass
// =============================================================================

/// Cosmetic variant of the carousel frame.
///
/// Only affects padding and borders; navigation behaves identically for
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleClass {
    #[default]
    Default,
    /// Adds a border around the image viewport.
    Bordered,
    /// Tighter spacing around indicators and arrows.
    Compact,
}

impl StyleClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bordered => "bordered",
            Self::Compact => "compact",
        }
    }
}

/// Unrecognized style token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyleClass(pub String);

impl fmt::Display for UnknownStyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown carousel style: {}", self.0)
    }
}

impl std::error::Error for UnknownStyleClass {}

impl FromStr for StyleClass {
    type Err = UnknownStyleClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "default" => Ok(Self::Default),
            "bordered" => Ok(Self::Bordered),
            "compact" => Ok(Self::Compact),
            other => Err(UnknownStyleClass(other.to_string())),
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_duration_clamps_to_max() {
        assert_eq!(
            TransitionDuration::new(u32::MAX).millis(),
            transition_bounds::MAX_MS
        );
    }

    #[test]
    fn transition_duration_zero_is_instant() {
        assert!(TransitionDuration::new(0).is_instant());
        assert!(!TransitionDuration::default().is_instant());
    }

    #[test]
    fn transition_duration_converts_to_duration() {
        assert_eq!(
            TransitionDuration::new(250).as_duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn image_height_clamps_and_rejects_nan() {
        assert_eq!(ImageHeight::new(10.0).value(), image_height_bounds::MIN);
        assert_eq!(ImageHeight::new(1e6).value(), image_height_bounds::MAX);
        assert_eq!(ImageHeight::new(f32::NAN), ImageHeight::default());
        assert_eq!(ImageHeight::new(400.0).value(), 400.0);
    }

    #[test]
    fn style_class_parses_known_tokens() {
        assert_eq!("bordered".parse::<StyleClass>(), Ok(StyleClass::Bordered));
        assert_eq!(" Compact ".parse::<StyleClass>(), Ok(StyleClass::Compact));
        assert_eq!("".parse::<StyleClass>(), Ok(StyleClass::Default));
    }

    #[test]
    fn style_class_unknown_token_reports_token() {
        assert_eq!(
            "Fancy".parse::<StyleClass>(),
            Err(UnknownStyleClass("fancy".to_string()))
        );
    }

    #[test]
    fn style_class_display_round_trips() {
        for class in [StyleClass::Default, StyleClass::Bordered, StyleClass::Compact] {
            assert_eq!(class.to_string().parse::<StyleClass>(), Ok(class));
        }
    }
}
