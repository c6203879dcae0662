// SPDX-License-Identifier: MPL-2.0
//! A single image entry displayed by the carousel.

/// One image of the carousel.
///
/// Items are supplied by the host and never mutated by the carousel.
/// `source` is opaque to the component: the host decides whether it is a
/// file path or a URL and how it is turned into pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    source: String,
    alt_text: String,
    caption: Option<String>,
}

impl CarouselItem {
    /// Creates an item without caption.
    #[must_use]
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
            caption: None,
        }
    }

    /// Attaches a caption. Blank captions are stored as absent.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = normalize_caption(Some(caption.into()));
        self
    }

    /// Sets or clears the caption from an optional value.
    #[must_use]
    pub fn with_optional_caption(mut self, caption: Option<String>) -> Self {
        self.caption = normalize_caption(caption);
        self
    }

    /// Reference to the image data (path or URL).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text describing the image.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Caption shown in the bottom banner, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

fn normalize_caption(caption: Option<String>) -> Option<String> {
    caption.filter(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_no_caption() {
        let item = CarouselItem::new("a.jpg", "A");
        assert_eq!(item.source(), "a.jpg");
        assert_eq!(item.alt_text(), "A");
        assert!(item.caption().is_none());
    }

    #[test]
    fn caption_is_kept_when_present() {
        let item = CarouselItem::new("a.jpg", "A").with_caption("Sunset");
        assert_eq!(item.caption(), Some("Sunset"));
    }

    #[test]
    fn blank_caption_is_treated_as_absent() {
        assert!(CarouselItem::new("a.jpg", "A")
            .with_caption("")
            .caption()
            .is_none());
        assert!(CarouselItem::new("a.jpg", "A")
            .with_caption("   ")
            .caption()
            .is_none());
        assert!(CarouselItem::new("a.jpg", "A")
            .with_optional_caption(None)
            .caption()
            .is_none());
    }
}
