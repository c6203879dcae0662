// SPDX-License-Identifier: MPL-2.0
//! Chevron icons for the navigation arrows.
//!
//! Icons are small inline SVG documents. Handles are created once and cached
//! using `OnceLock`, then tinted at draw time through [`tinted`].

use crate::ui::design_tokens::sizing;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory(chevron_svg($path)));
            Svg::new(handle.clone())
        }
    };
}

/// Wraps a 24x24 stroked path in an SVG document.
fn chevron_svg(path: &str) -> Vec<u8> {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="{path}"/></svg>"#
    )
    .into_bytes()
}

define_icon!(chevron_left, "M15 19l-7-7 7-7", "Chevron pointing left.");
define_icon!(chevron_right, "M9 5l7 7-7 7", "Chevron pointing right.");

/// Sizes an icon for use inside a navigation arrow and paints it `color`.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.width(Length::Fixed(sizing::NAV_ICON))
        .height(Length::Fixed(sizing::NAV_ICON))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chevron_svg_embeds_path() {
        let doc = String::from_utf8(chevron_svg("M9 5l7 7-7 7")).unwrap();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"d="M9 5l7 7-7 7""#));
        assert!(doc.contains(r#"viewBox="0 0 24 24""#));
    }
}
