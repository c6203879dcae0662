// SPDX-License-Identifier: MPL-2.0
//! Application root state hosting a single carousel.
//!
//! The `App` struct wires the carousel to localization and persisted
//! preferences, and collects the items to show from the command line.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::carousel::CarouselItem;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    carousel: carousel::State,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `System` is not re-detected per frame.
    theme: Theme,
    /// Localized startup problems shown above the carousel.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.carousel.len())
            .field("current_index", &self.carousel.current_index())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a reusable boot function
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            carousel: carousel::State::default(),
            theme_mode: ThemeMode::System,
            theme: ThemeMode::System.to_iced_theme(),
            notices: Vec::new(),
        }
    }
}

impl App {
    /// Loads settings from disk and builds the application from `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags, &config);

        if let Some(key) = config_warning {
            app.notices.insert(0, app.i18n.tr(&key));
        }

        tracing::info!(
            items = app.carousel.len(),
            locale = %app.i18n.current_locale(),
            transition_ms = config.carousel.transition().millis(),
            "carousel ready"
        );

        (app, Task::none())
    }

    /// Builds the application from already loaded settings.
    pub fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), config);
        let (items, notices) = collect_items(&flags, &i18n);

        let carousel = carousel::State::new(items)
            .with_style_class(config.carousel.style_class())
            .with_transition(config.carousel.transition())
            .with_image_height(config.carousel.image_height());

        Self {
            i18n,
            carousel,
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.to_iced_theme(),
            notices,
        }
    }

    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.carousel.is_empty() {
            return app_name;
        }
        format!(
            "{app_name} ({}/{})",
            self.carousel.current_index() + 1,
            self.carousel.len()
        )
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.carousel.subscription().map(Message::Carousel)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(message) => match self.carousel.update(message) {
                carousel::Effect::SlideChanged(index) => {
                    tracing::trace!(index, "slide shown");
                }
                carousel::Effect::None => {}
            },
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            carousel: &self.carousel,
            notices: &self.notices,
        })
    }
}

/// Gathers manifest items then path items, with localized notices for
/// anything that could not be used.
fn collect_items(flags: &Flags, i18n: &I18n) -> (Vec<CarouselItem>, Vec<String>) {
    let mut items = Vec::new();
    let mut notices = Vec::new();

    if let Some(manifest) = &flags.manifest {
        match gallery::load_manifest(manifest) {
            Ok(loaded) => items.extend(loaded),
            Err(err) => {
                tracing::warn!(path = %manifest.display(), %err, "manifest not loaded");
                let error = err.to_string();
                notices.push(
                    i18n.tr_with_args("gallery-manifest-error", &[("error", error.as_str())]),
                );
            }
        }
    }

    let (from_paths, skipped) = gallery::items_from_paths(&flags.paths);
    items.extend(from_paths);

    for path in skipped {
        tracing::warn!(path = %path.display(), "skipping path");
        let path = path.display().to_string();
        notices.push(i18n.tr_with_args(
            "gallery-skipped-path",
            &[("path", path.as_str())],
        ));
    }

    (items, notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    fn app_with_images(names: &[&str]) -> (App, tempfile::TempDir) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in names {
            fs::write(temp_dir.path().join(name), b"fake image data")
                .expect("failed to write test file");
        }
        let flags = Flags {
            paths: vec![temp_dir.path().to_path_buf()],
            ..english()
        };
        (App::with_config(flags, &Config::default()), temp_dir)
    }

    #[test]
    fn default_app_has_empty_carousel() {
        let app = App::default();
        assert!(app.carousel().is_empty());
        assert!(app.notices().is_empty());
    }

    #[test]
    fn title_shows_app_name_when_empty() {
        let app = App::with_config(english(), &Config::default());
        assert_eq!(app.title(), "Iced Carousel");
    }

    #[test]
    fn title_tracks_current_slide() {
        let (mut app, _dir) = app_with_images(&["a.png", "b.png", "c.png"]);
        assert_eq!(app.title(), "Iced Carousel (1/3)");

        let _ = app.update(Message::Carousel(carousel::Message::Previous));
        assert_eq!(app.title(), "Iced Carousel (3/3)");
    }

    #[test]
    fn config_settings_reach_the_carousel() {
        let mut config = Config::default();
        config.carousel.style = Some("compact".to_string());
        config.carousel.transition_ms = Some(0);
        config.general.theme_mode = ThemeMode::Dark;

        let (_, dir) = app_with_images(&["a.png", "b.png"]);
        let flags = Flags {
            paths: vec![dir.path().to_path_buf()],
            ..english()
        };
        let mut app = App::with_config(flags, &config);

        assert_eq!(
            app.carousel().style_class(),
            crate::domain::ui::StyleClass::Compact
        );
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::Carousel(carousel::Message::Next));
        assert!(!app.carousel().is_animating());
        assert_eq!(app.carousel().offset(), 1.0);
    }

    #[test]
    fn unusable_paths_become_notices() {
        let flags = Flags {
            paths: vec![PathBuf::from("/definitely/not/here.png")],
            ..english()
        };
        let app = App::with_config(flags, &Config::default());
        assert!(app.carousel().is_empty());
        assert_eq!(app.notices().len(), 1);
        assert!(app.notices()[0].starts_with("Skipped /definitely/not/here.png"));
    }

    #[test]
    fn number_like_skipped_paths_are_reported_verbatim() {
        let flags = Flags {
            paths: vec![PathBuf::from("1.50"), PathBuf::from("0010")],
            ..english()
        };
        let app = App::with_config(flags, &Config::default());
        assert_eq!(
            app.notices(),
            [
                "Skipped 1.50: not an image file or directory",
                "Skipped 0010: not an image file or directory",
            ]
        );
    }

    #[test]
    fn system_theme_is_resolved_at_startup() {
        let app = App::with_config(english(), &Config::default());
        assert_eq!(app.theme_mode, ThemeMode::System);
        assert!(matches!(app.theme, Theme::Light | Theme::Dark));
        assert_eq!(app.theme(), app.theme);
    }

    #[test]
    fn broken_manifest_becomes_notice_and_paths_still_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest = temp_dir.path().join("gallery.toml");
        fs::write(&manifest, "[[items]\nsource = ").expect("failed to write manifest");
        fs::write(temp_dir.path().join("a.png"), b"fake").expect("failed to write image");

        let flags = Flags {
            manifest: Some(manifest),
            paths: vec![temp_dir.path().join("a.png")],
            ..english()
        };
        let app = App::with_config(flags, &Config::default());

        assert_eq!(app.carousel().len(), 1);
        assert_eq!(app.notices().len(), 1);
        assert!(app.notices()[0].starts_with("Gallery manifest could not be loaded"));
    }

    #[test]
    fn manifest_items_come_before_path_items() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest = temp_dir.path().join("gallery.toml");
        fs::write(
            &manifest,
            "[[items]]\nsource = \"cover.png\"\nalt = \"Cover\"\ncaption = \"Front\"\n",
        )
        .expect("failed to write manifest");
        fs::write(temp_dir.path().join("z.png"), b"fake").expect("failed to write image");

        let flags = Flags {
            manifest: Some(manifest),
            paths: vec![temp_dir.path().join("z.png")],
            ..english()
        };
        let app = App::with_config(flags, &Config::default());

        let alts: Vec<_> = app
            .carousel()
            .items()
            .iter()
            .map(CarouselItem::alt_text)
            .collect();
        assert_eq!(alts, vec!["Cover", "z"]);
        assert_eq!(app.carousel().items()[0].caption(), Some("Front"));
    }

    #[test]
    fn view_renders_with_and_without_items() {
        let empty = App::with_config(english(), &Config::default());
        let _ = empty.view();

        let (full, _dir) = app_with_images(&["a.png", "b.png"]);
        let _ = full.view();
    }
}
