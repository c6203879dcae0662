// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles keyed by locale.

use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, plus any `.ftl` files found in
    /// `i18n_dir`, and resolves the active locale.
    ///
    /// Files from `i18n_dir` replace embedded ones with the same locale.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(LanguageIdentifier, String)> = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()));
            }
        }

        if let Some(dir) = i18n_dir {
            sources.extend(read_ftl_dir(Path::new(&dir)));
        }

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (locale, content) in sources {
            let Some(bundle) = build_bundle(&locale, content) else {
                continue;
            };
            if !available_locales.contains(&locale) {
                available_locales.push(locale.clone());
            }
            bundles.insert(locale, bundle);
        }
        available_locales.sort_by_key(ToString::to_string);

        let os_locale = sys_locale::get_locale();
        let current_locale = resolve_locale(cli_lang, config, os_locale, &available_locales)
            .unwrap_or_else(default_locale);

        tracing::debug!(locale = %current_locale, "resolved locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key`, or returns `MISSING: <key>`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named text arguments, inserted verbatim.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    /// Translates `key` with a single numeric argument, so plural
    /// selectors see a number.
    #[must_use]
    pub fn tr_with_number(&self, key: &str, name: &str, number: usize) -> String {
        let mut fluent_args = FluentArgs::new();
        fluent_args.set(name, FluentValue::from(number));
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
                tracing::warn!(key, ?errors, "failed to format message");
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn read_ftl_dir(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot read i18n directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|path| {
            let locale = locale_from_filename(path.file_name()?.to_str()?)?;
            let content = std::fs::read_to_string(&path).ok()?;
            Some((locale, content))
        })
        .collect()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    content: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(content) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, ?errors, "skipping unparsable translation file");
            return None;
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Labels are plain text; bidi isolation marks would leak into tooltips
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "translation file has duplicate messages");
    }
    Some(bundle)
}

/// Picks the first supported locale from CLI, config, then OS.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.clone(), os_locale]
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config_when_no_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, Some("en-US".to_string()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_os() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, Some("fr".to_string()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unsupported_entries() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_returns_none_when_nothing_matches() {
        let config = Config::default();
        let lang = resolve_locale(Some("ja".to_string()), &config, Some("de".to_string()), &available());
        assert!(lang.is_none());
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
    }

    #[test]
    fn tr_returns_missing_marker_for_unknown_key() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("does-not-exist"), "MISSING: does-not-exist");
    }

    #[test]
    fn tr_with_number_formats_slide_number() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(
            i18n.tr_with_number("carousel-go-to-slide", "number", 3),
            "Go to slide 3"
        );
    }

    #[test]
    fn tr_with_args_keeps_number_like_text_verbatim() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        for path in ["1.50", "0010", "1e3"] {
            assert_eq!(
                i18n.tr_with_args("gallery-skipped-path", &[("path", path)]),
                format!("Skipped {path}: not an image file or directory")
            );
        }
    }

    #[test]
    fn cli_language_selects_french_bundle() {
        let i18n = I18n::new(Some("fr".to_string()), None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_eq!(i18n.tr("carousel-next-image"), "Image suivante");
    }

    #[test]
    fn custom_directory_overrides_embedded_messages() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("en-US.ftl"),
            "carousel-next-image = Forward\n",
        )
        .expect("write ftl");

        let i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("carousel-next-image"), "Forward");
    }
}
