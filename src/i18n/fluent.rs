// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed message lookup.
//!
//! Locale files are embedded at compile time from `assets/i18n/`, one
//! `<locale>.ftl` per supported language. UI components never hold raw
//! strings; they hold Fluent keys resolved through [`I18n::tr`] at render
//! time, so a locale switch repaints everything.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Loaded Fluent bundles plus the active locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the startup locale.
    ///
    /// Locale precedence: the `--lang` CLI flag, then the config file, then
    /// the OS locale, then `en-US`. A candidate only wins if a bundle for it
    /// actually exists.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).expect("Failed to parse FTL file.");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.add_resource(resource).expect("Failed to add resource.");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves `key` in the active locale.
    ///
    /// A missing key or formatting error yields a visibly broken
    /// `MISSING: <key>` string rather than a panic.
    pub fn tr(&self, key: &str) -> String {
        let resolved = self.bundles.get(&self.current_locale).and_then(|bundle| {
            let pattern = bundle.get_message(key)?.value()?;
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, None, &mut errors);
            errors.is_empty().then(|| value.to_string())
        });

        resolved.unwrap_or_else(|| format!("MISSING: {}", key))
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = cli_lang
        .into_iter()
        .chain(config.language.clone())
        .chain(sys_locale::get_locale());

    candidates
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_resolves_known_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("window-title"), "ALTER//EGO");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn cli_lang_overrides_config() {
        let config = Config {
            language: Some("en-US".to_string()),
            animation: Some(true),
        };
        let i18n = I18n::new(Some("fr".to_string()), &config);
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn unknown_cli_lang_falls_back_to_config() {
        let config = Config {
            language: Some("fr".to_string()),
            animation: Some(true),
        };
        let i18n = I18n::new(Some("zz-ZZ".to_string()), &config);
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn set_locale_ignores_unavailable_locales() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("zz-ZZ".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }

    #[test]
    fn both_locales_translate_the_toast() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(i18n.tr("toast-added-to-cart"), "Added to cart");
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.tr("toast-added-to-cart"), "Ajouté au panier");
    }
}
