// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.
//!
//! Translations ship embedded in the binary (`assets/i18n/*.ftl`); an
//! optional directory override lets custom builds and tests supply their
//! own `.ftl` files without recompiling.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the bundle set and resolves the startup locale.
    ///
    /// Locale precedence: CLI flag, then config file, then OS locale,
    /// then `en-US`.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (filename, content) in load_ftl_sources(i18n_dir) {
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    let res = FluentResource::try_new(content)
                        .expect("Failed to parse FTL file.");
                    let mut bundle = FluentBundle::new(vec![locale.clone()]);
                    bundle.add_resource(res).expect("Failed to add resource.");
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
            }
        }

        available_locales.sort_by_key(|locale| locale.to_string());

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Yields `(file name, file content)` pairs for every translation source,
/// from the override directory when given, otherwise from the embedded set.
fn load_ftl_sources(i18n_dir: Option<String>) -> Vec<(String, String)> {
    if let Some(dir) = i18n_dir {
        let mut sources = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&dir) {
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().into_owned();
                if name.ends_with(".ftl") {
                    if let Ok(content) = std::fs::read_to_string(entry.path()) {
                        sources.push((name, content));
                    }
                }
            }
        }
        return sources;
    }

    Asset::iter()
        .filter_map(|file| {
            let filename = file.as_ref().to_string();
            Asset::get(&filename).map(|content| {
                (
                    filename,
                    String::from_utf8_lossy(content.data.as_ref()).to_string(),
                )
            })
        })
        .collect()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CenterKind;

    #[test]
    fn resolve_locale_prefers_cli_over_config() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];

        let lang = resolve_locale(Some("fr".to_string()), &config, &available);

        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];

        let lang = resolve_locale(None, &config, &available);

        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_languages() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];

        let lang = resolve_locale(Some("xx-XX".to_string()), &config, &available);

        // CLI language is unknown; resolution may still land on the OS
        // locale, which has to be one of the available ones.
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_cover_every_center_key() {
        let i18n = I18n::default();
        assert!(!i18n.available_locales.is_empty());

        for kind in CenterKind::ALL {
            let name = i18n.tr(kind.name_key());
            let description = i18n.tr(kind.description_key());
            assert!(!name.starts_with("MISSING:"), "missing {}", kind.name_key());
            assert!(
                !description.starts_with("MISSING:"),
                "missing {}",
                kind.description_key()
            );
        }
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();

        i18n.set_locale("xx-XX".parse().unwrap());

        assert_eq!(i18n.current_locale(), &before);
    }
}
