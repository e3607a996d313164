// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

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
        Self::new(None, &Config::default())
    }
}

fn load_bundle(filename: &str, locale: &LanguageIdentifier) -> Option<FluentBundle<FluentResource>> {
    let content = Asset::get(filename)?;
    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(file = filename, errors = errors.len(), "translation file has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Arguments are inserted verbatim (dates, titles), no bidi isolation marks.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(file = filename, errors = errors.len(), "duplicate translation keys");
    }
    Some(bundle)
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "translation file name is not a locale");
                continue;
            };
            if let Some(bundle) = load_bundle(filename, &locale) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(|| LanguageIdentifier::from_bytes(DEFAULT_LOCALE.as_bytes()).unwrap_or_default());

        tracing::debug!(locale = %current_locale, "locale selected");

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

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments (`{ $name }` placeholders).
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    /// Translates `key` with a numeric `$count`, so the message can pick a
    /// plural variant (`[one]`, `*[other]`).
    pub fn tr_count(&self, key: &str, count: usize) -> String {
        let mut fluent_args = FluentArgs::new();
        fluent_args.set("count", count);
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Exact match first, then a locale sharing the same language subtag
/// (`fr-CA` → `fr`).
fn match_available(candidate: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang = candidate.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|known| known.language == lang.language)
        .cloned()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    cli_lang
        .as_deref()
        .and_then(|lang| match_available(lang, available))
        .or_else(|| config_lang.and_then(|lang| match_available(lang, available)))
        .or_else(|| os_lang.as_deref().and_then(|lang| match_available(lang, available)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_wins_over_config_and_os() {
        let lang = resolve_locale(Some("fr".into()), Some("en-US"), Some("en-US".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_used_when_cli_absent() {
        let lang = resolve_locale(None, Some("fr"), Some("en-US".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn os_locale_matches_by_language() {
        let lang = resolve_locale(None, None, Some("fr-CA".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_locales_resolve_to_nothing() {
        assert_eq!(resolve_locale(Some("de".into()), None, Some("ja-JP".into()), &available()), None);
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("tab-today"), "Today");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            i18n.tr_with_args("error-date-out-of-range", &[("earliest", "1995-06-16"), ("latest", "2026-10-18")]),
            "Pick a date between 1995-06-16 and 2026-10-18"
        );
    }

    #[test]
    fn counts_select_plural_variant() {
        let en = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(en.tr_count("favorites-count", 1), "1 saved image");
        assert_eq!(en.tr_count("favorites-count", 3), "3 saved images");
        assert_eq!(en.tr_count("recent-summary", 1), "Showing 1 image • Click on any image to view details");

        let fr = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(fr.tr_count("favorites-count", 1), "1 image enregistrée");
        assert_eq!(fr.tr_count("favorites-count", 2), "2 images enregistrées");
    }

    #[test]
    fn french_bundle_translates() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(i18n.tr("tab-today"), "Aujourd'hui");
    }
}
