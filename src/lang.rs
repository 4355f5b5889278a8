// SPDX-License-Identifier: MPL-2.0
//! Language detection for the search page.
//!
//! The server renders all localized text; the client only needs to know
//! which language to ask for. Detection follows the same chain the rest of
//! the app uses for preferences: explicit override, then the config file,
//! then the environment's reported locale.

use crate::config::Config;

/// Book Finder's server-side default language.
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Reports the environment's preferred locale, if any.
///
/// The seam over the host environment: production uses
/// [`SystemLocaleSource`], tests substitute a fixed value.
pub trait LocaleSource {
    fn preferred_locale(&self) -> Option<String>;
}

/// Reads the locale the operating system reports, with the `LANG`
/// environment variable as a legacy fallback for environments that expose
/// nothing else.
#[derive(Debug, Default)]
pub struct SystemLocaleSource;

impl LocaleSource for SystemLocaleSource {
    fn preferred_locale(&self) -> Option<String> {
        sys_locale::get_locale().or_else(|| {
            // LANG carries the legacy ll_CC.codeset shape; report it as a
            // BCP-47-style tag.
            std::env::var("LANG")
                .ok()
                .filter(|v| !v.is_empty())
                .map(|v| {
                    v.split('.')
                        .next()
                        .unwrap_or(&v)
                        .replace('_', "-")
                })
        })
    }
}

/// Returns the primary language subtag: the text before the first `-`.
///
/// No case normalization and no validation against a known language list;
/// `"en-US"` → `"en"`, `"en"` → `"en"`.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Detects the page language from the environment.
///
/// Returns the primary subtag of the reported locale, or
/// [`DEFAULT_LANGUAGE`] when the environment reports nothing.
pub fn detect_language(source: &impl LocaleSource) -> String {
    match source.preferred_locale() {
        Some(tag) => primary_subtag(&tag).to_string(),
        None => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Resolves the language to use: explicit override, then the config file,
/// then the environment.
pub fn resolve_language(
    override_lang: Option<&str>,
    config: &Config,
    source: &impl LocaleSource,
) -> String {
    if let Some(lang) = override_lang {
        if !lang.is_empty() {
            return lang.to_string();
        }
    }

    if let Some(lang) = &config.language {
        if !lang.is_empty() {
            return lang.clone();
        }
    }

    detect_language(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLocale(Option<&'static str>);

    impl LocaleSource for FixedLocale {
        fn preferred_locale(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn primary_subtag_strips_region() {
        assert_eq!(primary_subtag("fr-FR"), "fr");
        assert_eq!(primary_subtag("en-US"), "en");
    }

    #[test]
    fn primary_subtag_passes_bare_language_through() {
        assert_eq!(primary_subtag("en"), "en");
    }

    #[test]
    fn primary_subtag_does_not_normalize_case() {
        assert_eq!(primary_subtag("EN-us"), "EN");
    }

    #[test]
    fn detect_language_uses_reported_locale() {
        assert_eq!(detect_language(&FixedLocale(Some("fr-FR"))), "fr");
        assert_eq!(detect_language(&FixedLocale(Some("en"))), "en");
    }

    #[test]
    fn detect_language_defaults_when_environment_is_silent() {
        assert_eq!(detect_language(&FixedLocale(None)), DEFAULT_LANGUAGE);
    }

    #[test]
    fn resolve_language_prefers_override() {
        let config = Config {
            language: Some("en".to_string()),
            ..Config::default()
        };
        let lang = resolve_language(Some("de"), &config, &FixedLocale(Some("fr-FR")));
        assert_eq!(lang, "de");
    }

    #[test]
    fn resolve_language_falls_back_to_config() {
        let config = Config {
            language: Some("en".to_string()),
            ..Config::default()
        };
        let lang = resolve_language(None, &config, &FixedLocale(Some("fr-FR")));
        assert_eq!(lang, "en");
    }

    #[test]
    fn resolve_language_falls_back_to_environment() {
        let config = Config::default();
        let lang = resolve_language(None, &config, &FixedLocale(Some("fr-FR")));
        assert_eq!(lang, "fr");
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = Config::default();
        let lang = resolve_language(Some(""), &config, &FixedLocale(Some("en-GB")));
        assert_eq!(lang, "en");
    }
}
