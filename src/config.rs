use crate::i18n::Language;
use crate::loader::TranslationSource;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Translations
    pub translations_source: String,
    pub site_base_url: Option<String>,
    pub default_language: Language,

    // Preview page skeleton
    pub text_keys: Vec<String>,
    pub placeholder_keys: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim())
                .context("DEFAULT_LANGUAGE must be a supported language")?,
            Err(_) => Language::default_language(),
        };

        Ok(Self {
            translations_source: std::env::var("TRANSLATIONS_SOURCE")
                .unwrap_or_else(|_| "data/translations.json".to_string()),
            site_base_url: std::env::var("SITE_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            default_language,

            text_keys: parse_key_list(std::env::var("PAGE_TEXT_KEYS").ok()),
            placeholder_keys: parse_key_list(std::env::var("PAGE_PLACEHOLDER_KEYS").ok()),
        })
    }

    /// Resolve where the translation table is loaded from.
    pub fn translation_source(&self) -> Result<TranslationSource> {
        TranslationSource::resolve(&self.translations_source, self.site_base_url.as_deref())
    }
}

/// Split a comma-separated key list, dropping blanks.
fn parse_key_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    const VARS: [&str; 5] = [
        "TRANSLATIONS_SOURCE",
        "SITE_BASE_URL",
        "DEFAULT_LANGUAGE",
        "PAGE_TEXT_KEYS",
        "PAGE_PLACEHOLDER_KEYS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("Defaults should load");

        assert_eq!(config.translations_source, "data/translations.json");
        assert_eq!(config.site_base_url, None);
        assert_eq!(config.default_language, Language::CHINESE);
        assert!(config.text_keys.is_empty());
        assert!(config.placeholder_keys.is_empty());
        assert_eq!(
            config.translation_source().unwrap(),
            TranslationSource::File(PathBuf::from("data/translations.json"))
        );
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("SITE_BASE_URL", "https://example.com/");
        std::env::set_var("DEFAULT_LANGUAGE", "en");
        std::env::set_var("PAGE_TEXT_KEYS", "hero_title, hero_subtitle,,nav_home");
        std::env::set_var("PAGE_PLACEHOLDER_KEYS", "contact_email");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.default_language, Language::ENGLISH);
        assert_eq!(config.text_keys, vec!["hero_title", "hero_subtitle", "nav_home"]);
        assert_eq!(config.placeholder_keys, vec!["contact_email"]);
        assert_eq!(
            config.translation_source().unwrap(),
            TranslationSource::Http("https://example.com/data/translations.json".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_unsupported_default_language() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "fr");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_blank_base_url_is_ignored() {
        clear_env();
        std::env::set_var("SITE_BASE_URL", "  ");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.site_base_url, None);
    }

    #[test]
    fn test_parse_key_list() {
        assert!(parse_key_list(None).is_empty());
        assert_eq!(parse_key_list(Some(" a ,b".to_string())), vec!["a", "b"]);
    }
}
