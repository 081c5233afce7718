//! Language registry: Single source of truth for the languages the page offers.
//!
//! The page ships exactly two languages, each bound to a fixed switch control.
//! The registry is initialized once with `OnceLock` and is immutable thereafter.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language code as used in the translation table (e.g., "zh", "en")
    pub code: &'static str,

    /// Native name of the language (e.g., "中文", "English")
    pub native_name: &'static str,

    /// Element id of the switch control for this language
    pub control_id: &'static str,

    /// Whether the page renders this language on load (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by the element id of its switch control.
    pub fn get_by_control_id(&self, control_id: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.enabled && lang.control_id == control_id)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if zero or several default languages are defined (this indicates
    /// a configuration error in `default_languages`).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Default language configurations: Chinese (default) and English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "zh",
            native_name: "中文",
            control_id: "lang-zh",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            native_name: "English",
            control_id: "lang-en",
            is_default: false,
            enabled: true,
        },
    ]
}
