//! Language type: a code validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
///
/// Only registered, enabled languages can be constructed, so a `Language`
/// always has a switch control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const CHINESE: Language = Language { code: "zh" };
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Self> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is disabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Resolve the language whose switch control has the given element id.
    pub fn from_control_id(control_id: &str) -> Option<Self> {
        LanguageRegistry::get()
            .get_by_control_id(control_id)
            .map(|config| Language { code: config.code })
    }

    /// The language rendered on page load.
    pub fn default_language() -> Self {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid (validated at construction)")
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Element id of this language's switch control (e.g., "lang-zh").
    pub fn control_id(&self) -> &'static str {
        self.config().control_id
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
