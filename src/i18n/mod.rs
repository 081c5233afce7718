//! Internationalization (i18n) module.
//!
//! Everything language-related that is independent of the page lives here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their switch controls
//! - `language`: Type-safe Language type validated against the registry
//! - `table`: The translation table loaded at startup (bundles, service entries)
//! - `metrics`: Render counters for observability
//!
//! # Example
//!
//! ```rust,ignore
//! use site_i18n::i18n::{Language, TranslationTable};
//!
//! let table = TranslationTable::from_json(r#"{"en": {"greeting": "Hello"}}"#)?;
//! let greeting = table.bundle(Language::ENGLISH.code()).and_then(|b| b.text("greeting"));
//! ```

mod language;
mod metrics;
mod registry;
mod table;

pub use language::Language;
pub use metrics::{MetricsReport, RenderMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::{BundleValue, LanguageBundle, ServiceEntry, TranslationTable};
