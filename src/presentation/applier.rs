//! The presentation applier: localizes a document for one language.

use crate::dom::{Document, NodeId, PLACEHOLDER_ATTR, TEXT_ATTR};
use crate::i18n::{Language, LanguageBundle, RenderMetrics, TranslationTable};
use crate::presentation::services::{self, ServicesOutcome};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Counts from one successful `set_language` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub texts_applied: usize,
    pub texts_skipped: usize,
    pub placeholders_applied: usize,
    pub placeholders_skipped: usize,
    pub services: ServicesOutcome,
}

/// Outcome of `set_language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered(RenderSummary),
    /// The code is not in the table; the document was not touched.
    UnknownLanguage,
}

/// Owns the loaded translation table and the current language of a page.
///
/// All methods run to completion synchronously, so one render can never
/// interleave with another.
#[derive(Debug)]
pub struct Applier {
    table: Arc<TranslationTable>,
    current: String,
    metrics: RenderMetrics,
}

impl Applier {
    /// Create an applier whose current language is `initial`.
    ///
    /// Nothing is rendered until `set_language` is called.
    pub fn new(table: Arc<TranslationTable>, initial: Language) -> Self {
        Self {
            table,
            current: initial.code().to_string(),
            metrics: RenderMetrics::new(),
        }
    }

    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Localize `doc` for `lang`.
    ///
    /// An unknown code is logged and ignored, leaving the document and the
    /// current language as they were. Elements whose key does not resolve keep
    /// their previous content.
    pub fn set_language<D: Document>(&mut self, doc: &mut D, lang: &str) -> Applied {
        let table = Arc::clone(&self.table);
        let Some(bundle) = table.bundle(lang) else {
            error!("Language \"{}\" not found.", lang);
            self.metrics.record_unknown_language();
            return Applied::UnknownLanguage;
        };

        self.current = lang.to_string();
        doc.set_lang(lang);

        let (texts_applied, texts_skipped) =
            apply_tagged(doc, bundle, TEXT_ATTR, <D as Document>::set_text);
        self.metrics.record_texts(texts_applied, texts_skipped);

        let (placeholders_applied, placeholders_skipped) =
            apply_tagged(doc, bundle, PLACEHOLDER_ATTR, <D as Document>::set_placeholder);
        self.metrics
            .record_placeholders(placeholders_applied, placeholders_skipped);

        let services = services::populate_services(doc, bundle, &mut self.metrics);
        self.metrics.record_render();

        info!(
            "Rendered language '{}': {} texts, {} placeholders ({} keys unresolved)",
            lang,
            texts_applied,
            placeholders_applied,
            texts_skipped + placeholders_skipped
        );

        Applied::Rendered(RenderSummary {
            texts_applied,
            texts_skipped,
            placeholders_applied,
            placeholders_skipped,
            services,
        })
    }

    /// Re-render only the services section for `lang`.
    ///
    /// Returns `None` (after logging) when `lang` is not in the table.
    pub fn populate_services<D: Document>(
        &mut self,
        doc: &mut D,
        lang: &str,
    ) -> Option<ServicesOutcome> {
        let table = Arc::clone(&self.table);
        let Some(bundle) = table.bundle(lang) else {
            error!("Language \"{}\" not found.", lang);
            self.metrics.record_unknown_language();
            return None;
        };

        Some(services::populate_services(doc, bundle, &mut self.metrics))
    }
}

/// Overwrite every element tagged with `attr` whose key resolves in `bundle`.
///
/// Returns (applied, skipped) counts.
fn apply_tagged<D: Document>(
    doc: &mut D,
    bundle: &LanguageBundle,
    attr: &str,
    write: fn(&mut D, NodeId, &str),
) -> (usize, usize) {
    let mut applied = 0;
    let mut skipped = 0;

    for (node, key) in doc.query_tagged(attr) {
        match bundle.text(&key) {
            Some(text) => {
                write(doc, node, text);
                applied += 1;
            }
            None => {
                debug!("No translation for {}=\"{}\", leaving element unchanged", attr, key);
                skipped += 1;
            }
        }
    }

    (applied, skipped)
}
