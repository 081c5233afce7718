//! Page session: boot sequence and the UI event loop.
//!
//! The page loads translations once, renders the default language, then
//! handles clicks one at a time. The fetch is the only await point, so every
//! render runs to completion before the next event is looked at.

use crate::dom::Document;
use crate::i18n::{Language, TranslationTable};
use crate::loader::TranslationLoader;
use crate::presentation::{handle_click, Applier, ClickEvent, SwitchOutcome};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info, warn};

/// Body text shown when translations cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Error: Could not load website content.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Translations not loaded yet.
    Loading,
    /// Translations loaded and the default language rendered.
    Ready,
    /// Loading failed; the body shows [`LOAD_FAILURE_MESSAGE`].
    Failed,
}

/// A page session over a host document.
pub struct Page<D: Document> {
    doc: D,
    applier: Applier,
    default_language: Language,
    state: PageState,
}

impl<D: Document> Page<D> {
    /// Create a page whose translation table is still empty.
    pub fn new(doc: D, default_language: Language) -> Self {
        Self {
            doc,
            applier: Applier::new(Arc::new(TranslationTable::new()), default_language),
            default_language,
            state: PageState::Loading,
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn applier(&self) -> &Applier {
        &self.applier
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Load translations and render the default language.
    ///
    /// On failure the body is replaced with [`LOAD_FAILURE_MESSAGE`] and the
    /// page stays failed; there is no retry. Booting twice is ignored.
    pub async fn boot(&mut self, loader: &TranslationLoader) -> PageState {
        if self.state != PageState::Loading {
            warn!("Page already booted ({:?}), ignoring", self.state);
            return self.state;
        }

        match loader.load().await {
            Ok(table) => {
                self.applier = Applier::new(Arc::new(table), self.default_language);
                self.applier
                    .set_language(&mut self.doc, self.default_language.code());
                self.state = PageState::Ready;
            }
            Err(e) => {
                error!("Could not load translations: {}", e);
                self.doc.replace_body(LOAD_FAILURE_MESSAGE);
                self.state = PageState::Failed;
            }
        }

        self.state
    }

    /// Handle one click synchronously.
    ///
    /// Before a successful boot the table is empty, so switching logs the
    /// unknown-language error and changes nothing. After a failed boot the
    /// controls are gone from the body and clicks are ignored.
    pub fn dispatch(&mut self, mut event: ClickEvent) -> SwitchOutcome {
        if self.state == PageState::Failed {
            debug!("Ignoring click on #{}: page failed to load", event.target_id());
            return SwitchOutcome::NotAControl;
        }

        let outcome = handle_click(&mut self.applier, &mut self.doc, &mut event);
        debug!("Click on #{} -> {:?}", event.target_id(), outcome);
        outcome
    }

    /// Boot, then handle queued clicks until the sender side closes.
    ///
    /// `on_update` sees the document after boot and after every event.
    pub async fn run(
        mut self,
        loader: &TranslationLoader,
        mut events: UnboundedReceiver<ClickEvent>,
        mut on_update: impl FnMut(&D),
    ) -> Self {
        let state = self.boot(loader).await;
        info!("Page booted: {:?}", state);
        on_update(&self.doc);

        while let Some(event) = events.recv().await {
            self.dispatch(event);
            on_update(&self.doc);
        }

        info!("Event queue closed, page session ends");
        self
    }
}
