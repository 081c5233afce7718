//! Language switch controls.

use crate::dom::Document;
use crate::i18n::Language;
use crate::presentation::applier::{Applied, Applier};
use tracing::debug;

/// An activation (click) on a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target_id: String,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            default_prevented: false,
        }
    }

    /// Click on the switch control of `lang`.
    pub fn on_control(lang: Language) -> Self {
        Self::new(lang.control_id())
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Suppress the element's default action (link navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The applier ran for a language other than the current one.
    Switched(Language, Applied),
    /// The clicked language is already current; nothing was rendered.
    AlreadyActive(Language),
    /// The click target is not a language switch control.
    NotAControl,
}

/// Handle a click on a language switch control.
///
/// Control clicks always have their default action prevented. Clicking the
/// active language is a no-op.
pub fn handle_click<D: Document>(
    applier: &mut Applier,
    doc: &mut D,
    event: &mut ClickEvent,
) -> SwitchOutcome {
    let Some(lang) = Language::from_control_id(event.target_id()) else {
        return SwitchOutcome::NotAControl;
    };

    event.prevent_default();

    if applier.current_language() == lang.code() {
        debug!("Language '{}' already active, ignoring click", lang);
        return SwitchOutcome::AlreadyActive(lang);
    }

    let applied = applier.set_language(doc, lang.code());
    SwitchOutcome::Switched(lang, applied)
}
