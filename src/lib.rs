//! Localization for a static marketing page.
//!
//! Loads a language-keyed translation table once, then applies a language to
//! the host document: tagged text, tagged placeholders and the generated
//! services section. Two switch controls flip between the supported languages.

pub mod config;
pub mod dom;
pub mod i18n;
pub mod loader;
pub mod page;
pub mod presentation;

#[cfg(test)]
mod test_support;
