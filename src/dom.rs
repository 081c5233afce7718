//! Host document abstraction.
//!
//! The applier never builds DOM nodes itself; it only reads tagged elements and
//! writes text, placeholders and markup through [`Document`]. A browser host
//! would implement the trait over its real DOM. [`MemoryDocument`] is the
//! in-process implementation used by the preview binary and the tests.

use crate::i18n::LanguageRegistry;
use std::collections::BTreeMap;
use std::fmt;

/// Attribute carrying the bundle key for text substitution.
pub const TEXT_ATTR: &str = "data-lang";

/// Attribute carrying the bundle key for placeholder substitution.
pub const PLACEHOLDER_ATTR: &str = "data-lang-placeholder";

/// Element id of the container receiving generated service markup.
pub const SERVICES_CONTAINER_ID: &str = "services-container";

/// Handle to an element of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The operations the page needs from its host document.
pub trait Document {
    /// Set the document language attribute (`<html lang>`).
    fn set_lang(&mut self, lang: &str);

    /// All elements carrying `attr`, in document order, with the attribute value.
    fn query_tagged(&self, attr: &str) -> Vec<(NodeId, String)>;

    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_placeholder(&mut self, node: NodeId, text: &str);

    fn get_element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Replace an element's content with `html` in one write.
    fn set_inner_html(&mut self, node: NodeId, html: String);

    /// Replace the whole body with plain text.
    fn replace_body(&mut self, text: &str);
}

/// An element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub placeholder: Option<String>,
    pub inner_html: String,
    /// Number of `set_inner_html` writes this element has received
    pub html_writes: usize,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// In-memory document: a flat list of elements in document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    lang: Option<String>,
    elements: Vec<Element>,
    body_text: Option<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the page skeleton the applier expects: one `span` per text key,
    /// one `input` per placeholder key, both language switch controls and the
    /// services container. Untranslated elements show their key.
    pub fn page_skeleton<S: AsRef<str>>(text_keys: &[S], placeholder_keys: &[S]) -> Self {
        let mut doc = Self::new();

        for lang in LanguageRegistry::get().list_enabled() {
            doc.push(
                Element::new("a")
                    .with_id(lang.control_id)
                    .with_attr("href", "#")
                    .with_text(lang.native_name),
            );
        }
        for key in text_keys {
            let key = key.as_ref();
            doc.push(Element::new("span").with_attr(TEXT_ATTR, key).with_text(key));
        }
        for key in placeholder_keys {
            let key = key.as_ref();
            doc.push(
                Element::new("input")
                    .with_attr(PLACEHOLDER_ATTR, key)
                    .with_placeholder(key),
            );
        }
        doc.push(Element::new("div").with_id(SERVICES_CONTAINER_ID));

        doc
    }

    /// Append an element and return its handle.
    pub fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Body text after a [`Document::replace_body`], if one happened.
    pub fn body_text(&self) -> Option<&str> {
        self.body_text.as_deref()
    }

    /// First element whose `attr` equals `value`.
    pub fn find_by_attr(&self, attr: &str, value: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.attr(attr) == Some(value))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }
}

impl Document for MemoryDocument {
    fn set_lang(&mut self, lang: &str) {
        self.lang = Some(lang.to_string());
    }

    fn query_tagged(&self, attr: &str) -> Vec<(NodeId, String)> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(index, el)| el.attr(attr).map(|value| (NodeId(index), value.to_string())))
            .collect()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.text = text.to_string();
        }
    }

    fn set_placeholder(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.placeholder = Some(text.to_string());
        }
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn set_inner_html(&mut self, node: NodeId, html: String) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.inner_html = html;
            el.html_writes += 1;
        }
    }

    fn replace_body(&mut self, text: &str) {
        self.elements.clear();
        self.body_text = Some(text.to_string());
    }
}

impl fmt::Display for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<html lang=\"{}\">", self.lang.as_deref().unwrap_or(""))?;

        if let Some(body) = &self.body_text {
            return writeln!(f, "  {}", body);
        }

        for el in &self.elements {
            if let Some(key) = el.attr(TEXT_ATTR) {
                writeln!(f, "  [{}={}] {}", TEXT_ATTR, key, el.text)?;
            } else if let Some(key) = el.attr(PLACEHOLDER_ATTR) {
                writeln!(
                    f,
                    "  [{}={}] placeholder=\"{}\"",
                    PLACEHOLDER_ATTR,
                    key,
                    el.placeholder.as_deref().unwrap_or("")
                )?;
            } else if let Some(id) = &el.id {
                if el.inner_html.is_empty() {
                    writeln!(f, "  #{} {}", id, el.text)?;
                } else {
                    writeln!(f, "  #{} {}", id, el.inner_html)?;
                }
            }
        }
        Ok(())
    }
}
