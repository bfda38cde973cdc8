//! Node types: NodeId, NodeData.

use std::fmt::Write;

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a document node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Element tag name (e.g. "head", "style").
    pub tag: String,
    /// Optional unique id (`id` attribute).
    pub id: Option<String>,
    /// Classes (`class` attribute).
    pub classes: Vec<String>,
    /// Text content. Style nodes hold their CSS here.
    pub text: String,
}

impl NodeData {
    /// Create a new `NodeData` with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
        }
    }

    /// A `<style id="...">` element with the given CSS.
    pub fn style(id: impl Into<String>, css: impl Into<String>) -> Self {
        Self::new("style").with_id(id).with_text(css)
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Write the opening tag with escaped attributes.
    pub(crate) fn write_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", html_escape::encode_double_quoted_attribute(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(
                out,
                " class=\"{}\"",
                html_escape::encode_double_quoted_attribute(&self.classes.join(" "))
            );
        }
        out.push('>');
    }
}
