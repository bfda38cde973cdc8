//! Stylesheet manager: binds a handle to a context and produces host markup.
//!
//! The manager covers both contexts. For first paint it hands out the
//! composed CSS (for inline registration) or a preview `<style>` block. For
//! live preview it builds a document with the preview block followed by one
//! anchor per screen in sort order, and a [`LiveEditor`] that patches it.

use tracing::debug;

use crate::config::{ConfigError, StylesConfig};
use crate::context::StyleContext;
use crate::dom::{Dom, NodeData};
use crate::patch::{LiveEditor, Patcher, StyleDocument};

pub struct StyleManager {
    config: StylesConfig,
    context: StyleContext,
}

impl StyleManager {
    /// Create a manager with an empty context. Fails if the handle is empty.
    pub fn new(config: StylesConfig) -> Result<Self, ConfigError> {
        Self::with_context(config, StyleContext::new())
    }

    /// Create a manager over an existing context.
    pub fn with_context(config: StylesConfig, context: StyleContext) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, context })
    }

    pub fn config(&self) -> &StylesConfig {
        &self.config
    }

    pub fn context(&self) -> &StyleContext {
        &self.context
    }

    /// Mutable access for producers adding screens and declarations.
    pub fn context_mut(&mut self) -> &mut StyleContext {
        &mut self.context
    }

    /// CSS for inline registration against the stylesheet handle.
    pub fn inline_css(&self) -> String {
        self.context.compose()
    }

    /// The stylesheet wrapped in a `<style>` element with the given id.
    pub fn styleblock(&self, id: Option<&str>) -> String {
        self.context.styleblock(id)
    }

    /// The preview `<style>` block: `<style id="{handle}-inline-css" class="...">`.
    pub fn preview_block(&self) -> String {
        let mut out = String::new();
        self.preview_node().write_open_tag(&mut out);
        out.push_str(&self.inline_css());
        out.push_str("</style>");
        out
    }

    fn preview_node(&self) -> NodeData {
        NodeData::style(self.config.inline_block_id(), self.inline_css())
            .with_class(self.config.block_class.clone())
    }

    /// A patcher using this manager's anchor naming. Anchors and the preview
    /// block are protected from fragments.
    pub fn patcher(&self) -> Patcher {
        Patcher::new(self.config.anchor_prefix.clone())
            .with_reserved(self.config.inline_block_id())
    }

    /// Build a preview document: a `<head>` holding the preview block and one
    /// empty anchor `<style>` per registered screen, in screen sort order.
    pub fn preview_document(&self) -> Dom {
        let mut dom = Dom::new();
        let head = dom.insert(NodeData::new("head"));
        dom.insert_child(head, self.preview_node());
        let patcher = self.patcher();
        for name in self.context.screens().sorted_names() {
            dom.insert_child(head, NodeData::style(patcher.anchor_for(name), ""));
        }
        debug!(handle = %self.config.handle, nodes = dom.len(), "preview document built");
        dom
    }

    /// A live editor over `document`, using a snapshot of the current screens.
    pub fn live_editor<D: StyleDocument>(&self, document: D) -> LiveEditor<D> {
        LiveEditor::new(self.context.screens().clone(), self.patcher(), document)
    }
}
