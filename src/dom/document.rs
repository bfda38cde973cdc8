//! Patch target implementation for the in-crate document.

use super::node::{NodeData, NodeId};
use super::tree::Dom;
use crate::patch::StyleDocument;

impl StyleDocument for Dom {
    type Node = NodeId;

    fn find_node(&self, id: &str) -> Option<NodeId> {
        self.query_by_id(id)
    }

    fn replace_text(&mut self, node: NodeId, text: &str) {
        if let Some(data) = self.get_mut(node) {
            if data.text != text {
                data.text = text.to_owned();
            }
        }
    }

    fn insert_before_anchor(&mut self, anchor: NodeId, id: &str, text: &str) -> Option<NodeId> {
        self.insert_before(anchor, NodeData::style(id, text))
    }

    fn remove_node(&mut self, node: NodeId) {
        self.remove(node);
    }
}
