//! DOM patcher: applies rendered fragments to a live document.
//!
//! Each fragment id moves through `absent -> present -> absent`: a write
//! inserts a node before the screen's anchor or replaces the text of the node
//! already carrying that id, and a delete removes it. Applying the same
//! fragment again leaves the document unchanged.

use tracing::{debug, warn};

use crate::css::fragment::{Fragment, FragmentAction};

/// Errors from patching a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("no anchor node `{anchor}` for screen `{screen}`")]
    UnknownAnchor { screen: String, anchor: String },
    #[error("fragment id `{id}` names a fixed document node")]
    ReservedId { id: String },
}

/// What a patch did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Inserted,
    Replaced,
    Removed,
    /// A delete for a fragment that was not present.
    Absent,
}

/// A document that can hold id-tagged style fragments.
///
/// Implemented by [`crate::dom::Dom`]; hosts with their own document model
/// implement it to receive patches directly.
pub trait StyleDocument {
    type Node: Copy;

    /// Find the node tagged with `id`.
    fn find_node(&self, id: &str) -> Option<Self::Node>;

    /// Replace a node's text content in place.
    fn replace_text(&mut self, node: Self::Node, text: &str);

    /// Create a node tagged with `id` holding `text`, placed immediately
    /// before `anchor`. Returns `None` if the anchor cannot take a sibling.
    fn insert_before_anchor(&mut self, anchor: Self::Node, id: &str, text: &str) -> Option<Self::Node>;

    /// Delete a node.
    fn remove_node(&mut self, node: Self::Node);
}

/// The anchor id for a screen, e.g. `style-hook--mobile`.
pub fn anchor_id(prefix: &str, screen: &str) -> String {
    format!("{prefix}{screen}")
}

/// Applies fragments relative to per-screen anchors.
///
/// Anchors and any reserved ids are never written or removed by a fragment.
#[derive(Debug, Clone)]
pub struct Patcher {
    anchor_prefix: String,
    reserved: Vec<String>,
}

impl Patcher {
    /// Create a patcher whose anchors are named `{anchor_prefix}{screen}`.
    pub fn new(anchor_prefix: impl Into<String>) -> Self {
        Self {
            anchor_prefix: anchor_prefix.into(),
            reserved: Vec::new(),
        }
    }

    /// Protect another fixed node, such as the preview block (builder).
    pub fn with_reserved(mut self, id: impl Into<String>) -> Self {
        self.reserved.push(id.into());
        self
    }

    /// Whether `id` belongs to an anchor or a reserved node.
    pub fn is_reserved(&self, id: &str) -> bool {
        (!self.anchor_prefix.is_empty() && id.starts_with(&self.anchor_prefix))
            || self.reserved.iter().any(|r| r == id)
    }

    /// The anchor id this patcher looks up for `screen`.
    pub fn anchor_for(&self, screen: &str) -> String {
        anchor_id(&self.anchor_prefix, screen)
    }

    /// Apply one fragment to the document.
    ///
    /// A write for a new id needs the screen's anchor; without it the
    /// fragment is dropped and [`PatchError::UnknownAnchor`] is returned.
    /// Fragments whose id names an anchor or reserved node fail with
    /// [`PatchError::ReservedId`] and leave the document untouched.
    pub fn apply<D: StyleDocument>(
        &self,
        document: &mut D,
        fragment: &Fragment,
    ) -> Result<PatchOutcome, PatchError> {
        if self.is_reserved(&fragment.id) {
            warn!(id = %fragment.id, "fragment targets a fixed node, dropped");
            return Err(PatchError::ReservedId {
                id: fragment.id.clone(),
            });
        }
        let existing = document.find_node(&fragment.id);
        match (&fragment.action, existing) {
            (FragmentAction::Write(text), Some(node)) => {
                debug!(id = %fragment.id, "replace fragment");
                document.replace_text(node, text);
                Ok(PatchOutcome::Replaced)
            }
            (FragmentAction::Write(text), None) => {
                let anchor = self.anchor_for(&fragment.screen);
                let inserted = document
                    .find_node(&anchor)
                    .and_then(|node| document.insert_before_anchor(node, &fragment.id, text));
                match inserted {
                    Some(_) => {
                        debug!(id = %fragment.id, anchor = %anchor, "insert fragment");
                        Ok(PatchOutcome::Inserted)
                    }
                    None => {
                        warn!(id = %fragment.id, anchor = %anchor, "anchor missing, fragment dropped");
                        Err(PatchError::UnknownAnchor {
                            screen: fragment.screen.clone(),
                            anchor,
                        })
                    }
                }
            }
            (FragmentAction::Delete, Some(node)) => {
                debug!(id = %fragment.id, "remove fragment");
                document.remove_node(node);
                Ok(PatchOutcome::Removed)
            }
            (FragmentAction::Delete, None) => Ok(PatchOutcome::Absent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Dom, NodeData, NodeId};
    use pretty_assertions::assert_eq;

    fn document() -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let head = dom.insert(NodeData::new("head"));
        for screen in ["default", "mobile"] {
            dom.insert_child(head, NodeData::style(anchor_id("hook--", screen), ""));
        }
        (dom, head)
    }

    fn write(id: &str, screen: &str, text: &str) -> Fragment {
        Fragment {
            id: id.into(),
            screen: screen.into(),
            action: FragmentAction::Write(text.into()),
        }
    }

    fn delete(id: &str, screen: &str) -> Fragment {
        Fragment {
            id: id.into(),
            screen: screen.into(),
            action: FragmentAction::Delete,
        }
    }

    fn ids(dom: &Dom, head: NodeId) -> Vec<String> {
        dom.children(head)
            .iter()
            .filter_map(|&n| dom.get(n).and_then(|d| d.id.clone()))
            .collect()
    }

    #[test]
    fn insert_before_screen_anchor() {
        let (mut dom, head) = document();
        let patcher = Patcher::new("hook--");
        assert_eq!(
            patcher.apply(&mut dom, &write("b--mobile", "mobile", "m{}")),
            Ok(PatchOutcome::Inserted)
        );
        assert_eq!(
            patcher.apply(&mut dom, &write("a", "default", "d{}")),
            Ok(PatchOutcome::Inserted)
        );
        assert_eq!(
            ids(&dom, head),
            vec!["a", "hook--default", "b--mobile", "hook--mobile"]
        );
    }

    #[test]
    fn replace_keeps_position() {
        let (mut dom, head) = document();
        let patcher = Patcher::new("hook--");
        patcher.apply(&mut dom, &write("a", "default", "a{}")).unwrap();
        patcher.apply(&mut dom, &write("b", "default", "b{}")).unwrap();
        assert_eq!(
            patcher.apply(&mut dom, &write("a", "default", "a{color:red;}")),
            Ok(PatchOutcome::Replaced)
        );
        assert_eq!(ids(&dom, head), vec!["a", "b", "hook--default", "hook--mobile"]);
        let a = dom.query_by_id("a").unwrap();
        assert_eq!(dom.get(a).unwrap().text, "a{color:red;}");
    }

    #[test]
    fn apply_is_idempotent() {
        let (mut once, head) = document();
        let (mut thrice, _) = document();
        let patcher = Patcher::new("hook--");
        let fragment = write("x--mobile", "mobile", "x{}");
        patcher.apply(&mut once, &fragment).unwrap();
        for _ in 0..3 {
            patcher.apply(&mut thrice, &fragment).unwrap();
        }
        assert_eq!(once.to_html(head), thrice.to_html(thrice.root().unwrap()));
        assert_eq!(once.len(), thrice.len());
    }

    #[test]
    fn delete_removes_then_absent() {
        let (mut dom, head) = document();
        let patcher = Patcher::new("hook--");
        patcher.apply(&mut dom, &write("accent", "default", ":root{}")).unwrap();
        assert_eq!(
            patcher.apply(&mut dom, &delete("accent", "default")),
            Ok(PatchOutcome::Removed)
        );
        assert_eq!(
            patcher.apply(&mut dom, &delete("accent", "default")),
            Ok(PatchOutcome::Absent)
        );
        assert_eq!(ids(&dom, head), vec!["hook--default", "hook--mobile"]);
    }

    #[test]
    fn missing_anchor_drops_fragment() {
        let (mut dom, _) = document();
        let patcher = Patcher::new("hook--");
        let before = dom.len();
        assert_eq!(
            patcher.apply(&mut dom, &write("a--desktop", "desktop", "a{}")),
            Err(PatchError::UnknownAnchor {
                screen: "desktop".into(),
                anchor: "hook--desktop".into(),
            })
        );
        assert_eq!(dom.len(), before);
    }

    #[test]
    fn replace_does_not_need_anchor() {
        let mut dom = Dom::new();
        let head = dom.insert(NodeData::new("head"));
        dom.insert_child(head, NodeData::style("a--desktop", "old{}"));
        let patcher = Patcher::new("hook--");
        assert_eq!(
            patcher.apply(&mut dom, &write("a--desktop", "desktop", "new{}")),
            Ok(PatchOutcome::Replaced)
        );
    }

    #[test]
    fn fixed_node_ids_rejected() {
        let (mut dom, head) = document();
        dom.insert_child(head, NodeData::style("inline-css", "body{}"));
        let patcher = Patcher::new("hook--").with_reserved("inline-css");
        for fragment in [
            delete("hook--default", "default"),
            write("hook--mobile", "default", "x{}"),
            write("hook--tv", "default", "x{}"),
            delete("inline-css", "default"),
        ] {
            assert_eq!(
                patcher.apply(&mut dom, &fragment),
                Err(PatchError::ReservedId {
                    id: fragment.id.clone(),
                })
            );
        }
        assert_eq!(
            ids(&dom, head),
            vec!["hook--default", "hook--mobile", "inline-css"]
        );
        let inline = dom.query_by_id("inline-css").unwrap();
        assert_eq!(dom.get(inline).unwrap().text, "body{}");
        assert_eq!(
            patcher.apply(&mut dom, &write("gap", "default", ":root{--gap:1px;}")),
            Ok(PatchOutcome::Inserted)
        );
    }

    #[test]
    fn empty_prefix_reserves_nothing_by_prefix() {
        let patcher = Patcher::new("");
        assert!(!patcher.is_reserved("accent"));
        assert!(Patcher::new("").with_reserved("accent").is_reserved("accent"));
    }
}
