//! Live-edit feed: one declaration payload at a time, rendered and patched.
//!
//! [`LiveEditor`] is the incremental context. It keeps its own snapshot of
//! the screen registry (the live document has no access to the store) and
//! handles each [`LiveEdit`] to completion before taking the next, so the
//! last edit for an id always wins.

use serde::{Deserialize, Deserializer};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::patcher::{PatchError, PatchOutcome, Patcher, StyleDocument};
use crate::css::fragment::{render_custom_property, render_style, Fragment};
use crate::css::model::{
    value_text, CustomPropertyDeclaration, DeclarationError, Properties, StyleDeclaration,
};
use crate::screen::ScreenRegistry;

/// Errors from handling one live edit. None of them stop the feed.
#[derive(Debug, thiserror::Error)]
pub enum LiveEditError {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error("malformed live edit payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single declaration update as delivered by the host messaging layer.
///
/// Decoded from JSON objects tagged by `kind`:
///
/// ```json
/// {"kind":"style","id":"btn","selector":".btn","screen":"desktop","properties":{"color":"red"}}
/// {"kind":"custom_property","name":"accent","value":"#fff","screen":"mobile"}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiveEdit {
    Style {
        id: Option<String>,
        selector: Option<String>,
        screen: Option<String>,
        #[serde(default, alias = "styles")]
        properties: Properties,
    },
    CustomProperty {
        name: Option<String>,
        /// Strings and numbers are accepted, like property values of a style.
        #[serde(default, deserialize_with = "value_or_number")]
        value: Option<String>,
        selector: Option<String>,
        screen: Option<String>,
    },
}

fn value_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(value_text))
}

impl LiveEdit {
    /// Decode a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Validate the payload and render it into a fragment.
    pub fn render(&self, screens: &ScreenRegistry) -> Result<Fragment, DeclarationError> {
        match self {
            LiveEdit::Style {
                id,
                selector,
                screen,
                properties,
            } => {
                let mut style =
                    StyleDeclaration::new(selector.clone().unwrap_or_default(), properties.clone())?;
                style.id = id.clone();
                style.screen = screen.clone();
                render_style(screens, &style)
            }
            LiveEdit::CustomProperty {
                name,
                value,
                selector,
                screen,
            } => {
                let mut property = CustomPropertyDeclaration::new(
                    name.clone().unwrap_or_default(),
                    value.clone().unwrap_or_default(),
                )?;
                if let Some(selector) = selector {
                    property = property.with_selector(selector.clone());
                }
                property.screen = screen.clone();
                render_custom_property(screens, &property)
            }
        }
    }
}

/// The incremental renderer bound to one live document.
pub struct LiveEditor<D> {
    screens: ScreenRegistry,
    patcher: Patcher,
    document: D,
}

impl<D: StyleDocument> LiveEditor<D> {
    /// Create an editor over `document`, rendering media queries from `screens`.
    pub fn new(screens: ScreenRegistry, patcher: Patcher, document: D) -> Self {
        Self {
            screens,
            patcher,
            document,
        }
    }

    /// Render and patch one edit.
    pub fn apply(&mut self, edit: &LiveEdit) -> Result<PatchOutcome, LiveEditError> {
        let fragment = edit.render(&self.screens)?;
        let outcome = self.patcher.apply(&mut self.document, &fragment)?;
        debug!(id = %fragment.id, ?outcome, "live edit applied");
        Ok(outcome)
    }

    /// Decode, render and patch one JSON payload.
    pub fn apply_json(&mut self, payload: &str) -> Result<PatchOutcome, LiveEditError> {
        let edit = LiveEdit::from_json(payload)?;
        self.apply(&edit)
    }

    /// Consume edits until the sender side closes.
    ///
    /// Each edit is handled to completion before the next is received.
    /// Failures are logged and skipped. Returns the number of edits that
    /// patched successfully.
    pub async fn run(&mut self, mut edits: mpsc::UnboundedReceiver<LiveEdit>) -> usize {
        let mut applied = 0;
        while let Some(edit) = edits.recv().await {
            match self.apply(&edit) {
                Ok(_) => applied += 1,
                Err(err) => warn!(error = %err, "live edit skipped"),
            }
        }
        applied
    }

    /// The screen snapshot used for media queries.
    pub fn screens(&self) -> &ScreenRegistry {
        &self.screens
    }

    /// Replace the screen snapshot, e.g. after the host re-registers screens.
    pub fn set_screens(&mut self, screens: ScreenRegistry) {
        self.screens = screens;
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
