//! Fragment renderer: one declaration to one independently patchable fragment.
//!
//! A fragment's id is how the patcher finds the node it rendered last time:
//! `{id}` on the default screen, `{id}--{screen}` elsewhere. Custom
//! properties use their name as the id, so two declarations for the same
//! name on the same screen supersede each other.

use std::slice;

use crate::css::format::render_block;
use crate::css::model::{screen_key, CustomPropertyDeclaration, DeclarationError, StyleDeclaration};
use crate::screen::{ScreenRegistry, DEFAULT_SCREEN};

/// What the patcher should do with a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentAction {
    /// Insert or replace the node's text.
    Write(String),
    /// Remove the node if present.
    Delete,
}

/// A rendered fragment with its identity and target screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub id: String,
    /// Screen whose anchor new nodes are inserted before.
    pub screen: String,
    pub action: FragmentAction,
}

impl Fragment {
    /// The fragment text, or `None` for a delete.
    pub fn text(&self) -> Option<&str> {
        match &self.action {
            FragmentAction::Write(text) => Some(text),
            FragmentAction::Delete => None,
        }
    }

    pub fn is_delete(&self) -> bool {
        self.action == FragmentAction::Delete
    }
}

/// Derive a fragment id from a base id and an optional screen.
pub fn fragment_id(base: &str, screen: Option<&str>) -> String {
    match screen {
        Some(screen) if !screen.is_empty() && screen != DEFAULT_SCREEN => {
            format!("{base}--{screen}")
        }
        _ => base.to_owned(),
    }
}

/// Render a style declaration as a standalone fragment.
///
/// Requires the caller-supplied id. Style fragments always write.
pub fn render_style(
    screens: &ScreenRegistry,
    style: &StyleDeclaration,
) -> Result<Fragment, DeclarationError> {
    let base = style
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(DeclarationError::MissingId)?;
    if style.selector.trim().is_empty() {
        return Err(DeclarationError::MissingSelector);
    }
    let screen = style.screen_name();
    Ok(Fragment {
        id: fragment_id(base, style.screen.as_deref()),
        screen: screen.to_owned(),
        action: FragmentAction::Write(render_block(
            screens.get(screen),
            slice::from_ref(style),
            &[],
        )),
    })
}

/// Render a custom property as a standalone fragment.
///
/// Root-scoped properties get their own `:root{...}`; an empty value renders
/// as a delete.
pub fn render_custom_property(
    screens: &ScreenRegistry,
    property: &CustomPropertyDeclaration,
) -> Result<Fragment, DeclarationError> {
    let base = property.name.trim_start_matches("--");
    if base.trim().is_empty() {
        return Err(DeclarationError::MissingName);
    }
    let screen = screen_key(property.screen.as_deref());
    let action = if property.is_delete() {
        FragmentAction::Delete
    } else {
        FragmentAction::Write(render_block(
            screens.get(screen),
            &[],
            slice::from_ref(property),
        ))
    };
    Ok(Fragment {
        id: fragment_id(base, property.screen.as_deref()),
        screen: screen.to_owned(),
        action,
    })
}
