//! Declaration store: per-screen sequences of style and custom-property declarations.

use std::collections::HashMap;

use tracing::debug;

use crate::css::model::{CustomPropertyDeclaration, DeclarationError, StyleDeclaration};

/// Holds both declaration kinds grouped by screen name, in insertion order.
///
/// Declarations are append-only; a later declaration never merges into an
/// earlier one.
#[derive(Debug, Clone, Default)]
pub struct DeclarationStore {
    styles: HashMap<String, Vec<StyleDeclaration>>,
    custom_properties: HashMap<String, Vec<CustomPropertyDeclaration>>,
}

impl DeclarationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a style declaration to its screen.
    ///
    /// Rejects declarations with an empty selector without recording anything.
    pub fn add_style(&mut self, style: StyleDeclaration) -> Result<(), DeclarationError> {
        if style.selector.trim().is_empty() {
            return Err(DeclarationError::MissingSelector);
        }
        debug!(screen = style.screen_name(), selector = %style.selector, "add style");
        self.styles
            .entry(style.screen_name().to_owned())
            .or_default()
            .push(style);
        Ok(())
    }

    /// Append a custom property declaration to its screen.
    ///
    /// Rejects declarations with an empty name without recording anything.
    pub fn add_custom_property(
        &mut self,
        property: CustomPropertyDeclaration,
    ) -> Result<(), DeclarationError> {
        if property.name.trim_start_matches("--").trim().is_empty() {
            return Err(DeclarationError::MissingName);
        }
        debug!(
            screen = property.screen_name(),
            name = %property.name,
            contextual = !property.is_root_scoped(),
            "add custom property"
        );
        self.custom_properties
            .entry(property.screen_name().to_owned())
            .or_default()
            .push(property);
        Ok(())
    }

    /// Style declarations for a screen. Empty for unknown screens.
    pub fn styles_for(&self, screen: &str) -> &[StyleDeclaration] {
        self.styles.get(screen).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Custom property declarations for a screen. Empty for unknown screens.
    pub fn custom_properties_for(&self, screen: &str) -> &[CustomPropertyDeclaration] {
        self.custom_properties
            .get(screen)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any declaration of either kind targets this screen.
    pub fn has_declarations(&self, screen: &str) -> bool {
        !self.styles_for(screen).is_empty() || !self.custom_properties_for(screen).is_empty()
    }

    /// Names of every screen holding at least one declaration, in no particular order.
    pub fn screens(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self
            .styles
            .keys()
            .chain(self.custom_properties.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names.into_iter()
    }

    /// Total number of stored declarations of both kinds.
    pub fn len(&self) -> usize {
        self.styles.values().map(Vec::len).sum::<usize>()
            + self.custom_properties.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::model::Properties;
    use pretty_assertions::assert_eq;

    fn style(selector: &str) -> StyleDeclaration {
        StyleDeclaration::new(selector, Properties::new().with("color", "red")).unwrap()
    }

    #[test]
    fn add_style_groups_by_screen() {
        let mut store = DeclarationStore::new();
        store.add_style(style("body")).unwrap();
        store.add_style(style("h1").on_screen("desktop")).unwrap();
        store.add_style(style("p")).unwrap();

        let defaults: Vec<_> = store
            .styles_for("default")
            .iter()
            .map(|s| s.selector.as_str())
            .collect();
        assert_eq!(defaults, vec!["body", "p"]);
        assert_eq!(store.styles_for("desktop").len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn invalid_style_leaves_store_unchanged() {
        let mut store = DeclarationStore::new();
        store.add_style(style("body")).unwrap();
        let mut broken = style("body");
        broken.selector.clear();
        assert_eq!(store.add_style(broken), Err(DeclarationError::MissingSelector));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn invalid_custom_property_leaves_store_unchanged() {
        let mut store = DeclarationStore::new();
        let mut broken = CustomPropertyDeclaration::new("accent", "red").unwrap();
        broken.name = String::new();
        assert_eq!(
            store.add_custom_property(broken),
            Err(DeclarationError::MissingName)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_screen_reads_empty() {
        let store = DeclarationStore::new();
        assert!(store.styles_for("nowhere").is_empty());
        assert!(store.custom_properties_for("nowhere").is_empty());
        assert!(!store.has_declarations("nowhere"));
    }

    #[test]
    fn repeated_declarations_are_not_merged() {
        let mut store = DeclarationStore::new();
        let accent = CustomPropertyDeclaration::new("accent", "red").unwrap();
        store.add_custom_property(accent.clone()).unwrap();
        store
            .add_custom_property(CustomPropertyDeclaration { value: "blue".into(), ..accent })
            .unwrap();
        assert_eq!(store.custom_properties_for("default").len(), 2);
    }

    #[test]
    fn screens_lists_both_kinds() {
        let mut store = DeclarationStore::new();
        store.add_style(style("body").on_screen("mobile")).unwrap();
        store
            .add_custom_property(
                CustomPropertyDeclaration::new("gap", "1rem")
                    .unwrap()
                    .on_screen("desktop"),
            )
            .unwrap();
        store.add_style(style("h1").on_screen("desktop")).unwrap();
        assert_eq!(store.screens().collect::<Vec<_>>(), vec!["desktop", "mobile"]);
    }
}
