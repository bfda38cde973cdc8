//! The owned styling context: screen registry plus declaration store.
//!
//! [`StyleContext`] is constructed by the host and passed to whatever needs
//! it; nothing in the crate holds global state.

use crate::css::compose::{compose, styleblock};
use crate::css::fragment::{render_custom_property, render_style, Fragment};
use crate::css::model::{CustomPropertyDeclaration, DeclarationError, StyleDeclaration};
use crate::css::store::DeclarationStore;
use crate::screen::{Screen, ScreenError, ScreenRegistry};

#[derive(Debug, Clone, Default)]
pub struct StyleContext {
    screens: ScreenRegistry,
    declarations: DeclarationStore,
}

impl StyleContext {
    /// A context with only the default screen and no declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context over an existing screen registry.
    pub fn with_screens(screens: ScreenRegistry) -> Self {
        Self {
            screens,
            declarations: DeclarationStore::new(),
        }
    }

    pub fn register_screen(&mut self, screen: Screen) -> Result<(), ScreenError> {
        self.screens.register(screen)
    }

    pub fn add_style(&mut self, style: StyleDeclaration) -> Result<(), DeclarationError> {
        self.declarations.add_style(style)
    }

    pub fn add_custom_property(
        &mut self,
        property: CustomPropertyDeclaration,
    ) -> Result<(), DeclarationError> {
        self.declarations.add_custom_property(property)
    }

    /// The full stylesheet.
    pub fn compose(&self) -> String {
        compose(&self.screens, &self.declarations)
    }

    /// The full stylesheet inside a `<style>` element.
    pub fn styleblock(&self, id: Option<&str>) -> String {
        styleblock(&self.screens, &self.declarations, id)
    }

    /// Render one style declaration as a patchable fragment.
    pub fn render_style(&self, style: &StyleDeclaration) -> Result<Fragment, DeclarationError> {
        render_style(&self.screens, style)
    }

    /// Render one custom property as a patchable fragment.
    pub fn render_custom_property(
        &self,
        property: &CustomPropertyDeclaration,
    ) -> Result<Fragment, DeclarationError> {
        render_custom_property(&self.screens, property)
    }

    pub fn screens(&self) -> &ScreenRegistry {
        &self.screens
    }

    pub fn declarations(&self) -> &DeclarationStore {
        &self.declarations
    }
}
