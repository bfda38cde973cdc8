//! Declaration model: style rules, custom properties, ordered property maps.

use serde::Deserialize;

use crate::screen::DEFAULT_SCREEN;

/// Errors from declaration construction. Each variant is an invalid
/// declaration missing one required identity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    #[error("invalid declaration: selector must not be empty")]
    MissingSelector,
    #[error("invalid declaration: custom property name must not be empty")]
    MissingName,
    #[error("invalid declaration: fragment id must not be empty")]
    MissingId,
}

/// Resolve an optional screen name to the registry key it is stored under.
pub(crate) fn screen_key(screen: Option<&str>) -> &str {
    match screen {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_SCREEN,
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// An ordered property → value mapping.
///
/// Setting an existing property replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property, replacing an earlier value without moving it.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Look up a property's value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate pairs in insertion order, including empty values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Iterate only the pairs that are emitted: non-empty name and value.
    pub fn emitted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(p, v)| !p.is_empty() && !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (property, value) in iter {
            properties.set(property, value);
        }
        properties
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Properties {
    /// Strings are taken as-is, numbers are stringified, anything else
    /// (null, bool, nested) becomes an empty value and is dropped on output.
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter()
            .map(|(property, value)| (property, value_text(value)))
            .collect()
    }
}

/// Text of a JSON declaration value: strings as-is, numbers stringified,
/// anything else empty.
pub(crate) fn value_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// StyleDeclaration
// ---------------------------------------------------------------------------

/// A plain style rule tagged to a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// Caller-supplied fragment id, required only for incremental rendering.
    pub id: Option<String>,
    /// Screen name; `None` means the default screen.
    pub screen: Option<String>,
    pub selector: String,
    pub properties: Properties,
}

impl StyleDeclaration {
    /// Create a style declaration. Fails if `selector` is empty.
    pub fn new(
        selector: impl Into<String>,
        properties: Properties,
    ) -> Result<Self, DeclarationError> {
        let selector = selector.into();
        if selector.trim().is_empty() {
            return Err(DeclarationError::MissingSelector);
        }
        Ok(Self {
            id: None,
            screen: None,
            selector,
            properties,
        })
    }

    /// Set the fragment id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the screen (builder).
    pub fn on_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }

    /// The screen this declaration is stored under.
    pub fn screen_name(&self) -> &str {
        screen_key(self.screen.as_deref())
    }
}

// ---------------------------------------------------------------------------
// CustomPropertyDeclaration
// ---------------------------------------------------------------------------

/// A CSS custom property assignment tagged to a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPropertyDeclaration {
    /// Screen name; `None` means the default screen.
    pub screen: Option<String>,
    /// Property name, with or without the leading `--`.
    pub name: String,
    /// Empty means delete.
    pub value: String,
    /// `None` for root-scoped properties, `Some` for contextual ones.
    pub selector: Option<String>,
}

impl CustomPropertyDeclaration {
    /// Create a root-scoped custom property. Fails if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DeclarationError> {
        let name = name.into();
        if name.trim_start_matches("--").trim().is_empty() {
            return Err(DeclarationError::MissingName);
        }
        Ok(Self {
            screen: None,
            name,
            value: value.into(),
            selector: None,
        })
    }

    /// Scope the property to a selector (builder). An empty selector keeps it root-scoped.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        let selector = selector.into();
        self.selector = if selector.trim().is_empty() {
            None
        } else {
            Some(selector)
        };
        self
    }

    /// Set the screen (builder).
    pub fn on_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }

    /// The screen this declaration is stored under.
    pub fn screen_name(&self) -> &str {
        screen_key(self.screen.as_deref())
    }

    /// Whether this property belongs in the shared `:root{}` block.
    pub fn is_root_scoped(&self) -> bool {
        self.selector.is_none()
    }

    /// Whether this declaration deletes rather than assigns.
    pub fn is_delete(&self) -> bool {
        self.value.is_empty()
    }

    /// The property name with exactly one leading `--`.
    pub fn property_name(&self) -> String {
        format!("--{}", self.name.trim_start_matches("--"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn properties_keep_insertion_order() {
        let props = Properties::new()
            .with("color", "red")
            .with("margin", "0")
            .with("color", "blue");
        let pairs: Vec<_> = props.iter().collect();
        assert_eq!(pairs, vec![("color", "blue"), ("margin", "0")]);
        assert_eq!(props.get("color"), Some("blue"));
    }

    #[test]
    fn properties_emitted_skips_empty() {
        let props = Properties::new()
            .with("color", "")
            .with("", "red")
            .with("padding", "1rem");
        let emitted: Vec<_> = props.emitted().collect();
        assert_eq!(emitted, vec![("padding", "1rem")]);
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn properties_from_json_map() {
        let props: Properties =
            serde_json::from_str(r#"{"color":"red","z-index":3,"border":null}"#).unwrap();
        assert_eq!(props.get("color"), Some("red"));
        assert_eq!(props.get("z-index"), Some("3"));
        assert_eq!(props.get("border"), Some(""));
    }

    #[test]
    fn style_requires_selector() {
        assert_eq!(
            StyleDeclaration::new("", Properties::new()),
            Err(DeclarationError::MissingSelector)
        );
        assert_eq!(
            StyleDeclaration::new("   ", Properties::new()),
            Err(DeclarationError::MissingSelector)
        );
    }

    #[test]
    fn style_screen_defaults() {
        let style = StyleDeclaration::new("body", Properties::new()).unwrap();
        assert_eq!(style.screen_name(), DEFAULT_SCREEN);
        let style = style.on_screen("desktop");
        assert_eq!(style.screen_name(), "desktop");
        let style = StyleDeclaration::new("body", Properties::new())
            .unwrap()
            .on_screen("");
        assert_eq!(style.screen_name(), DEFAULT_SCREEN);
    }

    #[test]
    fn custom_property_requires_name() {
        assert_eq!(
            CustomPropertyDeclaration::new("", "red"),
            Err(DeclarationError::MissingName)
        );
        assert_eq!(
            CustomPropertyDeclaration::new("--", "red"),
            Err(DeclarationError::MissingName)
        );
    }

    #[test]
    fn custom_property_name_prefix_not_doubled() {
        let a = CustomPropertyDeclaration::new("accent", "#fff").unwrap();
        let b = CustomPropertyDeclaration::new("--accent", "#fff").unwrap();
        assert_eq!(a.property_name(), "--accent");
        assert_eq!(b.property_name(), "--accent");
    }

    #[test]
    fn custom_property_scope() {
        let root = CustomPropertyDeclaration::new("gap", "1rem").unwrap();
        assert!(root.is_root_scoped());
        let scoped = root.clone().with_selector(".card");
        assert!(!scoped.is_root_scoped());
        let blank = root.with_selector("  ");
        assert!(blank.is_root_scoped());
    }

    #[test]
    fn empty_value_is_delete() {
        let prop = CustomPropertyDeclaration::new("accent", "").unwrap();
        assert!(prop.is_delete());
    }
}
