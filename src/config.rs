//! Stylesheet configuration: handle, anchor naming, preview block class.

use serde::Deserialize;

/// Errors from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("stylesheet handle must not be empty")]
    MissingHandle,
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for a managed stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    /// Stylesheet handle; the inline block id is `{handle}-inline-css`.
    pub handle: String,
    /// Anchor node ids are `{anchor_prefix}{screen}`.
    pub anchor_prefix: String,
    /// Class on the preview `<style>` block.
    pub block_class: String,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            handle: "theme".into(),
            anchor_prefix: "style-hook--".into(),
            block_class: "style-block".into(),
        }
    }
}

impl StylesConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot name a stylesheet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.handle.trim().is_empty() {
            return Err(ConfigError::MissingHandle);
        }
        Ok(())
    }

    /// Set the handle (builder).
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = handle.into();
        self
    }

    /// Set the anchor prefix (builder).
    pub fn with_anchor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.anchor_prefix = prefix.into();
        self
    }

    /// Set the preview block class (builder).
    pub fn with_block_class(mut self, class: impl Into<String>) -> Self {
        self.block_class = class.into();
        self
    }

    /// The id of the inline `<style>` block.
    pub fn inline_block_id(&self) -> String {
        format!("{}-inline-css", self.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = StylesConfig::new();
        assert_eq!(config.handle, "theme");
        assert_eq!(config.anchor_prefix, "style-hook--");
        assert_eq!(config.inline_block_id(), "theme-inline-css");
    }

    #[test]
    fn builders() {
        let config = StylesConfig::new()
            .with_handle("child")
            .with_anchor_prefix("hook-")
            .with_block_class("live");
        assert_eq!(config.inline_block_id(), "child-inline-css");
        assert_eq!(config.anchor_prefix, "hook-");
        assert_eq!(config.block_class, "live");
    }

    #[test]
    fn from_json_partial() {
        let config = StylesConfig::from_json(r#"{"handle":"starter"}"#).unwrap();
        assert_eq!(config.handle, "starter");
        assert_eq!(config.anchor_prefix, "style-hook--");
    }

    #[test]
    fn from_json_rejects_empty_handle() {
        assert!(matches!(
            StylesConfig::from_json(r#"{"handle":""}"#),
            Err(ConfigError::MissingHandle)
        ));
        assert!(matches!(
            StylesConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
