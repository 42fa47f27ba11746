//! Engine configuration.
//!
//! Every field has a default, so an empty document (or no file at all) gives
//! the stock behaviour. Keys are camelCase to match node data.
//!
//! ```yaml
//! likeHandler: likeDemo
//! maxMessageLength: 1000
//! maxNestingDepth: 20
//! strictDynamicMatching: false
//! ```

use crate::error::{UiError, UiResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Handler name that turns a button inside a form into a like counter.
    pub like_handler: String,
    pub max_message_length: usize,
    pub max_nesting_depth: usize,
    /// Match dynamic query patterns on word boundaries instead of raw substrings.
    pub strict_dynamic_matching: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            like_handler: "likeDemo".to_string(),
            max_message_length: 1000,
            max_nesting_depth: 20,
            strict_dynamic_matching: false,
        }
    }
}

impl UiConfig {
    pub fn from_yaml(yaml: &str) -> UiResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(UiConfig::default());
        }
        let config: UiConfig = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| UiError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    fn check(&self) -> UiResult<()> {
        if self.like_handler.trim().is_empty() {
            return Err(UiError::ConfigError(
                "likeHandler must not be empty".to_string(),
            ));
        }
        if self.max_message_length == 0 {
            return Err(UiError::ConfigError(
                "maxMessageLength must be greater than 0".to_string(),
            ));
        }
        if self.max_nesting_depth == 0 {
            return Err(UiError::ConfigError(
                "maxNestingDepth must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.like_handler, "likeDemo");
        assert_eq!(config.max_message_length, 1000);
        assert_eq!(config.max_nesting_depth, 20);
        assert!(!config.strict_dynamic_matching);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(UiConfig::from_yaml("").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = UiConfig::from_yaml("strictDynamicMatching: true\nlikeHandler: heart\n").unwrap();
        assert!(config.strict_dynamic_matching);
        assert_eq!(config.like_handler, "heart");
        assert_eq!(config.max_message_length, 1000);
    }

    #[test]
    fn test_rejects_zero_limits() {
        let result = UiConfig::from_yaml("maxMessageLength: 0");
        assert!(matches!(result, Err(UiError::ConfigError(_))));
    }

    #[test]
    fn test_bad_yaml() {
        let result = UiConfig::from_yaml("maxNestingDepth: [1, 2");
        assert!(matches!(result, Err(UiError::ConfigError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = UiConfig::load("/nonexistent/jsonui.yaml");
        assert!(matches!(result, Err(UiError::ConfigError(_))));
    }
}
