use thiserror::Error;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown node type '{kind}'")]
    UnknownNodeType { kind: String },

    #[error("Malformed '{kind}' node: {reason}")]
    MalformedNode { kind: String, reason: String },

    #[error("Missing required property '{property}' for node '{node}'")]
    MissingProperty { node: String, property: String },

    #[error("Invalid property '{property}' for node '{node}': {reason}")]
    InvalidProperty {
        node: String,
        property: String,
        reason: String,
    },

    #[error("Invalid value '{value}' for property '{property}'. Expected one of: {expected}")]
    InvalidEnum {
        property: String,
        value: String,
        expected: String,
    },

    #[error("Invalid handler name '{name}'")]
    InvalidHandlerName { name: String },

    #[error("Duplicate key '{key}': sibling keys must be unique")]
    DuplicateKey { key: String },

    #[error("Maximum nesting depth ({max_depth}) exceeded")]
    MaxNestingDepthExceeded { max_depth: usize },

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    // --- chat message errors ---

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message cannot be only whitespace")]
    WhitespaceMessage,

    #[error("Message is too long (max {max} characters)")]
    MessageTooLong { max: usize },
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for UiError {
    fn from(err: serde_yaml::Error) -> Self {
        UiError::ConfigError(err.to_string())
    }
}
