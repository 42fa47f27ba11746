//! Chat turn handling: message in, reply text plus optional component out.

use serde::Serialize;

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::input::{sanitize_input, validate_message};
use crate::node::Node;
use crate::query::{ParsedQuery, PresetKind, QueryParser};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub response_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<PresetKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
}

impl Reply {
    /// The component, once the reply text has been fully shown. The text
    /// always comes first.
    pub fn component_after(&self, text_complete: bool) -> Option<&Node> {
        if text_complete {
            self.node.as_ref()
        } else {
            None
        }
    }
}

impl From<ParsedQuery> for Reply {
    fn from(parsed: ParsedQuery) -> Self {
        Reply {
            node: parsed.node(),
            component_type: parsed.component_type(),
            response_text: parsed.response_text().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assistant {
    parser: QueryParser,
    max_message_length: usize,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl Assistant {
    pub fn new(config: &UiConfig) -> Self {
        Assistant {
            parser: QueryParser::from_config(config),
            max_message_length: config.max_message_length,
        }
    }

    /// Validate, sanitize and answer one user message.
    pub fn respond(&self, message: &str) -> UiResult<Reply> {
        validate_message(message, self.max_message_length)?;
        let clean = sanitize_input(message, self.max_message_length);
        let reply = Reply::from(self.parser.parse(&clean));
        tracing::debug!(
            component = ?reply.component_type,
            has_node = reply.node.is_some(),
            "answered message"
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    #[test]
    fn test_rejects_blank_messages() {
        let assistant = Assistant::default();
        assert_eq!(assistant.respond("   "), Err(UiError::WhitespaceMessage));
        assert_eq!(assistant.respond(""), Err(UiError::EmptyMessage));
    }

    #[test]
    fn test_text_then_component() {
        let reply = Assistant::default().respond("show me cards").unwrap();
        assert_eq!(reply.component_type, Some(PresetKind::CardVariants));
        assert!(reply.component_after(false).is_none());
        assert!(reply.component_after(true).is_some());
    }

    #[test]
    fn test_markup_is_stripped_before_parsing() {
        let reply = Assistant::default().respond("<ghost button>").unwrap();
        assert!(matches!(reply.node, Some(Node::Button(_))));
    }

    #[test]
    fn test_no_match_has_no_component() {
        let reply = Assistant::default().respond("hello there").unwrap();
        assert!(reply.node.is_none());
        assert!(reply.response_text.contains("Try asking about buttons"));
    }
}
