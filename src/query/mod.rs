//! Free-text query -> node.
//!
//! Two phases. Narrow dynamic patterns ("ghost button", "login form") are
//! tried first and answer with one purpose-built node. Otherwise the query is
//! matched against the five category showcases, each checked by phrase, then
//! keyword combination, then single keyword. Anything left over gets the
//! generic help text and no component.

mod patterns;

pub use patterns::PresetKind;

use patterns::{Category, CATEGORIES, DYNAMIC_PATTERNS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::UiConfig;
use crate::node::Node;
use crate::presets;

/// Reply to empty or non-text input.
pub const GREETING: &str = "I can help you explore our component library!";

/// Reply when nothing matched.
pub const FALLBACK_RESPONSE: &str = "I can help you explore our component library! Try asking about buttons, cards, inputs, or chat bubbles.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParsedQuery {
    Preset {
        #[serde(rename = "componentType")]
        component_type: PresetKind,
        #[serde(rename = "responseText")]
        response_text: String,
    },
    Dynamic {
        node: Node,
        #[serde(rename = "responseText")]
        response_text: String,
    },
    Fallback {
        #[serde(rename = "responseText")]
        response_text: String,
    },
}

impl ParsedQuery {
    fn fallback(text: &str) -> Self {
        ParsedQuery::Fallback {
            response_text: text.to_string(),
        }
    }

    pub fn response_text(&self) -> &str {
        match self {
            ParsedQuery::Preset { response_text, .. }
            | ParsedQuery::Dynamic { response_text, .. }
            | ParsedQuery::Fallback { response_text } => response_text,
        }
    }

    pub fn component_type(&self) -> Option<PresetKind> {
        match self {
            ParsedQuery::Preset { component_type, .. } => Some(*component_type),
            _ => None,
        }
    }

    /// The node to render, built from the preset when this is a category match.
    pub fn node(&self) -> Option<Node> {
        match self {
            ParsedQuery::Preset { component_type, .. } => Some(presets::build(*component_type)),
            ParsedQuery::Dynamic { node, .. } => Some(node.clone()),
            ParsedQuery::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedQuery::Fallback { .. })
    }
}

/// Compiled `\b<phrase>\b` for every phrase and dynamic trigger.
fn word_patterns() -> &'static HashMap<&'static str, Regex> {
    static WORD_PATTERNS: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    WORD_PATTERNS.get_or_init(|| {
        let phrases = CATEGORIES.iter().flat_map(|c| c.phrases.iter());
        let triggers = DYNAMIC_PATTERNS.iter().flat_map(|p| p.triggers.iter());
        phrases
            .chain(triggers)
            .filter_map(|p| {
                Regex::new(&format!(r"\b{}\b", regex::escape(p)))
                    .ok()
                    .map(|re| (*p, re))
            })
            .collect()
    })
}

fn contains_word(query: &str, phrase: &str) -> bool {
    match word_patterns().get(phrase) {
        Some(re) => re.is_match(query),
        None => false,
    }
}

fn category_matches(category: &Category, query: &str) -> bool {
    category.phrases.iter().any(|p| contains_word(query, p))
        || category
            .combinations
            .iter()
            .any(|all| all.iter().all(|k| query.contains(k)))
        || category.keywords.iter().any(|k| query.contains(k))
}

#[derive(Debug, Clone, Default)]
pub struct QueryParser {
    strict_dynamic: bool,
}

impl QueryParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &UiConfig) -> Self {
        QueryParser {
            strict_dynamic: config.strict_dynamic_matching,
        }
    }

    /// Match dynamic triggers on word boundaries too.
    pub fn strict(mut self, on: bool) -> Self {
        self.strict_dynamic = on;
        self
    }

    pub fn parse(&self, query: &str) -> ParsedQuery {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return ParsedQuery::fallback(GREETING);
        }

        for pattern in DYNAMIC_PATTERNS {
            let hit = pattern.triggers.iter().any(|t| {
                if self.strict_dynamic {
                    contains_word(&query, t)
                } else {
                    query.contains(t)
                }
            });
            if hit {
                tracing::trace!(query = %query, pattern = ?pattern.triggers, "dynamic match");
                return ParsedQuery::Dynamic {
                    node: (pattern.build)(),
                    response_text: pattern.response.to_string(),
                };
            }
        }

        match Self::match_category(&query) {
            Some(kind) => {
                tracing::trace!(query = %query, category = kind.as_str(), "category match");
                ParsedQuery::Preset {
                    component_type: kind,
                    response_text: kind.response_text().to_string(),
                }
            }
            None => ParsedQuery::fallback(FALLBACK_RESPONSE),
        }
    }

    /// Parse an arbitrary JSON value. Anything but a string is treated as
    /// empty input.
    pub fn parse_value(&self, value: &Value) -> ParsedQuery {
        match value.as_str() {
            Some(query) => self.parse(query),
            None => ParsedQuery::fallback(GREETING),
        }
    }

    /// Category phase only.
    pub fn detect_category(&self, query: &str) -> Option<PresetKind> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        Self::match_category(&query)
    }

    fn match_category(query: &str) -> Option<PresetKind> {
        CATEGORIES
            .iter()
            .find(|c| category_matches(c, query))
            .map(|c| c.kind)
    }
}

/// Parse with default settings.
pub fn parse(query: &str) -> ParsedQuery {
    QueryParser::default().parse(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phrase_respects_word_boundaries() {
        let buttonhole = "buttonhole";
        assert!(!CATEGORIES[1].phrases.iter().any(|p| contains_word(buttonhole, p)));
        assert!(contains_word("a button please", "button"));
        assert!(contains_word("button", "button"));
    }

    #[test]
    fn test_every_phrase_compiles() {
        let total: usize = CATEGORIES.iter().map(|c| c.phrases.len()).sum::<usize>()
            + DYNAMIC_PATTERNS.iter().map(|p| p.triggers.len()).sum::<usize>();
        // phrases shared with dynamic triggers are compiled once
        assert!(word_patterns().len() <= total);
        for c in &CATEGORIES {
            for p in c.phrases {
                assert!(word_patterns().contains_key(p), "missing {}", p);
            }
        }
    }

    #[test]
    fn test_combination_needs_all_words() {
        assert_eq!(
            parse("primary and secondary").component_type(),
            Some(PresetKind::ButtonVariants)
        );
        assert_eq!(
            parse("what style is this").component_type(),
            None
        );
    }

    #[test]
    fn test_chat_bubbles_outrank_buttons() {
        assert_eq!(
            parse("message button").component_type(),
            Some(PresetKind::ChatBubbles)
        );
    }

    #[test]
    fn test_non_string_input_falls_back() {
        let parser = QueryParser::new();
        for value in [json!(null), json!(42), json!({"q": "button"}), json!(["card"])] {
            assert_eq!(parser.parse_value(&value), ParsedQuery::fallback(GREETING));
        }
        assert_eq!(
            parser.parse_value(&json!("show me cards")).component_type(),
            Some(PresetKind::CardVariants)
        );
    }

    #[test]
    fn test_whitespace_is_empty() {
        assert_eq!(parse("   \n\t"), ParsedQuery::fallback(GREETING));
    }

    #[test]
    fn test_strict_dynamic_matching() {
        // "dictate" hides "cta"
        assert!(matches!(parse("dictate a note"), ParsedQuery::Dynamic { .. }));
        let strict = QueryParser::new().strict(true);
        assert_eq!(
            strict.parse("dictate a note").component_type(),
            Some(PresetKind::ButtonVariants)
        );
        assert!(matches!(strict.parse("a cta please"), ParsedQuery::Dynamic { .. }));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(parse("show me cards")).unwrap();
        assert_eq!(value["kind"], "preset");
        assert_eq!(value["componentType"], "card-variants");
        let value = serde_json::to_value(parse("ghost button")).unwrap();
        assert_eq!(value["kind"], "dynamic");
        assert_eq!(value["node"]["type"], "button");
    }

    #[test]
    fn test_detect_category() {
        let parser = QueryParser::new();
        assert_eq!(parser.detect_category("ghost button"), Some(PresetKind::ButtonVariants));
        assert_eq!(parser.detect_category("hello"), None);
        assert_eq!(parser.detect_category(""), None);
    }
}
