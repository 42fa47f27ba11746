use crate::config::UiConfig;
use crate::error::{UiError, UiResult};
use crate::node::*;
use crate::styles::{BubbleRole, BubbleVariant, ButtonVariant, CardVariant};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const CARD_VARIANTS: &str = "default, elevated, outlined, gradient";
const BUTTON_VARIANTS: &str = "default, primary, secondary, ghost";
const BUBBLE_ROLES: &str = "user, assistant, system";
const BUBBLE_VARIANTS: &str = "default, gradient";

/// Strictly validate a node tree before it is handed to the renderer.
///
/// Rendering itself tolerates everything this rejects; validation exists for
/// authoring tools and tests that want to know the data is clean.
pub fn validate_node(node: &Node, config: &UiConfig) -> UiResult<()> {
    validate_node_recursive(node, 0, config.max_nesting_depth)
}

fn validate_node_recursive(node: &Node, depth: usize, max_depth: usize) -> UiResult<()> {
    if depth > max_depth {
        return Err(UiError::MaxNestingDepthExceeded { max_depth });
    }

    if let Some(events) = node.events() {
        validate_events(events)?;
    }

    match node {
        Node::Container(c) => validate_children(&c.children, depth, max_depth),
        Node::Text(_) | Node::Divider(_) => Ok(()),
        Node::Card(c) => {
            validate_enum("variant", c.props.variant.as_deref(), CARD_VARIANTS, |v| {
                CardVariant::parse(v).is_some()
            })?;
            validate_children(&c.children, depth, max_depth)
        }
        Node::CardGroup(g) => {
            for v in &g.variants {
                validate_enum("variants", Some(v), CARD_VARIANTS, |v| {
                    CardVariant::parse(v).is_some()
                })?;
            }
            Ok(())
        }
        Node::ChatBubble(b) => validate_bubble(&b.props),
        Node::ChatGroup(g) => g.messages.iter().try_for_each(validate_bubble),
        Node::Button(b) => validate_enum("variant", b.variant_name(), BUTTON_VARIANTS, |v| {
            ButtonVariant::parse(v).is_some()
        }),
        Node::ButtonGroup(g) => {
            for v in &g.variants {
                validate_enum("variants", Some(v), BUTTON_VARIANTS, |v| {
                    ButtonVariant::parse(v).is_some()
                })?;
            }
            Ok(())
        }
        Node::Input(i) => validate_input(&i.props),
        Node::InputGroup(g) => g.inputs.iter().try_for_each(validate_input),
        Node::Select(s) => validate_select(&s.props),
        Node::Checkbox(c) => {
            require_non_empty("checkbox", "name", &c.props.name)?;
            require_non_empty("checkbox", "label", &c.props.label)
        }
        Node::Form(f) => validate_children(&f.children, depth, max_depth),
        Node::UiGroup(g) => validate_children(&g.components, depth, max_depth),
        Node::Malformed(m) => Err(UiError::MalformedNode {
            kind: m.kind.clone().unwrap_or_else(|| "unknown".to_string()),
            reason: m.reason.clone(),
        }),
        Node::Unknown => Err(UiError::UnknownNodeType {
            kind: "unknown".to_string(),
        }),
    }
}

fn validate_children(children: &[Node], depth: usize, max_depth: usize) -> UiResult<()> {
    let mut seen = HashSet::new();
    for child in children {
        if let Some(key) = child.key() {
            if !seen.insert(key) {
                return Err(UiError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
    }
    for child in children {
        validate_node_recursive(child, depth + 1, max_depth)?;
    }
    Ok(())
}

fn validate_events(events: &Events) -> UiResult<()> {
    static HANDLER_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = HANDLER_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.:-]*$").unwrap());

    for name in events.names() {
        if !re.is_match(name) {
            return Err(UiError::InvalidHandlerName {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_enum(
    property: &str,
    value: Option<&str>,
    expected: &str,
    known: impl Fn(&str) -> bool,
) -> UiResult<()> {
    match value {
        Some(v) if !known(v) => Err(UiError::InvalidEnum {
            property: property.to_string(),
            value: v.to_string(),
            expected: expected.to_string(),
        }),
        _ => Ok(()),
    }
}

fn require_non_empty(node: &str, property: &str, value: &str) -> UiResult<()> {
    if value.trim().is_empty() {
        return Err(UiError::MissingProperty {
            node: node.to_string(),
            property: property.to_string(),
        });
    }
    Ok(())
}

fn validate_bubble(props: &BubbleProps) -> UiResult<()> {
    validate_enum("role", Some(&props.role), BUBBLE_ROLES, |v| {
        BubbleRole::parse(v).is_some()
    })?;
    validate_enum("variant", props.variant.as_deref(), BUBBLE_VARIANTS, |v| {
        BubbleVariant::parse(v).is_some()
    })
}

fn validate_input(props: &InputProps) -> UiResult<()> {
    require_non_empty("input", "name", &props.name)
}

fn validate_select(props: &SelectProps) -> UiResult<()> {
    require_non_empty("select", "name", &props.name)?;
    if props.options.is_empty() {
        return Err(UiError::InvalidProperty {
            node: "select".to_string(),
            property: "options".to_string(),
            reason: "must have at least one option".to_string(),
        });
    }
    if let Some(ref default) = props.default_value {
        if !props.options.iter().any(|o| &o.value == default) {
            return Err(UiError::InvalidProperty {
                node: "select".to_string(),
                property: "defaultValue".to_string(),
                reason: format!("'{}' is not one of the option values", default),
            });
        }
    }
    Ok(())
}
