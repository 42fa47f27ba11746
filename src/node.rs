use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::styles::{cx, title_case, CardVariant};
use crate::validator::validate_node;

/// One declarative UI element. The `type` field selects the kind.
///
/// Unrecognised `type` values decode to [`Node::Unknown`]; children that fail
/// to decode become [`Node::Malformed`]. Both render as nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "container")]
    Container(Container),
    #[serde(rename = "text")]
    Text(Text),
    #[serde(rename = "card")]
    Card(Card),
    #[serde(rename = "card-group")]
    CardGroup(CardGroup),
    #[serde(rename = "chatBubble")]
    ChatBubble(ChatBubble),
    #[serde(rename = "chat-group")]
    ChatGroup(ChatGroup),
    #[serde(rename = "button")]
    Button(Button),
    #[serde(rename = "button-group")]
    ButtonGroup(ButtonGroup),
    #[serde(rename = "input")]
    Input(Input),
    #[serde(rename = "input-group")]
    InputGroup(InputGroup),
    #[serde(rename = "select")]
    Select(Select),
    #[serde(rename = "checkbox")]
    Checkbox(Checkbox),
    #[serde(rename = "divider")]
    Divider(Divider),
    #[serde(rename = "form")]
    Form(Form),
    #[serde(rename = "ui-group")]
    UiGroup(UiGroup),
    /// Produced only by lenient decoding; never serialized.
    #[serde(skip)]
    Malformed(Malformed),
    #[serde(other)]
    Unknown,
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Decode a list of child nodes one by one so that a single bad child does
/// not take its siblings down with it.
fn lenient_nodes<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().map(Node::from_value_lenient).collect())
}

/// Symbolic handler bindings. Values are names looked up in the event registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Events {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_submit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_reset: Option<String>,
}

impl Events {
    pub fn click(name: &str) -> Self {
        Events {
            on_click: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn submit(name: &str) -> Self {
        Events {
            on_submit: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_click.is_none() && self.on_submit.is_none() && self.on_reset.is_none()
    }

    /// All bound handler names, in slot order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [&self.on_click, &self.on_submit, &self.on_reset]
            .into_iter()
            .filter_map(|n| n.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ClassProps {
    pub fn new(class_name: &str) -> Self {
        ClassProps {
            class_name: Some(class_name.to_string()),
        }
    }
}

/// Generic wrapper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: ClassProps,
    #[serde(
        default,
        deserialize_with = "lenient_nodes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Collapse the content behind a "Show more" toggle past this many chars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_after: Option<usize>,
}

/// Literal text. `children` is the content, never interpreted as markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: TextProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Text {
    pub fn new(content: &str) -> Self {
        Text {
            children: Some(content.to_string()),
            ..Default::default()
        }
    }

    pub fn styled(content: &str, class_name: &str) -> Self {
        Text {
            props: TextProps {
                class_name: Some(class_name.to_string()),
                collapse_after: None,
            },
            children: Some(content.to_string()),
            key: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: CardProps,
    #[serde(
        default,
        deserialize_with = "lenient_nodes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Shorthand for a grid of showcase cards, one per variant name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardGroup {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: ClassProps,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl CardGroup {
    pub const LAYOUT: &'static str = "grid grid-cols-2 gap-4";

    pub fn new(variants: &[&str]) -> Self {
        CardGroup {
            variants: variants.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    /// The explicit tree this group stands for.
    pub fn expand(&self) -> Container {
        let children = self
            .variants
            .iter()
            .map(|name| {
                let variant = CardVariant::resolve(Some(name));
                Node::Card(Card {
                    props: CardProps {
                        class_name: None,
                        title: Some(variant.title().to_string()),
                        description: Some(variant.description().to_string()),
                        variant: Some(variant.as_str().to_string()),
                    },
                    children: Vec::new(),
                    key: None,
                })
            })
            .collect();
        Container {
            props: group_props(Self::LAYOUT, &self.props),
            children,
            key: self.key.clone(),
        }
    }
}

fn group_props(layout: &str, props: &ClassProps) -> ClassProps {
    ClassProps::new(&cx(&[layout, props.class_name.as_deref().unwrap_or("")]))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub role: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl BubbleProps {
    pub fn new(role: &str, text: &str, timestamp: Option<&str>) -> Self {
        BubbleProps {
            class_name: None,
            role: role.to_string(),
            text: text.to_string(),
            timestamp: timestamp.map(str::to_string),
            variant: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBubble {
    pub props: BubbleProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatGroup {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: ClassProps,
    #[serde(default)]
    pub messages: Vec<BubbleProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ChatGroup {
    pub const LAYOUT: &'static str = "space-y-2";

    pub fn new(messages: Vec<BubbleProps>) -> Self {
        ChatGroup {
            messages,
            ..Default::default()
        }
    }

    pub fn expand(&self) -> Container {
        Container {
            props: group_props(Self::LAYOUT, &self.props),
            children: self
                .messages
                .iter()
                .map(|m| {
                    Node::ChatBubble(ChatBubble {
                        props: m.clone(),
                        key: None,
                    })
                })
                .collect(),
            key: self.key.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// A clickable button.
///
/// Accepts both `props.label`/`props.variant` and the flat `text`/`variant`
/// shorthand; the `props` form wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: ButtonProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Events::is_empty")]
    pub events: Events,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Button {
    pub fn shorthand(variant: &str, text: &str) -> Self {
        Button {
            variant: Some(variant.to_string()),
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn variant_name(&self) -> Option<&str> {
        self.props.variant.as_deref().or(self.variant.as_deref())
    }

    pub fn label(&self) -> &str {
        self.props
            .label
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or("Button")
    }
}

/// Buttons for several variants sharing one click handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonGroup {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: ClassProps,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Events::is_empty")]
    pub events: Events,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ButtonGroup {
    pub const LAYOUT: &'static str = "flex flex-wrap items-center gap-2";

    /// Each button carries `{variant}` as its payload for the shared handler.
    pub fn expand(&self) -> Container {
        let events = Events {
            on_click: self.events.on_click.clone(),
            ..Default::default()
        };
        Container {
            props: group_props(Self::LAYOUT, &self.props),
            children: self
                .variants
                .iter()
                .map(|v| {
                    Node::Button(Button {
                        props: ButtonProps {
                            label: Some(title_case(v)),
                            variant: Some(v.clone()),
                            ..Default::default()
                        },
                        events: events.clone(),
                        event_payload: Some(json!({ "variant": v })),
                        ..Default::default()
                    })
                })
                .collect(),
            key: self.key.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl InputProps {
    pub fn new(name: &str, label: &str, input_type: Option<&str>, placeholder: &str) -> Self {
        InputProps {
            name: name.to_string(),
            label: Some(label.to_string()),
            input_type: input_type.map(str::to_string),
            placeholder: Some(placeholder.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub props: InputProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Input {
    pub fn new(props: InputProps) -> Self {
        Input { props, key: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputGroup {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: ClassProps,
    #[serde(default)]
    pub inputs: Vec<InputProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl InputGroup {
    pub const LAYOUT: &'static str = "space-y-3";

    pub fn new(inputs: Vec<InputProps>) -> Self {
        InputGroup {
            inputs,
            ..Default::default()
        }
    }

    pub fn expand(&self) -> Container {
        Container {
            props: group_props(Self::LAYOUT, &self.props),
            children: self
                .inputs
                .iter()
                .map(|p| Node::Input(Input::new(p.clone())))
                .collect(),
            key: self.key.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub props: SelectProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_checked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkbox {
    pub props: CheckboxProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Checkbox {
    pub fn new(name: &str, label: &str) -> Self {
        Checkbox {
            props: CheckboxProps {
                name: name.to_string(),
                label: label.to_string(),
                ..Default::default()
            },
            key: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: ClassProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormProps {
    pub fn titled(title: &str) -> Self {
        FormProps {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

/// A form with its own Submit and Reset buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: FormProps,
    #[serde(
        default,
        deserialize_with = "lenient_nodes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Events::is_empty")]
    pub events: Events,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A composite of components submitted together. A child button without
/// its own click handler submits the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiGroup {
    #[serde(default, skip_serializing_if = "is_default")]
    pub props: FormProps,
    #[serde(
        default,
        deserialize_with = "lenient_nodes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub components: Vec<Node>,
    #[serde(default, skip_serializing_if = "Events::is_empty")]
    pub events: Events,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A node that could not be decoded, kept so that validation can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    pub kind: Option<String>,
    pub reason: String,
}

impl Node {
    /// Decode and strictly validate a JSON node.
    pub fn from_json(json: &str) -> UiResult<Node> {
        Self::from_json_with_config(json, &UiConfig::default())
    }

    pub fn from_json_with_config(json: &str, config: &UiConfig) -> UiResult<Node> {
        let node: Node = serde_json::from_str(json)?;
        validate_node(&node, config)?;
        Ok(node)
    }

    /// Decode without failing. Anything that is not a well-formed node becomes
    /// [`Node::Malformed`].
    pub fn from_json_lenient(json: &str) -> Node {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Node::from_value_lenient(value),
            Err(e) => {
                tracing::debug!(error = %e, "node payload is not valid JSON");
                Node::Malformed(Malformed {
                    kind: None,
                    reason: e.to_string(),
                })
            }
        }
    }

    pub fn from_value_lenient(value: Value) -> Node {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string);
        match serde_json::from_value::<Node>(value) {
            Ok(node) => node,
            Err(e) => {
                tracing::debug!(kind = ?kind, error = %e, "recovered malformed node");
                Node::Malformed(Malformed {
                    kind,
                    reason: e.to_string(),
                })
            }
        }
    }

    pub fn to_json(&self) -> UiResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The `type` tag of this node.
    pub fn kind(&self) -> &str {
        match self {
            Node::Container(_) => "container",
            Node::Text(_) => "text",
            Node::Card(_) => "card",
            Node::CardGroup(_) => "card-group",
            Node::ChatBubble(_) => "chatBubble",
            Node::ChatGroup(_) => "chat-group",
            Node::Button(_) => "button",
            Node::ButtonGroup(_) => "button-group",
            Node::Input(_) => "input",
            Node::InputGroup(_) => "input-group",
            Node::Select(_) => "select",
            Node::Checkbox(_) => "checkbox",
            Node::Divider(_) => "divider",
            Node::Form(_) => "form",
            Node::UiGroup(_) => "ui-group",
            Node::Malformed(m) => m.kind.as_deref().unwrap_or("malformed"),
            Node::Unknown => "unknown",
        }
    }

    /// Stable external key, when the source data supplied one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Node::Container(x) => x.key.as_deref(),
            Node::Text(x) => x.key.as_deref(),
            Node::Card(x) => x.key.as_deref(),
            Node::CardGroup(x) => x.key.as_deref(),
            Node::ChatBubble(x) => x.key.as_deref(),
            Node::ChatGroup(x) => x.key.as_deref(),
            Node::Button(x) => x.key.as_deref(),
            Node::ButtonGroup(x) => x.key.as_deref(),
            Node::Input(x) => x.key.as_deref(),
            Node::InputGroup(x) => x.key.as_deref(),
            Node::Select(x) => x.key.as_deref(),
            Node::Checkbox(x) => x.key.as_deref(),
            Node::Divider(x) => x.key.as_deref(),
            Node::Form(x) => x.key.as_deref(),
            Node::UiGroup(x) => x.key.as_deref(),
            Node::Malformed(_) | Node::Unknown => None,
        }
    }

    /// Directly nested nodes (not the leaf data of group kinds).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(x) => &x.children,
            Node::Card(x) => &x.children,
            Node::Form(x) => &x.children,
            Node::UiGroup(x) => &x.components,
            _ => &[],
        }
    }

    pub fn events(&self) -> Option<&Events> {
        match self {
            Node::Button(x) => Some(&x.events),
            Node::ButtonGroup(x) => Some(&x.events),
            Node::Form(x) => Some(&x.events),
            Node::UiGroup(x) => Some(&x.events),
            _ => None,
        }
    }
}

impl From<Container> for Node {
    fn from(c: Container) -> Self {
        Node::Container(c)
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

impl From<Button> for Node {
    fn from(b: Button) -> Self {
        Node::Button(b)
    }
}

impl From<Input> for Node {
    fn from(i: Input) -> Self {
        Node::Input(i)
    }
}

impl From<Checkbox> for Node {
    fn from(c: Checkbox) -> Self {
        Node::Checkbox(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_button_shorthand() {
        let node: Node =
            serde_json::from_str(r#"{"type":"button","variant":"ghost","text":"Ghost Button"}"#)
                .unwrap();
        let Node::Button(b) = node else {
            panic!("Expected button node");
        };
        assert_eq!(b.variant_name(), Some("ghost"));
        assert_eq!(b.label(), "Ghost Button");
    }

    #[test]
    fn test_props_label_wins_over_shorthand() {
        let node: Node = serde_json::from_str(
            r#"{"type":"button","text":"flat","props":{"label":"nested","variant":"secondary"},"variant":"ghost"}"#,
        )
        .unwrap();
        let Node::Button(b) = node else {
            panic!("Expected button node");
        };
        assert_eq!(b.label(), "nested");
        assert_eq!(b.variant_name(), Some("secondary"));
    }

    #[test]
    fn test_unknown_type_decodes_to_unknown() {
        let node: Node = serde_json::from_str(r#"{"type":"carousel","slides":[1,2]}"#).unwrap();
        assert_eq!(node, Node::Unknown);
    }

    #[test]
    fn test_malformed_child_does_not_poison_siblings() {
        let node: Node = serde_json::from_str(
            r#"{"type":"container","children":[
                {"type":"input"},
                {"type":"text","children":"still here"}
            ]}"#,
        )
        .unwrap();
        let children = node.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], Node::Malformed(m) if m.kind.as_deref() == Some("input")));
        assert_eq!(children[1], Node::Text(Text::new("still here")));
    }

    #[test]
    fn test_lenient_top_level_never_fails() {
        assert!(matches!(Node::from_json_lenient("{not json"), Node::Malformed(_)));
        assert!(matches!(
            Node::from_json_lenient(r#"{"type":"chatBubble"}"#),
            Node::Malformed(_)
        ));
        assert_eq!(Node::from_json_lenient(r#"{"type":"??"}"#), Node::Unknown);
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let node = Node::Button(Button::shorthand("ghost", "Ghost Button"));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "button", "variant": "ghost", "text": "Ghost Button"})
        );
    }

    #[test]
    fn test_card_group_expand_uses_variant_metadata() {
        let group = CardGroup::new(&["elevated", "mystery"]);
        let expanded = group.expand();
        assert_eq!(expanded.children.len(), 2);
        let Node::Card(first) = &expanded.children[0] else {
            panic!("Expected card");
        };
        assert_eq!(first.props.title.as_deref(), Some("Elevated"));
        assert_eq!(first.props.description.as_deref(), Some("Card with large shadow"));
        let Node::Card(second) = &expanded.children[1] else {
            panic!("Expected card");
        };
        assert_eq!(second.props.variant.as_deref(), Some("default"));
    }

    #[test]
    fn test_button_group_expand_payloads() {
        let group = ButtonGroup {
            variants: vec!["default".into(), "secondary".into()],
            events: Events::click("likeDemo"),
            ..Default::default()
        };
        let expanded = group.expand();
        let Node::Button(second) = &expanded.children[1] else {
            panic!("Expected button");
        };
        assert_eq!(second.event_payload, Some(json!({"variant": "secondary"})));
        assert_eq!(second.events.on_click.as_deref(), Some("likeDemo"));
        assert_eq!(second.label(), "Secondary");
    }

    #[test]
    fn test_kind_and_key() {
        let node: Node =
            serde_json::from_str(r#"{"type":"divider","key":"sep"}"#).unwrap();
        assert_eq!(node.kind(), "divider");
        assert_eq!(node.key(), Some("sep"));
    }
}
