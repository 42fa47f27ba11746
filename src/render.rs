//! Node -> Element interpreter.
//!
//! A single recursive dispatch over the closed set of node kinds. Rendering is
//! pure: the same node and the same [`LocalState`] always give the same tree.
//! Every element that can be interacted with carries a key, either the node's
//! position path (`0`, `0.2`, `0.2.1`) or, where the data supplied one, the
//! node's external key as a `#`-marked segment (`0.#signup.1`). Controls the
//! renderer adds on its own hang off their owner's key with a `:` suffix
//! (`0.#signup:submit`), so no external key can shadow them.

use crate::config::UiConfig;
use crate::element::{Action, Element, Tag};
use crate::node::*;
use crate::state::{FieldValue, LocalState};
use crate::styles::*;

const ROOT_KEY: &str = "0";
const COLLAPSED_SUFFIX: &str = "…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    Form,
    UiGroup,
}

/// The nearest enclosing form, if any.
#[derive(Debug, Clone, Copy)]
struct FormScope<'a> {
    key: &'a str,
    kind: FormKind,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: UiConfig,
}

/// Render with the default configuration and no interaction state.
pub fn render(node: &Node) -> Element {
    Renderer::default().render(node)
}

/// Key of the root element for `node`.
pub fn root_key(node: &Node) -> String {
    match node.key() {
        Some(key) => key_segment(key),
        None => ROOT_KEY.to_string(),
    }
}

/// Key of a renderer-generated control (`submit`, `reset`, `toggle`) owned by
/// the element keyed `owner`.
pub fn control_key(owner: &str, control: &str) -> String {
    format!("{}:{}", owner, control)
}

fn child_key(parent: &str, index: usize, child: &Node) -> String {
    match child.key() {
        Some(key) => format!("{}.{}", parent, key_segment(key)),
        None => format!("{}.{}", parent, index),
    }
}

/// `#` keeps external keys apart from positional indices; `.` and `:` are
/// escaped so a key cannot forge a deeper path or a control suffix.
fn key_segment(key: &str) -> String {
    let mut segment = String::with_capacity(key.len() + 1);
    segment.push('#');
    for c in key.chars() {
        match c {
            '%' => segment.push_str("%25"),
            '.' => segment.push_str("%2E"),
            ':' => segment.push_str("%3A"),
            c => segment.push(c),
        }
    }
    segment
}

impl Renderer {
    pub fn new(config: UiConfig) -> Self {
        Renderer { config }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn render(&self, node: &Node) -> Element {
        self.render_with_state(node, &LocalState::default())
    }

    pub fn render_with_state(&self, node: &Node, state: &LocalState) -> Element {
        self.render_node(node, &root_key(node), None, state)
    }

    fn render_node(
        &self,
        node: &Node,
        key: &str,
        form: Option<FormScope>,
        state: &LocalState,
    ) -> Element {
        match node {
            Node::Container(c) => self.render_container(c, key, form, state),
            Node::Text(t) => render_text(t, key, state),
            Node::Card(c) => self.render_card(c, key, form, state),
            Node::CardGroup(g) => self.render_container(&g.expand(), key, form, state),
            Node::ChatBubble(b) => render_bubble(&b.props, key),
            Node::ChatGroup(g) => self.render_container(&g.expand(), key, form, state),
            Node::Button(b) => render_button(b, key, form),
            Node::ButtonGroup(g) => self.render_container(&g.expand(), key, form, state),
            Node::Input(i) => render_input(&i.props, key, state),
            Node::InputGroup(g) => self.render_container(&g.expand(), key, form, state),
            Node::Select(s) => render_select(&s.props, key, state),
            Node::Checkbox(c) => render_checkbox(&c.props, key, state),
            Node::Divider(d) => Tag::new("hr")
                .key(key)
                .class(cx(&["my-3 border-gray-200", class_of(&d.props)]))
                .into(),
            Node::Form(f) => self.render_form(f, key, state),
            Node::UiGroup(g) => self.render_ui_group(g, key, state),
            Node::Malformed(m) => {
                tracing::debug!(key = %key, kind = ?m.kind, reason = %m.reason, "skipping malformed node");
                Element::Nothing
            }
            Node::Unknown => {
                tracing::debug!(key = %key, "skipping node of unknown type");
                Element::Nothing
            }
        }
    }

    fn render_children(
        &self,
        children: &[Node],
        key: &str,
        form: Option<FormScope>,
        state: &LocalState,
    ) -> Vec<Element> {
        children
            .iter()
            .enumerate()
            .map(|(i, child)| self.render_node(child, &child_key(key, i, child), form, state))
            .collect()
    }

    fn render_container(
        &self,
        c: &Container,
        key: &str,
        form: Option<FormScope>,
        state: &LocalState,
    ) -> Element {
        Tag::new("div")
            .key(key)
            .class(cx(&["w-full", class_of(&c.props)]))
            .children(self.render_children(&c.children, key, form, state))
            .into()
    }

    fn render_card(
        &self,
        c: &Card,
        key: &str,
        form: Option<FormScope>,
        state: &LocalState,
    ) -> Element {
        let variant = CardVariant::resolve(c.props.variant.as_deref());
        let gradient = variant.is_gradient();
        let mut tag = Tag::new("div")
            .key(key)
            .class(cx(&[
                "rounded-xl p-4",
                variant.classes(),
                c.props.class_name.as_deref().unwrap_or(""),
            ]))
            .attr("data-variant", variant.as_str());

        if let Some(ref title) = c.props.title {
            tag = tag.child(
                Tag::new("h3")
                    .class(cx(&[
                        "text-sm font-semibold",
                        if gradient { "text-white" } else { "text-gray-900" },
                    ]))
                    .text(title.as_str()),
            );
        }
        if let Some(ref description) = c.props.description {
            tag = tag.child(
                Tag::new("p")
                    .class(cx(&[
                        "text-xs mt-1",
                        if gradient { "text-white/90" } else { "text-gray-600" },
                    ]))
                    .text(description.as_str()),
            );
        }
        if !c.children.is_empty() {
            tag = tag.child(
                Tag::new("div")
                    .class(cx(&["mt-3", if gradient { "text-white" } else { "text-gray-900" }]))
                    .children(self.render_children(&c.children, key, form, state)),
            );
        }
        tag.into()
    }

    fn render_form(&self, f: &Form, key: &str, state: &LocalState) -> Element {
        let scope = Some(FormScope {
            key,
            kind: FormKind::Form,
        });

        let body: Vec<Element> = f
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let path = child_key(key, i, child);
                match child {
                    Node::Button(b) if self.is_like_button(b) => {
                        render_like_button(b, &path, state)
                    }
                    _ => self.render_node(child, &path, scope, state),
                }
            })
            .collect();

        let actions = Tag::new("div")
            .class("mt-4 flex items-center gap-2")
            .child(
                Tag::new("button")
                    .key(control_key(key, "submit"))
                    .class(cx(&[BUTTON_BASE, ButtonVariant::Primary.classes()]))
                    .attr("type", "submit")
                    .action(Action::Submit {
                        form: key.to_string(),
                    })
                    .text("Submit"),
            )
            .child(
                Tag::new("button")
                    .key(control_key(key, "reset"))
                    .class(cx(&[BUTTON_BASE, ButtonVariant::Secondary.classes()]))
                    .attr("type", "reset")
                    .action(Action::Reset {
                        form: key.to_string(),
                    })
                    .text("Reset"),
            );

        form_heading(
            Tag::new("form")
                .key(key)
                .class(cx(&[FORM_CLASSES, f.props.class_name.as_deref().unwrap_or("")]))
                .flag("novalidate", true)
                .action(Action::Form {
                    on_submit: f.events.on_submit.clone(),
                    on_reset: f.events.on_reset.clone(),
                }),
            &f.props,
        )
        .child(Tag::new("div").class("mt-3 space-y-3").children(body))
        .child(actions)
        .into()
    }

    fn render_ui_group(&self, g: &UiGroup, key: &str, state: &LocalState) -> Element {
        let scope = Some(FormScope {
            key,
            kind: FormKind::UiGroup,
        });
        form_heading(
            Tag::new("form")
                .key(key)
                .class(cx(&[FORM_CLASSES, g.props.class_name.as_deref().unwrap_or("")]))
                .flag("novalidate", true)
                .action(Action::Form {
                    on_submit: g.events.on_submit.clone(),
                    on_reset: None,
                }),
            &g.props,
        )
        .child(
            Tag::new("div")
                .class("mt-3 space-y-3")
                .children(self.render_children(&g.components, key, scope, state)),
        )
        .into()
    }

    fn is_like_button(&self, b: &Button) -> bool {
        b.events.on_click.as_deref() == Some(self.config.like_handler.as_str())
    }
}

fn class_of(props: &ClassProps) -> &str {
    props.class_name.as_deref().unwrap_or("")
}

fn form_heading(mut tag: Tag, props: &FormProps) -> Tag {
    if let Some(ref title) = props.title {
        tag = tag.child(
            Tag::new("h4")
                .class("text-sm font-semibold text-gray-900")
                .text(title.as_str()),
        );
    }
    if let Some(ref description) = props.description {
        tag = tag.child(
            Tag::new("p")
                .class("text-xs text-gray-600 mt-1")
                .text(description.as_str()),
        );
    }
    tag
}

fn render_text(t: &Text, key: &str, state: &LocalState) -> Element {
    let content = t.children.as_deref().unwrap_or("");
    let tag = Tag::new("p")
        .key(key)
        .class(cx(&[
            "text-sm text-gray-700",
            t.props.class_name.as_deref().unwrap_or(""),
        ]));

    let limit = match t.props.collapse_after {
        Some(limit) if content.chars().count() > limit => limit,
        _ => return tag.text(content).into(),
    };

    let expanded = state.is_expanded(key);
    let shown = if expanded {
        content.to_string()
    } else {
        let mut cut: String = content.chars().take(limit).collect();
        cut.push_str(COLLAPSED_SUFFIX);
        cut
    };
    tag.child(Tag::new("span").text(shown))
        .child(
            Tag::new("button")
                .key(control_key(key, "toggle"))
                .class("ml-1 text-xs font-medium text-blue-600 hover:underline")
                .attr("type", "button")
                .attr("aria-expanded", expanded.to_string())
                .action(Action::ToggleExpand)
                .text(if expanded { "Show less" } else { "Show more" }),
        )
        .into()
}

fn render_bubble(props: &BubbleProps, key: &str) -> Element {
    let role = BubbleRole::resolve(Some(&props.role));
    let variant = BubbleVariant::resolve(props.variant.as_deref());
    let is_user = role == BubbleRole::User;

    let mut bubble = Tag::new("div")
        .class(cx(&[BUBBLE_BASE, bubble_classes(role, variant)]))
        .child(
            Tag::new("div")
                .class("whitespace-pre-wrap leading-relaxed")
                .text(props.text.as_str()),
        );
    if let Some(ref timestamp) = props.timestamp {
        bubble = bubble.child(
            Tag::new("time")
                .class(cx(&[
                    "mt-1 block text-[10px]",
                    if is_user { "text-white/80" } else { "text-gray-500" },
                ]))
                .text(timestamp.as_str()),
        );
    }

    Tag::new("div")
        .key(key)
        .class(cx(&[
            "flex",
            role.alignment(),
            props.class_name.as_deref().unwrap_or(""),
        ]))
        .attr("data-role", role.as_str())
        .child(bubble)
        .into()
}

fn render_button(b: &Button, key: &str, form: Option<FormScope>) -> Element {
    let variant = ButtonVariant::resolve(b.variant_name());
    let mut tag = Tag::new("button")
        .key(key)
        .class(cx(&[
            BUTTON_BASE,
            variant.classes(),
            b.props.class_name.as_deref().unwrap_or(""),
        ]))
        .attr("data-variant", variant.as_str());

    tag = match (&b.events.on_click, form) {
        (Some(handler), _) => tag.attr("type", "button").action(Action::Invoke {
            handler: handler.clone(),
            payload: b.event_payload.clone(),
        }),
        (None, Some(scope)) if scope.kind == FormKind::UiGroup => {
            tag.attr("type", "submit").action(Action::Submit {
                form: scope.key.to_string(),
            })
        }
        (None, _) => tag.attr("type", "button"),
    };
    if let Some(ref label) = b.props.aria_label {
        tag = tag.attr("aria-label", label.as_str());
    }
    tag.text(b.label()).into()
}

fn render_like_button(b: &Button, key: &str, state: &LocalState) -> Element {
    let handler = b.events.on_click.clone().unwrap_or_default();
    Tag::new("button")
        .key(key)
        .class(LIKE_BUTTON)
        .attr("type", "button")
        .attr("aria-label", b.props.aria_label.as_deref().unwrap_or("Like"))
        .action(Action::Like { handler })
        .child(Tag::new("span").attr("aria-hidden", "true").text("❤️"))
        .child(Tag::new("span").text(state.likes(key).to_string()))
        .into()
}

fn field_label(label: Option<&str>) -> Element {
    match label {
        Some(text) => Tag::new("span").class(FIELD_LABEL).text(text).into(),
        None => Element::Nothing,
    }
}

fn text_override<'a>(state: &'a LocalState, key: &str) -> Option<&'a str> {
    match state.field(key) {
        Some(FieldValue::Text(value)) => Some(value.as_str()),
        _ => None,
    }
}

fn render_input(props: &InputProps, key: &str, state: &LocalState) -> Element {
    let mut input = Tag::new("input")
        .key(key)
        .class(FIELD_CLASSES)
        .attr("name", props.name.as_str())
        .attr("type", props.input_type.as_deref().unwrap_or("text"));
    if let Some(ref placeholder) = props.placeholder {
        input = input.attr("placeholder", placeholder.as_str());
    }
    if props.input_type.as_deref() == Some("checkbox") {
        let checked = matches!(state.field(key), Some(FieldValue::Checked(true)));
        input = input.flag("checked", checked);
        if let Some(ref value) = props.default_value {
            input = input.attr("value", value.as_str());
        }
    } else if let Some(value) = text_override(state, key).or(props.default_value.as_deref()) {
        input = input.attr("value", value);
    }
    input = input.flag("required", props.required.unwrap_or(false));

    Tag::new("label")
        .class(cx(&["block", props.class_name.as_deref().unwrap_or("")]))
        .child(field_label(props.label.as_deref()))
        .child(input)
        .into()
}

fn render_select(props: &SelectProps, key: &str, state: &LocalState) -> Element {
    let current = text_override(state, key).or(props.default_value.as_deref());
    let options = props.options.iter().map(|opt| {
        Element::from(
            Tag::new("option")
                .attr("value", opt.value.as_str())
                .flag("selected", current == Some(opt.value.as_str()))
                .text(opt.label.as_str()),
        )
    });
    let select = Tag::new("select")
        .key(key)
        .class(FIELD_CLASSES)
        .attr("name", props.name.as_str())
        .flag("required", props.required.unwrap_or(false))
        .children(options);

    Tag::new("label")
        .class(cx(&["block", props.class_name.as_deref().unwrap_or("")]))
        .child(field_label(props.label.as_deref()))
        .child(select)
        .into()
}

fn render_checkbox(props: &CheckboxProps, key: &str, state: &LocalState) -> Element {
    let checked = match state.field(key) {
        Some(FieldValue::Checked(on)) => *on,
        _ => props.default_checked.unwrap_or(false),
    };
    Tag::new("label")
        .class(cx(&[
            "flex items-center gap-2",
            props.class_name.as_deref().unwrap_or(""),
        ]))
        .child(
            Tag::new("input")
                .key(key)
                .class("h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500")
                .attr("name", props.name.as_str())
                .attr("type", "checkbox")
                .flag("checked", checked),
        )
        .child(
            Tag::new("span")
                .class("text-sm text-gray-700")
                .text(props.label.as_str()),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_renders_nothing() {
        assert_eq!(render(&Node::Unknown), Element::Nothing);
        let tree = render(&node(json!({"type": "container", "children": [
            {"type": "hologram"},
            {"type": "text", "children": "ok"}
        ]})));
        let root = tree.as_tag().unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(tree.text_content(), "ok");
    }

    #[test]
    fn test_keys_are_positional_unless_supplied() {
        let tree = render(&node(json!({"type": "container", "children": [
            {"type": "divider"},
            {"type": "container", "key": "inner", "children": [{"type": "text", "children": "x"}]}
        ]})));
        assert!(tree.find("0").is_some());
        assert!(tree.find("0.0").is_some());
        assert_eq!(tree.find("0.#inner.0").map(|t| t.name), Some("p"));
    }

    #[test]
    fn test_external_keys_cannot_forge_paths_or_controls() {
        let tree = render(&node(json!({"type": "form", "children": [
            {"type": "divider", "key": "1"},
            {"type": "divider"},
            {"type": "divider", "key": "a.b:submit"}
        ]})));
        assert_eq!(tree.find("0.#1").map(|t| t.name), Some("hr"));
        assert_eq!(tree.find("0.1").map(|t| t.name), Some("hr"));
        assert_eq!(tree.find("0.#a%2Eb%3Asubmit").map(|t| t.name), Some("hr"));
        assert_eq!(tree.find("0:submit").map(|t| t.name), Some("button"));
    }

    #[test]
    fn test_card_omits_missing_fields() {
        let tree = render(&node(json!({"type": "card"})));
        let card = tree.as_tag().unwrap();
        assert!(card.children.is_empty());
        assert_eq!(card.get_attr("data-variant"), Some("default"));
    }

    #[test]
    fn test_card_unknown_variant_falls_back() {
        let tree = render(&node(json!({"type": "card", "props": {"variant": "neon", "title": "T"}})));
        let card = tree.as_tag().unwrap();
        assert!(card.class.contains(CardVariant::Default.classes()));
        assert_eq!(card.children.len(), 1);
    }

    #[test]
    fn test_bubble_alignment_and_timestamp() {
        let user = render(&node(json!({"type": "chatBubble", "props": {"role": "user", "text": "hi", "timestamp": "12:30"}})));
        let user = user.as_tag().unwrap();
        assert!(user.class.contains("justify-end"));
        assert!(user.text_content().contains("12:30"));

        let system = render(&node(json!({"type": "chatBubble", "props": {"role": "system", "text": "note"}})));
        assert!(system.as_tag().unwrap().class.contains("justify-start"));
        assert!(!system.tags().iter().any(|t| t.name == "time"));
    }

    #[test]
    fn test_button_label_precedence_and_action() {
        let tree = render(&node(json!({
            "type": "button",
            "text": "Go",
            "events": {"onClick": "nobodyRegisteredThis"},
            "eventPayload": {"id": 7}
        })));
        let button = tree.as_tag().unwrap();
        assert_eq!(button.text_content(), "Go");
        assert_eq!(
            button.action,
            Some(Action::Invoke {
                handler: "nobodyRegisteredThis".to_string(),
                payload: Some(json!({"id": 7})),
            })
        );
        assert_eq!(render(&node(json!({"type": "button"}))).text_content(), "Button");
    }

    #[test]
    fn test_form_has_submit_and_reset() {
        let tree = render(&node(json!({"type": "form", "props": {"title": "T"}, "children": [
            {"type": "input", "props": {"name": "email"}}
        ]})));
        let submit = tree.find("0:submit").unwrap();
        assert_eq!(submit.get_attr("type"), Some("submit"));
        assert_eq!(tree.find("0:reset").unwrap().action, Some(Action::Reset { form: "0".into() }));
        assert_eq!(tree.find("0.0").unwrap().get_attr("name"), Some("email"));
    }

    #[test]
    fn test_like_button_only_inside_form() {
        let inside = render(&node(json!({"type": "form", "children": [
            {"type": "button", "events": {"onClick": "likeDemo"}}
        ]})));
        assert_eq!(
            inside.find("0.0").unwrap().action,
            Some(Action::Like { handler: "likeDemo".into() })
        );
        assert_eq!(inside.find("0.0").unwrap().text_content(), "❤️0");

        let outside = render(&node(json!({"type": "button", "events": {"onClick": "likeDemo"}})));
        assert!(matches!(outside.as_tag().unwrap().action, Some(Action::Invoke { .. })));
    }

    #[test]
    fn test_ui_group_button_without_handler_submits() {
        let tree = render(&node(json!({"type": "ui-group", "components": [
            {"type": "button", "text": "Send"}
        ]})));
        let button = tree.find("0.0").unwrap();
        assert_eq!(button.get_attr("type"), Some("submit"));
        assert_eq!(button.action, Some(Action::Submit { form: "0".into() }));
    }

    #[test]
    fn test_text_collapse_follows_state() {
        let text = node(json!({"type": "text", "children": "abcdefghij", "props": {"collapseAfter": 4}}));
        let collapsed = render(&text);
        assert_eq!(collapsed.text_content(), "abcd…Show more");

        let mut state = LocalState::new();
        state.toggle_expanded("0");
        let expanded = Renderer::default().render_with_state(&text, &state);
        assert_eq!(expanded.text_content(), "abcdefghijShow less");
    }

    #[test]
    fn test_field_overrides_from_state() {
        let tree = node(json!({"type": "container", "children": [
            {"type": "input", "props": {"name": "q", "defaultValue": "old"}},
            {"type": "checkbox", "props": {"name": "ok", "label": "OK"}}
        ]}));
        let mut state = LocalState::new();
        state.set_field("0.0", FieldValue::Text("new".into()));
        state.set_field("0.1", FieldValue::Checked(true));
        let out = Renderer::default().render_with_state(&tree, &state);
        assert_eq!(out.find("0.0").unwrap().get_attr("value"), Some("new"));
        assert!(out.find("0.1").unwrap().has_attr("checked"));
    }
}
