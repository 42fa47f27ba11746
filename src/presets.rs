//! Category showcases returned for preset query matches.

use crate::node::*;
use crate::query::PresetKind;
use crate::styles::{ButtonVariant, CardVariant};

const HEADING: &str = "text-sm font-semibold text-gray-900";
const CAPTION: &str = "text-xs text-gray-500";

/// Build the showcase node for a category.
pub fn build(kind: PresetKind) -> Node {
    match kind {
        PresetKind::ButtonVariants => showcase(
            "Button variants",
            "Primary for main actions, secondary for supporting ones, ghost for subtle interactions.",
            Node::ButtonGroup(ButtonGroup {
                variants: ButtonVariant::ALL
                    .iter()
                    .map(|v| v.as_str().to_string())
                    .collect(),
                events: Events::click("likeDemo"),
                ..Default::default()
            }),
        ),
        PresetKind::CardVariants => showcase(
            "Card variants",
            "Default, elevated, outlined and gradient surfaces.",
            Node::CardGroup(CardGroup {
                variants: CardVariant::ALL
                    .iter()
                    .map(|v| v.as_str().to_string())
                    .collect(),
                ..Default::default()
            }),
        ),
        PresetKind::InputVariants => showcase(
            "Input fields",
            "Text, search, email and password inputs.",
            Node::InputGroup(InputGroup::new(vec![
                InputProps::new("name", "Name", None, "Your name"),
                InputProps::new("search", "Search", Some("search"), "Search..."),
                InputProps::new("email", "Email", Some("email"), "you@example.com"),
                InputProps::new("password", "Password", Some("password"), "Enter password"),
            ])),
        ),
        PresetKind::ChatBubbles => showcase(
            "Chat bubbles",
            "User, assistant, gradient and system messages.",
            Node::ChatGroup(ChatGroup::new(vec![
                BubbleProps::new("user", "Can you show me some buttons?", Some("12:30")),
                BubbleProps::new("assistant", "Sure, here are a few variants.", Some("12:31")),
                BubbleProps {
                    variant: Some("gradient".to_string()),
                    ..BubbleProps::new("user", "Those look great!", Some("12:32"))
                },
                BubbleProps::new("system", "Conversation saved", None),
            ])),
        ),
        PresetKind::FormVariants => Node::Form(Form {
            props: FormProps {
                description: Some("Inputs, selects and checkboxes with live state.".to_string()),
                ..FormProps::titled("Form Controls")
            },
            children: vec![
                Input::new(InputProps::new("fullName", "Full name", None, "Jane Doe")).into(),
                Node::Select(Select {
                    props: SelectProps {
                        name: "plan".to_string(),
                        label: Some("Plan".to_string()),
                        default_value: Some("pro".to_string()),
                        options: vec![
                            option("Free", "free"),
                            option("Pro", "pro"),
                            option("Team", "team"),
                        ],
                        ..Default::default()
                    },
                    key: None,
                }),
                Checkbox::new("newsletter", "Subscribe to the newsletter").into(),
                Button {
                    props: ButtonProps {
                        aria_label: Some("Like".to_string()),
                        ..Default::default()
                    },
                    events: Events::click("likeDemo"),
                    ..Default::default()
                }
                .into(),
            ],
            events: Events {
                on_submit: Some("formSubmitDemo".to_string()),
                on_reset: Some("resetDemo".to_string()),
                ..Default::default()
            },
            key: None,
        }),
    }
}

fn option(label: &str, value: &str) -> SelectOption {
    SelectOption {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn showcase(title: &str, caption: &str, body: Node) -> Node {
    Node::Container(Container {
        props: ClassProps::new("space-y-3"),
        children: vec![
            Text::styled(title, HEADING).into(),
            Text::styled(caption, CAPTION).into(),
            body,
        ],
        key: None,
    })
}
