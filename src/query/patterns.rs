//! Match tables for the query parser.

use serde::{Deserialize, Serialize};

use crate::node::*;

/// Category showcases a query can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetKind {
    ButtonVariants,
    CardVariants,
    InputVariants,
    ChatBubbles,
    FormVariants,
}

impl PresetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PresetKind::ButtonVariants => "button-variants",
            PresetKind::CardVariants => "card-variants",
            PresetKind::InputVariants => "input-variants",
            PresetKind::ChatBubbles => "chat-bubbles",
            PresetKind::FormVariants => "form-variants",
        }
    }

    pub fn response_text(self) -> &'static str {
        match self {
            PresetKind::ButtonVariants => "Here are different button variations you can use: Primary for main actions, Secondary for less important actions and Ghost for subtle interactions. Each button is interactive and follows modern design patterns.",
            PresetKind::CardVariants => "I'll show you various card components: Default cards with subtle shadows, Elevated cards with prominent shadows for emphasis, Outlined cards with borders, and Gradient cards for eye-catching designs. All cards have hover animations.",
            PresetKind::InputVariants => "Here are different input field types: Default text inputs, Search inputs with icons, Email inputs with validation styling, and Error states showing validation feedback. Each input has focus states and proper accessibility.",
            PresetKind::ChatBubbles => "Let me show you chat bubble variations: User messages (right-aligned with blue gradient), Assistant messages (left-aligned with white background), Gradient bubbles for special messages, and System messages. All include timestamps and proper spacing.",
            PresetKind::FormVariants => "Here are form component examples including checkboxes, radio buttons, toggles, and select menus. Each component follows accessibility best practices and has proper states (default, hover, active, disabled).",
        }
    }
}

pub(crate) struct Category {
    pub kind: PresetKind,
    /// Matched on word boundaries.
    pub phrases: &'static [&'static str],
    /// Every word of a combination must appear somewhere.
    pub combinations: &'static [&'static [&'static str]],
    /// Plain substring containment, tried last.
    pub keywords: &'static [&'static str],
}

/// In priority order; chat bubbles go first so "chat message" never reaches
/// the looser keyword checks of later categories.
pub(crate) static CATEGORIES: [Category; 5] = [
    Category {
        kind: PresetKind::ChatBubbles,
        phrases: &[
            "chat bubble",
            "message bubble",
            "chat layout",
            "chat message",
            "conversation bubble",
            "speech bubble",
        ],
        combinations: &[&["chat", "message"], &["message", "style"]],
        keywords: &["bubble", "message"],
    },
    Category {
        kind: PresetKind::ButtonVariants,
        phrases: &[
            "button",
            "ghost button",
            "action button",
            "submit button",
            "click button",
        ],
        combinations: &[&["primary", "secondary"], &["button", "variant"]],
        keywords: &["button", "btn", "cta"],
    },
    Category {
        kind: PresetKind::InputVariants,
        phrases: &[
            "text field",
            "input field",
            "search field",
            "email field",
            "form field",
            "text input",
            "search box",
        ],
        combinations: &[&["search", "field"], &["text", "input"]],
        keywords: &["input", "field", "textbox", "textarea"],
    },
    Category {
        kind: PresetKind::CardVariants,
        phrases: &[
            "card",
            "card component",
            "info card",
            "content card",
            "card layout",
        ],
        combinations: &[&["elevated", "outlined"], &["card", "style"]],
        keywords: &["card", "panel", "tile"],
    },
    Category {
        kind: PresetKind::FormVariants,
        phrases: &[
            "form element",
            "form control",
            "checkbox",
            "radio button",
            "toggle switch",
            "select menu",
            "dropdown menu",
        ],
        combinations: &[&["form", "component"], &["checkbox", "radio"]],
        keywords: &["form", "checkbox", "radio", "toggle", "select", "dropdown"],
    },
];

/// A narrow request answered with one purpose-built node.
pub(crate) struct DynamicPattern {
    pub triggers: &'static [&'static str],
    pub response: &'static str,
    pub build: fn() -> Node,
}

/// First match wins, so the more specific entries come first.
pub(crate) const DYNAMIC_PATTERNS: &[DynamicPattern] = &[
    DynamicPattern {
        triggers: &["ghost button", "ghost btn"],
        response: "Here's a ghost button - subtle and minimal, perfect for secondary actions:",
        build: || Node::Button(Button::shorthand("ghost", "Ghost Button")),
    },
    DynamicPattern {
        triggers: &["primary button", "primary btn", "main button"],
        response: "Here's a primary button - bold and prominent for main actions:",
        build: || Node::Button(Button::shorthand("primary", "Primary Button")),
    },
    DynamicPattern {
        triggers: &["secondary button", "secondary btn"],
        response: "Here's a secondary button - less prominent, for supporting actions:",
        build: || Node::Button(Button::shorthand("secondary", "Secondary Button")),
    },
    DynamicPattern {
        triggers: &["cta", "call to action", "action button"],
        response: "Here's a CTA button - designed to grab attention and drive conversions:",
        build: || Node::Button(Button::shorthand("primary", "Get Started")),
    },
    DynamicPattern {
        triggers: &["submit button", "submit btn"],
        response: "Here's a submit button for forms:",
        build: || Node::Button(Button::shorthand("primary", "Submit")),
    },
    DynamicPattern {
        triggers: &["elevated card", "shadow card"],
        response: "Here's an elevated card with prominent shadow:",
        build: || Node::CardGroup(CardGroup::new(&["elevated"])),
    },
    DynamicPattern {
        triggers: &["gradient card"],
        response: "Here's a gradient card for eye-catching designs:",
        build: || Node::CardGroup(CardGroup::new(&["gradient"])),
    },
    DynamicPattern {
        triggers: &["outlined card", "border card"],
        response: "Here's an outlined card with border-only style:",
        build: || Node::CardGroup(CardGroup::new(&["outlined"])),
    },
    DynamicPattern {
        triggers: &["email input", "email field"],
        response: "Here's an email input field:",
        build: || Node::InputGroup(InputGroup::new(vec![email_input()])),
    },
    DynamicPattern {
        triggers: &["search input", "search field", "search box"],
        response: "Here's a search input field:",
        build: || {
            Node::InputGroup(InputGroup::new(vec![InputProps::new(
                "search",
                "Search",
                Some("search"),
                "Search...",
            )]))
        },
    },
    DynamicPattern {
        triggers: &["password input", "password field"],
        response: "Here's a password input field:",
        build: || {
            Node::InputGroup(InputGroup::new(vec![InputProps::new(
                "password",
                "Password",
                Some("password"),
                "Enter password",
            )]))
        },
    },
    DynamicPattern {
        triggers: &["user bubble", "user message"],
        response: "Here's a user message bubble:",
        build: || {
            Node::ChatGroup(ChatGroup::new(vec![BubbleProps::new(
                "user",
                "This is a user message",
                Some("12:30"),
            )]))
        },
    },
    DynamicPattern {
        triggers: &["assistant bubble", "bot message", "assistant message"],
        response: "Here's an assistant message bubble:",
        build: || {
            Node::ChatGroup(ChatGroup::new(vec![BubbleProps::new(
                "assistant",
                "This is an assistant response",
                Some("12:31"),
            )]))
        },
    },
    DynamicPattern {
        triggers: &["system message", "system bubble"],
        response: "Here's a system message bubble:",
        build: || {
            Node::ChatGroup(ChatGroup::new(vec![BubbleProps::new(
                "system",
                "System notification",
                None,
            )]))
        },
    },
    DynamicPattern {
        triggers: &["checkbox", "check box"],
        response: "Here's a checkbox component:",
        build: || Node::Checkbox(Checkbox::new("agree", "I agree to the terms")),
    },
    DynamicPattern {
        triggers: &["contact form", "callback form"],
        response: "Here's a contact form:",
        build: || {
            form_group(
                "Contact Us",
                vec![
                    Input::new(InputProps {
                        name: "name".to_string(),
                        label: Some("Name".to_string()),
                        placeholder: Some("Your name".to_string()),
                        ..Default::default()
                    })
                    .into(),
                    Input::new(email_input()).into(),
                    Button::shorthand("primary", "Submit").into(),
                ],
            )
        },
    },
    DynamicPattern {
        triggers: &["login form", "signin form", "sign in form"],
        response: "Here's a login form:",
        build: || {
            form_group(
                "Login",
                vec![
                    Input::new(email_input()).into(),
                    Input::new(InputProps::new(
                        "password",
                        "Password",
                        Some("password"),
                        "Password",
                    ))
                    .into(),
                    Button::shorthand("primary", "Sign In").into(),
                ],
            )
        },
    },
];

fn email_input() -> InputProps {
    InputProps::new("email", "Email", Some("email"), "you@example.com")
}

fn form_group(title: &str, components: Vec<Node>) -> Node {
    Node::UiGroup(UiGroup {
        props: FormProps::titled(title),
        components,
        events: Events::submit("formSubmitDemo"),
        key: None,
    })
}
