use jsonui::node::{Button, Node};
use jsonui::validator::validate_node;
use jsonui::{
    parse_query, Assistant, EventRegistry, ParsedQuery, PresetKind, QueryParser, UiConfig, View,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

const HELP: &str = "I can help you explore our component library! Try asking about buttons, cards, inputs, or chat bubbles.";

#[test]
fn test_ghost_button_is_dynamic() {
    let parsed = parse_query("ghost button");
    let ParsedQuery::Dynamic {
        node,
        response_text,
    } = parsed
    else {
        panic!("Expected dynamic result, got {:?}", parsed);
    };
    assert_eq!(node, Node::Button(Button::shorthand("ghost", "Ghost Button")));
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({"type": "button", "variant": "ghost", "text": "Ghost Button"})
    );
    assert!(response_text.contains("ghost button"));
    assert!(response_text.contains("secondary actions"));
}

#[test]
fn test_elevated_card_is_dynamic_card_group() {
    let node = parse_query("elevated card").node().unwrap();
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({"type": "card-group", "variants": ["elevated"]})
    );
}

#[test]
fn test_show_me_cards_is_preset() {
    let parsed = parse_query("show me cards");
    assert_eq!(parsed.component_type(), Some(PresetKind::CardVariants));
    assert!(parsed.response_text().contains("card"));
    assert!(parsed.response_text().contains("Elevated"));
    assert!(parsed.node().is_some());
}

#[test]
fn test_empty_query_falls_back() {
    let parsed = parse_query("");
    assert!(parsed.is_fallback());
    assert!(parsed.node().is_none());
    assert_eq!(
        parsed.response_text(),
        "I can help you explore our component library!"
    );
}

#[test]
fn test_login_form() {
    let node = parse_query("login form").node().unwrap();
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "type": "ui-group",
            "props": {"title": "Login"},
            "events": {"onSubmit": "formSubmitDemo"},
            "components": [
                {"type": "input", "props": {"name": "email", "label": "Email", "type": "email", "placeholder": "you@example.com"}},
                {"type": "input", "props": {"name": "password", "label": "Password", "type": "password", "placeholder": "Password"}},
                {"type": "button", "variant": "primary", "text": "Sign In"}
            ]
        })
    );
}

#[test]
fn test_login_form_submits_through_registry() {
    let seen: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut registry = EventRegistry::new();
    registry.register("formSubmitDemo", move |p| {
        sink.borrow_mut().push(p.cloned().unwrap_or(Value::Null))
    });

    let node = parse_query("Login Form please").node().unwrap();
    let mut view = View::mount(node, &registry);
    view.set_value("0.0", "me@example.com").unwrap();
    view.set_value("0.1", "hunter2").unwrap();
    view.click("0.2");

    assert_eq!(
        seen.borrow().clone(),
        vec![json!({"email": "me@example.com", "password": "hunter2"})]
    );
}

#[test]
fn test_unmatched_queries_fall_back() {
    for query in ["hello", "what's the weather", "tell me a joke", "12345", "¿qué tal?"] {
        let parsed = parse_query(query);
        assert_eq!(
            parsed,
            ParsedQuery::Fallback {
                response_text: HELP.to_string()
            },
            "query: {}",
            query
        );
    }
}

#[test]
fn test_button_word_boundary() {
    assert_eq!(
        parse_query("button").component_type(),
        Some(PresetKind::ButtonVariants)
    );
    assert_eq!(
        parse_query("a button please").component_type(),
        Some(PresetKind::ButtonVariants)
    );
    // no phrase match, but the loose keyword pass still finds "button"
    assert_eq!(
        parse_query("buttonhole").component_type(),
        Some(PresetKind::ButtonVariants)
    );
}

#[test]
fn test_dynamic_beats_preset() {
    assert!(matches!(parse_query("ghost button"), ParsedQuery::Dynamic { .. }));
    assert_eq!(
        parse_query("show me buttons").component_type(),
        Some(PresetKind::ButtonVariants)
    );
}

#[test]
fn test_case_insensitive() {
    assert_eq!(parse_query("SHOW ME BUTTONS"), parse_query("show me buttons"));
    assert_eq!(parse_query("  Ghost Button  "), parse_query("ghost button"));
}

#[test]
fn test_every_dynamic_node_validates() {
    let config = UiConfig::default();
    let queries = [
        "ghost button",
        "primary button",
        "secondary btn",
        "call to action",
        "submit button",
        "shadow card",
        "gradient card",
        "border card",
        "email field",
        "search box",
        "password input",
        "user message",
        "bot message",
        "system bubble",
        "check box",
        "contact form",
        "sign in form",
    ];
    for query in queries {
        let parsed = parse_query(query);
        assert!(
            matches!(parsed, ParsedQuery::Dynamic { .. }),
            "{} should be dynamic",
            query
        );
        let node = parsed.node().unwrap();
        assert_eq!(validate_node(&node, &config), Ok(()), "{}", query);
    }
}

#[test]
fn test_category_priority() {
    let cases = [
        ("speech bubble styles", PresetKind::ChatBubbles),
        ("chat about messages", PresetKind::ChatBubbles),
        ("some btn ideas", PresetKind::ButtonVariants),
        ("a textarea", PresetKind::InputVariants),
        ("info panel", PresetKind::CardVariants),
        ("a dropdown menu", PresetKind::FormVariants),
        ("radio button group", PresetKind::ButtonVariants),
    ];
    for (query, expected) in cases {
        assert_eq!(parse_query(query).component_type(), Some(expected), "{}", query);
    }
}

#[test]
fn test_strict_mode_from_config() {
    let config = UiConfig::from_yaml("strictDynamicMatching: true").unwrap();
    let parser = QueryParser::from_config(&config);
    assert!(matches!(parser.parse("a cta button"), ParsedQuery::Dynamic { .. }));
    assert_eq!(
        parser.parse("dictate").component_type(),
        Some(PresetKind::ButtonVariants)
    );
}

#[test]
fn test_assistant_reply() {
    let assistant = Assistant::new(&UiConfig::default());
    let reply = assistant.respond("  Show me chat bubbles  ").unwrap();
    assert_eq!(reply.component_type, Some(PresetKind::ChatBubbles));
    assert!(reply.component_after(false).is_none());
    assert!(matches!(reply.component_after(true), Some(Node::Container(_))));

    let too_long = "x".repeat(1001);
    assert!(assistant.respond(&too_long).is_err());
}
