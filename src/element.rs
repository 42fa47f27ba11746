//! Rendered element tree.
//!
//! This is what the renderer produces: plain tags, text and the symbolic
//! actions attached to interactive elements. It can be inspected directly
//! (tests, a host UI toolkit) or serialized to an HTML fragment.

use serde_json::Value;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["input", "hr", "br"];

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Tag(Tag),
    Text(String),
    /// Output of a node that renders nothing.
    Nothing,
}

/// What interacting with an element does. Handlers are names, resolved
/// against the event registry at interaction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Call `handler` with the node's payload.
    Invoke {
        handler: String,
        payload: Option<Value>,
    },
    /// Bump the like counter for this element, then call `handler` with `{count}`.
    Like { handler: String },
    /// Flip the expanded state of the enclosing collapsible text.
    ToggleExpand,
    /// Submit the form with key `form`.
    Submit { form: String },
    /// Reset the form with key `form`.
    Reset { form: String },
    /// Carried by the form element itself.
    Form {
        on_submit: Option<String>,
        on_reset: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub name: &'static str,
    pub key: Option<String>,
    pub class: String,
    pub attrs: Vec<(&'static str, String)>,
    pub action: Option<Action>,
    pub children: Vec<Element>,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Tag {
            name,
            ..Default::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Boolean attribute, present only when `on` is true.
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on {
            self.attr(name, name)
        } else {
            self
        }
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        let child = child.into();
        if child != Element::Nothing {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().filter(|c| *c != Element::Nothing));
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Element::Text(content.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Element::Tag(tag)
    }
}

impl Element {
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Element::Tag(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Element::Nothing)
    }

    /// Find the tag carrying `key` (depth first).
    pub fn find(&self, key: &str) -> Option<&Tag> {
        let Element::Tag(tag) = self else {
            return None;
        };
        if tag.key.as_deref() == Some(key) {
            return Some(tag);
        }
        tag.children.iter().find_map(|c| c.find(key))
    }

    /// Every tag in document order.
    pub fn tags(&self) -> Vec<&Tag> {
        let mut out = Vec::new();
        self.collect_tags(&mut out);
        out
    }

    fn collect_tags<'a>(&'a self, out: &mut Vec<&'a Tag>) {
        if let Element::Tag(tag) = self {
            out.push(tag);
            for child in &tag.children {
                child.collect_tags(out);
            }
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::Text(s) => out.push_str(s),
            Element::Tag(tag) => {
                for child in &tag.children {
                    child.collect_text(out);
                }
            }
            Element::Nothing => {}
        }
    }

    /// Serialize to an HTML fragment. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Element::Nothing => {}
            Element::Text(s) => out.push_str(&escape_html(s)),
            Element::Tag(tag) => {
                out.push('<');
                out.push_str(tag.name);
                if let Some(ref key) = tag.key {
                    push_attr(out, "data-key", key);
                }
                if !tag.class.is_empty() {
                    push_attr(out, "class", &tag.class);
                }
                for (name, value) in &tag.attrs {
                    push_attr(out, name, value);
                }
                if let Some(ref action) = tag.action {
                    push_action(out, action);
                }
                out.push('>');
                if VOID_TAGS.contains(&tag.name) {
                    return;
                }
                for child in &tag.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag.name);
                out.push('>');
            }
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

fn push_action(out: &mut String, action: &Action) {
    match action {
        Action::Invoke { handler, payload } => {
            push_attr(out, "data-on-click", handler);
            if let Some(payload) = payload {
                push_attr(out, "data-payload", &payload.to_string());
            }
        }
        Action::Like { handler } => {
            push_attr(out, "data-on-click", handler);
            push_attr(out, "data-like", "true");
        }
        Action::ToggleExpand => push_attr(out, "data-toggle", "expand"),
        Action::Submit { form } => push_attr(out, "data-submit", form),
        Action::Reset { form } => push_attr(out, "data-reset", form),
        Action::Form { on_submit, on_reset } => {
            if let Some(h) = on_submit {
                push_attr(out, "data-on-submit", h);
            }
            if let Some(h) = on_reset {
                push_attr(out, "data-on-reset", h);
            }
        }
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap a rendered tree in a standalone HTML page.
pub fn html_document(title: &str, body: &Element) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        escape_html(title),
        body.to_html()
    )
}
