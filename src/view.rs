//! A mounted node: the rendered tree plus the interaction state that belongs
//! to this one instance.
//!
//! Interactions are addressed by element key. Anything that changes local
//! state re-renders the tree; handler calls go through the registry the view
//! was mounted with.

use serde_json::{json, Map, Value};

use crate::element::{Action, Element, Tag};
use crate::error::{UiError, UiResult};
use crate::node::Node;
use crate::registry::{Dispatch, EventRegistry};
use crate::render::Renderer;
use crate::state::{FieldValue, LocalState};

/// Result of one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A handler name was dispatched through the registry.
    Dispatched { handler: String, outcome: Dispatch },
    /// Only local state changed.
    Local,
    /// Nothing is bound to that element.
    Inert,
}

pub struct View<'r> {
    node: Node,
    registry: &'r EventRegistry,
    renderer: Renderer,
    state: LocalState,
    tree: Element,
}

impl<'r> View<'r> {
    pub fn mount(node: Node, registry: &'r EventRegistry) -> Self {
        Self::mount_with(node, registry, Renderer::default())
    }

    pub fn mount_with(node: Node, registry: &'r EventRegistry, renderer: Renderer) -> Self {
        let state = LocalState::new();
        let tree = renderer.render_with_state(&node, &state);
        View {
            node,
            registry,
            renderer,
            state,
            tree,
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn element(&self) -> &Element {
        &self.tree
    }

    pub fn state(&self) -> &LocalState {
        &self.state
    }

    pub fn to_html(&self) -> String {
        self.tree.to_html()
    }

    fn rerender(&mut self) {
        self.tree = self.renderer.render_with_state(&self.node, &self.state);
    }

    fn dispatch(&self, handler: &str, payload: Option<&Value>) -> Interaction {
        let outcome = self.registry.dispatch(handler, payload);
        Interaction::Dispatched {
            handler: handler.to_string(),
            outcome,
        }
    }

    /// Click the element with `key`.
    pub fn click(&mut self, key: &str) -> Interaction {
        let Some(action) = self.tree.find(key).and_then(|t| t.action.clone()) else {
            tracing::debug!(key = %key, "click on element without action");
            return Interaction::Inert;
        };

        match action {
            Action::Invoke { handler, payload } => self.dispatch(&handler, payload.as_ref()),
            Action::Like { handler } => {
                let count = self.state.like(key);
                self.rerender();
                self.dispatch(&handler, Some(&json!({ "count": count })))
            }
            Action::ToggleExpand => {
                let text_key = key.strip_suffix(":toggle").unwrap_or(key);
                self.state.toggle_expanded(text_key);
                self.rerender();
                Interaction::Local
            }
            Action::Submit { form } => self.submit(&form),
            Action::Reset { form } => self.reset(&form),
            Action::Form { .. } => Interaction::Inert,
        }
    }

    fn form_handlers(&self, form_key: &str) -> Option<(Option<String>, Option<String>)> {
        match self.tree.find(form_key).and_then(|t| t.action.as_ref()) {
            Some(Action::Form { on_submit, on_reset }) => {
                Some((on_submit.clone(), on_reset.clone()))
            }
            _ => None,
        }
    }

    /// Current field values of a form as a flat object: checkboxes as
    /// booleans, everything else as strings.
    pub fn submission(&self, form_key: &str) -> Option<Value> {
        let form = self.tree.find(form_key)?;
        if !matches!(form.action, Some(Action::Form { .. })) {
            return None;
        }
        let mut fields = Map::new();
        collect_fields(form, &mut fields);
        Some(Value::Object(fields))
    }

    /// Submit a form. Nothing leaves the process; the payload goes to the
    /// form's `onSubmit` handler only.
    pub fn submit(&mut self, form_key: &str) -> Interaction {
        let Some((on_submit, _)) = self.form_handlers(form_key) else {
            return Interaction::Inert;
        };
        let Some(handler) = on_submit else {
            return Interaction::Inert;
        };
        let payload = self.submission(form_key).unwrap_or_else(|| json!({}));
        tracing::debug!(form = %form_key, handler = %handler, "submitting form");
        self.dispatch(&handler, Some(&payload))
    }

    /// Restore field defaults, then call `onReset` with no payload.
    pub fn reset(&mut self, form_key: &str) -> Interaction {
        let Some((_, on_reset)) = self.form_handlers(form_key) else {
            return Interaction::Inert;
        };
        self.state.clear_fields_under(form_key);
        self.rerender();
        match on_reset {
            Some(handler) => self.dispatch(&handler, None),
            None => Interaction::Local,
        }
    }

    /// Type into a text input or pick a select option.
    pub fn set_value(&mut self, key: &str, value: &str) -> UiResult<()> {
        match self.tree.find(key) {
            Some(tag) if tag.name == "select" || (tag.name == "input" && !is_checkbox(tag)) => {}
            _ => {
                return Err(UiError::ValidationError(format!(
                    "no text field with key '{}'",
                    key
                )))
            }
        }
        self.state.set_field(key, FieldValue::Text(value.to_string()));
        self.rerender();
        Ok(())
    }

    pub fn set_checked(&mut self, key: &str, checked: bool) -> UiResult<()> {
        if !self.tree.find(key).is_some_and(is_checkbox) {
            return Err(UiError::ValidationError(format!(
                "no checkbox with key '{}'",
                key
            )));
        }
        self.state.set_field(key, FieldValue::Checked(checked));
        self.rerender();
        Ok(())
    }
}

fn is_checkbox(tag: &Tag) -> bool {
    tag.name == "input" && tag.get_attr("type") == Some("checkbox")
}

fn collect_fields(tag: &Tag, fields: &mut Map<String, Value>) {
    for child in &tag.children {
        let Element::Tag(child) = child else {
            continue;
        };
        match (child.name, child.get_attr("name")) {
            ("input", Some(name)) if is_checkbox(child) => {
                fields.insert(name.to_string(), Value::Bool(child.has_attr("checked")));
            }
            ("input", Some(name)) => {
                let value = child.get_attr("value").unwrap_or("");
                fields.insert(name.to_string(), Value::String(value.to_string()));
            }
            ("select", Some(name)) => {
                fields.insert(name.to_string(), Value::String(selected_option(child)));
            }
            _ => collect_fields(child, fields),
        }
    }
}

/// The selected option, or the first one as a browser would pick.
fn selected_option(select: &Tag) -> String {
    let options: Vec<&Tag> = select.children.iter().filter_map(Element::as_tag).collect();
    options
        .iter()
        .find(|o| o.has_attr("selected"))
        .or_else(|| options.first())
        .and_then(|o| o.get_attr("value"))
        .unwrap_or("")
        .to_string()
}
