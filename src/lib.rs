//! # jsonui
//!
//! A declarative UI engine for a component-showcase chat widget.
//!
//! ## Features
//! - JSON node schema covering layout, cards, chat bubbles, buttons and form controls
//! - Pure renderer producing an inspectable element tree and escaped HTML
//! - Symbolic event binding: nodes name handlers, the host registers them
//! - Per-instance interaction state (like counters, collapsible text, form fields)
//! - Query parser mapping chat messages to a showcase or a purpose-built node
//!
//! ## Example
//! ```ignore
//! use jsonui::{parse_query, EventRegistry, View};
//!
//! let parsed = parse_query("login form");
//! println!("{}", parsed.response_text());
//!
//! let registry = EventRegistry::with_demo_handlers();
//! if let Some(node) = parsed.node() {
//!     let mut view = View::mount(node, &registry);
//!     view.set_value("0.0", "me@example.com").ok();
//!     view.click("0.2");
//! }
//! ```

pub mod assistant;
pub mod config;
pub mod element;
pub mod error;
pub mod input;
pub mod node;
pub mod presets;
pub mod query;
pub mod registry;
pub mod render;
pub mod state;
pub mod styles;
pub mod validator;
pub mod view;

// --- Core types ---
pub use assistant::{Assistant, Reply};
pub use config::UiConfig;
pub use element::{html_document, Action, Element, Tag};
pub use error::{UiError, UiResult};
pub use node::{Events, Node};
pub use query::{ParsedQuery, PresetKind, QueryParser};
pub use registry::{Dispatch, EventRegistry};
pub use render::Renderer;
pub use state::{FieldValue, LocalState};
pub use view::{Interaction, View};

/// Decode and validate a JSON node.
pub fn parse_node(json: &str) -> UiResult<Node> {
    Node::from_json(json)
}

/// Render a node with default settings.
pub fn render(node: &Node) -> Element {
    render::render(node)
}

/// Parse a chat query with default settings.
pub fn parse_query(query: &str) -> ParsedQuery {
    query::parse(query)
}
