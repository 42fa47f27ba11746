//! Symbolic event handlers.
//!
//! Nodes never carry behaviour; they name it (`"onClick": "likeDemo"`). The
//! host registers concrete handlers here once, before the first render, and
//! the view resolves names through the registry it was mounted with.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub type Handler = Box<dyn Fn(Option<&Value>)>;

/// What happened when a name was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    NoHandler,
    /// The handler panicked; the panic message, when it was a string.
    Failed(String),
}

#[derive(Default)]
pub struct EventRegistry {
    handlers: HashMap<String, Handler>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the reference handlers used by the built-in
    /// showcases. Each one only logs.
    pub fn with_demo_handlers() -> Self {
        let mut registry = Self::new();
        registry.register("formSubmitDemo", |payload| {
            tracing::info!(payload = ?payload, "form submitted");
        });
        registry.register("resetDemo", |_| {
            tracing::info!("form reset");
        });
        registry.register("likeDemo", |payload| {
            let count = payload.and_then(|p| p.get("count")).and_then(Value::as_u64);
            tracing::info!(count = ?count, payload = ?payload, "liked");
        });
        registry
    }

    /// Register a handler. An existing handler under the same name is replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Option<&Value>) + 'static,
    {
        let name = name.into();
        if self.handlers.insert(name.clone(), Box::new(handler)).is_some() {
            tracing::debug!(handler = %name, "replaced event handler");
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Fire and forget.
    pub fn invoke(&self, name: &str, payload: Option<&Value>) {
        let _ = self.dispatch(name, payload);
    }

    /// Like [`invoke`](Self::invoke), but reports the outcome. Unknown names
    /// are a no-op and a panicking handler is contained here.
    pub fn dispatch(&self, name: &str, payload: Option<&Value>) -> Dispatch {
        let Some(handler) = self.handlers.get(name) else {
            tracing::debug!(handler = %name, "no handler registered, ignoring event");
            return Dispatch::NoHandler;
        };
        match catch_unwind(AssertUnwindSafe(|| handler(payload))) {
            Ok(()) => Dispatch::Handled,
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_default();
                tracing::warn!(handler = %name, error = %message, "event handler panicked");
                Dispatch::Failed(message)
            }
        }
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unknown_name_is_noop() {
        let registry = EventRegistry::new();
        assert!(!registry.has("missing"));
        registry.invoke("missing", None);
        assert_eq!(registry.dispatch("missing", None), Dispatch::NoHandler);
    }

    #[test]
    fn test_invoke_passes_payload() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut registry = EventRegistry::new();
        registry.register("capture", move |p| sink.borrow_mut().push(p.cloned()));

        registry.invoke("capture", Some(&json!({"variant": "ghost"})));
        registry.invoke("capture", None);

        assert_eq!(
            *seen.borrow(),
            vec![Some(json!({"variant": "ghost"})), None]
        );
    }

    #[test]
    fn test_last_write_wins() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EventRegistry::new();
        let first = hits.clone();
        registry.register("h", move |_| first.borrow_mut().push("first"));
        let second = hits.clone();
        registry.register("h", move |_| second.borrow_mut().push("second"));

        registry.invoke("h", None);
        assert_eq!(*hits.borrow(), vec!["second"]);
        assert_eq!(registry.names(), vec!["h"]);
    }

    #[test]
    fn test_panicking_handler_is_contained() {
        let mut registry = EventRegistry::new();
        registry.register("boom", |_| panic!("handler exploded"));
        registry.register("fine", |_| {});

        assert_eq!(
            registry.dispatch("boom", None),
            Dispatch::Failed("handler exploded".to_string())
        );
        assert_eq!(registry.dispatch("fine", None), Dispatch::Handled);
    }

    #[test]
    fn test_demo_handlers() {
        let registry = EventRegistry::with_demo_handlers();
        assert_eq!(registry.names(), vec!["formSubmitDemo", "likeDemo", "resetDemo"]);
        assert_eq!(
            registry.dispatch("likeDemo", Some(&json!({"count": 3}))),
            Dispatch::Handled
        );
    }
}
