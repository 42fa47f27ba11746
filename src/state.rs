//! Per-instance interaction state.
//!
//! Lives next to a mounted tree, never inside the node data. Entries are keyed
//! by element key, so two instances of the same node never share a counter.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalState {
    likes: HashMap<String, u64>,
    expanded: HashSet<String>,
    fields: HashMap<String, FieldValue>,
}

impl LocalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn likes(&self, key: &str) -> u64 {
        self.likes.get(key).copied().unwrap_or(0)
    }

    /// Increment and return the new cumulative count.
    pub fn like(&mut self, key: &str) -> u64 {
        let count = self.likes.entry(key.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flip and return the new state.
    pub fn toggle_expanded(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn set_field(&mut self, key: &str, value: FieldValue) {
        self.fields.insert(key.to_string(), value);
    }

    /// Drop edited values for every field under `prefix` (a form key).
    pub fn clear_fields_under(&mut self, prefix: &str) {
        let nested = format!("{}.", prefix);
        self.fields
            .retain(|k, _| k != prefix && !k.starts_with(&nested));
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty() && self.expanded.is_empty() && self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_is_cumulative_per_key() {
        let mut state = LocalState::new();
        assert_eq!(state.like("0.3"), 1);
        assert_eq!(state.like("0.3"), 2);
        assert_eq!(state.like("1.3"), 1);
        assert_eq!(state.likes("0.3"), 2);
        assert_eq!(state.likes("missing"), 0);
    }

    #[test]
    fn test_toggle_expanded() {
        let mut state = LocalState::new();
        assert!(state.toggle_expanded("0"));
        assert!(state.is_expanded("0"));
        assert!(!state.toggle_expanded("0"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_clear_fields_under_prefix() {
        let mut state = LocalState::new();
        state.set_field("0.1", FieldValue::Text("a".into()));
        state.set_field("0.10", FieldValue::Text("b".into()));
        state.set_field("01", FieldValue::Checked(true));
        state.clear_fields_under("0");
        assert!(state.field("0.1").is_none());
        assert!(state.field("0.10").is_none());
        assert_eq!(state.field("01"), Some(&FieldValue::Checked(true)));
    }
}
