//! # Key/value state carried across stream lifecycle calls.
//!
//! [`ExecutionContext`] is owned by the engine and handed by `&mut` to every
//! stream in turn. Streams store their restart state in it during `update` and
//! read it back on `open`. The layout of the keys belongs to the streams.
//!
//! ## Example
//! ```rust
//! use stepcast::ExecutionContext;
//!
//! let mut ctx = ExecutionContext::new();
//! ctx.put_long("reader.offset", 42);
//! assert_eq!(ctx.get_long("reader.offset"), Some(42));
//! assert!(ctx.is_dirty());
//!
//! ctx.clear_dirty();
//! assert!(!ctx.is_dirty());
//! ```

use std::collections::HashMap;

/// Value stored under a context key.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    String(String),
    Long(i64),
    Double(f64),
}

/// Mutable key/value snapshot of a step's restartable state.
///
/// Every `put_*` marks the context dirty so the engine knows it must be
/// persisted; [`clear_dirty`](Self::clear_dirty) resets the flag once saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    entries: HashMap<String, ContextValue>,
    dirty: bool,
}

impl ExecutionContext {
    /// Creates an empty, clean context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any previous one under `key`.
    pub fn put(&mut self, key: impl Into<String>, value: ContextValue) {
        self.entries.insert(key.into(), value);
        self.dirty = true;
    }

    #[inline]
    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key, ContextValue::String(value.into()));
    }

    #[inline]
    pub fn put_long(&mut self, key: impl Into<String>, value: i64) {
        self.put(key, ContextValue::Long(value));
    }

    #[inline]
    pub fn put_double(&mut self, key: impl Into<String>, value: f64) {
        self.put(key, ContextValue::Double(value));
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.get(key)
    }

    /// Returns the string under `key`, or `None` if absent or of another type.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(ContextValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the long under `key`, or `None` if absent or of another type.
    pub fn get_long(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(ContextValue::Long(v)) => Some(*v),
            _ => None,
        }
    }

    /// Returns the double under `key`, or `None` if absent or of another type.
    pub fn get_double(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(ContextValue::Double(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes and returns the value under `key`; marks the context dirty if something was removed.
    pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the context changed since the last [`clear_dirty`](Self::clear_dirty).
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
