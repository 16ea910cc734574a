//! Memoised wrapper instances for primitive values.
//!
//! Member access on a primitive (`"abc".upper()`) wraps the value in an
//! instance of its prelude class. The wrapper for a given value is built
//! once and reused: booleans, numbers and strings are keyed by value,
//! lists by the identity of their table.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::{Instance, Value};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum PrimitiveKey {
    Bool(bool),
    Number(u64),
    String(Rc<str>),
    Table(usize),
}

impl PrimitiveKey {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(PrimitiveKey::Bool(*b)),
            Value::Number(n) => Some(PrimitiveKey::Number(n.to_bits())),
            Value::String(s) => Some(PrimitiveKey::String(Rc::clone(s))),
            Value::List(table) => Some(PrimitiveKey::Table(table.id())),
            _ => None,
        }
    }
}

/// Primitive to wrapper-instance table.
#[derive(Default)]
pub struct PrimitiveCache {
    wrappers: FxHashMap<PrimitiveKey, Instance>,
}

impl PrimitiveCache {
    pub fn get(&self, value: &Value) -> Option<Instance> {
        self.wrappers.get(&PrimitiveKey::of(value)?).cloned()
    }

    /// Remember `wrapper` for `value`. Non-primitive values are ignored.
    pub fn insert(&mut self, value: &Value, wrapper: Instance) {
        if let Some(key) = PrimitiveKey::of(value) {
            self.wrappers.insert(key, wrapper);
        }
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    pub fn clear(&mut self) {
        self.wrappers.clear();
    }
}
