//! `Composite` for `serde_json::Value`
//!
//! JSON objects and arrays are composite; strings, numbers and booleans are
//! scalars; `null` is null.

use serde_json::Value;

use crate::traits::{Composite, Shape};

impl Composite for Value {
    fn shape(&self) -> Shape {
        match self {
            Value::Object(_) => Shape::Object,
            Value::Array(_) => Shape::Array,
            Value::Null => Shape::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }
}
