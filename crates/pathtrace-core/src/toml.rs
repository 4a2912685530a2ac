//! `Composite` for `toml::Value`
//!
//! Tables and arrays are composite. TOML has no null, so every other value
//! (datetimes included) is a scalar.

use ::toml::Value;

use crate::traits::{Composite, Shape};

impl Composite for Value {
    fn shape(&self) -> Shape {
        match self {
            Value::Table(_) => Shape::Object,
            Value::Array(_) => Shape::Array,
            _ => Shape::Scalar,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        self.as_table()?.get(key)
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }
}
