//! Trait definitions for pathtrace-core
//!
//! [`Composite`] is the seam between tracked views and the document model
//! that actually holds the data. Views only ever ask a node for its shape
//! and for a borrowed child, so any tree of objects, arrays and scalars can
//! be tracked without copying it.

use core::fmt;

/// Structural kind of a document node
///
/// Only objects and arrays are wrapped by tracked views. Scalars and nulls
/// are always handed back raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Keyed container (JSON object, TOML table)
    Object,
    /// Positional container
    Array,
    /// String, number, boolean, date or any other leaf
    Scalar,
    /// Explicit null
    Null,
}

impl Shape {
    /// Whether nodes of this shape get wrapped in a view when navigated to
    pub fn is_composite(self) -> bool {
        matches!(self, Shape::Object | Shape::Array)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Object => "object",
            Shape::Array => "array",
            Shape::Scalar => "scalar",
            Shape::Null => "null",
        };
        f.write_str(name)
    }
}

/// Read-only access to a nested document node
///
/// Implementations must be pure reads: a tracked view may call these methods
/// any number of times and relies on them never mutating the node.
///
/// # Examples
///
/// ```rust,ignore
/// use pathtrace_core::{Composite, Shape};
///
/// enum Node {
///     Leaf(i64),
///     List(Vec<Node>),
/// }
///
/// impl Composite for Node {
///     fn shape(&self) -> Shape {
///         match self {
///             Node::Leaf(_) => Shape::Scalar,
///             Node::List(_) => Shape::Array,
///         }
///     }
///
///     fn get_key(&self, _key: &str) -> Option<&Self> {
///         None
///     }
///
///     fn get_index(&self, index: usize) -> Option<&Self> {
///         match self {
///             Node::List(items) => items.get(index),
///             Node::Leaf(_) => None,
///         }
///     }
/// }
/// ```
pub trait Composite {
    /// Structural kind of this node
    fn shape(&self) -> Shape;

    /// Borrow the child stored under an object key
    ///
    /// Returns `None` when the key is absent or the node is not an object.
    fn get_key(&self, key: &str) -> Option<&Self>;

    /// Borrow the child stored at an array position
    ///
    /// Returns `None` when the index is out of bounds or the node is not an
    /// array.
    fn get_index(&self, index: usize) -> Option<&Self>;

    /// Whether this node is an object or an array
    fn is_composite(&self) -> bool {
        self.shape().is_composite()
    }
}
