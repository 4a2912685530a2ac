//! Tracked views over nested documents
//!
//! A [`TrackedView`] borrows one composite node (object or array) together
//! with the path that led to it. Reading a key through [`TrackedView::navigate`]
//! either hands back a deeper view, for composite children, or the raw child
//! for scalars and nulls. [`TrackedView::resolve`] ends the traversal and
//! returns the raw child together with its full path.
//!
//! Views are created on demand. Nothing below the current node is visited
//! until a caller asks for it, and re-reading the same key builds a fresh,
//! equivalent view.
//!
//! ```rust
//! use pathtrace_core::{wrap, PathSegment};
//! use serde_json::json;
//!
//! let doc = json!({ "a": { "b": [ { "c": 1 } ] } });
//! let root = wrap(&doc).unwrap();
//!
//! let item = root
//!     .navigate("a")
//!     .into_view()
//!     .and_then(|a| a.navigate("b").into_view())
//!     .and_then(|b| b.navigate(0).into_view())
//!     .unwrap();
//!
//! let resolved = item.resolve("c");
//! assert_eq!(resolved.value, Some(&json!(1)));
//! assert_eq!(
//!     resolved.path.segments(),
//!     &[
//!         PathSegment::from("a"),
//!         PathSegment::from("b"),
//!         PathSegment::Index(0),
//!         PathSegment::from("c"),
//!     ]
//! );
//! ```

use tracing::{debug, trace};

use crate::error::{PathError, Result};
use crate::path::ValuePath;
use crate::segment::AccessKey;
use crate::traits::{Composite, Shape};

/// Read-only, path-recording view over a composite document node
#[derive(Debug)]
pub struct TrackedView<'a, T: ?Sized> {
    node: &'a T,
    path: ValuePath,
}

// Manual impl: deriving would demand `T: Clone`.
impl<T: ?Sized> Clone for TrackedView<'_, T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            path: self.path.clone(),
        }
    }
}

/// Outcome of reading one key through a view
#[derive(Debug)]
pub enum Navigated<'a, T: ?Sized> {
    /// The child is an object or array; keep navigating
    View(TrackedView<'a, T>),
    /// The child is a scalar or null, returned unwrapped
    Value(&'a T),
    /// Nothing is stored under the key
    Missing,
}

impl<'a, T: ?Sized> Navigated<'a, T> {
    /// Deeper view, if the child was composite
    pub fn into_view(self) -> Option<TrackedView<'a, T>> {
        match self {
            Navigated::View(view) => Some(view),
            _ => None,
        }
    }

    /// Raw child regardless of shape, `None` when missing
    pub fn into_value(self) -> Option<&'a T> {
        match self {
            Navigated::View(view) => Some(view.node),
            Navigated::Value(value) => Some(value),
            Navigated::Missing => None,
        }
    }

    /// Whether nothing was stored under the key
    pub fn is_missing(&self) -> bool {
        matches!(self, Navigated::Missing)
    }
}

/// A value together with the full path that addresses it
///
/// Produced by [`TrackedView::resolve`]. The path is freshly allocated and
/// shares nothing with the view it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a, T: ?Sized> {
    /// Raw value stored under the final key, `None` when absent
    pub value: Option<&'a T>,
    /// Path from the root, final key included
    pub path: ValuePath,
}

impl<'a, T: ?Sized> Resolved<'a, T> {
    /// Split into `(value, path)`
    pub fn into_tuple(self) -> (Option<&'a T>, ValuePath) {
        (self.value, self.path)
    }
}

impl<'a, T: ?Sized> From<Resolved<'a, T>> for (Option<&'a T>, ValuePath) {
    fn from(resolved: Resolved<'a, T>) -> Self {
        resolved.into_tuple()
    }
}

/// Create a tracked view over a root document
///
/// # Errors
///
/// Returns [`PathError::NotComposite`] when `root` is a scalar or null, since
/// there is nothing to navigate into.
pub fn wrap<T: Composite + ?Sized>(root: &T) -> Result<TrackedView<'_, T>> {
    let shape = root.shape();
    if !shape.is_composite() {
        return Err(PathError::NotComposite { shape });
    }
    debug!(%shape, "wrapping root document");
    Ok(TrackedView {
        node: root,
        path: ValuePath::root(),
    })
}

/// Read `key` from `view` and return the raw value with its full path
///
/// Equivalent to [`TrackedView::resolve`].
pub fn resolve<'a, 'k, T: Composite + ?Sized>(
    view: &TrackedView<'a, T>,
    key: impl Into<AccessKey<'k>>,
) -> Resolved<'a, T> {
    view.resolve(key)
}

impl<'a, T: Composite + ?Sized> TrackedView<'a, T> {
    /// Read one key, wrapping the child if it is an object or array
    ///
    /// The recorded segment follows the container: a numeric index when this
    /// view holds an array, the string key otherwise.
    pub fn navigate<'k>(&self, key: impl Into<AccessKey<'k>>) -> Navigated<'a, T> {
        let key = key.into();
        let Some(child) = key.read(self.node) else {
            trace!(depth = self.depth(), ?key, "key not present");
            return Navigated::Missing;
        };

        if child.is_composite() {
            let segment = key.segment_for(self.shape());
            trace!(depth = self.depth() + 1, ?segment, "descending");
            Navigated::View(TrackedView {
                node: child,
                path: self.path.child(segment),
            })
        } else {
            Navigated::Value(child)
        }
    }

    /// Read one key and return the raw child with its full path
    ///
    /// The child is never wrapped, even when it is itself composite. Absent
    /// keys resolve to `None` with the path they would have had.
    pub fn resolve<'k>(&self, key: impl Into<AccessKey<'k>>) -> Resolved<'a, T> {
        let key = key.into();
        let segment = key.segment_for(self.shape());
        let value = key.read(self.node);
        trace!(depth = self.depth() + 1, ?segment, found = value.is_some(), "resolved");
        Resolved {
            value,
            path: self.path.child(segment),
        }
    }

    /// Navigate a chain of keys, stopping at the first non-composite child
    ///
    /// Keys left over after reaching a scalar are read from that scalar,
    /// which holds nothing, so the result is [`Navigated::Missing`]. An empty
    /// chain returns a copy of this view.
    pub fn descend<'k, I>(&self, keys: I) -> Navigated<'a, T>
    where
        I: IntoIterator,
        I::Item: Into<AccessKey<'k>>,
    {
        let mut current = self.clone();
        let mut keys = keys.into_iter();
        while let Some(key) = keys.next() {
            match current.navigate(key) {
                Navigated::View(next) => current = next,
                Navigated::Value(value) => {
                    return if keys.next().is_none() {
                        Navigated::Value(value)
                    } else {
                        Navigated::Missing
                    };
                }
                Navigated::Missing => return Navigated::Missing,
            }
        }
        Navigated::View(current)
    }

    /// Shape of the node this view holds, always object or array
    pub fn shape(&self) -> Shape {
        self.node.shape()
    }
}

impl<'a, T: ?Sized> TrackedView<'a, T> {
    /// Path from the root to this view
    pub fn path(&self) -> &ValuePath {
        &self.path
    }

    /// Number of segments between the root and this view
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Raw borrow of the node this view holds
    pub fn node(&self) -> &'a T {
        self.node
    }
}
