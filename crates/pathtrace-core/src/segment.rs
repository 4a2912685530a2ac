//! Key and segment types for tracked navigation
//!
//! An [`AccessKey`] is what callers hand to a view; a [`PathSegment`] is what
//! ends up in the recorded path. The conversion between the two depends on
//! the container being read, not on the key itself: reads from an array are
//! recorded as numeric indices, reads from an object as string keys. Schema
//! validators address fields the same way, so recorded paths can be matched
//! against their error paths directly.

use crate::traits::{Composite, Shape};

/// One step in the address of a value inside a nested document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array position
    Index(usize),
}

impl PathSegment {
    /// Object key carried by this segment, if any
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }

    /// Array position carried by this segment, if any
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl PartialEq<&str> for PathSegment {
    fn eq(&self, other: &&str) -> bool {
        self.as_key() == Some(*other)
    }
}

impl PartialEq<usize> for PathSegment {
    fn eq(&self, other: &usize) -> bool {
        self.as_index() == Some(*other)
    }
}

/// Key supplied by a caller when reading from a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKey<'k> {
    /// Property name; parsed as a decimal index when read from an array
    Name(&'k str),
    /// Position; stringified when read from an object
    Index(usize),
}

impl<'k> From<&'k str> for AccessKey<'k> {
    fn from(name: &'k str) -> Self {
        AccessKey::Name(name)
    }
}

impl<'k> From<&'k String> for AccessKey<'k> {
    fn from(name: &'k String) -> Self {
        AccessKey::Name(name.as_str())
    }
}

impl From<usize> for AccessKey<'_> {
    fn from(index: usize) -> Self {
        AccessKey::Index(index)
    }
}

impl<'k> From<&'k PathSegment> for AccessKey<'k> {
    fn from(segment: &'k PathSegment) -> Self {
        match segment {
            PathSegment::Key(key) => AccessKey::Name(key),
            PathSegment::Index(index) => AccessKey::Index(*index),
        }
    }
}

impl<'k> AccessKey<'k> {
    /// Segment recorded for this key when reading from a container of `shape`
    ///
    /// Array reads parse names as decimal indices. A name that is not an
    /// index stays a string key; no array holds anything under it.
    pub fn segment_for(self, shape: Shape) -> PathSegment {
        match (shape, self) {
            (Shape::Array, AccessKey::Index(index)) => PathSegment::Index(index),
            (Shape::Array, AccessKey::Name(name)) => match parse_index(name) {
                Some(index) => PathSegment::Index(index),
                None => PathSegment::Key(name.to_owned()),
            },
            (_, AccessKey::Name(name)) => PathSegment::Key(name.to_owned()),
            (_, AccessKey::Index(index)) => PathSegment::Key(index.to_string()),
        }
    }

    /// Read the child this key addresses inside `node`
    pub(crate) fn read<'n, T: Composite + ?Sized>(self, node: &'n T) -> Option<&'n T> {
        match (node.shape(), self) {
            (Shape::Array, AccessKey::Index(index)) => node.get_index(index),
            (Shape::Array, AccessKey::Name(name)) => {
                parse_index(name).and_then(|index| node.get_index(index))
            }
            (_, AccessKey::Name(name)) => node.get_key(name),
            (_, AccessKey::Index(index)) => node.get_key(&index.to_string()),
        }
    }
}

/// Canonical decimal index: digits only, no sign, no leading zeros
fn parse_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if name.len() > 1 && name.starts_with('0') {
        return None;
    }
    name.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_accessors() {
        let key = PathSegment::from("name");
        let index = PathSegment::from(3usize);

        assert_eq!(key.as_key(), Some("name"));
        assert_eq!(key.as_index(), None);
        assert_eq!(index.as_index(), Some(3));
        assert_eq!(index.as_key(), None);

        assert_eq!(key, "name");
        assert_eq!(index, 3usize);
        assert_ne!(PathSegment::from("3"), 3usize);
    }

    #[test]
    fn test_segment_follows_container() {
        assert_eq!(AccessKey::Index(1).segment_for(Shape::Array), PathSegment::Index(1));
        assert_eq!(AccessKey::Name("1").segment_for(Shape::Array), PathSegment::Index(1));
        assert_eq!(
            AccessKey::Name("1").segment_for(Shape::Object),
            PathSegment::Key("1".into())
        );
        assert_eq!(
            AccessKey::Index(7).segment_for(Shape::Object),
            PathSegment::Key("7".into())
        );
    }

    #[test]
    fn test_non_index_name_on_array_stays_key() {
        assert_eq!(
            AccessKey::Name("length").segment_for(Shape::Array),
            PathSegment::Key("length".into())
        );
        assert_eq!(
            AccessKey::Name("-1").segment_for(Shape::Array),
            PathSegment::Key("-1".into())
        );
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("007"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("1.5"), None);
    }
}
