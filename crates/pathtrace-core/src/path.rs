//! Accumulated paths
//!
//! A [`ValuePath`] is owned by exactly one view or one resolved pair. Going
//! one level deeper clones the parent's path and appends a segment, so no two
//! views ever share (or observe changes to) the same sequence.

use core::ops::Deref;

use crate::segment::PathSegment;

/// Ordered segments leading from a root document to a value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValuePath(Vec<PathSegment>);

impl ValuePath {
    /// Empty path addressing the root itself
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Copy of this path with one more segment at the end
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }

    /// Segments in traversal order
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Consume the path, returning its segments
    pub fn into_inner(self) -> Vec<PathSegment> {
        self.0
    }
}

impl Deref for ValuePath {
    type Target = [PathSegment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PathSegment>> for ValuePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<PathSegment> for ValuePath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValuePath {
    type Item = PathSegment;
    type IntoIter = std::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValuePath {
    type Item = &'a PathSegment;
    type IntoIter = core::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[PathSegment]> for ValuePath {
    fn eq(&self, other: &[PathSegment]) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<PathSegment>> for ValuePath {
    fn eq(&self, other: &Vec<PathSegment>) -> bool {
        &self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_leaves_parent_untouched() {
        let parent = ValuePath::root().child("a".into());
        let left = parent.child(0usize.into());
        let right = parent.child("b".into());

        assert_eq!(parent.len(), 1);
        assert_eq!(left.segments(), &[PathSegment::from("a"), PathSegment::Index(0)]);
        assert_eq!(right.segments(), &[PathSegment::from("a"), PathSegment::from("b")]);
    }

    #[test]
    fn test_root_is_empty() {
        let root = ValuePath::root();
        assert!(root.is_empty());
        assert_eq!(root, ValuePath::default());
        assert_eq!(root.last(), None);
    }

    #[test]
    fn test_collect_and_iterate() {
        let path: ValuePath = ["x", "y"].into_iter().map(PathSegment::from).collect();
        let keys: Vec<_> = path.iter().filter_map(PathSegment::as_key).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(path.into_inner().len(), 2);
    }
}
