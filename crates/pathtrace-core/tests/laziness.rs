//! Views only touch the nodes a caller asks for
//!
//! The fixture counts every child lookup, so any eager walk of the tree would
//! show up in the counters.

use std::cell::Cell;
use std::collections::BTreeMap;

use pathtrace_core::{wrap, Composite, Navigated, PathSegment, Shape};

#[derive(Debug)]
enum Node {
    Leaf(i64),
    List(Vec<Node>),
    Map(BTreeMap<String, Node>, Cell<usize>),
}

impl Node {
    fn map<const N: usize>(entries: [(&str, Node); N]) -> Self {
        Node::Map(
            entries
                .into_iter()
                .map(|(key, node)| (key.to_owned(), node))
                .collect(),
            Cell::new(0),
        )
    }

    fn reads(&self) -> usize {
        match self {
            Node::Map(_, reads) => reads.get(),
            _ => 0,
        }
    }

    fn total_reads(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::List(items) => items.iter().map(Node::total_reads).sum(),
            Node::Map(entries, reads) => {
                reads.get() + entries.values().map(Node::total_reads).sum::<usize>()
            }
        }
    }

    fn entry(&self, key: &str) -> &Node {
        match self {
            Node::Map(entries, _) => &entries[key],
            _ => panic!("not a map"),
        }
    }
}

impl Composite for Node {
    fn shape(&self) -> Shape {
        match self {
            Node::Leaf(_) => Shape::Scalar,
            Node::List(_) => Shape::Array,
            Node::Map(..) => Shape::Object,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            Node::Map(entries, reads) => {
                reads.set(reads.get() + 1);
                entries.get(key)
            }
            _ => None,
        }
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        match self {
            Node::List(items) => items.get(index),
            _ => None,
        }
    }
}

fn wide_branch(width: usize) -> Node {
    Node::List(
        (0..width)
            .map(|i| Node::map([("value", Node::Leaf(i as i64)), ("nested", Node::map([]))]))
            .collect(),
    )
}

#[test]
fn test_wrap_reads_nothing() {
    let doc = Node::map([("left", wide_branch(100)), ("right", wide_branch(100))]);
    let _root = wrap(&doc).unwrap();
    assert_eq!(doc.total_reads(), 0);
}

#[test]
fn test_only_visited_branch_is_read() {
    let doc = Node::map([("left", wide_branch(100)), ("right", wide_branch(100))]);
    let root = wrap(&doc).unwrap();

    let item = root.descend(["left", "42"]).into_view().unwrap();
    let resolved = item.resolve("value");

    assert!(matches!(resolved.value, Some(Node::Leaf(42))));
    assert_eq!(
        resolved.path.segments(),
        &[
            PathSegment::from("left"),
            PathSegment::Index(42),
            PathSegment::from("value")
        ]
    );

    // one read at the root, one at left[42]
    assert_eq!(doc.reads(), 1);
    assert_eq!(doc.total_reads(), 2);
    assert_eq!(doc.entry("right").total_reads(), 0);
}

#[test]
fn test_scalar_short_circuit_on_custom_tree() {
    let doc = Node::map([("count", Node::Leaf(7))]);
    let root = wrap(&doc).unwrap();

    assert!(matches!(root.navigate("count"), Navigated::Value(Node::Leaf(7))));
    assert!(wrap(&Node::Leaf(1)).is_err());
}
