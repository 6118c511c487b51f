use std::{fmt, ops::Index};

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Name-keyed children of an object node, in document order.
pub type Object = IndexMap<SmolStr, Node>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Unclassified,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Integer => "integer",
            NodeKind::Float => "float",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
            NodeKind::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a classified tree.
///
/// A tree is built once by [`crate::parse`] and never mutated afterwards.
/// Objects and arrays always have at least one child: an empty `{}` or `[]`
/// is classified as [`Node::Null`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Object(Object),
    Array(Vec<Node>),
    /// Raw string content; escape sequences are kept as parsed, not decoded.
    String(String),
    /// Literal text of an integer.
    Integer(String),
    /// Literal text of a float.
    Float(String),
    Boolean(bool),
    Null,
    /// A literal that matched no scalar rule.
    Unclassified(String),
}

impl Node {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
            Node::String(_) => NodeKind::String,
            Node::Integer(_) => NodeKind::Integer,
            Node::Float(_) => NodeKind::Float,
            Node::Boolean(_) => NodeKind::Boolean,
            Node::Null => NodeKind::Null,
            Node::Unclassified(_) => NodeKind::Unclassified,
        }
    }

    /// True for a `null` literal and for an empty `{}` or `[]`.
    ///
    /// Parsed trees never hold an empty container, but a hand-built one
    /// answers the same way.
    pub fn is_null(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Object(members) => members.is_empty(),
            Node::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Literal text of a scalar node. `None` for objects, arrays and null.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Node::String(text)
            | Node::Integer(text)
            | Node::Float(text)
            | Node::Unclassified(text) => Some(text),
            Node::Boolean(true) => Some("true"),
            Node::Boolean(false) => Some("false"),
            Node::Object(_) | Node::Array(_) | Node::Null => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Child by field name. `None` when absent or when `self` is not an object.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Child by index. `None` when out of range or when `self` is not an array.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Number of direct children; zero for scalars and null.
    pub fn len(&self) -> usize {
        match self {
            Node::Object(members) => members.len(),
            Node::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode::serialize(self))
    }
}

impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Node::Array(items) => items.get(index).unwrap_or_else(|| {
                panic!(
                    "index {index} out of bounds for array of length {}",
                    items.len()
                )
            }),
            _ => panic!("cannot index into non-array node of kind {}", self.kind()),
        }
    }
}

impl Index<&str> for Node {
    type Output = Node;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Node::Object(members) => members.get(key).unwrap_or_else(|| {
                panic!(
                    "key '{key}' not found in object with {} entries",
                    members.len()
                )
            }),
            _ => panic!("cannot index into non-object node of kind {}", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use indexmap::IndexMap;
    use smol_str::SmolStr;

    use super::{Node, NodeKind};

    fn sample_object() -> Node {
        let mut members = IndexMap::new();
        members.insert(SmolStr::new("a"), Node::Integer("1".to_string()));
        members.insert(
            SmolStr::new("b"),
            Node::Array(vec![Node::Boolean(true), Node::Null]),
        );
        Node::Object(members)
    }

    #[rstest::rstest]
    #[case(Node::String("x".to_string()), NodeKind::String, Some("x"))]
    #[case(Node::Integer("12".to_string()), NodeKind::Integer, Some("12"))]
    #[case(Node::Float("1.5".to_string()), NodeKind::Float, Some("1.5"))]
    #[case(Node::Boolean(false), NodeKind::Boolean, Some("false"))]
    #[case(Node::Null, NodeKind::Null, None)]
    #[case(Node::Unclassified("-3".to_string()), NodeKind::Unclassified, Some("-3"))]
    fn test_kind_and_raw_text(
        #[case] node: Node,
        #[case] kind: NodeKind,
        #[case] raw: Option<&str>,
    ) {
        assert_eq!(node.kind(), kind);
        assert_eq!(node.raw_text(), raw);
    }

    #[rstest::rstest]
    fn test_containers_have_no_raw_text() {
        let object = sample_object();
        assert_eq!(object.kind(), NodeKind::Object);
        assert!(object.raw_text().is_none());
        assert!(object["b"].raw_text().is_none());
    }

    #[rstest::rstest]
    fn test_child_lookup_is_kind_checked() {
        let object = sample_object();
        assert!(object.get("a").is_some());
        assert!(object.get("missing").is_none());
        assert!(object.get_index(0).is_none());

        let array = object.get("b").unwrap();
        assert_eq!(array.get_index(0), Some(&Node::Boolean(true)));
        assert!(array.get_index(2).is_none());
        assert!(array.get("0").is_none());
    }

    #[rstest::rstest]
    fn test_len_and_null() {
        let object = sample_object();
        assert_eq!(object.len(), 2);
        assert_eq!(object["b"].len(), 2);
        assert!(object["a"].is_empty());
        assert!(Node::Null.is_null());
        assert!(!object.is_null());
    }

    #[rstest::rstest]
    #[case(Node::Array(Vec::new()), true)]
    #[case(Node::Object(IndexMap::new()), true)]
    #[case(Node::Array(vec![Node::Null]), false)]
    #[case(Node::String(String::new()), false)]
    fn test_hand_built_empty_containers_are_null(#[case] node: Node, #[case] expected: bool) {
        assert_eq!(node.is_null(), expected);
        assert_eq!(crate::is_null(&node), expected);
    }

    #[rstest::rstest]
    fn test_indexing_panics_on_miss() {
        let object = sample_object();
        let err = catch_unwind(AssertUnwindSafe(|| {
            let _ = &object["missing"];
        }));
        assert!(err.is_err());

        let err = catch_unwind(AssertUnwindSafe(|| {
            let _ = &object[0];
        }));
        assert!(err.is_err());

        let err = catch_unwind(AssertUnwindSafe(|| {
            let _ = &object["b"][5];
        }));
        assert!(err.is_err());
    }

    #[rstest::rstest]
    fn test_kind_display() {
        assert_eq!(NodeKind::Unclassified.to_string(), "unclassified");
    }
}
