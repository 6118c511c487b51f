//! Typed extraction from classified nodes.
//!
//! Scalar getters succeed only on an exact kind match; nothing falls back to
//! a default value. Container getters materialize the whole subtree into
//! [`Value`]s.

use crate::types::{Map, Node, NodeKind, Value};
use crate::{Error, Result};

impl Node {
    pub fn get_string(&self) -> Result<&str> {
        match self {
            Node::String(text) => Ok(text),
            other => Err(Error::type_mismatch(NodeKind::String, other.kind())),
        }
    }

    pub fn get_integer(&self) -> Result<i64> {
        match self {
            Node::Integer(raw) => raw.parse().map_err(|err| Error::numeric(raw.as_str(), err)),
            other => Err(Error::type_mismatch(NodeKind::Integer, other.kind())),
        }
    }

    pub fn get_float(&self) -> Result<f64> {
        match self {
            Node::Float(raw) => raw.parse().map_err(|err| Error::numeric(raw.as_str(), err)),
            other => Err(Error::type_mismatch(NodeKind::Float, other.kind())),
        }
    }

    pub fn get_boolean(&self) -> Result<bool> {
        match self {
            Node::Boolean(value) => Ok(*value),
            other => Err(Error::type_mismatch(NodeKind::Boolean, other.kind())),
        }
    }

    pub fn get_object(&self) -> Result<Map> {
        match self {
            Node::Object(members) => members
                .iter()
                .map(|(key, child)| Ok((key.to_string(), child.to_value()?)))
                .collect(),
            other => Err(Error::type_mismatch(NodeKind::Object, other.kind())),
        }
    }

    pub fn get_array(&self) -> Result<Vec<Value>> {
        match self {
            Node::Array(items) => items.iter().map(Node::to_value).collect(),
            other => Err(Error::type_mismatch(NodeKind::Array, other.kind())),
        }
    }

    /// Materializes any node. `Unclassified` literals have no value form and
    /// fail with a type mismatch, wherever they sit in the subtree.
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Node::Object(_) => self.get_object().map(Value::Object),
            Node::Array(_) => self.get_array().map(Value::Array),
            Node::String(text) => Ok(Value::String(text.clone())),
            Node::Integer(_) => self.get_integer().map(Value::Integer),
            Node::Float(_) => self.get_float().map(Value::Float),
            Node::Boolean(value) => Ok(Value::Bool(*value)),
            Node::Null => Ok(Value::Null),
            Node::Unclassified(_) => Err(Error::type_mismatch(
                NodeKind::String,
                NodeKind::Unclassified,
            )),
        }
    }

    pub fn query_string(&self, path: &str) -> Result<&str> {
        self.query(path)?.get_string()
    }

    pub fn query_integer(&self, path: &str) -> Result<i64> {
        self.query(path)?.get_integer()
    }

    pub fn query_float(&self, path: &str) -> Result<f64> {
        self.query(path)?.get_float()
    }

    pub fn query_boolean(&self, path: &str) -> Result<bool> {
        self.query(path)?.get_boolean()
    }

    pub fn query_object(&self, path: &str) -> Result<Map> {
        self.query(path)?.get_object()
    }

    pub fn query_array(&self, path: &str) -> Result<Vec<Value>> {
        self.query(path)?.get_array()
    }

    /// Resolves `path` and converts the node into `T`.
    ///
    /// ```
    /// let root = genjson::parse(r#"{"user": {"name": "Ada", "age": 37}}"#).unwrap();
    /// let age: i64 = root.query_as("user.age").unwrap();
    /// let name: &str = root.query_as("user.name").unwrap();
    /// assert_eq!((name, age), ("Ada", 37));
    /// ```
    pub fn query_as<'a, T: FromNode<'a>>(&'a self, path: &str) -> Result<T> {
        T::from_node(self.query(path)?)
    }
}

pub fn is_null(node: &Node) -> bool {
    node.is_null()
}

/// Conversion from a borrowed node, used by [`Node::query_as`].
pub trait FromNode<'a>: Sized {
    fn from_node(node: &'a Node) -> Result<Self>;
}

impl<'a> FromNode<'a> for &'a str {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.get_string()
    }
}

impl<'a> FromNode<'a> for String {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.get_string().map(str::to_string)
    }
}

impl<'a> FromNode<'a> for i64 {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.get_integer()
    }
}

impl<'a> FromNode<'a> for f64 {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.get_float()
    }
}

impl<'a> FromNode<'a> for bool {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.get_boolean()
    }
}

impl<'a> FromNode<'a> for Value {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.to_value()
    }
}

impl<'a> FromNode<'a> for Map {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.get_object()
    }
}

impl<'a> FromNode<'a> for Vec<Value> {
    fn from_node(node: &'a Node) -> Result<Self> {
        node.get_array()
    }
}

impl<'a> FromNode<'a> for &'a Node {
    fn from_node(node: &'a Node) -> Result<Self> {
        Ok(node)
    }
}
