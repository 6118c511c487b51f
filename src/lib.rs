//! Schema-less JSON reading.
//!
//! [`parse`] builds an immutable [`Node`] tree from JSON text, [`Node::query`]
//! walks it with a small dot/bracket path dialect, and the `get_*` /
//! `query_*` accessors pull native values out without declaring target
//! types.
//!
//! ```
//! let root = genjson::parse(r#"{"arr": [10, 20, 30], "a": {"b": {"c": 42}}}"#).unwrap();
//! assert_eq!(root.query_integer("arr[2]").unwrap(), 30);
//! assert_eq!(root.query("a.b.c").unwrap().get_integer().unwrap(), 42);
//! ```

pub mod access;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod query;
pub mod text;
pub mod types;

use std::io::Read;

pub use crate::access::{is_null, FromNode};
pub use crate::encode::{serialize, serialize_pretty};
pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::{Indent, ParseOptions, SerializeOptions};
pub use crate::query::query;
pub use crate::types::{Map, Node, NodeKind, Object, Value};

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(input: &str) -> Result<Node> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Node> {
    decode::from_str(input, options)
}

pub fn parse_slice(input: &[u8]) -> Result<Node> {
    parse_slice_with_options(input, &ParseOptions::default())
}

pub fn parse_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Node> {
    decode::from_slice(input, options)
}

/// Drains `reader` completely, then parses the buffered text.
pub fn parse_reader<R: Read>(reader: R) -> Result<Node> {
    parse_reader_with_options(reader, &ParseOptions::default())
}

pub fn parse_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<Node> {
    decode::from_reader(reader, options)
}
