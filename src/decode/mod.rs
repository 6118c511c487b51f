mod classify;
mod parser;
mod raw;
pub mod reader;

use std::io::Read;

use tracing::debug;

use crate::types::Node;
use crate::{ParseOptions, Result};

pub fn from_str(input: &str, options: &ParseOptions) -> Result<Node> {
    let raw = parser::parse_raw(input, options)?;
    let root = classify::classify(raw, options)?;
    debug!(
        bytes = input.len(),
        root = %root.kind(),
        children = root.len(),
        "parsed document"
    );
    Ok(root)
}

pub fn from_slice(input: &[u8], options: &ParseOptions) -> Result<Node> {
    let text = reader::decode_utf8(input)?;
    from_str(text, options)
}

pub fn from_reader<R: Read>(source: R, options: &ParseOptions) -> Result<Node> {
    let buf = reader::read_source(source)?;
    from_str(&buf, options)
}
