use smol_str::SmolStr;

use crate::constants::is_whitespace;
use crate::types::{Node, Object};
use crate::{Error, ParseOptions, Result};

use super::raw::RawNode;

pub fn classify(raw: RawNode<'_>, options: &ParseOptions) -> Result<Node> {
    match raw {
        RawNode::Object { children, .. } => classify_object(children, options),
        RawNode::Array { children, .. } => classify_array(children, options),
        RawNode::Quoted { text, .. } => Ok(Node::String(text.into_owned())),
        RawNode::Literal { text, .. } => Ok(classify_literal(text, options.signed_numbers)),
        RawNode::Separator { location } => Err(Error::structural("unexpected ':'", location)),
    }
}

/// Groups flat object children into `name : value` members.
fn classify_object(children: Vec<RawNode<'_>>, options: &ParseOptions) -> Result<Node> {
    if children.is_empty() {
        return Ok(Node::Null);
    }

    let mut members = Object::with_capacity(children.len() / 3);
    let mut iter = children.into_iter();
    while let Some(name) = iter.next() {
        let name_location = name.location();
        let key = match name {
            RawNode::Quoted { text, .. } => SmolStr::from(text.as_ref()),
            RawNode::Separator { location } => {
                return Err(Error::structural("unexpected ':'", location))
            }
            other => {
                return Err(Error::structural(
                    "object member name must be a string",
                    other.location(),
                ))
            }
        };

        match iter.next() {
            Some(RawNode::Separator { .. }) => {}
            Some(other) => {
                return Err(Error::structural(
                    format!("expected ':' after member {key:?}"),
                    other.location(),
                ))
            }
            None => {
                return Err(Error::structural(
                    format!("missing ':' after member {key:?}"),
                    name_location,
                ))
            }
        }

        let value = match iter.next() {
            Some(RawNode::Separator { location }) => {
                return Err(Error::structural("unexpected ':'", location))
            }
            Some(value) => value,
            None => {
                return Err(Error::structural(
                    format!("missing value for member {key:?}"),
                    name_location,
                ))
            }
        };

        // A repeated name keeps its first position and takes the last value.
        members.insert(key, classify(value, options)?);
    }
    Ok(Node::Object(members))
}

fn classify_array(children: Vec<RawNode<'_>>, options: &ParseOptions) -> Result<Node> {
    if children.is_empty() {
        return Ok(Node::Null);
    }
    children
        .into_iter()
        .map(|child| classify(child, options))
        .collect::<Result<Vec<_>>>()
        .map(Node::Array)
}

pub fn classify_literal(text: &str, signed_numbers: bool) -> Node {
    let trimmed = text.trim_matches(is_whitespace);
    let unsigned = if signed_numbers {
        trimmed.strip_prefix('-').unwrap_or(trimmed)
    } else {
        trimmed
    };

    if is_digits(unsigned) {
        return Node::Integer(trimmed.to_string());
    }
    if is_decimal(unsigned) {
        return Node::Float(trimmed.to_string());
    }
    match trimmed {
        "true" => Node::Boolean(true),
        "false" => Node::Boolean(false),
        "null" => Node::Null,
        _ => Node::Unclassified(trimmed.to_string()),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => false,
    }
}
