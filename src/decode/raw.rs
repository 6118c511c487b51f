use std::borrow::Cow;

use crate::Location;

/// Structural tree produced before scalar types are known.
///
/// Object children are kept flat, in document order, with a `Separator`
/// marker wherever a `:` appeared; classification groups them into members.
#[derive(Debug, Clone, PartialEq)]
pub enum RawNode<'a> {
    Object {
        children: Vec<RawNode<'a>>,
        location: Location,
    },
    Array {
        children: Vec<RawNode<'a>>,
        location: Location,
    },
    Quoted {
        text: Cow<'a, str>,
        location: Location,
    },
    Literal {
        text: &'a str,
        location: Location,
    },
    Separator {
        location: Location,
    },
}

impl RawNode<'_> {
    pub fn location(&self) -> Location {
        match self {
            RawNode::Object { location, .. }
            | RawNode::Array { location, .. }
            | RawNode::Quoted { location, .. }
            | RawNode::Literal { location, .. }
            | RawNode::Separator { location } => *location,
        }
    }
}
