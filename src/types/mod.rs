mod node;
mod value;

pub use node::{Node, NodeKind, Object};
pub use value::{Map, Value};
