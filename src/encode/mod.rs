pub(crate) mod writer;

use crate::options::SerializeOptions;
use crate::types::Node;

use self::writer::Writer;

/// Rebuilds JSON-like text from a classified tree on a single line.
///
/// Objects keep document order and arrays are written by index. Strings are
/// re-quoted from their raw content, so the output parses back into an equal
/// tree; it is not byte-identical to the original input.
pub fn serialize(root: &Node) -> String {
    let mut writer = Writer::compact();
    write_node(&mut writer, root, 0);
    writer.finish()
}

pub fn serialize_pretty(root: &Node, options: &SerializeOptions) -> String {
    let mut writer = Writer::pretty(options);
    write_node(&mut writer, root, 0);
    writer.finish()
}

fn write_node(writer: &mut Writer, node: &Node, depth: usize) {
    match node {
        Node::Object(members) => {
            writer.write_char('{');
            if !members.is_empty() {
                writer.open_container(depth + 1);
                for (idx, (key, child)) in members.iter().enumerate() {
                    if idx > 0 {
                        writer.write_item_separator(depth + 1);
                    }
                    writer.write_quoted(key);
                    writer.write_key_separator();
                    write_node(writer, child, depth + 1);
                }
                writer.close_container(depth);
            }
            writer.write_char('}');
        }
        Node::Array(items) => {
            writer.write_char('[');
            if !items.is_empty() {
                writer.open_container(depth + 1);
                for (idx, child) in items.iter().enumerate() {
                    if idx > 0 {
                        writer.write_item_separator(depth + 1);
                    }
                    write_node(writer, child, depth + 1);
                }
                writer.close_container(depth);
            }
            writer.write_char(']');
        }
        Node::String(text) => writer.write_quoted(text),
        Node::Integer(raw) | Node::Float(raw) | Node::Unclassified(raw) => writer.write_str(raw),
        Node::Boolean(true) => writer.write_str("true"),
        Node::Boolean(false) => writer.write_str("false"),
        Node::Null => writer.write_str("null"),
    }
}
