use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Renders `node` over multiple lines, `indent` spaces per level, with
/// `": "` between keys and values.
pub(crate) fn pretty(node: &Value, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut out = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    // A `Value` always has string keys, so serializing into memory cannot fail.
    if node.serialize(&mut ser).is_err() {
        return String::new();
    }
    String::from_utf8(out).unwrap_or_default()
}

pub(crate) fn compact(node: &Value) -> String {
    serde_json::to_string(node).unwrap_or_default()
}
