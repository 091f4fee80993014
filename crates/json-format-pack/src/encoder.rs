//! `PackEncoder`: [`PackNode`] to JSON text.
//!
//! Binary values are written as data URI strings and `Undefined` as the
//! CBOR-undefined data URI. Printing them is one-way: the decoder reads
//! those strings back as plain [`PackNode::Str`] values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::node::PackNode;

const BIN_PREFIX: &str = "data:application/octet-stream;base64,";
const UNDEF_URI: &str = "data:application/cbor,base64;9w==";

pub struct PackEncoder {
    out: String,
    /// Spaces per level; `None` for compact output.
    indent: Option<usize>,
    depth: usize,
}

impl PackEncoder {
    pub fn compact() -> Self {
        Self {
            out: String::new(),
            indent: None,
            depth: 0,
        }
    }

    pub fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
            ..Self::compact()
        }
    }

    pub fn encode(mut self, value: &PackNode) -> String {
        self.write_any(value);
        self.out
    }

    fn write_any(&mut self, value: &PackNode) {
        match value {
            PackNode::Null => self.out.push_str("null"),
            PackNode::Undefined => self.write_str(UNDEF_URI),
            PackNode::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            PackNode::Integer(i) => self.out.push_str(&i.to_string()),
            PackNode::BigInt(i) => self.out.push_str(&i.to_string()),
            PackNode::Number(n) => self.out.push_str(n.as_str()),
            PackNode::Str(s) => self.write_str(s),
            PackNode::Bytes(b) => self.write_bin(b),
            PackNode::Array(arr) => self.write_arr(arr),
            PackNode::Object(obj) => self.write_obj(obj),
        }
    }

    fn write_bin(&mut self, buf: &[u8]) {
        self.out.push('"');
        self.out.push_str(BIN_PREFIX);
        self.out.push_str(&STANDARD.encode(buf));
        self.out.push('"');
    }

    fn write_str(&mut self, s: &str) {
        let plain = s.bytes().all(|b| (32..127).contains(&b) && b != b'"' && b != b'\\');
        if plain {
            self.out.reserve(s.len() + 2);
            self.out.push('"');
            self.out.push_str(s);
            self.out.push('"');
            return;
        }
        // Serializing a str cannot fail.
        let quoted = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.out.push_str(&quoted);
    }

    fn write_arr(&mut self, arr: &[PackNode]) {
        if arr.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        self.depth += 1;
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline();
            self.write_any(item);
        }
        self.depth -= 1;
        self.newline();
        self.out.push(']');
    }

    fn write_obj(&mut self, obj: &[(String, PackNode)]) {
        if obj.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.depth += 1;
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline();
            self.write_str(key);
            self.out.push(':');
            if self.indent.is_some() {
                self.out.push(' ');
            }
            self.write_any(value);
        }
        self.depth -= 1;
        self.newline();
        self.out.push('}');
    }

    fn newline(&mut self) {
        if let Some(indent) = self.indent {
            self.out.push('\n');
            self.out.extend(std::iter::repeat(' ').take(indent * self.depth));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PackNode {
        PackNode::Object(vec![
            (
                "a".into(),
                PackNode::Array(vec![PackNode::Integer(1), PackNode::Str("x\"y".into())]),
            ),
            ("b".into(), PackNode::Object(vec![])),
            ("c".into(), PackNode::Bytes(vec![1, 2, 3])),
        ])
    }

    #[test]
    fn compact_has_no_whitespace() {
        assert_eq!(
            PackEncoder::compact().encode(&sample()),
            r#"{"a":[1,"x\"y"],"b":{},"c":"data:application/octet-stream;base64,AQID"}"#
        );
    }

    #[test]
    fn pretty_indents_each_level() {
        let expected = "{\n  \"a\": [\n    1,\n    \"x\\\"y\"\n  ],\n  \"b\": {},\n  \"c\": \"data:application/octet-stream;base64,AQID\"\n}";
        assert_eq!(PackEncoder::pretty(2).encode(&sample()), expected);
    }

    #[test]
    fn writes_undefined_sentinel() {
        assert_eq!(
            PackEncoder::compact().encode(&PackNode::Undefined),
            r#""data:application/cbor,base64;9w==""#
        );
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(
            PackEncoder::compact().encode(&PackNode::Str("é\u{1}\n".into())),
            "\"é\\u0001\\n\""
        );
    }
}
