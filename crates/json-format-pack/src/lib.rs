//! `json-format-pack`: a self-contained [`Json`] backend over [`PackNode`].
//!
//! Besides the six JSON kinds a tree built in code can hold binary data and an
//! `undefined` value. Those two kinds fall outside the JSON taxonomy:
//! classifying them fails with [`FormatError::UnsupportedNodeKind`], and so
//! does any conversion that reaches them. Parsed text only ever yields the six
//! JSON kinds.
//!
//! ```
//! use json_format_core::{AutoMarshalling, Json};
//! use json_format_pack::PACK_JSON;
//!
//! let tags: Vec<String> = PACK_JSON.from_str(r#"["a","b"]"#).unwrap();
//! assert_eq!(tags, ["a", "b"]);
//! assert_eq!(PACK_JSON.compactify("[ 1 , 2 ]").unwrap(), "[1,2]");
//! ```

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod node;

pub use config::PackConfig;
pub use decoder::PackDecoder;
pub use encoder::PackEncoder;
pub use error::DecodeError;
pub use node::PackNode;

use json_format_core::json::{truthy_number, truthy_text};
use json_format_core::{Decimal, FormatError, Json, JsonType, MarshallingConfig, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackJson {
    config: PackConfig,
}

pub const PACK_JSON: PackJson = PackJson::new(PackConfig::DEFAULT);

impl PackJson {
    pub const fn new(config: PackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }
}

fn kind(node: &PackNode) -> Result<JsonType> {
    match node {
        PackNode::Null => Ok(JsonType::Null),
        PackNode::Bool(_) => Ok(JsonType::Boolean),
        PackNode::Integer(_) | PackNode::BigInt(_) | PackNode::Number(_) => Ok(JsonType::Number),
        PackNode::Str(_) => Ok(JsonType::String),
        PackNode::Array(_) => Ok(JsonType::Array),
        PackNode::Object(_) => Ok(JsonType::Object),
        PackNode::Undefined => Err(FormatError::UnsupportedNodeKind("undefined".to_string())),
        PackNode::Bytes(_) => Err(FormatError::UnsupportedNodeKind("binary".to_string())),
    }
}

fn mismatch(operation: &'static str, expected: JsonType, node: &PackNode) -> FormatError {
    match kind(node) {
        Ok(actual) => FormatError::TypeMismatch {
            operation,
            expected,
            actual,
        },
        Err(err) => err,
    }
}

impl Json for PackJson {
    type Node = PackNode;

    fn type_of(&self, node: &PackNode) -> Result<JsonType> {
        kind(node)
    }

    fn fields<'n>(&self, node: &'n PackNode) -> Result<Vec<(&'n str, &'n PackNode)>> {
        match node {
            PackNode::Object(fields) => Ok(fields.iter().map(|(key, value)| (key.as_str(), value)).collect()),
            other => Err(mismatch("fields", JsonType::Object, other)),
        }
    }

    fn elements<'n>(&self, node: &'n PackNode) -> Result<Vec<&'n PackNode>> {
        match node {
            PackNode::Array(items) => Ok(items.iter().collect()),
            other => Err(mismatch("elements", JsonType::Array, other)),
        }
    }

    fn text(&self, node: &PackNode) -> String {
        match node {
            PackNode::Str(s) => s.clone(),
            PackNode::Integer(i) => i.to_string(),
            PackNode::BigInt(i) => i.to_string(),
            PackNode::Number(n) => n.to_string(),
            PackNode::Bool(b) => b.to_string(),
            PackNode::Null => "null".to_string(),
            PackNode::Undefined | PackNode::Bytes(_) | PackNode::Array(_) | PackNode::Object(_) => {
                String::new()
            }
        }
    }

    fn bool(&self, node: &PackNode) -> bool {
        match node {
            PackNode::Bool(b) => *b,
            PackNode::Integer(i) => *i != 0,
            PackNode::BigInt(i) => *i != 0,
            PackNode::Number(n) => truthy_number(n.as_str()),
            PackNode::Str(s) => truthy_text(s),
            _ => false,
        }
    }

    fn string(&self, value: Option<&str>) -> PackNode {
        value.map_or(PackNode::Null, |s| PackNode::Str(s.to_string()))
    }

    fn integer(&self, value: Option<i64>) -> PackNode {
        value.map_or(PackNode::Null, PackNode::Integer)
    }

    fn float(&self, value: Option<f64>) -> PackNode {
        value
            .and_then(Decimal::from_f64)
            .map_or(PackNode::Null, PackNode::number)
    }

    fn big_integer(&self, value: Option<i128>) -> PackNode {
        value.map_or(PackNode::Null, PackNode::big_int)
    }

    fn decimal(&self, value: Option<&Decimal>) -> PackNode {
        value.map_or(PackNode::Null, |d| PackNode::number(d.clone()))
    }

    fn boolean(&self, value: Option<bool>) -> PackNode {
        value.map_or(PackNode::Null, PackNode::Bool)
    }

    fn null(&self) -> PackNode {
        PackNode::Null
    }

    fn array(&self, elements: Vec<PackNode>) -> PackNode {
        PackNode::Array(elements)
    }

    fn object(&self, fields: Vec<(String, PackNode)>) -> PackNode {
        PackNode::object(fields)
    }

    fn parse(&self, text: &str) -> Result<PackNode> {
        Ok(PackDecoder::new(text.as_bytes(), self.config.max_depth).decode()?)
    }

    fn pretty(&self, node: &PackNode) -> String {
        PackEncoder::pretty(self.config.indent).encode(node)
    }

    fn compact(&self, node: &PackNode) -> String {
        PackEncoder::compact().encode(node)
    }

    fn marshalling_config(&self) -> MarshallingConfig {
        MarshallingConfig {
            unknown_fields: self.config.unknown_fields,
        }
    }
}
