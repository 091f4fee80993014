//! The node contract every JSON backend implements.
//!
//! Everything above this trait (the auto-marshalling layer, the transport
//! adapters) talks to JSON exclusively through it, so swapping the engine
//! underneath never touches callers.

use std::fmt;

use crate::decimal::Decimal;
use crate::error::Result;
use crate::json_type::JsonType;

/// What to do with object fields a record does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    #[default]
    Ignore,
    Deny,
}

/// Settings a backend hands to the auto-marshalling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarshallingConfig {
    pub unknown_fields: UnknownFields,
}

/// A JSON engine: parser, printer and a tree of nodes it can classify,
/// navigate and build.
///
/// Implementations must be usable from many threads at once once
/// constructed; all operations take `&self`.
///
/// Structural accessors (`fields`, `elements`) fail with
/// [`TypeMismatch`](crate::FormatError::TypeMismatch) when called on a node
/// of the wrong kind.
/// Object construction resolves duplicate names last-write-wins: the surviving
/// entry keeps the position of the first occurrence and the last value.
pub trait Json {
    type Node: Clone + PartialEq + fmt::Debug;

    /// Classifies `node` into one of the six JSON kinds.
    fn type_of(&self, node: &Self::Node) -> Result<JsonType>;

    /// Fields of an object node, in insertion order.
    fn fields<'n>(&self, node: &'n Self::Node) -> Result<Vec<(&'n str, &'n Self::Node)>>;

    /// Elements of an array node, in order.
    fn elements<'n>(&self, node: &'n Self::Node) -> Result<Vec<&'n Self::Node>>;

    /// Text of a node: strings as-is, numbers in canonical decimal form,
    /// `true`/`false`, `null`, and the empty string for containers.
    fn text(&self, node: &Self::Node) -> String;

    /// Truthiness of a node: booleans as-is, non-zero numbers, strings equal
    /// to `"true"` ignoring case and surrounding whitespace; false otherwise.
    fn bool(&self, node: &Self::Node) -> bool;

    fn string(&self, value: Option<&str>) -> Self::Node;
    fn integer(&self, value: Option<i64>) -> Self::Node;
    /// Non-finite values have no JSON form and map to `null`.
    fn float(&self, value: Option<f64>) -> Self::Node;
    fn big_integer(&self, value: Option<i128>) -> Self::Node;
    fn decimal(&self, value: Option<&Decimal>) -> Self::Node;
    fn boolean(&self, value: Option<bool>) -> Self::Node;
    fn null(&self) -> Self::Node;

    fn array(&self, elements: Vec<Self::Node>) -> Self::Node;
    fn object(&self, fields: Vec<(String, Self::Node)>) -> Self::Node;

    /// Parses JSON text, failing with
    /// [`MalformedJson`](crate::FormatError::MalformedJson).
    fn parse(&self, text: &str) -> Result<Self::Node>;

    /// Multi-line rendering with the backend's configured indentation.
    fn pretty(&self, node: &Self::Node) -> String;

    /// Single-line rendering with no insignificant whitespace.
    fn compact(&self, node: &Self::Node) -> String;

    fn marshalling_config(&self) -> MarshallingConfig {
        MarshallingConfig::default()
    }

    /// Text of the field `name` when `node` is an object holding a string,
    /// number or boolean under that name.
    fn text_value_of(&self, node: &Self::Node, name: &str) -> Option<String> {
        let fields = self.fields(node).ok()?;
        let (_, value) = fields.into_iter().find(|(key, _)| *key == name)?;
        match self.type_of(value) {
            Ok(tag) if tag.is_scalar() => Some(self.text(value)),
            _ => None,
        }
    }

    fn prettify(&self, text: &str) -> Result<String> {
        Ok(self.pretty(&self.parse(text)?))
    }

    fn compactify(&self, text: &str) -> Result<String> {
        Ok(self.compact(&self.parse(text)?))
    }
}

/// Shared `bool` coercion for string payloads.
pub fn truthy_text(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

/// Shared `bool` coercion for number payloads given as JSON number text.
pub fn truthy_number(text: &str) -> bool {
    let mantissa = text
        .split(|c: char| c == 'e' || c == 'E')
        .next()
        .unwrap_or(text);
    mantissa.bytes().any(|b| (b'1'..=b'9').contains(&b))
}
