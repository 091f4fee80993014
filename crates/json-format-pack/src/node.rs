//! [`PackNode`]: the owned value tree of the pack backend.

use indexmap::IndexMap;
use json_format_core::Decimal;

/// A JSON value, plus two non-JSON values that only exist when built in code.
/// The parser never produces [`Undefined`](Self::Undefined) or
/// [`Bytes`](Self::Bytes).
///
/// Numbers are normalized on construction: integral text that fits `i64`
/// becomes [`Integer`](Self::Integer), wider integral text becomes
/// [`BigInt`](Self::BigInt), and everything else keeps its exact text as a
/// [`Number`](Self::Number). A node built from a value and the node parsed
/// from its printed text are therefore equal.
#[derive(Debug, Clone, PartialEq)]
pub enum PackNode {
    Null,
    /// Printed as `"data:application/cbor,base64;9w=="`.
    Undefined,
    Bool(bool),
    Integer(i64),
    BigInt(i128),
    /// A non-integral or out-of-range number, kept as written.
    Number(Decimal),
    Str(String),
    /// Printed as `"data:application/octet-stream;base64,..."`.
    Bytes(Vec<u8>),
    Array(Vec<PackNode>),
    /// Ordered fields with unique names.
    Object(Vec<(String, PackNode)>),
}

impl PackNode {
    /// Number node for text in JSON number syntax.
    pub fn number(decimal: Decimal) -> Self {
        let text = decimal.as_str();
        if text.contains(['.', 'e', 'E']) {
            return PackNode::Number(decimal);
        }
        if let Ok(int) = text.parse::<i64>() {
            PackNode::Integer(int)
        } else if let Ok(int) = text.parse::<i128>() {
            PackNode::BigInt(int)
        } else {
            PackNode::Number(decimal)
        }
    }

    pub fn big_int(int: i128) -> Self {
        match i64::try_from(int) {
            Ok(int) => PackNode::Integer(int),
            Err(_) => PackNode::BigInt(int),
        }
    }

    /// Object node with duplicate names collapsed: the last value wins and
    /// keeps the position of the first occurrence.
    pub fn object(fields: Vec<(String, PackNode)>) -> Self {
        let mut out: IndexMap<String, PackNode> = IndexMap::with_capacity(fields.len());
        // `insert` on an existing key replaces the value in place.
        out.extend(fields);
        PackNode::Object(out.into_iter().collect())
    }
}
