use thiserror::Error;

use crate::auto::Shape;
use crate::json_type::JsonType;
use crate::path::NodePath;

/// Everything that can go wrong while parsing, inspecting or converting JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input text is not valid JSON. Carries the backend's diagnostic.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// The backend produced a node outside the six JSON kinds.
    #[error("unsupported node kind: {0}")]
    UnsupportedNodeKind(String),

    /// A structural operation was invoked on a node of the wrong kind.
    #[error("{operation} requires a{article} {expected} node, found {actual}", article = article(.expected))]
    TypeMismatch {
        operation: &'static str,
        expected: JsonType,
        actual: JsonType,
    },

    #[error("cannot convert {actual} at \"{path}\" into {expected}")]
    Conversion {
        path: NodePath,
        expected: Shape,
        actual: JsonType,
    },

    #[error("number {value} at \"{path}\" does not fit {target} without losing precision")]
    PrecisionLoss {
        path: NodePath,
        value: String,
        target: &'static str,
    },

    #[error("missing required field \"{field}\" at \"{path}\"")]
    MissingRequiredField { path: NodePath, field: String },

    #[error("unknown field \"{field}\" at \"{path}\"")]
    UnknownField { path: NodePath, field: String },
}

fn article(tag: &JsonType) -> &'static str {
    match tag {
        JsonType::Array | JsonType::Object => "n",
        _ => "",
    }
}

impl FormatError {
    /// Path of the offending node, for the conversion-time variants.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            Self::Conversion { path, .. }
            | Self::PrecisionLoss { path, .. }
            | Self::MissingRequiredField { path, .. }
            | Self::UnknownField { path, .. } => Some(path),
            Self::MalformedJson(_) | Self::UnsupportedNodeKind(_) | Self::TypeMismatch { .. } => {
                None
            }
        }
    }
}

pub type Result<T, E = FormatError> = std::result::Result<T, E>;
