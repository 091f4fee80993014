//! `json-format-core`: a backend-agnostic JSON node contract and the
//! auto-marshalling layer built on it.
//!
//! A JSON engine plugs in by implementing [`Json`]: classify, navigate and
//! build nodes, parse text, and print it pretty or compact. Typed values
//! describe their JSON form once through [`AutoJson`] and convert through any
//! engine with the [`AutoMarshalling`] methods, optionally restricted to a
//! [`View`] of their fields.
//!
//! # Example
//!
//! ```ignore
//! use json_format_core::{json_record, AutoMarshalling};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! json_record!(Person { name, age });
//!
//! // any backend, e.g. json_format_serde::SERDE_JSON
//! let text = json.to_compact_string(&Person { name: "Ada".into(), age: 36 });
//! assert_eq!(text, r#"{"name":"Ada","age":36}"#);
//! ```

pub mod auto;
pub mod decimal;
pub mod error;
pub mod json;
pub mod json_type;
pub mod marshalling;
pub mod number;
pub mod path;

pub use auto::{AutoJson, Decoder, Encoder, RecordReader, RecordWriter, Shape, View};
pub use decimal::Decimal;
pub use error::{FormatError, Result};
pub use json::{Json, MarshallingConfig, UnknownFields};
pub use json_type::JsonType;
pub use marshalling::AutoMarshalling;
pub use path::{NodePath, PathStep};
