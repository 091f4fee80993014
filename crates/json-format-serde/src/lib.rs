//! `json-format-serde`: the reference [`Json`] backend, built on
//! `serde_json::Value`.
//!
//! Objects keep insertion order (`preserve_order`) and numbers keep every digit
//! (`arbitrary_precision`), so big integers and decimals survive a round trip
//! through the tree and through text unchanged.
//!
//! ```
//! use json_format_core::{json_record, AutoMarshalling};
//! use json_format_serde::SERDE_JSON;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! json_record!(Person { name, age });
//!
//! let ada = Person { name: "Ada".to_string(), age: 36 };
//! let text = SERDE_JSON.to_compact_string(&ada);
//! assert_eq!(text, r#"{"name":"Ada","age":36}"#);
//! assert_eq!(SERDE_JSON.from_str::<Person>(&text).unwrap(), ada);
//! ```

pub mod config;
mod printer;

pub use config::SerdeJsonConfig;

use json_format_core::json::{truthy_number, truthy_text};
use json_format_core::{Decimal, FormatError, Json, JsonType, MarshallingConfig, Result};
use serde_json::{Number, Value};

/// A [`Json`] backend over `serde_json::Value` with fixed settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigurableSerdeJson {
    config: SerdeJsonConfig,
}

/// The backend with default settings.
pub const SERDE_JSON: ConfigurableSerdeJson = ConfigurableSerdeJson::new(SerdeJsonConfig::DEFAULT);

impl ConfigurableSerdeJson {
    pub const fn new(config: SerdeJsonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerdeJsonConfig {
        &self.config
    }
}

fn kind(node: &Value) -> JsonType {
    match node {
        Value::Null => JsonType::Null,
        Value::Bool(_) => JsonType::Boolean,
        Value::Number(_) => JsonType::Number,
        Value::String(_) => JsonType::String,
        Value::Array(_) => JsonType::Array,
        Value::Object(_) => JsonType::Object,
    }
}

fn mismatch(operation: &'static str, expected: JsonType, node: &Value) -> FormatError {
    FormatError::TypeMismatch {
        operation,
        expected,
        actual: kind(node),
    }
}

/// Number node for text already known to be valid JSON number syntax.
fn number_value(text: &str) -> Value {
    serde_json::from_str::<Number>(text)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

impl Json for ConfigurableSerdeJson {
    type Node = Value;

    fn type_of(&self, node: &Value) -> Result<JsonType> {
        Ok(kind(node))
    }

    fn fields<'n>(&self, node: &'n Value) -> Result<Vec<(&'n str, &'n Value)>> {
        match node {
            Value::Object(map) => Ok(map.iter().map(|(key, value)| (key.as_str(), value)).collect()),
            other => Err(mismatch("fields", JsonType::Object, other)),
        }
    }

    fn elements<'n>(&self, node: &'n Value) -> Result<Vec<&'n Value>> {
        match node {
            Value::Array(items) => Ok(items.iter().collect()),
            other => Err(mismatch("elements", JsonType::Array, other)),
        }
    }

    fn text(&self, node: &Value) -> String {
        match node {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Array(_) | Value::Object(_) => String::new(),
        }
    }

    fn bool(&self, node: &Value) -> bool {
        match node {
            Value::Bool(b) => *b,
            Value::Number(n) => truthy_number(&n.to_string()),
            Value::String(s) => truthy_text(s),
            Value::Null | Value::Array(_) | Value::Object(_) => false,
        }
    }

    fn string(&self, value: Option<&str>) -> Value {
        value.map_or(Value::Null, |s| Value::String(s.to_string()))
    }

    fn integer(&self, value: Option<i64>) -> Value {
        value.map_or(Value::Null, |i| Value::Number(i.into()))
    }

    fn float(&self, value: Option<f64>) -> Value {
        value
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }

    fn big_integer(&self, value: Option<i128>) -> Value {
        value.map_or(Value::Null, |i| number_value(&i.to_string()))
    }

    fn decimal(&self, value: Option<&Decimal>) -> Value {
        value.map_or(Value::Null, |d| number_value(d.as_str()))
    }

    fn boolean(&self, value: Option<bool>) -> Value {
        value.map_or(Value::Null, Value::Bool)
    }

    fn null(&self) -> Value {
        Value::Null
    }

    fn array(&self, elements: Vec<Value>) -> Value {
        Value::Array(elements)
    }

    fn object(&self, fields: Vec<(String, Value)>) -> Value {
        Value::Object(fields.into_iter().collect())
    }

    fn parse(&self, text: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(|err| FormatError::MalformedJson(err.to_string()))
    }

    fn pretty(&self, node: &Value) -> String {
        printer::pretty(node, self.config.indent)
    }

    fn compact(&self, node: &Value) -> String {
        printer::compact(node)
    }

    fn marshalling_config(&self) -> MarshallingConfig {
        MarshallingConfig {
            unknown_fields: self.config.unknown_fields,
        }
    }
}
