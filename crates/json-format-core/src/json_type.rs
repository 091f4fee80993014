use std::fmt;

/// The closed set of JSON node kinds every backend classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    String,
    Boolean,
    Number,
    Array,
    Object,
    Null,
}

impl JsonType {
    pub const ALL: [JsonType; 6] = [
        Self::String,
        Self::Boolean,
        Self::Number,
        Self::Array,
        Self::Object,
        Self::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }

    pub fn is_scalar(self) -> bool {
        matches!(self, Self::String | Self::Boolean | Self::Number)
    }

}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
