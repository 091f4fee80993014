use std::fmt;

/// Description of the JSON form a typed value takes.
///
/// Shapes drive nothing at runtime; they name the expected form in
/// conversion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Null,
    Boolean,
    String,
    /// Integer of the named native width, e.g. `"i32"`.
    Integer(&'static str),
    /// Float of the named native width.
    Float(&'static str),
    Decimal,
    Array(Box<Shape>),
    /// Object with arbitrary keys and uniform values.
    Map(Box<Shape>),
    Optional(Box<Shape>),
    Record(&'static str),
    /// Unit-variant enum carried as a string.
    Enum(&'static str),
}

impl Shape {
    pub fn array(element: Shape) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn map(value: Shape) -> Self {
        Self::Map(Box::new(value))
    }

    pub fn optional(inner: Shape) -> Self {
        Self::Optional(Box::new(inner))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean => f.write_str("boolean"),
            Self::String => f.write_str("string"),
            Self::Integer(width) => write!(f, "integer ({width})"),
            Self::Float(width) => write!(f, "float ({width})"),
            Self::Decimal => f.write_str("decimal"),
            Self::Array(element) => write!(f, "array of {element}"),
            Self::Map(value) => write!(f, "map of {value}"),
            Self::Optional(inner) => write!(f, "optional {inner}"),
            Self::Record(name) => write!(f, "record {name}"),
            Self::Enum(name) => write!(f, "enum {name}"),
        }
    }
}
