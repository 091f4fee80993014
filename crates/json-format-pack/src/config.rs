use json_format_core::UnknownFields;

/// Settings of a [`PackJson`](crate::PackJson) backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
    pub unknown_fields: UnknownFields,
    /// Deepest array/object nesting the parser accepts.
    pub max_depth: usize,
}

impl PackConfig {
    pub const DEFAULT: Self = Self {
        indent: 2,
        unknown_fields: UnknownFields::Ignore,
        max_depth: 128,
    };

    pub const fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub const fn deny_unknown_fields(self) -> Self {
        Self {
            unknown_fields: UnknownFields::Deny,
            ..self
        }
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
