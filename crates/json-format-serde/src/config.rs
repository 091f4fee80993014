use json_format_core::UnknownFields;

/// Settings fixed when a [`ConfigurableSerdeJson`](crate::ConfigurableSerdeJson)
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerdeJsonConfig {
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
    pub unknown_fields: UnknownFields,
}

impl SerdeJsonConfig {
    pub const DEFAULT: Self = Self {
        indent: 2,
        unknown_fields: UnknownFields::Ignore,
    };

    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub const fn with_unknown_fields(mut self, unknown_fields: UnknownFields) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }

    pub const fn deny_unknown_fields(self) -> Self {
        self.with_unknown_fields(UnknownFields::Deny)
    }
}

impl Default for SerdeJsonConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
