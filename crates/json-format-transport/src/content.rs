use std::fmt;

/// A media type with an optional charset directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentType {
    pub value: &'static str,
    pub charset: Option<&'static str>,
}

impl ContentType {
    pub const APPLICATION_JSON: Self = Self {
        value: "application/json",
        charset: Some("utf-8"),
    };

    pub const TEXT_PLAIN: Self = Self {
        value: "text/plain",
        charset: Some("utf-8"),
    };

    pub const fn without_directives(self) -> Self {
        Self {
            value: self.value,
            charset: None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.charset {
            Some(charset) => write!(f, "{}; charset={charset}", self.value),
            None => f.write_str(self.value),
        }
    }
}

/// How strictly a transport should check an incoming content type against
/// the one a lens declares. Carried through untouched; the transport acts on
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentNegotiation {
    /// No check.
    #[default]
    None,
    /// Media type and directives must match.
    Strict,
    /// Media type must match; directives are ignored.
    StrictNoDirective,
    /// Media type must match when one is present.
    NonStrict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_value() {
        assert_eq!(
            ContentType::APPLICATION_JSON.to_string(),
            "application/json; charset=utf-8"
        );
        assert_eq!(
            ContentType::APPLICATION_JSON.without_directives().to_string(),
            "application/json"
        );
    }

    #[test]
    fn negotiation_defaults_to_none() {
        assert_eq!(ContentNegotiation::default(), ContentNegotiation::None);
    }
}
