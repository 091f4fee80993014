use std::str;

use bytes::Bytes;
use json_format_core::{FormatError, Result};

use crate::content::{ContentNegotiation, ContentType};
use crate::lens::{BiDiLens, BiDiLensSpec, LensMeta};

/// An HTTP message body: an immutable byte payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    payload: Bytes,
}

impl Body {
    pub const EMPTY: Self = Self {
        payload: Bytes::new(),
    };

    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// The payload as UTF-8 text. JSON text must be UTF-8, so anything else
    /// is malformed.
    pub fn text(&self) -> Result<&str> {
        str::from_utf8(&self.payload)
            .map_err(|err| FormatError::MalformedJson(format!("body is not UTF-8: {err}")))
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

pub type BodyLensSpec<T> = BiDiLensSpec<Body, T>;
pub type BodyLens<T> = BiDiLens<Body, T>;

/// Base spec reading and writing a body as text of the given content type.
pub fn string(
    content_type: ContentType,
    description: Option<String>,
    negotiation: ContentNegotiation,
) -> BodyLensSpec<String> {
    let meta = LensMeta {
        content_type: Some(content_type),
        description,
        negotiation,
    };
    BiDiLensSpec::new(
        meta,
        |body: &Body| body.text().map(str::to_string),
        |text: &String| Body::from(text.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_lens_reads_and_writes_text() {
        let lens = string(ContentType::TEXT_PLAIN, None, ContentNegotiation::None).to_lens();
        let body = lens.inject(&"héllo".to_string());
        assert_eq!(body.payload().as_ref(), "héllo".as_bytes());
        assert_eq!(lens.extract(&body).as_deref(), Ok("héllo"));
    }

    #[test]
    fn non_utf8_body_is_malformed() {
        let body = Body::new(vec![0xff, 0xfe]);
        assert!(matches!(body.text(), Err(FormatError::MalformedJson(_))));
    }

    #[test]
    fn empty_body() {
        assert!(Body::EMPTY.is_empty());
        assert_eq!(Body::default(), Body::EMPTY);
        assert_eq!(Body::from("").text(), Ok(""));
    }
}
