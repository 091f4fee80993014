use bytes::Bytes;
use json_format_core::{FormatError, Result};

use crate::lens::{BiDiLens, BiDiLensSpec, LensMeta};

/// A single WebSocket message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WsMessage {
    Text(String),
    Binary(Bytes),
}

impl WsMessage {
    pub fn text(text: impl Into<String>) -> Self {
        WsMessage::Text(text.into())
    }

    /// The message payload as text; a binary frame must hold UTF-8.
    pub fn body_string(&self) -> Result<&str> {
        match self {
            WsMessage::Text(text) => Ok(text),
            WsMessage::Binary(bytes) => std::str::from_utf8(bytes)
                .map_err(|err| FormatError::MalformedJson(format!("message is not UTF-8: {err}"))),
        }
    }
}

pub type WsMessageLensSpec<T> = BiDiLensSpec<WsMessage, T>;
pub type WsMessageLens<T> = BiDiLens<WsMessage, T>;

/// Base spec reading any frame as text and writing text frames.
pub fn string() -> WsMessageLensSpec<String> {
    BiDiLensSpec::new(
        LensMeta::default(),
        |message: &WsMessage| message.body_string().map(str::to_string),
        |text: &String| WsMessage::Text(text.clone()),
    )
}
