//! `json-format-transport`: typed JSON codecs for HTTP bodies and WebSocket
//! messages.
//!
//! The transport types here are deliberately thin: a [`Body`] is a byte
//! payload and a [`WsMessage`] a single frame. What matters is the lens
//! plumbing that maps them to typed values through any JSON backend, via
//! [`AutoTransport`].

pub mod auto;
pub mod body;
pub mod content;
pub mod lens;
pub mod ws;

pub use auto::AutoTransport;
pub use body::{Body, BodyLens, BodyLensSpec};
pub use content::{ContentNegotiation, ContentType};
pub use lens::{BiDiLens, BiDiLensSpec, LensMeta};
pub use ws::{WsMessage, WsMessageLens, WsMessageLensSpec};
