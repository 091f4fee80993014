//! Body and message codecs for any [`AutoMarshalling`] backend.

use json_format_core::{AutoJson, AutoMarshalling, View};
use tracing::trace;

use crate::body::{self, BodyLensSpec};
use crate::content::{ContentNegotiation, ContentType};
use crate::ws::{self, WsMessageLensSpec};

/// Lens specs that carry typed values as JSON through bodies and WebSocket
/// messages. Implemented for every backend that can be shared across
/// threads.
///
/// ```
/// use json_format_core::json_record;
/// use json_format_serde::SERDE_JSON;
/// use json_format_transport::{AutoTransport, Body};
///
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// json_record!(Person { name, age });
///
/// let lens = SERDE_JSON.body_codec::<Person>().to_lens();
/// let body = lens.inject(&Person { name: "Ada".into(), age: 36 });
/// assert_eq!(body.text().unwrap(), r#"{"name":"Ada","age":36}"#);
/// assert_eq!(lens.extract(&body).unwrap().age, 36);
/// ```
pub trait AutoTransport: AutoMarshalling + Clone + Send + Sync + 'static {
    /// Body holding a JSON node, parsed and printed compact.
    fn body_json(
        &self,
        description: Option<String>,
        negotiation: ContentNegotiation,
    ) -> BodyLensSpec<Self::Node> {
        let read = self.clone();
        let write = self.clone();
        body::string(ContentType::APPLICATION_JSON, description, negotiation)
            .map(move |text| read.parse(&text), move |node| write.compact(node))
    }

    fn body_codec<T: AutoJson + 'static>(&self) -> BodyLensSpec<T> {
        self.body_codec_with(None, ContentNegotiation::None)
    }

    fn body_codec_with<T: AutoJson + 'static>(
        &self,
        description: Option<String>,
        negotiation: ContentNegotiation,
    ) -> BodyLensSpec<T> {
        trace!(shape = %T::shape(), "building body codec");
        let read = self.clone();
        let write = self.clone();
        self.body_json(description, negotiation)
            .map(move |node| read.from_node(&node), move |value| write.to_node(value))
    }

    /// Body codec reading and writing only the fields visible in `view`.
    fn body_codec_view<T: AutoJson + 'static>(&self, view: View) -> BodyLensSpec<T> {
        self.body_codec_view_with(view, None, ContentNegotiation::None)
    }

    fn body_codec_view_with<T: AutoJson + 'static>(
        &self,
        view: View,
        description: Option<String>,
        negotiation: ContentNegotiation,
    ) -> BodyLensSpec<T> {
        trace!(shape = %T::shape(), %view, "building body codec");
        let read = self.clone();
        let write = self.clone();
        body::string(ContentType::APPLICATION_JSON, description, negotiation).map(
            move |text| read.from_str_view(&text, view),
            move |value| write.to_compact_string_view(value, view),
        )
    }

    /// Message holding a JSON node, parsed and printed compact.
    fn message_json(&self) -> WsMessageLensSpec<Self::Node> {
        let read = self.clone();
        let write = self.clone();
        ws::string().map(move |text| read.parse(&text), move |node| write.compact(node))
    }

    fn message_codec<T: AutoJson + 'static>(&self) -> WsMessageLensSpec<T> {
        trace!(shape = %T::shape(), "building message codec");
        let read = self.clone();
        let write = self.clone();
        self.message_json()
            .map(move |node| read.from_node(&node), move |value| write.to_node(value))
    }

    fn message_codec_view<T: AutoJson + 'static>(&self, view: View) -> WsMessageLensSpec<T> {
        trace!(shape = %T::shape(), %view, "building message codec");
        let read = self.clone();
        let write = self.clone();
        ws::string().map(
            move |text| read.from_str_view(&text, view),
            move |value| write.to_compact_string_view(value, view),
        )
    }
}

impl<J: AutoMarshalling + Clone + Send + Sync + 'static> AutoTransport for J {}
