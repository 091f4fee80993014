//! Whole-value conversions on top of any [`Json`] backend.

use tracing::debug;

use crate::auto::{AutoJson, Decoder, Encoder, View};
use crate::error::Result;
use crate::json::Json;

/// Typed value ⇄ node ⇄ text conversions, available on every backend.
pub trait AutoMarshalling: Json + Sized {
    fn to_node<T: AutoJson>(&self, value: &T) -> Self::Node {
        value.encode(&Encoder::new(self, None))
    }

    /// Node holding only the record fields visible in `view`.
    fn to_node_view<T: AutoJson>(&self, value: &T, view: View) -> Self::Node {
        value.encode(&Encoder::new(self, Some(view)))
    }

    fn from_node<T: AutoJson>(&self, node: &Self::Node) -> Result<T> {
        T::decode(&Decoder::new(self, node, None)).inspect_err(|err| {
            debug!(shape = %T::shape(), error = %err, "node does not match target shape");
        })
    }

    /// Reads only the record fields visible in `view`; hidden fields are
    /// treated as missing.
    fn from_node_view<T: AutoJson>(&self, node: &Self::Node, view: View) -> Result<T> {
        T::decode(&Decoder::new(self, node, Some(view))).inspect_err(|err| {
            debug!(shape = %T::shape(), %view, error = %err, "node does not match target shape");
        })
    }

    fn from_str<T: AutoJson>(&self, text: &str) -> Result<T> {
        let node = self.parse(text).inspect_err(|err| {
            debug!(error = %err, "rejected JSON text");
        })?;
        self.from_node(&node)
    }

    fn from_str_view<T: AutoJson>(&self, text: &str, view: View) -> Result<T> {
        let node = self.parse(text).inspect_err(|err| {
            debug!(error = %err, "rejected JSON text");
        })?;
        self.from_node_view(&node, view)
    }

    fn to_compact_string<T: AutoJson>(&self, value: &T) -> String {
        self.compact(&self.to_node(value))
    }

    fn to_pretty_string<T: AutoJson>(&self, value: &T) -> String {
        self.pretty(&self.to_node(value))
    }

    fn to_compact_string_view<T: AutoJson>(&self, value: &T, view: View) -> String {
        self.compact(&self.to_node_view(value, view))
    }

    /// Re-reads `value` as a `B` through the node tree.
    fn convert<A: AutoJson, B: AutoJson>(&self, value: &A) -> Result<B> {
        self.from_node(&self.to_node(value))
    }
}

impl<J: Json> AutoMarshalling for J {}
