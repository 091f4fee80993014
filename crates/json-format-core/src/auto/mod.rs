//! Typed values to and from node trees.
//!
//! Each type describes its own JSON form by implementing [`AutoJson`];
//! container impls compose the impls of their elements, and records are
//! assembled field by field with [`RecordWriter`] / [`RecordReader`] (or the
//! [`json_record!`](crate::json_record) macro, which writes both for you).
//!
//! Conversion is generic over the backend: the same impl drives every
//! [`Json`] engine.

mod collections;
mod macros;
mod record;
mod scalars;
mod shape;
mod view;

pub use record::{RecordReader, RecordWriter};
pub use shape::Shape;
pub use view::{visible, View};

use crate::error::{FormatError, Result};
use crate::json::Json;
use crate::json_type::JsonType;
use crate::path::{NodePath, PathStep};

/// A type with a JSON form.
pub trait AutoJson: Sized {
    fn shape() -> Shape;

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node;

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self>;

    /// Value a record field takes when it is missing from the input (or
    /// hidden by the active view). `None` makes the field required.
    fn absent() -> Option<Self> {
        None
    }
}

/// Encoding context: the backend and the active view.
pub struct Encoder<'a, J: Json> {
    json: &'a J,
    view: Option<View>,
}

impl<J: Json> Clone for Encoder<'_, J> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<J: Json> Copy for Encoder<'_, J> {}

impl<'a, J: Json> Encoder<'a, J> {
    pub fn new(json: &'a J, view: Option<View>) -> Self {
        Self { json, view }
    }

    pub fn json(&self) -> &'a J {
        self.json
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn record(&self) -> RecordWriter<'a, J> {
        RecordWriter::new(*self)
    }
}

#[derive(Debug, Clone, Copy)]
enum Step<'a> {
    Root,
    Field(&'a str),
    Index(usize),
}

/// Decoding context: the node being read, its location in the tree, the
/// backend and the active view.
pub struct Decoder<'a, J: Json> {
    json: &'a J,
    node: &'a J::Node,
    view: Option<View>,
    parent: Option<&'a Decoder<'a, J>>,
    step: Step<'a>,
}

impl<'a, J: Json> Decoder<'a, J> {
    pub fn new(json: &'a J, node: &'a J::Node, view: Option<View>) -> Self {
        Self {
            json,
            node,
            view,
            parent: None,
            step: Step::Root,
        }
    }

    pub fn json(&self) -> &'a J {
        self.json
    }

    pub fn node(&self) -> &'a J::Node {
        self.node
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn type_of(&self) -> Result<JsonType> {
        self.json.type_of(self.node)
    }

    pub fn text(&self) -> String {
        self.json.text(self.node)
    }

    pub fn bool(&self) -> bool {
        self.json.bool(self.node)
    }

    pub fn path(&self) -> NodePath {
        let mut steps = Vec::new();
        let mut cursor = Some(self);
        while let Some(dec) = cursor {
            match dec.step {
                Step::Root => {}
                Step::Field(name) => steps.push(PathStep::Field(name.to_string())),
                Step::Index(index) => steps.push(PathStep::Index(index)),
            }
            cursor = dec.parent;
        }
        steps.reverse();
        NodePath::from(steps)
    }

    /// Child context for the field `name` of this object node.
    pub fn field<'b>(&'b self, name: &'b str, node: &'b J::Node) -> Decoder<'b, J> {
        self.child(Step::Field(name), node)
    }

    /// Child context for element `index` of this array node.
    pub fn index<'b>(&'b self, index: usize, node: &'b J::Node) -> Decoder<'b, J> {
        self.child(Step::Index(index), node)
    }

    fn child<'b>(&'b self, step: Step<'b>, node: &'b J::Node) -> Decoder<'b, J> {
        Decoder {
            json: self.json,
            node,
            view: self.view,
            parent: Some(self),
            step,
        }
    }

    /// Fails with a conversion error naming `T`'s shape unless the node has
    /// tag `expected`.
    pub fn expect<T: AutoJson>(&self, expected: JsonType) -> Result<()> {
        if self.type_of()? == expected {
            Ok(())
        } else {
            Err(self.mismatch::<T>())
        }
    }

    /// Conversion error for a node that cannot become a `T`.
    pub fn mismatch<T: AutoJson>(&self) -> FormatError {
        match self.type_of() {
            Ok(actual) => FormatError::Conversion {
                path: self.path(),
                expected: T::shape(),
                actual,
            },
            Err(err) => err,
        }
    }

    pub fn precision_loss(&self, target: &'static str) -> FormatError {
        FormatError::PrecisionLoss {
            path: self.path(),
            value: self.text(),
            target,
        }
    }

    pub fn elements<T: AutoJson>(&self) -> Result<Vec<&'a J::Node>> {
        self.expect::<T>(JsonType::Array)?;
        self.json.elements(self.node)
    }

    pub fn fields<T: AutoJson>(&self) -> Result<Vec<(&'a str, &'a J::Node)>> {
        self.expect::<T>(JsonType::Object)?;
        self.json.fields(self.node)
    }

    /// Starts reading this object node as the record `T`.
    pub fn record<T: AutoJson>(&self) -> Result<RecordReader<'_, J>> {
        let fields = self.fields::<T>()?;
        Ok(RecordReader::new(self, fields))
    }
}
