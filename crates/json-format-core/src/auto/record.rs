use super::view::{visible, View};
use super::{AutoJson, Decoder, Encoder};
use crate::error::{FormatError, Result};
use crate::json::{Json, UnknownFields};

/// Builds an object node field by field, in declaration order, dropping
/// fields the active view hides.
pub struct RecordWriter<'a, J: Json> {
    enc: Encoder<'a, J>,
    fields: Vec<(String, J::Node)>,
}

impl<'a, J: Json> RecordWriter<'a, J> {
    pub(super) fn new(enc: Encoder<'a, J>) -> Self {
        Self {
            enc,
            fields: Vec::new(),
        }
    }

    /// A field present in every view.
    pub fn field<T: AutoJson>(self, name: &str, value: &T) -> Self {
        self.field_in(name, value, &[])
    }

    /// A field present only in `views` (or in every view when empty).
    pub fn field_in<T: AutoJson>(mut self, name: &str, value: &T, views: &[View]) -> Self {
        if visible(self.enc.view(), views) {
            let node = value.encode(&self.enc);
            self.fields.push((name.to_string(), node));
        }
        self
    }

    pub fn finish(self) -> J::Node {
        self.enc.json().object(self.fields)
    }
}

/// Reads the fields of an object node into a record.
///
/// A field that is missing, or hidden by the active view, takes the value of
/// [`AutoJson::absent`] and fails with
/// [`FormatError::MissingRequiredField`] when there is none. Call
/// [`finish`](Self::finish) once every field is read to apply the backend's
/// unknown-field policy.
pub struct RecordReader<'d, J: Json> {
    dec: &'d Decoder<'d, J>,
    fields: Vec<(&'d str, &'d J::Node)>,
    used: Vec<bool>,
}

impl<'d, J: Json> RecordReader<'d, J> {
    pub(super) fn new(dec: &'d Decoder<'d, J>, fields: Vec<(&'d str, &'d J::Node)>) -> Self {
        let used = vec![false; fields.len()];
        Self { dec, fields, used }
    }

    pub fn field<T: AutoJson>(&mut self, name: &str) -> Result<T> {
        self.field_in(name, &[])
    }

    pub fn field_in<T: AutoJson>(&mut self, name: &str, views: &[View]) -> Result<T> {
        match self.optional_in(name, views)? {
            Some(value) => Ok(value),
            None => T::absent().ok_or_else(|| FormatError::MissingRequiredField {
                path: self.dec.path(),
                field: name.to_string(),
            }),
        }
    }

    /// `None` when the field is missing or hidden; a present field must decode.
    pub fn optional<T: AutoJson>(&mut self, name: &str) -> Result<Option<T>> {
        self.optional_in(name, &[])
    }

    pub fn optional_in<T: AutoJson>(&mut self, name: &str, views: &[View]) -> Result<Option<T>> {
        match self.take(name, views) {
            Some(node) => T::decode(&self.dec.field(name, node)).map(Some),
            None => Ok(None),
        }
    }

    pub fn field_or_default<T: AutoJson + Default>(&mut self, name: &str) -> Result<T> {
        Ok(self.optional(name)?.unwrap_or_default())
    }

    fn take(&mut self, name: &str, views: &[View]) -> Option<&'d J::Node> {
        let at = self.fields.iter().position(|(key, _)| *key == name)?;
        self.used[at] = true;
        if visible(self.dec.view(), views) {
            Some(self.fields[at].1)
        } else {
            None
        }
    }

    pub fn finish(self) -> Result<()> {
        if self.dec.json().marshalling_config().unknown_fields == UnknownFields::Ignore {
            return Ok(());
        }
        match self.fields.iter().zip(&self.used).find(|(_, used)| !**used) {
            Some(((name, _), _)) => Err(FormatError::UnknownField {
                path: self.dec.path(),
                field: name.to_string(),
            }),
            None => Ok(()),
        }
    }
}
