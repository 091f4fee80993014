use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::{AutoJson, Decoder, Encoder, Shape};
use crate::error::Result;
use crate::json::Json;
use crate::json_type::JsonType;

/// `None` is carried as a `null` node; a missing record field decodes as `None`.
impl<T: AutoJson> AutoJson for Option<T> {
    fn shape() -> Shape {
        Shape::optional(T::shape())
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        match self {
            Some(value) => value.encode(enc),
            None => enc.json().null(),
        }
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        if dec.type_of()? == JsonType::Null {
            Ok(None)
        } else {
            T::decode(dec).map(Some)
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

impl<T: AutoJson> AutoJson for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        (**self).encode(enc)
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        T::decode(dec).map(Box::new)
    }

    fn absent() -> Option<Self> {
        T::absent().map(Box::new)
    }
}

fn encode_seq<'v, T, J>(items: impl Iterator<Item = &'v T>, enc: &Encoder<'_, J>) -> J::Node
where
    T: AutoJson + 'v,
    J: Json,
{
    enc.json().array(items.map(|item| item.encode(enc)).collect())
}

fn decode_seq<S, T, J>(dec: &Decoder<'_, J>) -> Result<S>
where
    S: AutoJson + FromIterator<T>,
    T: AutoJson,
    J: Json,
{
    dec.elements::<S>()?
        .into_iter()
        .enumerate()
        .map(|(index, node)| T::decode(&dec.index(index, node)))
        .collect()
}

impl<T: AutoJson> AutoJson for Vec<T> {
    fn shape() -> Shape {
        Shape::array(T::shape())
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        encode_seq(self.iter(), enc)
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        decode_seq::<Self, T, J>(dec)
    }
}

impl<T: AutoJson> AutoJson for VecDeque<T> {
    fn shape() -> Shape {
        Shape::array(T::shape())
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        encode_seq(self.iter(), enc)
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        decode_seq::<Self, T, J>(dec)
    }
}

fn encode_map<'v, T, J>(
    entries: impl Iterator<Item = (&'v String, &'v T)>,
    enc: &Encoder<'_, J>,
) -> J::Node
where
    T: AutoJson + 'v,
    J: Json,
{
    let fields = entries
        .map(|(key, value)| (key.clone(), value.encode(enc)))
        .collect();
    enc.json().object(fields)
}

fn decode_map<M, T, J>(dec: &Decoder<'_, J>) -> Result<M>
where
    M: AutoJson + FromIterator<(String, T)>,
    T: AutoJson,
    J: Json,
{
    dec.fields::<M>()?
        .into_iter()
        .map(|(key, node)| T::decode(&dec.field(key, node)).map(|value| (key.to_string(), value)))
        .collect()
}

impl<T: AutoJson> AutoJson for BTreeMap<String, T> {
    fn shape() -> Shape {
        Shape::map(T::shape())
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        encode_map(self.iter(), enc)
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        decode_map::<Self, T, J>(dec)
    }
}

impl<T: AutoJson, S: BuildHasher + Default> AutoJson for HashMap<String, T, S> {
    fn shape() -> Shape {
        Shape::map(T::shape())
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        encode_map(self.iter(), enc)
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        decode_map::<Self, T, J>(dec)
    }
}

/// Keeps field order in both directions.
impl<T: AutoJson, S: BuildHasher + Default> AutoJson for IndexMap<String, T, S> {
    fn shape() -> Shape {
        Shape::map(T::shape())
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        encode_map(self.iter(), enc)
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        decode_map::<Self, T, J>(dec)
    }
}
