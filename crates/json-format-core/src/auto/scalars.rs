use super::{AutoJson, Decoder, Encoder, Shape};
use crate::decimal::Decimal;
use crate::error::Result;
use crate::json::Json;
use crate::json_type::JsonType;
use crate::number;

impl AutoJson for String {
    fn shape() -> Shape {
        Shape::String
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        enc.json().string(Some(self))
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        dec.expect::<Self>(JsonType::String)?;
        Ok(dec.text())
    }
}

impl AutoJson for bool {
    fn shape() -> Shape {
        Shape::Boolean
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        enc.json().boolean(Some(*self))
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        dec.expect::<Self>(JsonType::Boolean)?;
        Ok(dec.bool())
    }
}

impl AutoJson for () {
    fn shape() -> Shape {
        Shape::Null
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        enc.json().null()
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        dec.expect::<Self>(JsonType::Null)
    }
}

/// Encodes an integer through the narrowest constructor that holds it.
fn encode_i128<J: Json>(value: i128, enc: &Encoder<'_, J>) -> J::Node {
    match i64::try_from(value) {
        Ok(value) => enc.json().integer(Some(value)),
        Err(_) => enc.json().big_integer(Some(value)),
    }
}

macro_rules! auto_json_int {
    ($($t:ty),*) => {
        $(
            impl AutoJson for $t {
                fn shape() -> Shape {
                    Shape::Integer(stringify!($t))
                }

                fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
                    encode_i128(*self as i128, enc)
                }

                fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
                    dec.expect::<Self>(JsonType::Number)?;
                    number::to_i128(&dec.text())
                        .ok()
                        .and_then(|value| <$t>::try_from(value).ok())
                        .ok_or_else(|| dec.precision_loss(stringify!($t)))
                }
            }
        )*
    };
}

auto_json_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl AutoJson for u128 {
    fn shape() -> Shape {
        Shape::Integer("u128")
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        match i128::try_from(*self) {
            Ok(value) => encode_i128(value, enc),
            Err(_) => enc.json().decimal(Some(&Decimal::from(*self))),
        }
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        dec.expect::<Self>(JsonType::Number)?;
        number::to_u128(&dec.text()).map_err(|_| dec.precision_loss("u128"))
    }
}

impl AutoJson for f64 {
    fn shape() -> Shape {
        Shape::Float("f64")
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        enc.json().float(Some(*self))
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        dec.expect::<Self>(JsonType::Number)?;
        dec.text()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| dec.precision_loss("f64"))
    }
}

impl AutoJson for f32 {
    fn shape() -> Shape {
        Shape::Float("f32")
    }

    // Rendered from the f32 itself so 0.1f32 stays "0.1" rather than its
    // widened f64 expansion.
    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        let decimal = self
            .is_finite()
            .then(|| format!("{self:?}").parse::<Decimal>().ok())
            .flatten();
        match decimal {
            Some(decimal) => enc.json().decimal(Some(&decimal)),
            None => enc.json().float(None),
        }
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        dec.expect::<Self>(JsonType::Number)?;
        dec.text()
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| dec.precision_loss("f32"))
    }
}

impl AutoJson for Decimal {
    fn shape() -> Shape {
        Shape::Decimal
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        enc.json().decimal(Some(self))
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> Result<Self> {
        dec.expect::<Self>(JsonType::Number)?;
        dec.text().parse().map_err(|_| dec.mismatch::<Self>())
    }
}
