//! Arbitrary-precision decimal numbers.
//!
//! A [`Decimal`] keeps the exact text of a JSON number, so values wider than
//! any native float survive a trip through a node tree unchanged.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// An exact decimal number in JSON number syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal(String);

impl Decimal {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Shortest round-trip rendering of a finite float; `None` for NaN and
    /// the infinities, which JSON cannot represent.
    pub fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then(|| Self(format!("{value:?}")))
    }
}

impl FromStr for Decimal {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_json_number(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(FormatError::MalformedJson(format!("invalid number literal {s:?}")))
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! decimal_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

decimal_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Checks `text` against the RFC 8259 `number` production.
pub fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut x = 0;

    if x < len && bytes[x] == b'-' {
        x += 1;
    }
    match bytes.get(x) {
        Some(b'0') => x += 1,
        Some(b'1'..=b'9') => {
            while x < len && bytes[x].is_ascii_digit() {
                x += 1;
            }
        }
        _ => return false,
    }
    if x < len && bytes[x] == b'.' {
        x += 1;
        let start = x;
        while x < len && bytes[x].is_ascii_digit() {
            x += 1;
        }
        if x == start {
            return false;
        }
    }
    if x < len && (bytes[x] == b'e' || bytes[x] == b'E') {
        x += 1;
        if x < len && (bytes[x] == b'+' || bytes[x] == b'-') {
            x += 1;
        }
        let start = x;
        while x < len && bytes[x].is_ascii_digit() {
            x += 1;
        }
        if x == start {
            return false;
        }
    }
    x == len
}
