//! `PackDecoder`: JSON text to [`PackNode`].
//!
//! Only the six JSON kinds come out of the parser. Every JSON string is a
//! [`PackNode::Str`], whatever its contents, so text printed from a binary or
//! undefined node reads back as the string it was printed as.

use json_format_core::decimal::is_json_number;
use json_format_core::Decimal;

use crate::error::DecodeError;
use crate::node::PackNode;

pub struct PackDecoder<'a> {
    data: &'a [u8],
    x: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> PackDecoder<'a> {
    pub fn new(data: &'a [u8], max_depth: usize) -> Self {
        Self {
            data,
            x: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Reads exactly one value; anything but whitespace after it is an error.
    pub fn decode(mut self) -> Result<PackNode, DecodeError> {
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(DecodeError::TrailingData(self.x));
        }
        Ok(value)
    }

    fn peek(&self) -> Result<u8, DecodeError> {
        self.data.get(self.x).copied().ok_or(DecodeError::UnexpectedEnd)
    }

    fn read_any(&mut self) -> Result<PackNode, DecodeError> {
        self.skip_whitespace();
        match self.peek()? {
            b'"' => self.read_str().map(PackNode::Str),
            b'[' => self.nested(Self::read_arr),
            b'{' => self.nested(Self::read_obj),
            b'f' => self.read_literal(b"false", PackNode::Bool(false)),
            b'n' => self.read_literal(b"null", PackNode::Null),
            b't' => self.read_literal(b"true", PackNode::Bool(true)),
            b'-' | b'0'..=b'9' => self.read_num(),
            _ => Err(DecodeError::Invalid(self.x)),
        }
    }

    fn nested(
        &mut self,
        read: fn(&mut Self) -> Result<PackNode, DecodeError>,
    ) -> Result<PackNode, DecodeError> {
        if self.depth >= self.max_depth {
            return Err(DecodeError::TooDeep(self.max_depth));
        }
        self.depth += 1;
        let value = read(self);
        self.depth -= 1;
        value
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.data.get(self.x) {
            self.x += 1;
        }
    }

    fn read_literal(&mut self, word: &[u8], value: PackNode) -> Result<PackNode, DecodeError> {
        if !self.data[self.x..].starts_with(word) {
            return Err(DecodeError::Invalid(self.x));
        }
        self.x += word.len();
        Ok(value)
    }

    fn read_num(&mut self) -> Result<PackNode, DecodeError> {
        let start = self.x;
        let data = self.data;
        let mut x = start;
        while x < data.len() && matches!(data[x], b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9') {
            x += 1;
        }
        self.x = x;

        // The scanned bytes are ASCII, so this cannot fail.
        let text = std::str::from_utf8(&data[start..x]).map_err(|_| DecodeError::InvalidNumber(start))?;
        if !is_json_number(text) {
            return Err(DecodeError::InvalidNumber(start));
        }
        let decimal: Decimal = text.parse().map_err(|_| DecodeError::InvalidNumber(start))?;
        Ok(PackNode::number(decimal))
    }

    fn read_str(&mut self) -> Result<String, DecodeError> {
        if self.peek()? != b'"' {
            return Err(DecodeError::Invalid(self.x));
        }
        let x0 = self.x + 1;
        let x1 = find_ending_quote(self.data, x0)?;
        let s = decode_json_string(&self.data[x0..x1]).map_err(|_| DecodeError::InvalidString(self.x))?;
        self.x = x1 + 1;
        Ok(s)
    }

    fn read_arr(&mut self) -> Result<PackNode, DecodeError> {
        self.x += 1;
        let mut arr = Vec::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            let ch = self.peek()?;
            if ch == b']' && first {
                self.x += 1;
                return Ok(PackNode::Array(arr));
            }
            if !first {
                match ch {
                    b']' => {
                        self.x += 1;
                        return Ok(PackNode::Array(arr));
                    }
                    b',' => self.x += 1,
                    _ => return Err(DecodeError::Invalid(self.x)),
                }
            }
            arr.push(self.read_any()?);
            first = false;
        }
    }

    fn read_obj(&mut self) -> Result<PackNode, DecodeError> {
        self.x += 1;
        let mut obj = Vec::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            let ch = self.peek()?;
            if ch == b'}' && first {
                self.x += 1;
                return Ok(PackNode::object(obj));
            }
            if !first {
                match ch {
                    b'}' => {
                        self.x += 1;
                        return Ok(PackNode::object(obj));
                    }
                    b',' => self.x += 1,
                    _ => return Err(DecodeError::Invalid(self.x)),
                }
                self.skip_whitespace();
            }
            let key = self.read_str()?;
            self.skip_whitespace();
            if self.peek()? != b':' {
                return Err(DecodeError::Invalid(self.x));
            }
            self.x += 1;
            let value = self.read_any()?;
            obj.push((key, value));
            first = false;
        }
    }
}

/// Index of the quote closing a string whose body starts at `x`.
fn find_ending_quote(data: &[u8], mut x: usize) -> Result<usize, DecodeError> {
    while x < data.len() {
        match data[x] {
            b'"' => return Ok(x),
            b'\\' => x += 2,
            _ => x += 1,
        }
    }
    Err(DecodeError::UnexpectedEnd)
}

/// Decodes a JSON string body (between the quotes), escapes included.
fn decode_json_string(bytes: &[u8]) -> Result<String, DecodeError> {
    if bytes.iter().any(|b| *b < 0x20) {
        return Err(DecodeError::InvalidString(0));
    }
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| DecodeError::InvalidString(0));
    }
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    serde_json::from_slice(&quoted).map_err(|_| DecodeError::InvalidString(0))
}
