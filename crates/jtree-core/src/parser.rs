//! Recursive-descent JSON parser.
//!
//! The parser walks a byte cursor over the input text with one method per
//! grammar production and builds a [`Value`] tree bottom-up. It fails fast
//! on the first grammar violation: no recovery, no partial trees.
//!
//! # Key design decisions
//!
//! - **Syntactic number classification**: a literal is an [`Value::Integer`]
//!   iff no `.`, `e`, or `E` follows its integer part. `1e10` is a float
//!   even though it is numerically whole; `0` is an integer.
//! - **Permissive commas**: a comma is an optional separator consumed after
//!   any array element or object member, so trailing commas (`[1,2,]`) and
//!   missing commas (`[1 2]`) are both accepted. Only a missing closing
//!   bracket or brace is an error.
//! - **First key wins**: a duplicate object key is silently discarded; the
//!   member parsed first stays.
//! - **Full `\u` decoding**: surrogate pairs combine into one code point;
//!   lone or unpaired surrogates are rejected.

use std::collections::BTreeMap;

use crate::error::{ParseError, Result};
use crate::escape;
use crate::value::Value;

/// Parse a JSON document into a [`Value`] tree.
///
/// The document must contain exactly one value; trailing non-whitespace
/// content is [`ParseError::RootNotSingular`]. Each call owns a private
/// cursor over the input; no state is shared across calls.
pub fn parse(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    parser.parse_document()
}

/// Cursor-based parser over a read-only view of the input text.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Top level: one value, then nothing but whitespace.
    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.parse_whitespace();
        if self.pos != self.src.len() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Space, tab, newline, and carriage return are insignificant and are
    /// skipped before every token boundary.
    fn parse_whitespace(&mut self) {
        let bytes = self.src.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Dispatch on the first non-whitespace byte. End of input where a
    /// value is required is `ExpectValue`; everything unrecognized falls
    /// through to the number production and fails there as `InvalidValue`.
    fn parse_value(&mut self) -> Result<Value> {
        self.parse_whitespace();
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    /// Exact match of `null`, `true`, or `false`.
    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value> {
        if self.src.as_bytes()[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    /// Grammar-level number recognition followed by semantic
    /// classification.
    ///
    /// The scanner consumes an optional `-`, then either a single `0` or a
    /// nonzero digit run. If the next byte is none of `.`, `e`, `E`, the
    /// scanned text is an integer; `i64` conversion can then only fail on
    /// range overflow, which maps to `NumberTooBig`. Otherwise the
    /// fraction and exponent are consumed and the full text is a float;
    /// overflow to infinity is `NumberTooBig`.
    fn parse_number(&mut self) -> Result<Value> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut end = self.pos;

        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        match bytes.get(end) {
            Some(b'0') => end += 1,
            Some(b) if b.is_ascii_digit() => {
                while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
                    end += 1;
                }
            }
            _ => return Err(ParseError::InvalidValue),
        }

        let is_integer = !matches!(bytes.get(end), Some(b'.') | Some(b'e') | Some(b'E'));
        if is_integer {
            // Sign-plus-digits text: the only possible conversion failure
            // is range overflow.
            let number = self.src[start..end]
                .parse::<i64>()
                .map_err(|_| ParseError::NumberTooBig)?;
            self.pos = end;
            return Ok(Value::Integer(number));
        }

        if bytes.get(end) == Some(&b'.') {
            end += 1;
            if !bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidValue);
            }
            while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
            }
        }
        if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
            end += 1;
            match bytes.get(end) {
                Some(b'+') | Some(b'-') => end += 1,
                Some(b) if b.is_ascii_digit() => end += 1,
                _ => return Err(ParseError::InvalidValue),
            }
            while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
            }
        }

        let number = self.src[start..end]
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidValue)?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        self.pos = end;
        Ok(Value::Float(number))
    }

    /// Parse a quoted string with escape sequences resolved.
    ///
    /// Shared by the string value production and the object key
    /// production. Verbatim runs are copied as whole chunks; `"` and `\`
    /// are ASCII, so chunk boundaries always fall on character
    /// boundaries of the UTF-8 input.
    fn parse_string(&mut self) -> Result<String> {
        self.parse_whitespace();
        if self.peek() != Some(b'"') {
            return Err(ParseError::InvalidValue);
        }
        self.pos += 1;

        let bytes = self.src.as_bytes();
        let mut out = String::new();
        loop {
            let chunk_start = self.pos;
            while self
                .peek()
                .is_some_and(|b| b != b'"' && b != b'\\')
            {
                self.pos += 1;
            }
            out.push_str(&self.src[chunk_start..self.pos]);

            match self.peek() {
                // Unterminated string.
                None => return Err(ParseError::InvalidValue),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(_) => {
                    // Backslash: resolve the escape.
                    self.pos += 1;
                    match bytes.get(self.pos) {
                        None => return Err(ParseError::InvalidValue),
                        Some(&b'u') => {
                            self.pos += 1;
                            out.push(self.parse_unicode()?);
                        }
                        Some(&letter) => match escape::unescape(letter) {
                            Some(raw) => {
                                out.push(raw as char);
                                self.pos += 1;
                            }
                            None => return Err(ParseError::InvalidValue),
                        },
                    }
                }
            }
        }
    }

    /// Decode a `\uXXXX` escape, combining UTF-16 surrogate pairs.
    ///
    /// The cursor sits just past the `u`. A high surrogate must be
    /// followed immediately by `\uXXXX` holding a low surrogate; anything
    /// else, including a lone low surrogate, is `InvalidValue`.
    fn parse_unicode(&mut self) -> Result<char> {
        let high = self.parse_hex4()?;
        match high {
            0xD800..=0xDBFF => {
                let bytes = self.src.as_bytes();
                if bytes.get(self.pos) != Some(&b'\\') || bytes.get(self.pos + 1) != Some(&b'u') {
                    return Err(ParseError::InvalidValue);
                }
                self.pos += 2;
                let low = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(ParseError::InvalidValue);
                }
                let code_point =
                    0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(code_point).ok_or(ParseError::InvalidValue)
            }
            0xDC00..=0xDFFF => Err(ParseError::InvalidValue),
            _ => char::from_u32(u32::from(high)).ok_or(ParseError::InvalidValue),
        }
    }

    /// Read exactly 4 hex digits.
    fn parse_hex4(&mut self) -> Result<u16> {
        let bytes = self.src.as_bytes();
        let mut units: u16 = 0;
        for offset in 0..4 {
            let digit = bytes
                .get(self.pos + offset)
                .and_then(|&b| (b as char).to_digit(16))
                .ok_or(ParseError::InvalidValue)?;
            units = units * 16 + digit as u16;
        }
        self.pos += 4;
        Ok(units)
    }

    /// `[`, zero or more comma-separated values, `]`.
    fn parse_array(&mut self) -> Result<Value> {
        self.pos += 1;
        let mut array = Vec::new();
        loop {
            self.parse_whitespace();
            match self.peek() {
                // Missing closing bracket.
                None => return Err(ParseError::InvalidValue),
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(array));
                }
                Some(_) => {
                    array.push(self.parse_value()?);
                    self.parse_whitespace();
                    if self.peek() == Some(b',') {
                        self.pos += 1;
                    }
                }
            }
        }
    }

    /// `{`, zero or more `"key": value` members, `}`.
    fn parse_object(&mut self) -> Result<Value> {
        self.pos += 1;
        let mut object = BTreeMap::new();
        loop {
            self.parse_whitespace();
            match self.peek() {
                // Missing closing brace.
                None => return Err(ParseError::InvalidValue),
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(object));
                }
                Some(_) => {
                    let key = self.parse_string()?;
                    self.parse_whitespace();
                    if self.peek() != Some(b':') {
                        return Err(ParseError::InvalidValue);
                    }
                    self.pos += 1;
                    let value = self.parse_value()?;
                    // First occurrence wins; later duplicates are dropped.
                    object.entry(key).or_insert(value);
                    self.parse_whitespace();
                    if self.peek() == Some(b',') {
                        self.pos += 1;
                    }
                }
            }
        }
    }
}
