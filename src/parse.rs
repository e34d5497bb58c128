//! Strict JSON parsing.
//!
//! This module provides the recursive-descent [`Parser`] that turns a JSON
//! document into a [`JsonValue`] tree. The grammar is RFC 8259 with no
//! extensions: no trailing commas, no comments, no single quotes, no
//! unquoted keys. The parser stops at the first violation and reports it
//! with a precise [`Location`](crate::Location).
//!
//! ## Usage
//!
//! Most users should use [`parse`] (re-exported at the crate root):
//!
//! ```rust
//! use json_tidy::{parse, JsonValue};
//!
//! let value = parse(r#"{"name": "ada", "age": 36}"#).unwrap();
//! assert_eq!(value.as_object().unwrap().len(), 2);
//!
//! let err = parse("[1, 2,]").unwrap_err();
//! assert!(err.to_string().contains("line 1"));
//! ```
//!
//! ## Whitespace
//!
//! Only the four JSON whitespace characters (space, tab, carriage return,
//! line feed) may appear between tokens. Any other character, including
//! non-breaking space, is a syntax error where a token is expected.

use crate::error::Location;
use crate::{Error, JsonMap, JsonValue, Number, Result};

/// Parses a JSON document into a [`JsonValue`].
///
/// The entire input must be a single JSON value, optionally surrounded by
/// whitespace. Empty or whitespace-only input is an error, as is any
/// non-whitespace content after the root value.
///
/// # Errors
///
/// Returns the first syntactic violation found, with its location. See
/// [`Error`] for the diagnostic categories.
///
/// # Examples
///
/// ```rust
/// use json_tidy::parse;
///
/// assert!(parse("[1, 2, 3]").is_ok());
/// assert!(parse("").is_err());
/// assert!(parse("{} {}").is_err());
/// ```
pub fn parse(input: &str) -> Result<JsonValue> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    if parser.at_end() {
        return Err(Error::empty_input());
    }
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(Error::trailing(parser.location()));
    }
    Ok(value)
}

/// A single-pass JSON parser over a borrowed input string.
///
/// Tracks byte position for slicing alongside the character offset, line,
/// and column used in diagnostics. All four advance together in
/// [`next_char`](Parser::next_char), so every error location is consistent
/// with [`Location::of`].
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Skips JSON whitespace: space, tab, carriage return, line feed.
    /// Nothing else counts, not even other Unicode whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue> {
        match self.peek_char() {
            None => Err(Error::eof(self.location(), "a JSON value")),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('"') => Ok(JsonValue::String(self.parse_string()?)),
            Some('t') => {
                self.parse_keyword("true")?;
                Ok(JsonValue::Bool(true))
            }
            Some('f') => {
                self.parse_keyword("false")?;
                Ok(JsonValue::Bool(false))
            }
            Some('n') => {
                self.parse_keyword("null")?;
                Ok(JsonValue::Null)
            }
            Some(ch) if ch == '-' || ch.is_ascii_digit() => {
                Ok(JsonValue::Number(self.parse_number()?))
            }
            Some(ch) => Err(Error::unexpected(self.location(), ch, "a JSON value")),
        }
    }

    /// Matches one of the exact literals `true`, `false`, `null`.
    /// `tru`, `True`, and `nul` all fail at the first wrong character.
    fn parse_keyword(&mut self, keyword: &'static str) -> Result<()> {
        for expected in keyword.chars() {
            let loc = self.location();
            match self.next_char() {
                Some(ch) if ch == expected => {}
                Some(ch) => return Err(Error::unexpected(loc, ch, keyword)),
                None => return Err(Error::eof(loc, keyword)),
            }
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<JsonValue> {
        self.next_char(); // consume '{'
        let mut map = JsonMap::new();

        self.skip_whitespace();
        if self.peek_char() == Some('}') {
            self.next_char();
            return Ok(JsonValue::Object(map));
        }

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                Some('"') => {}
                Some(ch) => {
                    return Err(Error::unexpected(self.location(), ch, "a string key"));
                }
                None => return Err(Error::eof(self.location(), "a string key")),
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            match self.peek_char() {
                Some(':') => {
                    self.next_char();
                }
                Some(ch) => return Err(Error::unexpected(self.location(), ch, "':'")),
                None => return Err(Error::eof(self.location(), "':'")),
            }

            self.skip_whitespace();
            let value = self.parse_value()?;
            // Duplicate keys: last value wins, first position kept.
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some('}') => {
                    self.next_char();
                    return Ok(JsonValue::Object(map));
                }
                Some(ch) => return Err(Error::unexpected(self.location(), ch, "',' or '}'")),
                None => return Err(Error::eof(self.location(), "',' or '}'")),
            }
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue> {
        self.next_char(); // consume '['
        let mut elements = Vec::new();

        self.skip_whitespace();
        if self.peek_char() == Some(']') {
            self.next_char();
            return Ok(JsonValue::Array(elements));
        }

        loop {
            self.skip_whitespace();
            elements.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some(']') => {
                    self.next_char();
                    return Ok(JsonValue::Array(elements));
                }
                Some(ch) => return Err(Error::unexpected(self.location(), ch, "',' or ']'")),
                None => return Err(Error::eof(self.location(), "',' or ']'")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.next_char(); // consume opening quote
        let mut result = String::new();

        loop {
            let loc = self.location();
            match self.next_char() {
                None => return Err(Error::eof(loc, "closing '\"'")),
                Some('"') => return Ok(result),
                Some('\\') => result.push(self.parse_escape(loc)?),
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(Error::unexpected(
                        loc,
                        ch,
                        "control characters to be escaped",
                    ));
                }
                Some(ch) => result.push(ch),
            }
        }
    }

    /// Decodes one escape sequence. `loc` points at the backslash.
    fn parse_escape(&mut self, loc: Location) -> Result<char> {
        match self.next_char() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.parse_unicode_escape(loc),
            Some(ch) => Err(Error::invalid_escape(
                loc,
                &format!("unknown escape sequence '\\{ch}'"),
            )),
            None => Err(Error::eof(loc, "an escape sequence")),
        }
    }

    fn parse_unicode_escape(&mut self, loc: Location) -> Result<char> {
        let first = self.parse_hex4(loc)?;

        if (0xDC00..=0xDFFF).contains(&first) {
            return Err(Error::invalid_escape(
                loc,
                &format!("unpaired low surrogate \\u{first:04X}"),
            ));
        }

        if (0xD800..=0xDBFF).contains(&first) {
            // High surrogate: a \uXXXX low surrogate must follow immediately.
            if self.peek_char() != Some('\\') {
                return Err(Error::invalid_escape(
                    loc,
                    &format!("unpaired high surrogate \\u{first:04X}"),
                ));
            }
            self.next_char();
            if self.peek_char() != Some('u') {
                return Err(Error::invalid_escape(
                    loc,
                    &format!("unpaired high surrogate \\u{first:04X}"),
                ));
            }
            self.next_char();
            let second = self.parse_hex4(loc)?;
            if !(0xDC00..=0xDFFF).contains(&second) {
                return Err(Error::invalid_escape(
                    loc,
                    &format!("expected low surrogate after \\u{first:04X}, found \\u{second:04X}"),
                ));
            }
            let code = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
            return char::from_u32(code).ok_or_else(|| {
                Error::invalid_escape(loc, &format!("invalid code point U+{code:X}"))
            });
        }

        char::from_u32(first)
            .ok_or_else(|| Error::invalid_escape(loc, &format!("invalid code point U+{first:X}")))
    }

    fn parse_hex4(&mut self, loc: Location) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.next_char() {
                Some(ch) if ch.is_ascii_hexdigit() => {
                    code = code * 16 + ch.to_digit(16).unwrap_or(0);
                }
                Some(ch) => {
                    return Err(Error::invalid_escape(
                        loc,
                        &format!("expected 4 hex digits in \\u escape, found '{ch}'"),
                    ));
                }
                None => return Err(Error::eof(loc, "4 hex digits")),
            }
        }
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<Number> {
        let start = self.position;
        let start_loc = self.location();

        if self.peek_char() == Some('-') {
            self.next_char();
        }

        // Integer part: a single 0, or a nonzero digit followed by digits.
        match self.peek_char() {
            Some('0') => {
                self.next_char();
                if matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                    return Err(Error::invalid_number(
                        start_loc,
                        "leading zeros are not allowed",
                    ));
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                    self.next_char();
                }
            }
            Some(ch) => return Err(Error::unexpected(self.location(), ch, "a digit")),
            None => return Err(Error::eof(self.location(), "a digit")),
        }

        let mut is_float = false;

        if self.peek_char() == Some('.') {
            is_float = true;
            self.next_char();
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return Err(Error::invalid_number(
                    start_loc,
                    "expected a digit after the decimal point",
                ));
            }
            while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                self.next_char();
            }
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.next_char();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.next_char();
            }
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return Err(Error::invalid_number(
                    start_loc,
                    "expected a digit in the exponent",
                ));
            }
            while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                self.next_char();
            }
        }

        let text = &self.input[start..self.position];

        if !is_float {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Number::Integer(i));
            }
            // Integer overflowed i64: fall through to the f64 representation.
        }

        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(Error::invalid_number(
                start_loc,
                "number is out of representable range",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jval;

    fn offset_of(input: &str) -> usize {
        parse(input)
            .unwrap_err()
            .location()
            .expect("parse errors carry a location")
            .offset
    }

    #[test]
    fn parses_all_value_kinds() {
        let value = parse(r#"{"n": null, "b": true, "i": -5, "f": 2.5, "s": "x", "a": [1]}"#)
            .unwrap();
        assert_eq!(
            value,
            jval!({
                "n": null,
                "b": true,
                "i": -5,
                "f": 2.5,
                "s": "x",
                "a": [1]
            })
        );
    }

    #[test]
    fn empty_input_reports_start() {
        for input in ["", "   ", "\n\t \r"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.location().unwrap().offset, 0, "input {input:?}");
        }
    }

    #[test]
    fn missing_object_value_position() {
        let err = parse(r#"{"a":}"#).unwrap_err();
        let loc = err.location().unwrap();
        assert_eq!((loc.line, loc.column, loc.offset), (1, 6, 5));
    }

    #[test]
    fn error_location_spans_lines() {
        let err = parse("{\n  \"a\": 1,\n  2\n}").unwrap_err();
        let loc = err.location().unwrap();
        assert_eq!(loc.line, 3);
        assert_eq!(loc.column, 3);
    }

    #[test]
    fn rejects_trailing_commas() {
        assert!(parse("[1, 2,]").is_err());
        assert!(parse(r#"{"a": 1,}"#).is_err());
    }

    #[test]
    fn rejects_comments() {
        assert!(parse("[1] // done").is_err());
        assert!(parse("/* x */ [1]").is_err());
    }

    #[test]
    fn rejects_single_quotes_and_unquoted_keys() {
        assert!(parse("'hi'").is_err());
        assert!(parse("{a: 1}").is_err());
    }

    #[test]
    fn rejects_partial_literals() {
        assert!(parse("tru").is_err());
        assert!(parse("True").is_err());
        assert!(parse("nulll").is_err()); // trailing characters
    }

    #[test]
    fn rejects_trailing_content() {
        let err = parse("{} {}").unwrap_err();
        assert_eq!(err.location().unwrap().offset, 3);
        assert!(parse("1 2").is_err());
    }

    #[test]
    fn json_whitespace_only_between_tokens() {
        assert!(parse(" \t\r\n[ 1 , 2 ]\n").is_ok());
        // U+00A0 non-breaking space is not JSON whitespace
        assert!(parse("\u{00A0}[1]").is_err());
    }

    #[test]
    fn number_grammar() {
        assert_eq!(parse("0").unwrap(), jval!(0));
        assert_eq!(parse("-0").unwrap(), jval!(0));
        assert_eq!(parse("10").unwrap(), jval!(10));
        assert_eq!(parse("1e2").unwrap(), jval!(100.0));
        assert_eq!(parse("2.5E-1").unwrap(), jval!(0.25));
        assert!(parse("01").is_err());
        assert!(parse("1.").is_err());
        assert!(parse(".5").is_err());
        assert!(parse("1e").is_err());
        assert!(parse("+1").is_err());
        assert!(parse("-").is_err());
        assert!(parse("NaN").is_err());
        assert!(parse("Infinity").is_err());
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        assert_eq!(parse("9223372036854775807").unwrap(), jval!(i64::MAX));
        let value = parse("9223372036854775808").unwrap();
        assert_eq!(value, JsonValue::Number(Number::Float(9.223372036854776e18)));
    }

    #[test]
    fn number_beyond_f64_range_is_an_error() {
        assert!(parse("1e999").is_err());
        assert!(parse("-1e999").is_err());
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            parse(r#""\" \\ \/ \b \f \n \r \t""#).unwrap(),
            jval!("\" \\ / \u{0008} \u{000C} \n \r \t")
        );
        assert_eq!(parse(r#""A""#).unwrap(), jval!("A"));
        assert_eq!(parse(r#""é""#).unwrap(), jval!("é"));
    }

    #[test]
    fn surrogate_pairs_decode() {
        assert_eq!(parse(r#""😀""#).unwrap(), jval!("\u{1F600}"));
    }

    #[test]
    fn lone_surrogates_rejected() {
        assert!(parse(r#""\uD83D""#).is_err());
        assert!(parse(r#""\uDE00""#).is_err());
        assert!(parse(r#""\uD83DA""#).is_err());
    }

    #[test]
    fn invalid_escapes_rejected() {
        assert!(parse(r#""\x""#).is_err());
        assert!(parse(r#""\u12""#).is_err());
        assert!(parse(r#""\u12G4""#).is_err());
    }

    #[test]
    fn unescaped_control_characters_rejected() {
        assert!(parse("\"a\nb\"").is_err());
        assert!(parse("\"a\tb\"").is_err());
    }

    #[test]
    fn unterminated_structures_report_eof() {
        for input in [r#"{"a": 1"#, "[1, 2", r#""open"#, "{\"a\""] {
            let err = parse(input).unwrap_err();
            assert!(err.location().is_some(), "input {input:?}");
        }
    }

    #[test]
    fn duplicate_keys_last_wins_first_position() {
        let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let map = value.as_object().unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn deep_nesting() {
        let mut doc = String::new();
        for _ in 0..64 {
            doc.push('[');
        }
        doc.push('1');
        for _ in 0..64 {
            doc.push(']');
        }
        let value = parse(&doc).unwrap();
        assert_eq!(value.depth(), 64);
    }

    #[test]
    fn error_offsets_are_character_offsets() {
        // "é" is one character, two bytes; the ']' sits at char offset 5
        assert_eq!(offset_of("[\"é\",]"), 5);
    }
}
