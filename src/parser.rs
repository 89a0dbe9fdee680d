//! A strict JSON parser producing [`Value`] trees
//!
//! [`parse`] consumes a complete UTF-8 document and returns the value tree, or
//! a [`ParseError`] naming the first problem found. The parser conforms to
//! [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259.html) validation rules
//! with one intentional extension: values without a decimal point are parsed
//! as the distinct [`Integer`](Value::Integer) kind, queryable separately from
//! float-valued [`Number`](Value::Number). Trailing commas, leading zeros,
//! unescaped control characters and unpaired surrogate escapes are all
//! rejected. Exponent notation is not part of the accepted number grammar.
//!
//! Parsing never panics on malformed input; every rejection is reported as a
//! typed [`ParseErrorKind`] together with the line and column of the offending
//! code point:
//! ```
//! use treeson::parser::{parse, ParseErrorKind};
//!
//! let value = parse(r#"{"scores": [10, 20.5]}"#)?;
//! assert_eq!(10, value.object()["scores"].array()[0].integer());
//!
//! let error = parse("[1, 2,]").unwrap_err();
//! assert_eq!(ParseErrorKind::TrailingCommaInArray, error.kind);
//! # Ok::<(), treeson::parser::ParseError>(())
//! ```

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::utf8::{self, Utf8Decoder};
use crate::value::{Array, Object, Value};

/// Line and column position within a JSON document
///
/// Line and column numbering both start at 0. The characters _CR_ (U+000D),
/// _LF_ (U+000A) and _CR LF_ are considered line breaks. The column is
/// incremented by one per code point, regardless of how many bytes its UTF-8
/// encoding uses.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct LinePosition {
    /// Line number, starting at 0
    pub line: u64,
    /// Code point column within the current line, starting at 0
    pub column: u64,
}

impl Display for LinePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Describes why a JSON document was rejected
///
/// The set of kinds is closed and their names are stable; each kind maps to a
/// fixed human-readable message used by its `Display` implementation.
#[derive(PartialEq, Eq, Clone, Copy, strum::Display, Debug)]
pub enum ParseErrorKind {
    // string parse errors
    /// End of input inside an unterminated string
    #[strum(to_string = "end-of-file reached in the middle of a string")]
    EofInString,
    /// A code point below U+0020 appeared unescaped in a string
    #[strum(to_string = "control character discovered in string")]
    ControlCharacterInString,
    /// A literal (non-escaped) UTF-16 surrogate code point appeared in a string
    #[strum(to_string = "surrogate character discovered in string")]
    SurrogateCharacterInString,
    /// End of input directly after a `\`
    #[strum(to_string = "end-of-file reached after a \\")]
    EofAfterEscape,
    /// The character after a `\` does not form a known escape sequence
    #[strum(to_string = "invalid character after a \\")]
    InvalidCharacterAfterEscape,
    /// End of input in the middle of a `\uXXXX` escape
    #[strum(to_string = "end-of-file reached during a unicode escape")]
    EofInUnicodeEscape,
    /// A non-hex-digit in the middle of a `\uXXXX` escape
    #[strum(to_string = "invalid character during a unicode escape")]
    InvalidCharacterInUnicodeEscape,
    /// A `\uXXXX` escape encoding a surrogate without its matching partner
    #[strum(to_string = "unpaired surrogate in a unicode escape")]
    UnpairedSurrogateInUnicodeEscape,

    // number parse errors
    /// End of input directly after a minus sign
    #[strum(to_string = "end-of-file after a minus sign")]
    EofAfterMinusSign,
    /// A digit followed a leading zero, for example `01`
    #[strum(to_string = "digits after a leading zero")]
    DigitsAfterLeadingZero,
    /// A decimal point without at least one following digit
    #[strum(to_string = "no digits after a decimal point")]
    NoDigitsAfterDecimalPoint,
    /// An integer value which does not fit in an `i64`
    #[strum(to_string = "integer number was too big to fit in a 64-bit integer")]
    IntegerNumberTooBig,
    /// A number with a decimal point which does not fit in a finite `f64`
    #[strum(to_string = "floating point number was too big to fit in a double")]
    FloatingPointNumberTooBig,

    // keyword parse errors
    /// End of input in the middle of `true`, `false` or `null`
    #[strum(to_string = "end-of-file while parsing a keyword")]
    EofInKeyword,
    /// A character not matching `true`, `false` or `null`
    #[strum(to_string = "invalid character in a keyword")]
    InvalidCharacterInKeyword,

    // array parse errors
    /// End of input inside an unterminated array
    #[strum(to_string = "end-of-file while parsing an array")]
    EofInArray,
    /// A comma directly before the closing `]`
    #[strum(to_string = "array had a trailing comma")]
    TrailingCommaInArray,
    /// A character where a comma or the closing `]` was expected
    #[strum(to_string = "invalid character in array, expected comma or array end")]
    ExpectedCommaOrArrayEnd,

    // object parse errors
    /// End of input inside an unterminated object
    #[strum(to_string = "end-of-file while parsing an object")]
    EofInObject,
    /// A comma directly before the closing `}`
    #[strum(to_string = "object had a trailing comma")]
    TrailingCommaInObject,
    /// A character where a comma or the closing `}` was expected
    #[strum(to_string = "invalid character in object, expected comma or object end")]
    ExpectedCommaOrObjectEnd,
    /// A character where a property name was expected
    #[strum(to_string = "invalid character in object, expected property name")]
    ExpectedPropertyName,
    /// A property name without a following colon
    #[strum(to_string = "no colon after a property name")]
    ExpectedColon,
    /// Two members of the same object with the same property name
    #[strum(to_string = "duplicate property name in object")]
    DuplicatePropertyName,

    // value parse errors
    /// A character which cannot start any JSON value
    #[strum(to_string = "invalid character to start a value")]
    InvalidCharacterForValueStart,
    /// The document contained no value at all
    #[strum(to_string = "no value found")]
    EofBeforeValue,

    // encoding errors
    /// The input bytes are not well-formed UTF-8
    #[strum(to_string = "invalid UTF-8 encoding")]
    InvalidUtf8,

    // other errors
    /// Data remained after the top-level value and trailing whitespace
    #[strum(to_string = "expected end-of-file after finishing parsing")]
    ExpectedEofAfterTopLevelValue,
}

/// Error describing why a JSON document was rejected
///
/// The parser stops at the first problem; nothing is retried or recovered
/// internally.
#[derive(Error, PartialEq, Clone, Debug)]
#[error("JSON syntax error: {kind} at {location}")]
pub struct ParseError {
    /// Kind of the error
    pub kind: ParseErrorKind,
    /// Location of the offending code point in the JSON document
    pub location: LinePosition,
    /// Partially built container, available for some errors
    ///
    /// On [`TrailingCommaInArray`](ParseErrorKind::TrailingCommaInArray) and
    /// [`TrailingCommaInObject`](ParseErrorKind::TrailingCommaInObject) this
    /// holds the container with all members parsed before the offending comma.
    pub partial: Option<Value>,
}

/// Parses a complete JSON document into a [`Value`] tree
///
/// Leading and trailing whitespace is permitted; any other data around the
/// top-level value is rejected with
/// [`ExpectedEofAfterTopLevelValue`](ParseErrorKind::ExpectedEofAfterTopLevelValue).
///
/// ```
/// use treeson::parser::parse;
///
/// let value = parse(r#"[true, "text", -0.5]"#)?;
/// let items = value.array();
/// assert_eq!(true, items[0].boolean());
/// assert_eq!("text", items[1].string());
/// assert_eq!(-0.5, items[2].number());
/// # Ok::<(), treeson::parser::ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_bytes(text.as_bytes())
}

/// Parses a complete JSON document from raw bytes
///
/// In addition to everything [`parse`] rejects, malformed UTF-8 input is
/// reported as [`InvalidUtf8`](ParseErrorKind::InvalidUtf8), and a UTF-8
/// encoded surrogate code point inside a string as
/// [`SurrogateCharacterInString`](ParseErrorKind::SurrogateCharacterInString).
pub fn parse_bytes(bytes: &[u8]) -> Result<Value, ParseError> {
    Parser::new(bytes)?.parse_document()
}

fn is_digit(code_point: u32) -> bool {
    (u32::from(b'0')..=u32::from(b'9')).contains(&code_point)
}

fn is_number_start(code_point: u32) -> bool {
    code_point == u32::from(b'-') || is_digit(code_point)
}

fn is_whitespace(code_point: u32) -> bool {
    matches!(code_point, 0x20 | 0x09 | 0x0A | 0x0D)
}

fn from_hex_digit(code_point: u32) -> Option<u32> {
    char::from_u32(code_point)?.to_digit(16)
}

struct Parser<'a> {
    decoder: Utf8Decoder<'a>,
    /// One code point lookahead; `None` once the end of the input is reached
    current: Option<u32>,
    /// Position of `current`
    line: u64,
    column: u64,
    /// Whether the previously consumed code point was a CR; used to count
    /// a CR LF sequence as a single line break
    after_cr: bool,
}

impl<'a> Parser<'a> {
    fn new(bytes: &'a [u8]) -> Result<Parser<'a>, ParseError> {
        let mut decoder = Utf8Decoder::new(bytes);
        let current = decoder.decode_next().map_err(|_| ParseError {
            kind: ParseErrorKind::InvalidUtf8,
            location: LinePosition { line: 0, column: 0 },
            partial: None,
        })?;
        Ok(Parser {
            decoder,
            current,
            line: 0,
            column: 0,
            after_cr: false,
        })
    }

    fn location(&self) -> LinePosition {
        LinePosition {
            line: self.line,
            column: self.column,
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            location: self.location(),
            partial: None,
        }
    }

    fn current_is(&self, c: u8) -> bool {
        self.current == Some(u32::from(c))
    }

    fn current_is_digit(&self) -> bool {
        matches!(self.current, Some(c) if is_digit(c))
    }

    /// Consumes `current` and decodes the next code point into the lookahead
    ///
    /// Has no effect at the end of the input.
    fn advance(&mut self) -> Result<(), ParseError> {
        match self.current {
            None => return Ok(()),
            Some(0x0D) => {
                self.line += 1;
                self.column = 0;
                self.after_cr = true;
            }
            Some(0x0A) => {
                // An LF directly after a CR is part of the same line break
                if !self.after_cr {
                    self.line += 1;
                    self.column = 0;
                }
                self.after_cr = false;
            }
            Some(_) => {
                self.column += 1;
                self.after_cr = false;
            }
        }
        self.current = self
            .decoder
            .decode_next()
            .map_err(|_| self.error(ParseErrorKind::InvalidUtf8))?;
        Ok(())
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(code_point) = self.current {
            if !is_whitespace(code_point) {
                break;
            }
            self.advance()?;
        }
        Ok(())
    }

    fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace()?;
        let value = self.parse_value()?;
        self.skip_whitespace()?;
        if self.current.is_some() {
            return Err(self.error(ParseErrorKind::ExpectedEofAfterTopLevelValue));
        }
        Ok(value)
    }

    /// Parses a single value, dispatching on the lookahead code point
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let code_point = match self.current {
            None => return Err(self.error(ParseErrorKind::EofBeforeValue)),
            Some(c) => c,
        };

        if code_point == u32::from(b'{') {
            self.parse_object()
        } else if code_point == u32::from(b'[') {
            self.parse_array()
        } else if code_point == u32::from(b'"') {
            Ok(Value::String(self.parse_string()?))
        } else if code_point == u32::from(b't')
            || code_point == u32::from(b'f')
            || code_point == u32::from(b'n')
        {
            self.parse_keyword()
        } else if is_number_start(code_point) {
            self.parse_number()
        } else {
            Err(self.error(ParseErrorKind::InvalidCharacterForValueStart))
        }
    }

    /// Parses a string; `current` must be the opening quote
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.advance()?;

        let mut buf = String::new();
        loop {
            let code_point = match self.current {
                None => return Err(self.error(ParseErrorKind::EofInString)),
                Some(c) => c,
            };

            if code_point == u32::from(b'"') {
                self.advance()?;
                return Ok(buf);
            } else if code_point <= 0x1F {
                return Err(self.error(ParseErrorKind::ControlCharacterInString));
            } else if utf8::is_surrogate(code_point) {
                return Err(self.error(ParseErrorKind::SurrogateCharacterInString));
            } else if code_point == u32::from(b'\\') {
                self.parse_escape(&mut buf)?;
            } else {
                utf8::append_code_point(&mut buf, code_point);
                self.advance()?;
            }
        }
    }

    /// Parses one escape sequence; `current` must be the `\`
    fn parse_escape(&mut self, buf: &mut String) -> Result<(), ParseError> {
        self.advance()?;
        let code_point = match self.current {
            None => return Err(self.error(ParseErrorKind::EofAfterEscape)),
            Some(c) => c,
        };

        if code_point == u32::from(b'u') {
            let code_unit = self.parse_unicode_escape()?;
            if utf8::is_leading_surrogate(code_unit) {
                // A leading surrogate must be directly followed by an escaped
                // trailing surrogate; together they encode one supplementary
                // code point
                if !self.current_is(b'\\') {
                    return Err(self.error(ParseErrorKind::UnpairedSurrogateInUnicodeEscape));
                }
                self.advance()?;
                if !self.current_is(b'u') {
                    return Err(self.error(ParseErrorKind::UnpairedSurrogateInUnicodeEscape));
                }
                let trailing = self.parse_unicode_escape()?;
                if !utf8::is_trailing_surrogate(trailing) {
                    return Err(self.error(ParseErrorKind::UnpairedSurrogateInUnicodeEscape));
                }
                utf8::append_code_point(buf, utf8::combine_surrogates(code_unit, trailing));
            } else if utf8::is_trailing_surrogate(code_unit) {
                return Err(self.error(ParseErrorKind::UnpairedSurrogateInUnicodeEscape));
            } else {
                utf8::append_code_point(buf, code_unit);
            }
            return Ok(());
        }

        let replacement = if code_point == u32::from(b'"') {
            '"'
        } else if code_point == u32::from(b'\\') {
            '\\'
        } else if code_point == u32::from(b'/') {
            '/'
        } else if code_point == u32::from(b'b') {
            '\u{0008}'
        } else if code_point == u32::from(b'f') {
            '\u{000C}'
        } else if code_point == u32::from(b'n') {
            '\n'
        } else if code_point == u32::from(b'r') {
            '\r'
        } else if code_point == u32::from(b't') {
            '\t'
        } else {
            return Err(self.error(ParseErrorKind::InvalidCharacterAfterEscape));
        };
        buf.push(replacement);
        self.advance()?;
        Ok(())
    }

    /// Parses the four hex digits of a `\uXXXX` escape into a UTF-16 code
    /// unit; `current` must be the `u`
    fn parse_unicode_escape(&mut self) -> Result<u32, ParseError> {
        let mut code_unit = 0;
        for _ in 0..4 {
            self.advance()?;
            let digit = match self.current {
                None => return Err(self.error(ParseErrorKind::EofInUnicodeEscape)),
                Some(c) => from_hex_digit(c)
                    .ok_or_else(|| self.error(ParseErrorKind::InvalidCharacterInUnicodeEscape))?,
            };
            code_unit = code_unit * 16 + digit;
        }
        self.advance()?;
        Ok(code_unit)
    }

    /// Parses a number; `current` must be a digit or the minus sign
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let mut text = String::new();
        let mut floating = false;
        // negative & 0 -> floating, so keep track of it
        let mut negative = false;

        if self.current_is(b'-') {
            text.push('-');
            negative = true;
            self.advance()?;
            if self.current.is_none() {
                return Err(self.error(ParseErrorKind::EofAfterMinusSign));
            }
            if !self.current_is_digit() {
                return Err(self.error(ParseErrorKind::InvalidCharacterForValueStart));
            }
        }

        if self.current_is(b'0') {
            self.advance()?;
            if self.current_is(b'.') {
                text.push_str("0.");
                floating = true;
                self.advance()?;
                if !self.current_is_digit() {
                    return Err(self.error(ParseErrorKind::NoDigitsAfterDecimalPoint));
                }
            } else if self.current_is_digit() {
                return Err(self.error(ParseErrorKind::DigitsAfterLeadingZero));
            } else {
                return Ok(if negative {
                    // Negative zero cannot be represented as an integer
                    Value::Number(-0.0)
                } else {
                    Value::Integer(0)
                });
            }
        }

        while let Some(code_point) = self.current {
            if !is_digit(code_point) {
                break;
            }
            // digits are ASCII
            text.push((code_point as u8) as char);
            self.advance()?;
        }

        if !floating && self.current_is(b'.') {
            floating = true;
            text.push('.');
            self.advance()?;
            if !self.current_is_digit() {
                return Err(self.error(ParseErrorKind::NoDigitsAfterDecimalPoint));
            }
            while let Some(code_point) = self.current {
                if !is_digit(code_point) {
                    break;
                }
                text.push((code_point as u8) as char);
                self.advance()?;
            }
        }

        if floating {
            // The accumulated text is always a valid decimal literal, so this
            // cannot fail; out of range values come back as infinity
            let number: f64 = text.parse().unwrap();
            if !number.is_finite() {
                return Err(self.error(ParseErrorKind::FloatingPointNumberTooBig));
            }
            Ok(Value::Number(number))
        } else {
            let integer: i64 = text
                .parse()
                .map_err(|_| self.error(ParseErrorKind::IntegerNumberTooBig))?;
            Ok(Value::Integer(integer))
        }
    }

    /// Parses `true`, `false` or `null`; `current` must be `t`, `f` or `n`
    fn parse_keyword(&mut self) -> Result<Value, ParseError> {
        let (rest, value) = if self.current_is(b't') {
            ("rue", Value::Boolean(true))
        } else if self.current_is(b'f') {
            ("alse", Value::Boolean(false))
        } else {
            ("ull", Value::Null)
        };

        for expected in rest.chars() {
            self.advance()?;
            match self.current {
                None => return Err(self.error(ParseErrorKind::EofInKeyword)),
                Some(c) if c != expected as u32 => {
                    return Err(self.error(ParseErrorKind::InvalidCharacterInKeyword));
                }
                _ => {}
            }
        }
        self.advance()?;
        Ok(value)
    }

    /// Parses an array; `current` must be the opening `[`
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.advance()?;

        let mut arr = Array::new();
        let mut first = true;
        loop {
            self.skip_whitespace()?;

            let code_point = match self.current {
                None => return Err(self.error(ParseErrorKind::EofInArray)),
                Some(c) => c,
            };
            if code_point == u32::from(b']') {
                self.advance()?;
                return Ok(Value::Array(arr));
            }

            if first {
                first = false;
            } else if code_point == u32::from(b',') {
                self.advance()?;
                self.skip_whitespace()?;

                match self.current {
                    None => return Err(self.error(ParseErrorKind::EofInArray)),
                    Some(c) if c == u32::from(b']') => {
                        return Err(ParseError {
                            kind: ParseErrorKind::TrailingCommaInArray,
                            location: self.location(),
                            partial: Some(Value::Array(arr)),
                        });
                    }
                    _ => {}
                }
            } else {
                return Err(self.error(ParseErrorKind::ExpectedCommaOrArrayEnd));
            }

            arr.push(self.parse_value()?);
        }
    }

    /// Parses one `"name": value` member of an object
    fn parse_member(&mut self) -> Result<(String, Value), ParseError> {
        match self.current {
            None => return Err(self.error(ParseErrorKind::EofInObject)),
            Some(c) if c != u32::from(b'"') => {
                return Err(self.error(ParseErrorKind::ExpectedPropertyName));
            }
            _ => {}
        }
        let name = self.parse_string()?;

        self.skip_whitespace()?;
        match self.current {
            None => return Err(self.error(ParseErrorKind::EofInObject)),
            Some(c) if c == u32::from(b':') => {
                self.advance()?;
                self.skip_whitespace()?;
            }
            _ => return Err(self.error(ParseErrorKind::ExpectedColon)),
        }

        let value = self.parse_value()?;
        Ok((name, value))
    }

    /// Parses an object; `current` must be the opening `{`
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.advance()?;

        let mut obj = Object::new();
        let mut first = true;
        loop {
            self.skip_whitespace()?;

            let code_point = match self.current {
                None => return Err(self.error(ParseErrorKind::EofInObject)),
                Some(c) => c,
            };
            if code_point == u32::from(b'}') {
                self.advance()?;
                return Ok(Value::Object(obj));
            }

            if first {
                first = false;
            } else if code_point == u32::from(b',') {
                self.advance()?;
                self.skip_whitespace()?;

                match self.current {
                    None => return Err(self.error(ParseErrorKind::EofInObject)),
                    Some(c) if c == u32::from(b'}') => {
                        return Err(ParseError {
                            kind: ParseErrorKind::TrailingCommaInObject,
                            location: self.location(),
                            partial: Some(Value::Object(obj)),
                        });
                    }
                    _ => {}
                }
            } else {
                return Err(self.error(ParseErrorKind::ExpectedCommaOrObjectEnd));
            }

            let (name, value) = self.parse_member()?;
            if obj.contains(&name) {
                return Err(self.error(ParseErrorKind::DuplicatePropertyName));
            }
            obj.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    type TestResult = Result<(), ParseError>;

    fn assert_error(json: &str, kind: ParseErrorKind) {
        match parse(json) {
            Err(e) => assert_eq!(kind, e.kind, "unexpected error kind for {json:?}"),
            Ok(value) => panic!("should have failed for {json:?}, but got: {value:?}"),
        }
    }

    #[test]
    fn keywords() -> TestResult {
        assert_eq!(Value::Null, parse("null")?);
        assert_eq!(Value::Boolean(true), parse("true")?);
        assert_eq!(Value::Boolean(false), parse("false")?);

        assert_error("tru", ParseErrorKind::EofInKeyword);
        assert_error("falze", ParseErrorKind::InvalidCharacterInKeyword);
        assert_error("nul", ParseErrorKind::EofInKeyword);
        // The keyword itself is complete, the trailing data is the problem
        assert_error("nulll", ParseErrorKind::ExpectedEofAfterTopLevelValue);
        Ok(())
    }

    #[test]
    fn integers() -> TestResult {
        assert_eq!(Value::Integer(0), parse("0")?);
        assert_eq!(Value::Integer(123), parse("123")?);
        assert_eq!(Value::Integer(-9), parse("-9")?);
        assert_eq!(Value::Integer(i64::MAX), parse("9223372036854775807")?);
        assert_eq!(Value::Integer(i64::MIN), parse("-9223372036854775808")?);

        assert_error("9223372036854775808", ParseErrorKind::IntegerNumberTooBig);
        assert_error("01", ParseErrorKind::DigitsAfterLeadingZero);
        assert_error("-01", ParseErrorKind::DigitsAfterLeadingZero);
        assert_error("-", ParseErrorKind::EofAfterMinusSign);
        assert_error("-x", ParseErrorKind::InvalidCharacterForValueStart);
        Ok(())
    }

    #[test]
    fn floats() -> TestResult {
        assert_eq!(Value::Number(0.5), parse("0.5")?);
        assert_eq!(Value::Number(-12.25), parse("-12.25")?);
        assert_eq!(Value::Number(56.003), parse("56.0030")?);

        assert_error("1.", ParseErrorKind::NoDigitsAfterDecimalPoint);
        assert_error("0.", ParseErrorKind::NoDigitsAfterDecimalPoint);
        assert_error("-0.", ParseErrorKind::NoDigitsAfterDecimalPoint);
        assert_error(".5", ParseErrorKind::InvalidCharacterForValueStart);
        // Exponent notation is not part of the accepted grammar
        assert_error("1e5", ParseErrorKind::ExpectedEofAfterTopLevelValue);

        let too_big = format!("1{}.0", "0".repeat(400));
        assert_error(&too_big, ParseErrorKind::FloatingPointNumberTooBig);
        Ok(())
    }

    #[test]
    fn negative_zero_is_a_number() -> TestResult {
        let value = parse("-0")?;
        assert_eq!(ValueKind::Number, value.kind());
        assert_eq!(0.0, value.number());
        assert!(value.number().is_sign_negative());

        // Plain zero stays an integer
        assert_eq!(Value::Integer(0), parse("0")?);
        Ok(())
    }

    #[test]
    fn strings() -> TestResult {
        assert_eq!(Value::String("".to_owned()), parse(r#""""#)?);
        assert_eq!(Value::String("ab c".to_owned()), parse(r#""ab c""#)?);
        assert_eq!(
            Value::String("a\u{00E4}\u{20AC}\u{10000}b".to_owned()),
            parse("\"a\u{00E4}\u{20AC}\u{10000}b\"")?
        );
        Ok(())
    }

    #[test]
    fn string_escapes() -> TestResult {
        assert_eq!(
            Value::String("\" \\ / \u{0008} \u{000C} \n \r \t".to_owned()),
            parse(r#""\" \\ \/ \b \f \n \r \t""#)?
        );
        assert_eq!(Value::String("a\u{00E4}b".to_owned()), parse(r#""a\u00E4b""#)?);
        // Hex digits are case-insensitive
        assert_eq!(Value::String("\u{FFFF}".to_owned()), parse(r#""\uffff""#)?);
        assert_eq!(Value::String("\u{FFFF}".to_owned()), parse(r#""\uFFFF""#)?);

        assert_error(r#""\q""#, ParseErrorKind::InvalidCharacterAfterEscape);
        assert_error("\"\\", ParseErrorKind::EofAfterEscape);
        assert_error(r#""\u12"#, ParseErrorKind::EofInUnicodeEscape);
        assert_error(r#""\u12z4""#, ParseErrorKind::InvalidCharacterInUnicodeEscape);
        Ok(())
    }

    #[test]
    fn surrogate_pair_escapes() -> TestResult {
        // A leading and trailing surrogate pair combines into one code point
        assert_eq!(
            Value::String("\u{10000}".to_owned()),
            parse(r#""\uD800\uDC00""#)?
        );
        assert_eq!(
            Value::String("\u{1D11E}".to_owned()),
            parse(r#""\ud834\udd1e""#)?
        );
        assert_eq!(
            Value::String("\u{10FFFF}".to_owned()),
            parse(r#""\uDBFF\uDFFF""#)?
        );

        // Unpaired or incorrectly paired surrogates are rejected
        assert_error(r#""\uD800""#, ParseErrorKind::UnpairedSurrogateInUnicodeEscape);
        assert_error(r#""\uDC00""#, ParseErrorKind::UnpairedSurrogateInUnicodeEscape);
        assert_error(
            r#""\uD800\uD800""#,
            ParseErrorKind::UnpairedSurrogateInUnicodeEscape,
        );
        assert_error(r#""\uD800x""#, ParseErrorKind::UnpairedSurrogateInUnicodeEscape);
        assert_error(
            r#""\uDC00\uD800""#,
            ParseErrorKind::UnpairedSurrogateInUnicodeEscape,
        );
        Ok(())
    }

    #[test]
    fn string_rejects_raw_control_characters() {
        assert_error("\"a\u{0000}b\"", ParseErrorKind::ControlCharacterInString);
        assert_error("\"a\nb\"", ParseErrorKind::ControlCharacterInString);
        assert_error("\"a\u{001F}b\"", ParseErrorKind::ControlCharacterInString);
        assert_error("\"abc", ParseErrorKind::EofInString);
    }

    #[test]
    fn arrays() -> TestResult {
        assert_eq!(Value::Array(Array::new()), parse("[]")?);
        assert_eq!(Value::Array(Array::new()), parse("[  ]")?);

        let value = parse("[1, [true], []]")?;
        let arr = value.array();
        assert_eq!(3, arr.len());
        assert_eq!(1, arr[0].integer());
        assert_eq!(true, arr[1].array()[0].boolean());
        assert!(arr[2].array().is_empty());

        assert_error("[", ParseErrorKind::EofInArray);
        assert_error("[1", ParseErrorKind::EofInArray);
        assert_error("[1,", ParseErrorKind::EofInArray);
        assert_error("[1 2]", ParseErrorKind::ExpectedCommaOrArrayEnd);
        assert_error("[,1]", ParseErrorKind::InvalidCharacterForValueStart);
        Ok(())
    }

    #[test]
    fn array_trailing_comma_keeps_partial_result() {
        let error = parse("[1,2,]").unwrap_err();
        assert_eq!(ParseErrorKind::TrailingCommaInArray, error.kind);

        let mut expected = Array::new();
        expected.push(Value::Integer(1));
        expected.push(Value::Integer(2));
        assert_eq!(Some(Value::Array(expected)), error.partial);
    }

    #[test]
    fn objects() -> TestResult {
        assert_eq!(Value::Object(Object::new()), parse("{}")?);
        assert_eq!(Value::Object(Object::new()), parse("{ \t }")?);

        let value = parse(r#"{"a": 1, "b": {"c": null}}"#)?;
        let obj = value.object();
        assert_eq!(2, obj.len());
        assert_eq!(1, obj["a"].integer());
        assert!(obj["b"].object()["c"].is_null());

        // Member order is insertion order
        let value = parse(r#"{"z": 1, "a": 2}"#)?;
        let names: Vec<&str> = value.object().iter().map(|(n, _)| n).collect();
        assert_eq!(vec!["z", "a"], names);

        assert_error("{", ParseErrorKind::EofInObject);
        assert_error(r#"{"a""#, ParseErrorKind::EofInObject);
        assert_error(r#"{"a":1"#, ParseErrorKind::EofInObject);
        assert_error(r#"{"a":1,"#, ParseErrorKind::EofInObject);
        assert_error(r#"{"a":1 "b":2}"#, ParseErrorKind::ExpectedCommaOrObjectEnd);
        assert_error("{1: 2}", ParseErrorKind::ExpectedPropertyName);
        assert_error(r#"{"a" 1}"#, ParseErrorKind::ExpectedColon);
        assert_error(r#"{"a": 1, "a": 2}"#, ParseErrorKind::DuplicatePropertyName);
        Ok(())
    }

    #[test]
    fn object_trailing_comma_keeps_partial_result() {
        let error = parse(r#"{"a": 1,}"#).unwrap_err();
        assert_eq!(ParseErrorKind::TrailingCommaInObject, error.kind);

        let mut expected = Object::new();
        expected.insert("a", Value::Integer(1));
        assert_eq!(Some(Value::Object(expected)), error.partial);
    }

    #[test]
    fn top_level() -> TestResult {
        assert_eq!(Value::Integer(1), parse(" \t\r\n 1 \t\r\n ")?);
        assert_error("", ParseErrorKind::EofBeforeValue);
        assert_error("   \n\t  ", ParseErrorKind::EofBeforeValue);
        assert_error("1 2", ParseErrorKind::ExpectedEofAfterTopLevelValue);
        assert_error("{} []", ParseErrorKind::ExpectedEofAfterTopLevelValue);
        assert_error("@", ParseErrorKind::InvalidCharacterForValueStart);
        Ok(())
    }

    #[test]
    fn parse_bytes_rejects_malformed_utf8() {
        // Overlong encoding of '/'
        let error = parse_bytes(b"\"\xC0\xAF\"").unwrap_err();
        assert_eq!(ParseErrorKind::InvalidUtf8, error.kind);

        // Truncated multi-byte encoding
        let error = parse_bytes(b"\"\xE2\x82").unwrap_err();
        assert_eq!(ParseErrorKind::InvalidUtf8, error.kind);

        // A UTF-8 encoded surrogate code point is decoded but then rejected
        // by the string production
        let error = parse_bytes(b"\"\xED\xA0\x80\"").unwrap_err();
        assert_eq!(ParseErrorKind::SurrogateCharacterInString, error.kind);
    }

    #[test]
    fn parse_bytes_matches_parse() -> TestResult {
        let json = r#"{"a": [1, 2.5, "x"]}"#;
        assert_eq!(parse(json)?, parse_bytes(json.as_bytes())?);
        Ok(())
    }

    #[test]
    fn error_locations() {
        let error = parse("{\n  \"a\": 01\n}").unwrap_err();
        assert_eq!(ParseErrorKind::DigitsAfterLeadingZero, error.kind);
        assert_eq!(LinePosition { line: 1, column: 8 }, error.location);

        // CR, LF and CR LF all count as one line break
        for line_break in ["\n", "\r", "\r\n"] {
            let json = format!("[{line_break}@]");
            let error = parse(&json).unwrap_err();
            assert_eq!(ParseErrorKind::InvalidCharacterForValueStart, error.kind);
            assert_eq!(LinePosition { line: 1, column: 0 }, error.location);
        }

        // The column counts code points, not bytes
        let error = parse("[\"\u{20AC}\u{20AC}\", @]").unwrap_err();
        assert_eq!(ParseErrorKind::InvalidCharacterForValueStart, error.kind);
        assert_eq!(LinePosition { line: 0, column: 7 }, error.location);
    }

    #[test]
    fn error_display() {
        let error = parse("01").unwrap_err();
        assert_eq!(
            "JSON syntax error: digits after a leading zero at line 0, column 1",
            error.to_string()
        );
    }
}
