//! A canonical pretty printer for [`Value`] trees
//!
//! The rendering is deterministic: a given value tree always produces the same
//! bytes, making the output suitable for diffing and for golden-output tests.
//! Containers are indented with two spaces per nesting level, empty containers
//! render as `{}` and `[]`, and the output always ends with exactly one
//! trailing newline:
//! ```
//! use treeson::stringify::stringify;
//! use treeson::value::{Array, Object, Value};
//!
//! let mut obj = Object::new();
//! obj.insert("a", Value::from(1));
//! obj.insert("b", Value::from(Array::new()));
//! assert_eq!("{\n  \"a\": 1,\n  \"b\": []\n}\n", stringify(&Value::from(obj)));
//! ```

use crate::value::{Array, Object, Value};

/// Stringifies a value tree as canonical indented JSON text
pub fn stringify(value: &Value) -> String {
    let mut buffer = String::new();
    write_value(&mut buffer, value, 0);
    buffer.push('\n');
    buffer
}

/// Stringifies a bare array as canonical indented JSON text
pub fn stringify_array(array: &Array) -> String {
    let mut buffer = String::new();
    write_array(&mut buffer, array, 0);
    buffer.push('\n');
    buffer
}

/// Stringifies a bare object as canonical indented JSON text
pub fn stringify_object(object: &Object) -> String {
    let mut buffer = String::new();
    write_object(&mut buffer, object, 0);
    buffer.push('\n');
    buffer
}

fn write_indent(buffer: &mut String, indent: usize) {
    for _ in 0..indent {
        buffer.push_str("  ");
    }
}

fn write_unicode_escape(buffer: &mut String, code_unit: u16) {
    const HEX_DIGITS: [char; 16] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
    ];

    buffer.push_str("\\u");
    buffer.push(HEX_DIGITS[usize::from(code_unit >> 12 & 0xF)]);
    buffer.push(HEX_DIGITS[usize::from(code_unit >> 8 & 0xF)]);
    buffer.push(HEX_DIGITS[usize::from(code_unit >> 4 & 0xF)]);
    buffer.push(HEX_DIGITS[usize::from(code_unit & 0xF)]);
}

/// Writes the string in quotes, escaped following the `QuoteJSONString`
/// algorithm of ECMA-262
fn write_quoted_string(buffer: &mut String, value: &str) {
    buffer.push('"');
    for c in value.chars() {
        match c {
            '\u{0008}' => buffer.push_str("\\b"),
            '\t' => buffer.push_str("\\t"),
            '\n' => buffer.push_str("\\n"),
            '\u{000C}' => buffer.push_str("\\f"),
            '\r' => buffer.push_str("\\r"),
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            // Rust chars cannot be surrogates, so only the control range
            // needs a numeric escape
            '\0'..='\u{001F}' => write_unicode_escape(buffer, c as u16),
            _ => buffer.push(c),
        }
    }
    buffer.push('"');
}

fn write_number(buffer: &mut String, number: f64) {
    assert!(
        number.is_finite(),
        "Incorrect value usage: Number payload must be finite, got {number}"
    );
    let text = number.to_string();
    buffer.push_str(&text);
    // `Display` renders whole numbers without a decimal point; append one so
    // that re-parsing the output keeps the Number kind
    if !text.contains('.') {
        buffer.push_str(".0");
    }
}

fn write_array(buffer: &mut String, array: &Array, indent: usize) {
    buffer.push('[');
    if !array.is_empty() {
        let mut first = true;
        for element in array {
            if !first {
                buffer.push(',');
            }
            first = false;

            buffer.push('\n');
            write_indent(buffer, indent + 1);
            write_value(buffer, element, indent + 1);
        }
        buffer.push('\n');
        write_indent(buffer, indent);
    }
    buffer.push(']');
}

fn write_object(buffer: &mut String, object: &Object, indent: usize) {
    buffer.push('{');
    if !object.is_empty() {
        let mut first = true;
        for (name, value) in object.iter() {
            if !first {
                buffer.push(',');
            }
            first = false;

            buffer.push('\n');
            write_indent(buffer, indent + 1);
            write_quoted_string(buffer, name);
            buffer.push_str(": ");
            write_value(buffer, value, indent + 1);
        }
        buffer.push('\n');
        write_indent(buffer, indent);
    }
    buffer.push('}');
}

fn write_value(buffer: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Null => buffer.push_str("null"),
        Value::Boolean(true) => buffer.push_str("true"),
        Value::Boolean(false) => buffer.push_str("false"),
        Value::Integer(i) => buffer.push_str(&i.to_string()),
        Value::Number(n) => write_number(buffer, *n),
        Value::String(s) => write_quoted_string(buffer, s),
        Value::Array(a) => write_array(buffer, a, indent),
        Value::Object(o) => write_object(buffer, o, indent),
    }
}
