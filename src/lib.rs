#![warn(missing_docs)]
#![forbid(unsafe_code)]
// Allow needless `return` because that makes it sometimes more obvious that
// an expression is the result of the function
#![allow(clippy::needless_return)]
// Allow `assert_eq!(true, ...)` because in some cases it is used to check a bool
// value and not a 'flag' / 'state', and `assert_eq!` makes that more explicit
#![allow(clippy::bool_assert_comparison)]
// Enable 'unused' warnings for doc tests (are disabled by default)
#![doc(test(no_crate_inject))]
#![doc(test(attr(warn(unused))))]
// Fail on warnings in doc tests
#![doc(test(attr(deny(warnings))))]
// When `docsrs` configuration flag is set enable banner for features in documentation
// See https://stackoverflow.com/q/61417452
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Treeson is a strict tree-model JSON codec: it parses
//! [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259.html) style JSON text
//! into an in-memory [`Value`](value::Value) tree and renders trees back as
//! canonical, diffable pretty-printed text.
//!
//! Three properties set it apart from general purpose JSON libraries:
//!
//! - **Integer / float distinction**: values without a decimal point parse as
//!   a distinct `Integer` kind backed by `i64`, queryable separately from
//!   float-valued `Number`, though both satisfy the generic
//!   [`is_number`](value::Value::is_number) predicate.
//! - **Strict validation with typed errors**: trailing commas, leading zeros,
//!   unescaped control characters, lone surrogates and trailing garbage are
//!   all rejected with a stable, closed set of
//!   [`ParseErrorKind`](parser::ParseErrorKind) codes instead of free-form
//!   messages. Parsing never panics on malformed input.
//! - **Canonical output**: [`stringify`](stringify::stringify) produces
//!   exactly one rendering for a given tree (two-space indentation, one
//!   member per line, a single trailing newline), suitable for golden-output
//!   tests and line-based diffing.
//!
//! # Usage examples
//!
//! ## Parsing
//!
//! ```
//! use treeson::parser::parse;
//!
//! let value = parse(r#"{"name": "example", "items": [1, 2.5]}"#)?;
//!
//! let obj = value.object();
//! assert_eq!("example", obj["name"].string());
//! assert_eq!(1, obj["items"].array()[0].integer());
//! assert_eq!(2.5, obj["items"].array()[1].number());
//! # Ok::<(), treeson::parser::ParseError>(())
//! ```
//!
//! ## Building and stringifying
//!
//! ```
//! use treeson::stringify::stringify;
//! use treeson::value::{Array, Object, Value};
//!
//! let mut obj = Object::new();
//! obj.insert("a", Value::from(1));
//! let items = obj.insert("b", Value::from(Array::new())).array_mut();
//! items.push(Value::from(true));
//! items.push(Value::Null);
//!
//! assert_eq!(
//!     "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}\n",
//!     stringify(&Value::from(obj))
//! );
//! ```
//!
//! # Serde integration
//! Optional integration with [Serde](https://docs.rs/serde/latest/serde/)
//! exists to allow serializing and deserializing a [`Value`](value::Value)
//! tree. See the [`serde`] module of this crate for more information.

pub mod parser;
pub mod stringify;
pub mod value;

#[cfg(feature = "serde")]
pub mod serde;

mod utf8;
