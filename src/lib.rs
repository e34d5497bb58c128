//! # json_tidy
//!
//! A JSON formatting, validation, and analysis engine with precise error
//! locations and structural metrics.
//!
//! ## What does it do?
//!
//! `json_tidy` parses strict (RFC 8259) JSON into a value tree, runs one of
//! a small set of transformations over it, and writes the result back out:
//!
//! - **Beautify**: pretty-print with configurable indentation, preserving
//!   object key order
//! - **Minify**: strip every byte of inter-token whitespace
//! - **Sort keys**: recursively reorder object members by code point, then
//!   pretty-print
//! - **Validate**: syntax-check only, echoing the input through
//!
//! Every successful run reports [`Metrics`]: the root kind, container
//! nesting depth, total object key count, and the byte-size delta. Every
//! failed run reports a single [`Error`] carrying the line, column, and
//! character offset of the first violation.
//!
//! ## Key Features
//!
//! - **Strict grammar**: no trailing commas, no comments, exact literal
//!   tokens; what parses here parses everywhere
//! - **Precise diagnostics**: first violation only, with a [`Location`]
//!   consistent across line/column/offset
//! - **Order-preserving**: object members keep their source order unless
//!   the key-sort transform is asked for
//! - **Serde compatible**: build [`JsonValue`] trees from any `Serialize`
//!   type via [`to_value`], or deserialize trees with serde
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! json_tidy = "0.1"
//! ```
//!
//! ### Formatting
//!
//! ```rust
//! use json_tidy::{beautify, minify};
//!
//! let pretty = beautify(r#"{"name":"Ada","tags":["x","y"]}"#).unwrap();
//! assert_eq!(
//!     pretty.output,
//!     "{\n  \"name\": \"Ada\",\n  \"tags\": [\n    \"x\",\n    \"y\"\n  ]\n}"
//! );
//!
//! let compact = minify(&pretty.output).unwrap();
//! assert_eq!(compact.output, r#"{"name":"Ada","tags":["x","y"]}"#);
//! ```
//!
//! ### Error reporting
//!
//! ```rust
//! use json_tidy::validate;
//!
//! let err = validate("{\"a\": 1,\n \"b\": }").unwrap_err();
//! let loc = err.location().unwrap();
//! assert_eq!((loc.line, loc.column), (2, 7));
//! ```
//!
//! ### Metrics
//!
//! ```rust
//! use json_tidy::{minify, RootKind};
//!
//! let result = minify("{ \"a\": { \"b\": [1, 2] } }").unwrap();
//! assert_eq!(result.metrics.kind, RootKind::Object);
//! assert_eq!(result.metrics.depth, 3);
//! assert_eq!(result.metrics.key_count, 2);
//! println!("{}", result.metrics);
//! ```
//!
//! ### Dynamic values with the jval! macro
//!
//! ```rust
//! use json_tidy::{jval, JsonValue};
//!
//! let data = jval!({
//!     "name": "Ada",
//!     "age": 36,
//!     "tags": ["math", "engines"]
//! });
//!
//! if let JsonValue::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Ada"));
//! }
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable walkthroughs:
//!
//! - **`simple.rs`** - Beautify and minify a document
//! - **`sort_keys.rs`** - Canonical key ordering for diffable output
//! - **`metrics.rs`** - Reading the structural summary
//!
//! Run any of them with: `cargo run --example <name>`

pub mod engine;
pub mod error;
pub mod macros;
pub mod map;
pub mod metrics;
pub mod options;
pub mod parse;
pub mod ser;
pub mod value;

pub use engine::{apply, apply_with_options, Formatted, Operation};
pub use error::{Error, Location, Result};
pub use map::JsonMap;
pub use metrics::{Metrics, RootKind};
pub use options::FormatOptions;
pub use parse::{parse, Parser};
pub use ser::{to_value, JsonValueSerializer, Serializer};
pub use value::{JsonValue, Number};

/// Pretty-prints a JSON document with 2-space indentation.
///
/// Object key order is preserved. The result also carries [`Metrics`] for
/// the formatted document.
///
/// # Errors
///
/// Returns an error if `input` is not valid JSON.
///
/// # Examples
///
/// ```rust
/// use json_tidy::beautify;
///
/// let result = beautify("[1,2]").unwrap();
/// assert_eq!(result.output, "[\n  1,\n  2\n]");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn beautify(input: &str) -> Result<Formatted> {
    apply(input, Operation::Beautify)
}

/// Removes all inter-token whitespace from a JSON document.
///
/// # Errors
///
/// Returns an error if `input` is not valid JSON.
///
/// # Examples
///
/// ```rust
/// use json_tidy::minify;
///
/// let result = minify("{\n  \"a\": 1\n}").unwrap();
/// assert_eq!(result.output, r#"{"a":1}"#);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn minify(input: &str) -> Result<Formatted> {
    apply(input, Operation::Minify)
}

/// Recursively sorts object keys, then pretty-prints.
///
/// Keys sort in ascending code-point order; array element order is
/// untouched. Useful for producing diffable, canonical documents.
///
/// # Errors
///
/// Returns an error if `input` is not valid JSON.
///
/// # Examples
///
/// ```rust
/// use json_tidy::sort_and_beautify;
///
/// let result = sort_and_beautify(r#"{"b":1,"a":2}"#).unwrap();
/// assert_eq!(result.output, "{\n  \"a\": 2,\n  \"b\": 1\n}");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn sort_and_beautify(input: &str) -> Result<Formatted> {
    apply(input, Operation::SortAndBeautify)
}

/// Checks that a document is valid JSON without reformatting it.
///
/// On success the input is echoed through unchanged, with metrics
/// reporting a zero size delta.
///
/// # Errors
///
/// Returns an error locating the first syntactic violation.
///
/// # Examples
///
/// ```rust
/// use json_tidy::validate;
///
/// assert!(validate(r#"{"a": 1}"#).is_ok());
/// assert!(validate(r#"{"a": 1,}"#).is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn validate(input: &str) -> Result<Formatted> {
    apply(input, Operation::Validate)
}
