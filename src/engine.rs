//! The parse-transform-serialize pipeline.
//!
//! [`apply`] is the single entry point the convenience functions at the
//! crate root are built on: parse the input, run one [`Operation`] over the
//! tree, serialize, and measure. Each call is independent; the engine holds
//! no state between calls.
//!
//! ## Examples
//!
//! ```rust
//! use json_tidy::{apply, Operation};
//!
//! let result = apply(r#"{"b":2,"a":1}"#, Operation::SortAndBeautify).unwrap();
//! assert_eq!(result.output, "{\n  \"a\": 1,\n  \"b\": 2\n}");
//! ```

use crate::{parse, FormatOptions, Metrics, Result, Serializer};

/// The transformations the engine can run over a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Pretty-print with indentation, preserving object key order.
    Beautify,
    /// Strip all inter-token whitespace.
    Minify,
    /// Recursively sort object keys, then pretty-print.
    SortAndBeautify,
    /// Check syntax only; the output is the input, unchanged.
    Validate,
}

/// A successful engine run: the output document and its measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatted {
    pub output: String,
    pub metrics: Metrics,
}

/// Runs `operation` over `input` with default options (2-space indent).
///
/// # Errors
///
/// Fails if and only if `input` is not a valid JSON document; the error
/// carries the location of the first violation.
///
/// # Examples
///
/// ```rust
/// use json_tidy::{apply, Operation};
///
/// let result = apply("[1,2]", Operation::Beautify).unwrap();
/// assert_eq!(result.output, "[\n  1,\n  2\n]");
/// assert!(apply("[1,2,]", Operation::Validate).is_err());
/// ```
pub fn apply(input: &str, operation: Operation) -> Result<Formatted> {
    apply_with_options(input, operation, FormatOptions::default())
}

/// Runs `operation` over `input` with explicit [`FormatOptions`].
///
/// The indent width applies to the pretty-printing operations; `Minify`
/// and `Validate` ignore it.
///
/// # Errors
///
/// Fails if and only if `input` is not a valid JSON document.
///
/// # Examples
///
/// ```rust
/// use json_tidy::{apply_with_options, FormatOptions, Operation};
///
/// let options = FormatOptions::pretty().with_indent(4);
/// let result = apply_with_options(r#"{"a":1}"#, Operation::Beautify, options).unwrap();
/// assert_eq!(result.output, "{\n    \"a\": 1\n}");
/// ```
pub fn apply_with_options(
    input: &str,
    operation: Operation,
    options: FormatOptions,
) -> Result<Formatted> {
    let parsed = parse(input)?;
    let value = match operation {
        Operation::SortAndBeautify => parsed.sorted(),
        _ => parsed,
    };

    let output = match operation {
        Operation::Beautify | Operation::SortAndBeautify => {
            let mut serializer = Serializer::new(FormatOptions {
                pretty: true,
                ..options
            });
            serializer.write_value(&value);
            serializer.into_inner()
        }
        Operation::Minify => {
            let mut serializer = Serializer::new(FormatOptions::compact());
            serializer.write_value(&value);
            serializer.into_inner()
        }
        Operation::Validate => input.to_string(),
    };

    let metrics = Metrics::compute(input, &output, &value);
    Ok(Formatted { output, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RootKind;

    #[test]
    fn beautify_preserves_key_order() {
        let result = apply(r#"{"zebra":1,"apple":2}"#, Operation::Beautify).unwrap();
        assert_eq!(result.output, "{\n  \"zebra\": 1,\n  \"apple\": 2\n}");
    }

    #[test]
    fn sort_and_beautify_reorders_recursively() {
        let result = apply(r#"{"b":{"d":1,"c":2},"a":3}"#, Operation::SortAndBeautify).unwrap();
        assert_eq!(
            result.output,
            "{\n  \"a\": 3,\n  \"b\": {\n    \"c\": 2,\n    \"d\": 1\n  }\n}"
        );
    }

    #[test]
    fn minify_strips_whitespace() {
        let result = apply("{\n  \"a\": [1, 2]\n}", Operation::Minify).unwrap();
        assert_eq!(result.output, r#"{"a":[1,2]}"#);
        assert!(result.metrics.percent_change.unwrap() > 0.0);
    }

    #[test]
    fn validate_echoes_input() {
        let input = "{ \"a\" :1 }";
        let result = apply(input, Operation::Validate).unwrap();
        assert_eq!(result.output, input);
        assert_eq!(result.metrics.original_size, result.metrics.output_size);
        assert_eq!(result.metrics.percent_change, Some(0.0));
    }

    #[test]
    fn scalar_roots_are_measured() {
        let result = apply("  42  ", Operation::Minify).unwrap();
        assert_eq!(result.output, "42");
        assert_eq!(result.metrics.kind, RootKind::Scalar);
        assert_eq!(result.metrics.depth, 1);
        assert_eq!(result.metrics.key_count, 0);
    }

    #[test]
    fn operations_share_parse_errors() {
        for op in [
            Operation::Beautify,
            Operation::Minify,
            Operation::SortAndBeautify,
            Operation::Validate,
        ] {
            let err = apply(r#"{"a":}"#, op).unwrap_err();
            assert_eq!(err.location().unwrap().offset, 5);
        }
    }

    #[test]
    fn custom_indent_applies_to_sorting_too() {
        let options = FormatOptions::pretty().with_indent(4);
        let result =
            apply_with_options(r#"{"b":1,"a":2}"#, Operation::SortAndBeautify, options).unwrap();
        assert_eq!(result.output, "{\n    \"a\": 2,\n    \"b\": 1\n}");
    }
}
