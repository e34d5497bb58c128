//! Structural metrics for formatted documents.
//!
//! Every successful engine operation reports a [`Metrics`] value describing
//! the document that was produced: what kind of root it has, how deeply its
//! containers nest, how many object members it holds in total, and how the
//! output size compares to the input.
//!
//! ## Examples
//!
//! ```rust
//! use json_tidy::{minify, RootKind};
//!
//! let result = minify("{ \"a\": [1, 2] }").unwrap();
//! assert_eq!(result.metrics.kind, RootKind::Object);
//! assert_eq!(result.metrics.depth, 2);
//! assert_eq!(result.metrics.key_count, 1);
//! assert!(result.metrics.percent_change.unwrap() > 0.0);
//! ```

use crate::JsonValue;
use std::fmt;

/// The kind of value at the root of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Object,
    Array,
    /// A bare scalar root (`null`, boolean, number, or string), which
    /// strict JSON admits as a complete document.
    Scalar,
}

impl RootKind {
    /// Classifies the root of a value tree.
    #[must_use]
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Object(_) => RootKind::Object,
            JsonValue::Array(_) => RootKind::Array,
            _ => RootKind::Scalar,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RootKind::Object => "object",
            RootKind::Array => "array",
            RootKind::Scalar => "scalar",
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural measurements of one engine run.
///
/// Sizes are in bytes of UTF-8 text. `percent_change` follows the
/// shrink-positive convention: `(1 - output_size / original_size) * 100`,
/// so minification yields a positive number and beautification usually a
/// negative one. It is `None` only when the original document was empty,
/// which cannot happen through [`apply`](crate::apply) but can through
/// direct use of [`Metrics::compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub kind: RootKind,
    /// Nested container levels: `depth({}) == 1`,
    /// `depth({"a":{"b":1}}) == 2`, `depth([1,[2,[3]]]) == 3`. Scalar
    /// roots count 1.
    pub depth: usize,
    /// Total key-value pairs across every nested object.
    pub key_count: usize,
    pub original_size: usize,
    pub output_size: usize,
    pub percent_change: Option<f64>,
}

impl Metrics {
    /// Measures `value` and the size delta from `original` to `output`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::{jval, Metrics};
    ///
    /// let value = jval!([1, [2, [3]]]);
    /// let metrics = Metrics::compute("[1,[2,[3]]]", "[1,[2,[3]]]", &value);
    /// assert_eq!(metrics.depth, 3);
    /// assert_eq!(metrics.percent_change, Some(0.0));
    /// ```
    #[must_use]
    pub fn compute(original: &str, output: &str, value: &JsonValue) -> Self {
        let original_size = original.len();
        let output_size = output.len();
        let percent_change = if original_size == 0 {
            None
        } else {
            Some((1.0 - output_size as f64 / original_size as f64) * 100.0)
        };
        Metrics {
            kind: RootKind::of(value),
            depth: value.depth(),
            key_count: value.key_count(),
            original_size,
            output_size,
            percent_change,
        }
    }
}

impl Metrics {
    /// The size growth in percent, the sign users see in the summary line.
    /// Inverse of the stored shrink-positive `percent_change`.
    fn growth(&self) -> Option<f64> {
        self.percent_change.map(|pc| if pc == 0.0 { 0.0 } else { -pc })
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} document, depth {}, {} keys, {} -> {} bytes",
            self.kind, self.depth, self.key_count, self.original_size, self.output_size
        )?;
        if let Some(growth) = self.growth() {
            write!(f, " ({growth:+.1}%)")?;
        }
        Ok(())
    }
}
