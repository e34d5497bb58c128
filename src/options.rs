//! Configuration options for JSON text output.
//!
//! This module provides [`FormatOptions`], the configuration struct shared
//! by the beautifier and the minifier. The two built-in layouts are:
//!
//! - [`FormatOptions::pretty`]: multi-line output with indentation
//! - [`FormatOptions::compact`]: single-line output with no whitespace
//!
//! ## Examples
//!
//! ```rust
//! use json_tidy::{parse, FormatOptions, Serializer};
//!
//! let value = parse(r#"{"a":1}"#).unwrap();
//!
//! let mut ser = Serializer::new(FormatOptions::pretty().with_indent(4));
//! ser.write_value(&value);
//! assert_eq!(ser.into_inner(), "{\n    \"a\": 1\n}");
//! ```

/// Configuration options for JSON text output.
///
/// Controls whether output is pretty-printed and how wide each indentation
/// level is. The indent width only affects pretty output.
///
/// # Examples
///
/// ```rust
/// use json_tidy::FormatOptions;
///
/// let options = FormatOptions::pretty();
/// assert!(options.pretty);
/// assert_eq!(options.indent, 2);
///
/// let options = FormatOptions::compact();
/// assert!(!options.pretty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per indentation level. Only used when `pretty` is set.
    pub indent: usize,
    /// Emit newlines and indentation between structural tokens.
    pub pretty: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent: 2,
            pretty: true,
        }
    }
}

impl FormatOptions {
    /// Creates the default options: pretty output, 2-space indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with 2-space indentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::FormatOptions;
    ///
    /// let options = FormatOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        Self::default()
    }

    /// Creates options for compact output with no inter-token whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::FormatOptions;
    ///
    /// let options = FormatOptions::compact();
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        FormatOptions {
            indent: 2,
            pretty: false,
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::FormatOptions;
    ///
    /// let options = FormatOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
