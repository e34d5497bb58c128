//! Canonical key ordering for diffable output.
//!
//! Run with: cargo run --example sort_keys

use json_tidy::{apply_with_options, sort_and_beautify, FormatOptions, Operation};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Two documents with the same content in different member order
    let a = r#"{"version":"1.0.0","name":"MyApp","debug":true}"#;
    let b = r#"{"debug":true,"name":"MyApp","version":"1.0.0"}"#;

    let sorted_a = sort_and_beautify(a)?;
    let sorted_b = sort_and_beautify(b)?;

    println!("Canonical form:\n{}\n", sorted_a.output);
    assert_eq!(sorted_a.output, sorted_b.output);
    println!("✓ Both documents normalize to the same text");

    // A wider indent, if the default 2 spaces is too dense
    let options = FormatOptions::pretty().with_indent(4);
    let wide = apply_with_options(a, Operation::SortAndBeautify, options)?;
    println!("\n4-space indent:\n{}", wide.output);

    Ok(())
}
