//! Beautifying and minifying a JSON document.
//!
//! Run with: cargo run --example simple

use json_tidy::{beautify, minify};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"{"id":42,"name":"Alice Johnson","tags":["admin","ops"],"active":true}"#;

    // Pretty-print with the default 2-space indent
    let pretty = beautify(input)?;
    println!("Beautified:\n{}\n", pretty.output);

    // Strip every byte of inter-token whitespace
    let compact = minify(&pretty.output)?;
    println!("Minified:\n{}\n", compact.output);

    assert_eq!(compact.output, input);
    println!("✓ Round-trip successful");

    Ok(())
}
