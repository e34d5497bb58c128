//! Reading the structural summary every operation reports.
//!
//! Run with: cargo run --example metrics

use json_tidy::{beautify, minify, validate};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"{
        "service": "api-gateway",
        "replicas": 3,
        "env": {"region": "eu-west-1", "tier": "prod"},
        "ports": [80, 443]
    }"#;

    let compact = minify(input)?;
    println!("Minified: {}", compact.output);
    println!("  {}", compact.metrics);

    let pretty = beautify(&compact.output)?;
    println!("\nBeautified:\n{}", pretty.output);
    println!("  {}", pretty.metrics);

    // Validation reports the same structure with a zero size delta
    let checked = validate(input)?;
    println!("\nValidated: {}", checked.metrics);

    // The pieces are available individually, too
    println!(
        "\nroot: {}, depth: {}, keys: {}",
        checked.metrics.kind, checked.metrics.depth, checked.metrics.key_count
    );

    Ok(())
}
