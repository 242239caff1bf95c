//! Locale-number grouping with an injected separator.
//!
//! Run with: cargo run --example custom_separator

use specfmt::{format_with_options, FormatOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let population = 10145236;

    // Default separator (comma)
    println!("Default:     {}", format_with_options(population, "n", &FormatOptions::new())?);

    // Dotted groups
    let dotted = FormatOptions::new().with_group_separator('.');
    println!("Dotted:      {}", format_with_options(population, "n", &dotted)?);

    // Underscores (handy for pasting back into source code)
    let underscored = FormatOptions::new().with_group_separator('_');
    println!("Underscored: {}", format_with_options(population, "n", &underscored)?);

    // Narrow no-break space, as several European conventions prefer
    let spaced = FormatOptions::new().with_group_separator('\u{202f}');
    println!("Spaced:      {}", format_with_options(population, "n", &spaced)?);

    // Floats group their integer part the same way
    let amount = 12345.6789;
    println!("Float:       {}", format_with_options(amount, "n", &dotted)?);

    Ok(())
}
