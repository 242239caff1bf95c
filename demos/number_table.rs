//! Integer and float columns: widths, fixed precision, and grouping.
//!
//! Run with: cargo run --example number_table

use specfmt::{FormatSpec, Renderer, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let renderer = Renderer::new();

    println!("Number\tSquare\tCube");
    let narrow = FormatSpec::parse("2d")?;
    let medium = FormatSpec::parse("3d")?;
    let wide = FormatSpec::parse("4d")?;
    for x in 1..=10i64 {
        println!(
            "{}\t\t{}\t\t{}",
            renderer.render(&Value::Int(x), &narrow)?,
            renderer.render(&Value::Int(x * x), &medium)?,
            renderer.render(&Value::Int(x * x * x), &wide)?,
        );
    }
    println!();

    // The same value in one spec after another
    let number = 10145236;
    println!("{}", renderer.render(&Value::Int(number), &FormatSpec::parse(",.2f")?)?);
    println!("{}", renderer.render(&Value::Int(number), &FormatSpec::parse(">15,.2f")?)?);
    println!("${}", renderer.render(&Value::Int(number), &FormatSpec::parse(",.2f")?)?);

    Ok(())
}
