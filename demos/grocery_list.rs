//! Lining up a receipt with widths, alignments, and precisions.
//!
//! Run with: cargo run --example grocery_list

use specfmt::format;
use std::error::Error;

struct Item {
    name: &'static str,
    quantity: i64,
    unit_price: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let items = [
        Item { name: "Apples", quantity: 3, unit_price: 0.50 },
        Item { name: "Bread", quantity: 4, unit_price: 1.50 },
        Item { name: "Cheese", quantity: 2, unit_price: 2.25 },
    ];

    println!("{}", format("My Grocery List", "^30s")?);
    println!("{}", "=".repeat(30));

    let mut total = 0.0;
    for item in &items {
        let price = item.quantity as f64 * item.unit_price;
        total += price;
        println!(
            "{}{}\t\t${}",
            format(item.name, "8")?,
            format(item.quantity, "10d")?,
            format(price, ">5.2f")?,
        );
    }

    println!("{}\t\t${}", format("Total:", ">18s")?, format(total, ">5.2f")?);
    Ok(())
}
