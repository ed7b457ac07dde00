// ============================================================================
// Euler's Constant Example
// ============================================================================
//
// Run with: RUST_LOG=debug cargo run --example euler --features logging

use bcd_decimal::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DecimalError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== BCD Decimal Example ===\n");

    let a: Bcd = "123.45".parse()?;
    let b: Bcd = "67.6".parse()?;
    println!("{} + {} = {}", a, b, &a + &b);
    println!("{} - {} = {}", a, b, &a - &b);
    println!("{} * {} = {}", a, b, &a * &b);

    println!("\n=== Reciprocals ===");
    for n in [3, -4, 7, 12] {
        println!("1/{:<3} = {}", n, reciprocal(n, 20)?);
    }

    match reciprocal(0, 5) {
        Ok(value) => println!("1/0 = {}", value),
        Err(e) => println!("1/0 rejected: {}", e),
    }

    println!("\n=== Euler's Constant ===");
    for precision in [5, 20, 50] {
        println!("e ({:>2} digits) = {}", precision, compute_e(precision)?);
    }

    println!("\n=== Stopping Rule ===");
    let literal = ArithmeticConfig::literal();
    println!(
        "guarded: {}   literal: {}",
        compute_e(5)?,
        compute_e_with(5, &literal)?
    );

    Ok(())
}
