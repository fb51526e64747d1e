// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_engine::prelude::*;

fn main() -> NumericResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Engine Example ===\n");

    // Exact decimal sums
    let config = Configuration::with_defaults();
    let a: Decimal = "0.1".parse()?;
    let b: Decimal = "0.2".parse()?;
    println!("f64:     0.1 + 0.2 = {}", 0.1f64 + 0.2f64);
    println!("decimal: 0.1 + 0.2 = {}", add(&a, &b, &config)?);

    // Precision and rounding live in an explicit context
    println!("\n=== Contexts ===");
    let ctx = ContextBuilder::new()
        .precision(40)
        .rounding(RoundingMode::HalfEven)
        .build()?;
    let two = ctx.parse("2")?;
    println!("sqrt(2) to 40 digits: {}", ctx.to_string(&ctx.sqrt(&two)?));
    let seventh = ctx.div(&Decimal::one(), &ctx.parse("7")?)?;
    println!("1/7 to 40 digits:     {}", ctx.to_string(&seventh));

    let money = ContextBuilder::decimal64().build()?;
    let principal = money.parse("1000")?;
    let growth = money.pow(&money.parse("1.05")?, 10)?;
    let total = money.mul(&principal, &growth)?;
    println!("1000 at 5% for 10 years: {}", money.to_fixed(&total, 2)?);

    // Formatting
    println!("\n=== Formatting ===");
    let value: Decimal = "1234.5678".parse()?;
    println!("to_fixed(2):       {}", value.to_fixed(2, &config)?);
    println!("to_exponential(3): {}", value.to_exponential(3, &config)?);
    println!("to_precision(2):   {}", value.to_precision(2, &config)?);
    println!("debug:             {:?}", value);

    // Other bases
    println!("\n=== Radix Conversion ===");
    let ff = parse("ff", Some(16))?;
    println!("0xff in base 10: {}", ff);
    println!("255 in base 2:   {}", ff.to_radix(2, &config)?);
    println!("255 in base 64:  {}", ff.to_radix(64, &config)?);
    let tenth: Decimal = "0.1".parse()?;
    println!("0.1 in base 2:   {} (truncated)", tenth.to_radix(2, &config)?);

    // Errors are values, not sentinels
    println!("\n=== Errors ===");
    match div(&a, &Decimal::zero(), &config) {
        Ok(value) => println!("unexpected: {}", value),
        Err(error) => println!("1/0: {}", error),
    }
    match sqrt(&"-4".parse::<Decimal>()?, &config) {
        Ok(value) => println!("unexpected: {}", value),
        Err(error) => println!("sqrt(-4): {}", error),
    }

    Ok(())
}
