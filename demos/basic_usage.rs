// ============================================================================
// Basic Usage Example
// ============================================================================

use composite_numerics::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    composite_numerics::init_logging();

    println!("=== Composite Numerics Example ===\n");

    // Wrapped integers promote exactly like the host arithmetic
    println!("Wrapped integers:");
    let small = Integer::from_rep(200u8);
    let sum = small + Integer::from_rep(100u8);
    println!("  {:?} + 100u8 = {:?}", small, sum);
    let mixed = sum * 3_000_000_000u32;
    println!("  {:?} * 3000000000u32 = {:?}", sum, mixed);

    // Elastic numbers: every operator computes a wider format first
    println!("\nElastic numbers:");
    let format = ElasticFormat::from_parts(4, 4)?;
    let a = ElasticNumber::<i32>::from_f64(15.9375, format)?;
    let b = ElasticNumber::<i32>::from_f64(0.0625, format)?;
    println!("  a = {:?}", a);
    println!("  b = {:?}", b);
    println!("  a + b = {:?}", a + b);
    println!("  a - b = {:?}", a - b);
    println!("  a * b = {:?}", a * b);
    println!("  a / b = {:?}", a / b);

    // Narrow a wide result back into a storage format
    let product = a * b;
    let settled = product.convert(format)?;
    println!("  a * b in {} = {}", format, settled);

    // Growth is bounded by the representation
    let wide = ElasticNumber::<i32>::from_f64(1.5, ElasticFormat::Q15_16)?;
    match wide.checked_mul(wide) {
        Ok(v) => println!("  {} squared = {}", wide, v),
        Err(e) => println!("  {} squared in i32: {}", wide, e),
    }
    let wide = ElasticNumber::<i64>::from_f64(1.5, ElasticFormat::Q15_16)?;
    println!("  {} squared in i64 = {:?}", wide, wide * wide);

    // Parsing at the boundary
    let parsed = ElasticNumber::<i64>::parse("-3.3125", ElasticFormat::Q15_16)?;
    println!("  parsed {:?}", parsed);
    if let Err(e) = ElasticNumber::<i64>::parse("0.1", ElasticFormat::from_parts(8, 4)?) {
        println!("  \"0.1\" with 4 fractional digits: {}", e);
    }

    // Fractions stay exact until converted
    println!("\nFractions:");
    let x = make_fraction(1i64, 3i32);
    let y = make_fraction(2i32, 3i32);
    println!("  {} + {} = {:?}", x, y, x + y);
    println!("  {} - {} = {:?}", x, y, x - y);
    println!("  {} * {} = {:?}", x, y, x * y);
    println!("  {} / {} = {:?}", x, y, x / y);

    let unreduced = make_fraction(1024i16, 360i64);
    println!("  reduce({}) = {:?}", unreduced, reduce(unreduced));
    println!("  22/7 as f32 = {}", make_fraction(22i32, 7i32).to_f32());

    let parsed: Fraction<i32> = "-6/-3".parse()?;
    println!("  parsed {} reduces to {}", parsed, reduce(parsed));

    println!("\n=== Example Complete ===");
    Ok(())
}
