//! Vector demonstration
//!
//! Walks through construction, text output, iteration, arithmetic, raw
//! storage access and the dot and cross products.

use fulcrum::{FixedVector, NumericsError, Vector3};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), NumericsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Testing Example 1...");
    let data = vec![1.0f64, 2.0, 3.0, 4.0];
    let vec1: Vector3<f64> = Vector3::from_buffer(&data)?;
    for i in 0..vec1.dimension() {
        println!("{}", vec1[i]);
    }

    println!("\nTesting Example 2...");
    let vec2: Vector3<f64> = Vector3::from_slice(&[5.0, 6.0, 7.0])?;
    println!("{vec2}");

    println!("\nTesting Example 3...");
    let vec3 = vec2;
    for v in &vec3 {
        println!("{v}");
    }

    println!("\nTesting Example 4...");
    let vec4 = vec1 + vec2;
    println!("{vec4}");

    println!("\nTesting Example 5...");
    let vec5 = vec2 - vec1;
    for c in vec5.as_slice() {
        println!("{c}");
    }

    println!("\nTesting Example 6...");
    let vec1dot = vec1 * vec1;
    println!("{vec1dot}");

    println!("\nTesting Example 7...");
    println!("{}", vec1.cross(&vec2));

    // Generic code goes through the checked form
    let plane = FixedVector::<f64, 2>::new([1.0, 0.0]);
    match plane.try_cross(&plane) {
        Ok(v) => println!("{v}"),
        Err(e) => println!("{e}"),
    }

    Ok(())
}
