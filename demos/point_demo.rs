//! Point demonstration
//!
//! Builds points from a buffer, a literal and a copy, then walks through
//! indexing, iteration, addition and text output.

use fulcrum::{NumericsError, Point3};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), NumericsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Fulcrum FixedPoint Example");
    println!("==========================");

    // Buffer constructor only reads the first three values
    let data = vec![1.0f64, 2.0, 3.0, 4.0];
    let pt1: Point3<f64> = Point3::from_buffer(&data)?;

    for i in 0..pt1.dimension() {
        println!("{}", pt1[i]);
    }

    let pt2: Point3<f64> = Point3::from_slice(&[5.0, 6.0, 7.0])?;
    let pt3 = pt2;

    for p in &pt3 {
        println!("{p}");
    }

    let pt4 = pt1 + pt2;
    println!("{pt4}");

    let mut pt5: Point3<f64> = Point3::default();
    pt5.read_tokens(&mut "1.5 2.5 3.5".split_whitespace())?;
    println!("{pt5}");

    Ok(())
}
