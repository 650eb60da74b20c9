//! Write a small MNIST-shaped container to try the exporter against

use dset::ContainerBuilder;
use std::time::Instant;

fn main() -> dset::Result<()> {
    println!("Writing demo container 'MNISTdata_1.dset'...");

    // Tiny stand-in for the real MNIST arrays: 8 "images" of 4 pixels
    let train_rows = 8;
    let pixels = 4;
    let x_train: Vec<f64> = (0..train_rows * pixels).map(|i| i as f64 / 255.0).collect();
    let y_train: Vec<i64> = (0..train_rows as i64).map(|i| i % 10).collect();
    let x_test: Vec<f64> = (0..2 * pixels).map(|i| (i as f64) * 0.5).collect();
    let y_test: Vec<i64> = vec![3, 7];

    let start = Instant::now();
    ContainerBuilder::new()
        .add_matrix("x_train", train_rows, pixels, &x_train)?
        .add_vector("y_train", &y_train)?
        .add_matrix("x_test", 2, pixels, &x_test)?
        .add_vector("y_test", &y_test)?
        .attr("source", "demo")
        .write_to("MNISTdata_1.dset")?;
    println!("Container written in {:?}", start.elapsed());

    println!("\nRun 'cargo run --example read_container' to inspect it,");
    println!("or 'cargo run --bin export-mnist' to export the CSV files!");
    Ok(())
}
