//! Simple example to inspect the datasets stored in a container file

use dset::Container;
use std::time::Instant;

fn main() -> dset::Result<()> {
    let filename = "MNISTdata_1.dset";

    // Check if file exists
    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_container' first");
        return Ok(());
    }

    println!("Reading container '{filename}'...");

    let start = Instant::now();
    let container = Container::open(filename)?;
    let load_time = start.elapsed();
    println!(
        "Header and directory parsed in {:.3}ms",
        load_time.as_secs_f64() * 1000.0
    );

    println!("\nContainer information:");
    println!("   Datasets: {}", container.len());

    let mut names: Vec<&str> = container.names().collect();
    names.sort_unstable();
    for name in names {
        let dataset = container.dataset(name)?;
        println!(
            "   {name}: {} x {} ({})",
            dataset.rows(),
            dataset.cols(),
            dataset.scalar_type()
        );
    }

    let attrs = container.attrs()?;
    if !attrs.is_empty() {
        println!("\nAttributes:");
        for (key, value) in attrs.iter() {
            println!("   {key} = {value}");
        }
    }

    Ok(())
}
