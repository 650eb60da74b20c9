//! Export the four MNIST datasets from a DSET container to CSV files
//!
//! Reads `MNISTdata_1.dset` from the working directory and writes
//! `xtrain.csv`, `ytrain.csv`, `xtest.csv`, and `ytest.csv` next to it.
//! No flags, no arguments; the process exits non-zero on the first failure.

use dset::export::{self, ExportPlan};

fn main() -> Result<(), dset::Error> {
    env_logger::init();
    export::run(&ExportPlan::default())
}
