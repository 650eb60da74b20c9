//! Delimited-text export of container datasets
//!
//! Writes each dataset as plain text, one line per first-axis row, values
//! joined by commas. Formatting uses each scalar's native `Display`
//! rendering, which round-trips exactly through parsing.

use crate::container::{Container, Dataset, DatasetRef};
use crate::element::Element;
use crate::error::{classify_io, Error, Result};
use crate::DELIMITER;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The fixed container path and (dataset key, output path) pairs of one run
#[derive(Debug, Clone)]
pub struct ExportPlan {
    container: PathBuf,
    datasets: Vec<(String, PathBuf)>,
}

impl ExportPlan {
    /// Create an empty plan for the given container file
    pub fn new<P: AsRef<Path>>(container: P) -> Self {
        Self {
            container: container.as_ref().to_path_buf(),
            datasets: Vec::new(),
        }
    }

    /// Add one dataset key and its output path
    pub fn dataset<P: AsRef<Path>>(mut self, key: &str, out_path: P) -> Self {
        self.datasets
            .push((key.to_string(), out_path.as_ref().to_path_buf()));
        self
    }

    /// Container file path
    pub fn container(&self) -> &Path {
        &self.container
    }

    /// Planned (key, output path) pairs in execution order
    pub fn datasets(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.datasets
            .iter()
            .map(|(key, path)| (key.as_str(), path.as_path()))
    }
}

impl Default for ExportPlan {
    /// The standard MNIST export: four datasets to four CSV files
    fn default() -> Self {
        Self::new("MNISTdata_1.dset")
            .dataset("x_train", "xtrain.csv")
            .dataset("y_train", "ytrain.csv")
            .dataset("x_test", "xtest.csv")
            .dataset("y_test", "ytest.csv")
    }
}

fn write_rows<T: Element, W: Write>(dataset: &Dataset<'_, T>, out: &mut W) -> std::io::Result<()> {
    for row in 0..dataset.rows() {
        for col in 0..dataset.cols() {
            if col > 0 {
                write!(out, "{DELIMITER}")?;
            }
            // row/col are in bounds by construction
            if let Some(value) = dataset.get(row, col) {
                write!(out, "{value}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write a dataset as delimited text, one line per first-axis row
///
/// A rank-1 dataset is rendered as a column of single-value rows.
pub fn write_delimited<W: Write>(dataset: &DatasetRef<'_>, out: &mut W) -> Result<()> {
    match dataset {
        DatasetRef::F32(d) => write_rows(d, out),
        DatasetRef::F64(d) => write_rows(d, out),
        DatasetRef::I32(d) => write_rows(d, out),
        DatasetRef::I64(d) => write_rows(d, out),
        DatasetRef::U32(d) => write_rows(d, out),
        DatasetRef::U64(d) => write_rows(d, out),
    }
    .map_err(Error::Io)
}

/// Export one named dataset to a text file, creating or overwriting it
///
/// The dataset is looked up before the output file is created, so a missing
/// key leaves no partial output behind.
pub fn export_dataset(container: &Container, key: &str, out_path: &Path) -> Result<()> {
    let dataset = container.dataset(key)?;
    log::debug!(
        "dataset {key}: {} x {} ({})",
        dataset.rows(),
        dataset.cols(),
        dataset.scalar_type()
    );

    let file = File::create(out_path).map_err(|err| classify_io(err, out_path))?;
    let mut out = BufWriter::new(file);
    write_delimited(&dataset, &mut out)?;
    out.flush().map_err(Error::Io)
}

/// Run a full export: open the container, write every planned dataset
///
/// Datasets are exported in plan order; the first failure aborts the run.
/// Outputs from already-completed steps persist - there is no rollback.
/// The container mapping is released when this function returns, on every
/// exit path.
pub fn run(plan: &ExportPlan) -> Result<()> {
    let container = Container::open(plan.container())?;

    for (key, out_path) in plan.datasets() {
        log::info!("exporting {key} -> {}", out_path.display());
        export_dataset(&container, key, out_path)?;
    }

    Ok(())
}
