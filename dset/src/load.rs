//! Loading delimited-text files back into memory
//!
//! The consuming side of the export path: training code reads the text
//! files the exporter writes, one line per row, back into dense row-major
//! matrices. Values are parsed as `f64` regardless of the scalar type the
//! container stored, which is what downstream numeric code works with.

use crate::error::{classify_io, Error, Result};
use crate::DELIMITER;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A dense row-major matrix parsed from delimited text
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// First-axis length
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Second-axis length
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the matrix holds no elements
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All elements in row-major order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One first-axis slice
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Get an element at the specified position
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }
}

/// Parse delimited text into a matrix
///
/// Every non-empty line becomes one row; empty lines are skipped. All rows
/// must hold the same number of values. A field that does not parse as a
/// number, or a line with a deviating field count, fails with
/// [`Error::Parse`] carrying the 1-based line number.
pub fn read_delimited<R: Read>(reader: R) -> Result<Matrix> {
    let mut rows = 0;
    let mut cols = 0;
    let mut values = Vec::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(Error::Io)?;
        if line.is_empty() {
            continue;
        }

        let mut count = 0;
        for field in line.split(DELIMITER) {
            let value: f64 = field.trim().parse().map_err(|_| Error::Parse(index + 1))?;
            values.push(value);
            count += 1;
        }

        if rows == 0 {
            cols = count;
        } else if count != cols {
            return Err(Error::Parse(index + 1));
        }
        rows += 1;
    }

    Ok(Matrix { rows, cols, values })
}

/// Load a delimited-text file into a matrix
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| classify_io(err, path))?;
    read_delimited(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_delimited_matrix() {
        let matrix = read_delimited(&b"1,2,3\n4,5,6\n"[..]).unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(matrix.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(matrix.get(0, 2), Some(3.0));
        assert_eq!(matrix.get(2, 0), None);
    }

    #[test]
    fn test_read_delimited_column() {
        // Rank-1 exports are a column of single-value rows
        let matrix = read_delimited(&b"0\n1\n2\n"[..]).unwrap();
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.values(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_read_delimited_scientific_notation() {
        let matrix = read_delimited(&b"1e-300,6.02214076e23\n"[..]).unwrap();
        assert_eq!(matrix.values(), &[1e-300, 6.02214076e23]);
    }

    #[test]
    fn test_read_delimited_skips_empty_lines() {
        let matrix = read_delimited(&b"1,2\n\n3,4\n"[..]).unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 2);
    }

    #[test]
    fn test_read_delimited_empty_input() {
        let matrix = read_delimited(&b""[..]).unwrap();
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.cols(), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_read_delimited_rejects_ragged_rows() {
        let result = read_delimited(&b"1,2,3\n4,5\n"[..]);
        assert!(matches!(result, Err(Error::Parse(2))));
    }

    #[test]
    fn test_read_delimited_rejects_non_numeric_field() {
        let result = read_delimited(&b"1,2\n3,abc\n"[..]);
        assert!(matches!(result, Err(Error::Parse(2))));
    }

    #[test]
    fn test_load_matrix_missing_file() {
        let result = load_matrix("/no/such/dir/xtrain.csv");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn test_export_then_load_roundtrip() {
        use crate::export;
        use crate::writer::ContainerBuilder;

        let container = std::env::temp_dir().join(format!(
            "dset-load-roundtrip-{}.dset",
            std::process::id()
        ));
        let out_path = std::env::temp_dir().join(format!(
            "dset-load-roundtrip-{}.csv",
            std::process::id()
        ));

        let values = [0.1f64, 1.0 / 3.0, 2.0, 0.5, 1e-9, 255.0];
        ContainerBuilder::new()
            .add_matrix("x_train", 2, 3, &values)
            .unwrap()
            .write_to(&container)
            .unwrap();

        let plan = export::ExportPlan::new(&container).dataset("x_train", &out_path);
        export::run(&plan).unwrap();

        let matrix = load_matrix(&out_path).unwrap();
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.values(), &values);

        let _ = std::fs::remove_file(&container);
        let _ = std::fs::remove_file(&out_path);
    }
}
