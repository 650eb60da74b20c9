//! DSET - Dense Dataset Container Implementation
//!
//! This library provides storage and export of named dense numeric arrays
//! using the DSET format with memory mapping and delimited-text output.
//!
//! ## Architecture
//!
//! DSET follows a clean specification/implementation separation:
//!
//! - **dset-core**: Pure format specifications, scalar taxonomy, and
//!   validation (no I/O)
//! - **dset**: Concrete implementations with file I/O and export
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dset::{Container, export};
//!
//! fn example() -> dset::Result<()> {
//!     let container = Container::open("MNISTdata_1.dset")?;
//!     let dataset = container.dataset("x_train")?;
//!     println!("x_train: {} x {}", dataset.rows(), dataset.cols());
//!
//!     let mut out = Vec::new();
//!     export::write_delimited(&dataset, &mut out)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Memory-mapped I/O**: Zero-copy access to stored arrays
//! - **Named datasets**: String-keyed directory with O(1) lookup
//! - **Attribute support**: Free-form JSON metadata per container
//! - **Type safety**: Strong typing over the dset-core scalar taxonomy

// Re-export core abstractions and format definitions
pub use dset_core::{
    // Format definitions
    ContainerHeader, DirEntry, ScalarType,
    // Element taxonomy
    Scalar,
    // Error handling
    DsetError,
    // Validation utilities
    validate_name, validate_payload,
};

// Implementation modules
#[cfg(feature = "serde")]
pub mod attrs;
#[cfg(feature = "mmap")]
pub mod container;
pub mod element;
pub mod error;
#[cfg(feature = "mmap")]
pub mod export;
pub mod load;
pub mod writer;

/// Value separator within one line of delimited text
pub const DELIMITER: char = ',';

// Public exports
pub use element::Element;
pub use error::{Error, Result};
pub use load::{load_matrix, Matrix};
pub use writer::ContainerBuilder;

// Memory mapping features
#[cfg(feature = "mmap")]
pub use container::{Container, Dataset, DatasetRef};

// Export features
#[cfg(feature = "mmap")]
pub use export::ExportPlan;

// Attribute features
#[cfg(feature = "serde")]
pub use attrs::Attrs;
