//! Binary format definitions for the DSET file specification
//!
//! This module contains pure data structure definitions for the DSET wire
//! format. No I/O operations or concrete implementations - only format
//! specifications.

pub mod constants;
pub mod entry;
pub mod header;

// Re-export format definitions
pub use entry::DirEntry;
pub use header::ContainerHeader;
