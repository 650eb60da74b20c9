//! Validation utilities for the DSET specification
//!
//! Pure functions with no I/O dependencies. Used by readers and writers to
//! check payload regions and dataset names.

pub mod name;
pub mod payload;

pub use name::validate_name;
pub use payload::validate_payload;
