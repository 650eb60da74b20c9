#![no_std]

//! DSET Core - Dense Dataset Container Format Definitions
//!
//! This crate provides core format definitions and validation for the DSET
//! dense dataset container format

#[cfg(test)]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod format;
pub mod scalar;
pub mod validation;

pub use error::*;
pub use format::*;
pub use scalar::*;
pub use validation::*;
