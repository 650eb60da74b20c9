//! Format constants and magic bytes for the DSET specification

/// Magic bytes for .dset files
pub const MAGIC: [u8; 4] = *b"DSET";

/// Current format version
pub const VERSION: u8 = 1;

/// Fixed size of the file header in bytes
pub const HEADER_SIZE: usize = 64;

/// Fixed size of one directory entry in bytes
pub const ENTRY_SIZE: usize = 104;

/// Fixed width of the name field in a directory entry
pub const NAME_LEN: usize = 64;

/// Default alignment boundary for payload and attribute regions
pub const ALIGNMENT_BOUNDARY: usize = 8;

/// Maximum entry count to prevent memory exhaustion on corrupt files
pub const MAX_ENTRY_COUNT: u64 = 1_000_000;
