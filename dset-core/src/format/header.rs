//! Core DSET file header definitions
//!
//! This module contains the main DSET container header structure.

use super::constants::{HEADER_SIZE, MAGIC, VERSION};
use crate::{DsetError, Result};

/// Read a little-endian u64 from a byte slice at a fixed offset.
const fn read_u64(bytes: &[u8], at: usize) -> u64 {
    u64::from_le_bytes([
        bytes[at],
        bytes[at + 1],
        bytes[at + 2],
        bytes[at + 3],
        bytes[at + 4],
        bytes[at + 5],
        bytes[at + 6],
        bytes[at + 7],
    ])
}

/// Standard header for .dset files (u64 based, supports large datasets)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerHeader {
    /// Magic bytes: "DSET"
    pub magic: [u8; 4],
    /// Format version
    pub version: u8,
    /// Padding for alignment
    pub _padding: [u8; 3],
    /// Number of directory entries
    pub entry_count: u64,
    /// Offset to the directory from file start
    pub dir_offset: u64,
    /// Size of the directory in bytes
    pub dir_size: u64,
    /// Offset to the JSON attribute region (0 = none)
    pub attrs_offset: u64,
    /// Size of the JSON attribute region in bytes
    pub attrs_size: u64,
    /// Reserved space for future extensions
    pub reserved: [u8; 16],
}

impl ContainerHeader {
    /// Magic bytes for .dset files
    pub const MAGIC: [u8; 4] = MAGIC;

    /// Current format version
    pub const VERSION: u8 = VERSION;

    /// Size of the header in bytes
    pub const SIZE: usize = HEADER_SIZE;

    /// Create a new header with default values
    pub const fn new() -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            _padding: [0; 3],
            entry_count: 0,
            dir_offset: 0,
            dir_size: 0,
            attrs_offset: 0,
            attrs_size: 0,
            reserved: [0; 16],
        }
    }

    /// Get attribute region offset and size
    pub fn attrs_region(&self) -> Option<(u64, u64)> {
        if self.attrs_offset == 0 || self.attrs_size == 0 {
            None
        } else {
            Some((self.attrs_offset, self.attrs_size))
        }
    }

    /// Set attribute region offset and size
    pub fn set_attrs_region(&mut self, offset: u64, size: u64) {
        self.attrs_offset = offset;
        self.attrs_size = size;
    }

    /// Validate the header structure
    pub const fn is_valid(&self) -> bool {
        self.magic[0] == Self::MAGIC[0]
            && self.magic[1] == Self::MAGIC[1]
            && self.magic[2] == Self::MAGIC[2]
            && self.magic[3] == Self::MAGIC[3]
            && self.version <= Self::VERSION
    }

    /// Parse header from bytes
    pub const fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(DsetError::InsufficientBuffer);
        }

        // Validate magic bytes
        if bytes[0] != Self::MAGIC[0]
            || bytes[1] != Self::MAGIC[1]
            || bytes[2] != Self::MAGIC[2]
            || bytes[3] != Self::MAGIC[3]
        {
            return Err(DsetError::InvalidHeader);
        }

        let version = bytes[4];
        if version > Self::VERSION {
            return Err(DsetError::UnsupportedVersion);
        }

        let entry_count = read_u64(bytes, 8);
        let dir_offset = read_u64(bytes, 16);
        let dir_size = read_u64(bytes, 24);
        let attrs_offset = read_u64(bytes, 32);
        let attrs_size = read_u64(bytes, 40);

        let mut reserved = [0u8; 16];
        let mut i = 0;
        while i < 16 {
            reserved[i] = bytes[48 + i];
            i += 1;
        }

        Ok(Self {
            magic: Self::MAGIC,
            version,
            _padding: [0; 3],
            entry_count,
            dir_offset,
            dir_size,
            attrs_offset,
            attrs_size,
            reserved,
        })
    }

    /// Convert header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        // Padding bytes 5-7 already zeroed

        bytes[8..16].copy_from_slice(&self.entry_count.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.dir_offset.to_le_bytes());
        bytes[24..32].copy_from_slice(&self.dir_size.to_le_bytes());
        bytes[32..40].copy_from_slice(&self.attrs_offset.to_le_bytes());
        bytes[40..48].copy_from_slice(&self.attrs_size.to_le_bytes());
        bytes[48..64].copy_from_slice(&self.reserved);

        bytes
    }
}

impl Default for ContainerHeader {
    fn default() -> Self {
        Self::new()
    }
}
