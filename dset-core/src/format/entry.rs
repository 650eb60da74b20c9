//! Directory entry definitions for the DSET specification
//!
//! Each named dataset in a container is described by one fixed-size
//! directory entry. Contains pure format definitions with validation -
//! no I/O operations.

use super::constants::{ENTRY_SIZE, NAME_LEN};
use crate::scalar::ScalarType;
use crate::validation::validate_name;
use crate::{DsetError, Result};

fn read_u64(bytes: &[u8], at: usize) -> u64 {
    let mut le = [0u8; 8];
    le.copy_from_slice(&bytes[at..at + 8]);
    u64::from_le_bytes(le)
}

/// One directory entry describing a named dense array (104 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    /// NUL-padded UTF-8 dataset name
    pub name: [u8; NAME_LEN],
    /// Scalar type (f32=0, f64=1, i32=2, etc.)
    pub scalar_type: u8,
    /// Array rank (1 or 2)
    pub rank: u8,
    /// Padding for alignment
    pub _padding: [u8; 6],
    /// First-axis length
    pub rows: u64,
    /// Second-axis length (1 for rank-1 arrays)
    pub cols: u64,
    /// Offset to element data from file start
    pub data_offset: u64,
    /// Size of element data in bytes
    pub data_size: u64,
}

impl DirEntry {
    /// Size of one directory entry in bytes
    pub const SIZE: usize = ENTRY_SIZE;

    /// Create an entry for a named array
    pub fn new(name: &str, scalar_type: ScalarType, rank: u8, rows: u64, cols: u64) -> Result<Self> {
        validate_name(name)?;
        if rank == 0 || rank > 2 {
            return Err(DsetError::InvalidEntry);
        }
        if rank == 1 && cols != 1 {
            return Err(DsetError::InvalidEntry);
        }

        let mut name_bytes = [0u8; NAME_LEN];
        name_bytes[..name.len()].copy_from_slice(name.as_bytes());

        Ok(Self {
            name: name_bytes,
            scalar_type: scalar_type.to_u8(),
            rank,
            _padding: [0; 6],
            rows,
            cols,
            data_offset: 0,
            data_size: 0,
        })
    }

    /// Dataset name as a string slice
    pub fn name(&self) -> Result<&str> {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(NAME_LEN);
        core::str::from_utf8(&self.name[..end]).map_err(|_| DsetError::InvalidName)
    }

    /// Scalar type of the stored elements
    pub fn element_type(&self) -> Result<ScalarType> {
        ScalarType::from_u8(self.scalar_type).ok_or(DsetError::InvalidEntry)
    }

    /// First-axis length
    pub fn row_count(&self) -> usize {
        self.rows as usize
    }

    /// Second-axis length (1 for rank-1 arrays)
    pub fn col_count(&self) -> usize {
        self.cols as usize
    }

    /// Total element count with overflow protection
    pub fn element_count(&self) -> Result<u64> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(DsetError::ArraySizeOverflow)
    }

    /// Expected payload size in bytes for the declared shape and type
    pub fn expected_data_size(&self) -> Result<u64> {
        let scalar = self.element_type()?;
        self.element_count()?
            .checked_mul(scalar.size_bytes() as u64)
            .ok_or(DsetError::ArraySizeOverflow)
    }

    /// Validate shape, type, and payload size consistency
    pub fn is_consistent(&self) -> bool {
        if self.rank == 0 || self.rank > 2 {
            return false;
        }
        if self.rank == 1 && self.cols != 1 {
            return false;
        }
        match self.expected_data_size() {
            Ok(expected) => expected == self.data_size,
            Err(_) => false,
        }
    }

    /// Parse entry from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(DsetError::InsufficientBuffer);
        }

        let mut name = [0u8; NAME_LEN];
        name.copy_from_slice(&bytes[0..NAME_LEN]);

        let scalar_type = bytes[64];
        let rank = bytes[65];

        let entry = Self {
            name,
            scalar_type,
            rank,
            _padding: [0; 6],
            rows: read_u64(bytes, 72),
            cols: read_u64(bytes, 80),
            data_offset: read_u64(bytes, 88),
            data_size: read_u64(bytes, 96),
        };

        // Reject entries the rest of the crate cannot represent
        entry.name()?;
        entry.element_type()?;
        if !entry.is_consistent() {
            return Err(DsetError::InvalidEntry);
        }

        Ok(entry)
    }

    /// Convert entry to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        bytes[0..NAME_LEN].copy_from_slice(&self.name);
        bytes[64] = self.scalar_type;
        bytes[65] = self.rank;
        // Padding bytes 66-71 already zeroed
        bytes[72..80].copy_from_slice(&self.rows.to_le_bytes());
        bytes[80..88].copy_from_slice(&self.cols.to_le_bytes());
        bytes[88..96].copy_from_slice(&self.data_offset.to_le_bytes());
        bytes[96..104].copy_from_slice(&self.data_size.to_le_bytes());

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> DirEntry {
        let mut entry = DirEntry::new("x_train", ScalarType::F64, 2, 2, 3).unwrap();
        entry.data_offset = 1024;
        entry.data_size = 2 * 3 * 8;
        entry
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = sample_entry();
        let parsed = DirEntry::from_bytes(&entry.to_bytes()).unwrap();
        assert_eq!(parsed, entry);
        assert_eq!(parsed.name(), Ok("x_train"));
        assert_eq!(parsed.element_type(), Ok(ScalarType::F64));
    }

    #[test]
    fn test_entry_shape_helpers() {
        let entry = sample_entry();
        assert_eq!(entry.row_count(), 2);
        assert_eq!(entry.col_count(), 3);
        assert_eq!(entry.element_count(), Ok(6));
        assert_eq!(entry.expected_data_size(), Ok(48));
        assert!(entry.is_consistent());
    }

    #[test]
    fn test_entry_rejects_bad_rank() {
        assert_eq!(
            DirEntry::new("a", ScalarType::F32, 0, 1, 1),
            Err(DsetError::InvalidEntry)
        );
        assert_eq!(
            DirEntry::new("a", ScalarType::F32, 3, 1, 1),
            Err(DsetError::InvalidEntry)
        );
        // Rank-1 arrays must declare a single column
        assert_eq!(
            DirEntry::new("a", ScalarType::F32, 1, 4, 2),
            Err(DsetError::InvalidEntry)
        );
    }

    #[test]
    fn test_entry_rejects_size_mismatch() {
        let mut entry = sample_entry();
        entry.data_size += 1;
        assert_eq!(
            DirEntry::from_bytes(&entry.to_bytes()),
            Err(DsetError::InvalidEntry)
        );
    }

    #[test]
    fn test_entry_rejects_unknown_scalar_type() {
        let mut entry = sample_entry();
        entry.scalar_type = 99;
        assert_eq!(
            DirEntry::from_bytes(&entry.to_bytes()),
            Err(DsetError::InvalidEntry)
        );
    }

    #[test]
    fn test_entry_rejects_short_buffer() {
        let bytes = [0u8; DirEntry::SIZE - 1];
        assert_eq!(
            DirEntry::from_bytes(&bytes),
            Err(DsetError::InsufficientBuffer)
        );
    }
}
