//! Payload validation for the DSET specification
//!
//! Checks that a payload byte region actually matches the shape and scalar
//! type its directory entry declares, before any typed view is created.
//! Pure functions with no I/O dependencies.

use crate::format::DirEntry;
use crate::DsetError;

/// Validate a payload byte region against its directory entry
///
/// Confirms that the region length equals the entry's declared
/// rows x cols x scalar size (with overflow protection) and that the base
/// address is aligned for the scalar type. Every supported scalar type has
/// alignment equal to its size, so the size doubles as the required
/// alignment. Returns the element count.
pub fn validate_payload(entry: &DirEntry, bytes: &[u8]) -> Result<usize, DsetError> {
    let scalar = entry.element_type()?;
    let expected = entry.expected_data_size()?;

    if expected > usize::MAX as u64 {
        return Err(DsetError::ArraySizeOverflow);
    }
    if bytes.len() as u64 != expected {
        return Err(DsetError::CorruptedData);
    }

    if (bytes.as_ptr() as usize) % scalar.size_bytes() != 0 {
        return Err(DsetError::ArrayAlignment);
    }

    let count = entry.element_count()?;
    Ok(count as usize)
}
