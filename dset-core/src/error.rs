//! Error types for DSET format operations

/// Errors that can occur while parsing or validating DSET containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DsetError {
    /// Invalid header format
    InvalidHeader,
    /// Unsupported format version
    UnsupportedVersion,
    /// Invalid directory entry
    InvalidEntry,
    /// Data corruption detected
    CorruptedData,
    /// Insufficient buffer space
    InsufficientBuffer,
    /// Array not aligned for its element type
    ArrayAlignment,
    /// Array size calculation would overflow
    ArraySizeOverflow,
    /// Invalid dataset name
    InvalidName,
    /// Requested element type does not match the stored type
    TypeMismatch,
}

impl core::fmt::Display for DsetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            DsetError::InvalidHeader => "Invalid DSET header",
            DsetError::UnsupportedVersion => "Unsupported format version",
            DsetError::InvalidEntry => "Invalid directory entry",
            DsetError::CorruptedData => "Data corruption detected",
            DsetError::InsufficientBuffer => "Insufficient buffer space",
            DsetError::ArrayAlignment => "Array not aligned for element type",
            DsetError::ArraySizeOverflow => "Array size calculation overflow",
            DsetError::InvalidName => "Invalid dataset name",
            DsetError::TypeMismatch => "Element type mismatch",
        };
        write!(f, "{msg}")
    }
}

/// Result type for DSET format operations
pub type Result<T> = core::result::Result<T, DsetError>;
