//! Error types for DSET I/O operations
//!
//! The format crate reports wire-level problems through
//! [`DsetError`]; this type layers the filesystem-facing
//! conditions on top of it.

use dset_core::DsetError;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during container I/O and export
#[derive(Debug)]
pub enum Error {
    /// A container or output path does not exist
    NotFound(PathBuf),
    /// An output path is not writable
    PermissionDenied(PathBuf),
    /// A requested dataset key is missing from the container
    KeyNotFound(String),
    /// The container contents violate the DSET format
    Format(DsetError),
    /// A delimited-text line could not be parsed (1-based line number)
    Parse(usize),
    /// Generic read/write failure
    Io(io::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Error::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            Error::KeyNotFound(key) => write!(f, "dataset key not found: {key}"),
            Error::Format(err) => write!(f, "invalid container: {err}"),
            Error::Parse(line) => write!(f, "invalid delimited data at line {line}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DsetError> for Error {
    fn from(err: DsetError) -> Self {
        Error::Format(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Map an I/O error to the path-aware taxonomy when the path is known
pub(crate) fn classify_io(err: io::Error, path: &Path) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
        _ => Error::Io(err),
    }
}

/// Result type for DSET I/O operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_io_by_kind() {
        let path = Path::new("/no/such/dir/file.dset");

        let err = classify_io(io::Error::from(io::ErrorKind::NotFound), path);
        assert!(matches!(err, Error::NotFound(_)));

        let err = classify_io(io::Error::from(io::ErrorKind::PermissionDenied), path);
        assert!(matches!(err, Error::PermissionDenied(_)));

        let err = classify_io(io::Error::from(io::ErrorKind::UnexpectedEof), path);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_format_error_conversion() {
        let err: Error = DsetError::InvalidHeader.into();
        assert!(matches!(err, Error::Format(DsetError::InvalidHeader)));
    }
}
