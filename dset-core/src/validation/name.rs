//! Dataset name validation for the DSET specification
//!
//! Names are stored in fixed-width NUL-padded directory fields, so they
//! must fit the field and contain no NUL or control bytes.

use crate::format::constants::NAME_LEN;
use crate::DsetError;

/// Validate a dataset name for storage in a directory entry
pub fn validate_name(name: &str) -> Result<(), DsetError> {
    if name.is_empty() {
        return Err(DsetError::InvalidName);
    }

    // Must fit the fixed-width name field
    if name.len() > NAME_LEN {
        return Err(DsetError::InvalidName);
    }

    // NUL bytes would truncate the stored name
    if name.bytes().any(|b| b == 0) {
        return Err(DsetError::InvalidName);
    }

    // Control characters are not meaningful in dataset keys
    if name.bytes().any(|b| b < 32) {
        return Err(DsetError::InvalidName);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        // Valid names
        assert_eq!(validate_name("x_train"), Ok(()));
        assert_eq!(validate_name("y_test"), Ok(()));
        assert_eq!(validate_name("dataset-1"), Ok(()));
        assert_eq!(validate_name("a"), Ok(()));

        // Invalid names
        assert_eq!(validate_name(""), Err(DsetError::InvalidName));
        assert_eq!(validate_name("with\0nul"), Err(DsetError::InvalidName));
        assert_eq!(validate_name("with\ttab"), Err(DsetError::InvalidName));
        assert_eq!(validate_name("with\nnewline"), Err(DsetError::InvalidName));
    }

    #[test]
    fn test_validate_name_length_limit() {
        let fits = "a".repeat(NAME_LEN);
        assert_eq!(validate_name(&fits), Ok(()));

        let too_long = "a".repeat(NAME_LEN + 1);
        assert_eq!(validate_name(&too_long), Err(DsetError::InvalidName));
    }
}
