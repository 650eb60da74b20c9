//! Scalar element types for the DSET specification
//!
//! This module defines the taxonomy of numeric types a container can store
//! and the trait that constrains what Rust types map onto them.

/// Scalar types supported by the DSET format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScalarType {
    /// 32-bit floating point
    F32 = 0,
    /// 64-bit floating point
    F64 = 1,
    /// 32-bit signed integer
    I32 = 2,
    /// 64-bit signed integer
    I64 = 3,
    /// 32-bit unsigned integer
    U32 = 4,
    /// 64-bit unsigned integer
    U64 = 5,
}

impl ScalarType {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ScalarType::F32),
            1 => Some(ScalarType::F64),
            2 => Some(ScalarType::I32),
            3 => Some(ScalarType::I64),
            4 => Some(ScalarType::U32),
            5 => Some(ScalarType::U64),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Get the size in bytes for this scalar type
    pub const fn size_bytes(self) -> usize {
        match self {
            ScalarType::F32 | ScalarType::I32 | ScalarType::U32 => 4,
            ScalarType::F64 | ScalarType::I64 | ScalarType::U64 => 8,
        }
    }
}

impl core::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScalarType::F32 => write!(f, "f32"),
            ScalarType::F64 => write!(f, "f64"),
            ScalarType::I32 => write!(f, "i32"),
            ScalarType::I64 => write!(f, "i64"),
            ScalarType::U32 => write!(f, "u32"),
            ScalarType::U64 => write!(f, "u64"),
        }
    }
}

/// Trait for types that can be stored as dataset elements
///
/// All element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Sized: Have a known size at compile time
pub trait Scalar: Copy + Clone + PartialEq + Sized {
    /// Get the DSET ScalarType representation for this element type
    fn scalar_type() -> ScalarType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($type:ty, $variant:ident) => {
        impl Scalar for $type {
            fn scalar_type() -> ScalarType {
                ScalarType::$variant
            }

            fn from_f64(value: f64) -> Self {
                value as $type
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32, F32);
impl_scalar!(f64, F64);
impl_scalar!(i32, I32);
impl_scalar!(i64, I64);
impl_scalar!(u32, U32);
impl_scalar!(u64, U64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_type_u8_roundtrip() {
        for value in 0..6u8 {
            let scalar = ScalarType::from_u8(value).unwrap();
            assert_eq!(scalar.to_u8(), value);
        }
        assert_eq!(ScalarType::from_u8(6), None);
        assert_eq!(ScalarType::from_u8(255), None);
    }

    #[test]
    fn test_scalar_type_sizes() {
        assert_eq!(ScalarType::F32.size_bytes(), 4);
        assert_eq!(ScalarType::F64.size_bytes(), 8);
        assert_eq!(ScalarType::I32.size_bytes(), 4);
        assert_eq!(ScalarType::U64.size_bytes(), 8);
    }

    #[test]
    fn test_scalar_trait_types() {
        assert_eq!(<f64 as Scalar>::scalar_type(), ScalarType::F64);
        assert_eq!(<i32 as Scalar>::scalar_type(), ScalarType::I32);
        assert_eq!(<u64 as Scalar>::size_bytes(), 8);
        assert_eq!(i32::from_f64(3.7), 3);
        assert_eq!(2.5f64.to_f64(), 2.5);
    }
}
