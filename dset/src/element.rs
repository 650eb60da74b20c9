//! Element trait bridging core scalars to concrete I/O
//!
//! This trait adds the byte-serialization and text-rendering requirements
//! that file I/O and delimited export need on top of
//! [`Scalar`](dset_core::Scalar).

use dset_core::Scalar;

/// Trait for element types that can be stored in and exported from containers
pub trait Element:
    Scalar + bytemuck::Pod + core::fmt::Display + Send + Sync + 'static
{
    /// Write to bytes in little-endian format
    fn to_le_bytes(self) -> Vec<u8>;
}

/// Macro to implement Element for primitive types
macro_rules! impl_element {
    ($type:ty) => {
        impl Element for $type {
            fn to_le_bytes(self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }
        }
    };
}

impl_element!(f32);
impl_element!(f64);
impl_element!(i32);
impl_element!(i64);
impl_element!(u32);
impl_element!(u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_le_serialization() {
        assert_eq!(Element::to_le_bytes(1u32), vec![1, 0, 0, 0]);
        assert_eq!(Element::to_le_bytes(-1i32), vec![0xff, 0xff, 0xff, 0xff]);
        assert_eq!(Element::to_le_bytes(1.0f64), 1.0f64.to_le_bytes().to_vec());
    }
}
