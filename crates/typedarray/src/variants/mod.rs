//! The seven named array types, one per element kind.
//!
//! Each is a newtype over [`TypedArray`] and derefs to it, so the full
//! `TypedArray` API is available on every variant.

use typedarray_macros::array_wrapper;

use crate::TypedArray;

/// IEEE-754 double-precision elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoubleArray(TypedArray<f64>);
array_wrapper!(DoubleArray, f64);

/// IEEE-754 single-precision elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatArray(TypedArray<f32>);
array_wrapper!(FloatArray, f32);

/// Signed 8-bit elements, `-128..=127`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OctetArray(TypedArray<i8>);
array_wrapper!(OctetArray, i8);

/// Unsigned 8-bit elements, `0..=255`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsignedByteArray(TypedArray<u8>);
array_wrapper!(UnsignedByteArray, u8);

/// Unsigned 16-bit elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsignedShortArray(TypedArray<u16>);
array_wrapper!(UnsignedShortArray, u16);

/// Unsigned 32-bit elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsignedLongArray(TypedArray<u32>);
array_wrapper!(UnsignedLongArray, u32);

/// Unsigned 64-bit elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsignedLongLongArray(TypedArray<u64>);
array_wrapper!(UnsignedLongLongArray, u64);
