use std::{fmt, str::FromStr};

use crate::{
    AnyArray, DoubleArray, FloatArray, OctetArray, Result, UnsignedByteArray,
    UnsignedLongArray, UnsignedLongLongArray, UnsignedShortArray,
};

/// The seven element kinds a typed array can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    Double,
    Float,
    Octet,
    UnsignedByte,
    UnsignedShort,
    UnsignedLong,
    UnsignedLongLong,
}

impl ElementKind {
    pub const ALL: [Self; 7] = [
        Self::Double,
        Self::Float,
        Self::Octet,
        Self::UnsignedByte,
        Self::UnsignedShort,
        Self::UnsignedLong,
        Self::UnsignedLongLong,
    ];

    /// Name of the array interface holding this kind, e.g. `"UnsignedShortArray"`.
    pub const fn interface_name(self) -> &'static str {
        match self {
            Self::Double => "DoubleArray",
            Self::Float => "FloatArray",
            Self::Octet => "OctetArray",
            Self::UnsignedByte => "UnsignedByteArray",
            Self::UnsignedShort => "UnsignedShortArray",
            Self::UnsignedLong => "UnsignedLongArray",
            Self::UnsignedLongLong => "UnsignedLongLongArray",
        }
    }

    /// IDL spelling of the element type, e.g. `"unsigned long long"`.
    pub const fn idl_name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Octet => "octet",
            Self::UnsignedByte => "unsigned byte",
            Self::UnsignedShort => "unsigned short",
            Self::UnsignedLong => "unsigned long",
            Self::UnsignedLongLong => "unsigned long long",
        }
    }

    /// Width of one element in bytes.
    pub const fn byte_width(self) -> usize {
        match self {
            Self::Octet | Self::UnsignedByte => 1,
            Self::UnsignedShort => 2,
            Self::Float | Self::UnsignedLong => 4,
            Self::Double | Self::UnsignedLongLong => 8,
        }
    }

    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::Double | Self::Float)
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Double | Self::Float | Self::Octet)
    }

    /// Creates an array of this kind with `len` zeroed elements, behind the
    /// dynamic [`AnyArray`] interface.
    pub fn create(self, len: usize) -> Result<Box<dyn AnyArray>> {
        Ok(match self {
            Self::Double => Box::new(DoubleArray::with_len(len)?),
            Self::Float => Box::new(FloatArray::with_len(len)?),
            Self::Octet => Box::new(OctetArray::with_len(len)?),
            Self::UnsignedByte => Box::new(UnsignedByteArray::with_len(len)?),
            Self::UnsignedShort => Box::new(UnsignedShortArray::with_len(len)?),
            Self::UnsignedLong => Box::new(UnsignedLongArray::with_len(len)?),
            Self::UnsignedLongLong => Box::new(UnsignedLongLongArray::with_len(len)?),
        })
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.idl_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown element kind: {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownKind;

    /// Accepts either the interface name or the IDL element type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.interface_name() == s || kind.idl_name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
