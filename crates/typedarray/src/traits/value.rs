use std::fmt::Debug;

use crate::{ElementKind, Error, Number, Result};

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Element types a [`TypedArray`](crate::TypedArray) can hold.
///
/// Implemented for exactly the seven element kinds: `f64`, `f32`, `i8`, `u8`,
/// `u16`, `u32` and `u64`.
pub trait ArrayValue
where
    Self: Sized + Debug + Copy + PartialEq + Send + Sync + 'static,
{
    const KIND: ElementKind;

    /// Value of freshly grown elements.
    const ZERO: Self;

    /// Strict conversion: fails with [`Error::ValueOutOfRange`] unless `value`
    /// lies inside this type's domain.
    ///
    /// Integer types accept integral values only. Float types accept any
    /// float (narrowing rounds to nearest, finite values beyond the target's
    /// range are rejected) and integers that convert exactly.
    fn from_number(value: Number) -> Result<Self>;

    /// Wrapping conversion: never fails.
    ///
    /// Integer types reduce modulo 2^width after truncating floats toward
    /// zero; NaN and infinities become zero. Float types round to nearest.
    fn from_number_wrapping(value: Number) -> Self;

    fn to_number(self) -> Number;
}

#[inline]
fn out_of_range<T: ArrayValue>(value: Number) -> Error {
    Error::ValueOutOfRange {
        value,
        kind: T::KIND,
    }
}

/// Reduces a float to its low 64 bits after truncation toward zero.
fn wrap_float(v: f64) -> u64 {
    if !v.is_finite() {
        return 0;
    }
    let t = v.trunc();
    if t.abs() < TWO_POW_63 {
        return t as i64 as u64;
    }
    // |t| >= 2^63 is a multiple of 2^11, so the remainder and the shift below are exact
    let r = t % TWO_POW_64;
    (if r < 0.0 { r + TWO_POW_64 } else { r }) as u64
}

macro_rules! impl_array_value_int {
    ($($t:ty => $kind:ident, $variant:ident);* $(;)?) => {
        $(
            impl ArrayValue for $t {
                const KIND: ElementKind = ElementKind::$kind;
                const ZERO: Self = 0;

                #[inline]
                fn from_number(value: Number) -> Result<Self> {
                    value
                        .as_integer()
                        .and_then(|v| Self::try_from(v).ok())
                        .ok_or_else(|| out_of_range::<Self>(value))
                }

                #[inline]
                fn from_number_wrapping(value: Number) -> Self {
                    match value {
                        Number::Int(v) => v as Self,
                        Number::UInt(v) => v as Self,
                        Number::Float(v) => wrap_float(v) as Self,
                    }
                }

                #[inline]
                fn to_number(self) -> Number {
                    Number::$variant(self.into())
                }
            }
        )*
    };
}

impl_array_value_int!(
    i8 => Octet, Int;
    u8 => UnsignedByte, UInt;
    u16 => UnsignedShort, UInt;
    u32 => UnsignedLong, UInt;
    u64 => UnsignedLongLong, UInt;
);

impl ArrayValue for f64 {
    const KIND: ElementKind = ElementKind::Double;
    const ZERO: Self = 0.0;

    fn from_number(value: Number) -> Result<Self> {
        match value {
            Number::Float(v) => Ok(v),
            Number::Int(v) if (v as f64) as i128 == v as i128 => Ok(v as f64),
            Number::UInt(v) if (v as f64) as i128 == v as i128 => Ok(v as f64),
            _ => Err(out_of_range::<Self>(value)),
        }
    }

    #[inline]
    fn from_number_wrapping(value: Number) -> Self {
        value.as_f64()
    }

    #[inline]
    fn to_number(self) -> Number {
        Number::Float(self)
    }
}

impl ArrayValue for f32 {
    const KIND: ElementKind = ElementKind::Float;
    const ZERO: Self = 0.0;

    fn from_number(value: Number) -> Result<Self> {
        match value {
            Number::Float(v) if !v.is_finite() || v.abs() <= f32::MAX as f64 => Ok(v as f32),
            Number::Int(v) if (v as f32) as i128 == v as i128 => Ok(v as f32),
            Number::UInt(v) if (v as f32) as i128 == v as i128 => Ok(v as f32),
            _ => Err(out_of_range::<Self>(value)),
        }
    }

    #[inline]
    fn from_number_wrapping(value: Number) -> Self {
        match value {
            Number::Int(v) => v as f32,
            Number::UInt(v) => v as f32,
            Number::Float(v) => v as f32,
        }
    }

    #[inline]
    fn to_number(self) -> Number {
        Number::Float(self.into())
    }
}
