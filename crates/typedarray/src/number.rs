use std::fmt;

/// A dynamically-typed numeric value, as handed over by callers that only
/// know an array's element kind at runtime.
///
/// Converting a `Number` into an element type may fail or wrap depending on
/// the write mode, see [`ArrayValue::from_number`] and
/// [`ArrayValue::from_number_wrapping`].
///
/// [`ArrayValue::from_number`]: crate::ArrayValue::from_number
/// [`ArrayValue::from_number_wrapping`]: crate::ArrayValue::from_number_wrapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Widens to `f64`, rounding integers beyond 2^53.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::UInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Returns the value as `i128` when it is an integer, or a finite float
    /// with no fractional part.
    pub fn as_integer(self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(v as i128),
            Self::UInt(v) => Some(v as i128),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i128),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_for_number {
    ($variant:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_for_number!(Int: i8, i16, i32, i64);
impl_from_for_number!(UInt: u8, u16, u32, u64);
impl_from_for_number!(Float: f32, f64);
