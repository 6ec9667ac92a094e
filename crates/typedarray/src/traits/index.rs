use std::fmt::Debug;

/// Integer types accepted as lengths and indices.
///
/// Signed types are accepted so that a negative value coming from a caller
/// is reported as an error instead of being silently reinterpreted.
pub trait ArrayIndex
where
    Self: Debug + Copy + Send + Sync + 'static,
{
    /// Converts to `usize`, or `None` when negative or too large for the platform.
    fn to_usize(self) -> Option<usize>;

    /// Lossless widening, used for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_array_index {
    ($($t:ty),*) => {
        $(
            impl ArrayIndex for $t {
                #[inline]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_array_index!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
