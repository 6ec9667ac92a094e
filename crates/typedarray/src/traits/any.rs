use std::fmt::Debug;

use crate::{ElementKind, Number, Result};

/// Type-erased array interface for callers that only learn the element kind at
/// runtime, such as a scripting or DOM binding layer.
///
/// Lengths and indices are `i64` so that negative values can be passed through
/// and rejected. Values travel as [`Number`].
pub trait AnyArray: Debug + Send + Sync {
    fn kind(&self) -> ElementKind;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size in bytes of one element.
    #[inline]
    fn value_size_of(&self) -> usize {
        self.kind().byte_width()
    }

    fn set_len_dyn(&mut self, len: i64) -> Result<()>;

    fn get_dyn(&self, index: i64) -> Result<Number>;

    /// Strict write, see [`ArrayValue::from_number`](crate::ArrayValue::from_number).
    fn set_dyn(&mut self, index: i64, value: Number) -> Result<()>;

    /// Wrapping write, see
    /// [`ArrayValue::from_number_wrapping`](crate::ArrayValue::from_number_wrapping).
    fn set_wrapping_dyn(&mut self, index: i64, value: Number) -> Result<()>;
}
