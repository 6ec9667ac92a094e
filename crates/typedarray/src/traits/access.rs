use crate::{AnyArray, ArrayIndex, ArrayValue, Result, TypedArray};

/// The four-operation accessor shared by every typed array variant:
/// length, resize, element read and element write.
///
/// Implemented by [`TypedArray`] and by each named variant, so code can be
/// written once for all seven element kinds.
pub trait ArrayAccess: AnyArray {
    type T: ArrayValue;

    fn as_typed(&self) -> &TypedArray<Self::T>;

    fn as_typed_mut(&mut self) -> &mut TypedArray<Self::T>;

    #[inline]
    fn length(&self) -> usize {
        self.as_typed().len()
    }

    #[inline]
    fn set_length<L: ArrayIndex>(&mut self, len: L) -> Result<()>
    where
        Self: Sized,
    {
        self.as_typed_mut().set_len(len)
    }

    #[inline]
    fn element<I: ArrayIndex>(&self, index: I) -> Result<Self::T>
    where
        Self: Sized,
    {
        self.as_typed().get(index)
    }

    #[inline]
    fn set_element<I: ArrayIndex>(&mut self, index: I, value: Self::T) -> Result<()>
    where
        Self: Sized,
    {
        self.as_typed_mut().set(index, value)
    }
}
