use std::{cmp::Ordering, iter::Copied, slice, vec};

use log::debug;

use crate::{
    AnyArray, ArrayAccess, ArrayIndex, ArrayOptions, ArrayValue, ElementKind, Error, MAX_LEN,
    Number, Result,
};

/// A resizable, bounds-checked sequence of `T`.
///
/// Every element in `[0, len)` is initialized; growing fills with
/// [`ArrayValue::ZERO`] and shrinking drops the tail for good. The array owns
/// its storage exclusively, so `clone` is a deep copy.
///
/// All fallible operations leave the array untouched when they fail.
#[derive(Debug, Clone)]
#[must_use = "Array should be stored to keep its elements"]
pub struct TypedArray<T> {
    storage: Vec<T>,
    max_len: usize,
}

impl<T> TypedArray<T>
where
    T: ArrayValue,
{
    pub const SIZE_OF_T: usize = size_of::<T>();

    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            max_len: MAX_LEN,
        }
    }

    /// Creates an array of `len` zeroed elements.
    pub fn with_len<L: ArrayIndex>(len: L) -> Result<Self> {
        let mut this = Self::new();
        this.set_len(len)?;
        Ok(this)
    }

    pub fn with_options(options: ArrayOptions) -> Result<Self> {
        let mut this = Self {
            storage: Vec::new(),
            max_len: options.max_len,
        };
        this.set_len_at(options.len)?;
        Ok(this)
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Resizes to `len`, appending zeroes or dropping the tail.
    ///
    /// Fails with [`Error::InvalidSize`] when `len` is negative or above
    /// [`max_len`](Self::max_len).
    pub fn set_len<L: ArrayIndex>(&mut self, len: L) -> Result<()> {
        match len.to_usize() {
            Some(len) => self.set_len_at(len),
            None => Err(invalid_size(len.to_i128(), self.max_len)),
        }
    }

    pub fn set_len_at(&mut self, len: usize) -> Result<()> {
        if len > self.max_len {
            return Err(invalid_size(len as i128, self.max_len));
        }

        let prev_len = self.storage.len();
        match len.cmp(&prev_len) {
            Ordering::Equal => return Ok(()),
            Ordering::Less => self.storage.truncate(len),
            Ordering::Greater => {
                self.storage.try_reserve_exact(len - prev_len)?;
                self.storage.resize(len, T::ZERO);
            }
        }

        debug!("{}: resized from {prev_len} to {len}", T::KIND.interface_name());
        Ok(())
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get<I: ArrayIndex>(&self, index: I) -> Result<T> {
        index
            .to_usize()
            .and_then(|i| self.storage.get(i))
            .copied()
            .ok_or_else(|| index_out_of_range(index.to_i128(), self.storage.len()))
    }

    /// Overwrites the element at `index`.
    #[inline]
    pub fn set<I: ArrayIndex>(&mut self, index: I, value: T) -> Result<()> {
        *self.slot_mut(index)? = value;
        Ok(())
    }

    pub fn get_number<I: ArrayIndex>(&self, index: I) -> Result<Number> {
        self.get(index).map(ArrayValue::to_number)
    }

    /// Writes an untyped value, rejecting it when it falls outside `T`'s domain.
    pub fn set_number<I: ArrayIndex>(&mut self, index: I, value: Number) -> Result<()> {
        let slot = self.slot_mut(index)?;
        *slot = T::from_number(value)?;
        Ok(())
    }

    /// Writes an untyped value, wrapping it into `T`'s domain.
    pub fn set_number_wrapping<I: ArrayIndex>(&mut self, index: I, value: Number) -> Result<()> {
        *self.slot_mut(index)? = T::from_number_wrapping(value);
        Ok(())
    }

    #[inline]
    fn slot_mut<I: ArrayIndex>(&mut self, index: I) -> Result<&mut T> {
        let len = self.storage.len();
        index
            .to_usize()
            .and_then(|i| self.storage.get_mut(i))
            .ok_or_else(|| index_out_of_range(index.to_i128(), len))
    }

    /// Sets every element to `value` without changing the length.
    pub fn fill(&mut self, value: T) {
        self.storage.fill(value);
    }

    pub fn clear(&mut self) {
        if !self.storage.is_empty() {
            debug!("{}: cleared {} elements", T::KIND.interface_name(), self.len());
            self.storage.clear();
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, T>> {
        self.storage.iter().copied()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

#[cold]
fn invalid_size(size: i128, max_len: usize) -> Error {
    Error::InvalidSize { size, max_len }
}

#[cold]
fn index_out_of_range(index: i128, len: usize) -> Error {
    Error::IndexOutOfRange { index, len }
}

impl<T> Default for TypedArray<T>
where
    T: ArrayValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for TypedArray<T>
where
    T: ArrayValue,
{
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T> From<Vec<T>> for TypedArray<T>
where
    T: ArrayValue,
{
    fn from(storage: Vec<T>) -> Self {
        let max_len = MAX_LEN.max(storage.len());
        Self { storage, max_len }
    }
}

impl<T> From<&[T]> for TypedArray<T>
where
    T: ArrayValue,
{
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T> FromIterator<T> for TypedArray<T>
where
    T: ArrayValue,
{
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> AsRef<[T]> for TypedArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.storage
    }
}

impl<'a, T> IntoIterator for &'a TypedArray<T>
where
    T: ArrayValue,
{
    type Item = T;
    type IntoIter = Copied<slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for TypedArray<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<T> AnyArray for TypedArray<T>
where
    T: ArrayValue,
{
    #[inline]
    fn kind(&self) -> ElementKind {
        T::KIND
    }

    #[inline]
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn set_len_dyn(&mut self, len: i64) -> Result<()> {
        self.set_len(len)
    }

    fn get_dyn(&self, index: i64) -> Result<Number> {
        self.get_number(index)
    }

    fn set_dyn(&mut self, index: i64, value: Number) -> Result<()> {
        self.set_number(index, value)
    }

    fn set_wrapping_dyn(&mut self, index: i64, value: Number) -> Result<()> {
        self.set_number_wrapping(index, value)
    }
}

impl<T> ArrayAccess for TypedArray<T>
where
    T: ArrayValue,
{
    type T = T;

    #[inline]
    fn as_typed(&self) -> &TypedArray<T> {
        self
    }

    #[inline]
    fn as_typed_mut(&mut self) -> &mut TypedArray<T> {
        self
    }
}
