use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{ArrayIndex, ArrayValue, Result, TypedArray};

/// A [`TypedArray`] behind a shared read-write lock.
///
/// A bare `TypedArray` has no internal synchronization. Cloning a
/// `SharedArray` yields another handle to the same elements; every
/// forwarded operation takes the lock for its own duration only, so use
/// [`read`](Self::read) or [`write`](Self::write) when several operations
/// must observe a consistent state.
#[derive(Debug, Clone)]
pub struct SharedArray<T>(Arc<RwLock<TypedArray<T>>>);

impl<T> SharedArray<T>
where
    T: ArrayValue,
{
    pub fn new(array: TypedArray<T>) -> Self {
        Self(Arc::new(RwLock::new(array)))
    }

    pub fn with_len<L: ArrayIndex>(len: L) -> Result<Self> {
        TypedArray::with_len(len).map(Self::new)
    }

    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, TypedArray<T>> {
        self.0.read()
    }

    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, TypedArray<T>> {
        self.0.write()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn set_len<L: ArrayIndex>(&self, len: L) -> Result<()> {
        self.write().set_len(len)
    }

    pub fn get<I: ArrayIndex>(&self, index: I) -> Result<T> {
        self.read().get(index)
    }

    pub fn set<I: ArrayIndex>(&self, index: I, value: T) -> Result<()> {
        self.write().set(index, value)
    }

    /// Copies the current elements out.
    pub fn snapshot(&self) -> TypedArray<T> {
        self.read().clone()
    }

    /// Returns the inner array if this is the last handle.
    pub fn try_unwrap(self) -> Result<TypedArray<T>, Self> {
        Arc::try_unwrap(self.0).map(RwLock::into_inner).map_err(Self)
    }
}

impl<T> From<TypedArray<T>> for SharedArray<T>
where
    T: ArrayValue,
{
    fn from(array: TypedArray<T>) -> Self {
        Self::new(array)
    }
}
