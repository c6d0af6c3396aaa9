use crate::{Element, UninitVec};

use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T: Element> Clone for UninitVec<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::new();
        vec.clone_from(self);
        vec
    }

    /// Overwrites `self` with a copy of `source`, reusing the block if it is large enough
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.resize(source.len());
        self.copy_from_slice(source);
    }
}

impl<T> Default for UninitVec<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Element, O: ?Sized + AsRef<[T]>> PartialEq<O> for UninitVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &O) -> bool { self.as_slice() == other.as_ref() }
}

impl<T: Element + Eq> Eq for UninitVec<T> {}

impl<T: Element, O: ?Sized + AsRef<[T]>> PartialOrd<O> for UninitVec<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &O) -> Option<core::cmp::Ordering> { self.as_slice().partial_cmp(other.as_ref()) }
}

impl<T: Element + Ord> Ord for UninitVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<T: Element + Hash> Hash for UninitVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}

impl<T: Element + fmt::Debug> fmt::Debug for UninitVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.as_slice().fmt(f) }
}

impl<T: Element> AsRef<[T]> for UninitVec<T> {
    fn as_ref(&self) -> &[T] { self }
}

impl<T: Element> AsMut<[T]> for UninitVec<T> {
    fn as_mut(&mut self) -> &mut [T] { self }
}

impl<T: Element> Borrow<[T]> for UninitVec<T> {
    fn borrow(&self) -> &[T] { self }
}

impl<T: Element> BorrowMut<[T]> for UninitVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] { self }
}

impl<T: Element> From<&[T]> for UninitVec<T> {
    fn from(slice: &[T]) -> Self {
        let mut vec = Self::new();
        vec.extend_from_slice(slice);
        vec
    }
}

impl<T: Element, const N: usize> From<[T; N]> for UninitVec<T> {
    fn from(array: [T; N]) -> Self { Self::from(&array[..]) }
}

impl<T: Element, I> Index<I> for UninitVec<T>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output { self.as_slice().index(index) }
}

impl<T: Element, I> IndexMut<I> for UninitVec<T>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output { self.as_mut_slice().index_mut(index) }
}

#[cfg(feature = "std")]
impl std::io::Write for UninitVec<u8> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
