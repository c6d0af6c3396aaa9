use crate::{Element, UninitVec};
use core::{
    fmt,
    iter::{ExactSizeIterator, FusedIterator},
};

/// This struct is created by [`UninitVec::into_iter`](crate::UninitVec::into_iter).
/// See its documentation for more.
pub struct IntoIter<T> {
    index: usize,
    vec: UninitVec<T>,
}

impl<T: Element + fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_tuple("IntoIter").field(&self.as_slice()).finish() }
}

impl<T: Element> IntoIterator for UninitVec<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter { IntoIter { index: 0, vec: self } }
}

impl<'a, T: Element> IntoIterator for &'a mut UninitVec<T> {
    type IntoIter = core::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<'a, T: Element> IntoIterator for &'a UninitVec<T> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Element> FusedIterator for IntoIter<T> {}
impl<T: Element> ExactSizeIterator for IntoIter<T> {}

impl<T: Element> IntoIter<T> {
    /// Get a slice to the remaining elements in the iterator
    pub fn as_slice(&self) -> &[T] { &self.vec[self.index..] }

    /// Get a mutable slice to the remaining elements in the iterator
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.vec[self.index..] }
}

impl<T: Element> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.vec.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.vec.len().wrapping_sub(self.index);
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = self.index.saturating_add(n).min(self.vec.len());
        self.next()
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }
}

impl<T: Element> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.vec.len() {
            None
        } else {
            self.vec.pop()
        }
    }
}
