//! The cursor and [`Iterator`] types that can be created from an [`UninitVec`]

mod cursor;
mod direction;
mod into_iter;

pub use cursor::{Cursor, ForwardCursor, ForwardCursorMut, Position, ReverseCursor, ReverseCursorMut};
pub use direction::{Access, Direction, Forward, Reverse, Shared, Unique};
pub use into_iter::IntoIter;

use core::iter::FromIterator;

use crate::{Element, UninitVec};

impl<T: Element> FromIterator<T> for UninitVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Element> Extend<T> for UninitVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        // A size hint too large to allocate is not an error: the pushes
        // below grow the vector as the items actually arrive.
        if self.try_grow(iter.size_hint().0).is_err() {
            debug_assert!(self.remaining_capacity() < iter.size_hint().0);
        }

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Element + 'a> Extend<&'a T> for UninitVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) { self.extend(iter.into_iter().copied()); }
}
