use crate::iter::direction::{Access, Direction, Forward, Reverse, Shared, Unique};

use core::{
    cmp::Ordering,
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr::NonNull,
};

/// A position inside an [`UninitVec`](crate::UninitVec).
///
/// Unlike a [`Cursor`], a `Position` does not borrow the vector, so it can
/// be handed to [`UninitVec::insert`](crate::UninitVec::insert) and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Before the element at this index
    At(usize),
    /// After the last element
    End,
}

impl From<usize> for Position {
    fn from(index: usize) -> Self { Self::At(index) }
}

/// A bidirectional position over the elements of an [`UninitVec`](crate::UninitVec).
///
/// The direction `D` is [`Forward`] or [`Reverse`]; the access `A` is [`Shared`]
/// (read-only, `Copy`, and an [`Iterator`]) or [`Unique`] (read-write).
///
/// Every cursor that has run off its range, and every cursor over a vector
/// that owns no block, is *null*. All null cursors are equal to each other,
/// whichever vector they came from.
///
/// ```rust
/// use uninit_vec::UninitVec;
///
/// let a = UninitVec::<u8>::new();
/// let b: UninitVec<u8> = [1, 2].into();
///
/// assert!(a.end() == b.end());
/// assert!(b.begin() + 2 == b.end());
/// assert!(b.rbegin().copied().eq([2, 1]));
/// ```
pub struct Cursor<'a, T: 'a, D: Direction = Forward, A: Access = Shared> {
    base: Option<NonNull<T>>,
    current: usize,
    len: usize,
    _marker: PhantomData<(D, A::Ref<'a, T>)>,
}

/// A read-only cursor that walks front-to-back
pub type ForwardCursor<'a, T> = Cursor<'a, T, Forward, Shared>;
/// A read-write cursor that walks front-to-back
pub type ForwardCursorMut<'a, T> = Cursor<'a, T, Forward, Unique>;
/// A read-only cursor that walks back-to-front
pub type ReverseCursor<'a, T> = Cursor<'a, T, Reverse, Shared>;
/// A read-write cursor that walks back-to-front
pub type ReverseCursorMut<'a, T> = Cursor<'a, T, Reverse, Unique>;

impl<'a, T, D: Direction, A: Access> Cursor<'a, T, D, A> {
    /// # Safety
    ///
    /// If `base` is `Some`, it must point to at least `len` valid slots
    /// that stay valid (and unaliased, for `Unique`) for `'a`, and
    /// `current` must be in `0..=len`
    pub(crate) unsafe fn from_raw_parts(base: Option<NonNull<T>>, current: usize, len: usize) -> Self {
        debug_assert!(
            current <= len,
            "Tried to create a cursor at {} over {} elements! This is UB in release mode",
            current,
            len
        );

        Self {
            base,
            current,
            len,
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// See [`Cursor::from_raw_parts`]
    pub(crate) unsafe fn first(base: Option<NonNull<T>>, len: usize) -> Self {
        unsafe { Self::from_raw_parts(base, D::first(len), len) }
    }

    /// # Safety
    ///
    /// See [`Cursor::from_raw_parts`]
    pub(crate) unsafe fn sentinel(base: Option<NonNull<T>>, len: usize) -> Self {
        unsafe { Self::from_raw_parts(base, D::sentinel(len), len) }
    }

    /// The canonical null cursor, which belongs to no vector
    pub fn null() -> Self {
        // Safety: a cursor without a base never dereferences
        unsafe { Self::from_raw_parts(None, 0, 0) }
    }

    /// Returns true if the cursor denotes no element: it is at the end of its
    /// range, or its vector owns no block.
    pub fn is_null(&self) -> bool { self.base.is_none() || self.current == D::sentinel(self.len) }

    /// The index of the element this cursor denotes, or `None` if it is null
    pub fn index(&self) -> Option<usize> {
        if self.is_null() {
            None
        } else {
            Some(D::slot(self.current))
        }
    }

    /// The number of elements left to visit, including the one denoted
    pub fn remaining(&self) -> usize {
        if self.base.is_none() {
            0
        } else {
            D::remaining(self.current, self.len)
        }
    }

    /// Step to the next element in iteration order. A null cursor stays put.
    pub fn move_next(&mut self) {
        if !self.is_null() {
            self.current = D::advance(self.current, 1, self.len);
        }
    }

    /// A reference to the denoted element, or `None` if the cursor is null
    pub fn get(&self) -> Option<&T> {
        // Safety: `slot` only returns an index for a non-null cursor,
        // and that index is in bounds of the `len` valid slots behind `base`
        self.slot().map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    /// The signed number of elements from `origin` to `self` in iteration order.
    ///
    /// Returns `0` if either cursor belongs to a vector that owns no block.
    pub fn distance(&self, origin: &Self) -> isize {
        if self.base.is_none() || origin.base.is_none() {
            0
        } else {
            D::distance(self.current, origin.current)
        }
    }

    fn slot(&self) -> Option<NonNull<T>> {
        let index = self.index()?;
        let base = self.base?;
        // Safety: a non-null cursor denotes an index less than `len`
        Some(unsafe { NonNull::new_unchecked(base.as_ptr().add(index)) })
    }

    fn with_current(self, current: usize) -> Self { Self { current, ..self } }

    fn into_sentinel(self) -> Self {
        let sentinel = D::sentinel(self.len);
        self.with_current(sentinel)
    }
}

impl<'a, T, A: Access> Cursor<'a, T, Forward, A> {
    /// The insertion point in front of the denoted element;
    /// [`Position::End`] for a null cursor.
    pub fn to_position(&self) -> Position {
        match self.index() {
            Some(index) => Position::At(index),
            None => Position::End,
        }
    }
}

impl<'a, T, D: Direction> Cursor<'a, T, D, Shared> {
    /// A reference to the denoted element that lives as long as the vector borrow
    pub fn into_ref(self) -> Option<&'a T> {
        // Safety: shared cursors are created from a `&'a UninitVec<T>`
        self.slot().map(|ptr| unsafe { &*ptr.as_ptr() })
    }
}

impl<'a, T, D: Direction> Cursor<'a, T, D, Unique> {
    /// A mutable reference to the denoted element, or `None` if the cursor is null
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // Safety: unique cursors are created from a `&'a mut UninitVec<T>`,
        // and `&mut self` keeps this the only live reference into it
        self.slot().map(|ptr| unsafe { &mut *ptr.as_ptr() })
    }

    /// A mutable reference to the denoted element that lives as long as the vector borrow
    pub fn into_mut(self) -> Option<&'a mut T> {
        // Safety: the cursor is consumed, so nothing else can reach this slot for `'a`
        self.slot().map(|ptr| unsafe { &mut *ptr.as_ptr() })
    }

    /// Reborrow as a read-only cursor at the same position
    pub fn as_shared(&self) -> Cursor<'_, T, D, Shared> {
        // Safety: the shared cursor borrows `self`, so no writes can happen through it meanwhile
        unsafe { Cursor::from_raw_parts(self.base, self.current, self.len) }
    }
}

impl<'a, T, D: Direction> From<Cursor<'a, T, D, Unique>> for Cursor<'a, T, D, Shared> {
    fn from(cursor: Cursor<'a, T, D, Unique>) -> Self {
        // Safety: giving up write access is always allowed
        unsafe { Cursor::from_raw_parts(cursor.base, cursor.current, cursor.len) }
    }
}

impl<T, D: Direction> Clone for Cursor<'_, T, D, Shared> {
    fn clone(&self) -> Self { *self }
}

impl<T, D: Direction> Copy for Cursor<'_, T, D, Shared> {}

impl<T, D: Direction, A: Access> Add<usize> for Cursor<'_, T, D, A> {
    type Output = Self;

    fn add(self, n: usize) -> Self {
        if self.is_null() {
            self.into_sentinel()
        } else {
            let current = D::advance(self.current, n, self.len);
            self.with_current(current)
        }
    }
}

impl<T, D: Direction, A: Access> Sub<usize> for Cursor<'_, T, D, A> {
    type Output = Self;

    fn sub(self, n: usize) -> Self {
        if self.is_null() {
            self.into_sentinel()
        } else {
            let current = D::retreat(self.current, n, self.len);
            self.with_current(current)
        }
    }
}

impl<T, D: Direction, A: Access> AddAssign<usize> for Cursor<'_, T, D, A> {
    fn add_assign(&mut self, n: usize) {
        if self.is_null() {
            self.current = D::sentinel(self.len);
        } else {
            self.current = D::advance(self.current, n, self.len);
        }
    }
}

impl<T, D: Direction, A: Access> SubAssign<usize> for Cursor<'_, T, D, A> {
    fn sub_assign(&mut self, n: usize) {
        if self.is_null() {
            self.current = D::sentinel(self.len);
        } else {
            self.current = D::retreat(self.current, n, self.len);
        }
    }
}

impl<T, D: Direction, A: Access> Sub for Cursor<'_, T, D, A> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize { self.distance(&origin) }
}

impl<T, D: Direction, A: Access> PartialEq for Cursor<'_, T, D, A> {
    fn eq(&self, other: &Self) -> bool {
        (self.is_null() && other.is_null()) || (self.base == other.base && self.current == other.current)
    }
}

impl<T, D: Direction, A: Access> Eq for Cursor<'_, T, D, A> {}

impl<T, D: Direction, A: Access> PartialOrd for Cursor<'_, T, D, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.base == other.base {
            Some(D::order(self.current, other.current))
        } else {
            None
        }
    }
}

impl<T, D: Direction, A: Access> fmt::Debug for Cursor<'_, T, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some(index) => f.debug_tuple("Cursor").field(&index).finish(),
            None => f.write_str("Cursor(null)"),
        }
    }
}

impl<'a, T, D: Direction> Iterator for Cursor<'a, T, D, Shared> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.into_ref()?;
        self.move_next();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<T, D: Direction> ExactSizeIterator for Cursor<'_, T, D, Shared> {}
impl<T, D: Direction> FusedIterator for Cursor<'_, T, D, Shared> {}
