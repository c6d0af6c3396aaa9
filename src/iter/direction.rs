//! Type-level parameters of a [`Cursor`](crate::iter::Cursor): which way it walks
//! and whether it may write.

use core::cmp::Ordering;

mod sealed {
    pub trait Sealed {}
}

/// The order in which a [`Cursor`](crate::iter::Cursor) visits the elements.
///
/// A cursor stores a `current` index in `0..=len`. A forward cursor denotes
/// the slot at `current` and ends at `len`. A reverse cursor denotes the slot
/// *before* `current` and ends at `0`, so the reverse begin sits where the
/// forward end does and vice versa.
pub trait Direction: sealed::Sealed {
    /// The `current` index of the first element
    fn first(len: usize) -> usize;

    /// The `current` index one past the last element, in iteration order
    fn sentinel(len: usize) -> usize;

    /// The slot denoted by a non-sentinel `current` index
    fn slot(current: usize) -> usize;

    /// Move `n` elements along the iteration order, clamped to `0..=len`
    fn advance(current: usize, n: usize, len: usize) -> usize;

    /// Move `n` elements against the iteration order, clamped to `0..=len`
    fn retreat(current: usize, n: usize, len: usize) -> usize;

    /// Compare two `current` indices in iteration order
    fn order(a: usize, b: usize) -> Ordering;

    /// The signed number of elements from `origin` to `current` in iteration order
    fn distance(current: usize, origin: usize) -> isize;

    /// The number of elements left before the sentinel
    fn remaining(current: usize, len: usize) -> usize;
}

/// Front-to-back iteration
#[derive(Debug)]
pub enum Forward {}

/// Back-to-front iteration
#[derive(Debug)]
pub enum Reverse {}

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Reverse {}

impl Direction for Forward {
    #[inline]
    fn first(_len: usize) -> usize { 0 }

    #[inline]
    fn sentinel(len: usize) -> usize { len }

    #[inline]
    fn slot(current: usize) -> usize { current }

    #[inline]
    fn advance(current: usize, n: usize, len: usize) -> usize { current.saturating_add(n).min(len) }

    #[inline]
    fn retreat(current: usize, n: usize, _len: usize) -> usize { current.saturating_sub(n) }

    #[inline]
    fn order(a: usize, b: usize) -> Ordering { a.cmp(&b) }

    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn distance(current: usize, origin: usize) -> isize { current.wrapping_sub(origin) as isize }

    #[inline]
    fn remaining(current: usize, len: usize) -> usize { len.saturating_sub(current) }
}

impl Direction for Reverse {
    #[inline]
    fn first(len: usize) -> usize { len }

    #[inline]
    fn sentinel(_len: usize) -> usize { 0 }

    #[inline]
    fn slot(current: usize) -> usize { current.wrapping_sub(1) }

    #[inline]
    fn advance(current: usize, n: usize, _len: usize) -> usize { current.saturating_sub(n) }

    #[inline]
    fn retreat(current: usize, n: usize, len: usize) -> usize { current.saturating_add(n).min(len) }

    // higher index, earlier element
    #[inline]
    fn order(a: usize, b: usize) -> Ordering { b.cmp(&a) }

    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn distance(current: usize, origin: usize) -> isize { origin.wrapping_sub(current) as isize }

    #[inline]
    fn remaining(current: usize, _len: usize) -> usize { current }
}

/// What a [`Cursor`](crate::iter::Cursor) may do with the slot it denotes
pub trait Access: sealed::Sealed {
    /// The borrow of the vector that a cursor with this access holds
    type Ref<'a, T: 'a>;
}

/// Read-only access, like `&T`
#[derive(Debug)]
pub enum Shared {}

/// Read-write access, like `&mut T`
#[derive(Debug)]
pub enum Unique {}

impl sealed::Sealed for Shared {}
impl sealed::Sealed for Unique {}

impl Access for Shared {
    type Ref<'a, T: 'a> = &'a T;
}

impl Access for Unique {
    type Ref<'a, T: 'a> = &'a mut T;
}
