#![cfg_attr(not(feature = "std"), no_std)]
#![allow(unused_unsafe)]
#![forbid(missing_docs, clippy::missing_safety_doc)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

//! A growable vector that never initializes the slots it exposes.
//!
//! [`UninitVec`] treats its storage as raw bytes. Growing the vector, by
//! [`resize`](UninitVec::resize) or [`set_len`](UninitVec::set_len), only moves the
//! length: whatever bytes already sit in the newly exposed slots become the
//! new elements. Elements are moved and copied with bulk memory copies, and
//! nothing is ever dropped, which is why the element type must be [`Element`]:
//! `Copy`, and valid for any bit pattern that the allocator or an earlier
//! element may have left behind.
//!
//! # Basic Usage
//!
//! ```rust
//! use uninit_vec::UninitVec;
//!
//! let mut vec = UninitVec::new();
//! for i in 0..10 {
//!     vec.push(i);
//! }
//!
//! vec.resize(5);
//! assert_eq!(vec, [0, 1, 2, 3, 4]);
//!
//! // still within capacity, so the old elements come back
//! vec.resize(10);
//! assert_eq!(vec, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```
//!
//! # Growth
//!
//! * [`reserve`](UninitVec::reserve) allocates exactly the requested capacity
//! * [`resize`](UninitVec::resize) past the capacity allocates the requested
//!     length rounded up to a multiple of 8
//! * inserting past the capacity allocates twice the required length,
//!     rounded up to a multiple of 8
//!
//! The capacity never shrinks, except by dropping, moving out of, or
//! overwriting the vector.
//!
//! # Cursors
//!
//! [`begin`](UninitVec::begin), [`end`](UninitVec::end), [`rbegin`](UninitVec::rbegin)
//! and [`rend`](UninitVec::rend) (and their `_mut` versions) hand out
//! [`Cursor`]s, bidirectional positions with a canonical null state.
//! See [`Cursor`] for details.
//!
//! # Features
//!
//! * `std` (default) - implements [`std::io::Write`] for `UninitVec<u8>` and
//!     [`std::error::Error`] for [`AllocError`]
//!
//! This crate is `no_std` compatible (it only needs `alloc`), just turn off all default features.

extern crate alloc;

use core::{
    mem,
    ops::{Bound, Deref, DerefMut, RangeBounds},
    ptr, slice,
};

mod impls;

pub mod iter;
mod raw;

pub use iter::{Cursor, ForwardCursor, ForwardCursorMut, Position, ReverseCursor, ReverseCursorMut};
pub use raw::{AllocError, AllocResult};

use raw::{capacity, Block};

/// A type that can live in an [`UninitVec`].
///
/// Elements are copied as plain bytes, never dropped, and an all-zero bit
/// pattern must be a valid value, since freshly allocated slots are exposed
/// without being written. This is implemented for every `Copy` type that
/// implements [`zerocopy::FromZeros`].
///
/// The price of that guarantee is paid once per allocation: every new block
/// comes from the allocator already zeroed (`alloc_zeroed`), which is often
/// free for fresh pages but costs a memset otherwise. After that, growing the
/// length never writes a slot.
pub trait Element: Copy + zerocopy::FromZeros {}

impl<T: Copy + zerocopy::FromZeros> Element for T {}

/// A growable, contiguous vector that never initializes the slots it exposes.
///
/// Every slot below [`capacity`](UninitVec::capacity) always holds a valid
/// `T`, but the slots past [`len`](UninitVec::len) hold unspecified values:
/// zeroes from a fresh allocation, or whatever an earlier element left there.
pub struct UninitVec<T> {
    len: usize,
    block: Block<T>,
}

impl<T: Element> Deref for UninitVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        match self.block.as_non_null() {
            // Every slot below `capacity` holds a valid `T`, and `len <= capacity`
            Some(ptr) => unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) },
            None => &[],
        }
    }
}

impl<T: Element> DerefMut for UninitVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.block.as_non_null() {
            // Every slot below `capacity` holds a valid `T`, and `len <= capacity`
            Some(ptr) => unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.len) },
            None => &mut [],
        }
    }
}

impl<T> UninitVec<T> {
    /// Create a new empty `UninitVec`, without allocating
    pub const fn new() -> Self {
        Self {
            len: 0,
            block: Block::new(),
        }
    }

    /// Create a new empty `UninitVec` with exactly the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            block: Block::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the vector
    pub fn len(&self) -> usize { self.len }

    /// Returns the number of elements the vector can hold without reallocating
    pub fn capacity(&self) -> usize { self.block.capacity() }

    /// Returns true if and only if the vector contains no elements.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns true if and only if the vector's length is equal to it's capacity.
    pub fn is_full(&self) -> bool { self.len == self.capacity() }

    /// Returns the length of the spare capacity of the `UninitVec`
    pub fn remaining_capacity(&self) -> usize { self.capacity().wrapping_sub(self.len) }

    /// Returns a raw pointer to the backing block.
    ///
    /// Unlike the slice's `as_ptr`, this is null if the vector owns no block.
    pub fn as_ptr(&self) -> *const T { self.block.as_ptr() }

    /// Returns a raw mutable pointer to the backing block.
    ///
    /// Unlike the slice's `as_mut_ptr`, this is null if the vector owns no block.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.block.as_ptr() }

    /// Exchange the contents of two vectors, blocks included, without touching any element
    pub fn swap_with(&mut self, other: &mut Self) { mem::swap(self, other); }

    /// Move the contents out of this vector, leaving it empty and without a block.
    ///
    /// ```rust
    /// # use uninit_vec::UninitVec;
    /// let mut a: UninitVec<u32> = [1, 2, 3].into();
    /// let b = a.take();
    ///
    /// assert!(a.is_empty());
    /// assert!(a.as_ptr().is_null());
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Self { mem::replace(self, Self::new()) }

    /// Shortens the vector to `len` elements.
    ///
    /// If len is greater than the vector's current length, this has no effect.
    /// The capacity and the bytes in the vacated slots are left untouched.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Clears the vector, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the vector.
    pub fn clear(&mut self) { self.len = 0; }

    /// Replace the block with `block`, carrying over the first `len` elements.
    /// The old block is only released once the new one has been adopted.
    fn relocate(&mut self, block: Block<T>) {
        debug_assert!(block.capacity() >= self.len);

        if self.len != 0 {
            // Safety
            //
            // * the old block holds `len` elements
            // * the new block has room for at least `len` elements
            // * two distinct blocks never overlap
            unsafe {
                ptr::copy_nonoverlapping(self.block.as_ptr(), block.as_ptr(), self.len);
            }
        }

        let old = mem::replace(&mut self.block, block);
        drop(old);
    }
}

impl<T: Element> UninitVec<T> {
    /// Set the length of a vector
    ///
    /// Growing the length exposes the slots past the old length as they are:
    /// no bytes are written. Every slot below the capacity holds a valid `T`,
    /// so this is safe, but the values of newly exposed slots are unspecified.
    ///
    /// # Panics
    /// If the length is set to be larger than the capacity
    pub fn set_len(&mut self, len: usize) {
        #[cold]
        #[inline(never)]
        fn set_len_fail(len: usize, capacity: usize) -> ! {
            panic!("Tried to set the length to {}, but the capacity is {}", len, capacity)
        }

        if len > self.capacity() {
            set_len_fail(len, self.capacity())
        }

        self.len = len;
    }

    /// Extracts a slice containing the entire vector.
    ///
    /// Equivalent to &s[..].
    pub fn as_slice(&self) -> &[T] { self }

    /// Extracts a mutable slice containing the entire vector.
    ///
    /// Equivalent to &mut s[..].
    pub fn as_mut_slice(&mut self) -> &mut [T] { self }

    /// Returns the slots between the length and the capacity.
    ///
    /// Writes to these slots survive a later [`set_len`](UninitVec::set_len)
    /// or [`resize`](UninitVec::resize) that stays within the capacity.
    ///
    /// ```
    /// # use uninit_vec::UninitVec;
    /// let mut vec = UninitVec::with_capacity(4);
    /// vec.push(1_u16);
    ///
    /// vec.spare_capacity_mut()[..2].copy_from_slice(&[2, 3]);
    /// vec.set_len(3);
    ///
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn spare_capacity_mut(&mut self) -> &mut [T] {
        match self.block.as_non_null() {
            // Every slot below `capacity` holds a valid `T`
            Some(ptr) => unsafe {
                slice::from_raw_parts_mut(ptr.as_ptr().add(self.len), self.remaining_capacity())
            },
            None => &mut [],
        }
    }

    /// Makes sure the vector can hold at least `capacity` elements in total.
    ///
    /// If it can't already, this allocates a block of *exactly* `capacity`
    /// slots and moves the elements over. The length is unchanged.
    ///
    /// # Panics
    ///
    /// May panic or abort if it isn't possible to allocate `capacity` slots
    pub fn reserve(&mut self, capacity: usize) {
        if self.capacity() < capacity {
            self.relocate(Block::with_capacity(capacity));
        }
    }

    /// Makes sure the vector can hold at least `capacity` elements in total,
    /// and returns `Err(_)` if it's not possible to allocate them
    ///
    /// # Errors
    ///
    /// If the allocation fails, returns `Err(AllocError)` and leaves the vector unchanged
    pub fn try_reserve(&mut self, capacity: usize) -> AllocResult {
        if self.capacity() < capacity {
            self.relocate(Block::try_with_capacity(capacity)?);
        }

        Ok(())
    }

    /// Makes room for `additional` more elements by the insert growth rule,
    /// reporting failure instead of aborting
    pub(crate) fn try_grow(&mut self, additional: usize) -> AllocResult {
        if self.remaining_capacity() >= additional {
            return Ok(())
        }

        let capacity = capacity::try_for_insert(self.len, additional).ok_or(AllocError)?;
        self.relocate(Block::try_with_capacity(capacity)?);
        Ok(())
    }

    /// Sets the length of the vector to `new_len` without initializing anything.
    ///
    /// * Within the capacity, this only moves the length, so slots exposed
    ///     again after a shrink hold their old values.
    /// * Past the capacity, the elements move to a block of `new_len` rounded
    ///     up to a multiple of 8 slots, and the slots past the old length hold
    ///     unspecified values.
    ///
    /// # Panics
    ///
    /// May panic or abort if the new block can't be allocated
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            self.relocate(Block::with_capacity(capacity::for_resize(new_len)));
        }

        self.len = new_len;
    }

    /// Appends an element to the back of the vector.
    ///
    /// `value` is taken by value, so pushing one of the vector's own elements
    /// is fine even when it has to reallocate:
    ///
    /// ```rust
    /// # use uninit_vec::UninitVec;
    /// let mut vec: UninitVec<u8> = [7].into();
    /// vec.push(vec[0]);
    /// assert_eq!(vec, [7, 7]);
    /// ```
    ///
    /// # Panic
    ///
    /// May panic or abort if it has to reallocate and the new block can't be allocated
    pub fn push(&mut self, value: T) -> &mut T {
        let index = self.len;

        // Safety
        //
        // * `value` is a local, so it can't alias the block
        // * `index == len`
        unsafe { self.insert_raw(index, &value, 1) };

        // Safety: `insert_raw` just wrote `index`
        unsafe { &mut *self.block.as_ptr().add(index) }
    }

    /// Removes the last element from a vector and returns it,
    /// Returns `None` if the collection is empty
    ///
    /// The vacated slot keeps its value until something overwrites it.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            self.len -= 1;
            // Safety: the slot was in bounds before the length was decremented
            Some(unsafe { self.block.as_ptr().add(self.len).read() })
        }
    }

    /// Inserts `value` in front of `at`, shifting all elements after it to the right.
    ///
    /// Returns a cursor at the element after `value`; see [`UninitVec::insert_slice`].
    ///
    /// # Panics
    ///
    /// * Panics if `at` is an index greater than the length
    /// * May panic or abort if it has to reallocate and the new block can't be allocated
    pub fn insert<P: Into<Position>>(&mut self, at: P, value: T) -> ForwardCursorMut<'_, T> {
        self.insert_slice(at, slice::from_ref(&value))
    }

    /// Inserts copies of `values` in front of `at`, shifting all elements after them to the right.
    ///
    /// If the spare capacity can hold `values`, the tail is moved over in place.
    /// Otherwise everything moves to a new block twice the size of the new
    /// length (rounded up to a multiple of 8).
    ///
    /// Returns a cursor at the element right after the inserted ones (null if
    /// they were inserted at the end). Inserting an empty slice does nothing
    /// and returns the null cursor, wherever `at` is.
    ///
    /// ```rust
    /// # use uninit_vec::{Position, UninitVec};
    /// let mut vec: UninitVec<i32> = [0, 1, 2, 3].into();
    ///
    /// let next = vec.insert_slice(Position::At(2), &[10, 20]);
    /// assert_eq!(next.get(), Some(&2));
    ///
    /// vec.insert_slice(Position::End, &[30]);
    /// assert_eq!(vec, [0, 1, 10, 20, 2, 3, 30]);
    /// ```
    ///
    /// # Panics
    ///
    /// * Panics if `at` is an index greater than the length
    /// * May panic or abort if it has to reallocate and the new block can't be allocated
    pub fn insert_slice<P: Into<Position>>(&mut self, at: P, values: &[T]) -> ForwardCursorMut<'_, T> {
        if values.is_empty() {
            return Cursor::null()
        }

        let index = self.resolve(at.into());

        // Safety
        //
        // * `values` is a shared borrow that lives alongside `&mut self`, so it can't alias the block
        // * `resolve` checks that `index <= len`
        unsafe {
            self.insert_raw(index, values.as_ptr(), values.len());
        }

        let next = index + values.len();
        // Safety: `next <= len`, and the cursor borrows `self` mutably
        unsafe { Cursor::from_raw_parts(self.block.as_non_null(), next, self.len) }
    }

    /// Appends copies of all elements in `values`
    pub fn extend_from_slice(&mut self, values: &[T]) { self.insert_slice(Position::End, values); }

    /// Appends copies of the elements in `range` of this vector.
    ///
    /// The source elements are read before anything moves, so this works even
    /// when the vector has to reallocate.
    ///
    /// ```rust
    /// # use uninit_vec::UninitVec;
    /// let mut vec: UninitVec<u8> = [1, 2, 3].into();
    /// vec.extend_from_within(..2);
    /// assert_eq!(vec, [1, 2, 3, 1, 2]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or decreasing
    pub fn extend_from_within<R: RangeBounds<usize>>(&mut self, range: R) {
        let (start, end) = bounds(&range, self.len);

        if start != end {
            let index = self.len;
            // Safety
            //
            // * `start..end` is in bounds, so the source is valid to read
            // * appending moves nothing, and the growth path reads the source
            //   before the old block is released
            unsafe {
                let src = self.block.as_ptr().add(start);
                self.insert_raw(index, src, end - start);
            }
        }
    }

    fn resolve(&self, at: Position) -> usize {
        #[cold]
        #[inline(never)]
        fn insert_fail(index: usize, len: usize) -> ! {
            panic!("Tried to insert at {}, but length is {}", index, len);
        }

        match at {
            Position::End => self.len,
            Position::At(index) if index <= self.len => index,
            Position::At(index) => insert_fail(index, self.len),
        }
    }

    /// Inserts `count` elements copied from `src` in front of `index`.
    /// This is the only place the vector grows by more than a length change.
    ///
    /// # Safety
    ///
    /// * `index <= len`
    /// * `src` must be valid to read `count` elements
    /// * if `src` points into this vector's block, then `index == len`
    ///     and the source must lie below `len`
    unsafe fn insert_raw(&mut self, index: usize, src: *const T, count: usize) {
        debug_assert!(
            index <= self.len,
            "Tried to insert at {}, but length is {}! This is UB in release mode",
            index,
            self.len
        );

        let len = self.len;
        let tail = len - index;

        if self.remaining_capacity() >= count {
            // Safety
            //
            // * the spare capacity holds `count` more elements, so the tail can move right
            // * `ptr::copy` handles the overlap between the old and new tail
            // * the source doesn't overlap `index..index + count`, which was the tail or spare capacity
            unsafe {
                let ptr = self.block.as_ptr().add(index);
                ptr::copy(ptr, ptr.add(count), tail);
                ptr::copy_nonoverlapping(src, ptr, count);
            }
        } else {
            let block = Block::with_capacity(capacity::for_insert(len, count));
            // Safety
            //
            // * the new block has room for `len + count` elements
            // * the old block holds `len` elements, and may only be touched when it is allocated,
            //   which it is whenever `index` or `tail` is non-zero
            unsafe {
                let old = self.block.as_ptr();
                let new = block.as_ptr();
                if index != 0 {
                    ptr::copy_nonoverlapping(old, new, index);
                }
                ptr::copy_nonoverlapping(src, new.add(index), count);
                if tail != 0 {
                    ptr::copy_nonoverlapping(old.add(index), new.add(index + count), tail);
                }
            }

            let old = mem::replace(&mut self.block, block);
            drop(old);
        }

        self.len = len + count;
    }

    /// A read-only cursor at the first element
    pub fn begin(&self) -> ForwardCursor<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self`
        unsafe { Cursor::first(self.block.as_non_null(), self.len) }
    }

    /// A read-only cursor past the last element
    pub fn end(&self) -> ForwardCursor<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self`
        unsafe { Cursor::sentinel(self.block.as_non_null(), self.len) }
    }

    /// A read-write cursor at the first element
    pub fn begin_mut(&mut self) -> ForwardCursorMut<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self` mutably
        unsafe { Cursor::first(self.block.as_non_null(), self.len) }
    }

    /// A read-write cursor past the last element
    pub fn end_mut(&mut self) -> ForwardCursorMut<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self` mutably
        unsafe { Cursor::sentinel(self.block.as_non_null(), self.len) }
    }

    /// A read-only cursor at the last element, walking towards the front
    pub fn rbegin(&self) -> ReverseCursor<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self`
        unsafe { Cursor::first(self.block.as_non_null(), self.len) }
    }

    /// A read-only cursor before the first element, walking towards the front
    pub fn rend(&self) -> ReverseCursor<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self`
        unsafe { Cursor::sentinel(self.block.as_non_null(), self.len) }
    }

    /// A read-write cursor at the last element, walking towards the front
    pub fn rbegin_mut(&mut self) -> ReverseCursorMut<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self` mutably
        unsafe { Cursor::first(self.block.as_non_null(), self.len) }
    }

    /// A read-write cursor before the first element, walking towards the front
    pub fn rend_mut(&mut self) -> ReverseCursorMut<'_, T> {
        // Safety: the block holds `len` elements, and the cursor borrows `self` mutably
        unsafe { Cursor::sentinel(self.block.as_non_null(), self.len) }
    }
}

fn bounds<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    #[cold]
    #[inline(never)]
    fn range_fail() -> ! { panic!("Tried to use an out of bounds or decreasing range") }

    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => (start, end),
        _ => range_fail(),
    }
}
