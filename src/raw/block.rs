use crate::raw::{capacity::capacity_overflow, AllocError};

use alloc::alloc::{alloc_zeroed, dealloc, handle_alloc_error};
use core::{alloc::Layout, fmt, mem::size_of, ptr::NonNull};

/// An owned, fixed-size allocation of `capacity` slots of `T`.
///
/// A block never constructs, drops or writes its slots after allocation. Fresh
/// blocks come straight from the allocator's zeroed allocation, so every slot
/// always holds *some* bit pattern; which one is unspecified. Zero-sized types
/// never touch the allocator.
///
/// A block with capacity `0` owns nothing and its pointer is null.
pub struct Block<T> {
    ptr: Option<NonNull<T>>,
    capacity: usize,
}

unsafe impl<T: Send> Send for Block<T> {}
unsafe impl<T: Sync> Sync for Block<T> {}

#[derive(Clone, Copy)]
enum OnFailure {
    Abort,
    Error,
}

impl<T> Block<T> {
    /// Create a new block that owns no allocation
    pub const fn new() -> Self { Self { ptr: None, capacity: 0 } }

    /// Create a new block with exactly `capacity` slots
    ///
    /// # Panic/Abort
    ///
    /// Panics if the size of the block overflows `isize::MAX` bytes,
    /// and aborts through [`handle_alloc_error`] if the allocator fails
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::allocate(capacity, OnFailure::Abort) {
            Ok(block) => block,
            Err(AllocError) => capacity_overflow(),
        }
    }

    /// Create a new block with exactly `capacity` slots
    ///
    /// # Errors
    ///
    /// If the layout is too large or the allocator fails, returns `Err(AllocError)`
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::allocate(capacity, OnFailure::Error)
    }

    fn allocate(capacity: usize, on_failure: OnFailure) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::new())
        }

        if size_of::<T>() == 0 {
            return Ok(Self {
                ptr: Some(NonNull::dangling()),
                capacity,
            })
        }

        let layout = match (Layout::array::<T>(capacity), on_failure) {
            (Ok(layout), _) => layout,
            (Err(_), OnFailure::Abort) => capacity_overflow(),
            (Err(_), OnFailure::Error) => return Err(AllocError),
        };

        // Safety: `T` is not zero-sized and `capacity` is non-zero, so the layout is non-empty
        let ptr = unsafe { alloc_zeroed(layout) };

        match (NonNull::new(ptr.cast::<T>()), on_failure) {
            (Some(ptr), _) => Ok(Self {
                ptr: Some(ptr),
                capacity,
            }),
            (None, OnFailure::Abort) => handle_alloc_error(layout),
            (None, OnFailure::Error) => Err(AllocError),
        }
    }

    /// The number of slots in this block
    pub fn capacity(&self) -> usize { self.capacity }

    /// A pointer to the first slot, or `None` if the block owns no allocation
    pub fn as_non_null(&self) -> Option<NonNull<T>> { self.ptr }

    /// A pointer to the first slot, null if the block owns no allocation
    pub fn as_ptr(&self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => core::ptr::null_mut(),
        }
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self { Self::new() }
}

impl<T> fmt::Debug for Block<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("ptr", &self.as_ptr())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr {
            if size_of::<T>() != 0 {
                // Safety: this is the layout the block was allocated with, which was
                // already checked by `Layout::array` when the block was created
                unsafe {
                    let layout = Layout::from_size_align_unchecked(
                        size_of::<T>().wrapping_mul(self.capacity),
                        core::mem::align_of::<T>(),
                    );
                    dealloc(ptr.as_ptr().cast(), layout);
                }
            }
        }
    }
}
