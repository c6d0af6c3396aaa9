//! The raw backing block that holds the slots of an [`UninitVec`](crate::UninitVec)

mod block;
pub(crate) mod capacity;

pub use block::Block;

use core::fmt;

/// Error on failure to allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;
/// Result of an allocation
pub type AllocResult = Result<(), AllocError>;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("memory allocation failed") }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}
