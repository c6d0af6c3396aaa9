//! Growth policy for the backing block

/// Growth rounds every request up to a multiple of this many slots
pub(crate) const GROWTH_STEP: usize = 8;

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! { panic!("capacity overflow") }

/// Rounds `n` up to the next multiple of [`GROWTH_STEP`]
pub(crate) fn round_up(n: usize) -> usize {
    match n.checked_add(GROWTH_STEP - 1) {
        Some(n) => n & !(GROWTH_STEP - 1),
        None => capacity_overflow(),
    }
}

/// Capacity of the block allocated when `resize` outgrows the current one
pub(crate) fn for_resize(new_len: usize) -> usize { round_up(new_len) }

/// Capacity of the block allocated when inserting `additional` elements
/// into `len` does not fit
pub(crate) fn for_insert(len: usize, additional: usize) -> usize {
    match try_for_insert(len, additional) {
        Some(capacity) => capacity,
        None => capacity_overflow(),
    }
}

/// [`for_insert`], or `None` if the capacity overflows
pub(crate) fn try_for_insert(len: usize, additional: usize) -> Option<usize> {
    len.checked_add(additional)?
        .checked_add(GROWTH_STEP - 1)
        .map(|n| n & !(GROWTH_STEP - 1))?
        .checked_mul(2)
}
