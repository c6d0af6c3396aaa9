use std::alloc::System;

use mockalloc::Mockalloc;
use uninit_vec::{AllocError, UninitVec};

#[global_allocator]
static ALLOCATOR: Mockalloc<System> = Mockalloc(System);

#[mockalloc::test]
fn push_then_iterate() {
    let mut vec = UninitVec::new();

    for i in 1..=5_u32 {
        vec.push(i);
    }

    assert_eq!(vec.len(), 5);
    assert!(vec.begin().copied().eq([1, 2, 3, 4, 5]));
    assert!(vec.rbegin().copied().eq([5, 4, 3, 2, 1]));
    assert_eq!(vec, [1, 2, 3, 4, 5]);
}

#[mockalloc::test]
fn regrow_within_capacity_exposes_old_elements() {
    let mut vec = UninitVec::new();

    for i in 0..10_i32 {
        vec.push(i);
    }

    let ptr = vec.as_ptr();
    assert!(vec.capacity() >= 10);

    vec.resize(5);
    assert_eq!(vec, [0, 1, 2, 3, 4]);

    vec.resize(10);
    assert_eq!(vec.as_ptr(), ptr);
    assert!(vec.begin().copied().eq(0..10));
}

#[mockalloc::test]
fn reserve_prevents_reallocation() {
    let mut vec = UninitVec::<u64>::new();
    vec.reserve(20);

    assert_eq!(vec.capacity(), 20);
    assert!(vec.is_empty());

    let ptr = vec.as_ptr();
    for i in 0..20 {
        vec.push(i);
        assert_eq!(vec.as_ptr(), ptr);
    }

    assert!(vec.is_full());
    assert_eq!(vec.capacity(), 20);
}

#[mockalloc::test]
fn reserve_keeps_elements_and_never_shrinks() {
    let mut vec: UninitVec<u8> = [1, 2, 3].into();
    let capacity = vec.capacity();
    let ptr = vec.as_ptr();

    vec.reserve(2);
    assert_eq!(vec.capacity(), capacity);
    assert_eq!(vec.as_ptr(), ptr);

    vec.reserve(100);
    assert_eq!(vec.capacity(), 100);
    assert_eq!(vec, [1, 2, 3]);
}

#[mockalloc::test]
fn try_reserve_reports_impossible_layouts() {
    let mut vec: UninitVec<u64> = [1, 2].into();
    let capacity = vec.capacity();

    assert_eq!(vec.try_reserve(usize::MAX), Err(AllocError));
    assert_eq!(vec.capacity(), capacity);
    assert_eq!(vec, [1, 2]);

    assert_eq!(vec.try_reserve(64), Ok(()));
    assert_eq!(vec.capacity(), 64);
}

#[mockalloc::test]
fn resize_past_capacity_rounds_to_eight() {
    let mut vec = UninitVec::<u16>::new();

    vec.resize(10);
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.capacity(), 16);

    vec.truncate(0);
    vec.extend_from_slice(&[7, 8, 9]);
    vec.resize(17);
    assert_eq!(vec.len(), 17);
    assert_eq!(vec.capacity(), 24);
    assert_eq!(vec[..3], [7, 8, 9]);
}

#[mockalloc::test]
fn resize_to_exact_multiple() {
    let mut vec = UninitVec::<u8>::new();
    vec.resize(8);
    assert_eq!(vec.capacity(), 8);
    vec.resize(0);
    assert_eq!(vec.capacity(), 8);
    assert!(vec.is_empty());
}

#[mockalloc::test]
fn push_growth_capacities() {
    let mut vec = UninitVec::<u32>::new();
    assert_eq!(vec.capacity(), 0);
    assert!(vec.as_ptr().is_null());

    vec.push(0);
    assert_eq!(vec.capacity(), 16);

    for i in 1..16 {
        vec.push(i);
    }
    assert_eq!(vec.capacity(), 16);

    vec.push(16);
    assert_eq!(vec.capacity(), 48);
    assert!(vec.iter().copied().eq(0..17));
}

#[mockalloc::test]
fn pop_leaves_the_slot_alone() {
    let mut vec = UninitVec::new();
    assert_eq!(vec.pop(), None::<u8>);

    vec.push(1_u8);
    vec.push(2);

    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec, [1]);

    vec.set_len(2);
    assert_eq!(vec, [1, 2]);

    vec.clear();
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.capacity(), 16);
}

#[test]
#[should_panic(expected = "Tried to set the length to 17, but the capacity is 16")]
fn set_len_past_capacity() {
    let mut vec = UninitVec::<u8>::new();
    vec.push(0);
    vec.set_len(17);
}

#[mockalloc::test]
fn spare_capacity_survives_set_len() {
    let mut vec = UninitVec::with_capacity(4);
    vec.push(1_u32);

    let spare = vec.spare_capacity_mut();
    assert_eq!(spare.len(), 3);
    spare.copy_from_slice(&[2, 3, 4]);

    vec.set_len(4);
    assert_eq!(vec, [1, 2, 3, 4]);
    assert!(vec.spare_capacity_mut().is_empty());
}

#[mockalloc::test]
fn spare_capacity_of_empty_vec() {
    let mut vec = UninitVec::<u32>::new();
    assert!(vec.spare_capacity_mut().is_empty());
}

#[mockalloc::test]
fn zero_sized_elements() {
    let mut vec = UninitVec::<()>::new();

    vec.push(());
    vec.push(());
    vec.extend_from_slice(&[(), ()]);

    assert_eq!(vec.len(), 4);
    assert_eq!(vec.capacity(), 16);
    assert!(!vec.as_ptr().is_null());
    assert_eq!(vec.pop(), Some(()));
}

#[mockalloc::test]
fn collect_and_extend() {
    let mut vec: UninitVec<u32> = (0..5).collect();
    assert_eq!(vec, [0, 1, 2, 3, 4]);

    vec.extend([5, 6].iter());
    vec.extend(7..9);
    assert_eq!(vec, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[mockalloc::test]
fn collect_follows_insert_growth() {
    let vec: UninitVec<u32> = (0..5).collect();
    assert_eq!(vec.capacity(), 16);

    let mut vec: UninitVec<u32> = (0..17).collect();
    assert_eq!(vec.capacity(), 48);

    let ptr = vec.as_ptr();
    vec.extend(17..48);
    assert_eq!(vec.as_ptr(), ptr);
    assert!(vec.is_full());
}

/// Claims far more items than it yields
struct Boastful(u8);

impl Iterator for Boastful {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.0 = self.0.checked_sub(1)?;
        Some(self.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
}

#[mockalloc::test]
fn extend_survives_an_unallocatable_size_hint() {
    let mut vec: UninitVec<u8> = [9].into();
    let capacity = vec.capacity();

    vec.extend(Boastful(3));

    assert_eq!(vec, [9, 2, 1, 0]);
    assert_eq!(vec.capacity(), capacity);
}

#[mockalloc::test]
fn into_iter_from_both_ends() {
    let vec: UninitVec<i64> = [1, 2, 3, 4].into();
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), [2, 3]);
    assert_eq!(iter.nth(5), None);
    assert_eq!(iter.next_back(), None);
}

#[mockalloc::test]
fn borrowed_iteration() {
    let mut vec: UninitVec<u8> = [1, 2, 3].into();

    for x in &mut vec {
        *x += 1;
    }

    let sum: u32 = (&vec).into_iter().map(|&x| u32::from(x)).sum();
    assert_eq!(sum, 9);
}

#[mockalloc::test]
fn comparisons_and_formatting() {
    let a: UninitVec<u8> = [1, 2, 3].into();
    let b: UninitVec<u8> = [1, 2, 4].into();

    assert!(a < b);
    assert_eq!(a, a.clone());
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(format!("{:?}", a), "[1, 2, 3]");
}

#[mockalloc::test]
fn write_appends_bytes() {
    use std::io::Write;

    let mut vec = UninitVec::<u8>::new();
    write!(vec, "hello {}", 42).unwrap();
    vec.flush().unwrap();

    assert_eq!(vec, *b"hello 42");
}
