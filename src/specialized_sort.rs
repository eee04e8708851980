//! Type-Specialized Quicksort
//!
//! The same randomized quicksort as `generic_sort`, written once for `i64`
//! and once for `String` with the comparison inlined as a direct `<` instead
//! of going through the [`Comparator`](crate::Comparator) capability. The
//! two bodies are deliberately kept structurally identical to the generic
//! one so the benchmark isolates the cost of the indirection and nothing
//! else.

use std::ops::Range;

use rand::Rng;

use crate::error::SortError;
use crate::generic_sort::check_range;

/// Sort a slice of integers in place, non-decreasing.
pub fn sort_ints<R: Rng>(v: &mut [i64], rng: &mut R) {
    sort_ints_rec(v, rng);
}

/// Sort `v[range]` of integers, validating bounds once up front.
pub fn sort_ints_range<R: Rng>(
    v: &mut [i64],
    range: Range<usize>,
    rng: &mut R,
) -> Result<(), SortError> {
    check_range(&range, v.len())?;
    sort_ints_rec(&mut v[range], rng);
    Ok(())
}

/// Sort a slice of strings in place, byte-wise lexicographic.
pub fn sort_strings<R: Rng>(v: &mut [String], rng: &mut R) {
    sort_strings_rec(v, rng);
}

/// Sort `v[range]` of strings, validating bounds once up front.
pub fn sort_strings_range<R: Rng>(
    v: &mut [String],
    range: Range<usize>,
    rng: &mut R,
) -> Result<(), SortError> {
    check_range(&range, v.len())?;
    sort_strings_rec(&mut v[range], rng);
    Ok(())
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

fn sort_ints_rec<R: Rng>(v: &mut [i64], rng: &mut R) {
    if v.len() <= 1 {
        return;
    }

    let pivot = rng.gen_range(0..v.len());
    v.swap(0, pivot);

    let mut last = 0;
    for i in 1..v.len() {
        if v[i] < v[0] {
            last += 1;
            v.swap(last, i);
        }
    }

    v.swap(0, last);

    let (left, right) = v.split_at_mut(last);
    sort_ints_rec(left, rng);
    sort_ints_rec(&mut right[1..], rng);
}

fn sort_strings_rec<R: Rng>(v: &mut [String], rng: &mut R) {
    if v.len() <= 1 {
        return;
    }

    let pivot = rng.gen_range(0..v.len());
    v.swap(0, pivot);

    let mut last = 0;
    for i in 1..v.len() {
        if v[i] < v[0] {
            last += 1;
            v.swap(last, i);
        }
    }

    v.swap(0, last);

    let (left, right) = v.split_at_mut(last);
    sort_strings_rec(left, rng);
    sort_strings_rec(&mut right[1..], rng);
}
