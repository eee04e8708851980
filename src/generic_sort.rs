//! Comparator-Generic Quicksort
//!
//! Randomized in-place quicksort parameterized by a [`Comparator`]. This is
//! the indirected half of the benchmark pair; `specialized_sort` runs the
//! identical algorithm with the comparison inlined.
//!
//! The partition is the Kernighan & Pike single-pass scheme: the pivot is
//! chosen uniformly at random, swapped to the front, and a boundary index
//! walks forward collecting every element strictly less than the pivot. The
//! random pivot avoids the O(n²) degeneration on sorted or adversarial
//! inputs; recursion depth can still reach O(n) in the worst case, which is
//! a known limitation rather than something engineered around here.
//!
//! Not stable: the pivot swaps can reorder equal elements.

use std::cmp::Ordering;
use std::ops::Range;

use rand::Rng;

use crate::comparator::Comparator;
use crate::error::SortError;

/// Sort the whole slice in place into non-decreasing order per `cmp`.
///
/// The pivot choice for each partition is drawn from `rng`; pass a seeded
/// `StdRng` for reproducible partitioning paths (the final order does not
/// depend on the pivots, only the work done to reach it).
pub fn sort<T, C, R>(v: &mut [T], cmp: &C, rng: &mut R)
where
    C: Comparator<T>,
    R: Rng,
{
    sort_rec(v, cmp, rng);
}

/// Sort `v[range]` in place, validating the bounds once up front.
///
/// Fails with [`SortError::InvalidRange`] when the range is inverted or
/// extends past the end of the slice. The recursion below never re-checks.
pub fn sort_range<T, C, R>(
    v: &mut [T],
    range: Range<usize>,
    cmp: &C,
    rng: &mut R,
) -> Result<(), SortError>
where
    C: Comparator<T>,
    R: Rng,
{
    check_range(&range, v.len())?;
    sort_rec(&mut v[range], cmp, rng);
    Ok(())
}

/// Check if a slice is ordered per `cmp`.
pub fn is_sorted_by<T, C: Comparator<T>>(v: &[T], cmp: &C) -> bool {
    v.windows(2).all(|w| cmp.compare(&w[0], &w[1]) != Ordering::Greater)
}

pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<(), SortError> {
    if range.start > range.end || range.end > len {
        return Err(SortError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

fn sort_rec<T, C, R>(v: &mut [T], cmp: &C, rng: &mut R)
where
    C: Comparator<T>,
    R: Rng,
{
    if v.len() <= 1 {
        return;
    }

    // Move a uniformly random pivot to the front.
    let pivot = rng.gen_range(0..v.len());
    v.swap(0, pivot);

    // Single-pass partition: everything strictly less than the pivot ends up
    // in v[1..=last], everything >= pivot in v[last+1..].
    let mut last = 0;
    for i in 1..v.len() {
        if cmp.compare(&v[i], &v[0]) == Ordering::Less {
            last += 1;
            v.swap(last, i);
        }
    }

    // Pivot into its final position.
    v.swap(0, last);

    let (left, right) = v.split_at_mut(last);
    sort_rec(left, cmp, rng);
    sort_rec(&mut right[1..], cmp, rng);
}
