//! Comparator Capability
//!
//! A comparator is a pure three-way ordering over a single element type. The
//! generic sort is parameterized by this trait; the specialized sorts inline
//! the equivalent comparison directly. Keeping the comparator statically
//! typed (rather than type-erased over boxed elements) means a mismatched
//! element type is a compile error, not a runtime failure.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be deterministic and side-effect free; partitioning
/// correctness depends on the relation being transitive and antisymmetric.
pub trait Comparator<T> {
    /// Compare two elements, returning `Less`, `Equal`, or `Greater`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Numeric ordering on `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntCompare;

impl Comparator<i64> for IntCompare {
    #[inline]
    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }
}

/// Byte-wise lexicographic ordering on `String` (locale-independent).
#[derive(Debug, Clone, Copy, Default)]
pub struct StrCompare;

impl Comparator<String> for StrCompare {
    #[inline]
    fn compare(&self, a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }
}
