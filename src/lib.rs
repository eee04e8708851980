//! Generic vs Specialized Quicksort Benchmark
//!
//! This crate implements randomized quicksort twice:
//! - **Generic**: parameterized by a [`Comparator`] capability, so one sort
//!   body serves any element type.
//! - **Specialized**: separate int and string sorts with the comparison
//!   inlined as a direct `<`.
//!
//! The binary runs both variants over identical random inputs and reports
//! per-variant totals and averages, measuring the cost of the comparator
//! indirection. The algorithm itself is the classic Kernighan & Pike
//! partition with a randomized pivot.
//!
//! Exposed as a library so the criterion benches and the binary share a
//! single implementation.

pub mod comparator;
pub mod data_gen;
pub mod error;
pub mod generic_sort;
pub mod report;
pub mod specialized_sort;

pub use comparator::{Comparator, IntCompare, StrCompare};
pub use error::SortError;
