//! Error types for the checked sort entry points.

use thiserror::Error;

/// Errors from the range-checked sort operations.
///
/// These are programmer errors: the bounds are validated once at the
/// top-level call and propagated immediately. Recursive calls stay in range
/// by construction, so nothing is re-checked internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested range is inverted or extends past the end of the
    /// sequence. Negative indices are unrepresentable with `usize`, so this
    /// single variant covers every out-of-bounds shape.
    #[error("invalid sort range {start}..{end} for sequence of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
}
