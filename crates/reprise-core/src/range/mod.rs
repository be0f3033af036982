//! Half-open, day-granularity date ranges.
//!
//! Two containers over the same interval `[start, end)`, trading memory
//! against access patterns:
//!
//! - [`DateRange`] stores only its bounds and generates days on demand; O(1)
//!   construction and memory, restartable passes, no indexing or length.
//! - [`DateRangeSequence`] materializes every day up front; O(n) construction
//!   and memory, O(1) [`len`](DateRangeSequence::len) and indexed
//!   [`get`](DateRangeSequence::get) (negative indices count from the end).
//!
//! Both yield the same days in the same ascending order, and neither ever
//! produces the end bound.
//!
//! # Examples
//!
//! ```rust
//! use reprise_core::range::{DateRange, DateRangeSequence};
//! use chrono::NaiveDate;
//!
//! # fn example() -> Result<(), reprise_core::range::RangeError> {
//! let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2019, 1, 5).unwrap();
//!
//! let lazy = DateRange::new(start, end);
//! let eager = DateRangeSequence::new(start, end);
//!
//! assert!(lazy.iter().eq(eager.iter()));
//! assert_eq!(eager.get(-1)?, NaiveDate::from_ymd_opt(2019, 1, 4).unwrap());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod eager;
mod lazy;

pub use eager::DateRangeSequence;
pub use lazy::{DateRange, DayCursor};

use thiserror::Error;

/// Errors from indexed access into a materialized range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The requested index, after resolving negative values against the
    /// length, falls outside `[0, len)`.
    #[error("index {index} out of bounds for sequence of {len} days")]
    OutOfBounds {
        /// The index as originally requested (before negative resolution).
        index: i64,
        /// Length of the sequence at the time of the lookup.
        len: usize,
    },
}
