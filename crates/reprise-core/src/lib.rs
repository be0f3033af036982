#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Iteration and reliability primitives.
//!
//! This crate collects small, independent building blocks that come up over
//! and over in application code:
//!
//! - **Day-granularity date ranges** via [`range::DateRange`] (lazy, O(1)
//!   memory, restartable passes) and [`range::DateRangeSequence`] (eager,
//!   O(1) indexed access including negative indices)
//! - **Bounded retry** via the [`retry::RetryStrategy`] trait and the
//!   [`retry::FixedRetry`] policy (attempt budget + retryable-error
//!   allow-list, optional fixed inter-attempt delay)
//! - **Validated fields** via [`field::ValidatedField`] (validate on write,
//!   plain read) and [`field::AttrMap`] (explicit fallback lookup that fails
//!   loudly instead of returning a silent default)
//! - **Scope guards** via [`guard::ScopeGuard`] and [`guard::with_scope`]
//!   (paired acquire/release that survives early returns and errors)
//! - **Wrapper combinators** via [`observe::logged`] and [`observe::timed`]
//!   (one cross-cutting concern per wrapper, composable by nesting)
//!
//! Everything here is synchronous and single-threaded; there is no runtime
//! to configure and no shared state between the modules.
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use reprise_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2019, 1, 5).unwrap();
//!
//! let range = DateRange::new(start, end);
//! assert_eq!(range.iter().count(), 4);
//!
//! let policy = FixedRetry::builder().max_attempts(3).build();
//! let value = policy.run(|| Ok::<_, std::io::Error>(42))?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

pub mod field;
pub mod guard;
pub mod observe;
pub mod range;
pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// Import all core primitives with:
///
/// ```rust
/// use reprise_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::field::{AttrMap, FieldError, ValidatedField};
    pub use crate::guard::{ScopeGuard, guard, with_scope};
    pub use crate::observe::{logged, timed};
    pub use crate::range::{DateRange, DateRangeSequence, DayCursor, RangeError};
    pub use crate::retry::{FixedRetry, FixedRetryBuilder, RetryStrategy};
}
