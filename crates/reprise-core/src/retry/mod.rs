//! Bounded re-invocation of fallible operations.
//!
//! A failed operation is re-attempted until it succeeds, a non-retryable
//! error occurs, or the total attempt budget is spent. Classification is an
//! allow-list: errors the policy does not recognize as transient propagate
//! immediately, without consuming any budget.
//!
//! # Key Types
//!
//! - [`RetryStrategy`] - core trait carrying the attempt loop
//! - [`FixedRetry`] - fixed budget, optional constant delay, configurable
//!   allow-list
//!
//! # Examples
//!
//! ```rust
//! use reprise_core::retry::{FixedRetry, RetryStrategy};
//!
//! # fn example() -> Result<(), std::io::Error> {
//! let policy = FixedRetry::builder().max_attempts(3).build();
//!
//! let value = policy.run(|| {
//!     // Your fallible operation here
//!     Ok::<_, std::io::Error>(42)
//! })?;
//! # Ok(())
//! # }
//! ```

mod fixed;
mod strategy;

pub use fixed::{FixedRetry, FixedRetryBuilder};
pub use strategy::RetryStrategy;
