//! Cross-cutting wrappers for fallible operations.
//!
//! One concern per wrapper: [`logged`] announces invocations and failures,
//! [`timed`] measures wall time. Each wraps an operation and returns another
//! operation, so they compose by nesting and slot directly into
//! [`RetryStrategy::run`](crate::retry::RetryStrategy::run):
//!
//! ```rust
//! use reprise_core::observe::{logged, timed};
//! use reprise_core::retry::{FixedRetry, RetryStrategy};
//!
//! # fn example() -> Result<(), std::io::Error> {
//! let policy = FixedRetry::builder().max_attempts(3).build();
//! let value = policy.run(timed("fetch", logged("fetch", || {
//!     Ok::<_, std::io::Error>(42)
//! })))?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;
use std::time::Instant;
use tracing::{info, warn};

/// Wrap an operation so every invocation and failure is logged.
///
/// Emits an `info` event before each invocation and a `warn` event carrying
/// the error text on failure. The result passes through untouched.
pub fn logged<T, E, F>(name: &'static str, mut operation: F) -> impl FnMut() -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Result<T, E>,
{
    move || {
        info!(operation = name, "starting");
        match operation() {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(operation = name, error = %err, "failed");
                Err(err)
            }
        }
    }
}

/// Wrap an operation so its wall time is measured and logged.
///
/// Emits an `info` event with the elapsed milliseconds after every
/// invocation, successful or not. The result passes through untouched.
pub fn timed<T, E, F>(name: &'static str, mut operation: F) -> impl FnMut() -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    move || {
        let started = Instant::now();
        let result = operation();
        info!(
            operation = name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::{FixedRetry, RetryStrategy};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_logged_passes_results_through() {
        let mut ok = logged("op", || Ok::<_, std::io::Error>(1));
        assert_eq!(ok().unwrap(), 1);

        let mut failing = logged("op", || Err::<i32, _>(std::io::Error::other("boom")));
        assert!(failing().is_err());
    }

    #[test]
    fn test_timed_passes_results_through() {
        let mut op = timed("op", || Ok::<_, std::io::Error>("done"));
        assert_eq!(op().unwrap(), "done");
    }

    #[test]
    fn test_wrappers_compose_without_extra_invocations() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = Arc::clone(&calls);

        let mut wrapped = timed(
            "outer",
            logged("inner", move || {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                Ok::<_, std::io::Error>(())
            }),
        );

        wrapped().unwrap();
        wrapped().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_wrapped_operation_retries_like_a_bare_one() {
        let policy = FixedRetry::builder().max_attempts(4).build();
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = Arc::clone(&calls);

        let result = policy.run(logged("flaky", move || {
            let call = calls_clone.fetch_add(1, Ordering::SeqCst);
            if call < 2 {
                Err(std::io::Error::other("transient"))
            } else {
                Ok(9)
            }
        }));

        assert_eq!(result.unwrap(), 9);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
