//! The retry strategy trait and its canonical attempt loop.

use std::error::Error;
use std::time::Duration;
use tracing::warn;

/// A strategy for retrying failed operations.
///
/// Implementations supply three knobs — which errors are retryable, how long
/// to wait between attempts, and the total attempt budget — and inherit the
/// attempt loop from [`run`](RetryStrategy::run).
///
/// The loop walks a fixed state machine: each invocation is an attempt; a
/// normal return ends the run immediately; a retryable failure is logged and
/// re-attempted until the budget is spent, at which point the last observed
/// error propagates; a non-retryable failure propagates at once without
/// consuming any of the budget.
///
/// # Examples
///
/// ```rust
/// use reprise_core::retry::{FixedRetry, RetryStrategy};
///
/// # fn example() -> Result<(), std::io::Error> {
/// let policy = FixedRetry::builder().max_attempts(3).build();
///
/// let value = policy.run(|| {
///     // Your fallible operation here
///     Ok::<_, std::io::Error>(42)
/// })?;
/// assert_eq!(value, 42);
/// # Ok(())
/// # }
/// ```
pub trait RetryStrategy {
    /// Execute an operation under this strategy.
    ///
    /// The operation is invoked at least once and at most
    /// [`max_attempts`](RetryStrategy::max_attempts) times. The wrapped
    /// operation's own state is untouched; `FnMut` only so the caller's
    /// closure may capture mutably (counters, connections).
    ///
    /// # Returns
    /// - `Ok(T)`: the first successful result
    /// - `Err(E)`: a non-retryable error, or the last retryable error once
    ///   the budget is exhausted
    fn run<F, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Error + 'static,
    {
        let budget = self.max_attempts().max(1);
        let mut attempt = 1;
        loop {
            match operation() {
                Ok(value) => return Ok(value),
                Err(err) if !self.should_retry(&err, attempt) => {
                    warn!(attempt, error = %err, "non-retryable failure, giving up");
                    return Err(err);
                }
                Err(err) if attempt >= budget => {
                    warn!(attempt, budget, error = %err, "attempt budget exhausted");
                    return Err(err);
                }
                Err(err) => {
                    warn!(attempt, budget, error = %err, "attempt failed, retrying");
                    if let Some(delay) = self.next_delay(attempt) {
                        std::thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// Determine whether an error is retryable.
    ///
    /// Default implementation treats every error as transient. Override (or
    /// configure, for [`FixedRetry`](crate::retry::FixedRetry)) to fail fast
    /// on permanent errors. `attempt` is 1-based.
    fn should_retry(&self, error: &(dyn Error + 'static), attempt: u32) -> bool {
        let _ = (error, attempt);
        true
    }

    /// Delay to observe after the failure of `attempt`, before the next try.
    ///
    /// `None` means retry immediately.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Total invocation budget.
    ///
    /// An operation that keeps failing retryably is invoked exactly this
    /// many times. Values below 1 are treated as 1.
    fn max_attempts(&self) -> u32;
}
