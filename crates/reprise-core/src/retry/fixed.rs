//! Fixed-budget retry with an optional constant inter-attempt delay.

use super::strategy::RetryStrategy;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

type Classifier = Arc<dyn Fn(&(dyn Error + 'static)) -> bool + Send + Sync>;

/// Retry policy with a fixed attempt budget and an allow-list classifier.
///
/// The simplest useful strategy: every failed attempt waits the same
/// (optional) delay, and a configurable predicate decides which errors count
/// as transient. Without a predicate, every error is considered retryable.
///
/// # Examples
///
/// ```rust
/// use reprise_core::retry::{FixedRetry, RetryStrategy};
/// use std::io;
/// use std::time::Duration;
///
/// let policy = FixedRetry::builder()
///     .max_attempts(5)
///     .delay(Duration::from_millis(100))
///     .retry_if(|err| {
///         err.downcast_ref::<io::Error>()
///             .is_some_and(|io| io.kind() == io::ErrorKind::ConnectionRefused)
///     })
///     .build();
///
/// # fn example(policy: FixedRetry) -> Result<(), io::Error> {
/// let value = policy.run(|| Ok::<_, io::Error>(42))?;
/// assert_eq!(value, 42);
/// # Ok(())
/// # }
/// # example(policy).unwrap();
/// ```
#[derive(Clone)]
pub struct FixedRetry {
    max_attempts: u32,
    delay: Option<Duration>,
    classify: Option<Classifier>,
}

impl FixedRetry {
    /// Create a new builder for configuring a fixed retry policy.
    pub fn builder() -> FixedRetryBuilder {
        FixedRetryBuilder::default()
    }
}

impl Default for FixedRetry {
    /// Three total attempts, no delay, every error retryable.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: None,
            classify: None,
        }
    }
}

impl fmt::Debug for FixedRetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedRetry")
            .field("max_attempts", &self.max_attempts)
            .field("delay", &self.delay)
            .field("classify", &self.classify.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}

impl RetryStrategy for FixedRetry {
    fn should_retry(&self, error: &(dyn Error + 'static), _attempt: u32) -> bool {
        match &self.classify {
            Some(classify) => classify(error),
            None => true,
        }
    }

    fn next_delay(&self, _attempt: u32) -> Option<Duration> {
        self.delay
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

/// Builder for configuring [`FixedRetry`].
#[derive(Default)]
pub struct FixedRetryBuilder {
    max_attempts: Option<u32>,
    delay: Option<Duration>,
    classify: Option<Classifier>,
}

impl FixedRetryBuilder {
    /// Set the total invocation budget.
    ///
    /// Default: 3. Clamped to at least 1, since the operation always runs
    /// once.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Set a constant delay to sleep between attempts.
    ///
    /// Default: none (retry immediately).
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Restrict retries to errors matching `predicate`.
    ///
    /// The predicate receives the error as `&dyn Error`, so concrete types
    /// can be recovered with `downcast_ref`. Errors it rejects propagate
    /// immediately without consuming the budget.
    pub fn retry_if<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&(dyn Error + 'static)) -> bool + Send + Sync + 'static,
    {
        self.classify = Some(Arc::new(predicate));
        self
    }

    /// Build the `FixedRetry` policy.
    ///
    /// Uses defaults for any unset parameter.
    pub fn build(self) -> FixedRetry {
        FixedRetry {
            max_attempts: self.max_attempts.unwrap_or(3).max(1),
            delay: self.delay,
            classify: self.classify,
        }
    }
}
