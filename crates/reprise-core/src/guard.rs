//! Paired setup/teardown as RAII scope guards.
//!
//! The guard owns a value and a teardown closure; the closure runs exactly
//! once when the guard is dropped, which covers early returns, `?`
//! propagation, and panics alike. [`with_scope`] packages the full
//! acquire/use/release shape for fallible bodies.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// A value paired with a teardown closure that runs on drop.
///
/// Dereferences to the wrapped value. [`into_inner`](ScopeGuard::into_inner)
/// disarms the guard and hands the value back without running teardown.
///
/// # Examples
///
/// ```rust
/// use reprise_core::guard::guard;
///
/// let mut log = Vec::new();
/// {
///     let mut session = guard(&mut log, |log| log.push("closed"));
///     session.push("opened");
/// } // teardown runs here
/// assert_eq!(log, ["opened", "closed"]);
/// ```
pub struct ScopeGuard<T, F: FnOnce(&mut T)> {
    // Both are Some until drop or into_inner.
    value: Option<T>,
    on_exit: Option<F>,
}

/// Wrap `value` so that `on_exit` runs when the guard is dropped.
pub fn guard<T, F: FnOnce(&mut T)>(value: T, on_exit: F) -> ScopeGuard<T, F> {
    ScopeGuard {
        value: Some(value),
        on_exit: Some(on_exit),
    }
}

impl<T, F: FnOnce(&mut T)> ScopeGuard<T, F> {
    /// Disarm the guard and return the wrapped value.
    ///
    /// The teardown closure is discarded without running.
    pub fn into_inner(mut self) -> T {
        self.on_exit = None;
        self.value.take().expect("value present until drop")
    }
}

impl<T, F: FnOnce(&mut T)> Deref for ScopeGuard<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value.as_ref().expect("value present until drop")
    }
}

impl<T, F: FnOnce(&mut T)> DerefMut for ScopeGuard<T, F> {
    fn deref_mut(&mut self) -> &mut T {
        self.value.as_mut().expect("value present until drop")
    }
}

impl<T, F: FnOnce(&mut T)> Drop for ScopeGuard<T, F> {
    fn drop(&mut self) {
        if let (Some(value), Some(on_exit)) = (self.value.as_mut(), self.on_exit.take()) {
            on_exit(value);
        }
    }
}

impl<T: fmt::Debug, F: FnOnce(&mut T)> fmt::Debug for ScopeGuard<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("value", &self.value)
            .finish()
    }
}

/// Acquire a value, run a fallible body against it, release it.
///
/// `exit` runs whether `body` succeeds or fails; an error from `body`
/// propagates after the release. An error from `enter` propagates directly
/// and `exit` never runs, since nothing was acquired.
///
/// # Examples
///
/// ```rust
/// use reprise_core::guard::with_scope;
///
/// # fn example() -> Result<(), std::io::Error> {
/// let backed_up = with_scope(
///     || Ok::<_, std::io::Error>(vec!["table_a", "table_b"]),
///     |tables| Ok(tables.len()),
///     |tables| tables.clear(),
/// )?;
/// assert_eq!(backed_up, 2);
/// # Ok(())
/// # }
/// ```
pub fn with_scope<T, R, E>(
    enter: impl FnOnce() -> Result<T, E>,
    body: impl FnOnce(&mut T) -> Result<R, E>,
    exit: impl FnOnce(&mut T),
) -> Result<R, E> {
    let value = enter()?;
    let mut scoped = guard(value, exit);
    body(&mut *scoped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_exit_runs_exactly_once_on_drop() {
        let exits = Arc::new(AtomicU32::new(0));
        {
            let exits = Arc::clone(&exits);
            let _session = guard((), move |_| {
                exits.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(exits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deref_reaches_wrapped_value() {
        let mut counter = guard(0u32, |_| {});
        *counter += 5;
        assert_eq!(*counter, 5);
    }

    #[test]
    fn test_into_inner_disarms_teardown() {
        let exits = Arc::new(AtomicU32::new(0));
        let exits_clone = Arc::clone(&exits);

        let session = guard(7u32, move |_| {
            exits_clone.fetch_add(1, Ordering::SeqCst);
        });
        let value = session.into_inner();

        assert_eq!(value, 7);
        assert_eq!(exits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_with_scope_releases_on_success() {
        let mut trace = Vec::new();

        let result: Result<usize, std::io::Error> = with_scope(
            || {
                trace.push("enter");
                Ok(vec![1, 2, 3])
            },
            |items| Ok(items.len()),
            |items| items.clear(),
        );

        assert_eq!(result.unwrap(), 3);
        assert_eq!(trace, ["enter"]);
    }

    #[test]
    fn test_with_scope_releases_on_body_error() {
        let released = Arc::new(AtomicU32::new(0));
        let released_clone = Arc::clone(&released);

        let result: Result<(), std::io::Error> = with_scope(
            || Ok("connection"),
            |_| Err(std::io::Error::other("send failed")),
            move |_| {
                released_clone.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert!(result.is_err());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_scope_skips_exit_when_enter_fails() {
        let released = Arc::new(AtomicU32::new(0));
        let released_clone = Arc::clone(&released);

        let result: Result<(), std::io::Error> = with_scope(
            || Err(std::io::Error::other("unreachable host")),
            |_: &mut &str| Ok(()),
            move |_| {
                released_clone.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert!(result.is_err());
        assert_eq!(released.load(Ordering::SeqCst), 0);
    }
}
