//! Lazy evaluation with memoization.
//!
//! This module provides the `Lazy<T, F>` type. The wrapped computation runs
//! only when the value is first requested through [`Lazy::evaluate`], and the
//! result is cached for every later request.
//!
//! `Lazy` is safe to share between threads. The cache is a write-once cell
//! and the computation is consumed under a lock, so concurrent first-time
//! evaluators observe a single execution and the same value.
//!
//! # Examples
//!
//! ```rust
//! use functors::lazy;
//! use std::cell::Cell;
//!
//! let runs = Cell::new(0);
//! let tripled = lazy(|| {
//!     runs.set(runs.get() + 1);
//!     42
//! })
//! .map(|value| value * 3);
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(*tripled.evaluate(), 126);
//! assert_eq!(*tripled.evaluate(), 126);
//! assert_eq!(runs.get(), 1);
//! ```
//!
//! # Failure Policy
//!
//! A computation that panics *poisons* the `Lazy`: the computation has been
//! consumed and is never re-run. Later calls to [`Lazy::evaluate`] panic and
//! [`Lazy::try_evaluate`] returns [`LazyPoisonedError`]. Computations that can
//! fail in an expected way should return a `Result`, which is cached like any
//! other value.

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// Error returned when a [`Lazy`] value cannot produce its result because its
/// computation panicked during an earlier evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LazyPoisonedError;

impl fmt::Display for LazyPoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Lazy: computation already consumed by a panicking evaluation"
        )
    }
}

impl std::error::Error for LazyPoisonedError {}

/// A lazily evaluated value with memoization.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The type of the computation (defaults to `fn() -> T`)
///
/// # Thread Safety
///
/// `Lazy<T, F>` is `Send` when `T: Send` and `F: Send`, and `Sync` when
/// additionally `T: Sync`. Calling [`evaluate`](Self::evaluate) on the same
/// instance from inside its own computation deadlocks.
///
/// # Examples
///
/// ```rust
/// use functors::Lazy;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let shared = Arc::new(Lazy::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
///     21 * 2
/// }));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || *shared.evaluate())
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 42);
/// }
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
pub struct Lazy<T, F = fn() -> T> {
    value: OnceLock<T>,
    computation: Mutex<Option<F>>,
}

/// Creates a `Lazy` from a zero-argument computation without running it.
///
/// # Examples
///
/// ```rust
/// let answer = functors::lazy(|| 6 * 7);
/// assert!(!answer.is_evaluated());
/// assert_eq!(*answer.evaluate(), 42);
/// ```
#[inline]
pub fn lazy<T, F>(computation: F) -> Lazy<T, F>
where
    F: FnOnce() -> T,
{
    Lazy::new(computation)
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value with the given computation.
    ///
    /// The computation will not be called until `evaluate()` is invoked.
    #[inline]
    pub fn new(computation: F) -> Self {
        Self {
            value: OnceLock::new(),
            computation: Mutex::new(Some(computation)),
        }
    }

    /// Alias for [`Lazy::new`].
    #[inline]
    pub fn create(computation: F) -> Self {
        Self::new(computation)
    }

    /// Runs the computation on first call and returns the cached result.
    ///
    /// Later calls return the same reference without running anything.
    ///
    /// # Panics
    ///
    /// - If the computation panics; the `Lazy` is poisoned afterwards.
    /// - If the `Lazy` was already poisoned by an earlier panic.
    #[inline]
    pub fn evaluate(&self) -> &T {
        match self.try_evaluate() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Alias for [`evaluate`](Self::evaluate).
    ///
    /// # Panics
    ///
    /// Same as [`evaluate`](Self::evaluate).
    #[inline]
    pub fn unwrap(&self) -> &T {
        self.evaluate()
    }

    /// Like [`evaluate`](Self::evaluate), but reports a poisoned `Lazy` as an
    /// error instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier evaluation panicked.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by the computation itself.
    pub fn try_evaluate(&self) -> Result<&T, LazyPoisonedError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let mut slot = self.computation.lock();
        // Another evaluator may have finished while we waited for the lock.
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let computation = slot.take().ok_or(LazyPoisonedError)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(target: "functors::lazy", "running deferred computation");

        Ok(self.value.get_or_init(computation))
    }

    /// Consumes the `Lazy` and returns its value, running the computation if
    /// it has not run yet.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier evaluation panicked.
    pub fn into_inner(self) -> Result<T, LazyPoisonedError> {
        match self.value.into_inner() {
            Some(value) => Ok(value),
            None => self
                .computation
                .into_inner()
                .map(|computation| computation())
                .ok_or(LazyPoisonedError),
        }
    }

    /// Builds a new `Lazy` applying `function` to this one's value.
    ///
    /// Nothing runs until the returned `Lazy` is evaluated. At that point the
    /// original computation runs (or its cached value is reused if it was
    /// already evaluated) and `function` is applied to the result. Steps run in
    /// the order they were composed.
    ///
    /// # Panics
    ///
    /// Evaluating the returned `Lazy` panics if this one is poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::lazy;
    ///
    /// let shouted = lazy(|| "44fee407li841ng-la41zy3879".to_string())
    ///     .map(|text| text.chars().filter(|c| !c.is_ascii_digit()).collect::<String>())
    ///     .map(|text| text.to_uppercase());
    /// assert_eq!(shouted.evaluate(), "FEELING-LAZY");
    /// ```
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || match self.into_inner() {
            Ok(value) => function(value),
            Err(error) => panic!("{error}"),
        })
    }

    /// Builds a new `Lazy` whose computation returns another `Lazy`, then
    /// flattens it.
    ///
    /// # Panics
    ///
    /// Evaluating the returned `Lazy` panics if either `Lazy` is poisoned.
    pub fn flat_map<U, H, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        H: FnOnce() -> U,
        G: FnOnce(T) -> Lazy<U, H>,
    {
        Lazy::new(move || {
            let inner = match self.into_inner() {
                Ok(value) => function(value),
                Err(error) => panic!("{error}"),
            };
            match inner.into_inner() {
                Ok(value) => value,
                Err(error) => panic!("{error}"),
            }
        })
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates a `Lazy` that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::Lazy;
    ///
    /// let ready = Lazy::new_with_value(42);
    /// assert!(ready.is_evaluated());
    /// ```
    #[inline]
    pub fn new_with_value(value: T) -> Self {
        Self {
            value: OnceLock::from(value),
            computation: Mutex::new(None),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns the cached value without triggering evaluation.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns whether the computation has completed.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns whether an earlier evaluation panicked.
    ///
    /// Never blocks: an evaluation in progress reports `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::Lazy;
    /// use std::panic::{catch_unwind, AssertUnwindSafe};
    ///
    /// let broken: Lazy<i32, _> = Lazy::new(|| panic!("computation failed"));
    /// let _ = catch_unwind(AssertUnwindSafe(|| broken.evaluate()));
    /// assert!(broken.is_poisoned());
    /// ```
    pub fn is_poisoned(&self) -> bool {
        !self.is_evaluated()
            && self
                .computation
                .try_lock()
                .is_some_and(|slot| slot.is_none())
    }
}

impl<T: Default> Default for Lazy<T> {
    /// Creates a lazy value that computes `T::default()`.
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None if self.is_poisoned() => formatter.write_str("Lazy(<poisoned>)"),
            None => formatter.write_str("Lazy(<unevaluated>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn lazy_does_not_run_on_construction() {
        let runs = Cell::new(0);
        let _deferred = lazy(|| runs.set(runs.get() + 1));
        assert_eq!(runs.get(), 0);
    }

    #[rstest]
    fn lazy_runs_once() {
        let runs = Cell::new(0);
        let deferred = lazy(|| {
            runs.set(runs.get() + 1);
            "value"
        });
        assert_eq!(*deferred.evaluate(), "value");
        assert_eq!(*deferred.unwrap(), "value");
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn map_reuses_cached_value() {
        let runs = Cell::new(0);
        let source = lazy(|| {
            runs.set(runs.get() + 1);
            10
        });
        assert_eq!(*source.evaluate(), 10);

        let doubled = source.map(|value| value * 2);
        assert_eq!(*doubled.evaluate(), 20);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn debug_reports_state() {
        let deferred = lazy(|| 1);
        assert_eq!(format!("{deferred:?}"), "Lazy(<unevaluated>)");
        deferred.evaluate();
        assert_eq!(format!("{deferred:?}"), "Lazy(1)");
    }

    static_assertions::assert_impl_all!(Lazy<i32>: Send, Sync);
    static_assertions::assert_not_impl_any!(Lazy<std::rc::Rc<i32>>: Send, Sync);
}
