//! Deferred computations that produce a pending value.
//!
//! [`AsyncLazy`] is the asynchronous side of [`Lazy`]: its computation yields
//! a future instead of a value. What gets cached is the pending value itself,
//! wrapped in [`Shared`], so every call to [`AsyncLazy::evaluate`] hands out a
//! clone of the same future and all awaiters observe one execution and one
//! result.
//!
//! A synchronous chain switches to pending-aware composition through
//! [`Lazy::map_async`]; from there on, [`AsyncLazy::map`] attaches plain
//! continuations and [`AsyncLazy::then`] attaches continuations that are
//! themselves asynchronous. Each step awaits the previous one.
//!
//! # Examples
//!
//! ```rust
//! use functors::lazy_async;
//! use futures::executor::block_on;
//!
//! let scaled = lazy_async(|| async { vec!["user1@email.com", "user2@email.com"] })
//!     .map(|users| users.len())
//!     .then(|count| async move { count * 10 });
//!
//! assert_eq!(block_on(scaled.evaluate()), 20);
//! assert_eq!(block_on(scaled.evaluate()), 20);
//! ```

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use super::lazy::Lazy;

/// A pending value that can be awaited from several places at once.
pub type Pending<T> = Shared<BoxFuture<'static, T>>;

type PendingComputation<T> = Box<dyn FnOnce() -> Pending<T> + Send>;

/// A deferred computation whose result is a shared pending value.
///
/// Nothing runs until [`evaluate`](Self::evaluate) is called. The first call
/// runs the computation chain and caches the resulting pending value; later
/// calls return clones of it.
///
/// Cancellation is not supported: once the pending value exists it resolves
/// whenever any clone of it is polled to completion.
pub struct AsyncLazy<T> {
    cell: Lazy<Pending<T>, PendingComputation<T>>,
}

/// Creates an [`AsyncLazy`] from a computation returning a future.
///
/// The computation is not invoked until the first evaluation.
pub fn lazy_async<T, Fut, F>(computation: F) -> AsyncLazy<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    AsyncLazy::from_pending_computation(move || computation().boxed().shared())
}

impl<T> AsyncLazy<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from_pending_computation<F>(computation: F) -> Self
    where
        F: FnOnce() -> Pending<T> + Send + 'static,
    {
        let computation: PendingComputation<T> = Box::new(move || {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "functors::lazy", "creating shared pending value");
            computation()
        });
        Self {
            cell: Lazy::new(computation),
        }
    }

    /// Alias for [`lazy_async`].
    pub fn create<Fut, F>(computation: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        lazy_async(computation)
    }

    /// Returns the shared pending value, creating it on the first call.
    ///
    /// # Panics
    ///
    /// Panics if building the pending value panicked on an earlier call.
    pub fn evaluate(&self) -> Pending<T> {
        self.cell.evaluate().clone()
    }

    /// Alias for [`evaluate`](Self::evaluate).
    ///
    /// # Panics
    ///
    /// Same as [`evaluate`](Self::evaluate).
    pub fn unwrap(&self) -> Pending<T> {
        self.evaluate()
    }

    /// Returns whether the pending value has been created.
    ///
    /// This says nothing about whether the pending value has resolved.
    pub fn is_evaluated(&self) -> bool {
        self.cell.is_evaluated()
    }

    /// Applies `function` once the pending value resolves.
    pub fn map<U, G>(self, function: G) -> AsyncLazy<U>
    where
        G: FnOnce(T) -> U + Send + 'static,
        U: Clone + Send + Sync + 'static,
    {
        AsyncLazy::from_pending_computation(move || {
            let pending = self.into_pending();
            async move { function(pending.await) }.boxed().shared()
        })
    }

    /// Chains an asynchronous continuation once the pending value resolves.
    pub fn then<U, Fut, G>(self, function: G) -> AsyncLazy<U>
    where
        G: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Clone + Send + Sync + 'static,
    {
        AsyncLazy::from_pending_computation(move || {
            let pending = self.into_pending();
            async move { function(pending.await).await }.boxed().shared()
        })
    }

    fn into_pending(self) -> Pending<T> {
        match self.cell.into_inner() {
            Ok(pending) => pending,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T, F> Lazy<T, F>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    /// Switches a synchronous chain to pending-aware composition.
    ///
    /// The returned [`AsyncLazy`] runs this `Lazy` (or reuses its cached value)
    /// when first evaluated, then awaits the future produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::lazy;
    ///
    /// let fetched = lazy(|| 21).map_async(|value| async move { value * 2 });
    /// assert_eq!(futures::executor::block_on(fetched.evaluate()), 42);
    /// ```
    pub fn map_async<U, Fut, G>(self, function: G) -> AsyncLazy<U>
    where
        G: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Clone + Send + Sync + 'static,
    {
        AsyncLazy::from_pending_computation(move || match self.into_inner() {
            Ok(value) => function(value).boxed().shared(),
            Err(error) => panic!("{error}"),
        })
    }
}

impl<T> fmt::Debug for AsyncLazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cell.is_evaluated() {
            formatter.write_str("AsyncLazy(<pending>)")
        } else {
            formatter.write_str("AsyncLazy(<unevaluated>)")
        }
    }
}
