//! Either type - a value that is one of two shapes.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. By convention `Left`
//! carries the failure or alternate path and `Right` the success path, but
//! the type itself is agnostic.
//!
//! Each branch can be shaped independently: `.left(f)` touches only a `Left`
//! and `.right(g)` only a `Right`, so a chain like
//! `.right(on_success).left(on_error)` runs exactly one of the callbacks.
//!
//! # Examples
//!
//! ```rust
//! use functors::{left, right, Either};
//!
//! fn divide(numerator: f64, denominator: f64) -> Either<String, f64> {
//!     if numerator.is_nan() {
//!         return left("Numerator is not a number.".to_string());
//!     }
//!     if denominator == 0.0 {
//!         return left("Division by zero is not possible.".to_string());
//!     }
//!     right(numerator / denominator)
//! }
//!
//! let message = divide(10.0, 2.0)
//!     .right(|result| format!("10 / 2 = {result}"))
//!     .left(|error| format!("failed: {error}"))
//!     .unwrap();
//! assert_eq!(message, "10 / 2 = 5");
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// Exactly one case is active and it never changes: every operation consumes
/// the value and builds a new one.
///
/// # Examples
///
/// ```rust
/// use functors::{right, Either};
///
/// let success: Either<String, i32> = right(42);
/// assert_eq!(success.right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure or alternate path.
    Left(L),
    /// The right variant, conventionally the success path.
    Right(R),
}

/// Creates a `Left` value.
///
/// Any value is accepted; there is no validation.
///
/// # Examples
///
/// ```rust
/// use functors::{left, Either};
///
/// let value: Either<&str, i32> = left("error");
/// assert!(value.is_left());
/// ```
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates a `Right` value.
///
/// # Examples
///
/// ```rust
/// use functors::{right, Either};
///
/// let value: Either<&str, i32> = right(7);
/// assert!(value.is_right());
/// ```
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    /// Named constructor for a `Left` value. Same as [`left`].
    #[inline]
    pub const fn create_left(value: L) -> Self {
        Self::Left(value)
    }

    /// Named constructor for a `Right` value. Same as [`right`].
    #[inline]
    pub const fn create_right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Branch Shaping
    // =========================================================================

    /// Transforms the left value, passing a `Right` through untouched.
    ///
    /// `function` is only invoked when this is a `Left`. Alias of
    /// [`map_left`](Self::map_left), named for fluent response-shaping chains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::{left, right, Either};
    ///
    /// let failure: Either<&str, i32> = left("boom");
    /// assert_eq!(failure.left(str::len), Either::Left(4));
    ///
    /// let success: Either<&str, i32> = right(1);
    /// assert_eq!(success.left(str::len), Either::Right(1));
    /// ```
    #[inline]
    pub fn left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.map_left(function)
    }

    /// Transforms the right value, passing a `Left` through untouched.
    ///
    /// `function` is only invoked when this is a `Right`. Alias of
    /// [`map_right`](Self::map_right).
    #[inline]
    pub fn right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` under the new left type.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` under the new right type.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the active case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::{left, Either};
    ///
    /// let value: Either<i32, String> = left(42);
    /// assert_eq!(value.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::{right, Either};
    ///
    /// let value: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(value.fold(|x| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Some(l)` for a `Left`, `None` otherwise.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for a `Right`, `None` otherwise.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents, producing `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the contained value regardless of the active case.
    ///
    /// Available once both branches carry the same type, which is where a
    /// `.right(..).left(..)` chain ends up when both callbacks produce the
    /// same output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::{left, right, Either};
    ///
    /// let a: Either<i32, i32> = left(1);
    /// let b: Either<i32, i32> = right(2);
    /// assert_eq!(a.unwrap() + b.unwrap(), 3);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
