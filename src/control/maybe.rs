//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` wraps a single slot that is either present or absent. Absence
//! is only `None`: zero, an empty string, `false` or an empty collection are
//! all present values.
//!
//! # Examples
//!
//! ```rust
//! use functors::maybe;
//!
//! let port = maybe(Some("8080"))
//!     .map(|value| value.parse::<u16>().unwrap_or(3000))
//!     .map_empty(|| 3000)
//!     .unwrap();
//! assert_eq!(port, Some(8080));
//!
//! let fallback = maybe(None::<&str>)
//!     .map(|value| value.parse::<u16>().unwrap_or(3000))
//!     .map_empty(|| 3000)
//!     .unwrap();
//! assert_eq!(fallback, Some(3000));
//! ```

use std::fmt;

use crate::typeclass::{Functor, TypeConstructor};

/// A container that may or may not hold a value of type `T`.
///
/// The slot is private; build values with [`maybe`], [`Maybe::create`],
/// [`Maybe::empty`] or `From<Option<T>>`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
}

/// Creates a `Maybe` from an optional value.
///
/// `None` is absent, every `Some` is present.
///
/// # Examples
///
/// ```rust
/// use functors::maybe;
///
/// assert!(maybe(Some(0)).is_present());
/// assert!(maybe(Some("")).is_present());
/// assert!(maybe(None::<i32>).is_absent());
/// ```
#[inline]
pub const fn maybe<T>(value: Option<T>) -> Maybe<T> {
    Maybe::create(value)
}

/// Conversion into a [`Maybe`], used by [`Maybe::flat_map`] so that the
/// mapping function may return either a `Maybe` or an `Option`.
pub trait IntoMaybe {
    /// The value type of the resulting `Maybe`.
    type Value;

    /// Converts `self` into a `Maybe`.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl<T> IntoMaybe for Option<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::create(self)
    }
}

impl<T> Maybe<T> {
    /// Creates a `Maybe` from an optional value. Same as [`maybe`].
    #[inline]
    pub const fn create(value: Option<T>) -> Self {
        Self { value }
    }

    /// Creates an absent `Maybe`.
    #[inline]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Applies `function` to the value when present.
    ///
    /// When absent, returns an absent `Maybe<R>` and `function` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::maybe;
    ///
    /// assert_eq!(maybe(Some(2)).map(|n| n * 10).unwrap(), Some(20));
    /// assert_eq!(maybe(None::<i32>).map(|n| n * 10).unwrap(), None);
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self.value {
            Some(value) => Maybe::create(Some(function(value))),
            None => Maybe::empty(),
        }
    }

    /// Supplies a value when absent.
    ///
    /// `function` is invoked only when the slot is empty and its result is
    /// wrapped as present. A present value is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::maybe;
    ///
    /// assert_eq!(maybe(None).map_empty(|| 3000).unwrap(), Some(3000));
    /// assert_eq!(maybe(Some(80)).map_empty(|| 3000).unwrap(), Some(80));
    /// ```
    #[inline]
    pub fn map_empty<F>(self, function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self.value {
            Some(value) => Self::create(Some(value)),
            None => Self::create(Some(function())),
        }
    }

    /// Maps and flattens in one step.
    ///
    /// `function` may return a `Maybe<R>` or an `Option<R>`; the result is
    /// never nested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::maybe;
    ///
    /// let shout = maybe(Some("value")).flat_map(|v| maybe(Some(v.to_uppercase())));
    /// assert_eq!(shout.unwrap(), Some("VALUE".to_string()));
    ///
    /// let parsed = maybe(Some("x1")).flat_map(|v| v.parse::<i32>().ok());
    /// assert!(parsed.is_absent());
    /// ```
    #[inline]
    pub fn flat_map<M, F>(self, function: F) -> Maybe<M::Value>
    where
        M: IntoMaybe,
        F: FnOnce(T) -> M,
    {
        match self.value {
            Some(value) => function(value).into_maybe(),
            None => Maybe::empty(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self::create(self.value.filter(predicate))
    }

    /// Borrows the contents, producing `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe::create(self.value.as_ref())
    }

    /// Returns the raw slot.
    #[inline]
    pub fn unwrap(self) -> Option<T> {
        self.value
    }

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the value, or computes one when absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(function)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    ///
    /// An absent outer slot and a present outer slot holding an absent inner
    /// `Maybe` both flatten to absent. Deeper nesting needs repeated calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::maybe;
    ///
    /// let nested = maybe(Some(maybe(Some("nested value"))));
    /// assert_eq!(nested.flat().unwrap(), Some("nested value"));
    /// ```
    #[inline]
    pub fn flat(self) -> Maybe<T> {
        self.value.unwrap_or_default()
    }
}

impl<T> Default for Maybe<T> {
    /// An absent `Maybe`.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::create(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Maybe").field(value).finish(),
            None => formatter.write_str("Maybe(<empty>)"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}
