//! Functor type class - mapping over a contained value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functors::typeclass::Functor;
//! use functors::maybe;
//!
//! let present = maybe(Some(5)).fmap(|n| n.to_string());
//! assert_eq!(present.unwrap(), Some("5".to_string()));
//!
//! let absent = maybe(None::<i32>).fmap(|n| n.to_string());
//! assert!(absent.is_absent());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` applies a function to the value inside a container while
/// preserving the container's shape: an absent `Maybe` stays absent.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::typeclass::Functor;
    ///
    /// let doubled = functors::maybe(Some(5)).fmap(|n| n * 2);
    /// assert_eq!(doubled.unwrap(), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should stay available afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::typeclass::Functor;
    ///
    /// let name = functors::maybe(Some("hello".to_string()));
    /// let length = name.fmap_ref(|s| s.len());
    /// assert_eq!(length.unwrap(), Some(5));
    /// assert!(name.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors::typeclass::Functor;
    ///
    /// assert_eq!(functors::maybe(Some(5)).replace("x").unwrap(), Some("x"));
    /// assert!(functors::maybe(None::<i32>).replace("x").is_absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Maybe, maybe};
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn fmap_preserves_shape(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(maybe(input).fmap(|n| n * 2).unwrap(), expected);
    }

    #[rstest]
    fn void_keeps_presence() {
        let present: Maybe<()> = maybe(Some("text")).void();
        assert!(present.is_present());
        assert!(maybe(None::<&str>).void().is_absent());
    }

    #[rstest]
    fn fmap_accepts_borrowing_closures() {
        let offset = String::from("abc");
        let measured = maybe(Some(2)).fmap(|n| n + offset.len());
        let described = maybe(Some(1)).fmap_ref(|n| format!("{offset}{n}"));
        assert_eq!(measured.unwrap(), Some(5));
        assert_eq!(described.unwrap(), Some("abc1".to_string()));
        assert_eq!(maybe(Some(0)).replace(&offset).unwrap(), Some(&offset));
    }
}
