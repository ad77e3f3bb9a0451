//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` as a type constructor directly, so
//! containers describe themselves with [`TypeConstructor`]: the type they are
//! currently applied to, and the same constructor applied to another type.
//!
//! # Example
//!
//! ```rust
//! use functors::typeclass::TypeConstructor;
//! use functors::Maybe;
//!
//! fn absent_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let empty: Maybe<String> = absent_like(&functors::maybe(Some(42)));
//! assert!(empty.is_absent());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the type parameter this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
