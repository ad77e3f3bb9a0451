//! Type class traits shared by the containers.
//!
//! - [`TypeConstructor`]: emulates higher-kinded types through GATs
//! - [`Functor`]: mapping over a single contained value
//! - [`Bifunctor`]: mapping over either side of a two-parameter type
//!
//! # Examples
//!
//! ```rust
//! use functors::typeclass::{Bifunctor, Functor};
//! use functors::{left, maybe, Either};
//!
//! let length = maybe(Some("hello")).fmap(|text| text.len());
//! assert_eq!(length.unwrap(), Some(5));
//!
//! let failure: Either<&str, i32> = left("boom");
//! assert_eq!(failure.first(str::len), Either::Left(4));
//! ```

mod bifunctor;
mod functor;
mod higher;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
