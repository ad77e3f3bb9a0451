//! # functors
//!
//! Small, generic functional-programming containers.
//!
//! ## Overview
//!
//! - **Either**: a disjoint union of a left and a right value
//! - **Maybe**: a value that may be absent
//! - **Lazy**: a deferred computation that runs at most once
//! - **`AsyncLazy`**: a deferred computation producing a shared pending value
//! - **History**: an immutable, append-only record of values with rollback
//!
//! Every container is built through a factory function and exposes a fluent,
//! chainable API. Nothing here performs I/O.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor` and `Bifunctor` traits
//! - `control`: Either, Maybe and Lazy
//! - `async`: `AsyncLazy` (requires `futures`)
//! - `persistent`: History and the persistent list backing it
//! - `arc`: use `Arc` instead of `Rc` inside persistent structures
//! - `tracing`: emit `trace!` events on lazy evaluation and history rollback
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functors::prelude::*;
//!
//! let port = maybe(std::env::var("FUNCTORS_DOC_PORT").ok())
//!     .map(|value| value.parse::<u16>().unwrap_or(3000))
//!     .map_empty(|| 3000)
//!     .unwrap();
//! assert!(port.is_some());
//!
//! let steps = history(10).map(|value| value + 5).map(|value| value * 2);
//! assert_eq!(*steps.current(), 30);
//! assert_eq!(*steps.rollback(1).current(), 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled container together with its factory function.
///
/// # Usage
///
/// ```rust
/// use functors::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "control")]
pub use control::{Either, Lazy, LazyPoisonedError, Maybe, lazy, left, maybe, right};

#[cfg(feature = "async")]
pub use control::{AsyncLazy, lazy_async};

#[cfg(feature = "persistent")]
pub use persistent::{History, history};
