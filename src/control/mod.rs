//! Control containers.
//!
//! - [`Either`]: a value that is one of two shapes
//! - [`Maybe`]: a value that may be absent
//! - [`Lazy`]: a deferred computation evaluated at most once
//! - [`AsyncLazy`]: a deferred computation producing a shared pending value
//!   (requires the `async` feature)
//!
//! # Examples
//!
//! ## Branch Shaping
//!
//! ```rust
//! use functors::{left, right, Either};
//!
//! let response: Either<String, u32> = right(7);
//! let body = response
//!     .right(|id| format!("{{\"id\":{id}}}"))
//!     .left(|error| format!("{{\"error\":\"{error}\"}}"))
//!     .unwrap();
//! assert_eq!(body, "{\"id\":7}");
//! ```
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use functors::lazy;
//!
//! let value = lazy(|| 42).map(|x| x * 3);
//! assert_eq!(*value.evaluate(), 126);
//! ```

#[cfg(feature = "async")]
mod async_lazy;
mod either;
mod lazy;
mod maybe;

#[cfg(feature = "async")]
pub use async_lazy::{AsyncLazy, Pending, lazy_async};
pub use either::{Either, left, right};
pub use lazy::{Lazy, LazyPoisonedError, lazy};
pub use maybe::{IntoMaybe, Maybe, maybe};
