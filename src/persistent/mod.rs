//! Persistent (immutable) structures with structural sharing.
//!
//! - [`History`]: an append-only record of values with rollback and reset
//! - [`PersistentList`]: the cons-list backing `History`
//!
//! Every operation returns a new value and leaves the original unchanged;
//! unchanged parts are shared rather than copied.
//!
//! # Examples
//!
//! ```rust
//! use functors::persistent::{history, PersistentList};
//!
//! let edits = history(String::from("a")).map(|text| format!("{text}b"));
//! assert_eq!(edits.current(), "ab");
//!
//! let list: PersistentList<i32> = (1..=3).collect();
//! assert_eq!(list.tail().head(), Some(&2));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, which makes
/// the persistent structures `Send + Sync` for `Send + Sync` elements.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod history;
mod list;

pub use history::{History, history};
pub use list::{PersistentList, PersistentListIterator};
