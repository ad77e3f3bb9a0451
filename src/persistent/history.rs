//! Immutable, append-only value history with rollback.
//!
//! A [`History`] records every value a piece of state has taken. The most
//! recent value is the *current* one and the first is the *initial* one.
//! Each operation returns a new `History`; the receiver never changes.
//!
//! Values live in a [`PersistentList`] ordered newest first, so appending
//! shares every earlier node and rolling back reuses a suffix of the list.
//!
//! # Examples
//!
//! ```rust
//! use functors::history;
//!
//! let steps = history(10).map(|value| value + 5).map(|value| value * 2);
//! assert_eq!(*steps.current(), 30);
//! assert_eq!(*steps.rollback(1).current(), 15);
//! assert_eq!(*steps.reset().current(), 10);
//! assert_eq!(*steps.current(), 30);
//! ```

use std::fmt;

use super::list::{PersistentList, PersistentListIterator};

/// An immutable sequence of values whose last element is the current value.
///
/// Never empty: the initial value is always present.
pub struct History<T> {
    /// Newest first.
    timeline: PersistentList<T>,
    /// One-element suffix of `timeline` holding the initial value.
    origin: PersistentList<T>,
}

/// Creates a `History` holding only `initial`.
///
/// # Examples
///
/// ```rust
/// let start = functors::history("draft");
/// assert_eq!(*start.current(), "draft");
/// assert_eq!(start.len(), 1);
/// ```
#[inline]
pub fn history<T>(initial: T) -> History<T> {
    History::create(initial)
}

impl<T> History<T> {
    /// Creates a `History` holding only `initial`. Same as [`history`].
    #[inline]
    pub fn create(initial: T) -> Self {
        let origin = PersistentList::singleton(initial);
        Self {
            timeline: origin.clone(),
            origin,
        }
    }

    /// Alias for [`History::create`].
    #[inline]
    pub fn of(initial: T) -> Self {
        Self::create(initial)
    }

    /// Returns the most recent value.
    #[inline]
    pub fn current(&self) -> &T {
        match self.timeline.head() {
            Some(value) => value,
            None => unreachable!("a history always holds its initial value"),
        }
    }

    /// Returns the value the history was created with.
    #[inline]
    pub fn initial(&self) -> &T {
        match self.origin.head() {
            Some(value) => value,
            None => unreachable!("a history always holds its initial value"),
        }
    }

    /// Appends `function(current)` and returns the extended history.
    ///
    /// `function` runs exactly once, synchronously.
    #[must_use]
    pub fn map<F>(&self, function: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let next = function(self.current());
        Self {
            timeline: self.timeline.cons(next),
            origin: self.origin.clone(),
        }
    }

    /// Returns a history holding only the initial value.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            timeline: self.origin.clone(),
            origin: self.origin.clone(),
        }
    }

    /// Drops the `steps` most recent values.
    ///
    /// Rolling back as many steps as there are values, or more, is clamped to
    /// [`reset`](Self::reset).
    ///
    /// # Examples
    ///
    /// ```rust
    /// let counted = functors::history(0).map(|x| x + 1).map(|x| x + 1).map(|x| x + 1).map(|x| x + 1);
    /// assert_eq!(*counted.rollback(3).current(), 1);
    /// assert_eq!(*functors::history(10).rollback(2).current(), 10);
    /// ```
    #[must_use]
    pub fn rollback(&self, steps: usize) -> Self {
        if steps >= self.timeline.len() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "functors::history",
                steps,
                length = self.timeline.len(),
                "rollback clamped to the initial value"
            );
            return self.reset();
        }
        Self {
            timeline: self.timeline.drop_first(steps),
            origin: self.origin.clone(),
        }
    }

    /// Drops the most recent value. Same as `rollback(1)`.
    #[must_use]
    pub fn rollback_one(&self) -> Self {
        self.rollback(1)
    }

    /// Returns the number of recorded values, at least 1.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Iterates from the current value back to the initial one.
    #[inline]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        self.timeline.iter()
    }
}

impl<T: Clone> History<T> {
    /// Collects the values from initial to current.
    pub fn to_vec(&self) -> Vec<T> {
        let mut values: Vec<T> = self.timeline.iter().cloned().collect();
        values.reverse();
        values
    }
}

impl<T> Clone for History<T> {
    fn clone(&self) -> Self {
        Self {
            timeline: self.timeline.clone(),
            origin: self.origin.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for History<T> {
    fn eq(&self, other: &Self) -> bool {
        self.timeline == other.timeline
    }
}

impl<T: Eq> Eq for History<T> {}

impl<T: fmt::Debug> fmt::Debug for History<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values: Vec<&T> = self.timeline.iter().collect();
        values.reverse();
        formatter.debug_tuple("History").field(&values).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn map_runs_function_once() {
        let calls = Cell::new(0);
        let next = history(1).map(|value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(*next.current(), 2);
    }

    #[rstest]
    fn rollback_shares_earlier_nodes() {
        let base = history(1).map(|v| v + 1);
        let extended = base.map(|v| v * 10);
        assert_eq!(extended.rollback(1), base);
        assert!(extended.rollback(1).timeline.ptr_eq(&base.timeline));
    }

    #[rstest]
    #[case(0, 3)]
    #[case(1, 2)]
    #[case(2, 1)]
    #[case(3, 1)]
    #[case(usize::MAX, 1)]
    fn rollback_clamps(#[case] steps: usize, #[case] expected: i32) {
        let counted = history(1).map(|v| v + 1).map(|v| v + 1);
        assert_eq!(*counted.rollback(steps).current(), expected);
    }

    #[rstest]
    fn debug_lists_oldest_first() {
        let steps = history(1).map(|v| v + 1);
        assert_eq!(format!("{steps:?}"), "History([1, 2])");
    }

    #[cfg(feature = "arc")]
    static_assertions::assert_impl_all!(History<i32>: Send, Sync);
}
