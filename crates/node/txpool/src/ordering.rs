//! Priority strategies used to order pool contents.

use std::cmp::Ordering;

use crate::Scored;

/// Ordering policy for a [`BoundedHeap`](crate::BoundedHeap).
///
/// `compare(a, b)` returns [`Ordering::Greater`] when `a` has the higher priority.
/// Closures of the form `Fn(&T, &T) -> Ordering` implement this trait.
pub trait Priority<T: ?Sized> {
    /// Compares two items by priority.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Priority<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ranks items by their [`Scored::score`], highest first.
///
/// Scores are compared with [`f64::total_cmp`], so the order is total even for
/// signed zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByScore;

impl<T: Scored + ?Sized> Priority<T> for ByScore {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.score().total_cmp(&b.score())
    }
}

/// Inverts another priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<P>(pub P);

impl<T: ?Sized, P: Priority<T>> Priority<T> for Reversed<P> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
