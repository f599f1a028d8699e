//! The comparator a [`Tree`][crate::Tree] is configured with.
//!
//! Every structural decision a tree makes (where to insert, which way to search,
//! which slot to promote into) goes through one [`Order`]. It is fixed when the
//! tree is constructed and never changes afterwards.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use binary_tree::Order;
//!
//! let by_len = Order::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
//!
//! let natural = Order::<i32>::natural();
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(natural.reversed().compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp;
use std::fmt;
use std::sync::Arc;

/// A three-way comparison over `T`.
///
/// The comparator must be a total order for the tree to behave. A comparator that
/// isn't (or that disagrees with itself between calls) makes search results
/// meaningless, though it can't cause memory unsafety.
///
/// Comparators are `Send + Sync` so a tree can be moved to another thread or put
/// behind a lock by its owner.
pub struct Order<T> {
    cmp: Comparator<T>,
    // Arguments are swapped before comparing.
    reversed: bool,
}

// Natural orders are kept as plain function pointers so they don't force `T: 'static`.
enum Comparator<T> {
    Natural(fn(&T, &T) -> cmp::Ordering),
    Custom(Arc<dyn Fn(&T, &T) -> cmp::Ordering + Send + Sync>),
}

impl<T> Order<T> {
    /// Wraps a comparison function.
    pub fn by<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> cmp::Ordering + Send + Sync + 'static,
    {
        Self {
            cmp: Comparator::Custom(Arc::new(f)),
            reversed: false,
        }
    }

    /// Compares `a` against `b`.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> cmp::Ordering {
        let (a, b) = if self.reversed { (b, a) } else { (a, b) };
        match &self.cmp {
            Comparator::Natural(f) => f(a, b),
            Comparator::Custom(f) => f(a, b),
        }
    }

    /// Returns an order that sorts the other way around.
    pub fn reversed(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self.clone()
        }
    }
}

impl<T: Ord> Order<T> {
    /// The natural order of `T`, i.e. [`Ord::cmp`].
    pub fn natural() -> Self {
        Self {
            cmp: Comparator::Natural(T::cmp),
            reversed: false,
        }
    }
}

impl<T: Ord> Default for Order<T> {
    fn default() -> Self {
        Self::natural()
    }
}

/// Manual implementation so cloning an `Order` doesn't require `T: Clone`.
impl<T> Clone for Order<T> {
    fn clone(&self) -> Self {
        let cmp = match &self.cmp {
            Comparator::Natural(f) => Comparator::Natural(*f),
            Comparator::Custom(f) => Comparator::Custom(Arc::clone(f)),
        };
        Self {
            cmp,
            reversed: self.reversed,
        }
    }
}

impl<T> fmt::Debug for Order<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.cmp {
            Comparator::Natural(_) => "natural",
            Comparator::Custom(_) => "custom",
        };
        f.debug_struct("Order")
            .field("kind", &kind)
            .field("reversed", &self.reversed)
            .finish()
    }
}
