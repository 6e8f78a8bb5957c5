/*!
# Utilities

Provides a small set of helpers shared across the crate:
- [`DoubleIter`](self::multi_traits::DoubleIter): returning one of two iterator types from a single function,
- [`Probability`]: validity checks for probabilities used by the random generators,
- [`FromCapacity`]: uniform construction of the hash containers used by stores and color maps.

You probably do not need to interact with this module directly.
*/

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use num::{One, Zero};

pub mod multi_traits;

pub use multi_traits::DoubleIter;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Helper trait for datastructures that can be initialized with a reserved capacity
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self;
}

impl<T> FromCapacity for Vec<T> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<K, V> FromCapacity for FxHashMap<K, V> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}
