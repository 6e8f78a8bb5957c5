use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;

use crate::{error::*, utils::FromCapacity};

/// Visitation state of a vertex or edge during a search.
///
/// Within one run a color only moves forward: `White -> Gray -> Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphColor {
    /// Not yet discovered
    #[default]
    White,
    /// Discovered, not finished
    Gray,
    /// Finished
    Black,
}

/// Mapping from vertices (or edges) to their [`GraphColor`]
#[derive(Debug, Clone)]
pub struct ColorMap<K> {
    colors: FxHashMap<K, GraphColor>,
}

impl<K: Eq + Hash> Default for ColorMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> ColorMap<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: FxHashMap::from_capacity(capacity),
        }
    }

    /// Returns the color of `key` if one was assigned
    pub fn get(&self, key: &K) -> Option<GraphColor> {
        self.colors.get(key).copied()
    }

    /// Returns the color of `key` or [`GraphColor::White`] if none was assigned
    pub fn get_or_white(&self, key: &K) -> GraphColor {
        self.get(key).unwrap_or_default()
    }

    /// Assigns a color and returns the previous one
    pub fn set(&mut self, key: K, color: GraphColor) -> Option<GraphColor> {
        self.colors.insert(key, color)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.colors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Returns an iterator over all assigned colors in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&K, GraphColor)> + '_ {
        self.colors.iter().map(|(k, &c)| (k, c))
    }

    /// Returns the number of keys with the given color
    pub fn count_of(&self, color: GraphColor) -> usize {
        self.colors.values().filter(|&&c| c == color).count()
    }
}

impl<K: Eq + Hash + Debug> ColorMap<K> {
    /// Returns the color of `key`.
    /// Fails with [`GraphError::KeyNotFound`] if no color was assigned.
    pub fn try_get(&self, key: &K) -> Result<GraphColor> {
        self.get(key)
            .ok_or_else(|| GraphError::key_not_found(key))
    }
}

impl<K: Eq + Hash> FromIterator<(K, GraphColor)> for ColorMap<K> {
    fn from_iter<T: IntoIterator<Item = (K, GraphColor)>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
