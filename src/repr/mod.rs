/*!
# Graph Representations

Concrete graph stores implementing the capability traits of [`ops`](crate::ops):

- [`AdjacencyGraph`]: directed, out-edges only
- [`BidirectionalAdjacencyGraph`]: directed, out- and in-edges
- [`UndirectedAdjacencyGraph`]: undirected, adjacent edges
- [`CsrGraph`]: immutable compressed sparse row snapshot of any vertex list graph

All mutable stores keep their vertices in insertion order in a [`VertexStore`] and their per-vertex
edges in inline [`EdgeList`]s. Edges are enumerated in insertion order per vertex, which makes all
traversals over these stores deterministic.
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::{edge::*, utils::FromCapacity};

mod csr;
mod directed;
mod undirected;

pub use csr::*;
pub use directed::*;
pub use undirected::*;

/// Inline edge list used for per-vertex adjacency
pub type EdgeList<E> = SmallVec<[E; 4]>;

/// Bounds shared by the vertex types of all provided stores
pub trait StoreVertex: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> StoreVertex for T {}

/// Bounds shared by the edge types of all provided stores
pub trait StoreEdge<V>: EdgeEndpoints<Vertex = V> + Clone + Eq + Hash + Debug {}

impl<V, E> StoreEdge<V> for E where E: EdgeEndpoints<Vertex = V> + Clone + Eq + Hash + Debug {}

/// Vertices in insertion order, each with an attached payload.
///
/// Lookups are *O(1)* via a position index; removals preserve the order of the remaining vertices
/// and take time linear in the number of vertices.
#[derive(Debug, Clone)]
pub struct VertexStore<V, T> {
    positions: FxHashMap<V, usize>,
    entries: Vec<(V, T)>,
}

impl<V: StoreVertex, T> Default for VertexStore<V, T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V: StoreVertex, T> VertexStore<V, T> {
    /// Creates an empty store with space for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: FxHashMap::from_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if no vertex is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns *true* if `v` is stored
    pub fn contains(&self, v: V) -> bool {
        self.positions.contains_key(&v)
    }

    /// Returns the insertion rank of `v`
    pub fn position(&self, v: V) -> Option<usize> {
        self.positions.get(&v).copied()
    }

    /// Returns the payload of `v`
    pub fn get(&self, v: V) -> Option<&T> {
        self.position(v).map(|i| &self.entries[i].1)
    }

    /// Returns the payload of `v` mutably
    pub fn get_mut(&mut self, v: V) -> Option<&mut T> {
        self.position(v).map(|i| &mut self.entries[i].1)
    }

    /// Appends `v` with a fresh payload.
    /// Returns *true* exactly if `v` was not present previously.
    pub fn insert_with(&mut self, v: V, payload: impl FnOnce() -> T) -> bool {
        if self.contains(v) {
            return false;
        }

        self.positions.insert(v, self.entries.len());
        self.entries.push((v, payload()));
        true
    }

    /// Removes `v` and returns its payload
    pub fn remove(&mut self, v: V) -> Option<T> {
        let pos = self.positions.remove(&v)?;
        let (_, payload) = self.entries.remove(pos);

        for (u, _) in &self.entries[pos..] {
            if let Some(p) = self.positions.get_mut(u) {
                *p -= 1;
            }
        }

        Some(payload)
    }

    /// Returns an iterator over all vertices in insertion order
    pub fn keys(&self) -> impl Iterator<Item = V> + '_ {
        self.entries.iter().map(|(v, _)| *v)
    }

    /// Returns an iterator over all vertices and their payloads
    pub fn iter(&self) -> impl Iterator<Item = (V, &T)> + '_ {
        self.entries.iter().map(|(v, t)| (*v, t))
    }

    /// Returns a mutable iterator over all payloads
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.entries.iter_mut().map(|(_, t)| t)
    }

    /// Removes all vertices
    pub fn clear(&mut self) {
        self.positions.clear();
        self.entries.clear();
    }
}

/// Removes the first element equal to `item` and returns *true* if one was found
pub(crate) fn remove_first<E: PartialEq>(list: &mut EdgeList<E>, item: &E) -> bool {
    match list.iter().position(|x| x == item) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn vertex_store_keeps_order() {
        let mut store: VertexStore<char, u32> = VertexStore::default();
        for (i, c) in "abcde".chars().enumerate() {
            assert!(store.insert_with(c, || i as u32));
        }
        assert!(!store.insert_with('c', || 100));
        assert_eq!(store.len(), 5);
        assert_eq!(store.get('c'), Some(&2));

        assert_eq!(store.remove('b'), Some(1));
        assert_eq!(store.remove('b'), None);
        assert_eq!(store.keys().collect_vec(), vec!['a', 'c', 'd', 'e']);
        assert_eq!(store.position('e'), Some(3));
        assert_eq!(store.get('e'), Some(&4));

        *store.get_mut('a').unwrap() = 9;
        assert_eq!(store.iter().next(), Some(('a', &9)));

        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains('a'));
    }

    #[test]
    fn remove_first_only_removes_one() {
        let mut list: EdgeList<Edge<u32>> = [Edge(0, 1), Edge(0, 2), Edge(0, 1)].into_iter().collect();
        assert!(remove_first(&mut list, &Edge(0, 1)));
        assert_eq!(list.as_slice(), &[Edge(0, 2), Edge(0, 1)]);
        assert!(!remove_first(&mut list, &Edge(5, 5)));
    }
}
