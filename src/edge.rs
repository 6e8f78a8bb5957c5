/*!
# Edges

An edge only references its endpoints; it never owns them. Any type exposing a `source` and a
`target` vertex can be used as an edge by implementing [`EdgeEndpoints`].

Provided edge types:
- [`Edge`]: the plain `(source, target)` tuple-struct,
- [`TaggedEdge`]: an edge carrying an additional tag (e.g. to tell parallel edges apart),
- [`ReversedEdge`]: a view on an edge with swapped endpoints, used by reversed graph views.

For undirected graphs the orientation of a stored edge is arbitrary. Whether an edge connects
two vertices is decided by an [`EdgeEquality`] function, [`undirected_vertex_equality`] being
the default.
*/

use std::fmt::{Debug, Display};

/// Access to the endpoints of an edge.
pub trait EdgeEndpoints {
    /// Vertex type referenced by the edge
    type Vertex: Copy + Eq;

    /// Returns the source vertex
    fn source(&self) -> Self::Vertex;

    /// Returns the target vertex
    fn target(&self) -> Self::Vertex;

    /// Returns `(source, target)`
    fn endpoints(&self) -> (Self::Vertex, Self::Vertex) {
        (self.source(), self.target())
    }

    /// Returns *true* if source and target are equal
    fn is_self_edge(&self) -> bool {
        self.source() == self.target()
    }

    /// Returns the endpoint opposite to `v`.
    /// If `v` is no endpoint of the edge, the source is returned.
    fn other_vertex(&self, v: Self::Vertex) -> Self::Vertex {
        if self.source() == v {
            self.target()
        } else {
            self.source()
        }
    }

    /// Returns *true* if `v` is one of the endpoints
    fn is_adjacent(&self, v: Self::Vertex) -> bool {
        self.source() == v || self.target() == v
    }
}

/// Decides whether an (undirected) edge connects two given vertices
pub type EdgeEquality<E> =
    fn(&E, <E as EdgeEndpoints>::Vertex, <E as EdgeEndpoints>::Vertex) -> bool;

/// Default [`EdgeEquality`] for undirected edges: the edge connects `u` and `v` in any orientation
pub fn undirected_vertex_equality<E: EdgeEndpoints>(edge: &E, u: E::Vertex, v: E::Vertex) -> bool {
    let (s, t) = edge.endpoints();
    (s == u && t == v) || (s == v && t == u)
}

/// [`EdgeEquality`] for undirected graphs whose edges are always stored normalized, i.e. with
/// `source <= target`. Only the sorted pair of `u` and `v` is compared.
pub fn sorted_vertex_equality<E>(edge: &E, u: E::Vertex, v: E::Vertex) -> bool
where
    E: EdgeEndpoints,
    E::Vertex: Ord,
{
    let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
    edge.source() == lo && edge.target() == hi
}

/// An edge is defined by two vertices/endpoints.
/// It is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Copy + Eq> EdgeEndpoints for Edge<V> {
    type Vertex = V;

    #[inline]
    fn source(&self) -> V {
        self.0
    }

    #[inline]
    fn target(&self) -> V {
        self.1
    }
}

impl<V: Copy + Ord> Edge<V> {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

impl<V: Copy + Eq> Edge<V> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Copy> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Copy> From<&Edge<V>> for Edge<V> {
    fn from(value: &Edge<V>) -> Self {
        *value
    }
}

/// An edge with an attached tag.
///
/// Two tagged edges are equal only if endpoints *and* tags are equal, which allows storing
/// parallel edges that remain distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaggedEdge<V, T> {
    pub source: V,
    pub target: V,
    pub tag: T,
}

impl<V, T> TaggedEdge<V, T> {
    /// Creates a new tagged edge
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }
}

impl<V: Copy + Eq, T> EdgeEndpoints for TaggedEdge<V, T> {
    type Vertex = V;

    #[inline]
    fn source(&self) -> V {
        self.source
    }

    #[inline]
    fn target(&self) -> V {
        self.target
    }
}

impl<V, T> From<(V, V, T)> for TaggedEdge<V, T> {
    fn from(value: (V, V, T)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

/// A wrapped edge whose endpoints are swapped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReversedEdge<E>(pub E);

impl<E> ReversedEdge<E> {
    /// Returns the wrapped edge in its stored orientation
    pub fn original(&self) -> &E {
        &self.0
    }

    /// Unwraps the original edge
    pub fn into_original(self) -> E {
        self.0
    }
}

impl<E: EdgeEndpoints> EdgeEndpoints for ReversedEdge<E> {
    type Vertex = E::Vertex;

    #[inline]
    fn source(&self) -> E::Vertex {
        self.0.target()
    }

    #[inline]
    fn target(&self) -> E::Vertex {
        self.0.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let e = Edge(3u32, 7);
        assert_eq!(e.endpoints(), (3, 7));
        assert!(e.is_adjacent(7));
        assert!(!e.is_adjacent(5));
        assert_eq!(e.other_vertex(3), 7);
        assert_eq!(e.other_vertex(7), 3);
        assert!(!e.is_self_edge());
        assert!(Edge(4u32, 4).is_self_edge());
    }

    #[test]
    fn normalize() {
        assert_eq!(Edge(5u32, 2).normalized(), Edge(2, 5));
        assert!(Edge(2u32, 5).is_normalized());
        assert_eq!(Edge(5u32, 2).reverse(), Edge(2, 5));
    }

    #[test]
    fn reversed_edge_swaps_endpoints() {
        let e = ReversedEdge(Edge(1u32, 2));
        assert_eq!(e.source(), 2);
        assert_eq!(e.target(), 1);
        assert_eq!(*e.original(), Edge(1, 2));
    }

    #[test]
    fn tagged_edges_are_distinguishable() {
        let a = TaggedEdge::new(1u32, 2, 'a');
        let b = TaggedEdge::new(1u32, 2, 'b');
        assert_ne!(a, b);
        assert_eq!(a.endpoints(), b.endpoints());
    }

    #[test]
    fn undirected_equality() {
        let e = Edge(1u32, 2);
        assert!(undirected_vertex_equality(&e, 1, 2));
        assert!(undirected_vertex_equality(&e, 2, 1));
        assert!(!undirected_vertex_equality(&e, 1, 1));

        assert!(sorted_vertex_equality(&e, 2, 1));
        assert!(!sorted_vertex_equality(&Edge(2u32, 1), 2, 1));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(1u32, 2)), "(1,2)");
        assert_eq!(format!("{:?}", Edge("a", "b")), "(\"a\",\"b\")");
    }
}
