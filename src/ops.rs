/*!
# Graph capabilities

Algorithms never ask for a concrete graph type; they ask for the smallest set of capabilities
they need. Capabilities form a hierarchy of traits:

- [`GraphType`]: vertex/edge types, directedness, parallel edge policy
- [`ImplicitVertexSet`] / [`VertexSet`]: membership test / enumeration of vertices
- [`EdgeSet`]: enumeration of edges
- [`ImplicitGraph`]: out-edges of a vertex
- [`IncidenceGraph`]: edge lookup between two vertices
- [`BidirectionalIncidenceGraph`]: in-edges of a vertex
- [`ImplicitUndirectedGraph`]: adjacent edges of a vertex in an undirected graph
- [`MutableGraph`]: insertion/removal of vertices and edges

Composite capabilities ([`VertexListGraph`], [`EdgeListGraph`], [`VertexAndEdgeListGraph`],
[`EdgeListAndIncidenceGraph`], [`BidirectionalGraph`], [`UndirectedGraph`]) are implemented
automatically for every graph providing their parts.

Enumerations are yielded in a deterministic order: insertion order for the provided stores.
Querying a vertex that is not part of the graph yields an empty enumeration (and degree 0) for the
stores of this crate.
*/

use std::{fmt::Debug, hash::Hash};

use crate::{edge::*, error::*};

/// Fixes the vertex and edge types of a graph as well as its structural policies
pub trait GraphType {
    /// Vertices are small handles that are cheap to copy
    type Vertex: Copy + Eq + Hash + Debug;

    /// Edges are values referencing two vertices
    type Edge: EdgeEndpoints<Vertex = Self::Vertex> + Clone + Eq + Hash + Debug;

    /// Returns *true* if edges are directed
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns *true* if multiple edges between the same pair of vertices may exist
    fn allow_parallel_edges(&self) -> bool;
}

/// Membership test for vertices
pub trait ImplicitVertexSet: GraphType {
    /// Returns *true* if `v` is part of the graph
    fn contains_vertex(&self, v: Self::Vertex) -> bool;
}

/// Enumerable set of vertices
pub trait VertexSet: ImplicitVertexSet {
    /// Returns an iterator over all vertices
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Returns the number of vertices
    fn vertex_count(&self) -> usize;

    /// Returns *true* if the graph has no vertices
    fn is_vertices_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Enumerable set of edges
pub trait EdgeSet: GraphType {
    /// Returns an iterator over all edges.
    /// In undirected graphs every edge is reported exactly once.
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the number of edges
    fn edge_count(&self) -> usize;

    /// Returns *true* if this exact edge value is stored in the graph
    fn contains_edge(&self, edge: &Self::Edge) -> bool;

    /// Returns *true* if the graph has no edges
    fn is_edges_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

macro_rules! positional_edge {
    ($name:ident => $iter:ident, $degree:ident) => {
        /// Returns the edge at position `index` of the corresponding edge list.
        /// Fails with [`GraphError::IndexOutOfRange`] if `index` exceeds the list.
        fn $name(&self, v: Self::Vertex, index: usize) -> Result<Self::Edge> {
            self.$iter(v)
                .nth(index)
                .ok_or_else(|| GraphError::IndexOutOfRange {
                    index,
                    count: self.$degree(v),
                })
        }
    };
}

/// A graph whose out-edges can be enumerated per vertex
pub trait ImplicitGraph: ImplicitVertexSet {
    /// Returns an iterator over the edges leaving `u`
    fn out_edges(&self, u: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the number of edges leaving `u`
    fn out_degree(&self, u: Self::Vertex) -> usize {
        self.out_edges(u).count()
    }

    /// Returns *true* if no edge leaves `u`
    fn is_out_edges_empty(&self, u: Self::Vertex) -> bool {
        self.out_degree(u) == 0
    }

    positional_edge!(out_edge => out_edges, out_degree);
}

/// A graph allowing lookups of edges between two vertices
pub trait IncidenceGraph: ImplicitGraph {
    /// Returns the first out-edge of `source` ending in `target`
    fn try_get_edge(&self, source: Self::Vertex, target: Self::Vertex) -> Option<Self::Edge> {
        self.out_edges(source).find(|e| e.target() == target)
    }

    /// Returns all out-edges of `source` ending in `target` or *None* if `source` is not part of
    /// the graph
    fn try_get_edges(
        &self,
        source: Self::Vertex,
        target: Self::Vertex,
    ) -> Option<Vec<Self::Edge>> {
        self.contains_vertex(source).then(|| {
            self.out_edges(source)
                .filter(|e| e.target() == target)
                .collect()
        })
    }

    /// Returns *true* if an edge from `source` to `target` exists
    fn contains_edge_between(&self, source: Self::Vertex, target: Self::Vertex) -> bool {
        self.try_get_edge(source, target).is_some()
    }
}

/// An incidence graph that can also enumerate the edges entering a vertex
pub trait BidirectionalIncidenceGraph: IncidenceGraph {
    /// Returns an iterator over the edges entering `v`
    fn in_edges(&self, v: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the number of edges entering `v`
    fn in_degree(&self, v: Self::Vertex) -> usize {
        self.in_edges(v).count()
    }

    /// Returns *true* if no edge enters `v`
    fn is_in_edges_empty(&self, v: Self::Vertex) -> bool {
        self.in_degree(v) == 0
    }

    /// Returns the sum of in- and out-degree of `v`
    fn degree(&self, v: Self::Vertex) -> usize {
        self.out_degree(v) + self.in_degree(v)
    }

    positional_edge!(in_edge => in_edges, in_degree);
}

/// A graph whose edges carry no direction
pub trait ImplicitUndirectedGraph: ImplicitVertexSet {
    /// Returns an iterator over the edges incident to `v`.
    /// A self-edge at `v` is reported exactly once.
    fn adjacent_edges(&self, v: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the number of edges incident to `v`
    fn adjacent_degree(&self, v: Self::Vertex) -> usize {
        self.adjacent_edges(v).count()
    }

    /// Returns *true* if `v` has no incident edges
    fn is_adjacent_edges_empty(&self, v: Self::Vertex) -> bool {
        self.adjacent_degree(v) == 0
    }

    positional_edge!(adjacent_edge => adjacent_edges, adjacent_degree);

    /// Returns the function deciding whether an edge connects two vertices
    fn edge_equality(&self) -> EdgeEquality<Self::Edge> {
        undirected_vertex_equality::<Self::Edge>
    }

    /// Returns the first edge connecting `u` and `v` in any orientation
    fn try_get_undirected_edge(&self, u: Self::Vertex, v: Self::Vertex) -> Option<Self::Edge> {
        let equality = self.edge_equality();
        self.adjacent_edges(u).find(|e| equality(e, u, v))
    }

    /// Returns *true* if an edge connects `u` and `v`
    fn contains_undirected_edge(&self, u: Self::Vertex, v: Self::Vertex) -> bool {
        self.try_get_undirected_edge(u, v).is_some()
    }
}

macro_rules! composite_capability {
    ($(#[$meta:meta])* $name:ident : $first:path $(, $rest:path)*) => {
        $(#[$meta])*
        pub trait $name: $first $(+ $rest)* {}

        impl<G: $first $(+ $rest)*> $name for G {}
    };
}

composite_capability!(
    /// Incidence graph with enumerable vertices
    VertexListGraph: IncidenceGraph, VertexSet
);
composite_capability!(
    /// Graph with enumerable vertices and edges
    EdgeListGraph: VertexSet, EdgeSet
);
composite_capability!(
    /// Incidence graph with enumerable vertices and edges
    VertexAndEdgeListGraph: VertexListGraph, EdgeListGraph
);
composite_capability!(
    /// Incidence graph with enumerable edges
    EdgeListAndIncidenceGraph: EdgeListGraph, IncidenceGraph
);
composite_capability!(
    /// Fully enumerable graph with access to in- and out-edges
    BidirectionalGraph: BidirectionalIncidenceGraph, VertexAndEdgeListGraph
);
composite_capability!(
    /// Fully enumerable undirected graph
    UndirectedGraph: ImplicitUndirectedGraph, VertexSet, EdgeSet
);

/// Provides functions to insert/delete vertices and edges
pub trait MutableGraph: GraphType {
    /// Adds `v` to the graph.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Adds all vertices in the collection and returns the number of newly added vertices
    fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Self::Vertex>) -> usize {
        vertices
            .into_iter()
            .filter(|&v| self.add_vertex(v))
            .count()
    }

    /// Adds an edge between two present vertices.
    /// Returns *false* if the edge was rejected by the parallel edge policy.
    /// Fails with [`GraphError::VertexNotFound`] if an endpoint is missing.
    fn add_edge(&mut self, edge: Self::Edge) -> Result<bool>;

    /// Adds all edges in the collection and returns the number of accepted edges
    fn add_edges(&mut self, edges: impl IntoIterator<Item = Self::Edge>) -> Result<usize> {
        let mut added = 0;
        for edge in edges {
            added += self.add_edge(edge)? as usize;
        }
        Ok(added)
    }

    /// Adds the edge as well as any missing endpoint.
    /// Returns *true* if the edge was accepted.
    fn add_vertices_and_edge(&mut self, edge: Self::Edge) -> bool {
        self.add_vertex(edge.source());
        self.add_vertex(edge.target());
        matches!(self.add_edge(edge), Ok(true))
    }

    /// Adds all edges in the collection together with their endpoints.
    /// Returns the number of accepted edges.
    fn add_vertices_and_edges(&mut self, edges: impl IntoIterator<Item = Self::Edge>) -> usize {
        edges
            .into_iter()
            .filter(|e| self.add_vertices_and_edge(e.clone()))
            .count()
    }

    /// Removes one stored edge equal to `edge`.
    /// Returns *true* if an edge was removed.
    fn remove_edge(&mut self, edge: &Self::Edge) -> bool;

    /// Removes `v` and all edges incident to it.
    /// Returns *true* if the vertex was present.
    fn remove_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Removes all vertices and edges
    fn clear(&mut self);
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: MutableGraph + Default {
    /// Creates a graph from an iterator over edges; endpoints are added on the fly
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Self::Edge>>) -> Self {
        let mut graph = Self::default();
        graph.add_vertices_and_edges(edges.into_iter().map(|e| e.into()));
        graph
    }

    /// Creates a graph from vertices (kept in the given order) and edges
    fn from_vertices_and_edges(
        vertices: impl IntoIterator<Item = Self::Vertex>,
        edges: impl IntoIterator<Item = impl Into<Self::Edge>>,
    ) -> Self {
        let mut graph = Self::default();
        graph.add_vertices(vertices);
        graph.add_vertices_and_edges(edges.into_iter().map(|e| e.into()));
        graph
    }
}

impl<G: MutableGraph + Default> GraphFromScratch for G {}

/// Degree statistics of a graph with enumerable vertices
pub trait DegreeStatistics: VertexListGraph {
    /// Returns an iterator over the out-degrees of all vertices
    fn out_degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices().map(|u| self.out_degree(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_out_degree(&self) -> usize {
        self.out_degrees().max().unwrap_or(0)
    }

    /// Returns vertices without outgoing edges
    fn sinks(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.vertices().filter(|&u| self.is_out_edges_empty(u))
    }
}

impl<G: VertexListGraph> DegreeStatistics for G {}
