/*!
# Directed Graph Representations

- [`AdjacencyGraph`] stores **only outgoing edges**. In-edges are not available; wrap the graph in a
  [`BidirectionalAdapter`](crate::adapters::BidirectionalAdapter) if they are needed.
- [`BidirectionalAdjacencyGraph`] stores **both outgoing and incoming edges**, enabling efficient
  access to in-edges at the cost of storing every edge twice.

Both stores accept arbitrary vertex and edge types. [`DiGraph`] and [`BiGraph`] fix the edge type
to the plain [`Edge`].
*/

use super::*;
use crate::{error::*, ops::*, testing::test_graph_ops};

/// A directed graph storing only **outgoing edges** per vertex
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V, E> {
    out_edges: VertexStore<V, EdgeList<E>>,
    num_edges: usize,
    allow_parallel_edges: bool,
}

/// Directed out-edge store over plain edges
pub type DiGraph<V> = AdjacencyGraph<V, Edge<V>>;

impl<V: StoreVertex, E: StoreEdge<V>> AdjacencyGraph<V, E> {
    /// Creates an empty graph.
    /// If `allow_parallel_edges` is *false*, edges between already connected vertices are rejected.
    pub fn new(allow_parallel_edges: bool) -> Self {
        Self::with_capacity(0, allow_parallel_edges)
    }

    /// Creates an empty graph with space reserved for `vertices` vertices
    pub fn with_capacity(vertices: usize, allow_parallel_edges: bool) -> Self {
        Self {
            out_edges: VertexStore::with_capacity(vertices),
            num_edges: 0,
            allow_parallel_edges,
        }
    }

    fn require_vertices(&self, edge: &E) -> Result<()> {
        for v in [edge.source(), edge.target()] {
            if !self.out_edges.contains(v) {
                return Err(GraphError::vertex_not_found(v));
            }
        }
        Ok(())
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> GraphType for AdjacencyGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> ImplicitVertexSet for AdjacencyGraph<V, E> {
    fn contains_vertex(&self, v: V) -> bool {
        self.out_edges.contains(v)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> VertexSet for AdjacencyGraph<V, E> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.out_edges.keys()
    }

    fn vertex_count(&self) -> usize {
        self.out_edges.len()
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> EdgeSet for AdjacencyGraph<V, E> {
    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.out_edges
            .iter()
            .flat_map(|(_, out)| out.iter().cloned())
    }

    fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.out_edges
            .get(edge.source())
            .is_some_and(|out| out.contains(edge))
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> ImplicitGraph for AdjacencyGraph<V, E> {
    fn out_edges(&self, u: V) -> impl Iterator<Item = E> + '_ {
        self.out_edges
            .get(u)
            .into_iter()
            .flat_map(|out| out.iter().cloned())
    }

    fn out_degree(&self, u: V) -> usize {
        self.out_edges.get(u).map_or(0, |out| out.len())
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> IncidenceGraph for AdjacencyGraph<V, E> {}

impl<V: StoreVertex, E: StoreEdge<V>> MutableGraph for AdjacencyGraph<V, E> {
    fn add_vertex(&mut self, v: V) -> bool {
        self.out_edges.insert_with(v, EdgeList::new)
    }

    fn add_edge(&mut self, edge: E) -> Result<bool> {
        self.require_vertices(&edge)?;
        if !self.allow_parallel_edges && self.contains_edge_between(edge.source(), edge.target())
        {
            return Ok(false);
        }

        if let Some(out) = self.out_edges.get_mut(edge.source()) {
            out.push(edge);
            self.num_edges += 1;
        }
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let removed = self
            .out_edges
            .get_mut(edge.source())
            .is_some_and(|out| remove_first(out, edge));

        self.num_edges -= removed as usize;
        removed
    }

    fn remove_vertex(&mut self, v: V) -> bool {
        let Some(out) = self.out_edges.remove(v) else {
            return false;
        };

        self.num_edges -= out.len();
        for out in self.out_edges.values_mut() {
            let before = out.len();
            out.retain(|e| e.target() != v);
            self.num_edges -= before - out.len();
        }
        true
    }

    fn clear(&mut self) {
        self.out_edges.clear();
        self.num_edges = 0;
    }
}

/// In- and out-edges of a single vertex
#[derive(Clone, Debug)]
struct Incidence<E> {
    out: EdgeList<E>,
    inc: EdgeList<E>,
}

impl<E> Incidence<E> {
    fn new() -> Self {
        Self {
            out: EdgeList::new(),
            inc: EdgeList::new(),
        }
    }
}

/// A directed graph storing **both outgoing and incoming edges** per vertex
#[derive(Clone, Debug)]
pub struct BidirectionalAdjacencyGraph<V, E> {
    incidences: VertexStore<V, Incidence<E>>,
    num_edges: usize,
    allow_parallel_edges: bool,
}

/// Directed in- and out-edge store over plain edges
pub type BiGraph<V> = BidirectionalAdjacencyGraph<V, Edge<V>>;

impl<V: StoreVertex, E: StoreEdge<V>> BidirectionalAdjacencyGraph<V, E> {
    /// Creates an empty graph.
    /// If `allow_parallel_edges` is *false*, edges between already connected vertices are rejected.
    pub fn new(allow_parallel_edges: bool) -> Self {
        Self::with_capacity(0, allow_parallel_edges)
    }

    /// Creates an empty graph with space reserved for `vertices` vertices
    pub fn with_capacity(vertices: usize, allow_parallel_edges: bool) -> Self {
        Self {
            incidences: VertexStore::with_capacity(vertices),
            num_edges: 0,
            allow_parallel_edges,
        }
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> Default for BidirectionalAdjacencyGraph<V, E> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> GraphType for BidirectionalAdjacencyGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> ImplicitVertexSet for BidirectionalAdjacencyGraph<V, E> {
    fn contains_vertex(&self, v: V) -> bool {
        self.incidences.contains(v)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> VertexSet for BidirectionalAdjacencyGraph<V, E> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.incidences.keys()
    }

    fn vertex_count(&self) -> usize {
        self.incidences.len()
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> EdgeSet for BidirectionalAdjacencyGraph<V, E> {
    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.incidences
            .iter()
            .flat_map(|(_, inc)| inc.out.iter().cloned())
    }

    fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.incidences
            .get(edge.source())
            .is_some_and(|inc| inc.out.contains(edge))
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> ImplicitGraph for BidirectionalAdjacencyGraph<V, E> {
    fn out_edges(&self, u: V) -> impl Iterator<Item = E> + '_ {
        self.incidences
            .get(u)
            .into_iter()
            .flat_map(|inc| inc.out.iter().cloned())
    }

    fn out_degree(&self, u: V) -> usize {
        self.incidences.get(u).map_or(0, |inc| inc.out.len())
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> IncidenceGraph for BidirectionalAdjacencyGraph<V, E> {}

impl<V: StoreVertex, E: StoreEdge<V>> BidirectionalIncidenceGraph
    for BidirectionalAdjacencyGraph<V, E>
{
    fn in_edges(&self, v: V) -> impl Iterator<Item = E> + '_ {
        self.incidences
            .get(v)
            .into_iter()
            .flat_map(|inc| inc.inc.iter().cloned())
    }

    fn in_degree(&self, v: V) -> usize {
        self.incidences.get(v).map_or(0, |inc| inc.inc.len())
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> MutableGraph for BidirectionalAdjacencyGraph<V, E> {
    fn add_vertex(&mut self, v: V) -> bool {
        self.incidences.insert_with(v, Incidence::new)
    }

    fn add_edge(&mut self, edge: E) -> Result<bool> {
        let (source, target) = edge.endpoints();
        for v in [source, target] {
            if !self.incidences.contains(v) {
                return Err(GraphError::vertex_not_found(v));
            }
        }

        if !self.allow_parallel_edges && self.contains_edge_between(source, target) {
            return Ok(false);
        }

        if let Some(inc) = self.incidences.get_mut(target) {
            inc.inc.push(edge.clone());
        }
        if let Some(inc) = self.incidences.get_mut(source) {
            inc.out.push(edge);
        }
        self.num_edges += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let removed = self
            .incidences
            .get_mut(edge.source())
            .is_some_and(|inc| remove_first(&mut inc.out, edge));

        if removed {
            if let Some(inc) = self.incidences.get_mut(edge.target()) {
                remove_first(&mut inc.inc, edge);
            }
            self.num_edges -= 1;
        }
        removed
    }

    fn remove_vertex(&mut self, v: V) -> bool {
        if self.incidences.remove(v).is_none() {
            return false;
        }

        let mut num_edges = 0;
        for inc in self.incidences.values_mut() {
            inc.out.retain(|e| e.target() != v);
            inc.inc.retain(|e| e.source() != v);
            num_edges += inc.out.len();
        }
        self.num_edges = num_edges;
        true
    }

    fn clear(&mut self) {
        self.incidences.clear();
        self.num_edges = 0;
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adjacency_graph,
    DiGraph<u32>,
    false,
    (VertexSet, EdgeSet, ImplicitGraph, MutableGraph)
);

test_graph_ops!(
    test_bidirectional_adjacency_graph,
    BiGraph<u32>,
    false,
    (
        VertexSet,
        EdgeSet,
        ImplicitGraph,
        BidirectionalIncidenceGraph,
        MutableGraph
    )
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn missing_endpoint_is_rejected() {
        let mut graph = DiGraph::<u32>::default();
        graph.add_vertex(1);
        assert_eq!(
            graph.add_edge(Edge(1, 2)),
            Err(GraphError::VertexNotFound {
                vertex: "2".to_string()
            })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn parallel_edge_policy() {
        let mut strict = DiGraph::<u32>::new(false);
        strict.add_vertices([1, 2]);
        assert_eq!(strict.add_edge(Edge(1, 2)), Ok(true));
        assert_eq!(strict.add_edge(Edge(1, 2)), Ok(false));
        assert_eq!(strict.edge_count(), 1);

        let mut multi = BidirectionalAdjacencyGraph::<u32, TaggedEdge<u32, u8>>::default();
        multi.add_vertices([1, 2]);
        assert_eq!(multi.add_edge(TaggedEdge::new(1, 2, 0)), Ok(true));
        assert_eq!(multi.add_edge(TaggedEdge::new(1, 2, 1)), Ok(true));
        assert_eq!(multi.try_get_edges(1, 2).map(|es| es.len()), Some(2));
        assert_eq!(multi.try_get_edges(3, 2), None);
        assert_eq!(multi.in_degree(2), 2);
    }

    #[test]
    fn positional_access() {
        let graph: BiGraph<u32> = BiGraph::from_edges([(0, 1), (0, 2), (3, 0)]);
        assert_eq!(graph.out_edge(0, 1), Ok(Edge(0, 2)));
        assert_eq!(
            graph.out_edge(0, 2),
            Err(GraphError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(graph.in_edge(0, 0), Ok(Edge(3, 0)));
        assert_eq!(graph.degree(0), 3);
    }

    #[test]
    fn remove_vertex_drops_incident_edges() {
        let mut graph: BiGraph<u32> = BiGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 1), (2, 3)]);
        assert!(graph.remove_vertex(1));
        assert!(!graph.remove_vertex(1));

        assert_eq!(graph.vertices().collect_vec(), vec![0, 2, 3]);
        assert_eq!(graph.edges().collect_vec(), vec![Edge(2, 0), Edge(2, 3)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.in_edges(0).collect_vec(), vec![Edge(2, 0)]);
        assert!(graph.is_out_edges_empty(0));

        let mut graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 1)]);
        assert!(graph.remove_vertex(1));
        assert_eq!(graph.edges().collect_vec(), vec![Edge(2, 0)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn unknown_vertices_have_no_edges() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1)]);
        assert_eq!(graph.out_edges(7).count(), 0);
        assert_eq!(graph.out_degree(7), 0);
        assert!(!graph.contains_vertex(7));
    }
}
