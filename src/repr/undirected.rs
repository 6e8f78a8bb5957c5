use super::*;
use crate::{error::*, ops::*, testing::test_graph_ops};

/// An undirected graph storing the **adjacent edges** of every vertex.
///
/// - An edge `{u, v}` with `u != v` is stored in the lists of both endpoints.
/// - A self-edge is stored once, hence it contributes exactly `1` to the adjacent degree.
/// - Whether an edge connects two vertices is decided by the configured [`EdgeEquality`].
#[derive(Clone, Debug)]
pub struct UndirectedAdjacencyGraph<V, E: EdgeEndpoints> {
    adjacent: VertexStore<V, EdgeList<E>>,
    num_edges: usize,
    allow_parallel_edges: bool,
    edge_equality: EdgeEquality<E>,
}

/// Undirected store over plain edges
pub type UnGraph<V> = UndirectedAdjacencyGraph<V, Edge<V>>;

impl<V: StoreVertex, E: StoreEdge<V>> UndirectedAdjacencyGraph<V, E> {
    /// Creates an empty graph.
    /// If `allow_parallel_edges` is *false*, edges between already connected vertices are rejected.
    pub fn new(allow_parallel_edges: bool) -> Self {
        Self::with_capacity(0, allow_parallel_edges)
    }

    /// Creates an empty graph with space reserved for `vertices` vertices
    pub fn with_capacity(vertices: usize, allow_parallel_edges: bool) -> Self {
        Self {
            adjacent: VertexStore::with_capacity(vertices),
            num_edges: 0,
            allow_parallel_edges,
            edge_equality: undirected_vertex_equality::<E>,
        }
    }

    /// Replaces the function deciding whether an edge connects two vertices
    pub fn with_edge_equality(mut self, edge_equality: EdgeEquality<E>) -> Self {
        self.edge_equality = edge_equality;
        self
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> Default for UndirectedAdjacencyGraph<V, E> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> GraphType for UndirectedAdjacencyGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        false
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> ImplicitVertexSet for UndirectedAdjacencyGraph<V, E> {
    fn contains_vertex(&self, v: V) -> bool {
        self.adjacent.contains(v)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> VertexSet for UndirectedAdjacencyGraph<V, E> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adjacent.keys()
    }

    fn vertex_count(&self) -> usize {
        self.adjacent.len()
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> EdgeSet for UndirectedAdjacencyGraph<V, E> {
    /// Every edge is reported by the list of its source
    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.adjacent.iter().flat_map(|(u, adj)| {
            adj.iter()
                .filter(move |e| e.source() == u)
                .cloned()
        })
    }

    fn edge_count(&self) -> usize {
        self.num_edges
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.adjacent
            .get(edge.source())
            .is_some_and(|adj| adj.contains(edge))
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> ImplicitUndirectedGraph for UndirectedAdjacencyGraph<V, E> {
    fn adjacent_edges(&self, v: V) -> impl Iterator<Item = E> + '_ {
        self.adjacent
            .get(v)
            .into_iter()
            .flat_map(|adj| adj.iter().cloned())
    }

    fn adjacent_degree(&self, v: V) -> usize {
        self.adjacent.get(v).map_or(0, |adj| adj.len())
    }

    fn edge_equality(&self) -> EdgeEquality<E> {
        self.edge_equality
    }
}

impl<V: StoreVertex, E: StoreEdge<V>> MutableGraph for UndirectedAdjacencyGraph<V, E> {
    fn add_vertex(&mut self, v: V) -> bool {
        self.adjacent.insert_with(v, EdgeList::new)
    }

    fn add_edge(&mut self, edge: E) -> Result<bool> {
        let (source, target) = edge.endpoints();
        for v in [source, target] {
            if !self.adjacent.contains(v) {
                return Err(GraphError::vertex_not_found(v));
            }
        }

        if !self.allow_parallel_edges && self.contains_undirected_edge(source, target) {
            return Ok(false);
        }

        if source != target {
            if let Some(adj) = self.adjacent.get_mut(target) {
                adj.push(edge.clone());
            }
        }
        if let Some(adj) = self.adjacent.get_mut(source) {
            adj.push(edge);
        }
        self.num_edges += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let removed = self
            .adjacent
            .get_mut(edge.source())
            .is_some_and(|adj| remove_first(adj, edge));

        if removed {
            if !edge.is_self_edge() {
                if let Some(adj) = self.adjacent.get_mut(edge.target()) {
                    remove_first(adj, edge);
                }
            }
            self.num_edges -= 1;
        }
        removed
    }

    fn remove_vertex(&mut self, v: V) -> bool {
        if self.adjacent.remove(v).is_none() {
            return false;
        }

        for adj in self.adjacent.values_mut() {
            adj.retain(|e| !e.is_adjacent(v));
        }
        self.num_edges = self.edges().count();
        true
    }

    fn clear(&mut self) {
        self.adjacent.clear();
        self.num_edges = 0;
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_undirected_adjacency_graph,
    UnGraph<u32>,
    true,
    (VertexSet, EdgeSet, ImplicitUndirectedGraph, MutableGraph)
);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn self_edge_is_stored_once() {
        let mut graph = UnGraph::<char>::default();
        assert!(graph.add_vertices_and_edge(Edge('a', 'a')));

        assert_eq!(graph.adjacent_degree('a'), 1);
        assert_eq!(graph.adjacent_edges('a').collect_vec(), vec![Edge('a', 'a')]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().count(), 1);

        assert!(graph.remove_edge(&Edge('a', 'a')));
        assert!(graph.is_adjacent_edges_empty('a'));
    }

    #[test]
    fn orientation_is_irrelevant() {
        let mut graph = UnGraph::<u32>::new(false);
        assert!(graph.add_vertices_and_edge(Edge(1, 2)));
        assert!(!graph.add_vertices_and_edge(Edge(2, 1)));

        assert!(graph.contains_undirected_edge(2, 1));
        assert_eq!(graph.try_get_undirected_edge(2, 1), Some(Edge(1, 2)));
        assert_eq!(graph.adjacent_edge(2, 0), Ok(Edge(1, 2)));
        assert!(graph.adjacent_edge(2, 1).is_err());
    }

    #[test]
    fn custom_edge_equality() {
        let mut graph = UnGraph::<u32>::new(false).with_edge_equality(sorted_vertex_equality);
        graph.add_vertices_and_edge(Edge(1, 2));
        assert!(graph.contains_undirected_edge(2, 1));
        assert!(graph.contains_undirected_edge(1, 2));
        assert!(!graph.contains_undirected_edge(1, 3));
    }

    #[test]
    fn remove_vertex_drops_incident_edges() {
        let mut graph: UnGraph<u32> = UnGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 1)]);
        assert_eq!(graph.adjacent_degree(1), 3);

        assert!(graph.remove_vertex(1));
        assert_eq!(graph.edges().collect_vec(), vec![Edge(2, 0)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacent_degree(0), 1);
        assert_eq!(graph.adjacent_degree(2), 1);
    }
}
