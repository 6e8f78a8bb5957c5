use std::marker::PhantomData;

use super::*;
use crate::repr::{StoreEdge, StoreVertex, VertexStore};

/// An implicit directed graph whose out-edges are produced by a closure.
///
/// A vertex is part of the graph iff the closure returns `Some` for it.
///
/// ```rust
/// use vgraphs::{prelude::*, adapters::*, algo::*};
///
/// // the divisibility graph on 1..=12
/// let graph = DelegateIncidenceGraph::new(|u: u32| {
///     (1..=12).contains(&u).then(|| (2..).map(move |k| Edge(u, k * u)).take_while(|e| e.1 <= 12))
/// });
///
/// let mut order = VertexRecorder::new(RecordOn::Discover);
/// let mut dfs = ImplicitDepthFirstSearch::new(&graph).with_root(3).with_visitor(&mut order);
/// dfs.compute().unwrap();
/// drop(dfs);
/// assert_eq!(order.vertices(), &[3, 6, 12, 9]);
/// ```
pub struct DelegateIncidenceGraph<V, E, F, I> {
    out_edges: F,
    allow_parallel_edges: bool,
    _marker: PhantomData<(V, E, I)>,
}

impl<V, E, F, I> DelegateIncidenceGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    pub fn new(out_edges: F) -> Self {
        Self {
            out_edges,
            allow_parallel_edges: true,
            _marker: PhantomData,
        }
    }

    pub fn with_parallel_edges(mut self, allow_parallel_edges: bool) -> Self {
        self.allow_parallel_edges = allow_parallel_edges;
        self
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, F, I> GraphType for DelegateIncidenceGraph<V, E, F, I> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }
}

impl<V, E, F, I> ImplicitVertexSet for DelegateIncidenceGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    fn contains_vertex(&self, v: V) -> bool {
        (self.out_edges)(v).is_some()
    }
}

impl<V, E, F, I> ImplicitGraph for DelegateIncidenceGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    fn out_edges(&self, u: V) -> impl Iterator<Item = E> + '_ {
        (self.out_edges)(u).into_iter().flatten()
    }
}

impl<V, E, F, I> IncidenceGraph for DelegateIncidenceGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
}

/// Collects a vertex list, dropping duplicates
fn vertex_list<V: StoreVertex>(vertices: impl IntoIterator<Item = V>) -> VertexStore<V, ()> {
    let mut list = VertexStore::default();
    for v in vertices {
        list.insert_with(v, || ());
    }
    list
}

/// A directed graph with an explicit vertex list whose out-edges are produced by a closure.
///
/// Listed vertices for which the closure returns `None` have no out-edges. Edges are enumerated
/// per vertex in list order.
pub struct DelegateVertexAndEdgeListGraph<V, E, F, I> {
    vertices: VertexStore<V, ()>,
    out_edges: F,
    allow_parallel_edges: bool,
    _marker: PhantomData<(E, I)>,
}

impl<V, E, F, I> DelegateVertexAndEdgeListGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    pub fn new(vertices: impl IntoIterator<Item = V>, out_edges: F) -> Self {
        Self {
            vertices: vertex_list(vertices),
            out_edges,
            allow_parallel_edges: true,
            _marker: PhantomData,
        }
    }

    pub fn with_parallel_edges(mut self, allow_parallel_edges: bool) -> Self {
        self.allow_parallel_edges = allow_parallel_edges;
        self
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, F, I> GraphType for DelegateVertexAndEdgeListGraph<V, E, F, I> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, F, I> ImplicitVertexSet
    for DelegateVertexAndEdgeListGraph<V, E, F, I>
{
    fn contains_vertex(&self, v: V) -> bool {
        self.vertices.contains(v)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, F, I> VertexSet for DelegateVertexAndEdgeListGraph<V, E, F, I> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.keys()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, E, F, I> ImplicitGraph for DelegateVertexAndEdgeListGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    fn out_edges(&self, u: V) -> impl Iterator<Item = E> + '_ {
        self.contains_vertex(u)
            .then(|| (self.out_edges)(u))
            .flatten()
            .into_iter()
            .flatten()
    }
}

impl<V, E, F, I> IncidenceGraph for DelegateVertexAndEdgeListGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
}

impl<V, E, F, I> EdgeSet for DelegateVertexAndEdgeListGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.vertices.keys().flat_map(|u| self.out_edges(u))
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.out_edges(edge.source()).any(|e| e == *edge)
    }
}

/// A directed graph with an explicit vertex list whose out- and in-edges are produced by closures.
///
/// The closures must agree: `e` is an out-edge of `u` iff it is an in-edge of `e.target()`.
pub struct DelegateBidirectionalGraph<V, E, FO, FI, IO, II> {
    inner: DelegateVertexAndEdgeListGraph<V, E, FO, IO>,
    in_edges: FI,
    _marker: PhantomData<II>,
}

impl<V, E, FO, FI, IO, II> DelegateBidirectionalGraph<V, E, FO, FI, IO, II>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    FO: Fn(V) -> Option<IO>,
    IO: IntoIterator<Item = E>,
    FI: Fn(V) -> Option<II>,
    II: IntoIterator<Item = E>,
{
    pub fn new(vertices: impl IntoIterator<Item = V>, out_edges: FO, in_edges: FI) -> Self {
        Self {
            inner: DelegateVertexAndEdgeListGraph::new(vertices, out_edges),
            in_edges,
            _marker: PhantomData,
        }
    }

    pub fn with_parallel_edges(mut self, allow_parallel_edges: bool) -> Self {
        self.inner = self.inner.with_parallel_edges(allow_parallel_edges);
        self
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, FO, FI, IO, II> GraphType for DelegateBidirectionalGraph<V, E, FO, FI, IO, II> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.inner.allow_parallel_edges()
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, FO, FI, IO, II> ImplicitVertexSet
    for DelegateBidirectionalGraph<V, E, FO, FI, IO, II>
{
    fn contains_vertex(&self, v: V) -> bool {
        self.inner.contains_vertex(v)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, FO, FI, IO, II> VertexSet
    for DelegateBidirectionalGraph<V, E, FO, FI, IO, II>
{
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.inner.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }
}

impl<V, E, FO, FI, IO, II> EdgeSet for DelegateBidirectionalGraph<V, E, FO, FI, IO, II>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    FO: Fn(V) -> Option<IO>,
    IO: IntoIterator<Item = E>,
{
    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.inner.edges()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.inner.contains_edge(edge)
    }
}

impl<V, E, FO, FI, IO, II> ImplicitGraph for DelegateBidirectionalGraph<V, E, FO, FI, IO, II>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    FO: Fn(V) -> Option<IO>,
    IO: IntoIterator<Item = E>,
{
    fn out_edges(&self, u: V) -> impl Iterator<Item = E> + '_ {
        self.inner.out_edges(u)
    }
}

impl<V, E, FO, FI, IO, II> IncidenceGraph for DelegateBidirectionalGraph<V, E, FO, FI, IO, II>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    FO: Fn(V) -> Option<IO>,
    IO: IntoIterator<Item = E>,
{
}

impl<V, E, FO, FI, IO, II> BidirectionalIncidenceGraph for DelegateBidirectionalGraph<V, E, FO, FI, IO, II>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    FO: Fn(V) -> Option<IO>,
    IO: IntoIterator<Item = E>,
    FI: Fn(V) -> Option<II>,
    II: IntoIterator<Item = E>,
{
    fn in_edges(&self, v: V) -> impl Iterator<Item = E> + '_ {
        self.contains_vertex(v)
            .then(|| (self.in_edges)(v))
            .flatten()
            .into_iter()
            .flatten()
    }
}

/// An undirected graph with an explicit vertex list whose adjacent edges are produced by a closure.
///
/// The closure must report an edge `{u, v}` for both endpoints in the same orientation, and a
/// self-edge once. Each edge is enumerated by [`EdgeSet::edges`] from its source.
pub struct DelegateUndirectedGraph<V, E: EdgeEndpoints, F, I> {
    vertices: VertexStore<V, ()>,
    adjacent_edges: F,
    edge_equality: EdgeEquality<E>,
    _marker: PhantomData<I>,
}

impl<V, E, F, I> DelegateUndirectedGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    pub fn new(vertices: impl IntoIterator<Item = V>, adjacent_edges: F) -> Self {
        Self {
            vertices: vertex_list(vertices),
            adjacent_edges,
            edge_equality: undirected_vertex_equality::<E>,
            _marker: PhantomData,
        }
    }

    /// Replaces the function deciding whether an edge connects two vertices
    pub fn with_edge_equality(mut self, edge_equality: EdgeEquality<E>) -> Self {
        self.edge_equality = edge_equality;
        self
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, F, I> GraphType for DelegateUndirectedGraph<V, E, F, I> {
    type Vertex = V;
    type Edge = E;

    fn is_directed(&self) -> bool {
        false
    }

    fn allow_parallel_edges(&self) -> bool {
        true
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, F, I> ImplicitVertexSet for DelegateUndirectedGraph<V, E, F, I> {
    fn contains_vertex(&self, v: V) -> bool {
        self.vertices.contains(v)
    }
}

impl<V: StoreVertex, E: StoreEdge<V>, F, I> VertexSet for DelegateUndirectedGraph<V, E, F, I> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.keys()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, E, F, I> ImplicitUndirectedGraph for DelegateUndirectedGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    fn adjacent_edges(&self, v: V) -> impl Iterator<Item = E> + '_ {
        self.contains_vertex(v)
            .then(|| (self.adjacent_edges)(v))
            .flatten()
            .into_iter()
            .flatten()
    }

    fn edge_equality(&self) -> EdgeEquality<E> {
        self.edge_equality
    }
}

impl<V, E, F, I> EdgeSet for DelegateUndirectedGraph<V, E, F, I>
where
    V: StoreVertex,
    E: StoreEdge<V>,
    F: Fn(V) -> Option<I>,
    I: IntoIterator<Item = E>,
{
    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.vertices
            .keys()
            .flat_map(|u| self.adjacent_edges(u).filter(move |e| e.source() == u))
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.adjacent_edges(edge.source()).any(|e| e == *edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, testing::search::*};
    use itertools::Itertools;

    #[test]
    fn incidence_membership() {
        let graph = DelegateIncidenceGraph::new(|u: u32| (u < 4).then(|| [Edge(u, (u + 1) % 4)]));

        assert!(graph.contains_vertex(3));
        assert!(!graph.contains_vertex(4));
        assert_eq!(graph.out_edges(3).collect_vec(), vec![Edge(3, 0)]);
        assert_eq!(graph.out_edges(9).count(), 0);
        assert_eq!(graph.try_get_edge(1, 2), Some(Edge(1, 2)));

        let mut dfs = ImplicitDepthFirstSearch::new(&graph);
        assert!(matches!(
            dfs.compute_from(4),
            Err(GraphError::RootNotInGraph { .. })
        ));
    }

    #[test]
    fn list_graph_matches_store() {
        for store in random_digraphs(47) {
            let graph = DelegateVertexAndEdgeListGraph::new(store.vertices(), |u| {
                store.contains_vertex(u).then(|| store.out_edges(u).collect_vec())
            });

            assert_eq!(graph.vertex_count(), store.vertex_count());
            assert_eq!(graph.edge_count(), store.edge_count());
            assert!(store.edges().all(|e| graph.contains_edge(&e)));
            assert_eq!(graph.dfs_discovery_order(), store.dfs_discovery_order());
            assert_eq!(graph.bfs_distances(0), store.bfs_distances(0));
        }
    }

    #[test]
    fn bidirectional_closures() {
        let store: BiGraph<u32> = BiGraph::from_edges([(0, 1), (2, 1), (1, 3)]);
        let graph = DelegateBidirectionalGraph::new(
            store.vertices(),
            |u| Some(store.out_edges(u).collect_vec()),
            |v| Some(store.in_edges(v).collect_vec()),
        );

        assert_eq!(graph.in_degree(1), 2);
        assert_eq!(graph.in_edges(5).count(), 0);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = BidirectionalDepthFirstSearch::new(&graph)
            .with_root(3)
            .with_visitor(&mut order);
        dfs.compute().unwrap();
        drop(dfs);
        assert_eq!(order.vertices(), &[3, 1, 0, 2]);
    }

    #[test]
    fn undirected_closure() {
        let store: UnGraph<u32> = UnGraph::from_edges([(0, 1), (1, 2), (2, 2), (3, 1)]);
        let graph = DelegateUndirectedGraph::new(store.vertices(), |v| {
            Some(store.adjacent_edges(v).collect_vec())
        });

        assert_eq!(graph.edge_count(), store.edge_count());
        assert_eq!(
            graph.edges().sorted().collect_vec(),
            store.edges().sorted().collect_vec()
        );
        assert!(graph.contains_undirected_edge(1, 3));
        assert_eq!(graph.connected_components(), store.connected_components());
    }

    #[test]
    fn undirected_closure_with_edge_equality() {
        let graph = DelegateUndirectedGraph::new(0..3u32, |v| {
            Some([Edge(0, 1), Edge(1, 2)].into_iter().filter(move |e| e.is_adjacent(v)))
        })
        .with_edge_equality(|e, u, v| e.source() == u && e.target() == v);

        assert!(graph.contains_undirected_edge(0, 1));
        assert!(!graph.contains_undirected_edge(1, 0));
        assert_eq!(graph.try_get_undirected_edge(1, 2), Some(Edge(1, 2)));
        assert_eq!(graph.edge_count(), 2);
    }
}
