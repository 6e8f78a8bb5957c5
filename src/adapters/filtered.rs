use super::*;

/// A view hiding the vertices and edges of a graph that fail a predicate.
///
/// An edge is visible iff it passes the edge predicate and both of its endpoints are visible.
/// Predicates are re-evaluated on every query, so counts take time linear in the size of the
/// wrapped graph. The view offers every capability the wrapped graph has.
///
/// ```rust
/// use vgraphs::{prelude::*, adapters::*, algo::*};
///
/// let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (0, 3), (3, 2)]);
/// let view = FilteredGraph::new(&graph, |v| v != 1, |e: &Edge<u32>| e.1 != 2);
///
/// assert_eq!(view.vertex_count(), 3);
/// assert_eq!(view.edges().collect::<Vec<_>>(), vec![Edge(0, 3)]);
/// assert_eq!(view.dfs_discovery_order(), Ok(vec![0, 3, 2]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FilteredGraph<'a, G, VP, EP> {
    graph: &'a G,
    vertex_predicate: VP,
    edge_predicate: EP,
}

impl<'a, G, VP, EP> FilteredGraph<'a, G, VP, EP>
where
    G: GraphType,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    pub fn new(graph: &'a G, vertex_predicate: VP, edge_predicate: EP) -> Self {
        Self {
            graph,
            vertex_predicate,
            edge_predicate,
        }
    }

    pub fn original_graph(&self) -> &'a G {
        self.graph
    }

    #[inline]
    fn is_vertex_visible(&self, v: G::Vertex) -> bool {
        (self.vertex_predicate)(v)
    }

    #[inline]
    fn is_edge_visible(&self, edge: &G::Edge) -> bool {
        (self.edge_predicate)(edge)
            && self.is_vertex_visible(edge.source())
            && self.is_vertex_visible(edge.target())
    }
}

impl<G, VP, EP> GraphType for FilteredGraph<'_, G, VP, EP>
where
    G: GraphType,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn allow_parallel_edges(&self) -> bool {
        self.graph.allow_parallel_edges()
    }
}

impl<G, VP, EP> ImplicitVertexSet for FilteredGraph<'_, G, VP, EP>
where
    G: ImplicitVertexSet,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    fn contains_vertex(&self, v: G::Vertex) -> bool {
        self.is_vertex_visible(v) && self.graph.contains_vertex(v)
    }
}

impl<G, VP, EP> VertexSet for FilteredGraph<'_, G, VP, EP>
where
    G: VertexSet,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    fn vertices(&self) -> impl Iterator<Item = G::Vertex> + '_ {
        self.graph.vertices().filter(|&v| self.is_vertex_visible(v))
    }

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

impl<G, VP, EP> EdgeSet for FilteredGraph<'_, G, VP, EP>
where
    G: EdgeSet,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    fn edges(&self) -> impl Iterator<Item = G::Edge> + '_ {
        self.graph.edges().filter(|e| self.is_edge_visible(e))
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn contains_edge(&self, edge: &G::Edge) -> bool {
        self.is_edge_visible(edge) && self.graph.contains_edge(edge)
    }
}

impl<G, VP, EP> ImplicitGraph for FilteredGraph<'_, G, VP, EP>
where
    G: ImplicitGraph,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    fn out_edges(&self, u: G::Vertex) -> impl Iterator<Item = G::Edge> + '_ {
        self.graph.out_edges(u).filter(|e| self.is_edge_visible(e))
    }
}

impl<G, VP, EP> IncidenceGraph for FilteredGraph<'_, G, VP, EP>
where
    G: IncidenceGraph,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
}

impl<G, VP, EP> BidirectionalIncidenceGraph for FilteredGraph<'_, G, VP, EP>
where
    G: BidirectionalIncidenceGraph,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    fn in_edges(&self, v: G::Vertex) -> impl Iterator<Item = G::Edge> + '_ {
        self.graph.in_edges(v).filter(|e| self.is_edge_visible(e))
    }
}

impl<G, VP, EP> ImplicitUndirectedGraph for FilteredGraph<'_, G, VP, EP>
where
    G: ImplicitUndirectedGraph,
    VP: Fn(G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    fn adjacent_edges(&self, v: G::Vertex) -> impl Iterator<Item = G::Edge> + '_ {
        self.graph.adjacent_edges(v).filter(|e| self.is_edge_visible(e))
    }

    fn edge_equality(&self) -> EdgeEquality<G::Edge> {
        self.graph.edge_equality()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, repr::*, testing::search::*};
    use itertools::Itertools;

    #[test]
    fn hidden_vertices_hide_their_edges() {
        let graph: BiGraph<u32> = BiGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
        let view = FilteredGraph::new(&graph, |v| v != 3, |_: &Edge<u32>| true);

        assert!(!view.contains_vertex(3));
        assert!(!view.contains_vertex(8));
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.out_degree(2), 1);
        assert_eq!(view.in_edges(3).count(), 0);
        assert!(!view.contains_edge(&Edge(2, 3)));
        assert_eq!(
            view.out_edge(2, 1),
            Err(GraphError::IndexOutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn undirected_filtering() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let view = FilteredGraph::new(&graph, |_| true, |e: &Edge<u32>| *e != Edge(3, 0));

        assert_eq!(view.adjacent_edges(0).collect_vec(), vec![Edge(0, 1)]);
        assert!(!view.contains_undirected_edge(0, 3));

        let mut events = EventRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&view).with_visitor(&mut events);
        dfs.compute().unwrap();
        drop(dfs);
        assert_eq!(events.count_of(EventKind::BackEdge), 0);
        assert_search_invariants(&view, &events);
    }

    #[test]
    fn matches_rebuilt_subgraph() {
        for graph in random_digraphs(43) {
            let view = FilteredGraph::new(&graph, |v| v % 3 != 0, |e: &Edge<u32>| e.0 <= e.1);
            let rebuilt: DiGraph<u32> =
                DiGraph::from_vertices_and_edges(view.vertices(), view.edges());

            assert_eq!(view.vertex_count(), rebuilt.vertex_count());
            assert_eq!(view.dfs_discovery_order(), rebuilt.dfs_discovery_order());
            assert_eq!(view.topological_sort().is_ok(), rebuilt.topological_sort().is_ok());
        }
    }
}
