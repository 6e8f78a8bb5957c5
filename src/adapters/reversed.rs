use super::*;

/// A view on a directed graph with every edge reversed.
///
/// The out-edges of a vertex are the in-edges of the wrapped graph and vice versa; edges are
/// wrapped in [`ReversedEdge`] so that `source` and `target` are swapped accordingly.
#[derive(Debug, Clone, Copy)]
pub struct ReversedGraph<'a, G> {
    graph: &'a G,
}

impl<'a, G: GraphType> ReversedGraph<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn original_graph(&self) -> &'a G {
        self.graph
    }
}

impl<G: GraphType> GraphType for ReversedGraph<'_, G> {
    type Vertex = G::Vertex;
    type Edge = ReversedEdge<G::Edge>;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn allow_parallel_edges(&self) -> bool {
        self.graph.allow_parallel_edges()
    }
}

impl<G: ImplicitVertexSet> ImplicitVertexSet for ReversedGraph<'_, G> {
    fn contains_vertex(&self, v: G::Vertex) -> bool {
        self.graph.contains_vertex(v)
    }
}

impl<G: VertexSet> VertexSet for ReversedGraph<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = G::Vertex> + '_ {
        self.graph.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

impl<G: EdgeSet> EdgeSet for ReversedGraph<'_, G> {
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.edges().map(ReversedEdge)
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_edge(&self, edge: &Self::Edge) -> bool {
        self.graph.contains_edge(edge.original())
    }
}

impl<G: BidirectionalIncidenceGraph> ImplicitGraph for ReversedGraph<'_, G> {
    fn out_edges(&self, u: G::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.in_edges(u).map(ReversedEdge)
    }

    fn out_degree(&self, u: G::Vertex) -> usize {
        self.graph.in_degree(u)
    }
}

impl<G: BidirectionalIncidenceGraph> IncidenceGraph for ReversedGraph<'_, G> {}

impl<G: BidirectionalIncidenceGraph> BidirectionalIncidenceGraph for ReversedGraph<'_, G> {
    fn in_edges(&self, v: G::Vertex) -> impl Iterator<Item = Self::Edge> + '_ {
        self.graph.out_edges(v).map(ReversedEdge)
    }

    fn in_degree(&self, v: G::Vertex) -> usize {
        self.graph.out_degree(v)
    }
}
