use super::*;

/// Presents a bidirectional graph as an undirected one.
///
/// The adjacent edges of a vertex are its out-edges followed by its in-edges; a self-edge is
/// reported once. Edges keep their stored orientation.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedView<'a, G> {
    graph: &'a G,
}

impl<'a, G: BidirectionalGraph> UndirectedView<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn original_graph(&self) -> &'a G {
        self.graph
    }
}

impl<G: BidirectionalGraph> GraphType for UndirectedView<'_, G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        false
    }

    fn allow_parallel_edges(&self) -> bool {
        self.graph.allow_parallel_edges()
    }
}

impl<G: BidirectionalGraph> ImplicitVertexSet for UndirectedView<'_, G> {
    fn contains_vertex(&self, v: G::Vertex) -> bool {
        self.graph.contains_vertex(v)
    }
}

impl<G: BidirectionalGraph> VertexSet for UndirectedView<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = G::Vertex> + '_ {
        self.graph.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

impl<G: BidirectionalGraph> EdgeSet for UndirectedView<'_, G> {
    fn edges(&self) -> impl Iterator<Item = G::Edge> + '_ {
        self.graph.edges()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_edge(&self, edge: &G::Edge) -> bool {
        self.graph.contains_edge(edge)
    }
}

impl<G: BidirectionalGraph> ImplicitUndirectedGraph for UndirectedView<'_, G> {
    fn adjacent_edges(&self, v: G::Vertex) -> impl Iterator<Item = G::Edge> + '_ {
        self.graph
            .out_edges(v)
            .chain(self.graph.in_edges(v).filter(|e| !e.is_self_edge()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, repr::*, testing::search::random_bigraphs};
    use itertools::Itertools;

    #[test]
    fn adjacency() {
        let graph: BiGraph<u32> = BiGraph::from_edges([(0, 1), (2, 0), (0, 0)]);
        let view = UndirectedView::new(&graph);

        assert!(view.is_undirected());
        assert_eq!(
            view.adjacent_edges(0).collect_vec(),
            vec![Edge(0, 1), Edge(0, 0), Edge(2, 0)]
        );
        assert_eq!(view.adjacent_degree(0), 3);
        assert!(view.contains_undirected_edge(0, 2));
        assert!(view.contains_undirected_edge(1, 0));
        assert!(!view.contains_undirected_edge(1, 2));
    }

    #[test]
    fn components_match_undirected_store() {
        for graph in random_bigraphs(41) {
            let view = UndirectedView::new(&graph);
            let store: UnGraph<u32> =
                UnGraph::from_vertices_and_edges(graph.vertices(), graph.edges());

            assert_eq!(view.connected_components(), store.connected_components());
        }
    }
}
