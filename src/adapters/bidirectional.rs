use fxhash::FxHashMap;
use log::debug;

use super::*;

/// Adds in-edge access to a graph that only stores out-edges.
///
/// The in-edges of all vertices are indexed once on construction in *O(V + E)*; the view does
/// not notice later changes of the wrapped graph.
#[derive(Debug, Clone)]
pub struct BidirectionalAdapter<'a, G: GraphType> {
    graph: &'a G,
    in_edges: FxHashMap<G::Vertex, Vec<G::Edge>>,
}

impl<'a, G: VertexAndEdgeListGraph> BidirectionalAdapter<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        let mut in_edges: FxHashMap<G::Vertex, Vec<G::Edge>> = FxHashMap::default();
        for edge in graph.edges() {
            in_edges.entry(edge.target()).or_default().push(edge);
        }

        debug!(
            "indexed {} in-edges of {} vertices",
            graph.edge_count(),
            graph.vertex_count()
        );
        Self { graph, in_edges }
    }

    pub fn original_graph(&self) -> &'a G {
        self.graph
    }
}

impl<G: GraphType> GraphType for BidirectionalAdapter<'_, G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn allow_parallel_edges(&self) -> bool {
        self.graph.allow_parallel_edges()
    }
}

impl<G: ImplicitVertexSet> ImplicitVertexSet for BidirectionalAdapter<'_, G> {
    fn contains_vertex(&self, v: G::Vertex) -> bool {
        self.graph.contains_vertex(v)
    }
}

impl<G: VertexSet> VertexSet for BidirectionalAdapter<'_, G> {
    fn vertices(&self) -> impl Iterator<Item = G::Vertex> + '_ {
        self.graph.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

impl<G: EdgeSet> EdgeSet for BidirectionalAdapter<'_, G> {
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

impl<G: ImplicitGraph> ImplicitGraph for BidirectionalAdapter<'_, G> {
    fn out_edges(&self, u: G::Vertex) -> impl Iterator<Item = G::Edge> + '_ {
        self.graph.out_edges(u)
    }

    fn out_degree(&self, u: G::Vertex) -> usize {
        self.graph.out_degree(u)
    }
}

impl<G: IncidenceGraph> IncidenceGraph for BidirectionalAdapter<'_, G> {
    fn try_get_edge(&self, source: G::Vertex, target: G::Vertex) -> Option<G::Edge> {
        self.graph.try_get_edge(source, target)
    }
}

impl<G: IncidenceGraph> BidirectionalIncidenceGraph for BidirectionalAdapter<'_, G> {
    fn in_edges(&self, v: G::Vertex) -> impl Iterator<Item = G::Edge> + '_ {
        self.in_edges.get(&v).into_iter().flatten().cloned()
    }

    fn in_degree(&self, v: G::Vertex) -> usize {
        self.in_edges.get(&v).map_or(0, |edges| edges.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, repr::*, testing::search::random_digraphs};
    use itertools::Itertools;

    #[test]
    fn in_edges_match_bidirectional_store() {
        for graph in random_digraphs(37) {
            let adapter = BidirectionalAdapter::new(&graph);
            let reference: BiGraph<u32> =
                BiGraph::from_vertices_and_edges(graph.vertices(), graph.edges());

            for v in graph.vertices() {
                assert_eq!(
                    adapter.in_edges(v).sorted().collect_vec(),
                    reference.in_edges(v).sorted().collect_vec()
                );
                assert_eq!(adapter.degree(v), reference.degree(v));
            }
        }
    }

    #[test]
    fn bidirectional_search_on_adapter() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(1, 0), (1, 2)]);
        let adapter = BidirectionalAdapter::new(&graph);
        assert_eq!(adapter.in_degree(7), 0);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = BidirectionalDepthFirstSearch::new(&adapter)
            .with_root(0)
            .with_visitor(&mut order);
        dfs.compute().unwrap();
        drop(dfs);
        assert_eq!(order.vertices(), &[0, 1, 2]);
    }
}
