use super::*;

/// Topological ordering of a directed graph, computed by a [`DepthFirstSearch`].
///
/// Vertices are listed in reverse finishing order, so every edge `(u, v)` has `u` before `v`.
/// The first back edge cancels the search and the computation fails with
/// [`GraphError::NonAcyclicGraph`].
///
/// ```rust
/// use vgraphs::{prelude::*, algo::*};
///
/// let graph: DiGraph<char> = DiGraph::from_edges([('b', 'c'), ('a', 'b'), ('a', 'c')]);
///
/// let mut topo = TopologicalSort::new(&graph);
/// topo.compute().unwrap();
/// assert_eq!(topo.sorted_vertices(), &['a', 'b', 'c']);
/// ```
pub struct TopologicalSort<'a, G: VertexListGraph> {
    core: AlgorithmCore,
    graph: &'a G,
    sorted: Vec<G::Vertex>,
}

impl<'a, G: VertexListGraph> TopologicalSort<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            core: AlgorithmCore::new(),
            graph,
            sorted: Vec::with_capacity(graph.vertex_count()),
        }
    }

    pub fn with_cancel_manager(mut self, cancel_manager: CancelManager) -> Self {
        self.core = AlgorithmCore::with_cancel_manager(cancel_manager);
        self
    }

    /// Vertices of the last successful computation in topological order
    pub fn sorted_vertices(&self) -> &[G::Vertex] {
        &self.sorted
    }

    pub fn into_sorted_vertices(self) -> Vec<G::Vertex> {
        self.sorted
    }
}

impl<G: VertexListGraph> Algorithm for TopologicalSort<'_, G> {
    const NAME: &'static str = "topological sort";

    fn core(&self) -> &AlgorithmCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        self.sorted.clear();
        Ok(())
    }

    fn internal_compute(&mut self) -> Result<()> {
        let cancel = self.core.cancel_manager().clone();
        let mut cyclic = false;
        let sorted = &mut self.sorted;

        let mut dfs = DepthFirstSearch::new(self.graph)
            .with_cancel_manager(cancel.clone())
            .with_visitor(OnEvent(|ev: SearchEvent<G::Vertex, G::Edge>| match ev {
                SearchEvent::FinishVertex(u) => sorted.push(u),
                SearchEvent::BackEdge { .. } => {
                    cyclic = true;
                    cancel.cancel();
                }
                _ => {}
            }));
        dfs.compute()?;
        let aborted = dfs.state() == ComputationState::Aborted;
        drop(dfs);

        if cyclic {
            self.sorted.clear();
            return Err(GraphError::NonAcyclicGraph);
        }
        if aborted {
            // the inner search consumed the shared flag
            self.core.abort();
            return Ok(());
        }

        self.sorted.reverse();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::search::*;
    use fxhash::FxHashMap;
    use itertools::Itertools;

    #[test]
    fn orders_dag() {
        for graph in random_digraphs(23) {
            let dag: DiGraph<u32> =
                DiGraph::from_vertices_and_edges(graph.vertices(), graph.edges().filter(|e| e.0 < e.1));

            let mut topo = TopologicalSort::new(&dag);
            topo.compute().unwrap();
            assert_eq!(topo.state(), ComputationState::Finished);

            let order = topo.into_sorted_vertices();
            assert_eq!(order.len(), dag.vertex_count());
            let rank = order.iter().enumerate().map(|(i, &v)| (v, i)).collect::<FxHashMap<_, _>>();
            assert!(dag.edges().all(|e| rank[&e.0] < rank[&e.1]));
        }
    }

    #[test]
    fn detects_cycle() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 1)]);

        let mut topo = TopologicalSort::new(&graph);
        assert_eq!(topo.compute(), Err(GraphError::NonAcyclicGraph));
        assert_eq!(topo.state(), ComputationState::Aborted);
        assert!(topo.sorted_vertices().is_empty());
        assert!(!topo.is_cancelling());

        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 0)]);
        let mut topo = TopologicalSort::new(&graph);
        assert_eq!(topo.compute(), Err(GraphError::NonAcyclicGraph));
    }

    #[test]
    fn external_cancellation() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2)]);
        let manager = CancelManager::new();

        let mut topo = TopologicalSort::new(&graph).with_cancel_manager(manager.clone());
        manager.cancel();
        assert_eq!(topo.compute(), Ok(()));
        assert_eq!(topo.state(), ComputationState::Aborted);
        assert!(topo.sorted_vertices().is_empty());

        topo.compute().unwrap();
        assert_eq!(topo.state(), ComputationState::Finished);
        assert_eq!(topo.sorted_vertices().iter().copied().collect_vec(), vec![0, 1, 2]);
    }
}
