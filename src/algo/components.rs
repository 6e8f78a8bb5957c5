use fxhash::FxHashMap;

use super::*;

/// Connected components of an undirected graph, computed by an [`UndirectedDepthFirstSearch`].
///
/// Components are numbered `0..component_count()` in the order their first vertex appears in the
/// graph's vertex enumeration.
pub struct ConnectedComponents<'a, G: UndirectedGraph> {
    core: AlgorithmCore,
    graph: &'a G,
    components: FxHashMap<G::Vertex, usize>,
    component_count: usize,
}

impl<'a, G: UndirectedGraph> ConnectedComponents<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            core: AlgorithmCore::new(),
            graph,
            components: FxHashMap::default(),
            component_count: 0,
        }
    }

    pub fn with_cancel_manager(mut self, cancel_manager: CancelManager) -> Self {
        self.core = AlgorithmCore::with_cancel_manager(cancel_manager);
        self
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns the index of the component containing `v`
    pub fn component_of(&self, v: G::Vertex) -> Option<usize> {
        self.components.get(&v).copied()
    }

    pub fn components(&self) -> &FxHashMap<G::Vertex, usize> {
        &self.components
    }

    /// Returns the vertices of every component, each in vertex enumeration order
    pub fn groups(&self) -> Vec<Vec<G::Vertex>> {
        let mut groups = vec![Vec::new(); self.component_count];
        for v in self.graph.vertices() {
            if let Some(&c) = self.components.get(&v) {
                groups[c].push(v);
            }
        }
        groups
    }
}

impl<G: UndirectedGraph> Algorithm for ConnectedComponents<'_, G> {
    const NAME: &'static str = "connected components";

    fn core(&self) -> &AlgorithmCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        self.components.clear();
        self.component_count = 0;
        Ok(())
    }

    fn internal_compute(&mut self) -> Result<()> {
        let components = &mut self.components;
        let count = &mut self.component_count;

        let mut dfs = UndirectedDepthFirstSearch::new(self.graph)
            .with_cancel_manager(self.core.cancel_manager().clone())
            .with_visitor(OnEvent(|ev: SearchEvent<G::Vertex, G::Edge>| match ev {
                SearchEvent::StartVertex(_) => *count += 1,
                SearchEvent::DiscoverVertex(v) => {
                    components.insert(v, *count - 1);
                }
                _ => {}
            }));
        dfs.compute()?;

        if dfs.state() == ComputationState::Aborted {
            drop(dfs);
            self.core.abort();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::search::*;
    use itertools::Itertools;

    #[test]
    fn isolated_and_connected() {
        let graph: UnGraph<u32> =
            UnGraph::from_vertices_and_edges(0..7, [(0, 1), (2, 1), (3, 4), (5, 5)]);

        let mut cc = ConnectedComponents::new(&graph);
        cc.compute().unwrap();

        assert_eq!(cc.component_count(), 4);
        assert_eq!(
            cc.groups(),
            vec![vec![0, 1, 2], vec![3, 4], vec![5], vec![6]]
        );
        assert_eq!(cc.component_of(2), Some(0));
        assert_eq!(cc.component_of(9), None);
    }

    #[test]
    fn edges_stay_within_components() {
        for graph in random_ungraphs(29) {
            let mut cc = ConnectedComponents::new(&graph);
            cc.compute().unwrap();

            assert_eq!(cc.components().len(), graph.vertex_count());
            assert!(
                graph
                    .edges()
                    .all(|e| cc.component_of(e.0) == cc.component_of(e.1))
            );
            let used = cc.components().values().copied().unique().count();
            assert_eq!(used, cc.component_count());
        }
    }
}
