use super::*;

/// Depth-first search over a bidirectional graph that walks edges in both directions.
///
/// For each vertex, its out-edges are handled first, then its in-edges. In-edges are walked from
/// target to source and reported with `reversed == true`.
///
/// The search recurses once per tree edge, so very deep graphs may exhaust the call stack.
pub struct BidirectionalDepthFirstSearch<'a, G: BidirectionalGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Vertex>,
    root: Option<G::Vertex>,
    max_depth: usize,
    process_all_components: bool,
    visitor: Vis,
}

impl<'a, G: BidirectionalGraph> BidirectionalDepthFirstSearch<'a, G> {
    /// Creates a search without visitor
    pub fn new(graph: &'a G) -> Self {
        Self::with_colors(graph, ColorMap::with_capacity(graph.vertex_count()))
    }

    /// Creates a search writing into the given color map
    pub fn with_colors(graph: &'a G, colors: ColorMap<G::Vertex>) -> Self {
        Self {
            core: AlgorithmCore::new(),
            graph,
            colors,
            root: None,
            max_depth: usize::MAX,
            process_all_components: false,
            visitor: (),
        }
    }
}

impl<'a, G, Vis> BidirectionalDepthFirstSearch<'a, G, Vis>
where
    G: BidirectionalGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> BidirectionalDepthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        BidirectionalDepthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            root: self.root,
            max_depth: self.max_depth,
            process_all_components: self.process_all_components,
            visitor,
        }
    }

    /// Sets the root vertex
    pub fn with_root(mut self, root: G::Vertex) -> Self {
        self.set_root_vertex(root);
        self
    }

    /// Vertices at depth `max_depth` are finished without examining their edges
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// If *true*, the rest of the graph is searched after the root's component
    pub fn with_process_all_components(mut self, process_all_components: bool) -> Self {
        self.process_all_components = process_all_components;
        self
    }

    /// Observes an external cancellation flag
    pub fn with_cancel_manager(mut self, cancel_manager: CancelManager) -> Self {
        self.core = AlgorithmCore::with_cancel_manager(cancel_manager);
        self
    }

    /// Returns the color map of the last run
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    /// Returns the color of `v` after (or during) a run
    pub fn vertex_color(&self, v: G::Vertex) -> Result<GraphColor> {
        self.colors.try_get(&v)
    }

    /// Returns the attached visitor
    pub fn visitor(&self) -> &Vis {
        &self.visitor
    }

    /// Consumes the search and returns its visitor
    pub fn into_visitor(self) -> Vis {
        self.visitor
    }

    fn start(&mut self, root: G::Vertex) -> Result<()> {
        self.visitor.visit(SearchEvent::StartVertex(root));
        self.visit(root, 0)
    }

    fn visit(&mut self, u: G::Vertex, depth: usize) -> Result<()> {
        self.colors.set(u, GraphColor::Gray);
        self.visitor.visit(SearchEvent::DiscoverVertex(u));

        if depth < self.max_depth {
            let graph = self.graph;
            for edge in graph.out_edges(u) {
                if self.core.is_cancelling() {
                    return Ok(());
                }
                self.explore(edge, false, depth)?;
            }
            for edge in graph.in_edges(u) {
                if self.core.is_cancelling() {
                    return Ok(());
                }
                self.explore(edge, true, depth)?;
            }
        }

        if self.core.is_cancelling() {
            return Ok(());
        }
        self.colors.set(u, GraphColor::Black);
        self.visitor.visit(SearchEvent::FinishVertex(u));
        Ok(())
    }

    fn explore(&mut self, edge: G::Edge, reversed: bool, depth: usize) -> Result<()> {
        self.visitor.visit(SearchEvent::ExamineEdge {
            edge: edge.clone(),
            reversed,
        });

        let v = if reversed {
            edge.source()
        } else {
            edge.target()
        };

        match self.colors.try_get(&v)? {
            GraphColor::White => {
                self.visitor.visit(SearchEvent::TreeEdge { edge, reversed });
                self.visit(v, depth + 1)
            }
            GraphColor::Gray => {
                self.visitor.visit(SearchEvent::BackEdge { edge, reversed });
                Ok(())
            }
            GraphColor::Black => {
                self.visitor
                    .visit(SearchEvent::ForwardOrCrossEdge { edge, reversed });
                Ok(())
            }
        }
    }
}

impl<G, Vis> Algorithm for BidirectionalDepthFirstSearch<'_, G, Vis>
where
    G: BidirectionalGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "bidirectional depth-first search";

    fn core(&self) -> &AlgorithmCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        self.colors.clear();
        for u in self.graph.vertices() {
            self.colors.set(u, GraphColor::White);
            self.visitor.visit(SearchEvent::InitializeVertex(u));
        }
        Ok(())
    }

    fn internal_compute(&mut self) -> Result<()> {
        if let Some(root) = self.root {
            if !self.graph.contains_vertex(root) {
                return Err(GraphError::root_not_in_graph(root));
            }

            self.start(root)?;
            if !self.process_all_components {
                return Ok(());
            }
        }

        let graph = self.graph;
        for u in graph.vertices() {
            if self.core.is_cancelling() {
                return Ok(());
            }

            if self.colors.try_get(&u)? == GraphColor::White {
                self.start(u)?;
            }
        }

        Ok(())
    }
}

impl<G, Vis> RootedAlgorithm for BidirectionalDepthFirstSearch<'_, G, Vis>
where
    G: BidirectionalGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    type Vertex = G::Vertex;

    fn root_slot(&self) -> &Option<G::Vertex> {
        &self.root
    }

    fn root_slot_mut(&mut self) -> &mut Option<G::Vertex> {
        &mut self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::search::*;

    #[test]
    fn walks_against_edges() {
        // 1 is only reachable from 0 by walking (1, 0) backwards
        let graph: BiGraph<u32> = BiGraph::from_edges([(1, 0), (1, 2), (3, 2)]);

        let mut events = EventRecorder::new();
        let mut dfs = BidirectionalDepthFirstSearch::new(&graph)
            .with_root(0)
            .with_visitor(&mut events);
        dfs.compute().unwrap();

        assert_eq!(events.vertices_of(EventKind::DiscoverVertex), vec![0, 1, 2, 3]);
        assert_eq!(
            events.edges_of(EventKind::TreeEdge),
            vec![Edge(1, 0), Edge(1, 2), Edge(3, 2)]
        );

        let reversed: Vec<bool> = events
            .events()
            .iter()
            .filter(|ev| ev.kind() == EventKind::TreeEdge)
            .map(|ev| ev.is_reversed())
            .collect();
        assert_eq!(reversed, vec![true, false, true]);
    }

    #[test]
    fn every_edge_is_examined_from_both_sides() {
        for graph in random_bigraphs(5) {
            let mut events = EventRecorder::new();
            let mut dfs = BidirectionalDepthFirstSearch::new(&graph).with_visitor(&mut events);
            dfs.compute().unwrap();

            assert_search_invariants(&graph, &events);
            assert_eq!(events.count_of(EventKind::ExamineEdge), 2 * graph.edge_count());
        }
    }

    #[test]
    fn cancellation() {
        let graph: BiGraph<u32> = BiGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let manager = CancelManager::new();
        let cancel = manager.clone();

        let mut events = EventRecorder::new();
        let mut dfs = BidirectionalDepthFirstSearch::new(&graph)
            .with_cancel_manager(manager)
            .with_visitor((
                &mut events,
                OnEvent(move |ev: SearchEvent<u32, Edge<u32>>| {
                    if ev.kind() == EventKind::TreeEdge {
                        cancel.cancel();
                    }
                }),
            ));
        dfs.compute().unwrap();
        assert_eq!(dfs.state(), ComputationState::Aborted);
        drop(dfs);

        assert_eq!(events.vertices_of(EventKind::DiscoverVertex), vec![0, 1]);
        assert_eq!(events.count_of(EventKind::FinishVertex), 0);
    }

    #[test]
    fn depth_bound() {
        let graph: BiGraph<u32> = BiGraph::from_edges([(1, 0), (1, 2), (3, 2)]);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = BidirectionalDepthFirstSearch::new(&graph)
            .with_root(0)
            .with_max_depth(1)
            .with_visitor(&mut order);
        dfs.compute().unwrap();
        assert_eq!(dfs.vertex_color(1), Ok(GraphColor::Black));
        assert_eq!(dfs.vertex_color(2), Ok(GraphColor::White));
        drop(dfs);

        assert_eq!(order.vertices(), &[0, 1]);
    }
}
