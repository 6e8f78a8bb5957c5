use super::*;

/// Depth-first search over an undirected graph.
///
/// Every edge is traversed at most once: the first time it is seen from either endpoint.
/// Sightings are counted per edge value and side, so each copy of a parallel edge is examined
/// once and then skipped when it is seen again from its other endpoint.
/// An edge walked from its target towards its source is reported with `reversed == true`;
/// self-edges are never reversed.
pub struct UndirectedDepthFirstSearch<'a, G: UndirectedGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Vertex>,
    /// Edges examined from one side and not yet seen from the other, keyed by `reversed`
    pending_edges: FxHashMap<(G::Edge, bool), usize>,
    root: Option<G::Vertex>,
    max_depth: usize,
    process_all_components: bool,
    visitor: Vis,
}

impl<'a, G: UndirectedGraph> UndirectedDepthFirstSearch<'a, G> {
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
            pending_edges: FxHashMap::default(),
            root: None,
            max_depth: usize::MAX,
            process_all_components: false,
            visitor: (),
        }
    }
}

impl<'a, G, Vis> UndirectedDepthFirstSearch<'a, G, Vis>
where
    G: UndirectedGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> UndirectedDepthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        UndirectedDepthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            pending_edges: self.pending_edges,
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

    /// Returns the configured depth bound
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the color map of the last run
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    /// Consumes the search and returns its color map
    pub fn into_colors(self) -> ColorMap<G::Vertex> {
        self.colors
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

    fn visit(&mut self, root: G::Vertex) -> Result<()> {
        let Self {
            core,
            graph,
            colors,
            pending_edges,
            max_depth,
            visitor,
            ..
        } = self;
        let graph: &'a G = *graph;

        visitor.visit(SearchEvent::StartVertex(root));
        colors.set(root, GraphColor::Gray);
        visitor.visit(SearchEvent::DiscoverVertex(root));
        let mut stack = vec![SearchFrame::new(root, graph.adjacent_edges(root), 0)];

        while let Some(frame) = stack.last_mut() {
            if core.is_cancelling() {
                return Ok(());
            }

            let (u, depth) = (frame.current, frame.depth);
            let next = if depth < *max_depth {
                frame.edges.next()
            } else {
                None
            };

            let Some(edge) = next else {
                colors.set(u, GraphColor::Black);
                visitor.visit(SearchEvent::FinishVertex(u));
                stack.pop();
                continue;
            };

            let reversed = edge.source() != u;
            if !edge.is_self_edge() {
                match pending_edges.get_mut(&(edge.clone(), !reversed)) {
                    Some(seen) if *seen > 0 => {
                        *seen -= 1;
                        continue;
                    }
                    _ => *pending_edges.entry((edge.clone(), reversed)).or_default() += 1,
                }
            }

            let v = edge.other_vertex(u);
            visitor.visit(SearchEvent::ExamineEdge {
                edge: edge.clone(),
                reversed,
            });

            match colors.try_get(&v)? {
                GraphColor::White => {
                    visitor.visit(SearchEvent::TreeEdge { edge, reversed });
                    colors.set(v, GraphColor::Gray);
                    visitor.visit(SearchEvent::DiscoverVertex(v));
                    stack.push(SearchFrame::new(v, graph.adjacent_edges(v), depth + 1));
                }
                GraphColor::Gray => visitor.visit(SearchEvent::BackEdge { edge, reversed }),
                GraphColor::Black => {
                    visitor.visit(SearchEvent::ForwardOrCrossEdge { edge, reversed })
                }
            }
        }

        Ok(())
    }
}

impl<G, Vis> Algorithm for UndirectedDepthFirstSearch<'_, G, Vis>
where
    G: UndirectedGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "undirected depth-first search";

    fn core(&self) -> &AlgorithmCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        self.colors.clear();
        self.pending_edges.clear();
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

            self.visit(root)?;
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
                self.visit(u)?;
            }
        }

        Ok(())
    }
}

impl<G, Vis> RootedAlgorithm for UndirectedDepthFirstSearch<'_, G, Vis>
where
    G: UndirectedGraph,
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
    fn triangle_with_tail() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(0, 1), (2, 1), (0, 2), (3, 2)]);

        let mut events = EventRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&graph).with_visitor(&mut events);
        dfs.compute().unwrap();

        assert_eq!(
            events.edges_of(EventKind::TreeEdge),
            vec![Edge(0, 1), Edge(2, 1), Edge(3, 2)]
        );
        assert_eq!(events.edges_of(EventKind::BackEdge), vec![Edge(0, 2)]);
        assert_eq!(events.count_of(EventKind::ExamineEdge), graph.edge_count());

        let reversed: Vec<bool> = events
            .events()
            .iter()
            .filter(|ev| ev.kind() == EventKind::TreeEdge)
            .map(|ev| ev.is_reversed())
            .collect();
        assert_eq!(reversed, vec![false, true, true]);
    }

    #[test]
    fn self_edge_is_examined_once() {
        let graph: UnGraph<char> = UnGraph::from_edges([('a', 'a'), ('a', 'b')]);

        let mut events = EventRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&graph).with_visitor(&mut events);
        dfs.compute().unwrap();

        assert_eq!(events.edges_of(EventKind::BackEdge), vec![Edge('a', 'a')]);
        assert!(!events.events().iter().any(|ev| ev.is_reversed()));
        assert_eq!(events.count_of(EventKind::ExamineEdge), 2);
    }

    #[test]
    fn parallel_edges_are_examined_per_copy() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(0, 1), (1, 0), (0, 1), (1, 2)]);
        assert_eq!(graph.edge_count(), 4);

        let mut events = EventRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&graph).with_visitor(&mut events);
        dfs.compute().unwrap();
        drop(dfs);

        assert_eq!(events.count_of(EventKind::ExamineEdge), 4);
        assert_eq!(
            events.edges_of(EventKind::TreeEdge),
            vec![Edge(0, 1), Edge(1, 2)]
        );
        assert_eq!(
            events.edges_of(EventKind::BackEdge),
            vec![Edge(1, 0), Edge(0, 1)]
        );
        assert_eq!(events.count_of(EventKind::ForwardOrCrossEdge), 0);
    }

    #[test]
    fn agrees_with_breadth_first_search_on_parallel_edges() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(0, 1), (0, 1), (2, 2), (2, 2), (1, 2)]);

        let mut dfs_events = EventRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&graph).with_visitor(&mut dfs_events);
        dfs.compute().unwrap();
        drop(dfs);

        let mut bfs_events = EventRecorder::new();
        let mut bfs = UndirectedBreadthFirstSearch::new(&graph).with_visitor(&mut bfs_events);
        bfs.compute().unwrap();
        drop(bfs);

        assert_eq!(dfs_events.count_of(EventKind::ExamineEdge), graph.edge_count());
        assert_eq!(bfs_events.count_of(EventKind::ExamineEdge), graph.edge_count());
    }

    #[test]
    fn disconnected_graph() {
        let graph: UnGraph<u32> = UnGraph::from_vertices_and_edges(1..=5, [(1, 2), (3, 2), (4, 5)]);

        let mut events = EventRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&graph).with_visitor(&mut events);
        dfs.compute().unwrap();

        assert_eq!(events.vertices_of(EventKind::StartVertex), vec![1, 4]);
        assert_search_invariants(&graph, &events);
    }

    #[test]
    fn root_not_in_graph() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(0, 1)]);
        let mut dfs = UndirectedDepthFirstSearch::new(&graph);
        assert!(matches!(
            dfs.compute_from(5),
            Err(GraphError::RootNotInGraph { .. })
        ));
    }

    #[test]
    fn random_graphs_satisfy_invariants() {
        for graph in random_ungraphs(11) {
            let mut events = EventRecorder::new();
            let mut dfs = UndirectedDepthFirstSearch::new(&graph).with_visitor(&mut events);
            dfs.compute().unwrap();

            assert_search_invariants(&graph, &events);
            assert_eq!(events.count_of(EventKind::ExamineEdge), graph.edge_count());
            assert_eq!(
                events.count_of(EventKind::TreeEdge),
                graph.vertex_count() - events.count_of(EventKind::StartVertex)
            );
        }
    }

    #[test]
    fn depth_bound() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(0, 1), (2, 1), (2, 3)]);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = UndirectedDepthFirstSearch::new(&graph)
            .with_root(0)
            .with_max_depth(1)
            .with_visitor(&mut order);
        dfs.compute().unwrap();
        assert_eq!(dfs.vertex_color(1), Ok(GraphColor::Black));
        assert_eq!(dfs.vertex_color(2), Ok(GraphColor::White));
        drop(dfs);

        assert_eq!(order.vertices(), &[0, 1]);
    }

    #[test]
    fn cancellation_stops_events() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4)]);
        let manager = CancelManager::new();
        let trigger = SearchEvent::DiscoverVertex(2);

        let mut events = EventRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&graph)
            .with_cancel_manager(manager.clone())
            .with_visitor((&mut events, cancel_on(manager.clone(), trigger.clone())));
        dfs.compute().unwrap();
        assert_eq!(dfs.state(), ComputationState::Aborted);
        assert_eq!(dfs.vertex_color(3), Ok(GraphColor::White));
        drop(dfs);

        assert_stopped_after(&events, &trigger);
        assert_eq!(events.count_of(EventKind::BackEdge), 0);
    }
}
