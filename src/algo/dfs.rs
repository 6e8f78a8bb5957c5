use super::*;

/// Returns the given edges, passed through `filter` if one is configured
pub(crate) fn filtered_edges<E, I, F>(edges: I, filter: Option<&F>) -> DoubleIter<E, I, vec::IntoIter<E>>
where
    I: Iterator<Item = E>,
    F: Fn(Vec<E>) -> Vec<E> + ?Sized,
{
    match filter {
        Some(filter) => DoubleIter::IterB(filter(edges.collect()).into_iter()),
        None => DoubleIter::IterA(edges),
    }
}

/// Borrowed state of one depth-first visit along out-edges
pub(crate) struct DepthFirstVisit<'r, G: ImplicitGraph, Vis: ?Sized, F: ?Sized> {
    pub graph: &'r G,
    pub core: &'r AlgorithmCore,
    pub colors: &'r mut ColorMap<G::Vertex>,
    pub visitor: &'r mut Vis,
    pub filter: Option<&'r F>,
    pub max_depth: usize,
    /// If *true*, vertices without a color are reported as [`GraphError::KeyNotFound`];
    /// otherwise they are treated as white
    pub strict_colors: bool,
}

impl<G, Vis, F> DepthFirstVisit<'_, G, Vis, F>
where
    G: ImplicitGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge> + ?Sized,
    F: Fn(Vec<G::Edge>) -> Vec<G::Edge> + ?Sized,
{
    fn color(&self, v: G::Vertex) -> Result<GraphColor> {
        if self.strict_colors {
            self.colors.try_get(&v)
        } else {
            Ok(self.colors.get_or_white(&v))
        }
    }

    /// Visits everything reachable from the white vertex `root`
    pub fn run(&mut self, root: G::Vertex) -> Result<()> {
        let graph = self.graph;
        let filter = self.filter;
        let out_edges = |u: G::Vertex| filtered_edges(graph.out_edges(u), filter);

        self.colors.set(root, GraphColor::Gray);
        self.visitor.visit(SearchEvent::DiscoverVertex(root));
        let mut stack = vec![SearchFrame::new(root, out_edges(root), 0)];

        while let Some(frame) = stack.last_mut() {
            if self.core.is_cancelling() {
                return Ok(());
            }

            let (u, depth) = (frame.current, frame.depth);
            let next = if depth < self.max_depth {
                frame.edges.next()
            } else {
                None
            };

            let Some(edge) = next else {
                self.colors.set(u, GraphColor::Black);
                self.visitor.visit(SearchEvent::FinishVertex(u));
                stack.pop();
                continue;
            };

            self.visitor.visit(SearchEvent::ExamineEdge {
                edge: edge.clone(),
                reversed: false,
            });

            let v = edge.target();
            match self.color(v)? {
                GraphColor::White => {
                    self.visitor.visit(SearchEvent::TreeEdge {
                        edge,
                        reversed: false,
                    });
                    self.colors.set(v, GraphColor::Gray);
                    self.visitor.visit(SearchEvent::DiscoverVertex(v));
                    stack.push(SearchFrame::new(v, out_edges(v), depth + 1));
                }
                GraphColor::Gray => self.visitor.visit(SearchEvent::BackEdge {
                    edge,
                    reversed: false,
                }),
                GraphColor::Black => self.visitor.visit(SearchEvent::ForwardOrCrossEdge {
                    edge,
                    reversed: false,
                }),
            }
        }

        Ok(())
    }
}

/// Depth-first search over a directed graph with enumerable vertices.
///
/// Each run resets every vertex to white (emitting `InitializeVertex`), then starts a new search
/// tree (emitting `StartVertex`) from the root if one is set, and otherwise from every vertex that
/// is still white, in enumeration order. Out-edges are classified as tree, back or
/// forward-or-cross edges according to the color of their target.
///
/// The search is iterative; its depth is only bounded by memory.
///
/// ```rust
/// use vgraphs::{prelude::*, algo::*};
///
/// let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 1)]);
///
/// let mut order = VertexRecorder::new(RecordOn::Discover);
/// let mut dfs = DepthFirstSearch::new(&graph).with_visitor(&mut order);
/// dfs.compute().unwrap();
///
/// assert_eq!(order.vertices(), &[0, 1, 2, 3]);
/// ```
pub struct DepthFirstSearch<'a, G: VertexListGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Vertex>,
    root: Option<G::Vertex>,
    max_depth: usize,
    process_all_components: bool,
    out_edges_filter: Option<OutEdgesFilter<'a, G::Edge>>,
    visitor: Vis,
}

impl<'a, G: VertexListGraph> DepthFirstSearch<'a, G> {
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
            out_edges_filter: None,
            visitor: (),
        }
    }
}

impl<'a, G, Vis> DepthFirstSearch<'a, G, Vis>
where
    G: VertexListGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> DepthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        DepthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            root: self.root,
            max_depth: self.max_depth,
            process_all_components: self.process_all_components,
            out_edges_filter: self.out_edges_filter,
            visitor,
        }
    }

    /// Sets the root vertex
    pub fn with_root(mut self, root: G::Vertex) -> Self {
        self.set_root_vertex(root);
        self
    }

    /// Vertices at depth `max_depth` are discovered and finished without examining their edges
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// If *true*, vertices not reachable from the root are searched afterwards
    pub fn with_process_all_components(mut self, process_all_components: bool) -> Self {
        self.process_all_components = process_all_components;
        self
    }

    /// Transforms the out-edges of every expanded vertex before they are examined,
    /// e.g. to reorder or drop them
    pub fn with_out_edges_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Vec<G::Edge>) -> Vec<G::Edge> + 'a,
    {
        self.out_edges_filter = Some(Box::new(filter));
        self
    }

    /// Observes an external cancellation flag
    pub fn with_cancel_manager(mut self, cancel_manager: CancelManager) -> Self {
        self.core = AlgorithmCore::with_cancel_manager(cancel_manager);
        self
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn set_process_all_components(&mut self, process_all_components: bool) {
        self.process_all_components = process_all_components;
    }

    pub fn process_all_components(&self) -> bool {
        self.process_all_components
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    pub fn into_colors(self) -> ColorMap<G::Vertex> {
        self.colors
    }

    /// Returns the color of `v` after (or during) a run
    pub fn vertex_color(&self, v: G::Vertex) -> Result<GraphColor> {
        self.colors.try_get(&v)
    }

    pub fn visitor(&self) -> &Vis {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut Vis {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> Vis {
        self.visitor
    }

    fn visit(&mut self, root: G::Vertex) -> Result<()> {
        self.visitor.visit(SearchEvent::StartVertex(root));
        DepthFirstVisit {
            graph: self.graph,
            core: &self.core,
            colors: &mut self.colors,
            visitor: &mut self.visitor,
            filter: self.out_edges_filter.as_deref(),
            max_depth: self.max_depth,
            strict_colors: true,
        }
        .run(root)
    }
}

impl<G, Vis> Algorithm for DepthFirstSearch<'_, G, Vis>
where
    G: VertexListGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "depth-first search";

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

impl<G, Vis> RootedAlgorithm for DepthFirstSearch<'_, G, Vis>
where
    G: VertexListGraph,
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
    use itertools::Itertools;

    #[test]
    fn classifies_edges() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 0), (0, 2), (3, 2)]);

        let mut events = EventRecorder::new();
        let mut dfs = DepthFirstSearch::new(&graph).with_visitor(&mut events);
        dfs.compute().unwrap();
        assert_eq!(dfs.state(), ComputationState::Finished);

        assert_eq!(
            events.edges_of(EventKind::TreeEdge),
            vec![Edge(0, 1), Edge(1, 2)]
        );
        assert_eq!(events.edges_of(EventKind::BackEdge), vec![Edge(2, 0)]);
        assert_eq!(
            events.edges_of(EventKind::ForwardOrCrossEdge),
            vec![Edge(0, 2), Edge(3, 2)]
        );
        assert_eq!(events.vertices_of(EventKind::StartVertex), vec![0, 3]);
        assert_eq!(events.vertices_of(EventKind::FinishVertex), vec![2, 1, 0, 3]);
    }

    #[test]
    fn disconnected_graph() {
        let graph: DiGraph<u32> = DiGraph::from_vertices_and_edges(1..=5, [(1, 2), (3, 2), (4, 5)]);

        let mut events = EventRecorder::new();
        let mut dfs = DepthFirstSearch::new(&graph).with_visitor(&mut events);
        dfs.compute().unwrap();
        for v in 1..=5 {
            assert_eq!(dfs.vertex_color(v), Ok(GraphColor::Black));
        }
        drop(dfs);

        assert_eq!(events.vertices_of(EventKind::StartVertex), vec![1, 3, 4]);
        assert_search_invariants(&graph, &events);
    }

    #[test]
    fn root_restricts_search() {
        let graph: DiGraph<u32> = DiGraph::from_vertices_and_edges(0..4, [(0, 1), (2, 3)]);

        let mut dfs = DepthFirstSearch::new(&graph).with_root(2);
        dfs.compute().unwrap();
        assert_eq!(dfs.vertex_color(3), Ok(GraphColor::Black));
        assert_eq!(dfs.vertex_color(0), Ok(GraphColor::White));

        let mut events = EventRecorder::new();
        let mut dfs = DepthFirstSearch::new(&graph)
            .with_root(2)
            .with_process_all_components(true)
            .with_visitor(&mut events);
        dfs.compute().unwrap();
        assert_eq!(events.vertices_of(EventKind::StartVertex), vec![2, 0]);
    }

    #[test]
    fn root_not_in_graph() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1)]);

        let mut events = EventRecorder::new();
        let mut dfs = DepthFirstSearch::new(&graph).with_visitor(&mut events);
        assert_eq!(
            dfs.compute_from(9),
            Err(GraphError::RootNotInGraph {
                root: "9".to_string()
            })
        );
        assert_eq!(dfs.state(), ComputationState::Aborted);
        assert!(
            events
                .events()
                .iter()
                .all(|ev| ev.kind() == EventKind::InitializeVertex)
        );
    }

    #[test]
    fn depth_bound() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 3)]);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = DepthFirstSearch::new(&graph)
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
    fn out_edges_filter_reorders() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (0, 2), (0, 3)]);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = DepthFirstSearch::new(&graph)
            .with_root(0)
            .with_out_edges_filter(|mut edges: Vec<Edge<u32>>| {
                edges.reverse();
                edges.retain(|e| e.1 != 2);
                edges
            })
            .with_visitor(&mut order);
        dfs.compute().unwrap();

        assert_eq!(order.vertices(), &[0, 3, 1]);
    }

    #[test]
    fn cancellation_stops_events() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
        let manager = CancelManager::new();

        let mut events = EventRecorder::new();
        {
            let cancel = manager.clone();
            let mut dfs = DepthFirstSearch::new(&graph)
                .with_cancel_manager(manager.clone())
                .with_visitor((
                    &mut events,
                    OnEvent(move |ev: SearchEvent<u32, Edge<u32>>| {
                        if ev == SearchEvent::DiscoverVertex(2) {
                            cancel.cancel();
                        }
                    }),
                ));
            dfs.compute().unwrap();
            assert_eq!(dfs.state(), ComputationState::Aborted);
            assert!(!dfs.is_cancelling());
        }

        assert_eq!(events.events().last(), Some(&SearchEvent::DiscoverVertex(2)));
        assert!(!events.vertices_of(EventKind::DiscoverVertex).contains(&3));
    }

    #[test]
    fn random_graphs_satisfy_invariants() {
        for graph in random_digraphs(7) {
            let mut events = EventRecorder::new();
            let mut dfs = DepthFirstSearch::new(&graph).with_visitor(&mut events);
            dfs.compute().unwrap();
            assert!(graph.vertices().all(|v| dfs.vertex_color(v) == Ok(GraphColor::Black)));
            drop(dfs);

            assert_search_invariants(&graph, &events);
            assert_eq!(
                events.edges_of(EventKind::ExamineEdge).len(),
                graph.edge_count()
            );
            assert_eq!(
                events.vertices_of(EventKind::DiscoverVertex).len(),
                graph.vertex_count()
            );

            let examined = events.edges_of(EventKind::ExamineEdge).into_iter().sorted().collect_vec();
            let classified = [
                EventKind::TreeEdge,
                EventKind::BackEdge,
                EventKind::ForwardOrCrossEdge,
            ]
            .into_iter()
            .flat_map(|k| events.edges_of(k))
            .sorted()
            .collect_vec();
            assert_eq!(examined, classified);
        }
    }
}
