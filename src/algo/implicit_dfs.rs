use super::*;

/// Depth-first search from a root vertex over a graph whose vertices are only known through
/// their out-edges.
///
/// A root is required. Vertices without a color are treated as white, so nothing is initialized
/// and no `InitializeVertex` is emitted. If the search owns its color map
/// ([`ImplicitDepthFirstSearch::new`]) the map is cleared before each run; a map passed to
/// [`ImplicitDepthFirstSearch::with_colors`] is kept, which allows continuing from earlier runs.
pub struct ImplicitDepthFirstSearch<'a, G: IncidenceGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Vertex>,
    owns_colors: bool,
    root: Option<G::Vertex>,
    max_depth: usize,
    out_edges_filter: Option<OutEdgesFilter<'a, G::Edge>>,
    visitor: Vis,
}

impl<'a, G: IncidenceGraph> ImplicitDepthFirstSearch<'a, G> {
    /// Creates a search owning (and resetting) its color map
    pub fn new(graph: &'a G) -> Self {
        Self::build(graph, ColorMap::new(), true)
    }

    /// Creates a search continuing from the colors in `colors`
    pub fn with_colors(graph: &'a G, colors: ColorMap<G::Vertex>) -> Self {
        Self::build(graph, colors, false)
    }

    fn build(graph: &'a G, colors: ColorMap<G::Vertex>, owns_colors: bool) -> Self {
        Self {
            core: AlgorithmCore::new(),
            graph,
            colors,
            owns_colors,
            root: None,
            max_depth: usize::MAX,
            out_edges_filter: None,
            visitor: (),
        }
    }
}

impl<'a, G, Vis> ImplicitDepthFirstSearch<'a, G, Vis>
where
    G: IncidenceGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> ImplicitDepthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        ImplicitDepthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            owns_colors: self.owns_colors,
            root: self.root,
            max_depth: self.max_depth,
            out_edges_filter: self.out_edges_filter,
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

    /// Transforms the out-edges of every expanded vertex before they are examined
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

    /// Returns the color map of the last run
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    /// Consumes the search and returns its color map
    pub fn into_colors(self) -> ColorMap<G::Vertex> {
        self.colors
    }

    /// Returns the color of `v`; vertices never reached are white
    pub fn vertex_color(&self, v: G::Vertex) -> GraphColor {
        self.colors.get_or_white(&v)
    }

    /// Returns the attached visitor
    pub fn visitor(&self) -> &Vis {
        &self.visitor
    }

    /// Consumes the search and returns its visitor
    pub fn into_visitor(self) -> Vis {
        self.visitor
    }
}

impl<G, Vis> Algorithm for ImplicitDepthFirstSearch<'_, G, Vis>
where
    G: IncidenceGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "implicit depth-first search";

    fn core(&self) -> &AlgorithmCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        if self.owns_colors {
            self.colors.clear();
        }
        Ok(())
    }

    fn internal_compute(&mut self) -> Result<()> {
        let root = self.root.ok_or(GraphError::MissingRootVertex)?;
        if !self.graph.contains_vertex(root) {
            return Err(GraphError::root_not_in_graph(root));
        }
        if self.colors.get_or_white(&root) != GraphColor::White {
            return Ok(());
        }

        self.visitor.visit(SearchEvent::StartVertex(root));
        DepthFirstVisit {
            graph: self.graph,
            core: &self.core,
            colors: &mut self.colors,
            visitor: &mut self.visitor,
            filter: self.out_edges_filter.as_deref(),
            max_depth: self.max_depth,
            strict_colors: false,
        }
        .run(root)
    }
}

impl<G, Vis> RootedAlgorithm for ImplicitDepthFirstSearch<'_, G, Vis>
where
    G: IncidenceGraph,
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
    fn reaches_only_from_root() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 1), (3, 0)]);

        let mut events = EventRecorder::new();
        let mut dfs = ImplicitDepthFirstSearch::new(&graph)
            .with_root(0)
            .with_visitor(&mut events);
        dfs.compute().unwrap();
        assert_eq!(dfs.vertex_color(3), GraphColor::White);
        assert!(dfs.colors().get(&3).is_none());
        drop(dfs);

        assert_eq!(events.vertices_of(EventKind::DiscoverVertex), vec![0, 1, 2]);
        assert_eq!(events.edges_of(EventKind::BackEdge), vec![Edge(2, 1)]);
        assert_eq!(events.count_of(EventKind::InitializeVertex), 0);
    }

    #[test]
    fn missing_root() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1)]);

        let mut dfs = ImplicitDepthFirstSearch::new(&graph);
        assert_eq!(dfs.compute(), Err(GraphError::MissingRootVertex));
        assert_eq!(
            dfs.compute_from(4),
            Err(GraphError::root_not_in_graph(4u32))
        );
    }

    #[test]
    fn owned_colors_are_reset() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2)]);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = ImplicitDepthFirstSearch::new(&graph).with_visitor(&mut order);
        dfs.compute_from(0).unwrap();
        dfs.compute_from(1).unwrap();
        drop(dfs);

        assert_eq!(order.vertices(), &[0, 1, 2, 1, 2]);
    }

    #[test]
    fn shared_colors_continue() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (3, 2), (3, 4)]);

        let mut dfs = ImplicitDepthFirstSearch::with_colors(&graph, ColorMap::new()).with_root(0);
        dfs.compute().unwrap();
        let colors = dfs.into_colors();

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = ImplicitDepthFirstSearch::with_colors(&graph, colors)
            .with_root(3)
            .with_visitor(&mut order);
        dfs.compute().unwrap();
        assert_eq!(dfs.vertex_color(2), GraphColor::Black);
        drop(dfs);
        assert_eq!(order.vertices(), &[3, 4]);

        let mut dfs = ImplicitDepthFirstSearch::with_colors(&graph, ColorMap::new()).with_root(1);
        dfs.compute().unwrap();
        let colors = dfs.into_colors();
        let mut events = EventRecorder::new();
        let mut dfs = ImplicitDepthFirstSearch::with_colors(&graph, colors)
            .with_root(1)
            .with_visitor(&mut events);
        dfs.compute().unwrap();
        drop(dfs);
        assert!(events.events().is_empty());
    }

    #[test]
    fn depth_bound() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 3)]);

        let mut order = VertexRecorder::new(RecordOn::Discover);
        let mut dfs = ImplicitDepthFirstSearch::new(&graph)
            .with_root(0)
            .with_max_depth(2)
            .with_visitor(&mut order);
        dfs.compute().unwrap();
        assert_eq!(dfs.vertex_color(2), GraphColor::Black);
        assert_eq!(dfs.vertex_color(3), GraphColor::White);
        drop(dfs);

        assert_eq!(order.vertices(), &[0, 1, 2]);
    }

    #[test]
    fn cancellation_stops_events() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (0, 3)]);
        let manager = CancelManager::new();
        let trigger = SearchEvent::FinishVertex(2);

        let mut events = EventRecorder::new();
        let mut dfs = ImplicitDepthFirstSearch::new(&graph)
            .with_root(0)
            .with_cancel_manager(manager.clone())
            .with_visitor((&mut events, cancel_on(manager.clone(), trigger.clone())));
        dfs.compute().unwrap();
        assert_eq!(dfs.state(), ComputationState::Aborted);
        assert_eq!(dfs.vertex_color(3), GraphColor::White);
        drop(dfs);

        assert_stopped_after(&events, &trigger);
    }
}
