use super::*;

/// Borrowed state of one depth-first visit over edges
struct EdgeDepthFirstVisit<'r, G: IncidenceGraph, Vis: ?Sized> {
    graph: &'r G,
    core: &'r AlgorithmCore,
    colors: &'r mut ColorMap<G::Edge>,
    visitor: &'r mut Vis,
    max_depth: usize,
    strict_colors: bool,
}

impl<G, Vis> EdgeDepthFirstVisit<'_, G, Vis>
where
    G: IncidenceGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge> + ?Sized,
{
    fn color(&self, edge: &G::Edge) -> Result<GraphColor> {
        if self.strict_colors {
            self.colors.try_get(edge)
        } else {
            Ok(self.colors.get_or_white(edge))
        }
    }

    /// Visits every edge reachable from the white edge `start`
    fn run(&mut self, start: G::Edge) -> Result<()> {
        let graph = self.graph;

        self.colors.set(start.clone(), GraphColor::Gray);
        self.visitor.visit(SearchEvent::TreeEdge {
            edge: start.clone(),
            reversed: false,
        });
        let successors = graph.out_edges(start.target());
        let mut stack = vec![SearchFrame::new(start, successors, 0)];

        while let Some(frame) = stack.last_mut() {
            if self.core.is_cancelling() {
                return Ok(());
            }

            let depth = frame.depth;
            let next = if depth < self.max_depth {
                frame.edges.next()
            } else {
                None
            };

            let Some(edge) = next else {
                if let Some(done) = stack.pop() {
                    self.colors.set(done.current.clone(), GraphColor::Black);
                    self.visitor.visit(SearchEvent::FinishEdge(done.current));
                }
                continue;
            };

            self.visitor.visit(SearchEvent::ExamineEdge {
                edge: edge.clone(),
                reversed: false,
            });

            match self.color(&edge)? {
                GraphColor::White => {
                    self.visitor.visit(SearchEvent::DiscoverTreeEdge {
                        edge: frame.current.clone(),
                        target: edge.clone(),
                    });
                    self.colors.set(edge.clone(), GraphColor::Gray);
                    self.visitor.visit(SearchEvent::TreeEdge {
                        edge: edge.clone(),
                        reversed: false,
                    });
                    let successors = graph.out_edges(edge.target());
                    stack.push(SearchFrame::new(edge, successors, depth + 1));
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

/// Depth-first search over the edges of a directed graph.
///
/// Colors are assigned to edges instead of vertices. Every edge is reset to white (emitting
/// `InitializeEdge`); each white edge starts a new search tree (emitting `StartEdge`) and the
/// out-edges of an edge's target are its successors. When an edge `e` reaches a white successor
/// `f`, `DiscoverTreeEdge { edge: e, target: f }` is emitted before `f` turns gray.
///
/// With a root only the out-edges of the root (and everything reachable from them) are searched,
/// unless [`EdgeDepthFirstSearch::with_process_all_components`] is set.
pub struct EdgeDepthFirstSearch<'a, G: EdgeListAndIncidenceGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Edge>,
    root: Option<G::Vertex>,
    max_depth: usize,
    process_all_components: bool,
    visitor: Vis,
}

impl<'a, G: EdgeListAndIncidenceGraph> EdgeDepthFirstSearch<'a, G> {
    /// Creates a search without visitor
    pub fn new(graph: &'a G) -> Self {
        Self::with_colors(graph, ColorMap::with_capacity(graph.edge_count()))
    }

    /// Creates a search writing into the given color map
    pub fn with_colors(graph: &'a G, colors: ColorMap<G::Edge>) -> Self {
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

impl<'a, G, Vis> EdgeDepthFirstSearch<'a, G, Vis>
where
    G: EdgeListAndIncidenceGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> EdgeDepthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        EdgeDepthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            root: self.root,
            max_depth: self.max_depth,
            process_all_components: self.process_all_components,
            visitor,
        }
    }

    /// Sets the root vertex; only its out-edges start search trees
    pub fn with_root(mut self, root: G::Vertex) -> Self {
        self.set_root_vertex(root);
        self
    }

    /// Edges at depth `max_depth` are finished without examining their successors
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
    pub fn colors(&self) -> &ColorMap<G::Edge> {
        &self.colors
    }

    /// Returns the color of `edge` after (or during) a run
    pub fn edge_color(&self, edge: &G::Edge) -> Result<GraphColor> {
        self.colors.try_get(edge)
    }

    /// Returns the attached visitor
    pub fn visitor(&self) -> &Vis {
        &self.visitor
    }

    /// Consumes the search and returns its visitor
    pub fn into_visitor(self) -> Vis {
        self.visitor
    }

    fn visit(&mut self, start: G::Edge) -> Result<()> {
        self.visitor.visit(SearchEvent::StartEdge(start.clone()));
        EdgeDepthFirstVisit {
            graph: self.graph,
            core: &self.core,
            colors: &mut self.colors,
            visitor: &mut self.visitor,
            max_depth: self.max_depth,
            strict_colors: true,
        }
        .run(start)
    }
}

impl<G, Vis> Algorithm for EdgeDepthFirstSearch<'_, G, Vis>
where
    G: EdgeListAndIncidenceGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "edge depth-first search";

    fn core(&self) -> &AlgorithmCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        self.colors.clear();
        for edge in self.graph.edges() {
            self.colors.set(edge.clone(), GraphColor::White);
            self.visitor.visit(SearchEvent::InitializeEdge(edge));
        }
        Ok(())
    }

    fn internal_compute(&mut self) -> Result<()> {
        let graph = self.graph;

        if let Some(root) = self.root {
            if !graph.contains_vertex(root) {
                return Err(GraphError::root_not_in_graph(root));
            }

            self.visitor.visit(SearchEvent::StartVertex(root));
            for edge in graph.out_edges(root) {
                if self.core.is_cancelling() {
                    return Ok(());
                }
                if self.colors.try_get(&edge)? == GraphColor::White {
                    self.visit(edge)?;
                }
            }

            if !self.process_all_components {
                return Ok(());
            }
        }

        for edge in graph.edges() {
            if self.core.is_cancelling() {
                return Ok(());
            }
            if self.colors.try_get(&edge)? == GraphColor::White {
                self.visit(edge)?;
            }
        }

        Ok(())
    }
}

impl<G, Vis> RootedAlgorithm for EdgeDepthFirstSearch<'_, G, Vis>
where
    G: EdgeListAndIncidenceGraph,
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

/// Depth-first search over the edges reachable from a root vertex of a graph that cannot
/// enumerate its edges.
///
/// A root is required. Edges without a color are treated as white. Colors are only reset between
/// runs if the color map is owned by the search ([`ImplicitEdgeDepthFirstSearch::new`]); a map
/// passed to [`ImplicitEdgeDepthFirstSearch::with_colors`] keeps its content, so edges finished in
/// an earlier run are not searched again.
pub struct ImplicitEdgeDepthFirstSearch<'a, G: IncidenceGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Edge>,
    owns_colors: bool,
    root: Option<G::Vertex>,
    max_depth: usize,
    visitor: Vis,
}

impl<'a, G: IncidenceGraph> ImplicitEdgeDepthFirstSearch<'a, G> {
    /// Creates a search without visitor
    pub fn new(graph: &'a G) -> Self {
        Self::build(graph, ColorMap::new(), true)
    }

    /// Creates a search writing into the given color map
    pub fn with_colors(graph: &'a G, colors: ColorMap<G::Edge>) -> Self {
        Self::build(graph, colors, false)
    }

    fn build(graph: &'a G, colors: ColorMap<G::Edge>, owns_colors: bool) -> Self {
        Self {
            core: AlgorithmCore::new(),
            graph,
            colors,
            owns_colors,
            root: None,
            max_depth: usize::MAX,
            visitor: (),
        }
    }
}

impl<'a, G, Vis> ImplicitEdgeDepthFirstSearch<'a, G, Vis>
where
    G: IncidenceGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> ImplicitEdgeDepthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        ImplicitEdgeDepthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            owns_colors: self.owns_colors,
            root: self.root,
            max_depth: self.max_depth,
            visitor,
        }
    }

    /// Sets the root vertex; only its out-edges start search trees
    pub fn with_root(mut self, root: G::Vertex) -> Self {
        self.set_root_vertex(root);
        self
    }

    /// Vertices at depth `max_depth` are finished without examining their edges
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Observes an external cancellation flag
    pub fn with_cancel_manager(mut self, cancel_manager: CancelManager) -> Self {
        self.core = AlgorithmCore::with_cancel_manager(cancel_manager);
        self
    }

    /// Returns the color map of the last run
    pub fn colors(&self) -> &ColorMap<G::Edge> {
        &self.colors
    }

    /// Consumes the search and returns its color map
    pub fn into_colors(self) -> ColorMap<G::Edge> {
        self.colors
    }

    /// Returns the color of `edge`; edges never reached are white
    pub fn edge_color(&self, edge: &G::Edge) -> GraphColor {
        self.colors.get_or_white(edge)
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

impl<G, Vis> Algorithm for ImplicitEdgeDepthFirstSearch<'_, G, Vis>
where
    G: IncidenceGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "implicit edge depth-first search";

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
        let graph = self.graph;
        if !graph.contains_vertex(root) {
            return Err(GraphError::root_not_in_graph(root));
        }

        self.visitor.visit(SearchEvent::StartVertex(root));
        for edge in graph.out_edges(root) {
            if self.core.is_cancelling() {
                return Ok(());
            }
            if self.colors.get_or_white(&edge) != GraphColor::White {
                continue;
            }

            self.visitor.visit(SearchEvent::StartEdge(edge.clone()));
            EdgeDepthFirstVisit {
                graph,
                core: &self.core,
                colors: &mut self.colors,
                visitor: &mut self.visitor,
                max_depth: self.max_depth,
                strict_colors: false,
            }
            .run(edge)?;
        }

        Ok(())
    }
}

impl<G, Vis> RootedAlgorithm for ImplicitEdgeDepthFirstSearch<'_, G, Vis>
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
