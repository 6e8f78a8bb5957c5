use super::*;

/// Breadth-first search over an undirected graph.
///
/// Works like [`BreadthFirstSearch`] on adjacent edges. An edge whose far endpoint is already
/// black has been classified from that endpoint and is skipped, so every edge is examined once
/// (parallel edges once per copy).
pub struct UndirectedBreadthFirstSearch<'a, G: UndirectedGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Vertex>,
    queue: VecDeque<G::Vertex>,
    root: Option<G::Vertex>,
    visitor: Vis,
}

impl<'a, G: UndirectedGraph> UndirectedBreadthFirstSearch<'a, G> {
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
            queue: VecDeque::new(),
            root: None,
            visitor: (),
        }
    }
}

impl<'a, G, Vis> UndirectedBreadthFirstSearch<'a, G, Vis>
where
    G: UndirectedGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> UndirectedBreadthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        UndirectedBreadthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            queue: self.queue,
            root: self.root,
            visitor,
        }
    }

    /// Sets the root vertex
    pub fn with_root(mut self, root: G::Vertex) -> Self {
        self.set_root_vertex(root);
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

    fn enqueue_root(&mut self, s: G::Vertex) {
        self.visitor.visit(SearchEvent::StartVertex(s));
        self.colors.set(s, GraphColor::Gray);
        self.visitor.visit(SearchEvent::DiscoverVertex(s));
        self.queue.push_back(s);
    }

    fn flush_visit_queue(&mut self) -> Result<()> {
        let Self {
            core,
            graph,
            colors,
            queue,
            visitor,
            ..
        } = self;
        let graph: &'a G = *graph;

        loop {
            if core.is_cancelling() {
                return Ok(());
            }
            let Some(u) = queue.pop_front() else {
                return Ok(());
            };

            visitor.visit(SearchEvent::ExamineVertex(u));
            for edge in graph.adjacent_edges(u) {
                if core.is_cancelling() {
                    return Ok(());
                }

                let reversed = edge.source() != u;
                let v = edge.other_vertex(u);
                match colors.try_get(&v)? {
                    GraphColor::Black => continue,
                    GraphColor::White => {
                        visitor.visit(SearchEvent::ExamineEdge {
                            edge: edge.clone(),
                            reversed,
                        });
                        visitor.visit(SearchEvent::TreeEdge { edge, reversed });
                        colors.set(v, GraphColor::Gray);
                        visitor.visit(SearchEvent::DiscoverVertex(v));
                        queue.push_back(v);
                    }
                    GraphColor::Gray => {
                        visitor.visit(SearchEvent::ExamineEdge {
                            edge: edge.clone(),
                            reversed,
                        });
                        visitor.visit(SearchEvent::NonTreeEdge {
                            edge: edge.clone(),
                            reversed,
                        });
                        visitor.visit(SearchEvent::GrayTarget { edge, reversed });
                    }
                }
            }

            if core.is_cancelling() {
                return Ok(());
            }
            colors.set(u, GraphColor::Black);
            visitor.visit(SearchEvent::FinishVertex(u));
        }
    }
}

impl<G, Vis> Algorithm for UndirectedBreadthFirstSearch<'_, G, Vis>
where
    G: UndirectedGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "undirected breadth-first search";

    fn core(&self) -> &AlgorithmCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore {
        &mut self.core
    }

    fn initialize(&mut self) -> Result<()> {
        self.colors.clear();
        self.queue.clear();
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

            self.enqueue_root(root);
            return self.flush_visit_queue();
        }

        let graph = self.graph;
        for u in graph.vertices() {
            if self.core.is_cancelling() {
                return Ok(());
            }

            if self.colors.try_get(&u)? == GraphColor::White {
                self.enqueue_root(u);
                self.flush_visit_queue()?;
            }
        }

        Ok(())
    }
}

impl<G, Vis> RootedAlgorithm for UndirectedBreadthFirstSearch<'_, G, Vis>
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
