use super::*;

/// Breadth-first search over a directed graph with enumerable vertices.
///
/// Vertices are expanded in FIFO order. Per expanded vertex the search emits `ExamineVertex`,
/// then `ExamineEdge` for each out-edge followed by either `TreeEdge` (white target) or
/// `NonTreeEdge` plus `GrayTarget`/`BlackTarget`, and finally `FinishVertex`.
///
/// With a root only the vertices reachable from it are searched; without one every white vertex
/// starts a new search tree in enumeration order.
///
/// ```rust
/// use vgraphs::{prelude::*, algo::*};
///
/// let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
///
/// let mut distances = VertexDistanceRecorder::new();
/// let mut bfs = BreadthFirstSearch::new(&graph).with_root(0).with_visitor(&mut distances);
/// bfs.compute().unwrap();
///
/// assert_eq!(distances.distance(3), Some(2));
/// ```
pub struct BreadthFirstSearch<'a, G: VertexListGraph, Vis = ()> {
    core: AlgorithmCore,
    graph: &'a G,
    colors: ColorMap<G::Vertex>,
    queue: VecDeque<G::Vertex>,
    root: Option<G::Vertex>,
    out_edges_filter: Option<OutEdgesFilter<'a, G::Edge>>,
    visitor: Vis,
}

impl<'a, G: VertexListGraph> BreadthFirstSearch<'a, G> {
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
            out_edges_filter: None,
            visitor: (),
        }
    }
}

impl<'a, G, Vis> BreadthFirstSearch<'a, G, Vis>
where
    G: VertexListGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    /// Replaces the visitor
    pub fn with_visitor<W>(self, visitor: W) -> BreadthFirstSearch<'a, G, W>
    where
        W: SearchVisitor<G::Vertex, G::Edge>,
    {
        BreadthFirstSearch {
            core: self.core,
            graph: self.graph,
            colors: self.colors,
            queue: self.queue,
            root: self.root,
            out_edges_filter: self.out_edges_filter,
            visitor,
        }
    }

    /// Sets the root vertex
    pub fn with_root(mut self, root: G::Vertex) -> Self {
        self.set_root_vertex(root);
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
            out_edges_filter,
            visitor,
            ..
        } = self;
        let graph: &'a G = *graph;
        let filter = out_edges_filter.as_deref();

        loop {
            if core.is_cancelling() {
                return Ok(());
            }
            let Some(u) = queue.pop_front() else {
                return Ok(());
            };

            visitor.visit(SearchEvent::ExamineVertex(u));
            for edge in filtered_edges(graph.out_edges(u), filter) {
                if core.is_cancelling() {
                    return Ok(());
                }

                let v = edge.target();
                visitor.visit(SearchEvent::ExamineEdge {
                    edge: edge.clone(),
                    reversed: false,
                });

                match colors.try_get(&v)? {
                    GraphColor::White => {
                        visitor.visit(SearchEvent::TreeEdge {
                            edge,
                            reversed: false,
                        });
                        colors.set(v, GraphColor::Gray);
                        visitor.visit(SearchEvent::DiscoverVertex(v));
                        queue.push_back(v);
                    }
                    GraphColor::Gray => {
                        visitor.visit(SearchEvent::NonTreeEdge {
                            edge: edge.clone(),
                            reversed: false,
                        });
                        visitor.visit(SearchEvent::GrayTarget {
                            edge,
                            reversed: false,
                        });
                    }
                    GraphColor::Black => {
                        visitor.visit(SearchEvent::NonTreeEdge {
                            edge: edge.clone(),
                            reversed: false,
                        });
                        visitor.visit(SearchEvent::BlackTarget {
                            edge,
                            reversed: false,
                        });
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

impl<G, Vis> Algorithm for BreadthFirstSearch<'_, G, Vis>
where
    G: VertexListGraph,
    Vis: SearchVisitor<G::Vertex, G::Edge>,
{
    const NAME: &'static str = "breadth-first search";

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

impl<G, Vis> RootedAlgorithm for BreadthFirstSearch<'_, G, Vis>
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
