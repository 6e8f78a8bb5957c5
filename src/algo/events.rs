/*!
Events emitted by the search algorithms and the visitors consuming them.

Every search reports its progress as a stream of [`SearchEvent`]s delivered synchronously to a
[`SearchVisitor`]. Events carry owned copies of the vertices and edges involved. Edge events of
searches that walk edges against their stored orientation carry a `reversed` flag.

Visitors compose: tuples of visitors receive every event in order, [`VisitorList`] holds a dynamic
set of boxed visitors that can be attached and detached, and [`OnEvent`] turns any closure into a
visitor.
*/

/// A single step of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent<V, E> {
    /// Vertex reset to white before the search starts
    InitializeVertex(V),
    /// Vertex starts a new search tree
    StartVertex(V),
    /// Vertex seen for the first time (turned gray)
    DiscoverVertex(V),
    /// Vertex taken from the queue to have its edges examined
    ExamineVertex(V),
    /// All edges of the vertex are handled (turned black)
    FinishVertex(V),

    /// Edge reset to white before the search starts
    InitializeEdge(E),
    /// Edge starts a new search tree
    StartEdge(E),
    /// Edge is about to be classified
    ExamineEdge { edge: E, reversed: bool },
    /// Edge leads to a white target and becomes part of the search tree
    TreeEdge { edge: E, reversed: bool },
    /// Edge leads to a gray target
    BackEdge { edge: E, reversed: bool },
    /// Edge leads to a black target
    ForwardOrCrossEdge { edge: E, reversed: bool },
    /// Edge does not belong to the search tree
    NonTreeEdge { edge: E, reversed: bool },
    /// Non-tree edge leading to a gray target
    GrayTarget { edge: E, reversed: bool },
    /// Non-tree edge leading to a black target
    BlackTarget { edge: E, reversed: bool },
    /// In edge searches: `target` is reached as a tree edge from `edge`
    DiscoverTreeEdge { edge: E, target: E },
    /// All successor edges of the edge are handled
    FinishEdge(E),
}

/// Payload-free discriminant of a [`SearchEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    InitializeVertex,
    StartVertex,
    DiscoverVertex,
    ExamineVertex,
    FinishVertex,
    InitializeEdge,
    StartEdge,
    ExamineEdge,
    TreeEdge,
    BackEdge,
    ForwardOrCrossEdge,
    NonTreeEdge,
    GrayTarget,
    BlackTarget,
    DiscoverTreeEdge,
    FinishEdge,
}

impl<V: Copy, E> SearchEvent<V, E> {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::InitializeVertex(_) => EventKind::InitializeVertex,
            Self::StartVertex(_) => EventKind::StartVertex,
            Self::DiscoverVertex(_) => EventKind::DiscoverVertex,
            Self::ExamineVertex(_) => EventKind::ExamineVertex,
            Self::FinishVertex(_) => EventKind::FinishVertex,
            Self::InitializeEdge(_) => EventKind::InitializeEdge,
            Self::StartEdge(_) => EventKind::StartEdge,
            Self::ExamineEdge { .. } => EventKind::ExamineEdge,
            Self::TreeEdge { .. } => EventKind::TreeEdge,
            Self::BackEdge { .. } => EventKind::BackEdge,
            Self::ForwardOrCrossEdge { .. } => EventKind::ForwardOrCrossEdge,
            Self::NonTreeEdge { .. } => EventKind::NonTreeEdge,
            Self::GrayTarget { .. } => EventKind::GrayTarget,
            Self::BlackTarget { .. } => EventKind::BlackTarget,
            Self::DiscoverTreeEdge { .. } => EventKind::DiscoverTreeEdge,
            Self::FinishEdge(_) => EventKind::FinishEdge,
        }
    }

    /// Returns the vertex of a vertex event
    pub fn vertex(&self) -> Option<V> {
        match self {
            Self::InitializeVertex(v)
            | Self::StartVertex(v)
            | Self::DiscoverVertex(v)
            | Self::ExamineVertex(v)
            | Self::FinishVertex(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the edge of an edge event.
    /// For [`SearchEvent::DiscoverTreeEdge`] this is the newly reached edge.
    pub fn edge(&self) -> Option<&E> {
        match self {
            Self::InitializeEdge(edge)
            | Self::StartEdge(edge)
            | Self::FinishEdge(edge)
            | Self::ExamineEdge { edge, .. }
            | Self::TreeEdge { edge, .. }
            | Self::BackEdge { edge, .. }
            | Self::ForwardOrCrossEdge { edge, .. }
            | Self::NonTreeEdge { edge, .. }
            | Self::GrayTarget { edge, .. }
            | Self::BlackTarget { edge, .. } => Some(edge),
            Self::DiscoverTreeEdge { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Returns *true* if the edge of the event was walked against its stored orientation
    pub fn is_reversed(&self) -> bool {
        matches!(
            self,
            Self::ExamineEdge { reversed: true, .. }
                | Self::TreeEdge { reversed: true, .. }
                | Self::BackEdge { reversed: true, .. }
                | Self::ForwardOrCrossEdge { reversed: true, .. }
                | Self::NonTreeEdge { reversed: true, .. }
                | Self::GrayTarget { reversed: true, .. }
                | Self::BlackTarget { reversed: true, .. }
        )
    }
}

/// Consumer of search events
pub trait SearchVisitor<V, E> {
    fn visit(&mut self, event: SearchEvent<V, E>);
}

impl<V, E> SearchVisitor<V, E> for () {
    #[inline]
    fn visit(&mut self, _: SearchEvent<V, E>) {}
}

impl<V, E, T: SearchVisitor<V, E> + ?Sized> SearchVisitor<V, E> for &mut T {
    #[inline]
    fn visit(&mut self, event: SearchEvent<V, E>) {
        (**self).visit(event)
    }
}

impl<V, E, T: SearchVisitor<V, E> + ?Sized> SearchVisitor<V, E> for Box<T> {
    #[inline]
    fn visit(&mut self, event: SearchEvent<V, E>) {
        (**self).visit(event)
    }
}

impl<V, E, A, B> SearchVisitor<V, E> for (A, B)
where
    V: Clone,
    E: Clone,
    A: SearchVisitor<V, E>,
    B: SearchVisitor<V, E>,
{
    fn visit(&mut self, event: SearchEvent<V, E>) {
        self.0.visit(event.clone());
        self.1.visit(event);
    }
}

impl<V, E, A, B, C> SearchVisitor<V, E> for (A, B, C)
where
    V: Clone,
    E: Clone,
    A: SearchVisitor<V, E>,
    B: SearchVisitor<V, E>,
    C: SearchVisitor<V, E>,
{
    fn visit(&mut self, event: SearchEvent<V, E>) {
        self.0.visit(event.clone());
        self.1.visit(event.clone());
        self.2.visit(event);
    }
}

/// Wraps a closure into a [`SearchVisitor`]
pub struct OnEvent<F>(pub F);

impl<V, E, F: FnMut(SearchEvent<V, E>)> SearchVisitor<V, E> for OnEvent<F> {
    #[inline]
    fn visit(&mut self, event: SearchEvent<V, E>) {
        (self.0)(event)
    }
}

/// Handle returned by [`VisitorList::attach`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisitorHandle(usize);

/// Dynamic collection of visitors, notified in attachment order
pub struct VisitorList<'a, V, E> {
    visitors: Vec<Option<Box<dyn SearchVisitor<V, E> + 'a>>>,
}

impl<V, E> Default for VisitorList<'_, V, E> {
    fn default() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }
}

impl<'a, V, E> VisitorList<'a, V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a visitor and returns a handle to detach it later
    pub fn attach(&mut self, visitor: impl SearchVisitor<V, E> + 'a) -> VisitorHandle {
        self.visitors.push(Some(Box::new(visitor)));
        VisitorHandle(self.visitors.len() - 1)
    }

    /// Removes a previously attached visitor.
    /// Returns *false* if the handle was already detached.
    pub fn detach(&mut self, handle: VisitorHandle) -> bool {
        self.visitors
            .get_mut(handle.0)
            .and_then(|slot| slot.take())
            .is_some()
    }

    /// Returns the number of attached visitors
    pub fn len(&self) -> usize {
        self.visitors.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone, E: Clone> SearchVisitor<V, E> for VisitorList<'_, V, E> {
    fn visit(&mut self, event: SearchEvent<V, E>) {
        for visitor in self.visitors.iter_mut().flatten() {
            visitor.visit(event.clone());
        }
    }
}
