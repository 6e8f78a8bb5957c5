/*!
Ready-made visitors recording the outcome of a search.

All observers implement [`SearchVisitor`] and are usually passed by mutable reference, so they can
be inspected after the algorithm is dropped:

```rust
use vgraphs::{prelude::*, algo::*};

let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (0, 3)]);

let mut preds = VertexPredecessorRecorder::new();
let mut dfs = DepthFirstSearch::new(&graph).with_root(0).with_visitor(&mut preds);
dfs.compute().unwrap();

assert_eq!(preds.try_get_path(2), Some(vec![Edge(0, 1), Edge(1, 2)]));
assert_eq!(preds.try_get_path(0), None);
```
*/

use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// Returns the vertex a tree edge leads to
#[inline]
fn tree_target<E: EdgeEndpoints>(edge: &E, reversed: bool) -> E::Vertex {
    if reversed {
        edge.source()
    } else {
        edge.target()
    }
}

/// Records the tree edge through which every vertex was discovered
#[derive(Debug, Clone)]
pub struct VertexPredecessorRecorder<V, E> {
    predecessors: FxHashMap<V, (V, E)>,
}

impl<V: Eq + Hash, E> Default for VertexPredecessorRecorder<V, E> {
    fn default() -> Self {
        Self {
            predecessors: FxHashMap::default(),
        }
    }
}

impl<V: Copy + Eq + Hash, E: Clone> VertexPredecessorRecorder<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tree edge that discovered `v`, if any
    pub fn predecessor(&self, v: V) -> Option<&E> {
        self.predecessors.get(&v).map(|(_, edge)| edge)
    }

    /// Returns the vertex `v` was discovered from, if any
    pub fn parent(&self, v: V) -> Option<V> {
        self.predecessors.get(&v).map(|(parent, _)| *parent)
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Returns the tree edges from the root of `v`'s search tree to `v`.
    /// Returns *None* if `v` was never discovered through an edge (e.g. it is a root), or if the
    /// recorded parents of `v` run in a cycle, which edge searches can produce.
    pub fn try_get_path(&self, v: V) -> Option<Vec<E>> {
        let mut path = Vec::new();
        let mut current = v;
        while let Some((parent, edge)) = self.predecessors.get(&current) {
            if path.len() == self.predecessors.len() {
                return None;
            }
            path.push(edge.clone());
            current = *parent;
        }

        if path.is_empty() {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Returns every vertex that has a predecessor but is the parent of no other vertex
    pub fn leaves(&self) -> impl Iterator<Item = V> + '_ {
        let parents: FxHashSet<V> = self.predecessors.values().map(|(p, _)| *p).collect();
        self.predecessors
            .keys()
            .copied()
            .filter(move |v| !parents.contains(v))
    }
}

impl<V, E> SearchVisitor<V, E> for VertexPredecessorRecorder<V, E>
where
    V: Copy + Eq + Hash,
    E: EdgeEndpoints<Vertex = V>,
{
    fn visit(&mut self, event: SearchEvent<V, E>) {
        match event {
            // a root keeps no parent from an earlier run
            SearchEvent::StartVertex(root) => {
                self.predecessors.remove(&root);
            }
            SearchEvent::TreeEdge { edge, reversed } => {
                let target = tree_target(&edge, reversed);
                let parent = edge.other_vertex(target);
                self.predecessors.insert(target, (parent, edge));
            }
            _ => {}
        }
    }
}

/// Records, for edge searches, the tree edge through which every edge was reached
#[derive(Debug, Clone)]
pub struct EdgePredecessorRecorder<E> {
    predecessors: FxHashMap<E, E>,
    parents: FxHashSet<E>,
    ending_edges: Vec<E>,
}

impl<E: Eq + Hash> Default for EdgePredecessorRecorder<E> {
    fn default() -> Self {
        Self {
            predecessors: FxHashMap::default(),
            parents: FxHashSet::default(),
            ending_edges: Vec::new(),
        }
    }
}

impl<E: Clone + Eq + Hash> EdgePredecessorRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predecessor(&self, edge: &E) -> Option<&E> {
        self.predecessors.get(edge)
    }

    /// Finished edges from which no further tree edge was discovered, in finishing order
    pub fn ending_edges(&self) -> &[E] {
        &self.ending_edges
    }

    /// Returns the tree path from a start edge to `edge` (both inclusive)
    pub fn path_of(&self, edge: &E) -> Vec<E> {
        let mut path = vec![edge.clone()];
        let mut current = edge;
        while let Some(pred) = self.predecessors.get(current) {
            path.push(pred.clone());
            current = pred;
        }
        path.reverse();
        path
    }

    /// Returns the paths to every ending edge
    pub fn all_paths(&self) -> Vec<Vec<E>> {
        self.ending_edges.iter().map(|e| self.path_of(e)).collect()
    }
}

impl<V, E> SearchVisitor<V, E> for EdgePredecessorRecorder<E>
where
    E: Clone + Eq + Hash,
{
    fn visit(&mut self, event: SearchEvent<V, E>) {
        match event {
            SearchEvent::DiscoverTreeEdge { edge, target } => {
                self.parents.insert(edge.clone());
                self.predecessors.insert(target, edge);
            }
            SearchEvent::FinishEdge(edge) => {
                if !self.parents.contains(&edge) {
                    self.ending_edges.push(edge);
                }
            }
            _ => {}
        }
    }
}

/// Assigns discover and finish times from a single counter shared by both events
#[derive(Debug, Clone)]
pub struct VertexTimeStamper<V> {
    discover_times: FxHashMap<V, usize>,
    finish_times: FxHashMap<V, usize>,
    time: usize,
}

impl<V: Eq + Hash> Default for VertexTimeStamper<V> {
    fn default() -> Self {
        Self {
            discover_times: FxHashMap::default(),
            finish_times: FxHashMap::default(),
            time: 0,
        }
    }
}

impl<V: Copy + Eq + Hash> VertexTimeStamper<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discover_time(&self, v: V) -> Option<usize> {
        self.discover_times.get(&v).copied()
    }

    pub fn finish_time(&self, v: V) -> Option<usize> {
        self.finish_times.get(&v).copied()
    }

    /// Number of stamps handed out so far
    pub fn time(&self) -> usize {
        self.time
    }
}

impl<V: Copy + Eq + Hash, E> SearchVisitor<V, E> for VertexTimeStamper<V> {
    fn visit(&mut self, event: SearchEvent<V, E>) {
        let times = match event {
            SearchEvent::DiscoverVertex(_) => &mut self.discover_times,
            SearchEvent::FinishVertex(_) => &mut self.finish_times,
            _ => return,
        };
        if let Some(v) = event.vertex() {
            times.insert(v, self.time);
            self.time += 1;
        }
    }
}

/// Vertex event recorded by a [`VertexRecorder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordOn {
    Start,
    #[default]
    Discover,
    Examine,
    Finish,
}

impl RecordOn {
    fn kind(self) -> EventKind {
        match self {
            Self::Start => EventKind::StartVertex,
            Self::Discover => EventKind::DiscoverVertex,
            Self::Examine => EventKind::ExamineVertex,
            Self::Finish => EventKind::FinishVertex,
        }
    }
}

/// Records vertices in the order of one kind of vertex event
#[derive(Debug, Clone, Default)]
pub struct VertexRecorder<V> {
    on: RecordOn,
    vertices: Vec<V>,
}

impl<V: Copy> VertexRecorder<V> {
    pub fn new(on: RecordOn) -> Self {
        Self {
            on,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: Copy, E> SearchVisitor<V, E> for VertexRecorder<V> {
    fn visit(&mut self, event: SearchEvent<V, E>) {
        if event.kind() == self.on.kind() {
            self.vertices.extend(event.vertex());
        }
    }
}

/// Records the edges of one kind of edge event; tree edges by default
#[derive(Debug, Clone)]
pub struct EdgeRecorder<E> {
    kind: EventKind,
    edges: Vec<E>,
}

impl<E> Default for EdgeRecorder<E> {
    fn default() -> Self {
        Self::with_kind(EventKind::TreeEdge)
    }
}

impl<E> EdgeRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(kind: EventKind) -> Self {
        Self {
            kind,
            edges: Vec::new(),
        }
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<E> {
        self.edges
    }
}

impl<V: Copy, E: Clone> SearchVisitor<V, E> for EdgeRecorder<E> {
    fn visit(&mut self, event: SearchEvent<V, E>) {
        if event.kind() == self.kind {
            self.edges.extend(event.edge().cloned());
        }
    }
}

/// Records the depth of every vertex in its search tree.
///
/// Roots have distance 0; in breadth-first searches this is the unweighted distance to the root.
#[derive(Debug, Clone)]
pub struct VertexDistanceRecorder<V> {
    distances: FxHashMap<V, usize>,
}

impl<V: Eq + Hash> Default for VertexDistanceRecorder<V> {
    fn default() -> Self {
        Self {
            distances: FxHashMap::default(),
        }
    }
}

impl<V: Copy + Eq + Hash> VertexDistanceRecorder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(&self, v: V) -> Option<usize> {
        self.distances.get(&v).copied()
    }

    pub fn distances(&self) -> &FxHashMap<V, usize> {
        &self.distances
    }

    pub fn into_distances(self) -> FxHashMap<V, usize> {
        self.distances
    }
}

impl<V, E> SearchVisitor<V, E> for VertexDistanceRecorder<V>
where
    V: Copy + Eq + Hash,
    E: EdgeEndpoints<Vertex = V>,
{
    fn visit(&mut self, event: SearchEvent<V, E>) {
        match event {
            SearchEvent::StartVertex(root) => {
                self.distances.insert(root, 0);
            }
            SearchEvent::TreeEdge { edge, reversed } => {
                let target = tree_target(&edge, reversed);
                let parent = edge.other_vertex(target);
                let depth = self.distances.get(&parent).map_or(1, |d| d + 1);
                self.distances.insert(target, depth);
            }
            _ => {}
        }
    }
}

/// Keeps a copy of every event
#[derive(Debug, Clone)]
pub struct EventRecorder<V, E> {
    events: Vec<SearchEvent<V, E>>,
}

impl<V, E> Default for EventRecorder<V, E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<V: Copy, E: Clone> EventRecorder<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SearchEvent<V, E>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SearchEvent<V, E>> {
        self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events of the given kind
    pub fn count_of(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|ev| ev.kind() == kind).count()
    }

    /// Vertices of all events of the given kind, in emission order
    pub fn vertices_of(&self, kind: EventKind) -> Vec<V> {
        self.events
            .iter()
            .filter(|ev| ev.kind() == kind)
            .filter_map(|ev| ev.vertex())
            .collect()
    }

    /// Edges of all events of the given kind, in emission order
    pub fn edges_of(&self, kind: EventKind) -> Vec<E> {
        self.events
            .iter()
            .filter(|ev| ev.kind() == kind)
            .filter_map(|ev| ev.edge().cloned())
            .collect()
    }
}

impl<V, E> SearchVisitor<V, E> for EventRecorder<V, E> {
    fn visit(&mut self, event: SearchEvent<V, E>) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predecessors_in_undirected_search() {
        let graph: UnGraph<u32> = UnGraph::from_edges([(1, 0), (1, 2), (3, 2)]);

        let mut preds = VertexPredecessorRecorder::new();
        let mut dfs = UndirectedDepthFirstSearch::new(&graph)
            .with_root(0)
            .with_visitor(&mut preds);
        dfs.compute().unwrap();
        drop(dfs);

        assert_eq!(preds.parent(1), Some(0));
        assert_eq!(preds.parent(3), Some(2));
        assert_eq!(
            preds.try_get_path(3),
            Some(vec![Edge(1, 0), Edge(1, 2), Edge(3, 2)])
        );
        assert_eq!(preds.leaves().collect::<Vec<_>>(), vec![3]);
        assert_eq!(preds.len(), 3);
    }

    #[test]
    fn predecessors_across_runs() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 0), (1, 2)]);

        let mut preds = VertexPredecessorRecorder::new();
        let mut dfs = DepthFirstSearch::new(&graph).with_visitor(&mut preds);
        dfs.compute_from(0).unwrap();
        dfs.compute_from(1).unwrap();
        drop(dfs);

        assert_eq!(preds.parent(1), None);
        assert_eq!(preds.try_get_path(0), Some(vec![Edge(1, 0)]));
        assert_eq!(preds.try_get_path(2), Some(vec![Edge(1, 2)]));
        assert_eq!(preds.try_get_path(1), None);
    }

    #[test]
    fn cyclic_parents_have_no_path() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 0)]);

        let mut preds = VertexPredecessorRecorder::new();
        let mut dfs = EdgeDepthFirstSearch::new(&graph).with_visitor(&mut preds);
        dfs.compute().unwrap();
        drop(dfs);

        assert_eq!(preds.parent(0), Some(1));
        assert_eq!(preds.parent(1), Some(0));
        assert_eq!(preds.try_get_path(0), None);
    }

    #[test]
    fn edge_paths() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (1, 3)]);

        let mut preds = EdgePredecessorRecorder::new();
        let mut dfs = EdgeDepthFirstSearch::new(&graph).with_visitor(&mut preds);
        dfs.compute().unwrap();
        drop(dfs);

        assert_eq!(preds.predecessor(&Edge(1, 3)), Some(&Edge(0, 1)));
        assert_eq!(preds.ending_edges(), &[Edge(1, 2), Edge(1, 3)]);
        assert_eq!(
            preds.all_paths(),
            vec![
                vec![Edge(0, 1), Edge(1, 2)],
                vec![Edge(0, 1), Edge(1, 3)]
            ]
        );
        assert_eq!(preds.path_of(&Edge(0, 1)), vec![Edge(0, 1)]);
    }

    #[test]
    fn time_stamps_nest() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (0, 3)]);

        let mut stamps = VertexTimeStamper::new();
        let mut dfs = DepthFirstSearch::new(&graph).with_visitor(&mut stamps);
        dfs.compute().unwrap();
        drop(dfs);

        assert_eq!(stamps.time(), 8);
        assert_eq!(stamps.discover_time(0), Some(0));
        assert_eq!(stamps.finish_time(0), Some(7));
        for v in 1..4 {
            assert!(stamps.discover_time(0) < stamps.discover_time(v));
            assert!(stamps.finish_time(v) < stamps.finish_time(0));
            assert!(stamps.discover_time(v) < stamps.finish_time(v));
        }
    }

    #[test]
    fn distances_in_bfs() {
        let graph: UnGraph<char> =
            UnGraph::from_edges([('a', 'b'), ('b', 'c'), ('c', 'd'), ('a', 'd'), ('d', 'e')]);

        let mut distances = VertexDistanceRecorder::new();
        let mut bfs = UndirectedBreadthFirstSearch::new(&graph)
            .with_root('a')
            .with_visitor(&mut distances);
        bfs.compute().unwrap();
        drop(bfs);

        let expected = [('a', 0), ('b', 1), ('c', 2), ('d', 1), ('e', 2)];
        for (v, d) in expected {
            assert_eq!(distances.distance(v), Some(d));
        }
        assert_eq!(distances.distances().len(), 5);
    }

    #[test]
    fn recorders() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 0)]);

        let mut finished = VertexRecorder::new(RecordOn::Finish);
        let mut tree = EdgeRecorder::new();
        let mut back = EdgeRecorder::with_kind(EventKind::BackEdge);
        let mut dfs = DepthFirstSearch::new(&graph).with_visitor((&mut finished, &mut tree, &mut back));
        dfs.compute().unwrap();
        drop(dfs);

        assert_eq!(finished.vertices(), &[2, 1, 0]);
        assert_eq!(tree.edges(), &[Edge(0, 1), Edge(1, 2)]);
        assert_eq!(back.into_edges(), vec![Edge(2, 0)]);
    }

    #[test]
    fn event_recorder_queries() {
        let mut events: EventRecorder<u32, Edge<u32>> = EventRecorder::new();
        events.visit(SearchEvent::StartVertex(1));
        events.visit(SearchEvent::TreeEdge {
            edge: Edge(1, 2),
            reversed: false,
        });
        events.visit(SearchEvent::DiscoverVertex(2));

        assert_eq!(events.count_of(EventKind::TreeEdge), 1);
        assert_eq!(events.vertices_of(EventKind::DiscoverVertex), vec![2]);
        assert_eq!(events.edges_of(EventKind::TreeEdge), vec![Edge(1, 2)]);
        assert!(events.edges_of(EventKind::BackEdge).is_empty());

        events.clear();
        assert!(events.events().is_empty());
    }
}
