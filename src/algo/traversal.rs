/*!
Traversal shortcuts exposed directly as methods on graphs.

The [`Traversal`] trait configures and runs the search algorithms of this module with their
defaults and returns the interesting result. Use the algorithm structs directly for roots, depth
bounds, visitors or cancellation.
*/

use fxhash::FxHashMap;

use super::*;

/// Provides convenient traversal methods (topological order, components, distances, ...)
pub trait Traversal: GraphType + Sized {
    /// Returns the vertices in a topological order, or [`GraphError::NonAcyclicGraph`] if the
    /// graph has a directed cycle.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g: DiGraph<u32> = DiGraph::from_edges([(2, 0), (0, 1)]);
    /// assert_eq!(g.topological_sort(), Ok(vec![2, 0, 1]));
    /// ```
    fn topological_sort(&self) -> Result<Vec<Self::Vertex>>
    where
        Self: VertexListGraph,
    {
        let mut topo = TopologicalSort::new(self);
        topo.compute()?;
        Ok(topo.into_sorted_vertices())
    }

    /// Returns *true* if the directed graph has no cycle (self loops included).
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2)]);
    /// assert!(g.is_directed_acyclic());
    /// ```
    fn is_directed_acyclic(&self) -> bool
    where
        Self: VertexListGraph,
    {
        self.topological_sort().is_ok()
    }

    /// Returns the connected components of an undirected graph as vertex groups
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g: UnGraph<u32> = UnGraph::from_vertices_and_edges(0..4, [(0, 2), (3, 2)]);
    /// assert_eq!(g.connected_components(), Ok(vec![vec![0, 2, 3], vec![1]]));
    /// ```
    fn connected_components(&self) -> Result<Vec<Vec<Self::Vertex>>>
    where
        Self: UndirectedGraph,
    {
        let mut cc = ConnectedComponents::new(self);
        cc.compute()?;
        Ok(cc.groups())
    }

    /// Returns the number of out-edges on a shortest path from `root` for every reachable vertex
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (0, 2), (3, 0)]);
    /// let distances = g.bfs_distances(0).unwrap();
    /// assert_eq!(distances[&2], 1);
    /// assert!(!distances.contains_key(&3));
    /// ```
    fn bfs_distances(&self, root: Self::Vertex) -> Result<FxHashMap<Self::Vertex, usize>>
    where
        Self: VertexListGraph,
    {
        let mut distances = VertexDistanceRecorder::new();
        BreadthFirstSearch::new(self)
            .with_visitor(&mut distances)
            .compute_from(root)?;
        Ok(distances.into_distances())
    }

    /// Returns all vertices in depth-first discovery order, starting new trees in vertex
    /// enumeration order
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g: DiGraph<u32> = DiGraph::from_vertices_and_edges(0..4, [(0, 2), (2, 1)]);
    /// assert_eq!(g.dfs_discovery_order(), Ok(vec![0, 2, 1, 3]));
    /// ```
    fn dfs_discovery_order(&self) -> Result<Vec<Self::Vertex>>
    where
        Self: VertexListGraph,
    {
        let mut order = VertexRecorder::new(RecordOn::Discover);
        DepthFirstSearch::new(self)
            .with_visitor(&mut order)
            .compute()?;
        Ok(order.into_vertices())
    }
}

impl<G: GraphType> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::search::*;

    #[test]
    fn topological_order() {
        let g: DiGraph<char> = DiGraph::from_edges([('c', 'd'), ('a', 'b'), ('b', 'c')]);
        assert_eq!(g.topological_sort(), Ok(vec!['a', 'b', 'c', 'd']));

        let g: DiGraph<char> = DiGraph::from_edges([('a', 'b'), ('b', 'a')]);
        assert_eq!(g.topological_sort(), Err(GraphError::NonAcyclicGraph));
        assert!(!g.is_directed_acyclic());
    }

    #[test]
    fn components_of_random_graphs() {
        for graph in random_ungraphs(31) {
            let groups = graph.connected_components().unwrap();
            assert_eq!(groups.iter().map(|c| c.len()).sum::<usize>(), graph.vertex_count());
        }
    }

    #[test]
    fn distances() {
        let g: DiGraph<u32> = DiGraph::from_edges([(0, 1), (1, 2), (2, 3), (0, 3)]);
        let d = g.bfs_distances(0).unwrap();
        assert_eq!(d[&0], 0);
        assert_eq!(d[&2], 2);
        assert_eq!(d[&3], 1);

        assert!(matches!(
            g.bfs_distances(7),
            Err(GraphError::RootNotInGraph { .. })
        ));
    }

    #[test]
    fn discovery_order() {
        let g: BiGraph<u32> = BiGraph::from_vertices_and_edges([3, 2, 1], [(1, 2), (3, 1)]);
        assert_eq!(g.dfs_discovery_order(), Ok(vec![3, 1, 2]));
    }
}
