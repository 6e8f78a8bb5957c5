/*!
# Substructure Generators

Adds common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

Missing endpoints are added on the fly. Each method returns the number of edges the graph accepted,
so edges rejected by a store that forbids parallel edges are not counted.

# Example

```rust
use vgraphs::{prelude::*, gens::*};

let mut g: DiGraph<u32> = DiGraph::new(false);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique(&[0, 2, 4], false);

assert_eq!(
    g.edges().collect::<Vec<_>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 0), Edge(2, 4), Edge(3, 4), Edge(4, 2), Edge(4, 0)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures: MutableGraph {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// ```rust
    /// use vgraphs::{prelude::*, gens::*};
    ///
    /// let mut g: UnGraph<char> = UnGraph::default();
    /// assert_eq!(g.connect_path(['a', 'b', 'c']), 2);
    ///
    /// assert!(g.contains_undirected_edge('b', 'a'));
    /// assert!(g.contains_undirected_edge('b', 'c'));
    /// ```
    fn connect_path<P>(&mut self, vertices_on_path: P) -> usize
    where
        P: IntoIterator<Item = Self::Vertex>;

    /// Connects the given vertices with a **cycle**: consecutive vertices are joined and the last
    /// vertex is connected back to the first. A single vertex receives a self-edge.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> usize
    where
        C: IntoIterator<Item = Self::Vertex>;

    /// Connects all given vertices into a **clique** (complete subgraph).
    ///
    /// - If `with_loops` is `true`, each vertex also gets a self-edge.
    /// - For undirected graphs, each pair is connected once.
    fn connect_clique(&mut self, vertices: &[Self::Vertex], with_loops: bool) -> usize;
}

impl<G> GeneratorSubstructures for G
where
    G: MutableGraph,
    G::Edge: From<(G::Vertex, G::Vertex)>,
{
    fn connect_path<P>(&mut self, vertices_on_path: P) -> usize
    where
        P: IntoIterator<Item = G::Vertex>,
    {
        let mut iter = vertices_on_path.into_iter().peekable();
        if let Some(&first) = iter.peek() {
            self.add_vertex(first);
        }

        self.add_vertices_and_edges(iter.tuple_windows().map(|(u, v)| (u, v).into()))
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> usize
    where
        C: IntoIterator<Item = G::Vertex>,
    {
        let mut iter = vertices_in_cycle.into_iter();

        // walk manually so the first vertex is available for the closing edge
        let Some(first) = iter.next() else {
            return 0;
        };

        let mut added = 0;
        let mut prev = first;
        for cur in iter {
            added += self.add_vertices_and_edge((prev, cur).into()) as usize;
            prev = cur;
        }

        added + self.add_vertices_and_edge((prev, first).into()) as usize
    }

    fn connect_clique(&mut self, vertices: &[G::Vertex], with_loops: bool) -> usize {
        let directed = self.is_directed();
        let mut added = 0;

        for (i, &u) in vertices.iter().enumerate() {
            self.add_vertex(u);
            for (j, &v) in vertices.iter().enumerate() {
                if (!with_loops && i == j) || (!directed && j < i) {
                    continue;
                }

                added += self.add_vertices_and_edge((u, v).into()) as usize;
            }
        }

        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_connect_path() {
        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_path([]), 0);
            assert!(g.is_vertices_empty());
        }

        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_path([1]), 0);
            assert_eq!(g.vertex_count(), 1);
        }

        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_path([0, 3, 1, 4]), 3);
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(3, 1), Edge(1, 4)]
            );
        }

        {
            let mut g: DiGraph<u32> = DiGraph::new(false);
            assert_eq!(g.connect_path([0, 1, 0, 1]), 2);
            assert_eq!(g.edge_count(), 2);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_cycle([]), 0);
        }

        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_cycle([1]), 1);
            assert!(g.contains_edge(&Edge(1, 1)));
        }

        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_cycle([0, 3, 1, 4]), 4);
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(3, 1), Edge(1, 4), Edge(4, 0)]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_clique(&[], true), 0);
        }

        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_clique(&[1], false), 0);
            assert_eq!(g.vertex_count(), 1);
        }

        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_clique(&[1, 2, 4], false), 6);
        }

        {
            let mut g: DiGraph<u32> = DiGraph::default();
            assert_eq!(g.connect_clique(&[1, 2, 4], true), 9);
        }

        {
            let mut g: UnGraph<u32> = UnGraph::default();
            assert_eq!(g.connect_clique(&[1, 2, 4], false), 3);
            assert_eq!(g.adjacent_degree(2), 2);
        }
    }
}
