/*!
# Compressed Sparse Row (CSR) Graph Representation

[`CsrGraph`] is an immutable snapshot of a directed graph. All out-edge lists are stored in a
single flattened array, with offset indices marking the start of each vertex's list. This provides:

- **Compact storage** compared to per-vertex edge lists.
- **Fast sequential access** to out-edges due to good cache locality.
- **Positional access** to every edge via [`CsrGraph::edge_at`].

The snapshot keeps the vertex order and the out-edge order of the source graph.
*/

use std::ops::Range;

use itertools::Itertools;

use super::*;
use crate::{error::*, ops::*};

/// Directed **CSR graph** representation over plain edges
#[derive(Clone, Debug)]
pub struct CsrGraph<V> {
    vertices: Vec<V>,
    positions: FxHashMap<V, usize>,
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl<V: StoreVertex> CsrGraph<V> {
    /// Takes a snapshot of the vertices and out-edges of `graph`.
    /// Edges to vertices not enumerated by `graph` are dropped.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: VertexListGraph<Vertex = V>,
    {
        let vertices = graph.vertices().collect_vec();
        let positions: FxHashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        let mut offsets = Vec::with_capacity(vertices.len() + 1);
        let mut targets = Vec::new();
        offsets.push(0);
        for &u in &vertices {
            targets.extend(
                graph
                    .out_edges(u)
                    .filter_map(|e| positions.get(&e.target()).copied()),
            );
            offsets.push(targets.len());
        }

        Self {
            vertices,
            positions,
            offsets,
            targets,
        }
    }

    /// Returns the edge at position `index` of the flattened edge array.
    /// Fails with [`GraphError::IndexOutOfRange`] if `index >= edge_count`.
    pub fn edge_at(&self, index: usize) -> Result<Edge<V>> {
        if index >= self.targets.len() {
            return Err(GraphError::IndexOutOfRange {
                index,
                count: self.targets.len(),
            });
        }

        let source = self.offsets.partition_point(|&o| o <= index) - 1;
        Ok(Edge(
            self.vertices[source],
            self.vertices[self.targets[index]],
        ))
    }

    fn out_range(&self, u: V) -> Range<usize> {
        self.positions
            .get(&u)
            .map_or(0..0, |&i| self.offsets[i]..self.offsets[i + 1])
    }

    fn edges_in(&self, u: V, range: Range<usize>) -> impl Iterator<Item = Edge<V>> + '_ {
        self.targets[range]
            .iter()
            .map(move |&t| Edge(u, self.vertices[t]))
    }
}

impl<V: StoreVertex> GraphType for CsrGraph<V> {
    type Vertex = V;
    type Edge = Edge<V>;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        true
    }
}

impl<V: StoreVertex> ImplicitVertexSet for CsrGraph<V> {
    fn contains_vertex(&self, v: V) -> bool {
        self.positions.contains_key(&v)
    }
}

impl<V: StoreVertex> VertexSet for CsrGraph<V> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.iter().copied()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V: StoreVertex> EdgeSet for CsrGraph<V> {
    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.vertices
            .iter()
            .flat_map(|&u| self.edges_in(u, self.out_range(u)))
    }

    fn edge_count(&self) -> usize {
        self.targets.len()
    }

    fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.edges_in(edge.0, self.out_range(edge.0))
            .any(|e| e.1 == edge.1)
    }
}

impl<V: StoreVertex> ImplicitGraph for CsrGraph<V> {
    fn out_edges(&self, u: V) -> impl Iterator<Item = Edge<V>> + '_ {
        self.edges_in(u, self.out_range(u))
    }

    fn out_degree(&self, u: V) -> usize {
        self.out_range(u).len()
    }
}

impl<V: StoreVertex> IncidenceGraph for CsrGraph<V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn snapshot_matches_source() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5u32, 20, 50] {
            let mut graph = DiGraph::<u32>::default();
            graph.add_vertices(0..n);
            for _ in 0..(3 * n) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                graph.add_edge(Edge(u, v)).unwrap();
            }

            let csr = CsrGraph::from_graph(&graph);
            assert_eq!(csr.vertex_count(), graph.vertex_count());
            assert_eq!(csr.edge_count(), graph.edge_count());
            assert_eq!(csr.edges().collect_vec(), graph.edges().collect_vec());

            for u in 0..n {
                assert_eq!(csr.out_degree(u), graph.out_degree(u));
                assert_eq!(
                    csr.out_edges(u).collect_vec(),
                    graph.out_edges(u).collect_vec()
                );
            }

            for (i, e) in graph.edges().enumerate() {
                assert_eq!(csr.edge_at(i), Ok(e));
                assert!(csr.contains_edge(&e));
            }
        }
    }

    #[test]
    fn edge_at_out_of_range() {
        let graph: DiGraph<u32> = DiGraph::from_edges([(0, 1), (2, 0)]);
        let csr = CsrGraph::from_graph(&graph);

        assert_eq!(csr.edge_at(1), Ok(Edge(2, 0)));
        assert_eq!(
            csr.edge_at(2),
            Err(GraphError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(csr.out_edge(1, 0).map_err(|_| ()), Err(()));
    }
}
