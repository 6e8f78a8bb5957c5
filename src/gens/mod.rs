/*!
# Graph Generators

Builders for random edge lists and helpers to add deterministic substructures to existing graphs.

Random generators follow a builder-style workflow:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Generated graphs are over the vertices `0..n` as `u32`. The [`RandomGraph`] trait wraps the
generators into constructors for every store that can be built from scratch; undirected stores
only receive normalized edges so that each pair is drawn once.

Supported models:
- G(n,p): Erdős–Rényi model with independent edge probability
- G(n): uniform random graphs with a fixed number of nodes, i.e. G(n, 1/2)
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: u32) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge<u32>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge<u32>>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n)` graph.
    fn gn<R>(rng: &mut R, n: u32) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: u32, p: f64) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: u32, p: f64) -> Self
    where
        R: Rng;
}

/// Builds a graph over `0..n` from generated edges, dropping unnormalized edges for undirected
/// graphs and self-loops if requested
fn from_generated<G>(n: u32, edges: impl Iterator<Item = Edge<u32>>, with_loops: bool) -> G
where
    G: GraphFromScratch<Vertex = u32>,
    G::Edge: From<(u32, u32)>,
{
    let mut graph = G::default();
    graph.add_vertices(0..n);

    let undirected = graph.is_undirected();
    graph.add_vertices_and_edges(
        edges
            .filter(|e| (with_loops || !e.is_loop()) && (!undirected || e.is_normalized()))
            .map(|Edge(u, v)| (u, v).into()),
    );
    graph
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch<Vertex = u32>,
    G::Edge: From<(u32, u32)>,
{
    fn gn<R>(rng: &mut R, n: u32) -> Self
    where
        R: Rng,
    {
        from_generated(n, Gn::new().nodes(n).stream(rng), true)
    }

    fn gnp<R>(rng: &mut R, n: u32, p: f64) -> Self
    where
        R: Rng,
    {
        from_generated(n, Gnp::new().nodes(n).prob(p).stream(rng), true)
    }

    fn gnp_no_loops<R>(rng: &mut R, n: u32, p: f64) -> Self
    where
        R: Rng,
    {
        from_generated(n, Gnp::new().nodes(n).prob(p).stream(rng), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn undirected_graphs_draw_each_pair_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph: UnGraph<u32> = UnGraph::gnp(rng, 12, 1.0);

        assert_eq!(graph.vertex_count(), 12);
        assert_eq!(graph.edge_count(), 12 * 13 / 2);
        assert!(graph.edges().all(|e| e.is_normalized()));
    }

    #[test]
    fn no_loops() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let graph: DiGraph<u32> = DiGraph::gnp_no_loops(rng, 10, 1.0);

        assert_eq!(graph.edge_count(), 90);
        assert!(graph.edges().all(|e| !e.is_self_edge()));
    }

    #[test]
    fn isolated_vertices_are_kept() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph: BiGraph<u32> = BiGraph::gnp(rng, 8, 0.0);

        assert_eq!(graph.vertex_count(), 8);
        assert!(graph.is_edges_empty());
    }
}
