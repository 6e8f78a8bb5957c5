/// Generates randomized consistency tests for a mutable graph store over `u32` vertices and plain
/// edges. Each listed capability gets its own test comparing the store against a reference edge list.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            type Graph = $graph;

            /// Creates a list of at most `m_ub` distinct random edges for vertices `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> Vec<Edge<u32>> {
                let mut edges: Vec<Edge<u32>> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Calls `check` on a series of random graphs together with their reference edges
            fn for_random_graphs(mut check: impl FnMut(u32, &Graph, &[Edge<u32>])) {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10u32, 20, 50] {
                    for m_ub in [n * 2, n * 5] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, m_ub as usize);
                            let graph = Graph::from_vertices_and_edges(0..n, edges.iter().copied());
                            check(n, &graph, &edges);
                        }
                    }
                }
            }

            $(
                test_graph_ops!($undirected: $trait);
            )*
        }
    };
    ($undirected:literal: VertexSet) => {
        #[test]
        fn test_vertex_set() {
            for_random_graphs(|n, graph, _| {
                assert_eq!(graph.vertex_count(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.contains_vertex(n - 1));
                assert!(!graph.contains_vertex(n));
            });

            let graph = Graph::default();
            assert!(graph.is_vertices_empty());
            assert!(graph.is_edges_empty());
        }
    };
    ($undirected:literal: EdgeSet) => {
        #[test]
        fn test_edge_set() {
            for_random_graphs(|_, graph, edges| {
                assert_eq!(graph.edge_count(), edges.len());
                assert_eq!(graph.edges().count(), edges.len());

                let mut stored = graph.edges().collect_vec();
                stored.sort_unstable();
                assert_eq!(stored, edges);

                for e in edges {
                    assert!(graph.contains_edge(e));
                }
            });
        }
    };
    ($undirected:literal: ImplicitGraph) => {
        #[test]
        fn test_implicit_graph() {
            assert!(!$undirected);

            for_random_graphs(|n, graph, edges| {
                let mut total = 0;
                for u in 0..n {
                    let expected = edges.iter().copied().filter(|e| e.0 == u).collect_vec();
                    assert_eq!(graph.out_edges(u).collect_vec(), expected);
                    assert_eq!(graph.out_degree(u), expected.len());
                    total += graph.out_degree(u);

                    for e in &expected {
                        assert!(graph.contains_edge_between(e.0, e.1));
                        assert_eq!(graph.try_get_edge(e.0, e.1), Some(*e));
                    }
                }
                assert_eq!(total, edges.len());
            });
        }
    };
    ($undirected:literal: BidirectionalIncidenceGraph) => {
        #[test]
        fn test_bidirectional_incidence_graph() {
            assert!(!$undirected);

            for_random_graphs(|n, graph, edges| {
                for v in 0..n {
                    let expected = edges.iter().copied().filter(|e| e.1 == v).collect_vec();
                    assert_eq!(graph.in_edges(v).collect_vec(), expected);
                    assert_eq!(graph.in_degree(v), expected.len());
                    assert_eq!(graph.degree(v), expected.len() + graph.out_degree(v));
                }
            });
        }
    };
    ($undirected:literal: ImplicitUndirectedGraph) => {
        #[test]
        fn test_implicit_undirected_graph() {
            assert!($undirected);

            for_random_graphs(|n, graph, edges| {
                let loops = edges.iter().filter(|e| e.is_loop()).count();
                let mut total = 0;

                for u in 0..n {
                    let expected = edges.iter().copied().filter(|e| e.is_adjacent(u)).collect_vec();
                    assert_eq!(graph.adjacent_edges(u).collect_vec(), expected);
                    assert_eq!(graph.adjacent_degree(u), expected.len());
                    total += graph.adjacent_degree(u);

                    for e in &expected {
                        assert!(graph.contains_undirected_edge(e.1, e.0));
                    }
                }
                assert_eq!(total, 2 * edges.len() - loops);
            });
        }
    };
    ($undirected:literal: MutableGraph) => {
        #[test]
        fn test_mutable_graph() {
            for_random_graphs(|n, graph, edges| {
                let mut graph = graph.clone();
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                let mut m = graph.edge_count();
                for _ in 0..(edges.len() / 2) {
                    let e = edges[rng.random_range(0..edges.len())];
                    if graph.contains_edge(&e) {
                        assert!(graph.remove_edge(&e));
                        m -= 1;
                    } else {
                        assert!(!graph.remove_edge(&e));
                    }
                    assert!(!graph.contains_edge(&e));
                    assert_eq!(m, graph.edge_count());
                    assert_eq!(m, graph.edges().count());
                }

                for u in 0..n {
                    assert!(graph.remove_vertex(u));
                    assert_eq!(graph.edge_count(), graph.edges().count());
                    assert!(graph.edges().all(|e| !e.is_adjacent(u)));
                }
                assert!(graph.is_vertices_empty());
                assert!(graph.is_edges_empty());

                graph.add_vertices_and_edges(edges.iter().copied());
                assert_eq!(graph.edge_count(), edges.len());
                graph.clear();
                assert!(graph.is_vertices_empty());
                assert!(graph.is_edges_empty());
            });
        }
    };
}

pub(crate) use test_graph_ops;
