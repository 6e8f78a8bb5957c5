use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Edges are streamed in lexicographic order. Self-loops and both orientations of every pair are
/// drawn; filtering them is up to the caller.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u32,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = GnpType::Prob(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: u32) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

/// Streams every ordered pair of `0..n` that passes an independent coin flip with probability `p`
fn coin_flip_pairs<R: Rng>(n: u32, p: f64, rng: &mut R) -> impl Iterator<Item = Edge<u32>> {
    (0..n)
        .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
        .filter(move |_| rng.random_bool(p))
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge<u32>> {
        let p = match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if self.n == 0 { 0.0 } else { d / self.n as f64 };
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        };

        coin_flip_pairs(self.n, p, rng)
    }
}

/// `G(n) = G(n,1/2)` generators are uniform distributions over all graphs with `n` nodes.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gn {
    n: u32,
}

impl Gn {
    /// Creates a new `G(n)` generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gn {
    fn nodes(mut self, n: u32) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gn {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge<u32>> {
        coin_flip_pairs(self.n, 0.5, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().nodes(20).prob(0.0).generate(rng).is_empty());
        assert_eq!(
            Gnp::new().nodes(3).prob(1.0).generate(rng),
            (0..3).cartesian_product(0..3).map(Edge::from).collect_vec()
        );
    }

    #[test]
    fn edges_are_sorted_and_distinct() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let edges = Gn::new().nodes(30).generate(rng);

        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(edges.iter().all(|e| e.0 < 30 && e.1 < 30));
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 200u32;
        let m = Gnp::new().nodes(n).avg_deg(10.0).stream(rng).count();

        // expected n * d = 2000 edges
        assert!((1600..2400).contains(&m), "{m}");
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}
