//! Directed cost graph.

use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SwarmError;

/// Default inclusive weight range for randomly generated complete graphs.
const DEFAULT_WEIGHTS: RangeInclusive<u64> = 1..=10;

/// A directed graph with per-edge costs, keyed by ordered vertex pairs.
///
/// An absent entry means "no direct edge": looking it up during tour
/// evaluation is a data error, not a zero. Vertices are registered
/// implicitly when an edge touching them is added. The graph is built
/// once and read-only during search.
///
/// # Examples
///
/// ```
/// use tsp_swarm::graph::CostGraph;
///
/// let mut graph = CostGraph::new();
/// graph.add_edge(0, 1, 2.0);
/// graph.add_edge(1, 0, 3.0);
/// assert_eq!(graph.num_vertices(), 2);
/// assert_eq!(graph.tour_cost(&[0, 1]).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostGraph {
    vertices: BTreeSet<usize>,
    edges: HashMap<(usize, usize), f64>,
}

impl CostGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: HashMap::new(),
        }
    }

    /// Generates a complete graph over vertices `0..n` with integer
    /// weights drawn uniformly from `1..=10`.
    ///
    /// Every ordered pair of distinct vertices receives its own weight,
    /// which guarantees the completeness precondition of
    /// [`tour_cost`](Self::tour_cost) for any permutation of the
    /// vertex set.
    pub fn complete_random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::complete_random_in(n, DEFAULT_WEIGHTS, rng)
    }

    /// Generates a complete graph over vertices `0..n` with integer
    /// weights drawn uniformly from `weights`.
    pub fn complete_random_in<R: Rng>(
        n: usize,
        weights: RangeInclusive<u64>,
        rng: &mut R,
    ) -> Self {
        let mut graph = Self::new();
        for src in 0..n {
            for dest in 0..n {
                if src != dest {
                    let weight = rng.random_range(weights.clone()) as f64;
                    graph.add_edge(src, dest, weight);
                }
            }
        }
        graph
    }

    /// Inserts a directed edge cost and registers both endpoints.
    ///
    /// If the (src, dest) pair already has a cost, the call is a no-op:
    /// the first insertion wins.
    pub fn add_edge(&mut self, src: usize, dest: usize, cost: f64) {
        self.edges.entry((src, dest)).or_insert(cost);
        self.vertices.insert(src);
        self.vertices.insert(dest);
    }

    /// Returns `true` if a cost is recorded for the directed pair.
    pub fn has_edge(&self, src: usize, dest: usize) -> bool {
        self.edges.contains_key(&(src, dest))
    }

    /// Returns the cost of the directed edge, or `None` if absent.
    pub fn edge_cost(&self, src: usize, dest: usize) -> Option<f64> {
        self.edges.get(&(src, dest)).copied()
    }

    /// Returns `true` if `vertex` belongs to the vertex set.
    pub fn has_vertex(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges with a recorded cost.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the vertex set in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied()
    }

    /// Computes the cost of a cyclic tour: consecutive edges plus the
    /// wrap-around edge from the last vertex back to the first.
    ///
    /// An empty tour costs zero. Any pair along the cycle without a
    /// recorded cost fails with [`SwarmError::MissingEdge`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_swarm::graph::CostGraph;
    ///
    /// let mut graph = CostGraph::new();
    /// graph.add_edge(0, 1, 1.0);
    /// graph.add_edge(1, 2, 2.0);
    /// graph.add_edge(2, 0, 3.0);
    /// assert_eq!(graph.tour_cost(&[0, 1, 2]).unwrap(), 6.0);
    /// assert!(graph.tour_cost(&[0, 2, 1]).is_err());
    /// ```
    pub fn tour_cost(&self, tour: &[usize]) -> Result<f64, SwarmError> {
        let mut total = 0.0;
        for i in 0..tour.len() {
            let from = tour[i];
            let to = tour[(i + 1) % tour.len()];
            total += self
                .edge_cost(from, to)
                .ok_or(SwarmError::MissingEdge { from, to })?;
        }
        Ok(total)
    }

    /// Generates up to `count` distinct tours, all starting at one
    /// randomly chosen anchor vertex shared by the whole batch.
    ///
    /// Each attempt shuffles the non-anchor vertices and prepends the
    /// anchor; duplicates within the call are discarded, so the result
    /// may be shorter than `count`. An empty graph yields an empty
    /// result.
    pub fn random_tours<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Vec<usize>> {
        let vertices: Vec<usize> = self.vertices().collect();
        if vertices.is_empty() {
            return Vec::new();
        }
        let anchor = vertices[rng.random_range(0..vertices.len())];
        self.anchored_tours(anchor, count, rng)
    }

    /// Generates up to `count` distinct tours anchored at a
    /// caller-chosen start vertex.
    ///
    /// Fails with [`SwarmError::UnknownVertex`] if `anchor` is not in
    /// the vertex set.
    pub fn random_tours_from<R: Rng>(
        &self,
        anchor: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<usize>>, SwarmError> {
        if !self.has_vertex(anchor) {
            return Err(SwarmError::UnknownVertex { vertex: anchor });
        }
        Ok(self.anchored_tours(anchor, count, rng))
    }

    fn anchored_tours<R: Rng>(&self, anchor: usize, count: usize, rng: &mut R) -> Vec<Vec<usize>> {
        let mut rest: Vec<usize> = self.vertices().filter(|&v| v != anchor).collect();
        let mut tours: Vec<Vec<usize>> = Vec::new();

        for _ in 0..count {
            rest.shuffle(rng);
            let mut tour = Vec::with_capacity(rest.len() + 1);
            tour.push(anchor);
            tour.extend_from_slice(&rest);
            if !tours.contains(&tour) {
                tours.push(tour);
            }
        }
        tours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn triangle() -> CostGraph {
        let mut graph = CostGraph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 2.0);
        graph.add_edge(2, 0, 3.0);
        graph
    }

    #[test]
    fn test_add_edge_registers_vertices() {
        let graph = triangle();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert!(graph.has_vertex(2));
        assert!(!graph.has_vertex(3));
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_add_edge_first_insertion_wins() {
        let mut graph = triangle();
        graph.add_edge(0, 1, 99.0);
        assert_eq!(graph.edge_cost(0, 1), Some(1.0));
    }

    #[test]
    fn test_edge_lookup() {
        let graph = triangle();
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.edge_cost(1, 2), Some(2.0));
        assert_eq!(graph.edge_cost(2, 1), None);
    }

    #[test]
    fn test_tour_cost_with_wraparound() {
        let graph = triangle();
        assert_eq!(graph.tour_cost(&[0, 1, 2]).unwrap(), 6.0);
    }

    #[test]
    fn test_tour_cost_empty_tour() {
        let graph = triangle();
        assert_eq!(graph.tour_cost(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_tour_cost_missing_edge() {
        let graph = triangle();
        let err = graph.tour_cost(&[0, 2, 1]).unwrap_err();
        assert_eq!(err, SwarmError::MissingEdge { from: 0, to: 2 });
    }

    #[test]
    fn test_complete_random_covers_all_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = CostGraph::complete_random(5, &mut rng);
        assert_eq!(graph.num_vertices(), 5);
        assert_eq!(graph.num_edges(), 5 * 4);
        for src in 0..5 {
            for dest in 0..5 {
                if src != dest {
                    let cost = graph.edge_cost(src, dest).unwrap();
                    assert!((1.0..=10.0).contains(&cost));
                }
            }
        }
    }

    #[test]
    fn test_complete_random_in_custom_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = CostGraph::complete_random_in(4, 3..=3, &mut rng);
        for src in 0..4 {
            for dest in 0..4 {
                if src != dest {
                    assert_eq!(graph.edge_cost(src, dest), Some(3.0));
                }
            }
        }
    }

    #[test]
    fn test_random_tours_share_anchor_and_are_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = CostGraph::complete_random(6, &mut rng);
        let tours = graph.random_tours(20, &mut rng);
        assert!(!tours.is_empty());
        assert!(tours.len() <= 20);

        let anchor = tours[0][0];
        for (i, tour) in tours.iter().enumerate() {
            assert_eq!(tour[0], anchor);
            assert_eq!(tour.len(), 6);
            for other in &tours[i + 1..] {
                assert_ne!(tour, other);
            }
        }
    }

    #[test]
    fn test_random_tours_collapse_when_few_permutations_exist() {
        // Two vertices admit exactly one anchored tour, so any larger
        // request collapses to a single result.
        let mut graph = CostGraph::new();
        graph.add_edge(0, 1, 5.0);
        graph.add_edge(1, 0, 5.0);
        let mut rng = StdRng::seed_from_u64(3);
        let tours = graph.random_tours(10, &mut rng);
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].len(), 2);
    }

    #[test]
    fn test_random_tours_empty_graph() {
        let graph = CostGraph::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(graph.random_tours(10, &mut rng).is_empty());
    }

    #[test]
    fn test_random_tours_from_fixed_anchor() {
        let mut rng = StdRng::seed_from_u64(5);
        let graph = CostGraph::complete_random(5, &mut rng);
        let tours = graph.random_tours_from(2, 8, &mut rng).unwrap();
        assert!(!tours.is_empty());
        for tour in &tours {
            assert_eq!(tour[0], 2);
        }
    }

    #[test]
    fn test_random_tours_from_unknown_anchor() {
        let graph = triangle();
        let mut rng = StdRng::seed_from_u64(5);
        let err = graph.random_tours_from(7, 4, &mut rng).unwrap_err();
        assert_eq!(err, SwarmError::UnknownVertex { vertex: 7 });
    }

    proptest! {
        #[test]
        fn prop_random_tours_are_anchored_permutations(seed in any::<u64>(), n in 2usize..7) {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = CostGraph::complete_random(n, &mut rng);
            let tours = graph.random_tours(12, &mut rng);
            prop_assert!(!tours.is_empty());

            let anchor = tours[0][0];
            let expected: Vec<usize> = (0..n).collect();
            for tour in &tours {
                prop_assert_eq!(tour[0], anchor);
                let mut sorted = tour.clone();
                sorted.sort_unstable();
                prop_assert_eq!(&sorted, &expected);
            }
        }
    }
}
