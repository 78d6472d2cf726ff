//! Swap operators and swap-sequence construction.
//!
//! # Algorithm
//!
//! The swap sequence between two permutations is built by a cumulative
//! alignment pass: walk the positions left to right, and wherever the
//! guide disagrees with the reference tour, swap the offending value
//! into place *inside the guide* and record the operator. Later
//! positions therefore compare against the partially aligned guide, not
//! the original, so the recorded operators replay deterministically:
//! applied in order to a fresh copy of the original guide they
//! reproduce the reference tour.
//!
//! # Reference
//!
//! Wang, K.-P., Huang, L., Zhou, C.-G. & Pang, W. (2003). "Particle
//! swarm optimization for traveling salesman problem", *Proceedings of
//! ICMLC 2003*, 1583-1585.

use serde::{Deserialize, Serialize};

/// A candidate exchange of two tour positions, applied with the given
/// probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapOperator {
    /// First tour position.
    pub first: usize,
    /// Second tour position.
    pub second: usize,
    /// Application probability in `[0, 1]`.
    pub probability: f64,
}

impl SwapOperator {
    /// Creates a swap operator.
    pub fn new(first: usize, second: usize, probability: f64) -> Self {
        Self {
            first,
            second,
            probability,
        }
    }

    /// Unconditionally exchanges the operator's two positions in `tour`.
    ///
    /// The probabilistic draw is the caller's concern.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn apply(&self, tour: &mut [usize]) {
        tour.swap(self.first, self.second);
    }
}

/// Builds the swap sequence that transforms `guide` into `tour`.
///
/// `guide` is a working copy (of a personal or global best) and is
/// mutated in place: when the call returns it equals `tour`. Each
/// recorded operator carries `probability`. Both slices must be
/// permutations of the same vertex set.
///
/// # Examples
///
/// ```
/// use tsp_swarm::pso::swap_sequence;
///
/// let tour = [0, 2, 1, 3];
/// let mut guide = vec![0, 3, 2, 1];
/// let ops = swap_sequence(&tour, &mut guide, 0.9);
/// assert_eq!(guide, tour);
/// assert_eq!(ops.len(), 2);
/// assert_eq!(ops[0].probability, 0.9);
/// ```
pub fn swap_sequence(tour: &[usize], guide: &mut [usize], probability: f64) -> Vec<SwapOperator> {
    let mut operators = Vec::new();

    for i in 0..tour.len() {
        if guide[i] != tour[i] {
            let j = guide
                .iter()
                .position(|&v| v == tour[i])
                .expect("tours are permutations of the same vertex set");
            let operator = SwapOperator::new(i, j, probability);
            operator.apply(guide);
            operators.push(operator);
        }
    }
    operators
}
