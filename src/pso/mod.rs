//! Discrete particle swarm optimization.
//!
//! Classic PSO moves particles through a continuous space by adding
//! weighted velocity vectors. For the traveling salesman problem the
//! search space is the set of permutations, so the velocity becomes an
//! ordered list of [`SwapOperator`]s: candidate position exchanges,
//! each applied with a given probability. Every round a particle
//! rebuilds its velocity from the swap sequences that would align its
//! tour with its personal best and with the swarm's global best, then
//! applies the operators stochastically.
//!
//! # References
//!
//! - Kennedy, J. & Eberhart, R. (1995). "Particle swarm optimization",
//!   *Proceedings of ICNN'95*, 1942-1948.
//! - Wang, K.-P., Huang, L., Zhou, C.-G. & Pang, W. (2003). "Particle
//!   swarm optimization for traveling salesman problem", *Proceedings
//!   of ICMLC 2003*, 1583-1585.

mod config;
mod particle;
mod runner;
mod swap;

pub use config::PsoConfig;
pub use particle::Particle;
pub use runner::{PsoResult, Swarm};
pub use swap::{swap_sequence, SwapOperator};
