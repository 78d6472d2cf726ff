//! Swarm run configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for a particle swarm run.
///
/// Iteration count and requested population size are mandatory; the
/// attraction weights default to 1.0 and the run is seeded from OS
/// entropy unless a seed is given.
///
/// # Examples
///
/// ```
/// use tsp_swarm::pso::PsoConfig;
///
/// let config = PsoConfig::new(100, 10)
///     .with_alpha(0.9)
///     .with_seed(42);
/// assert_eq!(config.iterations, 100);
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.alpha, 0.9);
/// assert_eq!(config.beta, 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsoConfig {
    /// Number of optimization rounds. The loop always runs to this
    /// count; there is no early termination.
    pub iterations: usize,
    /// Requested number of particles. The effective population may be
    /// smaller when duplicate random tours collapse during
    /// initialization.
    pub population_size: usize,
    /// Probability weight for swap operators derived from a particle's
    /// personal best.
    pub alpha: f64,
    /// Probability weight for swap operators derived from the global
    /// best.
    pub beta: f64,
    /// Random seed (None seeds from OS entropy).
    pub seed: Option<u64>,
    /// Recompute the global best once more after the last round.
    ///
    /// The classic formulation reports the global best as selected at
    /// the *start* of the last round, so an improvement found during
    /// that round is never reflected in the answer. Enabling this flag
    /// adds one final selection after the loop. Off by default to match
    /// the classic behavior.
    pub refresh_after_run: bool,
}

impl PsoConfig {
    /// Creates a configuration with the mandatory parameters and
    /// default weights `alpha = beta = 1.0`.
    pub fn new(iterations: usize, population_size: usize) -> Self {
        Self {
            iterations,
            population_size,
            alpha: 1.0,
            beta: 1.0,
            seed: None,
            refresh_after_run: false,
        }
    }

    /// Sets the personal-best attraction weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the global-best attraction weight.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables the extra global-best selection after the
    /// final round.
    pub fn with_refresh_after_run(mut self, refresh: bool) -> Self {
        self.refresh_after_run = refresh;
        self
    }
}
