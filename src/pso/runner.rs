//! Swarm engine: population, global best, and the round loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SwarmError;
use crate::graph::CostGraph;

use super::config::PsoConfig;
use super::particle::Particle;
use super::swap::swap_sequence;

/// Outcome of a swarm run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsoResult {
    /// Best tour found, an anchored permutation of the vertex set.
    pub best_tour: Vec<usize>,
    /// Total cyclic cost of `best_tour`.
    pub best_cost: f64,
    /// Global-best cost as selected at the start of each round.
    pub trace: Vec<f64>,
}

/// A particle swarm searching for a low-cost Hamiltonian cycle.
///
/// The swarm owns the cost graph, a population of [`Particle`]s seeded
/// from distinct random tours sharing one anchor vertex, and a seeded
/// RNG. [`run`](Self::run) executes the configured number of rounds and
/// leaves the terminal state readable through the accessors.
///
/// # Examples
///
/// ```
/// use tsp_swarm::graph::CostGraph;
/// use tsp_swarm::pso::{PsoConfig, Swarm};
///
/// let mut graph = CostGraph::new();
/// graph.add_edge(0, 1, 5.0);
/// graph.add_edge(1, 0, 5.0);
///
/// let config = PsoConfig::new(10, 4).with_seed(42);
/// let mut swarm = Swarm::new(graph, config).unwrap();
/// let result = swarm.run().unwrap();
/// assert_eq!(result.best_cost, 10.0);
/// assert_eq!(result.trace.len(), 10);
/// ```
#[derive(Debug)]
pub struct Swarm {
    graph: CostGraph,
    config: PsoConfig,
    particles: Vec<Particle>,
    rng: StdRng,
    best_tour: Vec<usize>,
    best_cost: f64,
}

impl Swarm {
    /// Builds the initial population from distinct random anchored
    /// tours.
    ///
    /// The effective population size is however many distinct tours the
    /// generation produced, which may be smaller than
    /// `config.population_size`. Zero distinct tours is a hard error:
    /// [`SwarmError::EmptyPopulation`].
    pub fn new(graph: CostGraph, config: PsoConfig) -> Result<Self, SwarmError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let tours = graph.random_tours(config.population_size, &mut rng);
        if tours.is_empty() {
            return Err(SwarmError::EmptyPopulation);
        }
        if tours.len() < config.population_size {
            debug!(
                requested = config.population_size,
                effective = tours.len(),
                "duplicate tours collapsed the population"
            );
        }

        let mut particles = Vec::with_capacity(tours.len());
        for tour in tours {
            let cost = graph.tour_cost(&tour)?;
            particles.push(Particle::new(tour, cost));
        }

        Ok(Self {
            graph,
            config,
            particles,
            rng,
            best_tour: Vec::new(),
            best_cost: f64::INFINITY,
        })
    }

    /// Runs the optimization loop for exactly `config.iterations`
    /// rounds, sequentially and without early termination.
    ///
    /// Each round snapshots the global best (lowest personal-best cost,
    /// first particle wins ties), then updates every particle against
    /// that snapshot: rebuild the velocity from the swap sequences
    /// toward its personal best (weight `alpha`) and the global best
    /// (weight `beta`), apply the operators stochastically in order,
    /// re-evaluate, and record a new personal best on strict
    /// improvement.
    ///
    /// The reported answer is the snapshot taken at the start of the
    /// last round, so improvements found during that round are not
    /// reflected unless `config.refresh_after_run` is set. With zero
    /// iterations the global best is still selected once from the
    /// initial population.
    pub fn run(&mut self) -> Result<PsoResult, SwarmError> {
        let mut trace = Vec::with_capacity(self.config.iterations);

        for round in 0..self.config.iterations {
            self.refresh_global_best();
            trace.push(self.best_cost);
            debug!(round, best_cost = self.best_cost, "round start");

            let gbest = self.best_tour.clone();
            for idx in 0..self.particles.len() {
                self.step_particle(idx, &gbest)?;
            }
        }

        if self.config.iterations == 0 || self.config.refresh_after_run {
            self.refresh_global_best();
        }

        Ok(PsoResult {
            best_tour: self.best_tour.clone(),
            best_cost: self.best_cost,
            trace,
        })
    }

    /// Returns the best tour found. Meaningful after [`run`](Self::run).
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Returns the cost of the best tour. Meaningful after
    /// [`run`](Self::run).
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Returns the population. Its length is the effective population
    /// size.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Returns the cost graph.
    pub fn graph(&self) -> &CostGraph {
        &self.graph
    }

    /// Snapshots the particle with the lowest personal-best cost.
    ///
    /// Ties keep the earliest particle in population order, which makes
    /// the selection deterministic for a fixed population order.
    fn refresh_global_best(&mut self) {
        let mut best = 0;
        for (idx, particle) in self.particles.iter().enumerate().skip(1) {
            if particle.best_cost() < self.particles[best].best_cost() {
                best = idx;
            }
        }
        self.best_tour = self.particles[best].best_tour().to_vec();
        self.best_cost = self.particles[best].best_cost();
    }

    /// Updates one particle against the round's global-best snapshot.
    ///
    /// Velocity construction works on local copies; the stored personal
    /// and global bests are never mutated here.
    fn step_particle(&mut self, idx: usize, gbest: &[usize]) -> Result<(), SwarmError> {
        let alpha = self.config.alpha;
        let beta = self.config.beta;

        let particle = &mut self.particles[idx];
        particle.clear_velocity();

        let mut toward_pbest = particle.best_tour().to_vec();
        let mut toward_gbest = gbest.to_vec();
        let mut tour = particle.current_tour().to_vec();

        let mut velocity = swap_sequence(&tour, &mut toward_pbest, alpha);
        velocity.extend(swap_sequence(&tour, &mut toward_gbest, beta));

        for op in &velocity {
            if self.rng.random::<f64>() <= op.probability {
                op.apply(&mut tour);
            }
        }

        let cost = self.graph.tour_cost(&tour)?;
        particle.set_velocity(velocity);
        particle.set_current(tour.clone(), cost);
        if cost < particle.best_cost() {
            particle.set_best(tour, cost);
        }
        Ok(())
    }
}
