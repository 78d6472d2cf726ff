//! Directed cost graph and anchored random tour generation.

mod cost_graph;

pub use cost_graph::CostGraph;
