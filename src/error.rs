//! Error types.

use thiserror::Error;

use crate::constraints::Violation;
use crate::seed::FeasibilityReport;
use crate::state::{GroupId, Position};

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A state transformation referenced something that does not exist or
/// cannot accept the change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("unknown group {0}")]
    UnknownGroup(GroupId),

    #[error("group {group} has no slot {slot}")]
    UnknownSlot { group: GroupId, slot: usize },

    #[error("bench has no index {0}")]
    UnknownBenchIndex(usize),

    #[error("position {0} is already occupied")]
    Occupied(Position),

    #[error("position {0} is empty")]
    EmptyPosition(Position),

    #[error("group {0} is full")]
    GroupFull(GroupId),
}

/// The seed builder could not produce a valid state.
#[derive(Debug, Clone, Error)]
pub enum SeedError {
    /// The eligible pool cannot meet the raid minimums; nothing was placed.
    #[error("roster is infeasible: {}", .0.summary())]
    Infeasible(FeasibilityReport),

    /// Placement finished but the result breaks hard constraints.
    #[error("seed state violates {} constraint(s)", .violations.len())]
    Invalid { violations: Vec<Violation> },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl SeedError {
    /// Itemized violations behind this failure.
    pub fn violations(&self) -> &[Violation] {
        match self {
            SeedError::Infeasible(report) => &report.violations,
            SeedError::Invalid { violations } => violations,
            SeedError::Config(_) | SeedError::State(_) => &[],
        }
    }
}

/// The optimizer refused to run.
#[derive(Debug, Clone, Error)]
pub enum OptimizeError {
    /// The seed handed to the optimizer is not constraint-valid.
    #[error("seed state is invalid ({} violation(s))", .violations.len())]
    InvalidSeed { violations: Vec<Violation> },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
