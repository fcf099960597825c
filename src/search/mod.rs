//! Local search optimizer.
//!
//! Deterministic steepest-ascent hill climbing from a valid seed. The
//! neighborhood is every role-preserving swap between two positions; each
//! neighbor is validated before it is scored, so the walk never leaves the
//! feasible region.
//!
//! # Key Types
//!
//! - [`SearchConfig`]: limits, constraints and neighborhood options
//! - [`OptimizationResult`]: best state, scores, history and stop reason
//! - [`SwapMove`]: one candidate exchange
//!
//! Neighbor evaluation can fan out over rayon when the crate is built with
//! the `parallel` feature and [`SearchConfig::parallel`] is set. Results are
//! collected in enumeration order, so tie-breaking is unchanged.

mod config;
mod neighbors;
mod runner;

pub use config::SearchConfig;
pub use neighbors::{candidate_swaps, SwapMove};
pub use runner::{optimize, OptimizationResult, StopReason};
