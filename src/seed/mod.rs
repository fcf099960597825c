//! Seed builder.
//!
//! Produces the first constraint-valid [`AssignmentState`](crate::state::AssignmentState)
//! from a raw player pool with a single priority-sorted greedy pass, or
//! fails with the reason:
//!
//! - [`can_build_seed`] reports raid minimums the pool cannot reach before
//!   any placement is attempted.
//! - [`build_seed`] places, validates, and returns either a valid state or
//!   the itemized violations.

mod builder;
mod feasibility;

pub use builder::{build_seed, build_seed_with_report, SeedOutcome};
pub use feasibility::{can_build_seed, FeasibilityReport};
