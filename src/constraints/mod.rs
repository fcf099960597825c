//! Constraint validator.
//!
//! Binary accept/reject checks over an [`AssignmentState`](crate::state::AssignmentState):
//!
//! - **Raid**: raid size, minimum tanks and healers, no duplicate players.
//! - **Group**: capacity, per-group tank and healer caps, no duplicates.
//! - **Player**: excluded or bench-only players never in a group; assigned
//!   players have a role and an archetype.
//!
//! Every [`Violation`] carries its level, rule, message and structured
//! details, so callers and tests can assert on exactly what failed.

mod config;
mod types;
mod validator;

pub use config::RaidConfig;
pub use types::{Level, Rule, ValidationResult, Violation, ViolationDetails};
pub use validator::{validate, validate_move, validate_swap, Validator};
