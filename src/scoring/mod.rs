//! Scoring function.
//!
//! Maps a valid [`AssignmentState`](crate::state::AssignmentState) to a
//! scalar where higher is better. Positive terms reward synergy,
//! compositions and support placement; penalty terms punish uneven role
//! spread, redundancy, ranged crowding, unreliable statuses and benching.
//!
//! # Key Types
//!
//! - [`ScoreWeights`]: one weight per term, with documented defaults
//! - [`ScoreBreakdown`]: per-term contributions of a single evaluation
//! - [`Objective`]: what the optimizer maximizes

mod score;
mod weights;

pub use score::{score, score_breakdown, Objective, ScoreBreakdown};
pub use weights::ScoreWeights;
