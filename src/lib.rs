//! Raid-roster assignment engine.
//!
//! Places a pool of signed-up players into fixed-capacity groups so that
//! hard role and size constraints always hold, then improves the layout
//! with a deterministic local search over player swaps.
//!
//! - **Domain** ([`domain`]): players, roles, statuses and archetypes.
//! - **State** ([`state`]): immutable, structurally shared layouts.
//! - **Synergy** ([`synergy`]): pairwise affinity and composition bonuses.
//! - **Constraints** ([`constraints`]): raid, group and player rules with
//!   itemized violations.
//! - **Seed** ([`seed`]): greedy construction of the first valid layout.
//! - **Scoring** ([`scoring`]): weighted soft objective.
//! - **Search** ([`search`]): steepest-ascent hill climbing.
//!
//! # Example
//!
//! ```
//! use raid_assign::{build_seed, optimize, score, RaidConfig, ScoreWeights, SearchConfig};
//! use raid_assign::domain::{Archetype, Player, Role};
//!
//! let mut players = vec![
//!     Player::new(1, "Tank A").with_role(Role::Tank).with_archetype(Archetype::Warrior),
//!     Player::new(2, "Tank B").with_role(Role::Tank).with_archetype(Archetype::Paladin),
//!     Player::new(3, "Heal A").with_role(Role::Healer).with_archetype(Archetype::Priest),
//!     Player::new(4, "Heal B").with_role(Role::Healer).with_archetype(Archetype::Shaman),
//! ];
//! for id in 5..=10 {
//!     players.push(Player::new(id, "dps").with_role(Role::Dps).with_archetype(Archetype::Warlock));
//! }
//!
//! let raid = RaidConfig::default()
//!     .with_group_count(2)
//!     .with_min_tanks(2)
//!     .with_min_healers(2);
//! let seed = build_seed(&players, &raid).unwrap();
//!
//! let weights = ScoreWeights::default();
//! let result = optimize(&seed, &weights, &SearchConfig::default().with_constraints(raid)).unwrap();
//! assert!(result.final_score >= score(&seed, &weights));
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate neighbors with rayon.
//! - `serde`: `Serialize`/`Deserialize` for domain, config, state and
//!   report types.

pub mod constraints;
pub mod domain;
pub mod error;
pub mod scoring;
pub mod search;
pub mod seed;
pub mod state;
pub mod synergy;

pub use constraints::{validate, validate_swap, RaidConfig, ValidationResult, Violation};
pub use error::{ConfigError, OptimizeError, SeedError, StateError};
pub use scoring::{score, score_breakdown, Objective, ScoreWeights};
pub use search::{optimize, OptimizationResult, SearchConfig, StopReason};
pub use seed::{build_seed, can_build_seed, FeasibilityReport};
pub use state::AssignmentState;
pub use synergy::{group_composition_bonus, pair_synergy};
