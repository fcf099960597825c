//! Deterministic greedy seed construction.
//!
//! # Algorithm
//!
//! 1. Partition players into assignable, auto-benched and excluded
//! 2. Sort assignable players by role, then status, then signup order
//! 3. Place each into the first group (by id) that has room and stays
//!    within its per-group cap for that role
//! 4. Bench everyone auto-benched or left unplaced
//! 5. Validate; an invalid result is an error, never a return value

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use super::feasibility::can_build_seed;
use crate::constraints::{validate, RaidConfig};
use crate::domain::{Player, PlayerId, Role};
use crate::error::SeedError;
use crate::state::{AssignmentState, Group, GroupId};

/// A seed plus what happened to every input player.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// The valid seed state.
    pub state: AssignmentState,
    /// Number of players placed in groups.
    pub placed: usize,
    /// Bench-only or incomplete players, benched without a placement attempt.
    pub auto_benched: Vec<PlayerId>,
    /// Assignable players no group could take.
    pub unplaced: Vec<PlayerId>,
    /// Excluded players, left out of the state entirely.
    pub excluded: Vec<PlayerId>,
}

/// Builds the first valid state from the raw player pool.
///
/// # Examples
///
/// ```
/// use raid_assign::constraints::RaidConfig;
/// use raid_assign::domain::{Archetype, Player, Role};
/// use raid_assign::seed::build_seed;
///
/// let players = vec![
///     Player::new(1, "Tank").with_role(Role::Tank).with_archetype(Archetype::Warrior),
///     Player::new(2, "Heal").with_role(Role::Healer).with_archetype(Archetype::Priest),
///     Player::new(3, "Rogue").with_role(Role::Dps).with_archetype(Archetype::Rogue),
/// ];
/// let config = RaidConfig::default()
///     .with_group_count(1)
///     .with_min_tanks(1)
///     .with_min_healers(1);
/// let state = build_seed(&players, &config).unwrap();
/// assert_eq!(state.assigned_count(), 3);
/// ```
pub fn build_seed(players: &[Player], config: &RaidConfig) -> Result<AssignmentState, SeedError> {
    build_seed_with_report(players, config).map(|outcome| outcome.state)
}

/// Like [`build_seed`], also returning placement statistics.
pub fn build_seed_with_report(
    players: &[Player],
    config: &RaidConfig,
) -> Result<SeedOutcome, SeedError> {
    config.validate()?;

    let feasibility = can_build_seed(players, config);
    if !feasibility.feasible {
        debug!(reason = %feasibility.summary(), "seed infeasible");
        return Err(SeedError::Infeasible(feasibility));
    }

    let mut assignable: Vec<&Player> = Vec::new();
    let mut auto_benched: Vec<&Player> = Vec::new();
    let mut excluded: Vec<PlayerId> = Vec::new();
    for p in players {
        if p.status().is_excluded() {
            excluded.push(p.id());
        } else if p.is_assignable() {
            assignable.push(p);
        } else {
            auto_benched.push(p);
        }
    }
    assignable.sort_by(|a, b| placement_order(a, b));

    let mut state = AssignmentState::empty(config.group_count, config.group_capacity);
    let mut placed = 0;
    let mut unplaced: Vec<&Player> = Vec::new();

    for p in assignable {
        let target = if placed < config.max_raid_size {
            p.role().and_then(|role| first_admitting_group(&state, role, config))
        } else {
            None
        };
        match target {
            Some(group) => {
                state = state.place(Arc::new(p.clone()), group)?;
                placed += 1;
            }
            None => unplaced.push(p),
        }
    }

    for p in auto_benched.iter().chain(unplaced.iter()) {
        state = state.with_bench_player(Arc::new((*p).clone()));
    }

    debug!(
        placed,
        auto_benched = auto_benched.len(),
        unplaced = unplaced.len(),
        excluded = excluded.len(),
        "seed placement finished"
    );

    let result = validate(&state, config);
    if !result.valid {
        debug!(violations = result.violations.len(), "seed state invalid");
        return Err(SeedError::Invalid {
            violations: result.violations,
        });
    }

    Ok(SeedOutcome {
        state: state.with_violations(Vec::new()),
        placed,
        auto_benched: auto_benched.iter().map(|p| p.id()).collect(),
        unplaced: unplaced.iter().map(|p| p.id()).collect(),
        excluded,
    })
}

/// Strict total order: role priority, status priority, signup ordinal,
/// then player id.
fn placement_order(a: &Player, b: &Player) -> Ordering {
    let role = |p: &Player| p.role().map_or(u8::MAX, Role::priority);
    role(a)
        .cmp(&role(b))
        .then_with(|| a.status().priority().cmp(&b.status().priority()))
        .then_with(|| a.signup_order().cmp(&b.signup_order()))
        .then_with(|| a.id().cmp(&b.id()))
}

fn first_admitting_group(state: &AssignmentState, role: Role, config: &RaidConfig) -> Option<GroupId> {
    state
        .groups_by_id()
        .into_iter()
        .find(|g| !g.is_full() && within_role_cap(g, role, config))
        .map(Group::id)
}

fn within_role_cap(group: &Group, role: Role, config: &RaidConfig) -> bool {
    match role {
        Role::Tank => group.role_count(Role::Tank) < config.max_tanks_per_group,
        Role::Healer => group.role_count(Role::Healer) < config.max_healers_per_group,
        Role::Dps => true,
    }
}
