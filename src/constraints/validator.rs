//! Hard-constraint checks.
//!
//! Validation is total and deterministic: every rule is checked, violations
//! are reported in a fixed order (raid, then groups by id, then players in
//! group/slot order), and nothing is ever scored here.

use std::collections::BTreeMap;

use super::config::RaidConfig;
use super::types::{Rule, ValidationResult, Violation};
use crate::domain::{PlayerId, Role, Status};
use crate::error::StateError;
use crate::state::{AssignmentState, Group, Position};

/// Checks `state` against every raid-, group- and player-level rule.
///
/// # Examples
///
/// ```
/// use raid_assign::constraints::{validate, RaidConfig, Rule};
/// use raid_assign::state::AssignmentState;
///
/// let config = RaidConfig::default();
/// let empty = AssignmentState::empty(config.group_count, config.group_capacity);
/// let result = validate(&empty, &config);
/// assert!(!result.valid);
/// assert!(result.has_rule(Rule::MinTanks));
/// ```
pub fn validate(state: &AssignmentState, config: &RaidConfig) -> ValidationResult {
    let mut violations = Vec::new();
    check_raid(state, config, &mut violations);
    for group in state.groups_by_id() {
        check_group(group, config, &mut violations);
    }
    for group in state.groups_by_id() {
        check_players(group, &mut violations);
    }
    ValidationResult::from_violations(violations)
}

/// Validates the state that would result from swapping `a` and `b`.
///
/// Rejects outright, without building anything, when the swap is a no-op
/// (same position, or both positions empty) or references a position that
/// does not exist.
pub fn validate_swap(
    state: &AssignmentState,
    a: Position,
    b: Position,
    config: &RaidConfig,
) -> ValidationResult {
    if a == b {
        return ValidationResult::rejected(
            Violation::new(Rule::NoopSwap, format!("cannot swap {a} with itself")),
        );
    }

    let (pa, pb) = match (state.occupant(a), state.occupant(b)) {
        (Ok(pa), Ok(pb)) => (pa, pb),
        (ra, rb) => {
            let violations = [ra.err(), rb.err()]
                .into_iter()
                .flatten()
                .map(|e| state_error_violation(&e))
                .collect();
            return ValidationResult::from_violations(violations);
        }
    };
    if pa.is_none() && pb.is_none() {
        return ValidationResult::rejected(Violation::new(
            Rule::NoopSwap,
            format!("both {a} and {b} are empty"),
        ));
    }

    match state.swap(a, b) {
        Ok(next) => validate(&next, config),
        Err(e) => ValidationResult::rejected(state_error_violation(&e)),
    }
}

/// Validates moving the player at `from` into the empty position `to`
/// without displacing anyone.
pub fn validate_move(
    state: &AssignmentState,
    from: Position,
    to: Position,
    config: &RaidConfig,
) -> ValidationResult {
    if from == to {
        return ValidationResult::rejected(Violation::new(
            Rule::NoopSwap,
            format!("cannot move {from} onto itself"),
        ));
    }
    match state.move_player(from, to) {
        Ok(next) => validate(&next, config),
        Err(e) => ValidationResult::rejected(state_error_violation(&e)),
    }
}

/// A [`RaidConfig`] bound to the validation entry points.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: RaidConfig,
}

impl Validator {
    pub fn new(config: RaidConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RaidConfig {
        &self.config
    }

    pub fn validate(&self, state: &AssignmentState) -> ValidationResult {
        validate(state, &self.config)
    }

    pub fn validate_swap(&self, state: &AssignmentState, a: Position, b: Position) -> ValidationResult {
        validate_swap(state, a, b, &self.config)
    }

    pub fn validate_move(
        &self,
        state: &AssignmentState,
        from: Position,
        to: Position,
    ) -> ValidationResult {
        validate_move(state, from, to, &self.config)
    }

    pub fn is_valid(&self, state: &AssignmentState) -> bool {
        self.validate(state).valid
    }
}

fn check_raid(state: &AssignmentState, config: &RaidConfig, out: &mut Vec<Violation>) {
    let assigned = state.assigned_count();
    if assigned > config.max_raid_size {
        out.push(
            Violation::new(
                Rule::MaxRaidSize,
                format!(
                    "{assigned} players assigned, raid allows {}",
                    config.max_raid_size
                ),
            )
            .with_counts(assigned, config.max_raid_size),
        );
    }

    let tanks = state.role_count(Role::Tank);
    if tanks < config.min_tanks {
        out.push(
            Violation::new(
                Rule::MinTanks,
                format!("need {} tanks, have {tanks}", config.min_tanks),
            )
            .with_counts(tanks, config.min_tanks),
        );
    }

    let healers = state.role_count(Role::Healer);
    if healers < config.min_healers {
        out.push(
            Violation::new(
                Rule::MinHealers,
                format!("need {} healers, have {healers}", config.min_healers),
            )
            .with_counts(healers, config.min_healers),
        );
    }

    let mut seen: BTreeMap<PlayerId, usize> = BTreeMap::new();
    for p in state.assigned().chain(state.bench().iter()) {
        *seen.entry(p.id()).or_default() += 1;
    }
    for (id, count) in seen.into_iter().filter(|&(_, c)| c > 1) {
        out.push(
            Violation::new(
                Rule::DuplicatePlayer,
                format!("player {id} appears {count} times"),
            )
            .with_counts(count, 1)
            .for_player(id),
        );
    }
}

fn check_group(group: &Group, config: &RaidConfig, out: &mut Vec<Violation>) {
    let id = group.id();

    let filled = group.filled_count();
    if filled > config.group_capacity {
        out.push(
            Violation::new(
                Rule::GroupCapacity,
                format!(
                    "group {id} holds {filled} players, capacity is {}",
                    config.group_capacity
                ),
            )
            .with_counts(filled, config.group_capacity)
            .in_group(id),
        );
    }

    let tanks = group.role_count(Role::Tank);
    if tanks > config.max_tanks_per_group {
        out.push(
            Violation::new(
                Rule::GroupTankCap,
                format!(
                    "group {id} has {tanks} tanks, cap is {}",
                    config.max_tanks_per_group
                ),
            )
            .with_counts(tanks, config.max_tanks_per_group)
            .in_group(id),
        );
    }

    let healers = group.role_count(Role::Healer);
    if healers > config.max_healers_per_group {
        out.push(
            Violation::new(
                Rule::GroupHealerCap,
                format!(
                    "group {id} has {healers} healers, cap is {}",
                    config.max_healers_per_group
                ),
            )
            .with_counts(healers, config.max_healers_per_group)
            .in_group(id),
        );
    }

    let mut seen: BTreeMap<PlayerId, usize> = BTreeMap::new();
    for p in group.players() {
        *seen.entry(p.id()).or_default() += 1;
    }
    for (pid, count) in seen.into_iter().filter(|&(_, c)| c > 1) {
        out.push(
            Violation::new(
                Rule::GroupDuplicatePlayer,
                format!("player {pid} appears {count} times in group {id}"),
            )
            .with_counts(count, 1)
            .in_group(id)
            .for_player(pid),
        );
    }
}

fn check_players(group: &Group, out: &mut Vec<Violation>) {
    let id = group.id();
    for p in group.players() {
        match p.status() {
            Status::Excluded => out.push(
                Violation::new(
                    Rule::ExcludedAssigned,
                    format!("excluded player {p} is in group {id}"),
                )
                .in_group(id)
                .for_player(p.id()),
            ),
            Status::Benched => out.push(
                Violation::new(
                    Rule::BenchedAssigned,
                    format!("bench-only player {p} is in group {id}"),
                )
                .in_group(id)
                .for_player(p.id()),
            ),
            Status::Confirmed | Status::Tentative | Status::Late => {}
        }
        if p.role().is_none() {
            out.push(
                Violation::new(Rule::MissingRole, format!("player {p} has no role"))
                    .in_group(id)
                    .for_player(p.id()),
            );
        }
        if p.archetype().is_none() {
            out.push(
                Violation::new(
                    Rule::MissingArchetype,
                    format!("player {p} has no archetype"),
                )
                .in_group(id)
                .for_player(p.id()),
            );
        }
    }
}

fn state_error_violation(err: &StateError) -> Violation {
    let rule = match err {
        StateError::UnknownGroup(_) => Rule::UnknownGroup,
        StateError::UnknownSlot { .. } => Rule::UnknownSlot,
        StateError::UnknownBenchIndex(_) => Rule::UnknownBenchIndex,
        StateError::Occupied(_) | StateError::EmptyPosition(_) | StateError::GroupFull(_) => {
            Rule::NoopSwap
        }
    };
    let violation = Violation::new(rule, err.to_string());
    match err {
        StateError::UnknownGroup(g) | StateError::GroupFull(g) => violation.in_group(*g),
        StateError::UnknownSlot { group, .. } => violation.in_group(*group),
        _ => violation,
    }
}
