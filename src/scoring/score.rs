//! Score evaluation.

use crate::domain::{Category, Player, Role, Status};
use crate::state::{AssignmentState, Group};
use crate::synergy::{group_composition_bonus, group_synergy};

use super::weights::ScoreWeights;

/// Anything the optimizer can maximize.
///
/// Implemented for [`ScoreWeights`] and for plain closures, so a custom
/// objective is just `|state: &AssignmentState| ...`.
pub trait Objective: Sync {
    fn score(&self, state: &AssignmentState) -> f64;
}

impl Objective for ScoreWeights {
    fn score(&self, state: &AssignmentState) -> f64 {
        score(state, self)
    }
}

impl<F> Objective for F
where
    F: Fn(&AssignmentState) -> f64 + Sync,
{
    fn score(&self, state: &AssignmentState) -> f64 {
        self(state)
    }
}

/// Weighted contribution of every term, signed as it enters the total.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    pub synergy: f64,
    pub composition: f64,
    pub healer_balance: f64,
    pub tank_balance: f64,
    pub support_colocation: f64,
    pub archetype_redundancy: f64,
    pub ranged_saturation: f64,
    pub late_status: f64,
    pub tentative_status: f64,
    pub bench: f64,
    pub quality_balance: f64,
}

impl ScoreBreakdown {
    /// Sum of all terms, always added in declaration order.
    pub fn total(&self) -> f64 {
        self.synergy
            + self.composition
            + self.healer_balance
            + self.tank_balance
            + self.support_colocation
            + self.archetype_redundancy
            + self.ranged_saturation
            + self.late_status
            + self.tentative_status
            + self.bench
            + self.quality_balance
    }
}

/// Scalar quality of a valid state; higher is better.
///
/// Does not validate. Scoring an invalid state returns a number with no
/// meaning.
///
/// # Examples
///
/// ```
/// use raid_assign::domain::{Archetype, Player, Role};
/// use raid_assign::scoring::{score, ScoreWeights};
/// use raid_assign::state::{AssignmentState, GroupId};
/// use std::sync::Arc;
///
/// let tank = Arc::new(Player::new(1, "T").with_role(Role::Tank).with_archetype(Archetype::Warrior));
/// let shaman = Arc::new(Player::new(2, "S").with_role(Role::Healer).with_archetype(Archetype::Shaman));
///
/// let apart = AssignmentState::empty(2, 5)
///     .place(tank.clone(), GroupId(1)).unwrap()
///     .place(shaman.clone(), GroupId(2)).unwrap();
/// let together = AssignmentState::empty(2, 5)
///     .place(tank, GroupId(1)).unwrap()
///     .place(shaman, GroupId(1)).unwrap();
///
/// let w = ScoreWeights::default().with_healer_balance(0.0).with_tank_balance(0.0);
/// assert!(score(&together, &w) > score(&apart, &w));
/// ```
pub fn score(state: &AssignmentState, weights: &ScoreWeights) -> f64 {
    score_breakdown(state, weights).total()
}

/// Every scoring term, weighted and signed.
///
/// Per-group terms are accumulated in group-id order, so the result does
/// not depend on how groups are stored.
pub fn score_breakdown(state: &AssignmentState, weights: &ScoreWeights) -> ScoreBreakdown {
    let groups = state.groups_by_id();

    let mut synergy = 0.0;
    let mut composition = 0.0;
    let mut colocated = 0usize;
    let mut redundant = 0usize;
    let mut saturated = 0usize;
    for group in &groups {
        let members = group.members();
        synergy += group_synergy(&members);
        composition += group_composition_bonus(&members);
        colocated += support_colocation(&members);
        redundant += archetype_redundancy(group);
        saturated += ranged_saturation(&members, weights.ranged_cap);
    }

    let healers: Vec<f64> = groups
        .iter()
        .map(|g| g.role_count(Role::Healer) as f64)
        .collect();
    let tanks: Vec<f64> = groups
        .iter()
        .map(|g| g.role_count(Role::Tank) as f64)
        .collect();
    let qualities: Vec<f64> = groups.iter().filter_map(|g| mean_quality(g)).collect();

    let late = state
        .assigned()
        .filter(|p| p.status() == Status::Late)
        .count();
    let tentative = state
        .assigned()
        .filter(|p| p.status() == Status::Tentative)
        .count();

    ScoreBreakdown {
        synergy: weights.synergy * synergy,
        composition: weights.composition * composition,
        healer_balance: -weights.healer_balance * std_dev(&healers),
        tank_balance: -weights.tank_balance * std_dev(&tanks),
        support_colocation: weights.support_colocation * colocated as f64,
        archetype_redundancy: -weights.archetype_redundancy * redundant as f64,
        ranged_saturation: -weights.ranged_saturation * saturated as f64,
        late_status: -weights.late_status * late as f64,
        tentative_status: -weights.tentative_status * tentative as f64,
        bench: -weights.bench * state.bench().len() as f64,
        quality_balance: -weights.quality_balance * std_dev(&qualities),
    }
}

/// Providers sharing a group with someone of the role they support.
fn support_colocation(members: &[&Player]) -> usize {
    members
        .iter()
        .filter(|p| {
            p.archetype()
                .and_then(|a| a.supports())
                .is_some_and(|role| {
                    members
                        .iter()
                        .any(|q| q.id() != p.id() && q.has_role(role))
                })
        })
        .count()
}

/// Occurrences of each archetype beyond the first.
fn archetype_redundancy(group: &Group) -> usize {
    group
        .archetype_counts()
        .iter()
        .map(|&n| n.saturating_sub(1))
        .sum()
}

fn ranged_saturation(members: &[&Player], cap: usize) -> usize {
    let ranged = members
        .iter()
        .filter(|p| p.archetype().map(|a| a.category()) == Some(Category::Ranged))
        .count();
    ranged.saturating_sub(cap)
}

fn mean_quality(group: &Group) -> Option<f64> {
    let n = group.filled_count();
    if n == 0 {
        return None;
    }
    Some(group.players().map(|p| p.quality()).sum::<f64>() / n as f64)
}

/// Population standard deviation; zero for fewer than two values.
fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Archetype;
    use crate::state::GroupId;
    use std::sync::Arc;

    fn player(id: u64, role: Role, archetype: Archetype) -> Arc<Player> {
        Arc::new(
            Player::new(id, format!("p{id}"))
                .with_role(role)
                .with_archetype(archetype),
        )
    }

    fn zero() -> ScoreWeights {
        ScoreWeights {
            synergy: 0.0,
            composition: 0.0,
            healer_balance: 0.0,
            tank_balance: 0.0,
            support_colocation: 0.0,
            archetype_redundancy: 0.0,
            ranged_saturation: 0.0,
            ranged_cap: 3,
            late_status: 0.0,
            tentative_status: 0.0,
            bench: 0.0,
            quality_balance: 0.0,
        }
    }

    fn two_groups() -> AssignmentState {
        AssignmentState::empty(2, 5)
            .place(player(1, Role::Tank, Archetype::Warrior), GroupId(1))
            .unwrap()
            .place(player(2, Role::Healer, Archetype::Shaman), GroupId(1))
            .unwrap()
            .place(player(3, Role::Dps, Archetype::Rogue), GroupId(1))
            .unwrap()
            .place(player(4, Role::Tank, Archetype::Paladin), GroupId(2))
            .unwrap()
            .place(player(5, Role::Healer, Archetype::Priest), GroupId(2))
            .unwrap()
            .place(player(6, Role::Dps, Archetype::Warlock), GroupId(2))
            .unwrap()
    }

    #[test]
    fn test_empty_state_scores_zero() {
        let state = AssignmentState::empty(3, 5);
        assert_eq!(score(&state, &ScoreWeights::default()), 0.0);
    }

    #[test]
    fn test_synergy_term_matches_pair_sum() {
        let state = two_groups();
        let b = score_breakdown(&state, &zero().with_synergy(1.0));
        let g1 = state.group(GroupId(1)).unwrap().members();
        let g2 = state.group(GroupId(2)).unwrap().members();
        let expected = group_synergy(&g1) + group_synergy(&g2);
        assert!((b.synergy - expected).abs() < 1e-12);
        assert_eq!(b.total(), b.synergy);
    }

    #[test]
    fn test_healer_balance_penalizes_stacking() {
        let w = zero().with_healer_balance(1.0);
        let balanced = AssignmentState::empty(2, 5)
            .place(player(1, Role::Healer, Archetype::Priest), GroupId(1))
            .unwrap()
            .place(player(2, Role::Healer, Archetype::Druid), GroupId(2))
            .unwrap();
        let stacked = AssignmentState::empty(2, 5)
            .place(player(1, Role::Healer, Archetype::Priest), GroupId(1))
            .unwrap()
            .place(player(2, Role::Healer, Archetype::Druid), GroupId(1))
            .unwrap();
        assert_eq!(score(&balanced, &w), 0.0);
        assert!((score(&stacked, &w) + 1.0).abs() < 1e-12, "stddev of [2, 0] is 1");
    }

    #[test]
    fn test_support_colocation() {
        // paladin supports tank, shaman supports dps
        let state = AssignmentState::empty(1, 5)
            .place(player(1, Role::Tank, Archetype::Warrior), GroupId(1))
            .unwrap()
            .place(player(2, Role::Healer, Archetype::Paladin), GroupId(1))
            .unwrap()
            .place(player(3, Role::Healer, Archetype::Shaman), GroupId(1))
            .unwrap();
        let b = score_breakdown(&state, &zero().with_support_colocation(1.0));
        assert_eq!(b.support_colocation, 1.0, "shaman has no dps to support");
    }

    #[test]
    fn test_provider_does_not_support_itself() {
        let state = AssignmentState::empty(1, 5)
            .place(player(1, Role::Tank, Archetype::Paladin), GroupId(1))
            .unwrap();
        let b = score_breakdown(&state, &zero().with_support_colocation(1.0));
        assert_eq!(b.support_colocation, 0.0);
    }

    #[test]
    fn test_archetype_redundancy() {
        let state = AssignmentState::empty(1, 5)
            .place(player(1, Role::Dps, Archetype::Mage), GroupId(1))
            .unwrap()
            .place(player(2, Role::Dps, Archetype::Mage), GroupId(1))
            .unwrap()
            .place(player(3, Role::Dps, Archetype::Mage), GroupId(1))
            .unwrap();
        let b = score_breakdown(&state, &zero().with_archetype_redundancy(0.5));
        assert_eq!(b.archetype_redundancy, -1.0);
    }

    #[test]
    fn test_ranged_saturation() {
        let mut state = AssignmentState::empty(1, 5);
        for (id, arch) in [
            (1, Archetype::Mage),
            (2, Archetype::Warlock),
            (3, Archetype::Hunter),
            (4, Archetype::Mage),
            (5, Archetype::Priest),
        ] {
            state = state.place(player(id, Role::Dps, arch), GroupId(1)).unwrap();
        }
        // four ranged, the priest is a hybrid
        let b = score_breakdown(&state, &zero().with_ranged_saturation(1.0));
        assert_eq!(b.ranged_saturation, -1.0);
        let relaxed = score_breakdown(
            &state,
            &zero().with_ranged_saturation(1.0).with_ranged_cap(4),
        );
        assert_eq!(relaxed.ranged_saturation, 0.0);
    }

    #[test]
    fn test_status_and_bench_penalties() {
        let late = Arc::new(
            Player::new(1, "late")
                .with_role(Role::Dps)
                .with_archetype(Archetype::Rogue)
                .with_status(Status::Late),
        );
        let tentative = Arc::new(
            Player::new(2, "maybe")
                .with_role(Role::Dps)
                .with_archetype(Archetype::Hunter)
                .with_status(Status::Tentative),
        );
        let state = AssignmentState::empty(1, 5)
            .place(late, GroupId(1))
            .unwrap()
            .place(tentative, GroupId(1))
            .unwrap()
            .with_bench_player(player(3, Role::Dps, Archetype::Mage))
            .with_bench_player(player(4, Role::Dps, Archetype::Mage));
        let b = score_breakdown(&state, &ScoreWeights::default());
        assert_eq!(b.late_status, -1.0);
        assert_eq!(b.tentative_status, -0.5);
        assert_eq!(b.bench, -0.5);
    }

    #[test]
    fn test_quality_balance_ignores_empty_groups() {
        let a = Arc::new(
            Player::new(1, "a")
                .with_role(Role::Dps)
                .with_archetype(Archetype::Rogue)
                .with_quality(100.0),
        );
        let b = Arc::new(
            Player::new(2, "b")
                .with_role(Role::Dps)
                .with_archetype(Archetype::Rogue)
                .with_quality(100.0),
        );
        let state = AssignmentState::empty(3, 5)
            .place(a, GroupId(1))
            .unwrap()
            .place(b, GroupId(2))
            .unwrap();
        let breakdown = score_breakdown(&state, &zero().with_quality_balance(1.0));
        assert_eq!(breakdown.quality_balance, 0.0);
    }

    #[test]
    fn test_score_independent_of_group_order() {
        let state = two_groups().with_bench_player(player(9, Role::Dps, Archetype::Hunter));
        let mut groups: Vec<Group> = state.groups().iter().map(|g| (**g).clone()).collect();
        groups.reverse();
        let reordered = AssignmentState::from_parts(groups, state.bench().to_vec());
        let w = ScoreWeights::default();
        assert_eq!(score(&state, &w), score(&reordered, &w));
    }

    #[test]
    fn test_objective_impls() {
        let state = two_groups();
        let w = ScoreWeights::default();
        assert_eq!(Objective::score(&w, &state), score(&state, &w));

        let count = |s: &AssignmentState| s.assigned_count() as f64;
        assert_eq!(Objective::score(&count, &state), 6.0);
    }
}
