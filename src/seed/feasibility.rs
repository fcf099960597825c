//! Up-front feasibility check.

use crate::constraints::{RaidConfig, Rule, Violation};
use crate::domain::{Player, Role};

/// Whether the eligible pool can possibly meet the raid minimums.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeasibilityReport {
    pub feasible: bool,
    /// Players the seed builder may place.
    pub assignable: usize,
    pub assignable_tanks: usize,
    pub assignable_healers: usize,
    /// One raid-level violation per unmet minimum.
    pub violations: Vec<Violation>,
}

impl FeasibilityReport {
    /// Shortfall messages joined with `"; "`, or `"feasible"`.
    pub fn summary(&self) -> String {
        if self.violations.is_empty() {
            return "feasible".to_string();
        }
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Counts assignable tanks and healers and reports every minimum the pool
/// cannot reach, e.g. `"need 2 tanks, have 1"`.
///
/// This only looks at the pool; it does not attempt placement.
///
/// # Examples
///
/// ```
/// use raid_assign::constraints::{RaidConfig, Rule};
/// use raid_assign::domain::{Archetype, Player, Role};
/// use raid_assign::seed::can_build_seed;
///
/// let players = vec![Player::new(1, "Tank").with_role(Role::Tank).with_archetype(Archetype::Warrior)];
/// let report = can_build_seed(&players, &RaidConfig::default().with_min_healers(0));
/// assert!(!report.feasible);
/// assert_eq!(report.summary(), "need 2 tanks, have 1");
/// assert_eq!(report.violations[0].rule, Rule::MinTanks);
/// ```
pub fn can_build_seed(players: &[Player], config: &RaidConfig) -> FeasibilityReport {
    let assignable: Vec<&Player> = players.iter().filter(|p| p.is_assignable()).collect();
    let tanks = assignable.iter().filter(|p| p.has_role(Role::Tank)).count();
    let healers = assignable.iter().filter(|p| p.has_role(Role::Healer)).count();

    let mut violations = Vec::new();
    if tanks < config.min_tanks {
        violations.push(
            Violation::new(
                Rule::MinTanks,
                format!("need {} tanks, have {tanks}", config.min_tanks),
            )
            .with_counts(tanks, config.min_tanks),
        );
    }
    if healers < config.min_healers {
        violations.push(
            Violation::new(
                Rule::MinHealers,
                format!("need {} healers, have {healers}", config.min_healers),
            )
            .with_counts(healers, config.min_healers),
        );
    }

    FeasibilityReport {
        feasible: violations.is_empty(),
        assignable: assignable.len(),
        assignable_tanks: tanks,
        assignable_healers: healers,
        violations,
    }
}
