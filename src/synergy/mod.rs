//! Synergy calculator.
//!
//! Pure functions scoring how well players work together:
//!
//! - [`pair_synergy`]: symmetric pairwise affinity, O(1) per pair.
//! - [`group_composition_bonus`]: multi-player patterns such as
//!   "three warlocks with a priest".
//!
//! Neither function looks at a whole raid; the scoring module aggregates
//! them per group.

mod rules;

pub use rules::{composition_rules, CompositionRule};

use crate::domain::{Category, Player, Role};
use rules::{buff_pairing, same_category_bonus, tank_support};

/// Pairwise affinity between two players.
///
/// Symmetric: `pair_synergy(a, b) == pair_synergy(b, a)` for every pair.
/// Players without a role or archetype contribute nothing.
///
/// # Examples
///
/// ```
/// use raid_assign::domain::{Archetype, Player, Role};
/// use raid_assign::synergy::pair_synergy;
///
/// let tank = Player::new(1, "Garrosh").with_role(Role::Tank).with_archetype(Archetype::Warrior);
/// let shaman = Player::new(2, "Drek").with_role(Role::Healer).with_archetype(Archetype::Shaman);
/// assert!(pair_synergy(&tank, &shaman) > 0.0);
/// assert_eq!(pair_synergy(&tank, &shaman), pair_synergy(&shaman, &tank));
/// ```
pub fn pair_synergy(a: &Player, b: &Player) -> f64 {
    if a.id() == b.id() || !a.is_complete() || !b.is_complete() {
        return 0.0;
    }
    directed(a, b) + directed(b, a) + same_category(a, b)
}

/// One-way bonuses: what `from` brings to `to`.
///
/// Summed in both directions by [`pair_synergy`].
fn directed(from: &Player, to: &Player) -> f64 {
    let (Some(from_arch), Some(to_arch), Some(to_role)) =
        (from.archetype(), to.archetype(), to.role())
    else {
        return 0.0;
    };

    let mut bonus = 0.0;
    if to_role == Role::Tank {
        bonus += tank_support(from_arch);
    }
    bonus += buff_pairing(from_arch, to_arch, to_role);
    bonus
}

fn same_category(a: &Player, b: &Player) -> f64 {
    match (a.role(), b.role(), a.archetype(), b.archetype()) {
        (Some(Role::Dps), Some(Role::Dps), Some(x), Some(y)) if x.category() == y.category() => {
            same_category_bonus(x.category())
        }
        _ => 0.0,
    }
}

/// Sum of [`pair_synergy`] over every unordered pair.
pub fn group_synergy(players: &[&Player]) -> f64 {
    let mut total = 0.0;
    for (i, a) in players.iter().enumerate() {
        for b in &players[i + 1..] {
            total += pair_synergy(a, b);
        }
    }
    total
}

/// Bonus for multi-player patterns present in one group.
///
/// Each rule in [`composition_rules`] fires at most once per group.
pub fn group_composition_bonus(players: &[&Player]) -> f64 {
    composition_rules()
        .iter()
        .filter(|rule| rule.matches(players))
        .map(|rule| rule.bonus)
        .sum()
}

/// Names of the composition rules a group satisfies, in table order.
pub fn matched_compositions(players: &[&Player]) -> Vec<&'static str> {
    composition_rules()
        .iter()
        .filter(|rule| rule.matches(players))
        .map(|rule| rule.name)
        .collect()
}

pub(crate) fn is_melee_dps(p: &Player) -> bool {
    p.has_role(Role::Dps) && p.archetype().map(|a| a.category()) == Some(Category::Melee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Archetype;

    fn player(id: u64, role: Role, archetype: Archetype) -> Player {
        Player::new(id, format!("p{id}"))
            .with_role(role)
            .with_archetype(archetype)
    }

    #[test]
    fn test_pair_synergy_symmetric_over_all_combinations() {
        let mut id = 0;
        let mut roster = Vec::new();
        for role in Role::ALL {
            for arch in Archetype::ALL {
                id += 1;
                roster.push(player(id, role, arch));
            }
        }
        for a in &roster {
            for b in &roster {
                let ab = pair_synergy(a, b);
                let ba = pair_synergy(b, a);
                assert!(
                    (ab - ba).abs() < 1e-12,
                    "asymmetric synergy for {a} / {b}: {ab} vs {ba}"
                );
            }
        }
    }

    #[test]
    fn test_tank_with_shaman_is_strong() {
        let tank = player(1, Role::Tank, Archetype::Warrior);
        let shaman = player(2, Role::Healer, Archetype::Shaman);
        let mage = player(3, Role::Dps, Archetype::Mage);
        assert!(pair_synergy(&tank, &shaman) > pair_synergy(&tank, &mage));
        assert!((pair_synergy(&tank, &shaman) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_category_dps() {
        let rogue = player(1, Role::Dps, Archetype::Rogue);
        let warrior = player(2, Role::Dps, Archetype::Warrior);
        let mage = player(3, Role::Dps, Archetype::Mage);
        let warlock = player(4, Role::Dps, Archetype::Warlock);
        assert!((pair_synergy(&rogue, &warrior) - 3.0).abs() < 1e-12);
        assert!((pair_synergy(&mage, &warlock) - 2.0).abs() < 1e-12);
        assert_eq!(pair_synergy(&rogue, &mage), 0.0);
    }

    #[test]
    fn test_buff_provider_pairing() {
        let priest = player(1, Role::Healer, Archetype::Priest);
        let warlock = player(2, Role::Dps, Archetype::Warlock);
        assert!((pair_synergy(&priest, &warlock) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_incomplete_player_contributes_nothing() {
        let tank = player(1, Role::Tank, Archetype::Warrior);
        let unknown = Player::new(2, "?").with_role(Role::Healer);
        assert_eq!(pair_synergy(&tank, &unknown), 0.0);
    }

    #[test]
    fn test_self_pair_is_zero() {
        let rogue = player(1, Role::Dps, Archetype::Rogue);
        assert_eq!(pair_synergy(&rogue, &rogue), 0.0);
    }

    #[test]
    fn test_group_synergy_sums_pairs() {
        let a = player(1, Role::Dps, Archetype::Rogue);
        let b = player(2, Role::Dps, Archetype::Warrior);
        let c = player(3, Role::Healer, Archetype::Shaman);
        let expected = pair_synergy(&a, &b) + pair_synergy(&a, &c) + pair_synergy(&b, &c);
        assert!((group_synergy(&[&a, &b, &c]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_shadow_group_composition() {
        let warlocks: Vec<Player> = (1..=3)
            .map(|i| player(i, Role::Dps, Archetype::Warlock))
            .collect();
        let priest = player(10, Role::Healer, Archetype::Priest);

        let without: Vec<&Player> = warlocks.iter().collect();
        assert_eq!(group_composition_bonus(&without), 0.0);

        let mut with = without.clone();
        with.push(&priest);
        assert!((group_composition_bonus(&with) - 10.0).abs() < 1e-12);
        assert_eq!(matched_compositions(&with), vec!["shadow"]);
    }

    #[test]
    fn test_melee_group_composition() {
        let rogue1 = player(1, Role::Dps, Archetype::Rogue);
        let rogue2 = player(2, Role::Dps, Archetype::Rogue);
        let warrior = player(3, Role::Dps, Archetype::Warrior);
        let shaman = player(4, Role::Healer, Archetype::Shaman);
        let bonus = group_composition_bonus(&[&rogue1, &rogue2, &warrior, &shaman]);
        assert!((bonus - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_tank_warrior_does_not_count_as_melee_dps() {
        let tank = player(1, Role::Tank, Archetype::Warrior);
        let rogue1 = player(2, Role::Dps, Archetype::Rogue);
        let rogue2 = player(3, Role::Dps, Archetype::Rogue);
        let shaman = player(4, Role::Healer, Archetype::Shaman);
        assert_eq!(
            group_composition_bonus(&[&tank, &rogue1, &rogue2, &shaman]),
            0.0
        );
    }
}
