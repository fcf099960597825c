//! Fixed synergy tables.

use std::fmt;

use crate::domain::{Archetype, Category, Player, Role};

use super::is_melee_dps;

/// Bonus a support archetype gives to a tank-role player in its group.
pub(crate) fn tank_support(support: Archetype) -> f64 {
    match support {
        Archetype::Shaman => 8.0,
        Archetype::Paladin => 6.0,
        Archetype::Druid => 3.0,
        _ => 0.0,
    }
}

/// Buff a provider archetype brings to a specific beneficiary.
pub(crate) fn buff_pairing(provider: Archetype, target: Archetype, target_role: Role) -> f64 {
    let melee_dps = target_role == Role::Dps && target.category() == Category::Melee;
    match (provider, target) {
        (Archetype::Shaman, _) if melee_dps => 4.0,
        (Archetype::Priest, Archetype::Warlock) => 3.0,
        (Archetype::Druid, Archetype::Mage) => 2.0,
        (Archetype::Paladin, Archetype::Warrior) => 2.0,
        (Archetype::Hunter, _) if melee_dps => 1.0,
        _ => 0.0,
    }
}

/// Bonus for two damage dealers of the same category.
pub(crate) fn same_category_bonus(category: Category) -> f64 {
    match category {
        Category::Melee => 3.0,
        Category::Ranged => 2.0,
        Category::Hybrid => 0.0,
    }
}

/// A group-level pattern: at least `core_min` players matching `core`
/// plus at least one player of the `support` archetype.
#[derive(Clone, Copy)]
pub struct CompositionRule {
    /// Short rule name, reported by diagnostics.
    pub name: &'static str,
    /// Predicate selecting the core members.
    pub core: fn(&Player) -> bool,
    /// Minimum number of core members.
    pub core_min: usize,
    /// Archetype that must be present alongside the core.
    pub support: Archetype,
    /// Bonus awarded when the pattern is present.
    pub bonus: f64,
}

impl fmt::Debug for CompositionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionRule")
            .field("name", &self.name)
            .field("core_min", &self.core_min)
            .field("support", &self.support)
            .field("bonus", &self.bonus)
            .finish()
    }
}

impl CompositionRule {
    /// Whether the group satisfies this pattern.
    ///
    /// The support member must not itself be counted as core.
    pub fn matches(&self, players: &[&Player]) -> bool {
        let core = players.iter().filter(|p| (self.core)(**p)).count();
        if core < self.core_min {
            return false;
        }
        players
            .iter()
            .any(|p| p.archetype() == Some(self.support) && !(self.core)(*p))
    }
}

fn is_warlock(p: &Player) -> bool {
    p.archetype() == Some(Archetype::Warlock)
}

fn is_mage(p: &Player) -> bool {
    p.archetype() == Some(Archetype::Mage)
}

static COMPOSITION_RULES: [CompositionRule; 3] = [
    CompositionRule {
        name: "shadow",
        core: is_warlock,
        core_min: 3,
        support: Archetype::Priest,
        bonus: 10.0,
    },
    CompositionRule {
        name: "melee",
        core: is_melee_dps,
        core_min: 3,
        support: Archetype::Shaman,
        bonus: 8.0,
    },
    CompositionRule {
        name: "caster",
        core: is_mage,
        core_min: 3,
        support: Archetype::Druid,
        bonus: 6.0,
    },
];

/// The composition pattern table, in evaluation order.
pub fn composition_rules() -> &'static [CompositionRule] {
    &COMPOSITION_RULES
}
