//! Closed enumerations describing a player.

use std::fmt;

/// Primary raid role. Fixed per player for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Tank,
    Healer,
    Dps,
}

impl Role {
    /// All roles in placement priority order.
    pub const ALL: [Role; 3] = [Role::Tank, Role::Healer, Role::Dps];

    /// Placement priority; lower is placed first.
    pub fn priority(self) -> u8 {
        match self {
            Role::Tank => 0,
            Role::Healer => 1,
            Role::Dps => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tank => "tank",
            Role::Healer => "healer",
            Role::Dps => "dps",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eligibility status of a signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Signed up and committed.
    Confirmed,
    /// Signed up but unsure.
    Tentative,
    /// Will arrive after the start.
    Late,
    /// Available only as a substitute; never placed in a group.
    Benched,
    /// Must not appear anywhere in the groups.
    Excluded,
}

impl Status {
    /// Whether a player with this status may be placed in a group.
    pub fn is_assignable(self) -> bool {
        matches!(self, Status::Confirmed | Status::Tentative | Status::Late)
    }

    /// Whether this status restricts the player to the bench.
    pub fn is_bench_only(self) -> bool {
        matches!(self, Status::Benched)
    }

    pub fn is_excluded(self) -> bool {
        matches!(self, Status::Excluded)
    }

    /// Placement priority among assignable statuses; lower is placed first.
    ///
    /// Non-assignable statuses sort last.
    pub fn priority(self) -> u8 {
        match self {
            Status::Confirmed => 0,
            Status::Tentative => 1,
            Status::Late => 2,
            Status::Benched => 3,
            Status::Excluded => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Confirmed => "confirmed",
            Status::Tentative => "tentative",
            Status::Late => "late",
            Status::Benched => "benched",
            Status::Excluded => "excluded",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad combat category of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Melee,
    Ranged,
    /// Classes that can fill more than one role.
    Hybrid,
}

/// Character class.
///
/// The set is closed: synergy tables match on it exhaustively, so adding a
/// class forces every rule to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Archetype {
    Warrior,
    Rogue,
    Hunter,
    Mage,
    Warlock,
    Priest,
    Druid,
    Shaman,
    Paladin,
}

impl Archetype {
    pub const COUNT: usize = 9;

    pub const ALL: [Archetype; Self::COUNT] = [
        Archetype::Warrior,
        Archetype::Rogue,
        Archetype::Hunter,
        Archetype::Mage,
        Archetype::Warlock,
        Archetype::Priest,
        Archetype::Druid,
        Archetype::Shaman,
        Archetype::Paladin,
    ];

    pub fn category(self) -> Category {
        match self {
            Archetype::Warrior | Archetype::Rogue => Category::Melee,
            Archetype::Hunter | Archetype::Mage | Archetype::Warlock => Category::Ranged,
            Archetype::Priest | Archetype::Druid | Archetype::Shaman | Archetype::Paladin => {
                Category::Hybrid
            }
        }
    }

    /// The role this archetype buffs when grouped with it, if any.
    pub fn supports(self) -> Option<Role> {
        match self {
            Archetype::Paladin => Some(Role::Tank),
            Archetype::Shaman => Some(Role::Dps),
            Archetype::Druid => Some(Role::Healer),
            _ => None,
        }
    }

    /// Dense index, used for per-group counting arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Warrior => "warrior",
            Archetype::Rogue => "rogue",
            Archetype::Hunter => "hunter",
            Archetype::Mage => "mage",
            Archetype::Warlock => "warlock",
            Archetype::Priest => "priest",
            Archetype::Druid => "druid",
            Archetype::Shaman => "shaman",
            Archetype::Paladin => "paladin",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
