//! Violations and validation results.

use std::fmt;

use crate::domain::PlayerId;
use crate::state::GroupId;

/// Scope a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Level {
    Raid,
    Group,
    Player,
    /// Rejections of a proposed swap or move itself.
    Move,
}

/// A hard rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Rule {
    MaxRaidSize,
    MinTanks,
    MinHealers,
    DuplicatePlayer,
    GroupCapacity,
    GroupTankCap,
    GroupHealerCap,
    GroupDuplicatePlayer,
    ExcludedAssigned,
    BenchedAssigned,
    MissingRole,
    MissingArchetype,
    NoopSwap,
    UnknownGroup,
    UnknownSlot,
    UnknownBenchIndex,
}

impl Rule {
    pub fn level(self) -> Level {
        match self {
            Rule::MaxRaidSize | Rule::MinTanks | Rule::MinHealers | Rule::DuplicatePlayer => {
                Level::Raid
            }
            Rule::GroupCapacity
            | Rule::GroupTankCap
            | Rule::GroupHealerCap
            | Rule::GroupDuplicatePlayer => Level::Group,
            Rule::ExcludedAssigned
            | Rule::BenchedAssigned
            | Rule::MissingRole
            | Rule::MissingArchetype => Level::Player,
            Rule::NoopSwap | Rule::UnknownGroup | Rule::UnknownSlot | Rule::UnknownBenchIndex => {
                Level::Move
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rule::MaxRaidSize => "MAX_RAID_SIZE",
            Rule::MinTanks => "MIN_TANKS",
            Rule::MinHealers => "MIN_HEALERS",
            Rule::DuplicatePlayer => "DUPLICATE_PLAYER",
            Rule::GroupCapacity => "GROUP_CAPACITY",
            Rule::GroupTankCap => "GROUP_TANK_CAP",
            Rule::GroupHealerCap => "GROUP_HEALER_CAP",
            Rule::GroupDuplicatePlayer => "GROUP_DUPLICATE_PLAYER",
            Rule::ExcludedAssigned => "EXCLUDED_ASSIGNED",
            Rule::BenchedAssigned => "BENCHED_ASSIGNED",
            Rule::MissingRole => "MISSING_ROLE",
            Rule::MissingArchetype => "MISSING_ARCHETYPE",
            Rule::NoopSwap => "NOOP_SWAP",
            Rule::UnknownGroup => "UNKNOWN_GROUP",
            Rule::UnknownSlot => "UNKNOWN_SLOT",
            Rule::UnknownBenchIndex => "UNKNOWN_BENCH_INDEX",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured context for a violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViolationDetails {
    /// Observed value, when the rule is a count.
    pub current: Option<usize>,
    /// Configured bound the value was checked against.
    pub limit: Option<usize>,
    pub group: Option<GroupId>,
    pub player: Option<PlayerId>,
}

/// One broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    pub level: Level,
    pub rule: Rule,
    /// Human-readable description.
    pub message: String,
    pub details: ViolationDetails,
}

impl Violation {
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            level: rule.level(),
            rule,
            message: message.into(),
            details: ViolationDetails::default(),
        }
    }

    /// Attaches observed and limit values.
    pub fn with_counts(mut self, current: usize, limit: usize) -> Self {
        self.details.current = Some(current);
        self.details.limit = Some(limit);
        self
    }

    pub fn in_group(mut self, group: GroupId) -> Self {
        self.details.group = Some(group);
        self
    }

    pub fn for_player(mut self, player: PlayerId) -> Self {
        self.details.player = Some(player);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// Outcome of a validation: pass/fail plus every violation found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }

    /// A single-violation rejection.
    pub fn rejected(violation: Violation) -> Self {
        Self::from_violations(vec![violation])
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether any violation is of `rule`.
    pub fn has_rule(&self, rule: Rule) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    /// Violations of `rule`, in detection order.
    pub fn of_rule(&self, rule: Rule) -> impl Iterator<Item = &Violation> + '_ {
        self.violations.iter().filter(move |v| v.rule == rule)
    }
}
