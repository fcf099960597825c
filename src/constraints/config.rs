//! Raid layout and hard-limit configuration.

use crate::error::ConfigError;

/// Hard limits a raid layout must respect.
///
/// # Examples
///
/// ```
/// use raid_assign::constraints::RaidConfig;
///
/// let config = RaidConfig::default()
///     .with_group_count(5)
///     .with_max_raid_size(25)
///     .with_min_tanks(2);
/// assert_eq!(config.total_slots(), 25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaidConfig {
    /// Number of groups in the raid.
    pub group_count: usize,
    /// Slots per group.
    pub group_capacity: usize,
    /// Maximum number of players placed in groups.
    pub max_raid_size: usize,
    /// Minimum tank-role players across all groups.
    pub min_tanks: usize,
    /// Minimum healer-role players across all groups.
    pub min_healers: usize,
    /// Maximum tank-role players in one group.
    pub max_tanks_per_group: usize,
    /// Maximum healer-role players in one group.
    pub max_healers_per_group: usize,
}

impl Default for RaidConfig {
    fn default() -> Self {
        Self {
            group_count: 8,
            group_capacity: 5,
            max_raid_size: 40,
            min_tanks: 2,
            min_healers: 4,
            max_tanks_per_group: 1,
            max_healers_per_group: 2,
        }
    }
}

impl RaidConfig {
    pub fn with_group_count(mut self, n: usize) -> Self {
        self.group_count = n;
        self
    }

    pub fn with_group_capacity(mut self, n: usize) -> Self {
        self.group_capacity = n;
        self
    }

    pub fn with_max_raid_size(mut self, n: usize) -> Self {
        self.max_raid_size = n;
        self
    }

    pub fn with_min_tanks(mut self, n: usize) -> Self {
        self.min_tanks = n;
        self
    }

    pub fn with_min_healers(mut self, n: usize) -> Self {
        self.min_healers = n;
        self
    }

    pub fn with_max_tanks_per_group(mut self, n: usize) -> Self {
        self.max_tanks_per_group = n;
        self
    }

    pub fn with_max_healers_per_group(mut self, n: usize) -> Self {
        self.max_healers_per_group = n;
        self
    }

    /// Total number of slots across all groups.
    pub fn total_slots(&self) -> usize {
        self.group_count * self.group_capacity
    }

    /// Rejects layouts that cannot hold anyone.
    ///
    /// Caps that cannot reach the role minimums are not rejected here; they
    /// surface as seed violations with the exact shortfall.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_count == 0 {
            return Err(ConfigError::Invalid("group_count must be positive".into()));
        }
        if self.group_capacity == 0 {
            return Err(ConfigError::Invalid(
                "group_capacity must be positive".into(),
            ));
        }
        if self.max_raid_size == 0 {
            return Err(ConfigError::Invalid("max_raid_size must be positive".into()));
        }
        Ok(())
    }
}
