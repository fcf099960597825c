//! The canonical player record.

use std::fmt;

use super::types::{Archetype, Role, Status};

/// Stable unique identifier of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        PlayerId(id)
    }
}

/// A signup, already reduced to its canonical form.
///
/// Players are immutable once built. The engine never edits one; it only
/// moves shared references between groups and the bench.
///
/// `role` and `archetype` are optional because upstream records can be
/// incomplete. Such players are never placed in a group.
///
/// # Examples
///
/// ```
/// use raid_assign::domain::{Archetype, Player, Role, Status};
///
/// let p = Player::new(7, "Thrall")
///     .with_archetype(Archetype::Shaman)
///     .with_role(Role::Healer)
///     .with_status(Status::Tentative)
///     .with_quality(612.0)
///     .with_signup_order(3);
/// assert_eq!(p.role(), Some(Role::Healer));
/// assert!(p.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    archetype: Option<Archetype>,
    role: Option<Role>,
    status: Status,
    quality: f64,
    signup_order: u32,
}

impl Player {
    /// Creates a confirmed player with no role or archetype yet.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            archetype: None,
            role: None,
            status: Status::Confirmed,
            quality: 0.0,
            signup_order: 0,
        }
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the gear/quality metric.
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the signup ordinal used as the final placement tie-break.
    pub fn with_signup_order(mut self, order: u32) -> Self {
        self.signup_order = order;
        self
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Option<Archetype> {
        self.archetype
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn signup_order(&self) -> u32 {
        self.signup_order
    }

    /// Whether both role and archetype are known.
    pub fn is_complete(&self) -> bool {
        self.role.is_some() && self.archetype.is_some()
    }

    /// Whether the seed builder may place this player in a group.
    pub fn is_assignable(&self) -> bool {
        self.status.is_assignable() && self.is_complete()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}
