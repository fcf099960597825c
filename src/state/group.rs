//! Slots and groups.

use std::fmt;
use std::sync::Arc;

use crate::domain::{Archetype, Player, PlayerId, Role};
use crate::error::StateError;

/// Stable identifier of a group within a raid. 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

/// One position inside a group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    index: usize,
    player: Option<Arc<Player>>,
}

impl Slot {
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            player: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn player(&self) -> Option<&Arc<Player>> {
        self.player.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_none()
    }
}

/// A fixed-capacity party inside the raid.
///
/// Counts by role and archetype are derived from the slots on demand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    id: GroupId,
    slots: Vec<Slot>,
}

impl Group {
    /// Creates an empty group with `capacity` slots.
    pub fn new(id: GroupId, capacity: usize) -> Self {
        Self {
            id,
            slots: (0..capacity).map(Slot::empty).collect(),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Occupants in slot order.
    pub fn players(&self) -> impl Iterator<Item = &Arc<Player>> + '_ {
        self.slots.iter().filter_map(|s| s.player.as_ref())
    }

    /// Occupants as plain references, for the synergy functions.
    pub fn members(&self) -> Vec<&Player> {
        self.players().map(|p| p.as_ref()).collect()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.player.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() >= self.capacity()
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_empty)
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.players().filter(|p| p.has_role(role)).count()
    }

    pub fn archetype_count(&self, archetype: Archetype) -> usize {
        self.players()
            .filter(|p| p.archetype() == Some(archetype))
            .count()
    }

    /// Occupant count per archetype, indexed by [`Archetype::index`].
    pub fn archetype_counts(&self) -> [usize; Archetype::COUNT] {
        let mut counts = [0; Archetype::COUNT];
        for archetype in self.players().filter_map(|p| p.archetype()) {
            counts[archetype.index()] += 1;
        }
        counts
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players().any(|p| p.id() == id)
    }

    /// Returns a copy of this group with slot `index` set to `player`.
    pub fn with_slot(&self, index: usize, player: Option<Arc<Player>>) -> Result<Self, StateError> {
        if index >= self.slots.len() {
            return Err(StateError::UnknownSlot {
                group: self.id,
                slot: index,
            });
        }
        let mut next = self.clone();
        next.slots[index].player = player;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u64, role: Role, archetype: Archetype) -> Arc<Player> {
        Arc::new(
            Player::new(id, format!("p{id}"))
                .with_role(role)
                .with_archetype(archetype),
        )
    }

    #[test]
    fn test_new_group_is_empty() {
        let g = Group::new(GroupId(1), 5);
        assert_eq!(g.capacity(), 5);
        assert_eq!(g.filled_count(), 0);
        assert_eq!(g.first_empty_slot(), Some(0));
        assert!(!g.is_full());
    }

    #[test]
    fn test_with_slot_leaves_original_untouched() {
        let g = Group::new(GroupId(1), 2);
        let next = g
            .with_slot(1, Some(player(1, Role::Tank, Archetype::Warrior)))
            .unwrap();
        assert_eq!(g.filled_count(), 0);
        assert_eq!(next.filled_count(), 1);
        assert_eq!(next.first_empty_slot(), Some(0));
        assert_eq!(next.role_count(Role::Tank), 1);
    }

    #[test]
    fn test_with_slot_out_of_range() {
        let g = Group::new(GroupId(3), 2);
        let err = g.with_slot(2, None).unwrap_err();
        assert_eq!(
            err,
            StateError::UnknownSlot {
                group: GroupId(3),
                slot: 2
            }
        );
    }

    #[test]
    fn test_derived_counts() {
        let g = Group::new(GroupId(1), 5)
            .with_slot(0, Some(player(1, Role::Dps, Archetype::Mage)))
            .unwrap()
            .with_slot(1, Some(player(2, Role::Dps, Archetype::Mage)))
            .unwrap()
            .with_slot(2, Some(player(3, Role::Healer, Archetype::Druid)))
            .unwrap();
        assert_eq!(g.archetype_count(Archetype::Mage), 2);
        assert_eq!(g.archetype_counts()[Archetype::Druid.index()], 1);
        assert_eq!(g.role_count(Role::Dps), 2);
        assert!(g.contains(PlayerId(3)));
        assert!(!g.contains(PlayerId(4)));
        assert_eq!(g.members().len(), 3);
    }
}
