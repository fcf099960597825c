//! The full candidate assignment.

use std::fmt;
use std::sync::Arc;

use super::group::{Group, GroupId};
use crate::constraints::Violation;
use crate::domain::{Player, PlayerId, Role};
use crate::error::StateError;

/// A place a player can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Slot `slot` of group `group`.
    Slot { group: GroupId, slot: usize },
    /// Index into the bench.
    Bench(usize),
}

impl Position {
    pub fn slot(group: GroupId, slot: usize) -> Self {
        Position::Slot { group, slot }
    }

    pub fn is_bench(&self) -> bool {
        matches!(self, Position::Bench(_))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Slot { group, slot } => write!(f, "{group}/{slot}"),
            Position::Bench(i) => write!(f, "bench/{i}"),
        }
    }
}

/// Canonical, order-insensitive fingerprint of a layout.
///
/// Two states with the same members in each group (in any slot order) and
/// the same bench members share a key.
pub type LayoutKey = Vec<Vec<PlayerId>>;

/// One immutable candidate placement of the roster.
///
/// Every transformation returns a new state; the receiver is never
/// modified. Groups sit behind [`Arc`], so a swap only reallocates the
/// groups it touches and successive states share the rest.
///
/// The `score` and `violations` fields are caches filled in by callers and
/// are ignored by equality.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentState {
    groups: Vec<Arc<Group>>,
    bench: Arc<Vec<Arc<Player>>>,
    score: Option<f64>,
    violations: Option<Vec<Violation>>,
}

impl PartialEq for AssignmentState {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups && self.bench == other.bench
    }
}

impl AssignmentState {
    /// Creates `group_count` empty groups of `capacity` slots, ids `1..=group_count`.
    pub fn empty(group_count: usize, capacity: usize) -> Self {
        let groups = (1..=group_count)
            .map(|id| Arc::new(Group::new(GroupId(id as u32), capacity)))
            .collect();
        Self {
            groups,
            bench: Arc::new(Vec::new()),
            score: None,
            violations: None,
        }
    }

    /// Assembles a state from existing groups and bench, kept in the given
    /// order. Nothing is validated.
    pub fn from_parts(groups: Vec<Group>, bench: Vec<Arc<Player>>) -> Self {
        Self {
            groups: groups.into_iter().map(Arc::new).collect(),
            bench: Arc::new(bench),
            score: None,
            violations: None,
        }
    }

    pub fn groups(&self) -> &[Arc<Group>] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id).map(|g| g.as_ref())
    }

    /// Groups sorted by id, independent of storage order.
    pub fn groups_by_id(&self) -> Vec<&Group> {
        let mut groups: Vec<&Group> = self.groups.iter().map(|g| g.as_ref()).collect();
        groups.sort_by_key(|g| g.id());
        groups
    }

    pub fn bench(&self) -> &[Arc<Player>] {
        &self.bench
    }

    /// Every player currently in a group, in group then slot order.
    pub fn assigned(&self) -> impl Iterator<Item = &Arc<Player>> + '_ {
        self.groups.iter().flat_map(|g| g.players())
    }

    pub fn assigned_count(&self) -> usize {
        self.groups.iter().map(|g| g.filled_count()).sum()
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.assigned().filter(|p| p.has_role(role)).count()
    }

    /// Total number of slots across all groups.
    pub fn slot_count(&self) -> usize {
        self.groups.iter().map(|g| g.capacity()).sum()
    }

    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.assigned().any(|p| p.id() == id) || self.bench.iter().any(|p| p.id() == id)
    }

    /// Slot positions in storage order, then slot index.
    pub fn slot_positions(&self) -> Vec<Position> {
        self.groups
            .iter()
            .flat_map(|g| (0..g.capacity()).map(move |slot| Position::slot(g.id(), slot)))
            .collect()
    }

    pub fn bench_positions(&self) -> Vec<Position> {
        (0..self.bench.len()).map(Position::Bench).collect()
    }

    /// The player at `pos`, or `None` for an empty slot.
    pub fn occupant(&self, pos: Position) -> Result<Option<&Arc<Player>>, StateError> {
        match pos {
            Position::Slot { group, slot } => {
                let g = self.group(group).ok_or(StateError::UnknownGroup(group))?;
                let s = g
                    .slot(slot)
                    .ok_or(StateError::UnknownSlot { group, slot })?;
                Ok(s.player())
            }
            Position::Bench(i) => self
                .bench
                .get(i)
                .map(Some)
                .ok_or(StateError::UnknownBenchIndex(i)),
        }
    }

    /// Places `player` in the first empty slot of `group`.
    pub fn place(&self, player: Arc<Player>, group: GroupId) -> Result<Self, StateError> {
        let g = self.group(group).ok_or(StateError::UnknownGroup(group))?;
        let slot = g.first_empty_slot().ok_or(StateError::GroupFull(group))?;
        self.write(&[(Position::slot(group, slot), Some(player))])
    }

    /// Places `player` into a specific empty slot.
    pub fn place_at(&self, pos: Position, player: Arc<Player>) -> Result<Self, StateError> {
        match pos {
            Position::Slot { .. } => {
                if self.occupant(pos)?.is_some() {
                    return Err(StateError::Occupied(pos));
                }
                self.write(&[(pos, Some(player))])
            }
            Position::Bench(_) => Ok(self.with_bench_player(player)),
        }
    }

    /// Appends `player` to the bench.
    pub fn with_bench_player(&self, player: Arc<Player>) -> Self {
        let mut bench = (*self.bench).clone();
        bench.push(player);
        Self {
            groups: self.groups.clone(),
            bench: Arc::new(bench),
            score: None,
            violations: None,
        }
    }

    /// Empties `pos`, returning the new state and whoever was there.
    ///
    /// Removing from the bench shifts later bench indices down by one.
    pub fn remove(&self, pos: Position) -> Result<(Self, Option<Arc<Player>>), StateError> {
        let removed = self.occupant(pos)?.cloned();
        let next = self.write(&[(pos, None)])?;
        Ok((next, removed))
    }

    /// Exchanges the occupants of `a` and `b`.
    ///
    /// Either side may be an empty slot. A bench position swapped with an
    /// empty slot moves the bench player into the group.
    pub fn swap(&self, a: Position, b: Position) -> Result<Self, StateError> {
        let pa = self.occupant(a)?.cloned();
        let pb = self.occupant(b)?.cloned();
        if a == b {
            return Ok(self.without_metadata());
        }
        self.write(&[(a, pb), (b, pa)])
    }

    /// Moves the player at `from` into the empty slot `to`, without
    /// displacing anyone. A bench target appends to the bench.
    pub fn move_player(&self, from: Position, to: Position) -> Result<Self, StateError> {
        if self.occupant(from)?.is_none() {
            return Err(StateError::EmptyPosition(from));
        }
        if let Position::Bench(_) = to {
            let (next, player) = self.remove(from)?;
            return Ok(match player {
                Some(p) => next.with_bench_player(p),
                None => next,
            });
        }
        if self.occupant(to)?.is_some() {
            return Err(StateError::Occupied(to));
        }
        self.swap(from, to)
    }

    /// Order-insensitive fingerprint: member ids per group (by group id),
    /// then bench ids, each sorted.
    pub fn layout_key(&self) -> LayoutKey {
        let mut key: LayoutKey = self
            .groups_by_id()
            .into_iter()
            .map(|g| {
                let mut ids: Vec<PlayerId> = g.players().map(|p| p.id()).collect();
                ids.sort_unstable();
                ids
            })
            .collect();
        let mut bench: Vec<PlayerId> = self.bench.iter().map(|p| p.id()).collect();
        bench.sort_unstable();
        key.push(bench);
        key
    }

    /// Cached score, if one was attached.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Cached violation list, if one was attached.
    pub fn violations(&self) -> Option<&[Violation]> {
        self.violations.as_deref()
    }

    pub fn with_score(&self, score: f64) -> Self {
        let mut next = self.clone();
        next.score = Some(score);
        next
    }

    pub fn with_violations(&self, violations: Vec<Violation>) -> Self {
        let mut next = self.clone();
        next.violations = Some(violations);
        next
    }

    fn without_metadata(&self) -> Self {
        Self {
            groups: self.groups.clone(),
            bench: Arc::clone(&self.bench),
            score: None,
            violations: None,
        }
    }

    /// Applies all edits to a copy. Bench entries set to `None` are dropped
    /// after every edit has been applied, so bench indices stay valid for
    /// the whole batch.
    fn write(&self, edits: &[(Position, Option<Arc<Player>>)]) -> Result<Self, StateError> {
        let mut groups = self.groups.clone();
        let mut bench: Option<Vec<Option<Arc<Player>>>> = None;

        for (pos, player) in edits {
            match *pos {
                Position::Slot { group, slot } => {
                    let idx = groups
                        .iter()
                        .position(|g| g.id() == group)
                        .ok_or(StateError::UnknownGroup(group))?;
                    groups[idx] = Arc::new(groups[idx].with_slot(slot, player.clone())?);
                }
                Position::Bench(i) => {
                    let entries = bench
                        .get_or_insert_with(|| self.bench.iter().cloned().map(Some).collect());
                    let entry = entries.get_mut(i).ok_or(StateError::UnknownBenchIndex(i))?;
                    *entry = player.clone();
                }
            }
        }

        let bench = match bench {
            Some(entries) => Arc::new(entries.into_iter().flatten().collect()),
            None => Arc::clone(&self.bench),
        };
        Ok(Self {
            groups,
            bench,
            score: None,
            violations: None,
        })
    }
}
