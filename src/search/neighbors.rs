//! Swap neighborhood enumeration.

use std::fmt;
use std::sync::Arc;

use crate::domain::Player;
use crate::state::{AssignmentState, Position};

/// Exchange of whatever sits at two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    pub a: Position,
    pub b: Position,
}

impl fmt::Display for SwapMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.a, self.b)
    }
}

/// Every role-preserving swap of `state`, in enumeration order.
///
/// Positions are ordered by group id, then slot index, then (when
/// `include_bench` is set) bench index. Each unordered pair appears once,
/// as `(i, j)` with `i < j`. Bench-to-bench pairs are never produced.
///
/// # Examples
///
/// ```
/// use raid_assign::domain::{Archetype, Player, Role};
/// use raid_assign::search::candidate_swaps;
/// use raid_assign::state::{AssignmentState, GroupId};
/// use std::sync::Arc;
///
/// let dps = |id| Arc::new(Player::new(id, "d").with_role(Role::Dps).with_archetype(Archetype::Rogue));
/// let state = AssignmentState::empty(2, 1)
///     .place(dps(1), GroupId(1)).unwrap()
///     .place(dps(2), GroupId(2)).unwrap();
/// assert_eq!(candidate_swaps(&state, false).len(), 1);
/// ```
pub fn candidate_swaps(state: &AssignmentState, include_bench: bool) -> Vec<SwapMove> {
    let mut positions: Vec<(Position, Option<&Arc<Player>>)> = state
        .groups_by_id()
        .into_iter()
        .flat_map(|g| {
            g.slots()
                .iter()
                .map(move |s| (Position::slot(g.id(), s.index()), s.player()))
        })
        .collect();
    if include_bench {
        positions.extend(
            state
                .bench()
                .iter()
                .enumerate()
                .map(|(i, p)| (Position::Bench(i), Some(p))),
        );
    }

    let mut moves = Vec::new();
    for (i, &(a, pa)) in positions.iter().enumerate() {
        for &(b, pb) in &positions[i + 1..] {
            if a.is_bench() && b.is_bench() {
                continue;
            }
            if is_role_preserving(pa, pb) {
                moves.push(SwapMove { a, b });
            }
        }
    }
    moves
}

/// Not both empty, and either one side is empty or both share a role.
pub(crate) fn is_role_preserving(a: Option<&Arc<Player>>, b: Option<&Arc<Player>>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(_), None) | (None, Some(_)) => true,
        (Some(pa), Some(pb)) => pa.role().is_some() && pa.role() == pb.role(),
    }
}
