//! Immutable state model.
//!
//! [`AssignmentState`] is a persistent value: groups of [`Slot`]s plus a
//! bench. Transformations (`place`, `remove`, `swap`, `move_player`) return
//! new states that share unchanged groups with their parent.

mod assignment;
mod group;

pub use assignment::{AssignmentState, LayoutKey, Position};
pub use group::{Group, GroupId, Slot};
