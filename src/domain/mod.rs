//! Domain model.
//!
//! Pure value types describing the people being assigned: [`Player`] and
//! the closed enumerations [`Role`], [`Status`] and [`Archetype`].

mod player;
mod types;

pub use player::{Player, PlayerId};
pub use types::{Archetype, Category, Role, Status};
