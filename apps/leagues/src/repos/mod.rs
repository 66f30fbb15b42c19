//! Repository traits for domain layer.

pub mod leagues;

pub use leagues::{League, LeagueCreate, LeagueStore, Member};
