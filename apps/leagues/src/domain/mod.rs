//! Domain layer: pure season generation and scoring logic.

pub mod draft_order;
pub mod members;
pub mod schedule;
pub mod season;
pub mod seed;
pub mod standings;

#[cfg(test)]
mod tests_schedule;

// Re-exports for ergonomics
pub use draft_order::{generate_draft_order, reorder_draft};
pub use members::{DraftSlot, MemberId, WeekMatchup};
pub use schedule::generate_round_robin_schedule;
pub use season::{generate_season, SeasonPlan};
pub use seed::{derive_league_seed, fnv1a_32, Mulberry32};
pub use standings::{compute_standings, ScoreEvent, StandingRow};
