#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use adapters::LeagueStoreMemory;
pub use config::{AppConfig, SeasonConfig};
pub use domain::{
    generate_draft_order, generate_round_robin_schedule, generate_season, DraftSlot, MemberId,
    SeasonPlan, WeekMatchup,
};
pub use error::AppError;
pub use errors::DomainError;
pub use repos::LeagueStore;
pub use services::{LeagueService, LeagueSetup, NewLeague};
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    leagues_test_support::logging::init();
}
