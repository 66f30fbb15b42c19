pub mod leagues;

pub use leagues::{LeagueService, LeagueSetup, NewLeague};
