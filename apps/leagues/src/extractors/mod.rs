pub mod active_league;
pub mod league_id;
pub mod validated_json;

pub use active_league::ActiveLeague;
pub use league_id::LeagueId;
pub use validated_json::ValidatedJson;
