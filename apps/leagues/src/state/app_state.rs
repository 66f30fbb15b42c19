use std::sync::Arc;

use crate::adapters::LeagueStoreMemory;
use crate::config::SeasonConfig;
use crate::repos::LeagueStore;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    /// External league store.
    pub store: Arc<dyn LeagueStore>,
    /// League creation limits.
    pub season: SeasonConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn LeagueStore>, season: SeasonConfig) -> Self {
        Self { store, season }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(season: SeasonConfig) -> Self {
        Self::new(Arc::new(LeagueStoreMemory::new()), season)
    }

    pub fn store(&self) -> &dyn LeagueStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("season", &self.season)
            .finish_non_exhaustive()
    }
}
