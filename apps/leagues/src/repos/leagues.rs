//! League storage seam.
//!
//! The backing store is an external CRUD service; the backend only relies on
//! the operations below. Implementations map their own failures onto
//! `DomainError` (not found, conflict on duplicate inserts, infra).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::seed::derive_league_seed;
use crate::domain::{DraftSlot, MemberId, ScoreEvent, WeekMatchup};
use crate::errors::domain::DomainError;

/// League as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub commissioner_contact: String,
    pub weeks: u32,
    /// Explicit draft seed supplied at creation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_override: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl League {
    /// Seed used for this league's draft order.
    pub fn draft_seed(&self) -> String {
        self.seed_override.clone().unwrap_or_else(|| {
            derive_league_seed(self.id, self.created_at, &self.commissioner_contact)
        })
    }
}

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct LeagueCreate {
    pub name: String,
    pub commissioner_contact: String,
    pub weeks: u32,
    pub seed_override: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub league_id: i64,
    pub display_name: String,
}

#[async_trait]
pub trait LeagueStore: Send + Sync {
    async fn insert_league(&self, dto: LeagueCreate) -> Result<League, DomainError>;

    async fn get_league(&self, league_id: i64) -> Result<Option<League>, DomainError>;

    /// Insert members in the given order; ids are assigned by the store.
    async fn insert_members(
        &self,
        league_id: i64,
        display_names: &[String],
    ) -> Result<Vec<Member>, DomainError>;

    /// Members in insertion order.
    async fn list_members(&self, league_id: i64) -> Result<Vec<Member>, DomainError>;

    /// Fails with a conflict if the league already has a draft order.
    async fn insert_draft_order(
        &self,
        league_id: i64,
        slots: &[DraftSlot],
    ) -> Result<(), DomainError>;

    async fn replace_draft_order(
        &self,
        league_id: i64,
        slots: &[DraftSlot],
    ) -> Result<(), DomainError>;

    async fn get_draft_order(&self, league_id: i64) -> Result<Option<Vec<DraftSlot>>, DomainError>;

    /// Fails with a conflict if the league already has a schedule.
    async fn insert_schedule(
        &self,
        league_id: i64,
        matchups: &[WeekMatchup],
    ) -> Result<(), DomainError>;

    async fn get_schedule(&self, league_id: i64) -> Result<Option<Vec<WeekMatchup>>, DomainError>;

    async fn insert_score_event(
        &self,
        league_id: i64,
        event: ScoreEvent,
    ) -> Result<(), DomainError>;

    async fn list_score_events(&self, league_id: i64) -> Result<Vec<ScoreEvent>, DomainError>;
}
