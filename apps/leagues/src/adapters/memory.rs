//! In-memory adapter for the league store.
//!
//! Mirrors the uniqueness rules of the hosted store: one draft order and one
//! schedule per league. Used by the binary when no external store is wired
//! and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::{DraftSlot, MemberId, ScoreEvent, WeekMatchup};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::leagues::{League, LeagueCreate, LeagueStore, Member};

#[derive(Debug, Default)]
struct Tables {
    next_league_id: i64,
    leagues: HashMap<i64, League>,
    members: HashMap<i64, Vec<Member>>,
    draft_orders: HashMap<i64, Vec<DraftSlot>>,
    schedules: HashMap<i64, Vec<WeekMatchup>>,
    score_events: HashMap<i64, Vec<ScoreEvent>>,
}

impl Tables {
    fn require_league(&self, league_id: i64) -> Result<&League, DomainError> {
        self.leagues.get(&league_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::League, format!("league {league_id}"))
        })
    }
}

#[derive(Debug, Default)]
pub struct LeagueStoreMemory {
    tables: RwLock<Tables>,
}

impl LeagueStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeagueStore for LeagueStoreMemory {
    async fn insert_league(&self, dto: LeagueCreate) -> Result<League, DomainError> {
        let mut tables = self.tables.write();
        tables.next_league_id += 1;
        let league = League {
            id: tables.next_league_id,
            name: dto.name,
            commissioner_contact: dto.commissioner_contact,
            weeks: dto.weeks,
            seed_override: dto.seed_override,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.leagues.insert(league.id, league.clone());
        Ok(league)
    }

    async fn get_league(&self, league_id: i64) -> Result<Option<League>, DomainError> {
        Ok(self.tables.read().leagues.get(&league_id).cloned())
    }

    async fn insert_members(
        &self,
        league_id: i64,
        display_names: &[String],
    ) -> Result<Vec<Member>, DomainError> {
        let mut tables = self.tables.write();
        tables.require_league(league_id)?;

        let created: Vec<Member> = display_names
            .iter()
            .map(|name| Member {
                id: MemberId(Uuid::new_v4().to_string()),
                league_id,
                display_name: name.clone(),
            })
            .collect();
        tables
            .members
            .entry(league_id)
            .or_default()
            .extend(created.iter().cloned());
        Ok(created)
    }

    async fn list_members(&self, league_id: i64) -> Result<Vec<Member>, DomainError> {
        let tables = self.tables.read();
        tables.require_league(league_id)?;
        Ok(tables.members.get(&league_id).cloned().unwrap_or_default())
    }

    async fn insert_draft_order(
        &self,
        league_id: i64,
        slots: &[DraftSlot],
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write();
        tables.require_league(league_id)?;
        if tables.draft_orders.contains_key(&league_id) {
            return Err(DomainError::conflict(
                ConflictKind::DraftOrderExists,
                format!("league {league_id} already has a draft order"),
            ));
        }
        tables.draft_orders.insert(league_id, slots.to_vec());
        Ok(())
    }

    async fn replace_draft_order(
        &self,
        league_id: i64,
        slots: &[DraftSlot],
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write();
        tables.require_league(league_id)?;
        match tables.draft_orders.get_mut(&league_id) {
            Some(existing) => {
                *existing = slots.to_vec();
                Ok(())
            }
            None => Err(DomainError::not_found(
                NotFoundKind::DraftOrder,
                format!("league {league_id} has no draft order"),
            )),
        }
    }

    async fn get_draft_order(&self, league_id: i64) -> Result<Option<Vec<DraftSlot>>, DomainError> {
        Ok(self.tables.read().draft_orders.get(&league_id).cloned())
    }

    async fn insert_schedule(
        &self,
        league_id: i64,
        matchups: &[WeekMatchup],
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write();
        tables.require_league(league_id)?;
        if tables.schedules.contains_key(&league_id) {
            return Err(DomainError::conflict(
                ConflictKind::ScheduleExists,
                format!("league {league_id} already has a schedule"),
            ));
        }
        tables.schedules.insert(league_id, matchups.to_vec());
        Ok(())
    }

    async fn get_schedule(&self, league_id: i64) -> Result<Option<Vec<WeekMatchup>>, DomainError> {
        Ok(self.tables.read().schedules.get(&league_id).cloned())
    }

    async fn insert_score_event(
        &self,
        league_id: i64,
        event: ScoreEvent,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write();
        tables.require_league(league_id)?;
        tables.score_events.entry(league_id).or_default().push(event);
        Ok(())
    }

    async fn list_score_events(&self, league_id: i64) -> Result<Vec<ScoreEvent>, DomainError> {
        let tables = self.tables.read();
        tables.require_league(league_id)?;
        Ok(tables.score_events.get(&league_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> LeagueCreate {
        LeagueCreate {
            name: "Family".to_string(),
            commissioner_contact: "mom@example.com".to_string(),
            weeks: 4,
            seed_override: None,
        }
    }

    #[tokio::test]
    async fn league_ids_are_sequential() {
        let store = LeagueStoreMemory::new();
        let a = store.insert_league(create()).await.unwrap();
        let b = store.insert_league(create()).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.get_league(2).await.unwrap(), Some(b));
        assert_eq!(store.get_league(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn members_keep_insertion_order() {
        let store = LeagueStoreMemory::new();
        let league = store.insert_league(create()).await.unwrap();
        let names = vec!["Ana".to_string(), "Ben".to_string(), "Cy".to_string()];
        let inserted = store.insert_members(league.id, &names).await.unwrap();
        let listed = store.list_members(league.id).await.unwrap();
        assert_eq!(inserted, listed);
        let got: Vec<&str> = listed.iter().map(|m| m.display_name.as_str()).collect();
        assert_eq!(got, vec!["Ana", "Ben", "Cy"]);
    }

    #[tokio::test]
    async fn second_draft_order_insert_conflicts() {
        let store = LeagueStoreMemory::new();
        let league = store.insert_league(create()).await.unwrap();
        store.insert_draft_order(league.id, &[]).await.unwrap();
        let err = store.insert_draft_order(league.id, &[]).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::DraftOrderExists, _)
        ));
    }

    #[tokio::test]
    async fn writes_to_unknown_league_are_not_found() {
        let store = LeagueStoreMemory::new();
        let err = store.insert_schedule(99, &[]).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(NotFoundKind::League, _)));
        let err = store.replace_draft_order(99, &[]).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(NotFoundKind::League, _)));
    }
}
