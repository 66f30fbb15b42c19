//! League creation workflow and the season operations built on top of it.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::SeasonConfig;
use crate::domain::{
    compute_standings, generate_draft_order, generate_round_robin_schedule, generate_season,
    reorder_draft, DraftSlot, MemberId, ScoreEvent, SeasonPlan, StandingRow, WeekMatchup,
};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::{League, LeagueCreate, LeagueStore, Member};

pub const MAX_LEAGUE_NAME_LEN: usize = 80;

/// Input for creating a league.
#[derive(Debug, Clone)]
pub struct NewLeague {
    pub name: String,
    pub commissioner_contact: String,
    /// Falls back to the configured default when absent.
    pub weeks: Option<i64>,
    /// Member display names, in join order.
    pub members: Vec<String>,
    /// Explicit draft seed; derived from the league otherwise.
    pub seed: Option<String>,
}

/// Everything written while creating a league.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueSetup {
    pub league: League,
    pub members: Vec<Member>,
    pub draft_order: Vec<DraftSlot>,
    pub schedule: Vec<WeekMatchup>,
}

/// League domain service.
pub struct LeagueService {
    season: SeasonConfig,
}

impl LeagueService {
    pub fn new(season: SeasonConfig) -> Self {
        Self { season }
    }

    /// Create a league and persist its draft order and schedule.
    ///
    /// Steps run in order: league, members, draft order, schedule. A failing
    /// step returns its error and leaves earlier writes in place; the caller
    /// decides whether to retry.
    pub async fn create_league(
        &self,
        store: &dyn LeagueStore,
        req: NewLeague,
    ) -> Result<LeagueSetup, DomainError> {
        let name = validate_name(&req.name)?;
        self.validate_member_count(req.members.len())?;
        let weeks = self.resolve_weeks(req.weeks)?;

        let league = store
            .insert_league(LeagueCreate {
                name,
                commissioner_contact: req.commissioner_contact,
                weeks,
                seed_override: req.seed,
            })
            .await?;
        info!(league_id = league.id, weeks, members = req.members.len(), "League created");

        let members = store
            .insert_members(league.id, &req.members)
            .await
            .inspect_err(|e| log_partial(league.id, "insert_members", e))?;
        let ids: Vec<MemberId> = members.iter().map(|m| m.id.clone()).collect();

        let seed = league.draft_seed();
        let draft_order = generate_draft_order(&ids, Some(&seed));
        store
            .insert_draft_order(league.id, &draft_order)
            .await
            .inspect_err(|e| log_partial(league.id, "insert_draft_order", e))?;

        let schedule = generate_round_robin_schedule(&ids, i64::from(weeks))?;
        store
            .insert_schedule(league.id, &schedule)
            .await
            .inspect_err(|e| log_partial(league.id, "insert_schedule", e))?;

        info!(
            league_id = league.id,
            draft_slots = draft_order.len(),
            matchups = schedule.len(),
            "League season generated"
        );

        Ok(LeagueSetup {
            league,
            members,
            draft_order,
            schedule,
        })
    }

    /// Run both generators without touching the store.
    pub fn preview(
        &self,
        members: &[String],
        weeks: Option<i64>,
        seed: Option<&str>,
    ) -> Result<SeasonPlan, DomainError> {
        self.validate_member_count(members.len())?;
        let weeks = self.resolve_weeks(weeks)?;
        let ids: Vec<MemberId> = members.iter().cloned().map(MemberId).collect();
        validate_unique(&ids)?;
        generate_season(&ids, i64::from(weeks), seed)
    }

    pub async fn league(
        &self,
        store: &dyn LeagueStore,
        league_id: i64,
    ) -> Result<League, DomainError> {
        require_league(store, league_id).await
    }

    pub async fn draft_order(
        &self,
        store: &dyn LeagueStore,
        league_id: i64,
    ) -> Result<Vec<DraftSlot>, DomainError> {
        require_league(store, league_id).await?;
        store.get_draft_order(league_id).await?.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::DraftOrder,
                format!("league {league_id} has no draft order"),
            )
        })
    }

    /// Manual reorder by an administrator; positions are reassigned `1..=N`.
    pub async fn reorder_draft(
        &self,
        store: &dyn LeagueStore,
        league_id: i64,
        new_order: &[MemberId],
    ) -> Result<Vec<DraftSlot>, DomainError> {
        let current = self.draft_order(store, league_id).await?;
        let reordered = reorder_draft(&current, new_order)?;
        store.replace_draft_order(league_id, &reordered).await?;
        info!(league_id, "Draft order manually reordered");
        Ok(reordered)
    }

    /// Whole schedule, or one 1-based week of it.
    pub async fn schedule(
        &self,
        store: &dyn LeagueStore,
        league_id: i64,
        week: Option<u32>,
    ) -> Result<Vec<WeekMatchup>, DomainError> {
        let league = require_league(store, league_id).await?;
        if let Some(week) = week {
            validate_week(&league, week)?;
        }
        let schedule = store.get_schedule(league_id).await?.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Schedule,
                format!("league {league_id} has no schedule"),
            )
        })?;
        Ok(match week {
            Some(week) => schedule.into_iter().filter(|m| m.week == week).collect(),
            None => schedule,
        })
    }

    pub async fn members(
        &self,
        store: &dyn LeagueStore,
        league_id: i64,
    ) -> Result<Vec<Member>, DomainError> {
        require_league(store, league_id).await?;
        store.list_members(league_id).await
    }

    /// Record a commissioner score event for a league member.
    pub async fn record_score(
        &self,
        store: &dyn LeagueStore,
        league_id: i64,
        event: ScoreEvent,
    ) -> Result<ScoreEvent, DomainError> {
        let league = require_league(store, league_id).await?;
        validate_week(&league, event.week)?;

        let members = store.list_members(league_id).await?;
        if !members.iter().any(|m| m.id == event.member_id) {
            return Err(DomainError::validation(
                ValidationKind::UnknownMember,
                format!("member {} is not in league {league_id}", event.member_id),
            ));
        }

        store.insert_score_event(league_id, event.clone()).await?;
        info!(
            league_id,
            week = event.week,
            points = event.points,
            "Score event recorded"
        );
        Ok(event)
    }

    pub async fn standings(
        &self,
        store: &dyn LeagueStore,
        league_id: i64,
    ) -> Result<Vec<StandingRow>, DomainError> {
        let schedule = self.schedule(store, league_id, None).await?;
        let events = store.list_score_events(league_id).await?;
        Ok(compute_standings(&schedule, &events))
    }

    fn validate_member_count(&self, count: usize) -> Result<(), DomainError> {
        if count == 0 {
            return Err(DomainError::validation(
                ValidationKind::EmptyMembership,
                "a league needs at least one member",
            ));
        }
        if count > self.season.max_members {
            return Err(DomainError::validation(
                ValidationKind::TooManyMembers,
                format!(
                    "{count} members exceeds the limit of {}",
                    self.season.max_members
                ),
            ));
        }
        Ok(())
    }

    /// Requested weeks below 1 become 1; absent means the configured default.
    /// Anything above `max_weeks` is rejected before a schedule is built.
    fn resolve_weeks(&self, weeks: Option<i64>) -> Result<u32, DomainError> {
        let requested = weeks.unwrap_or(i64::from(self.season.default_weeks)).max(1);
        if requested > i64::from(self.season.max_weeks) {
            return Err(DomainError::validation(
                ValidationKind::InvalidWeek,
                format!(
                    "{requested} weeks exceeds the limit of {}",
                    self.season.max_weeks
                ),
            ));
        }
        u32::try_from(requested).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidWeek,
                format!("{requested} weeks is out of range"),
            )
        })
    }
}

async fn require_league(store: &dyn LeagueStore, league_id: i64) -> Result<League, DomainError> {
    store
        .get_league(league_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::League, format!("league {league_id}")))
}

fn validate_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > MAX_LEAGUE_NAME_LEN {
        return Err(DomainError::validation(
            ValidationKind::InvalidLeagueName,
            format!("league name must be 1..={MAX_LEAGUE_NAME_LEN} characters"),
        ));
    }
    Ok(name.to_string())
}

/// Generators assume distinct ids; a repeated id would be paired with itself.
fn validate_unique(ids: &[MemberId]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(ids.len());
    match ids.iter().find(|id| !seen.insert(*id)) {
        Some(dup) => Err(DomainError::validation(
            ValidationKind::DuplicateMember,
            format!("member {dup} is listed more than once"),
        )),
        None => Ok(()),
    }
}

fn validate_week(league: &League, week: u32) -> Result<(), DomainError> {
    if week == 0 || week > league.weeks {
        return Err(DomainError::validation(
            ValidationKind::InvalidWeek,
            format!("week {week} is outside 1..={}", league.weeks),
        ));
    }
    Ok(())
}

fn log_partial(league_id: i64, step: &str, err: &DomainError) {
    warn!(
        league_id,
        step,
        error = %err,
        "League setup failed part way; earlier writes were kept"
    );
}
