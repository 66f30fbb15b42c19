//! League HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{DraftSlot, MemberId, ScoreEvent, StandingRow, WeekMatchup};
use crate::error::AppError;
use crate::extractors::{LeagueId, ValidatedJson};
use crate::repos::{League, Member};
use crate::services::{LeagueService, NewLeague};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub commissioner_contact: String,
    #[serde(default)]
    pub weeks: Option<i64>,
    pub members: Vec<String>,
    #[serde(default)]
    pub seed: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeagueResponse {
    pub league: League,
    pub members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderDraftRequest {
    pub order: Vec<MemberId>,
}

#[derive(Debug, Serialize)]
pub struct DraftOrderResponse {
    pub league_id: i64,
    pub draft_order: Vec<DraftSlot>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub week: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub league_id: i64,
    pub matchups: Vec<WeekMatchup>,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub league_id: i64,
    pub standings: Vec<StandingRow>,
}

/// POST /api/leagues
///
/// Creates the league, its members, draft order and schedule in one call.
async fn create_league(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateLeagueRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let service = LeagueService::new(app_state.season.clone());
    let setup = service
        .create_league(
            app_state.store(),
            NewLeague {
                name: req.name,
                commissioner_contact: req.commissioner_contact,
                weeks: req.weeks,
                members: req.members,
                seed: req.seed,
            },
        )
        .await?;
    Ok(HttpResponse::Created().json(setup))
}

/// GET /api/leagues/{league_id}
async fn get_league(
    league_id: LeagueId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<LeagueResponse>, AppError> {
    let service = LeagueService::new(app_state.season.clone());
    let league = service.league(app_state.store(), league_id.0).await?;
    let members = service.members(app_state.store(), league_id.0).await?;
    Ok(web::Json(LeagueResponse { league, members }))
}

/// GET /api/leagues/{league_id}/draft-order
async fn get_draft_order(
    league_id: LeagueId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DraftOrderResponse>, AppError> {
    let service = LeagueService::new(app_state.season.clone());
    let draft_order = service.draft_order(app_state.store(), league_id.0).await?;
    Ok(web::Json(DraftOrderResponse {
        league_id: league_id.0,
        draft_order,
    }))
}

/// PUT /api/leagues/{league_id}/draft-order
///
/// Manual reorder; the body must list every current member exactly once.
async fn put_draft_order(
    league_id: LeagueId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ReorderDraftRequest>,
) -> Result<web::Json<DraftOrderResponse>, AppError> {
    let service = LeagueService::new(app_state.season.clone());
    let draft_order = service
        .reorder_draft(app_state.store(), league_id.0, &body.order)
        .await?;
    Ok(web::Json(DraftOrderResponse {
        league_id: league_id.0,
        draft_order,
    }))
}

/// GET /api/leagues/{league_id}/schedule[?week=N]
async fn get_schedule(
    league_id: LeagueId,
    query: web::Query<ScheduleQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScheduleResponse>, AppError> {
    let service = LeagueService::new(app_state.season.clone());
    let matchups = service
        .schedule(app_state.store(), league_id.0, query.week)
        .await?;
    Ok(web::Json(ScheduleResponse {
        league_id: league_id.0,
        matchups,
    }))
}

/// POST /api/leagues/{league_id}/scores
async fn post_score(
    league_id: LeagueId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScoreEvent>,
) -> Result<HttpResponse, AppError> {
    let service = LeagueService::new(app_state.season.clone());
    let event = service
        .record_score(app_state.store(), league_id.0, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(event))
}

/// GET /api/leagues/{league_id}/standings
async fn get_standings(
    league_id: LeagueId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<StandingsResponse>, AppError> {
    let service = LeagueService::new(app_state.season.clone());
    let standings = service.standings(app_state.store(), league_id.0).await?;
    Ok(web::Json(StandingsResponse {
        league_id: league_id.0,
        standings,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_league))
        .route("/{league_id}", web::get().to(get_league))
        .service(
            web::resource("/{league_id}/draft-order")
                .route(web::get().to(get_draft_order))
                .route(web::put().to(put_draft_order)),
        )
        .route("/{league_id}/schedule", web::get().to(get_schedule))
        .route("/{league_id}/scores", web::post().to(post_score))
        .route("/{league_id}/standings", web::get().to(get_standings));
}
