//! Resolve the request's active league selection.

use actix_web::web;
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::ActiveLeague;
use crate::repos::League;
use crate::services::LeagueService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActiveLeagueResponse {
    pub league: League,
}

/// GET /api/active-league
///
/// 400 when no `X-Active-League` header is sent, 404 when it names an
/// unknown league.
async fn get_active_league(
    active: ActiveLeague,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ActiveLeagueResponse>, AppError> {
    let league_id = active.require()?;
    let service = LeagueService::new(app_state.season.clone());
    let league = service.league(app_state.store(), league_id.0).await?;
    Ok(web::Json(ActiveLeagueResponse { league }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_active_league));
}
