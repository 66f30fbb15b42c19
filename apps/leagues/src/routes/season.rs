//! Stateless season preview: run the generators without persisting anything.

use actix_web::web;
use serde::Deserialize;

use crate::domain::SeasonPlan;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::LeagueService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Member identifiers, used verbatim as ids.
    pub members: Vec<String>,
    #[serde(default)]
    pub weeks: Option<i64>,
    #[serde(default)]
    pub seed: Option<String>,
}

/// POST /api/season/preview
async fn preview(
    app_state: web::Data<AppState>,
    body: ValidatedJson<PreviewRequest>,
) -> Result<web::Json<SeasonPlan>, AppError> {
    let service = LeagueService::new(app_state.season.clone());
    let plan = service.preview(&body.members, body.weeks, body.seed.as_deref())?;
    Ok(web::Json(plan))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/preview", web::post().to(preview));
}
