//! The caller's currently selected league.
//!
//! The web client keeps its "active league" choice locally and sends it on
//! each request as `X-Active-League`. Handlers receive it as an extractor,
//! so the selection is scoped to the request and never held server-side.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::league_id::LeagueId;

pub const ACTIVE_LEAGUE_HEADER: &str = "x-active-league";

/// Active league for this request, `None` when the client has not picked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveLeague(pub Option<LeagueId>);

impl ActiveLeague {
    /// The selected league, or a bad request if none was sent.
    pub fn require(self) -> Result<LeagueId, AppError> {
        self.0.ok_or_else(|| {
            AppError::bad_request(
                ErrorCode::InvalidActiveLeague,
                "No active league selected",
            )
        })
    }
}

impl FromRequest for ActiveLeague {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(value) = req.headers().get(ACTIVE_LEAGUE_HEADER) else {
            return ready(Ok(ActiveLeague(None)));
        };
        let result = value
            .to_str()
            .map_err(|_| {
                AppError::bad_request(
                    ErrorCode::InvalidActiveLeague,
                    "X-Active-League must be ASCII",
                )
            })
            .and_then(|raw| {
                LeagueId::parse(raw).map_err(|_| {
                    AppError::bad_request(
                        ErrorCode::InvalidActiveLeague,
                        format!("Invalid active league: {raw}"),
                    )
                })
            })
            .map(|id| ActiveLeague(Some(id)));
        ready(result)
    }
}
