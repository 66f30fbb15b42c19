use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// League ID taken from the `{league_id}` path segment.
///
/// Only the shape is checked here; existence is up to the service layer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LeagueId(pub i64);

impl LeagueId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let id = raw.trim().parse::<i64>().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidLeagueId, format!("Invalid league id: {raw}"))
        })?;
        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidLeagueId,
                format!("League id must be positive, got: {id}"),
            ));
        }
        Ok(LeagueId(id))
    }
}

impl FromRequest for LeagueId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("league_id") {
            Some(raw) => LeagueId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidLeagueId,
                "Missing league_id parameter",
            )),
        };
        ready(result)
    }
}
