use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::middleware::request_trace::TRACE_HEADER;
use crate::trace_ctx;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation {
        code: ErrorCode,
        detail: String,
        status: StatusCode,
    },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Store unavailable: {detail}")]
    StoreUnavailable { code: ErrorCode, detail: String },
}

impl AppError {
    /// Error code carried in the problem body.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::StoreUnavailable { code, .. } => *code,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Internal { detail }
            | AppError::Config { detail }
            | AppError::StoreUnavailable { detail, .. } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::EmptyMembership => ErrorCode::EmptyMembership,
                    ValidationKind::TooManyMembers => ErrorCode::TooManyMembers,
                    ValidationKind::DraftOrderMismatch => ErrorCode::DraftOrderMismatch,
                    ValidationKind::InvalidWeek => ErrorCode::InvalidWeek,
                    ValidationKind::InvalidLeagueName => ErrorCode::InvalidLeagueName,
                    ValidationKind::InvalidLeagueId => ErrorCode::InvalidLeagueId,
                    ValidationKind::UnknownMember => ErrorCode::UnknownMember,
                    ValidationKind::DuplicateMember => ErrorCode::DuplicateMember,
                    _ => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::DraftOrderExists => ErrorCode::DraftOrderExists,
                    ConflictKind::ScheduleExists => ErrorCode::ScheduleExists,
                    _ => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::League => ErrorCode::LeagueNotFound,
                    NotFoundKind::DraftOrder => ErrorCode::DraftOrderNotFound,
                    NotFoundKind::Schedule => ErrorCode::ScheduleNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::StoreUnavailable => AppError::StoreUnavailable {
                    code: ErrorCode::StoreUnavailable,
                    detail,
                },
                _ => AppError::internal(detail),
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str().to_string();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://thrive-leagues.app/errors/{code}"),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header((TRACE_HEADER, trace_id));
        if status == StatusCode::SERVICE_UNAVAILABLE {
            builder.insert_header(("Retry-After", "1"));
        }
        builder.json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (
                DomainError::validation(ValidationKind::EmptyMembership, "x"),
                StatusCode::BAD_REQUEST,
                ErrorCode::EmptyMembership,
            ),
            (
                DomainError::not_found(NotFoundKind::League, "x"),
                StatusCode::NOT_FOUND,
                ErrorCode::LeagueNotFound,
            ),
            (
                DomainError::conflict(ConflictKind::ScheduleExists, "x"),
                StatusCode::CONFLICT,
                ErrorCode::ScheduleExists,
            ),
            (
                DomainError::infra(InfraErrorKind::StoreUnavailable, "x"),
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::StoreUnavailable,
            ),
            (
                DomainError::validation(ValidationKind::DuplicateMember, "x"),
                StatusCode::BAD_REQUEST,
                ErrorCode::DuplicateMember,
            ),
            (
                DomainError::infra(InfraErrorKind::Other("disk".into()), "x"),
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::Internal,
            ),
        ];
        for (domain, status, code) in cases {
            let app = AppError::from(domain);
            assert_eq!(app.status(), status);
            assert_eq!(app.code(), code);
        }
    }

    #[test]
    fn titles_are_humanized() {
        assert_eq!(
            AppError::humanize_code("LEAGUE_NOT_FOUND"),
            "League Not Found"
        );
    }

    #[test]
    fn unavailable_responses_carry_retry_after() {
        let resp = AppError::from(DomainError::infra(InfraErrorKind::StoreUnavailable, "down"))
            .error_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(resp.headers().contains_key("retry-after"));
        assert!(resp.headers().contains_key("x-trace-id"));
    }
}
