//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Validation failure kinds raised by the generators and services.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Scheduling needs at least one member.
    EmptyMembership,
    /// Member count exceeds the configured league size.
    TooManyMembers,
    /// A manual draft reorder is not a permutation of the current order.
    DraftOrderMismatch,
    /// Week number outside the league's season.
    InvalidWeek,
    InvalidLeagueName,
    InvalidLeagueId,
    UnknownMember,
    /// The same member id was supplied more than once.
    DuplicateMember,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    League,
    DraftOrder,
    Schedule,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    DraftOrderExists,
    ScheduleExists,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input validation or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict, typically a uniqueness rule in the store
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Whether retrying the whole operation with the same inputs can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::Infra(InfraErrorKind::StoreUnavailable, _)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_detail() {
        let err = DomainError::validation(ValidationKind::EmptyMembership, "no members");
        assert_eq!(
            err.to_string(),
            "validation error EmptyMembership: no members"
        );
    }

    #[test]
    fn only_transient_infra_errors_are_retryable() {
        assert!(DomainError::infra(InfraErrorKind::StoreUnavailable, "down").is_retryable());
        assert!(!DomainError::infra(InfraErrorKind::Other("bad".into()), "bad").is_retryable());
        assert!(!DomainError::not_found(NotFoundKind::League, "7").is_retryable());
    }
}
