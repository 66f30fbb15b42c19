//! Error codes for the leagues API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the leagues API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid league ID provided
    InvalidLeagueId,
    /// League name missing or too long
    InvalidLeagueName,
    /// No members supplied where at least one is required
    EmptyMembership,
    /// More members than the configured league size
    TooManyMembers,
    /// Draft reorder is not a permutation of the current order
    DraftOrderMismatch,
    /// Week outside the season
    InvalidWeek,
    /// Member is not part of the league
    UnknownMember,
    /// Member id listed more than once
    DuplicateMember,
    /// Missing or malformed active league header
    InvalidActiveLeague,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// League not found
    LeagueNotFound,
    /// Draft order not generated for the league
    DraftOrderNotFound,
    /// Schedule not generated for the league
    ScheduleNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Draft order already persisted for the league
    DraftOrderExists,
    /// Schedule already persisted for the league
    ScheduleExists,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Backing store unavailable
    StoreUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidLeagueId => "INVALID_LEAGUE_ID",
            Self::InvalidLeagueName => "INVALID_LEAGUE_NAME",
            Self::EmptyMembership => "EMPTY_MEMBERSHIP",
            Self::TooManyMembers => "TOO_MANY_MEMBERS",
            Self::DraftOrderMismatch => "DRAFT_ORDER_MISMATCH",
            Self::InvalidWeek => "INVALID_WEEK",
            Self::UnknownMember => "UNKNOWN_MEMBER",
            Self::DuplicateMember => "DUPLICATE_MEMBER",
            Self::InvalidActiveLeague => "INVALID_ACTIVE_LEAGUE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::LeagueNotFound => "LEAGUE_NOT_FOUND",
            Self::DraftOrderNotFound => "DRAFT_ORDER_NOT_FOUND",
            Self::ScheduleNotFound => "SCHEDULE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::DraftOrderExists => "DRAFT_ORDER_EXISTS",
            Self::ScheduleExists => "SCHEDULE_EXISTS",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
