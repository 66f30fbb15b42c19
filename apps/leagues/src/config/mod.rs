//! Runtime configuration loaded from environment variables.
//!
//! | Variable                | Default   |
//! |-------------------------|-----------|
//! | `LEAGUES_HOST`          | `0.0.0.0` |
//! | `LEAGUES_PORT`          | `3001`    |
//! | `LEAGUES_DEFAULT_WEEKS` | `10`      |
//! | `LEAGUES_MAX_MEMBERS`   | `64`      |
//! | `LEAGUES_MAX_WEEKS`     | `52`      |
//! | `CORS_ALLOWED_ORIGINS`  | localhost |

use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Limits applied when creating a league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonConfig {
    /// Weeks used when the request does not specify any.
    pub default_weeks: u32,
    pub max_members: usize,
    /// Longest season a request may ask for.
    pub max_weeks: u32,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            default_weeks: 10,
            max_members: 64,
            max_weeks: 52,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub season: SeasonConfig,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SeasonConfig::default();
        let host = lookup("LEAGUES_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("LEAGUES_PORT", lookup("LEAGUES_PORT"), 3001u16)?;
        let default_weeks = parse_or(
            "LEAGUES_DEFAULT_WEEKS",
            lookup("LEAGUES_DEFAULT_WEEKS"),
            defaults.default_weeks,
        )?;
        let max_members = parse_or(
            "LEAGUES_MAX_MEMBERS",
            lookup("LEAGUES_MAX_MEMBERS"),
            defaults.max_members,
        )?;

        let max_weeks = parse_or(
            "LEAGUES_MAX_WEEKS",
            lookup("LEAGUES_MAX_WEEKS"),
            defaults.max_weeks,
        )?;

        if default_weeks == 0 {
            return Err(AppError::config(
                "LEAGUES_DEFAULT_WEEKS must be at least 1".to_string(),
            ));
        }
        if default_weeks > max_weeks {
            return Err(AppError::config(format!(
                "LEAGUES_DEFAULT_WEEKS ({default_weeks}) exceeds LEAGUES_MAX_WEEKS ({max_weeks})"
            )));
        }
        if max_members == 0 {
            return Err(AppError::config(
                "LEAGUES_MAX_MEMBERS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            season: SeasonConfig {
                default_weeks,
                max_members,
                max_weeks,
            },
            cors_allowed_origins: parse_origins(lookup("CORS_ALLOWED_ORIGINS").as_deref()),
        })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{key} has an invalid value: {value}"))),
    }
}

/// Comma-separated origins; empty, `null` and non-http entries are ignored.
/// Falls back to localhost-only when nothing valid is configured.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        origins
    }
}
