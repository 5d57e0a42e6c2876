use crate::error::ConfigError;
use regex::Regex;
use std::path::{Path, PathBuf};

pub const AUTH_CHANNEL_VAR: &str = "AUTH_CHANNEL";
pub const AUTH_GROUP_VAR: &str = "AUTH_GROUP";
pub const ALLOWED_USERS_VAR: &str = "ALLOWED_USERS";

// ============================================================================
// DOTENV LOADING
// ============================================================================

/// Load a dotenv file into the process environment
///
/// With `None`, the usual `.env` lookup (current directory, then parents) is used.
/// Variables already set in the environment win over the file.
/// A missing file is logged and reported as `Ok(None)`.
///
/// # Errors
/// Returns `ConfigError::EnvFile` if the file exists but cannot be read or parsed
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    let result = match path {
        Some(path) => {
            log::info!("Trying to load env vars from {}", path.display());
            dotenvy::from_path(path).map(|()| path.to_path_buf())
        }
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(loaded) => {
            log::info!("Loaded env vars from {}", loaded.display());
            Ok(Some(loaded))
        }
        Err(e) if e.not_found() => {
            match path {
                Some(path) => log::warn!("Env file not found: {}", path.display()),
                None => log::debug!("No .env file found, using process environment only"),
            }
            Ok(None)
        }
        Err(e) => Err(ConfigError::EnvFile(e)),
    }
}

/// Read a variable from the process environment
#[must_use]
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

// ============================================================================
// ENVIRONMENT VARIABLE PARSING
// ============================================================================

/// Load channel IDs from `AUTH_CHANNEL`
/// Format: whitespace-separated; only tokens matching `pattern` are kept
///
/// # Errors
/// Returns `ConfigError::InvalidChannelId` if a kept token is not an integer
pub fn load_auth_channels<F>(lookup: F, pattern: &Regex) -> Result<Vec<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(AUTH_CHANNEL_VAR).unwrap_or_default();

    raw.split_whitespace()
        .filter(|token| {
            let keep = pattern.is_match(token);
            if !keep {
                log::debug!("Skipping {AUTH_CHANNEL_VAR} token {token:?}: does not match id pattern");
            }
            keep
        })
        .map(|token| {
            token.parse::<i64>().map_err(|source| ConfigError::InvalidChannelId {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Load group IDs from `AUTH_GROUP`
/// Format: whitespace-separated integers; unset or empty yields `None`
///
/// # Errors
/// Returns `ConfigError::InvalidGroupId` if any token is not an integer
pub fn load_auth_groups<F>(lookup: F) -> Result<Option<Vec<i64>>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(AUTH_GROUP_VAR).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    raw.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|source| ConfigError::InvalidGroupId {
                token: token.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Load user IDs from `ALLOWED_USERS`
/// Format: comma-separated integers, surrounding whitespace ignored
///
/// # Errors
/// Returns `ConfigError::InvalidUserId` if any entry is not an integer
pub fn load_allowed_users<F>(lookup: F) -> Result<Vec<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ALLOWED_USERS_VAR)
        .map(|users| {
            users
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<i64>().map_err(|source| ConfigError::InvalidUserId {
                        token: s.to_string(),
                        source,
                    })
                })
                .collect()
        })
        .unwrap_or_else(|| Ok(Vec::new()))
}
