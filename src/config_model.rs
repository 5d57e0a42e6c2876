use crate::env_loader::{
    load_allowed_users, load_auth_channels, load_auth_groups, load_env_file, process_env,
};
use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// IDENTIFIER PATTERN
// ============================================================================

/// One leading character (sign or digit) followed by ASCII digits, e.g. `-1001234567890`
pub const DEFAULT_ID_PATTERN: &str = r"^.[0-9]+$";

/// Compile a user-supplied identifier pattern
///
/// # Errors
/// Returns `ConfigError::InvalidPattern` if `pattern` is not a valid regex
pub fn compile_id_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Ok(Regex::new(pattern)?)
}

// ============================================================================
// AUTH CONFIG
// ============================================================================

/// Authorization settings resolved once at startup.
///
/// Built by one of the constructors below and then only read; pass it by
/// reference to whatever needs to check a chat or user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Channels from `AUTH_CHANNEL`, in the order given
    pub auth_channels: Vec<i64>,

    /// Groups from `AUTH_GROUP`; `None` when the variable is unset or empty
    pub auth_groups: Option<Vec<i64>>,

    /// Users from `ALLOWED_USERS` (empty = no user restriction)
    pub allowed_users: Vec<i64>,
}

impl AuthConfig {
    /// Load the dotenv file, then read settings from the process environment
    ///
    /// # Errors
    /// Returns error if the env file is malformed or any ID fails to parse
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        load_env_file(env_file)?;
        Self::from_env()
    }

    /// Read settings from the process environment with the default id pattern
    ///
    /// # Errors
    /// Returns error if any ID fails to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_pattern(&compile_id_pattern(DEFAULT_ID_PATTERN)?)
    }

    /// # Errors
    /// Returns error if any ID fails to parse
    pub fn from_env_with_pattern(pattern: &Regex) -> Result<Self, ConfigError> {
        Self::from_lookup(process_env, pattern)
    }

    /// Build from an arbitrary variable lookup instead of the process environment
    ///
    /// # Errors
    /// Returns error if any ID fails to parse
    pub fn from_lookup<F>(lookup: F, pattern: &Regex) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            auth_channels: load_auth_channels(&lookup, pattern)?,
            auth_groups: load_auth_groups(&lookup)?,
            allowed_users: load_allowed_users(&lookup)?,
        };

        log::info!(
            "Loaded {} auth channels, {} auth groups, {} allowed users",
            config.auth_channels.len(),
            config.auth_groups.as_ref().map_or(0, Vec::len),
            config.allowed_users.len()
        );
        Ok(config)
    }

    #[must_use]
    pub fn is_auth_channel(&self, chat_id: i64) -> bool {
        self.auth_channels.contains(&chat_id)
    }

    /// `false` when no groups are configured
    #[must_use]
    pub fn is_auth_group(&self, chat_id: i64) -> bool {
        self.auth_groups
            .as_ref()
            .is_some_and(|groups| groups.contains(&chat_id))
    }

    /// Every user is allowed when `allowed_users` is empty
    #[must_use]
    pub fn is_allowed_user(&self, user_id: i64) -> bool {
        self.allowed_users.is_empty() || self.allowed_users.contains(&user_id)
    }
}
