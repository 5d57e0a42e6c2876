use std::num::ParseIntError;

// ============================================================================
// CONFIG ERRORS
// ============================================================================

/// Fatal startup failures while loading authorization settings.
///
/// Unset variables are never errors; they resolve to empty or absent values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("invalid AUTH_CHANNEL id {token:?}: {source}")]
    InvalidChannelId {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid AUTH_GROUP id {token:?}: {source}")]
    InvalidGroupId {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid ALLOWED_USERS id {token:?}: {source}")]
    InvalidUserId {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid identifier pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
