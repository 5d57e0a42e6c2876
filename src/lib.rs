mod config_model;
mod env_loader;
mod error;

pub use config_model::{AuthConfig, DEFAULT_ID_PATTERN, compile_id_pattern};
pub use env_loader::{
    ALLOWED_USERS_VAR, AUTH_CHANNEL_VAR, AUTH_GROUP_VAR, load_allowed_users, load_auth_channels,
    load_auth_groups, load_env_file, process_env,
};
pub use error::ConfigError;
