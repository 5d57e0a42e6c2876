//! End-to-end dotenv loading.
//!
//! Kept as a single test: it writes to the process environment, and each file
//! under tests/ runs in its own process.

use std::io::Write;

use stream_auth_config::{AuthConfig, load_env_file};

fn write_env_file(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_from_env_file_without_overriding() {
    let dir = tempfile::tempdir().unwrap();
    let primary = write_env_file(
        &dir,
        "bot.env",
        "AUTH_CHANNEL=\"-1001234567890 @public 42\"\n\
         AUTH_GROUP=\"10 20\"\n\
         ALLOWED_USERS=7,8\n",
    );
    let secondary = write_env_file(&dir, "override.env", "AUTH_GROUP=99\n");

    let config = AuthConfig::load(Some(primary.as_path())).unwrap();

    assert_eq!(config.auth_channels, vec![-1_001_234_567_890, 42]);
    assert_eq!(config.auth_groups, Some(vec![10, 20]));
    assert_eq!(config.allowed_users, vec![7, 8]);
    assert!(config.is_auth_channel(42));

    // Already-set variables win over a later file
    assert_eq!(load_env_file(Some(secondary.as_path())).unwrap(), Some(secondary.clone()));
    let reloaded = AuthConfig::from_env().unwrap();
    assert_eq!(reloaded.auth_groups, Some(vec![10, 20]));
    assert_eq!(reloaded, config);
}
