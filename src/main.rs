//! Auth config check
//!
//! Loads the dotenv file and auth variables the same way the bot does at
//! startup, then prints the resolved settings as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stream_auth_config::{AuthConfig, DEFAULT_ID_PATTERN, compile_id_pattern, load_env_file};

#[derive(Parser, Debug)]
#[command(name = "stream-auth-config")]
#[command(about = "Resolve AUTH_CHANNEL / AUTH_GROUP / ALLOWED_USERS and print them")]
struct Args {
    /// Dotenv file to load (default: .env in the current dir or a parent)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Regex a channel token must match before it is parsed as an ID
    #[arg(long, default_value = DEFAULT_ID_PATTERN)]
    id_pattern: String,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    load_env_file(args.env_file.as_deref()).context("Failed to load env file")?;

    let pattern = compile_id_pattern(&args.id_pattern)
        .with_context(|| format!("Bad --id-pattern {:?}", args.id_pattern))?;
    let config = AuthConfig::from_env_with_pattern(&pattern)
        .context("Error while parsing env variables")?;

    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    println!("{json}");

    log::info!("Auth config loaded");
    Ok(())
}
