mod bot;
mod budget;
mod db;
mod dialog;
mod error;
mod export;
mod models;
mod run;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let (args, user_flag) = split_user_flag(std::env::args().collect());
    let user_id = resolve_user(user_flag)?;

    let db_path = get_db_path()?;
    let ledger = db::Ledger::open(&db_path)
        .with_context(|| format!("Failed to open ledger at {}", db_path.display()))?;

    match args.len() {
        1 => {
            let bot = bot::Bot::new(ledger, get_export_dir()?);
            run::as_chat(&bot, user_id)
        }
        2.. => run::as_cli(&args, &ledger, user_id),
        _ => {
            eprintln!("Usage: tallybot [command] [--user <id>]");
            Ok(())
        }
    }
}

/// Logs go to stderr so they never mix into the conversation.
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tallybot=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pull `--user <id>` out of the argument list so subcommands never see it.
fn split_user_flag(args: Vec<String>) -> (Vec<String>, Option<String>) {
    let mut rest = Vec::with_capacity(args.len());
    let mut user = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--user" {
            user = iter.next();
        } else {
            rest.push(arg);
        }
    }
    (rest, user)
}

fn resolve_user(flag: Option<String>) -> Result<i64> {
    let raw = match flag {
        Some(raw) => raw,
        None => match std::env::var("TALLYBOT_USER") {
            Ok(raw) => raw,
            Err(_) => return Ok(1),
        },
    };
    raw.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid user id: {raw}"))
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "tallybot", "TallyBot")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
}

fn get_db_path() -> Result<std::path::PathBuf> {
    if let Ok(path) = std::env::var("TALLYBOT_DB") {
        return Ok(std::path::PathBuf::from(path));
    }
    let proj_dirs = project_dirs()?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("tallybot.db"))
}

fn get_export_dir() -> Result<std::path::PathBuf> {
    if let Ok(dir) = std::env::var("TALLYBOT_EXPORT_DIR") {
        return Ok(std::path::PathBuf::from(dir));
    }
    Ok(project_dirs()?.data_dir().join("exports"))
}
