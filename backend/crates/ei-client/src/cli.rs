use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ei")]
#[command(about = "EIPs Insight command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000")]
    pub(crate) server: String,

    /// Directory holding the cached user and session
    /// (default: <data dir>/eips-insight)
    #[arg(long, global = true)]
    pub(crate) cache_dir: Option<PathBuf>,

    /// Session token (overrides the stored one)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// User ID header for servers running without auth
    #[arg(long, global = true)]
    pub(crate) user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub(crate) log_level: String,
}
