//! Command line configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::logging::DEFAULT_LOG_FILE;
use crate::store::{CorruptStorePolicy, DEFAULT_USERS_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnCorrupt {
    /// Stop with an error
    Fail,
    /// Treat the store as empty (the next registration overwrites it)
    Empty,
}

impl From<OnCorrupt> for CorruptStorePolicy {
    fn from(value: OnCorrupt) -> Self {
        match value {
            OnCorrupt::Fail => CorruptStorePolicy::Fail,
            OnCorrupt::Empty => CorruptStorePolicy::TreatAsEmpty,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "transit_cli")]
#[command(about = "Public transport user and ticketing console")]
pub struct Cli {
    /// JSON file holding registered users
    #[arg(long, default_value = DEFAULT_USERS_FILE)]
    pub users_file: PathBuf,

    /// File that receives the action log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log to stderr instead of the log file
    #[arg(long)]
    pub no_log_file: bool,

    /// What to do when the user store cannot be parsed
    #[arg(long, value_enum, default_value = "fail")]
    pub on_corrupt: OnCorrupt,
}

/// Settings consumed by `App`
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub users_file: PathBuf,
    /// `None` logs to stderr
    pub log_file: Option<PathBuf>,
    pub corrupt_policy: CorruptStorePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            corrupt_policy: CorruptStorePolicy::Fail,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            users_file: cli.users_file,
            log_file: (!cli.no_log_file).then_some(cli.log_file),
            corrupt_policy: cli.on_corrupt.into(),
        }
    }
}
