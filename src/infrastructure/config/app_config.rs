//! Application configuration.

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;

use crate::domain::entities::Account;

const APP_NAME: &str = "unesverse";
const APP_QUALIFIER: &str = "dev";
const APP_ORGANIZATION: &str = "forcetower";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration from CLI and environment.
#[derive(Debug, Parser)]
#[command(
    name = "unesverse",
    version,
    about = "A client for the UNESverse companion service of the UNES portal",
    long_about = None
)]
pub struct AppConfig {
    /// Portal API base URL.
    #[arg(long, value_name = "URL", env = "UNES_BASE_URL")]
    pub base_url: Option<String>,

    /// Portal username; stored for automatic login when given together
    /// with a password.
    #[arg(long, env = "UNES_USERNAME")]
    pub username: Option<String>,

    /// Portal password.
    #[arg(long, env = "UNES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Forget the stored account instead of logging in.
    #[arg(long)]
    pub forget_account: bool,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Write logs to the default cache location.
    #[arg(long)]
    pub log_to_file: bool,

    /// Log verbosity level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Builds an account from the supplied credentials, if both are
    /// present and valid.
    #[must_use]
    pub fn account(&self) -> Option<Account> {
        let username = self.username.as_deref()?;
        let password = self.password.as_deref()?;
        Account::new(username, password)
    }

    /// Resolves the log file path.
    ///
    /// An explicit `--log-path` wins; otherwise `--log-to-file` picks the
    /// platform cache directory. `None` means logging goes to stderr.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_path {
            return Some(path.clone());
        }

        if self.log_to_file {
            return ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
                .map(|dirs| dirs.cache_dir().join("unesverse.log"));
        }

        None
    }
}
