//! Runtime configuration, read from environment variables with development
//! defaults. Values that fail to parse are reported rather than silently
//! replaced by the default.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_FETCH_CONNECT_TIMEOUT_SECS: &str = "FETCH_CONNECT_TIMEOUT_SECS";
pub const ENV_FETCH_MAX_BODY_BYTES: &str = "FETCH_MAX_BODY_BYTES";
pub const ENV_FETCH_USER_AGENT: &str = "FETCH_USER_AGENT";
pub const ENV_CACHE_TTL_SECS: &str = "CACHE_TTL_SECS";
pub const ENV_SELECTOR_TABLE_PATH: &str = "SELECTOR_TABLE_PATH";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_FETCH_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_FETCH_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_FETCH_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; NewsbriefBot/0.1; +https://newsbrief.example.com)";
const DEFAULT_CACHE_TTL_SECS: u64 = 30 * 60;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    fetch_timeout: Duration,
    fetch_connect_timeout: Duration,
    fetch_max_body_bytes: u64,
    fetch_user_agent: String,
    cache_ttl: Duration,
    selector_table_path: Option<PathBuf>,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let fetch_timeout = Duration::from_secs(parse_var(
            ENV_FETCH_TIMEOUT_SECS,
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?);
        let fetch_connect_timeout = Duration::from_secs(parse_var(
            ENV_FETCH_CONNECT_TIMEOUT_SECS,
            DEFAULT_FETCH_CONNECT_TIMEOUT_SECS,
        )?);
        let fetch_max_body_bytes = parse_var(ENV_FETCH_MAX_BODY_BYTES, DEFAULT_FETCH_MAX_BODY_BYTES)?;
        let fetch_user_agent =
            env::var(ENV_FETCH_USER_AGENT).unwrap_or_else(|_| DEFAULT_FETCH_USER_AGENT.to_string());
        let cache_ttl = Duration::from_secs(parse_var(ENV_CACHE_TTL_SECS, DEFAULT_CACHE_TTL_SECS)?);
        let selector_table_path = env::var(ENV_SELECTOR_TABLE_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: ENV_FETCH_TIMEOUT_SECS,
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            fetch_timeout,
            fetch_connect_timeout,
            fetch_max_body_bytes,
            fetch_user_agent,
            cache_ttl,
            selector_table_path,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Total time allowed for one page fetch.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
    pub fn fetch_connect_timeout(&self) -> Duration {
        self.fetch_connect_timeout
    }
    /// Pages larger than this are refused.
    pub fn fetch_max_body_bytes(&self) -> u64 {
        self.fetch_max_body_bytes
    }
    pub fn fetch_user_agent(&self) -> &str {
        &self.fetch_user_agent
    }
    /// How long a computed summary stays cached.
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
    /// Optional JSON selector table replacing the built-in one.
    pub fn selector_table_path(&self) -> Option<&Path> {
        self.selector_table_path.as_deref()
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            fetch_connect_timeout: Duration::from_secs(DEFAULT_FETCH_CONNECT_TIMEOUT_SECS),
            fetch_max_body_bytes: DEFAULT_FETCH_MAX_BODY_BYTES,
            fetch_user_agent: DEFAULT_FETCH_USER_AGENT.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            selector_table_path: None,
        }
    }
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
