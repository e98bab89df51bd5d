//! Typed settings read from environment variables after [`load_and_apply`](crate::load_and_apply).
//!
//! Every reader takes a lookup closure so tests can feed a map instead of mutating the
//! process environment. Unset or unparsable values fall back to the defaults below.

use std::path::PathBuf;

/// Default listen address, matching the original backend's uvicorn port.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8001";
/// Default SQLite file for history and templates.
pub const DEFAULT_DB_PATH: &str = "promptmaster.db";
/// Default number of history items returned by `GET /api/history`.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;
/// Default API base URL used by the client.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8001/api";

/// Where history and templates are persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    /// Process-local store; lost on exit. Selected with `PROMPTMASTER_DB=:memory:`.
    InMemory,
    Sqlite(PathBuf),
}

/// Allowed CORS origins for the HTTP API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// `*` means any origin; otherwise a comma-separated list, blanks dropped.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Self::Any;
        }
        Self::List(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Settings for `promptmaster serve`.
#[derive(Clone, Debug)]
pub struct ServerSettings {
    /// `PROMPTMASTER_ADDR`
    pub addr: String,
    /// `PROMPTMASTER_DB`
    pub store: StoreLocation,
    /// `CORS_ORIGINS`
    pub cors_origins: CorsOrigins,
    /// `PROMPTMASTER_HISTORY_LIMIT`
    pub history_limit: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            store: StoreLocation::Sqlite(PathBuf::from(DEFAULT_DB_PATH)),
            cors_origins: CorsOrigins::Any,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let store = match lookup("PROMPTMASTER_DB") {
            Some(p) if p.trim() == ":memory:" => StoreLocation::InMemory,
            Some(p) if !p.trim().is_empty() => StoreLocation::Sqlite(PathBuf::from(p.trim())),
            _ => default.store,
        };
        Self {
            addr: lookup("PROMPTMASTER_ADDR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(default.addr),
            store,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| CorsOrigins::parse(&s))
                .unwrap_or(default.cors_origins),
            history_limit: lookup("PROMPTMASTER_HISTORY_LIMIT")
                .and_then(|s| s.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default.history_limit),
        }
    }
}

/// Settings for the client side (CLI subcommands and interactive client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    /// `PROMPTMASTER_API_URL`, without trailing slash.
    pub api_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("PROMPTMASTER_API_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}
