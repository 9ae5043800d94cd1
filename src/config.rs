//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (if present) before calling [`AppConfig::from_env`].
//! Tuning knobs fall back to their defaults on parse failure; only `PORT` is
//! strict, since binding the wrong port silently is worse than not starting.

use std::net::IpAddr;

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// Page size limits for `GET /api/players`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl ListingConfig {
    /// Build limits, clamping the default into `1..=max` and `max` to at least 1.
    #[must_use]
    pub fn new(default_per_page: u32, max_per_page: u32) -> Self {
        let max_per_page = max_per_page.max(1);
        Self { default_per_page: default_per_page.clamp(1, max_per_page), max_per_page }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub listing: ListingConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 5002
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `DATABASE_URL`: Postgres URL; in-memory store when absent
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `CORS_ALLOWED_ORIGINS`: comma-separated origins; any origin when absent
    /// - `PLAYERS_DEFAULT_PAGE_SIZE`: default 20
    /// - `PLAYERS_MAX_PAGE_SIZE`: default 100
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BIND_ADDR` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_string("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_raw = env_string("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        Ok(Self {
            bind_addr,
            port,
            database_url: env_string("DATABASE_URL"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            cors_allowed_origins: env_string("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            listing: ListingConfig::new(
                env_parse("PLAYERS_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
                env_parse("PLAYERS_MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE),
            ),
        })
    }
}

/// Read a variable, treating blank values as unset.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_string(key)
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
