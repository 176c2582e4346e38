//! Process configuration from environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://NodeSql.db";

/// Where the store lives and how many connections may be open against it.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub database_url: String,
    /// 1 keeps a single shared handle to the store file.
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 1,
        }
    }

    /// Private in-memory store; always a single connection so every query sees the same database.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Read `BIND_ADDR`, `DATABASE_URL` and `DB_MAX_CONNECTIONS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind.parse().map_err(|e| ConfigError::Invalid {
            var: "BIND_ADDR",
            reason: format!("{}: {}", bind, e),
        })?;
        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                reason: format!("expected a positive integer, got '{}'", v),
            })?,
            None => 1,
        };
        Ok(Self {
            bind_addr,
            store: StoreConfig {
                database_url,
                max_connections,
            },
        })
    }
}
