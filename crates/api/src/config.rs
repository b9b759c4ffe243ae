//! Process configuration read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "STOCKPO_BIND_ADDR";
pub const ALLOWED_ORIGINS_ENV: &str = "STOCKPO_ALLOWED_ORIGINS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address `{value}`")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated origin list; empty or `*` means any origin.
    pub fn parse(value: &str) -> Self {
        let origins: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: AllowedOrigins,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8001)),
            allowed_origins: AllowedOrigins::Any,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| {
            tracing::info!("{BIND_ADDR_ENV} not set; using {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: bind_addr.clone(),
            })?;

        let allowed_origins = match lookup(ALLOWED_ORIGINS_ENV) {
            Some(v) => AllowedOrigins::parse(&v),
            None => {
                tracing::warn!("{ALLOWED_ORIGINS_ENV} not set; allowing any CORS origin");
                AllowedOrigins::Any
            }
        };

        Ok(Self {
            bind_addr,
            allowed_origins,
        })
    }
}
