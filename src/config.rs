//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidAddr { var: &'static str, value: String },
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BOOKIT_ADDR`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `BOOKIT_LOG`: log filter, default `info`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `BOOKIT_ADDR` or `PORT` is set but
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = parse_addr(lookup("BOOKIT_ADDR").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let log_filter = lookup("BOOKIT_LOG")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        Ok(Self { addr: SocketAddr::new(ip, port), log_filter })
    }
}

fn parse_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw.map_or(DEFAULT_ADDR, str::trim);
    value
        .parse()
        .map_err(|_| ConfigError::InvalidAddr { var: "BOOKIT_ADDR", value: value.to_owned() })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort { var: "PORT", value: value.to_owned() }),
    }
}
