//! Server configuration from environment variables (a `.env` file is loaded by the binary).

use crate::error::ConfigError;
use crate::API_PREFIX;
use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/products";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CORS_ORIGIN: &str = "http://127.0.0.1:5500";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host name advertised in the API docs.
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub cors_allowed_origin: HeaderValue,
}

impl ServerConfig {
    /// Read `HOST_SERVER`, `PORT_SERVER`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`
    /// and `CORS_ALLOWED_ORIGIN`; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST_SERVER").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = parse_or("PORT_SERVER", lookup("PORT_SERVER"), DEFAULT_PORT)?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let origin = lookup("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into());
        let cors_allowed_origin = HeaderValue::from_str(&origin).map_err(|_| ConfigError::Invalid {
            key: "CORS_ALLOWED_ORIGIN",
            value: origin.clone(),
        })?;
        Ok(ServerConfig {
            host,
            port,
            database_url,
            max_connections,
            cors_allowed_origin,
        })
    }

    /// Listens on every interface.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn api_base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, API_PREFIX)
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::Invalid { key, value })
        }
    }
}
