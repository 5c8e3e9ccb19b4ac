use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MODEL_PATH: &str = "model/classifier.json";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_STATEMENT_TIMEOUT_MS: u64 = 5_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} is not valid: {1}")]
    Invalid(&'static str, String),
}

/// Environment-provided configuration. Database credentials have no
/// defaults; everything else falls back to a sensible value.
#[derive(Clone)]
pub struct ServerConfig {
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub port: u16,
    pub model_path: String,
    pub db_max_connections: u32,
    pub db_statement_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(ServerConfig {
            db_name: required("DB_NAME")?,
            db_user: required("DB_USER")?,
            db_password: required("DB_PASSWORD")?,
            db_host: required("DB_HOST")?,
            port: parsed("PORT", DEFAULT_PORT)?,
            model_path: env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string()),
            db_max_connections: parsed("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            db_statement_timeout: Duration::from_millis(parsed(
                "DB_STATEMENT_TIMEOUT_MS",
                DEFAULT_STATEMENT_TIMEOUT_MS,
            )?),
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parsed<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_addr_uses_configured_port() {
        let config = ServerConfig {
            db_name: "liverpre".into(),
            db_user: "postgres".into(),
            db_password: "postgres".into(),
            db_host: "localhost".into(),
            port: 8088,
            model_path: DEFAULT_MODEL_PATH.into(),
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            db_statement_timeout: Duration::from_millis(DEFAULT_STATEMENT_TIMEOUT_MS),
        };
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8088");
    }
}
