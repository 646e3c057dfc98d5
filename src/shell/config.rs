// Process configuration for the host.
//
// Purpose
// - Read the listen address and the runtime environment from environment variables.
//
// Boundaries
// - The environment flag only selects error-page behavior. No other code branches on it.

use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `APP_ENV`. Unset variables fall back to
    /// defaults; anything other than `development` runs as production.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("APP_ENV").ok(),
        )
    }

    fn from_parts(
        host: Option<String>,
        port: Option<String>,
        app_env: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let environment = match app_env {
            Some(value) if value.eq_ignore_ascii_case("development") => Environment::Development,
            _ => Environment::Production,
        };
        Ok(Self {
            host,
            port,
            environment,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
