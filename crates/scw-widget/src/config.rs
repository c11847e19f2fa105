use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const API_URL_VAR: &str = "SUPPORT_API_URL";
const ENV_VAR: &str = "SUPPORT_ENV";
const TIMEOUT_VAR: &str = "SUPPORT_REQUEST_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment flavor, steering log output and little else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Base URL of the support backend.
    pub api_url: String,
    pub env: Environment,
    /// Applied to every backend request.
    pub request_timeout: Duration,
}

impl WidgetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var(API_URL_VAR).map_err(|_| ConfigError::Missing(API_URL_VAR))?;

        let env = match env::var(ENV_VAR) {
            Ok(raw) => parse_environment(&raw)?,
            Err(_) => Environment::default(),
        };

        let request_timeout = match env::var(TIMEOUT_VAR) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_url,
            env,
            request_timeout,
        })
    }
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    raw.parse().map_err(|reason| ConfigError::Invalid {
        var: ENV_VAR,
        value: raw.to_owned(),
        reason,
    })
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(ConfigError::Invalid {
            var: TIMEOUT_VAR,
            value: raw.to_owned(),
            reason: "timeout must be at least one second".to_owned(),
        }),
        Err(err) => Err(ConfigError::Invalid {
            var: TIMEOUT_VAR,
            value: raw.to_owned(),
            reason: err.to_string(),
        }),
    }
}
