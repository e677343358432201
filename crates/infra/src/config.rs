use std::time::Duration;
use thiserror::Error;
use tracing::warn;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 30;

/// Upper bounds for a single call to the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreTimeouts {
    /// Used for scans, inserts, updates and deletes
    pub operation: Duration,
    /// Used for point lookups by id
    pub lookup: Duration,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self {
            operation: Duration::from_secs(DEFAULT_OPERATION_TIMEOUT_SECS),
            lookup: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Expected {0} env var to be present.")]
    Missing(&'static str),
    #[error("The given {0}: `{1}` is not a valid port.")]
    InvalidPort(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: u16,
    pub store_timeouts: StoreTimeouts,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        const PORT: &str = "PORT";

        let port = std::env::var(PORT).map_err(|_| ConfigError::Missing(PORT))?;
        let port = parse_port(&port).ok_or(ConfigError::InvalidPort(PORT, port))?;

        let defaults = StoreTimeouts::default();
        let store_timeouts = StoreTimeouts {
            operation: timeout_from_env("STORE_OPERATION_TIMEOUT_SECS", defaults.operation),
            lookup: timeout_from_env("STORE_LOOKUP_TIMEOUT_SECS", defaults.lookup),
        };

        Ok(Self {
            port,
            store_timeouts,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store_timeouts: Default::default(),
        }
    }
}

/// Accepts `8080`, `:8080` and `host:8080`
fn parse_port(value: &str) -> Option<u16> {
    let port = match value.rsplit_once(':') {
        Some((_, port)) => port,
        None => value,
    };
    port.trim().parse::<u16>().ok()
}

fn timeout_from_env(var: &str, default: Duration) -> Duration {
    match std::env::var(var) {
        Ok(secs) => match secs.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {:?}.",
                    var, secs, default
                );
                default
            }
        },
        Err(_) => default,
    }
}
