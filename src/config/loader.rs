//! Load `ServerConfig` from process environment (after `.env`, if present).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const ENV_BODY_LIMIT_BYTES: &str = "BODY_LIMIT_BYTES";

impl ServerConfig {
    /// Read `.env` (missing file is fine), then build config from the real environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::Load(e.to_string()));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unset or blank keys take the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let max_connections: u32 = parse_or(get(ENV_MAX_CONNECTIONS), ENV_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_MAX_CONNECTIONS,
                value: "0".into(),
            });
        }
        let timeout_secs: u64 = parse_or(
            get(ENV_REQUEST_TIMEOUT_SECS),
            ENV_REQUEST_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_REQUEST_TIMEOUT_SECS,
                value: "0".into(),
            });
        }

        Ok(ServerConfig {
            database_url: get(ENV_DATABASE_URL).unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            max_connections,
            request_timeout: Duration::from_secs(timeout_secs),
            body_limit_bytes: parse_or(get(ENV_BODY_LIMIT_BYTES), ENV_BODY_LIMIT_BYTES, DEFAULT_BODY_LIMIT_BYTES)?,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ENV_DATABASE_URL, "sqlite://other.db"),
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_MAX_CONNECTIONS, "2"),
            (ENV_REQUEST_TIMEOUT_SECS, "3"),
            (ENV_BODY_LIMIT_BYTES, "1024"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.body_limit_bytes, 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "   ")])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn rejects_non_numeric_pool_size() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_MAX_CONNECTIONS, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_MAX_CONNECTIONS, .. }));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_REQUEST_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_REQUEST_TIMEOUT_SECS, .. }));
    }
}
