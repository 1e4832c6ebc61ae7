use std::env;
use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "rewear_db";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
}

/// # Service Settings
///
/// Read from the process environment. Every variable is optional:
///
/// | Variable          | Default                      |
/// |-------------------|------------------------------|
/// | `MONGO_URL`       | `mongodb://localhost:27017`  |
/// | `DB_NAME`         | `rewear_db`                  |
/// | `ALLOWED_ORIGINS` | `http://localhost:3000`      |
/// | `HOST`            | `127.0.0.1`                  |
/// | `PORT`            | `8080`                       |
///
/// `ALLOWED_ORIGINS` is a comma-separated list.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub allowed_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: read("HOST", DEFAULT_HOST),
            port,
            database: DatabaseSettings {
                url: read("MONGO_URL", DEFAULT_MONGO_URL),
                name: read("DB_NAME", DEFAULT_DB_NAME),
            },
            allowed_origins: parse_origins(&read("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.database.url, "mongodb://localhost:27017");
        assert_eq!(settings.database.name, "rewear_db");
        assert_eq!(settings.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("MONGO_URL", "mongodb://db:27017"),
            ("DB_NAME", "status"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(settings.database.url, "mongodb://db:27017");
        assert_eq!(settings.database.name, "status");
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9000);
    }

    #[test]
    fn test_allowed_origins_list() {
        let settings = settings_from(&[(
            "ALLOWED_ORIGINS",
            "http://localhost:3000, https://example.com,,",
        )])
        .unwrap();

        assert_eq!(
            settings.allowed_origins,
            vec!["http://localhost:3000", "https://example.com"]
        );
    }

    #[test]
    fn test_invalid_port() {
        let result = settings_from(&[("PORT", "eighty")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPort { ref value, .. }) if value == "eighty"
        ));
    }
}
