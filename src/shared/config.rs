// Process configuration read from the environment.
//
// Outside production a `.env` file in the working directory is loaded first;
// variables already present in the environment win over it.

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DB_NAME: &str = "notes";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("{host}:{port} is not a valid bind address")]
    InvalidBindAddress { host: String, port: u16 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "test" => Self::Test,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Connection string of the document store. `None` means nothing to
    /// connect to.
    pub url: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();
        if environment != Environment::Production {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment: non_empty("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database: DatabaseConfig {
                url: non_empty("DB_URL"),
                name: non_empty("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            },
        })
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.database.url, None);
        assert_eq!(config.database.name, "notes");
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DB_URL", "http://localhost:5984"),
            ("DB_NAME", "notes_test"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.url.as_deref(), Some("http://localhost:5984"));
        assert_eq!(config.database.name, "notes_test");
        assert_eq!(config.bind_address().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[rstest]
    fn it_should_treat_a_blank_db_url_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("DB_URL", "  ")])).unwrap();
        assert_eq!(config.database.url, None);
    }

    #[rstest]
    #[case("abc")]
    #[case("70000")]
    #[case("-1")]
    fn it_should_reject_an_invalid_port(#[case] raw: &str) {
        let result = Config::from_lookup(lookup_from(&[("PORT", raw)]));
        assert_eq!(result, Err(ConfigError::InvalidPort(raw.to_string())));
    }

    #[rstest]
    #[case("production", Environment::Production)]
    #[case("PROD", Environment::Production)]
    #[case("test", Environment::Test)]
    #[case("staging", Environment::Development)]
    fn it_should_parse_the_environment(#[case] raw: &str, #[case] expected: Environment) {
        assert_eq!(Environment::parse(raw), expected);
    }

    #[rstest]
    fn it_should_reject_an_unparseable_host() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "not a host")])).unwrap();
        assert!(matches!(
            config.bind_address(),
            Err(ConfigError::InvalidBindAddress { .. })
        ));
    }
}
