use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin is accepted.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than `production` is treated as development.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: var("PORT")
                    .unwrap_or_else(|| "3001".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: var("MAX_BODY_SIZE")
                    .unwrap_or_else(|| "1048576".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or_else(|| AppError::ConfigError("DATABASE_URL not set".to_string()))?,
                max_connections: var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                    })?,
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            environment: Environment::from_node_env(var("NODE_ENV").as_deref()),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/pricelist")]).unwrap();

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server_address(), "0.0.0.0:3001");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.environment, Environment::Development);
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let err = config_from(&[("PORT", "8080")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("DATABASE_URL")));

        assert!(config_from(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("PORT")));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();

        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn node_env_selects_environment() {
        assert_eq!(
            Environment::from_node_env(Some("production")),
            Environment::Production
        );
        assert_eq!(
            Environment::from_node_env(Some("test")),
            Environment::Development
        );
        assert_eq!(Environment::from_node_env(None), Environment::Development);
        assert!(!Environment::Development.is_production());
    }
}
