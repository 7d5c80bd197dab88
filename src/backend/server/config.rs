/**
 * Server Configuration
 *
 * Configuration is layered:
 *
 * 1. Built-in defaults suitable for local development
 * 2. An optional TOML file named by `ACCOUNTS_CONFIG`
 * 3. Environment variables (a `.env` file is loaded first if present)
 *
 * Later layers override earlier ones. `JWT_SECRET` has no default: without
 * it the server still starts, but every token signing attempt fails.
 */
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_HOURS;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://accounts.db?mode=rwc";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// Environment variable naming the optional TOML config file
pub const CONFIG_PATH_ENV: &str = "ACCOUNTS_CONFIG";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: u64,
    pub bcrypt_cost: u32,
    pub public_dir: PathBuf,
    pub max_avatar_bytes: usize,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from `.env`, the optional TOML file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                ServerConfigBuilder::from_file(Path::new(&path))?
            }
            Err(_) => ServerConfigBuilder::default(),
        };
        builder.apply_env(|key| std::env::var(key).ok())?;
        builder.build()
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Values read from the TOML config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_hours: Option<u64>,
    bcrypt_cost: Option<u32>,
    public_dir: Option<PathBuf>,
    max_avatar_bytes: Option<usize>,
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_hours: Option<u64>,
    bcrypt_cost: Option<u32>,
    public_dir: Option<PathBuf>,
    max_avatar_bytes: Option<usize>,
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

impl ServerConfigBuilder {
    /// Start from the contents of a TOML file
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        Ok(Self {
            host: file.host,
            port: file.port,
            database_url: file.database_url,
            jwt_secret: file.jwt_secret,
            token_ttl_hours: file.token_ttl_hours,
            bcrypt_cost: file.bcrypt_cost,
            public_dir: file.public_dir,
            max_avatar_bytes: file.max_avatar_bytes,
        })
    }

    /// Start from a TOML file on disk
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Override values with whatever `lookup` finds for the known variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = Some(host);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = Some(parse_var("SERVER_PORT", port)?);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(ttl) = lookup("TOKEN_TTL_HOURS") {
            self.token_ttl_hours = Some(parse_var("TOKEN_TTL_HOURS", ttl)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = Some(parse_var("BCRYPT_COST", cost)?);
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            self.public_dir = Some(PathBuf::from(dir));
        }
        if let Some(limit) = lookup("MAX_AVATAR_BYTES") {
            self.max_avatar_bytes = Some(parse_var("MAX_AVATAR_BYTES", limit)?);
        }
        Ok(())
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_hours(mut self, hours: u64) -> Self {
        self.token_ttl_hours = Some(hours);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    pub fn max_avatar_bytes(mut self, limit: usize) -> Self {
        self.max_avatar_bytes = Some(limit);
        self
    }

    /// Build the configuration, filling in defaults
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let database_url = self
            .database_url
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }

        let jwt_secret = self.jwt_secret.filter(|s| !s.is_empty());
        if jwt_secret.is_none() {
            tracing::warn!("JWT_SECRET not set. Token signing will fail.");
        }

        Ok(ServerConfig {
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url,
            jwt_secret,
            token_ttl_hours: self.token_ttl_hours.unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
            bcrypt_cost: self
                .bcrypt_cost
                .unwrap_or(bcrypt::DEFAULT_COST)
                .clamp(4, 31),
            public_dir: self
                .public_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            max_avatar_bytes: self.max_avatar_bytes.unwrap_or(DEFAULT_MAX_AVATAR_BYTES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serial_test::serial;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::builder().build().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.token_ttl_hours, DEFAULT_TOKEN_TTL_HOURS);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(config.jwt_secret.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_bcrypt_cost_is_clamped() {
        let config = ServerConfig::builder().bcrypt_cost(1).build().unwrap();
        assert_eq!(config.bcrypt_cost, 4);
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let config = ServerConfig::builder().jwt_secret("").build().unwrap();
        assert!(config.jwt_secret.is_none());
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let result = ServerConfig::builder().database_url(" ").build();
        assert_matches!(result, Err(ConfigError::MissingValue("DATABASE_URL")));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut builder = ServerConfigBuilder::from_toml_str(
            r#"
            port = 8080
            jwt_secret = "from-file"
            public_dir = "/srv/public"
            "#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [("SERVER_PORT", "9090"), ("BCRYPT_COST", "5")].into();
        builder
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        let config = builder.build().unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.bcrypt_cost, 5);
        assert_eq!(config.jwt_secret.as_deref(), Some("from-file"));
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
    }

    #[test]
    fn test_invalid_number_in_env() {
        let mut builder = ServerConfigBuilder::default();
        let result = builder.apply_env(|key| (key == "SERVER_PORT").then(|| "not-a-port".to_string()));
        assert_matches!(result, Err(ConfigError::Invalid { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn test_unknown_file_key_rejected() {
        let result = ServerConfigBuilder::from_toml_str("colour = \"blue\"");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    #[serial]
    fn test_load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.toml");
        std::fs::write(&path, "host = \"127.0.0.1\"\ntoken_ttl_hours = 1\n").unwrap();

        std::env::set_var(CONFIG_PATH_ENV, &path);
        let config = ServerConfig::load();
        std::env::remove_var(CONFIG_PATH_ENV);

        let config = config.unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.token_ttl_hours, 1);
    }

    #[test]
    #[serial]
    fn test_load_missing_config_file() {
        std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/accounts.toml");
        let result = ServerConfig::load();
        std::env::remove_var(CONFIG_PATH_ENV);

        assert_matches!(result, Err(ConfigError::Read { .. }));
    }
}
