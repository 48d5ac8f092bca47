//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present). The resulting value is built once at start-up and shared
//! read-only afterwards.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub static_files: StaticFilesConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    #[serde(default)]
    pub platform: Platform,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse a case-insensitive environment name
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Deployment platform; only `dev` unlocks destructive admin operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Dev,
    #[default]
    Production,
}

impl Platform {
    #[must_use]
    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    fn parse(value: &str) -> Self {
        if value.trim() == "dev" {
            Self::Dev
        } else {
            Self::Production
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Token configuration
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds
    #[serde(default = "default_access_token_ttl_secs")]
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in days
    #[serde(default = "default_refresh_token_ttl_days")]
    pub refresh_token_ttl_days: u32,
}

impl JwtConfig {
    #[must_use]
    pub fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_ttl_secs)
    }

    #[must_use]
    pub fn refresh_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.refresh_token_ttl_days))
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_ttl_secs", &self.access_token_ttl_secs)
            .field("refresh_token_ttl_days", &self.refresh_token_ttl_days)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Static file serving configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

// Default value functions
fn default_app_name() -> String {
    "chirpy".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_access_token_ttl_secs() -> u64 {
    3600 // 1 hour
}

fn default_refresh_token_ttl_days() -> u32 {
    60
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(".")
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env: get("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
                platform: get("PLATFORM")
                    .map(|s| Platform::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: parse_or("API_PORT", get("API_PORT"), default_port)?,
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL")
                    .or_else(|| get("DB_URL"))
                    .ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    get("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    "DATABASE_MIN_CONNECTIONS",
                    get("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                )?,
            },
            jwt: JwtConfig {
                secret: get("JWT_SECRET")
                    .or_else(|| get("SECRET"))
                    .ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_ttl_secs: parse_or(
                    "ACCESS_TOKEN_TTL_SECS",
                    get("ACCESS_TOKEN_TTL_SECS"),
                    default_access_token_ttl_secs,
                )?,
                refresh_token_ttl_days: parse_or(
                    "REFRESH_TOKEN_TTL_DAYS",
                    get("REFRESH_TOKEN_TTL_DAYS"),
                    default_refresh_token_ttl_days,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            static_files: StaticFilesConfig {
                dir: get("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_static_dir),
            },
        })
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> T,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, value)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
