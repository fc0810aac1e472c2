//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Chart resolution configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Memoize resolutions per (chart type, parameters)
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,

    /// Entry cap of the resolution cache; the cache is emptied when full (0 = no cap)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_cache_enabled() -> bool {
    true
}

fn default_max_entries() -> usize {
    1024
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_enabled: default_cache_enabled(),
            max_entries: default_max_entries(),
        }
    }
}

/// Dashboard page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Public URL of the dashboard page, used as the base of shareable links
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

fn default_public_url() -> String {
    "http://localhost:8090/".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("chartlink").join("config.toml")),
            Some(PathBuf::from("/etc/chartlink/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("CHARTLINK_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("CHARTLINK_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Dashboard overrides
        if let Some(url) = lookup("CHARTLINK_PUBLIC_URL") {
            self.dashboard.public_url = url;
        }

        // Resolver overrides
        if let Some(enabled) = lookup("CHARTLINK_CACHE_ENABLED") {
            self.resolver.cache_enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }
        if let Some(max) = lookup("CHARTLINK_CACHE_MAX_ENTRIES") {
            if let Ok(n) = max.parse() {
                self.resolver.max_entries = n;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("CHARTLINK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CHARTLINK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Chartlink Configuration
#
# Environment variables override these settings:
# - CHARTLINK_API_HOST
# - CHARTLINK_API_PORT
# - CHARTLINK_PUBLIC_URL
# - CHARTLINK_CACHE_ENABLED
# - CHARTLINK_CACHE_MAX_ENTRIES
# - CHARTLINK_LOG_LEVEL
# - CHARTLINK_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[resolver]
# Memoize resolved chart data per (chart type, parameters)
cache_enabled = true

# Entry cap of the resolution cache, emptied when reached (0 = no cap)
max_entries = 1024

[dashboard]
# Public URL of the dashboard page, base of generated demo links
public_url = "http://localhost:8090/"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
