//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `TWEETBOARD_*` environment overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{ApiServiceConfig, DEFAULT_LOCALE, UPLOAD_TIMEOUT_SECS};
use crate::cookie::{CookieResult, CookieStore};
use crate::pages::PageAssets;
use crate::stats::DataMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiClientConfig,

    #[serde(default)]
    pub cookies: CookieConfig,

    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub assets: PageAssets,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Statistics API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Force mock data on or off; unset follows the `mock-data` build feature
    pub use_mock: Option<bool>,

    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,

    #[serde(default = "default_locale")]
    pub default_locale: String,

    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_with_credentials() -> bool {
    true
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_upload_timeout() -> u64 {
    UPLOAD_TIMEOUT_SECS
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            use_mock: None,
            with_credentials: default_with_credentials(),
            default_locale: default_locale(),
            upload_timeout_secs: default_upload_timeout(),
        }
    }
}

impl ApiClientConfig {
    pub fn service_config(&self) -> ApiServiceConfig {
        ApiServiceConfig {
            base_url: self.base_url.clone(),
            with_credentials: self.with_credentials,
            default_locale: self.default_locale.clone(),
            upload_timeout_secs: self.upload_timeout_secs,
        }
    }

    pub fn data_mode(&self) -> DataMode {
        DataMode::from_override(self.use_mock)
    }
}

/// Cookie jar configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_file")]
    pub file: String,

    /// Keep cookies in memory only
    #[serde(default)]
    pub in_memory: bool,
}

fn default_cookie_file() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("tweetboard").join("cookies.json").to_string_lossy().to_string())
        .unwrap_or_else(|| "./tweetboard_cookies.json".to_string())
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            file: default_cookie_file(),
            in_memory: false,
        }
    }
}

impl CookieConfig {
    /// Jar location with a leading `~/` expanded to the home directory
    pub fn resolved_file(&self) -> PathBuf {
        expand_home(&self.file)
    }

    /// Open the configured jar
    pub fn open_store(&self) -> CookieResult<CookieStore> {
        if self.in_memory {
            Ok(CookieStore::in_memory())
        } else {
            CookieStore::open(self.resolved_file())
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Dashboard shell server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Where an unauthorized page load is sent
    #[serde(default = "default_sign_in_url")]
    pub sign_in_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_sign_in_url() -> String {
    "/sign-in".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            sign_in_url: default_sign_in_url(),
        }
    }
}

impl ShellConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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
    /// Install the global subscriber; `RUST_LOG` wins over the configured level
    pub fn init(&self) -> Result<(), tracing_subscriber::util::TryInitError> {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("tweetboard={},tower_http={}", self.level, self.level).into()
        });

        // stderr keeps stdout free for CLI output
        let json = self.format == "json";
        tracing_subscriber::registry()
            .with(filter)
            .with(json.then(|| {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
            }))
            .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
            .try_init()
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
            dirs::config_dir().map(|p| p.join("tweetboard").join("config.toml")),
            Some(PathBuf::from("/etc/tweetboard/config.toml")),
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
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("TWEETBOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Some(mock) = lookup("TWEETBOARD_USE_MOCK") {
            match mock.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.api.use_mock = Some(true),
                "0" | "false" | "no" => self.api.use_mock = Some(false),
                other => tracing::warn!("Ignoring TWEETBOARD_USE_MOCK={}", other),
            }
        }

        // Cookie overrides
        if let Some(file) = lookup("TWEETBOARD_COOKIE_FILE") {
            self.cookies.file = file;
        }

        // Shell overrides
        if let Some(host) = lookup("TWEETBOARD_HOST") {
            self.shell.host = host;
        }
        if let Some(port) = lookup("TWEETBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.shell.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("TWEETBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TWEETBOARD_LOG_FORMAT") {
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
    r#"# Tweetboard Configuration
#
# Environment variables override these settings:
# - TWEETBOARD_API_URL
# - TWEETBOARD_USE_MOCK
# - TWEETBOARD_COOKIE_FILE
# - TWEETBOARD_HOST
# - TWEETBOARD_PORT
# - TWEETBOARD_LOG_LEVEL
# - TWEETBOARD_LOG_FORMAT

[api]
# Statistics API base URL
base_url = "http://localhost:3000/api"

# Serve embedded mock data instead of calling the API.
# Leave unset to follow the build (the `mock-data` feature).
# use_mock = true

# Send the cookie jar with every request
with_credentials = true

# Locale sent when no `lang` cookie is set
default_locale = "ja"

# Timeout for paged uploads sent with PUT (seconds)
upload_timeout_secs = 60

[cookies]
# Persisted cookie jar (a leading ~/ is the home directory)
file = "~/.local/share/tweetboard/cookies.json"

# Keep cookies in memory only
in_memory = false

[shell]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8084

# Redirect target when the API rejects the session
sign_in_url = "/sign-in"

[assets]
# Timeline marker on the hourly chart
twitter_icon = "assets/image/twitter.svg"

# Mask image for the word cloud
word_cloud_mask = "assets/image/word-cloud-frame.png"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
