use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, InsightsConfig, LoggingConfig, ServerConfig,
    ValidationConfig, WeatherConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Env var naming the config directory
pub const CONFIG_DIR_ENV: &str = "WX_CONFIG_DIR";
/// Env var honoured for the provider key when `WX_WEATHER_API_KEY` is unset
pub const LEGACY_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub weather: WeatherConfig,
    pub insights: InsightsConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for WX_CONFIG_DIR env var, else use ./.wx/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply WX_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as `load` with an explicit config directory
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        Self::read(config_dir)
    }

    /// Read config.toml from `config_dir` (defaults when absent) and apply
    /// env overrides. Never touches the filesystem beyond reading.
    pub fn read(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: WX_CONFIG_DIR env var > ./.wx/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".wx"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.weather.validate()?;
        self.insights.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Base URL a client on this machine would use to reach the server
    pub fn server_url(&self) -> String {
        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" => "127.0.0.1",
            other => other,
        };
        format!("http://{}:{}", host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  weather: {} (key: {}, timeout={}s)",
            self.weather.base_url,
            self.weather.masked_api_key(),
            self.weather.timeout_secs
        );
        info!(
            "  insights: {} ({}, timeout={}ms)",
            if self.insights.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.insights.base_url,
            self.insights.timeout_ms
        );
        info!(
            "  validation: user_id={}, city={}, saved_cities={}",
            self.validation.max_user_id_length,
            self.validation.max_city_length,
            self.validation.max_saved_cities
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("WX_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("WX_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("WX_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "WX_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("WX_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WX_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("WX_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("WX_LOG_FILE", &mut self.logging.file);

        // Weather
        Self::apply_env_string("WX_WEATHER_BASE_URL", &mut self.weather.base_url);
        if self.weather.api_key.is_empty() {
            Self::apply_env_string(LEGACY_API_KEY_ENV, &mut self.weather.api_key);
        }
        Self::apply_env_string("WX_WEATHER_API_KEY", &mut self.weather.api_key);
        Self::apply_env_parse("WX_WEATHER_TIMEOUT_SECS", &mut self.weather.timeout_secs);

        // Insights
        Self::apply_env_bool("WX_INSIGHTS_ENABLED", &mut self.insights.enabled);
        Self::apply_env_string("WX_INSIGHTS_BASE_URL", &mut self.insights.base_url);
        Self::apply_env_parse("WX_INSIGHTS_TIMEOUT_MS", &mut self.insights.timeout_ms);

        // Validation
        Self::apply_env_parse(
            "WX_VALIDATION_MAX_USER_ID_LENGTH",
            &mut self.validation.max_user_id_length,
        );
        Self::apply_env_parse(
            "WX_VALIDATION_MAX_CITY_LENGTH",
            &mut self.validation.max_city_length,
        );
        Self::apply_env_parse(
            "WX_VALIDATION_MAX_SAVED_CITIES",
            &mut self.validation.max_saved_cities,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
