mod config;
mod database_config;
mod error;
mod insights_config;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;
mod weather_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use insights_config::InsightsConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;
pub use weather_config::WeatherConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "weather.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;
const MIN_WEATHER_TIMEOUT_SECS: u64 = 1;
const MAX_WEATHER_TIMEOUT_SECS: u64 = 120;

const DEFAULT_INSIGHTS_ENABLED: bool = true;
const DEFAULT_INSIGHTS_BASE_URL: &str = "http://127.0.0.1:5001";
const DEFAULT_INSIGHTS_TIMEOUT_MS: u64 = 2000;
const MIN_INSIGHTS_TIMEOUT_MS: u64 = 50;
const MAX_INSIGHTS_TIMEOUT_MS: u64 = 30_000;
