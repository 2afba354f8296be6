//! Configuration management for the Crop Yield Advisory Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRO_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// External prediction model configuration
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key; empty disables live weather
    pub api_key: String,

    /// Reverse geocoding API endpoint
    pub geocoding_endpoint: String,

    /// Fall back to built-in default conditions when the live fetch fails.
    /// When false, a failed fetch surfaces "environmental data unavailable".
    pub allow_fallback: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Command to launch the external prediction process; empty disables
    /// delegation and every request uses the rule-based estimator
    pub command: String,

    /// Fixed arguments passed before the JSON input argument
    pub args: Vec<String>,

    /// Seconds to wait for the process before killing it and falling back
    pub timeout_secs: u64,

    /// Maximum concurrently running prediction processes
    pub max_concurrent: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default(
                "weather.api_endpoint",
                "https://api.openweathermap.org/data/2.5",
            )?
            .set_default("weather.api_key", "")?
            .set_default(
                "weather.geocoding_endpoint",
                "https://api.openweathermap.org/geo/1.0",
            )?
            .set_default("weather.allow_fallback", true)?
            .set_default("model.command", "")?
            .set_default("model.args", Vec::<String>::new())?
            .set_default("model.timeout_secs", 10)?
            .set_default("model.max_concurrent", 4)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRO_ prefix)
            .add_source(
                Environment::with_prefix("AGRO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            command: String::new(),
            args: Vec::new(),
            timeout_secs: 10,
            max_concurrent: 4,
        }
    }
}
