//! Configuration management for the Metabolic Trend Analyzer backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: MTA__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON data file holding the whole persisted state
    pub data_file: String,
}

/// Series simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed; identical runs produce identical series
    pub seed: u64,
    /// Number of simulated days
    pub days: u32,
    /// Standard deviation of the daily Gaussian noise, in kcal
    pub noise_std_dev: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: metabolic_trend_shared::simulation::DEFAULT_SEED,
            days: metabolic_trend_shared::simulation::DEFAULT_DAYS,
            noise_std_dev: metabolic_trend_shared::simulation::DEFAULT_NOISE_STD_DEV,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                data_file: "data/metabolism_data.json".to_string(),
            },
            simulation: SimulationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with MTA__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (MTA__ prefix)
            // e.g., MTA__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("MTA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
