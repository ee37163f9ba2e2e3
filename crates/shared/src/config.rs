//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Highest precision accepted for billed amounts.
pub const MAX_DECIMAL_PLACES: u32 = 4;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Billing configuration.
    #[serde(default)]
    pub billing: BillingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Billing configuration used when prorating common expenses.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Number of decimal places each unit share is rounded to.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Currency community charges are expressed in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

fn default_decimal_places() -> u32 {
    2
}

fn default_currency() -> Currency {
    Currency::Clp
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COMUNIAPP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Checks values the deserializer cannot constrain on its own.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `billing.decimal_places` exceeds
    /// [`MAX_DECIMAL_PLACES`].
    pub fn validate(&self) -> AppResult<()> {
        if self.billing.decimal_places > MAX_DECIMAL_PLACES {
            return Err(AppError::Validation(format!(
                "billing.decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.billing.decimal_places
            )));
        }
        Ok(())
    }
}
