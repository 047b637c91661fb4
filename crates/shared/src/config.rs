//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Payment calculation defaults.
    #[serde(default)]
    pub finance: FinanceConfig,
    /// Lesson scheduling limits.
    #[serde(default)]
    pub schedule: ScheduleConfig,
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

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Defaults applied when a payment request leaves a rate out.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceConfig {
    /// Currency the institution bills in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// VAT rate in percent.
    #[serde(default = "default_vat_rate")]
    pub default_vat_rate: Decimal,
    /// Card commission rate in percent.
    #[serde(default)]
    pub default_commission_rate: Decimal,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_vat_rate: default_vat_rate(),
            default_commission_rate: Decimal::ZERO,
        }
    }
}

fn default_currency() -> Currency {
    Currency::Try
}

fn default_vat_rate() -> Decimal {
    Decimal::from(18)
}

/// Scheduling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Longest date range, in days, a single expansion may cover.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
    /// Whether occurrences on national holidays are dropped when a request doesn't say.
    #[serde(default)]
    pub skip_holidays_by_default: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_range_days: default_max_range_days(),
            skip_holidays_by_default: false,
        }
    }
}

fn default_max_range_days() -> u32 {
    366
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TUTORA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
