//! [`Config`]-related definitions.

use std::time;

use common::Percent;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::domain::quote::{cost, payment};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: Server,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: Catalog,

    /// Pricing configuration.
    #[serde(default)]
    pub pricing: Pricing,

    /// Payment schedule configuration.
    #[serde(default)]
    pub payment: Payment,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Extracts the [`service::Config`] out of this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        service::Config {
            pricing: self.pricing.into(),
            payment: self.payment.into(),
            refresh_catalog: service::task::refresh_catalog::Config {
                interval: self.catalog.refresh_interval,
            },
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Catalog configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Path to the JSON file with properties and packages.
    #[default("catalog.json".to_owned())]
    pub path: String,

    /// Interval between reloads of the catalog file.
    ///
    /// Zero disables reloading.
    #[default(time::Duration::from_secs(5 * 60))]
    #[serde(with = "humantime_serde")]
    pub refresh_interval: time::Duration,
}

/// Pricing configuration, with rates in percents.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pricing {
    /// Service fee charged on top of any subtotal.
    #[default(cost::SERVICE_FEE_RATE)]
    pub service_fee: Percent,

    /// Tax charged on a subtotal of a stay.
    #[default(cost::STAY_TAX_RATE)]
    pub stay_tax: Percent,

    /// Tax charged on a subtotal of a package.
    #[default(cost::PACKAGE_TAX_RATE)]
    pub package_tax: Percent,
}

impl From<Pricing> for cost::Pricing {
    fn from(value: Pricing) -> Self {
        let Pricing {
            service_fee,
            stay_tax,
            package_tax,
        } = value;
        Self {
            service_fee,
            stay_tax,
            package_tax,
        }
    }
}

/// Payment schedule configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Payment {
    /// Share of a total paid as a deposit, in percents.
    #[default(payment::DEPOSIT_SHARE)]
    pub deposit_share: Percent,

    /// Number of days after booking a deposit is due in.
    #[default(payment::DEPOSIT_DUE_AFTER_DAYS)]
    pub deposit_due_after_days: u32,

    /// Number of days before arrival a balance is due.
    #[default(payment::BALANCE_DUE_BEFORE_DAYS)]
    pub balance_due_before_days: u32,
}

impl From<Payment> for payment::Policy {
    fn from(value: Payment) -> Self {
        let Payment {
            deposit_share,
            deposit_due_after_days,
            balance_due_before_days,
        } = value;
        Self {
            deposit_share,
            deposit_due_after_days,
            balance_due_before_days,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
