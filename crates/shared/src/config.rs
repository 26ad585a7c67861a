//! Application configuration management.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Monetra configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonetraConfig {
    /// Currency registry configuration.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Exchange rate configuration.
    #[serde(default)]
    pub conversion: ConversionConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Currency registry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Preload the built-in ISO 4217 currencies.
    #[serde(default = "default_include_iso")]
    pub include_iso: bool,
    /// Additional currencies, registered after the built-ins.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_iso: default_include_iso(),
            currencies: Vec::new(),
        }
    }
}

fn default_include_iso() -> bool {
    true
}

/// A currency declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code.
    pub code: String,
    /// Fractional digits of the minor unit.
    pub decimals: u32,
    /// Display symbol.
    #[serde(default)]
    pub symbol: String,
    /// Locale hint.
    #[serde(default)]
    pub locale: String,
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    /// Base currency code; every rate is quoted as 1 base = rate target.
    #[serde(default = "default_base")]
    pub base: String,
    /// Rates keyed by currency code, as decimal literal strings.
    #[serde(default)]
    pub rates: BTreeMap<String, String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            rates: BTreeMap::new(),
        }
    }
}

fn default_base() -> String {
    "USD".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "monetra=info".to_string()
}

impl MonetraConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `MONETRA__*` variables.
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
                config::Environment::with_prefix("MONETRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::info!(
            run_mode = %run_mode,
            extra_currencies = loaded.registry.currencies.len(),
            rates = loaded.conversion.rates.len(),
            "Configuration loaded"
        );
        Ok(loaded)
    }
}
