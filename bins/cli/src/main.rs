//! Monetra CLI
//!
//! Exact money arithmetic from the command line. Every command prints JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, reload, util::SubscriberInitExt};

use monetra_core::{
    Converter, CurrencyRegistry, DecimalLiteral, Money, RoundingMode, divide_with_rounding,
};
use monetra_shared::MonetraConfig;

/// Log filter used until configuration is loaded.
const DEFAULT_LOG_FILTER: &str = "monetra=info";

#[derive(Parser)]
#[command(name = "monetra")]
#[command(author, version, about = "Exact decimal money arithmetic", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split an amount by ratios so the parts sum exactly to the whole
    Allocate {
        /// Currency code
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Amount in major units (e.g. 250.00)
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Comma-separated ratios (e.g. 1,1,1 or 50,30,20)
        #[arg(long, value_delimiter = ',', required = true)]
        ratios: Vec<String>,
    },
    /// Multiply an amount by an exact decimal
    Multiply {
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Multiplier as a decimal literal
        #[arg(long, allow_hyphen_values = true)]
        by: String,
        /// Rounding mode; required when the product is fractional
        #[arg(long)]
        rounding: Option<String>,
    },
    /// Divide an amount by an exact decimal
    Divide {
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Divisor as a decimal literal
        #[arg(long, allow_hyphen_values = true)]
        by: String,
        /// Rounding mode; required when the quotient is fractional
        #[arg(long)]
        rounding: Option<String>,
    },
    /// Convert an amount between currencies using configured rates
    Convert {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long, default_value = "HALF_EVEN")]
        rounding: String,
    },
    /// Divide two integers with a rounding mode
    Round {
        #[arg(long, allow_hyphen_values = true)]
        numerator: i128,
        #[arg(long, allow_hyphen_values = true)]
        denominator: i128,
        #[arg(long)]
        rounding: String,
    },
}

#[derive(Serialize)]
struct RoundOutput {
    numerator: String,
    denominator: String,
    rounding: RoundingMode,
    result: String,
}

fn parse_mode(name: Option<&str>) -> Result<Option<RoundingMode>> {
    name.map(str::parse::<RoundingMode>)
        .transpose()
        .context("Invalid rounding mode")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; logs go to stderr so stdout stays pure JSON
    let from_env = EnvFilter::try_from_default_env().ok();
    let has_env_filter = from_env.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(from_env.unwrap_or_else(|| DEFAULT_LOG_FILTER.into()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = MonetraConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins; otherwise switch to the configured filter
    if !has_env_filter {
        filter_handle
            .reload(EnvFilter::new(&config.logging.filter))
            .context("Failed to apply configured log filter")?;
    }

    let cli = Cli::parse();
    let registry = CurrencyRegistry::from_config(&config.registry)
        .context("Failed to build currency registry")?;

    match cli.command {
        Commands::Allocate {
            currency,
            amount,
            ratios,
        } => {
            let money = registry.money_from_major(&amount, &currency.to_uppercase())?;
            let ratios = ratios
                .iter()
                .map(|r| r.trim().parse::<DecimalLiteral>())
                .collect::<Result<Vec<_>, _>>()?;
            debug!(parts = ratios.len(), "Allocating");
            print_json(&money.allocate(&ratios)?)?;
        }
        Commands::Multiply {
            currency,
            amount,
            by,
            rounding,
        } => {
            let money = registry.money_from_major(&amount, &currency.to_uppercase())?;
            let product = money.multiply(by.parse()?, parse_mode(rounding.as_deref())?)?;
            print_json(&product)?;
        }
        Commands::Divide {
            currency,
            amount,
            by,
            rounding,
        } => {
            let money = registry.money_from_major(&amount, &currency.to_uppercase())?;
            let quotient = money.divide(by.parse()?, parse_mode(rounding.as_deref())?)?;
            print_json(&quotient)?;
        }
        Commands::Convert {
            from,
            to,
            amount,
            rounding,
        } => {
            let converter = Converter::from_config(&config.conversion)
                .context("Failed to build converter")?;
            let money = registry.money_from_major(&amount, &from.to_uppercase())?;
            let target = registry.lookup(&to.to_uppercase())?;
            let mode: RoundingMode = rounding.parse()?;
            let converted: Money = converter.convert(&money, target, mode)?;
            print_json(&converted)?;
        }
        Commands::Round {
            numerator,
            denominator,
            rounding,
        } => {
            let mode: RoundingMode = rounding.parse()?;
            let result = divide_with_rounding(numerator, denominator, mode)?;
            print_json(&RoundOutput {
                numerator: numerator.to_string(),
                denominator: denominator.to_string(),
                rounding: mode,
                result: result.to_string(),
            })?;
        }
    }

    Ok(())
}
