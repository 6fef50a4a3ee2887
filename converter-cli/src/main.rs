//! Converter CLI
//!
//! Command-line front end for the currency converter.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use audit_log::{DEFAULT_LOG_FILE, FileAuditLog, build_audit_log};
use converter_hex::ConversionService;
use converter_hex::inbound::{ConversionSession, USAGE};
use converter_types::ConversionResult;
use exchange_rates::{
    CurrencyCode, DEFAULT_SOURCE, DEFAULT_TARGET, TARGET_MENU, is_known, normalize,
};
use rates_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, RatesClient};

use config::Config;

#[derive(Parser)]
#[command(name = "converter")]
#[command(
    author,
    version,
    about = "Convert amounts between currencies at today's rates",
    long_about = None
)]
struct Cli {
    /// Base URL of the exchange-rate API
    #[arg(
        long,
        env = "RATES_API_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    api_url: String,

    /// Seconds to wait for the rate service
    #[arg(
        long,
        env = "RATES_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    timeout_secs: u64,

    /// File the audit lines are appended to
    #[arg(
        long,
        env = "CONVERTER_LOG_FILE",
        default_value = DEFAULT_LOG_FILE,
        global = true
    )]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one amount
    Convert {
        /// Amount in the source currency
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source currency code
        #[arg(long, default_value_t = DEFAULT_SOURCE.to_string())]
        from: String,
        /// Target currency code
        #[arg(long, default_value_t = DEFAULT_TARGET.to_string())]
        to: String,
    },
    /// Read conversions from stdin, one per line
    Interactive {
        /// Source currency used when a line names none
        #[arg(long, default_value_t = DEFAULT_SOURCE.to_string())]
        from: String,
        /// Target currency used when a line names none
        #[arg(long, default_value_t = DEFAULT_TARGET.to_string())]
        to: String,
    },
    /// Show today's rates for the menu currencies
    Rates {
        /// Base currency code
        #[arg(long, default_value_t = DEFAULT_SOURCE.to_string())]
        base: String,
    },
    /// List the currency menu
    Currencies,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_client(config: &Config) -> Result<RatesClient> {
    Ok(RatesClient::with_timeout(&config.api_url, config.timeout)?)
}

async fn build_service(config: &Config) -> Result<ConversionService<RatesClient, FileAuditLog>> {
    let client = build_client(config)?;
    let log = build_audit_log(&config.log_file).await?;
    Ok(ConversionService::new(client, log))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::new(cli.api_url, cli.timeout_secs, cli.log_file)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Convert { amount, from, to } => {
            for code in [&from, &to] {
                if !is_known(code) {
                    tracing::info!(%code, "currency is not on the menu, forwarding as is");
                }
            }
            let service = build_service(&config).await?;
            let result: ConversionResult = service
                .convert(&amount, &normalize(&from), &normalize(&to))
                .await
                .into();
            println!("{}", result.display_text);
            if !result.succeeded {
                std::process::exit(1);
            }
        }

        Commands::Interactive { from, to } => {
            let service = build_service(&config).await?;
            let session = ConversionSession::new(&service)
                .with_defaults(&from, &to)
                .with_prompt("> ");

            println!("Currency Converter");
            println!("{}", USAGE);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let summary = session.run(stdin, tokio::io::stdout()).await?;
            println!();
            tracing::info!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "session ended"
            );
        }

        Commands::Rates { base } => {
            let client = build_client(&config)?;
            let base = normalize(&base);
            let table = client.fetch_latest(&base).await?;

            match &table.date {
                Some(date) => println!("1 {} on {}:", base, date),
                None => println!("1 {}:", base),
            }
            for code in TARGET_MENU {
                match table.rate(code.code()) {
                    Some(rate) => println!("  {:<4} {:>14.4}", code.code(), rate),
                    None => println!("  {:<4} {:>14}", code.code(), "n/a"),
                }
            }
        }

        Commands::Currencies => {
            for code in CurrencyCode::all() {
                let mut roles = Vec::new();
                if code.is_source() {
                    roles.push("from");
                }
                if code.is_target() {
                    roles.push("to");
                }
                println!(
                    "{:<4} {:<2} {:<18} {}",
                    code.code(),
                    code.symbol(),
                    code.name(),
                    roles.join(",")
                );
            }
        }
    }

    Ok(())
}
