//! Tally calculator
//!
//! Evaluates one money expression and prints the result.

mod cli;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::MoneyContext;
use tally_shared::MoneySettings;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let settings = MoneySettings::load()?;
    let ctx = MoneyContext::from_settings(&settings)?;
    info!(
        default_currency = %ctx.default_currency(),
        default_precision = ctx.default_precision(),
        rates = settings.rates.len(),
        "Money context ready"
    );

    match cli.command.run(&ctx) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            anyhow::bail!("{}: {err}", err.error_code())
        }
    }
}
