//! Database seed script.
//!
//! Reads `DATABASE_URL` (or `[database] url` from launchpad.toml) and runs the
//! seed routine. Exits with status 1 when seeding fails.

use std::process::ExitCode;

use launchpad::seed;
use launchpad::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

async fn run() -> anyhow::Result<()> {
    let config = Config::load_default()?;
    let database_url = config
        .database
        .url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

    seed::run(&database_url).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Error seeding database");
            ExitCode::FAILURE
        }
    }
}
