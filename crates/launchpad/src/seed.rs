// File: src/seed.rs
// Purpose: Database seed script

use anyhow::{Context, Result};
use sqlx::AnyPool;

/// Insert seed data. Add your own records here.
pub async fn seed_database(pool: &AnyPool) -> Result<()> {
    tracing::info!("Seeding database...");

    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("database is not reachable")?;

    tracing::info!("Database seeded successfully");
    Ok(())
}

/// Connect, seed and close the pool whether or not seeding succeeded
pub async fn run(database_url: &str) -> Result<()> {
    sqlx::any::install_default_drivers();

    let pool = AnyPool::connect(database_url)
        .await
        .with_context(|| format!("failed to connect to {}", redact_url(database_url)))?;

    let result = seed_database(&pool).await;
    pool.close().await;
    result
}

/// Hide the password part of a connection URL for logging
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.split_once('@') {
        Some((credentials, host)) => {
            let user = credentials.split(':').next().unwrap_or_default();
            format!("{}://{}:***@{}", scheme, user, host)
        }
        None => url.to_string(),
    }
}
