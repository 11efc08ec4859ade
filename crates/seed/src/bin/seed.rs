//! Seeds the development database with the default roles, users, project
//! and tasks.
//!
//! Run with:
//! ```
//! cargo run -p seed --bin seed
//! ```

use std::io::IsTerminal;

use anyhow::Context;
use seed::prelude::*;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Warnings and errors go to stderr, progress to stdout. No colour codes
    // when stdout is redirected.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout))
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let config = SeedConfig::from_env()
        .inspect_err(|e| error!("Seed failed: {e}"))
        .context("invalid seed configuration")?;

    let pool = config
        .connect()
        .await
        .inspect_err(|e| error!("Seed failed: {e}"))
        .context("failed to connect to database")?;

    info!("Connected to database");

    let outcome = Seeder::new(pool.clone())
        .with_hash_cost(config.hash_cost)
        .run(&DEFAULT_SEED)
        .await;

    // Release the connection whether or not seeding succeeded.
    pool.close().await;

    let report = outcome
        .inspect_err(|e| error!("Seed failed: {e}"))
        .context("seed failed")?;

    // Summary output
    info!("Seed completed!");
    info!("  Roles: {}", report.roles.len());
    info!("  Users: {}", report.users.len());
    info!("  Project: {}", report.project.name);
    info!("  Tasks: {}", report.tasks.len());
    info!(
        "  {} rows inserted, {} already present",
        report.inserted, report.existing
    );
    if let Some(admin) = DEFAULT_SEED.admin() {
        info!("{} / {}", admin.email, admin.password);
    }

    Ok(())
}
