//! Seed the course store from the static definition files.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use course_catalogue::config::AppSettings;
use course_catalogue::domain::CourseSeeder;
use course_catalogue::domain::ports::{SeedItemStatus, SeedReport};
use course_catalogue::outbound::persistence::{
    DbPool, DieselCourseRepository, PoolConfig, run_pending_migrations,
};
use course_catalogue::seeding::seed_from_definitions;

/// `seed-courses` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-courses",
    about = "Upsert the multilingual course definitions into the course store",
    version
)]
struct CliArgs {
    /// Directory holding the `*_multilang.json` definitions.
    #[arg(long = "definitions", value_name = "dir")]
    definitions: Option<Utf8PathBuf>,
    /// Database connection URL. Falls back to `CATALOGUE_DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> io::Result<ExitCode> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    let report = runtime.block_on(async_main())?;
    Ok(if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn async_main() -> io::Result<SeedReport> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = AppSettings::load_for("seed-courses").map_err(io::Error::other)?;

    let database_url = resolve_database_url(args.database_url, &settings)?;
    let definitions = match args.definitions {
        Some(dir) => dir,
        None => settings.definitions_dir().map_err(io::Error::other)?,
    };

    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(io::Error::other)?
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
    info!(applied, "database migrations applied");

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    let seeder = CourseSeeder::new(Arc::new(DieselCourseRepository::new(pool)));

    let report = seed_from_definitions(&definitions, &seeder)
        .await
        .map_err(io::Error::other)?;
    log_report(&report);
    Ok(report)
}

fn log_report(report: &SeedReport) {
    for item in &report.items {
        if let SeedItemStatus::Failed(error) = &item.status {
            warn!(source = %item.source, slug = ?item.slug, %error, "course not seeded");
        }
    }
    info!(
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed,
        skipped = report.skipped,
        "seeding report"
    );
}

fn resolve_database_url(explicit: Option<String>, settings: &AppSettings) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }
    settings
        .database_url()
        .map(str::to_owned)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))
}
