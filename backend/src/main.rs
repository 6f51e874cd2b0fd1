//! Course catalogue server entry-point.
//!
//! Loads configuration, applies migrations, optionally seeds the bundled
//! course definitions, then serves the HTTP API.

mod server;

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use course_catalogue::config::AppSettings;
use course_catalogue::domain::CourseSeeder;
use course_catalogue::inbound::http::courses::CourseRouteOptions;
use course_catalogue::inbound::http::health::HealthState;
use course_catalogue::outbound::persistence::{
    DbPool, DieselCourseRepository, PoolConfig, run_pending_migrations,
};
use course_catalogue::seeding::seed_from_definitions;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_for("course-catalogue").map_err(std::io::Error::other)?;
    let database_url = settings
        .database_url()
        .map_err(std::io::Error::other)?
        .to_owned();
    let bind_addr = settings.bind_address().map_err(std::io::Error::other)?;

    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations applied");

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(std::io::Error::other)?;

    if settings.seed_on_startup {
        seed_on_startup(&settings, &pool).await;
    }

    let config = ServerConfig::new(bind_addr)
        .with_routes(CourseRouteOptions {
            seed_endpoint: settings.seed_endpoint,
            dev_endpoints: settings.dev_endpoints,
        })
        .with_db_pool(pool);

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting course catalogue server");
    create_server(health_state, config)?.await
}

/// Seed the definition files; problems are logged and never stop startup.
async fn seed_on_startup(settings: &AppSettings, pool: &DbPool) {
    let dir = match settings.definitions_dir() {
        Ok(dir) => dir,
        Err(error) => {
            warn!(%error, "skipping startup seeding");
            return;
        }
    };
    let seeder = CourseSeeder::new(Arc::new(DieselCourseRepository::new(pool.clone())));
    match seed_from_definitions(&dir, &seeder).await {
        Ok(report) if report.has_failures() => {
            warn!(failed = report.failed, "startup seeding finished with failures");
        }
        Ok(_) => {}
        Err(error) => warn!(%error, "startup seeding failed"),
    }
}
