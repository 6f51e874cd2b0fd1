//! Shared helpers for backend integration tests backed by embedded PostgreSQL.
//!
//! Integration tests compile as separate crates, so helpers used by more than
//! one suite live here rather than being copied between files.

mod cluster_skip;

pub use cluster_skip::handle_cluster_setup_failure;

use course_catalogue::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// `postgres::Error` displays database errors as a bare `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}

/// Drop and recreate `name` on `cluster`.
///
/// Uses `postgres` directly because `DROP DATABASE` cannot run inside the
/// transaction Diesel would open.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\"; CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))
}

/// Apply the embedded schema migrations to the database at `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    run_pending_migrations(url)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Open a plain `postgres` client for assertions the repository does not expose.
pub fn connect(url: &str) -> Result<Client, String> {
    Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))
}
