//! PostgreSQL persistence for course documents.
//!
//! Repositories translate between Diesel rows and domain types and map
//! database failures onto port errors. Row structs and the table schema stay
//! private to this module.
//!
//! # Example
//!
//! ```ignore
//! use course_catalogue::outbound::persistence::{DbPool, DieselCourseRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/courses")).await?;
//! let repository = DieselCourseRepository::new(pool);
//! ```

mod diesel_course_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
