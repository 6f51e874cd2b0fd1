//! Course catalogue service library.
//!
//! Hexagonal layout: `domain` holds course rules and ports, `inbound` the
//! HTTP adapter, `outbound` the PostgreSQL adapter. `seeding` ties the
//! definition files to the seeding port for the startup hook and the
//! `seed-courses` binary.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
