//! Builders wiring the Diesel repository into the HTTP ports.

use std::sync::Arc;

use actix_web::web;

use course_catalogue::domain::{CourseCatalogueService, CourseSeeder};
use course_catalogue::inbound::http::state::HttpState;
use course_catalogue::outbound::persistence::DieselCourseRepository;

use super::ServerConfig;

/// Build handler state from the configured pool, falling back to fixture
/// ports when no pool is attached.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            let repository = Arc::new(DieselCourseRepository::new(pool.clone()));
            HttpState::new(
                Arc::new(CourseCatalogueService::new(Arc::clone(&repository))),
                Arc::new(CourseSeeder::new(repository)),
            )
        }
        None => HttpState::default(),
    };
    web::Data::new(state)
}
