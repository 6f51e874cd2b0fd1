//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports,
//! so they stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{
    CourseCatalogueQuery, CourseSeedingCommand, FixtureCourseCatalogueQuery,
    FixtureCourseSeedingCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalogue reads.
    pub catalogue: Arc<dyn CourseCatalogueQuery>,
    /// Batch loading.
    pub seeding: Arc<dyn CourseSeedingCommand>,
}

impl HttpState {
    /// Bundle the catalogue and seeding ports.
    pub fn new(
        catalogue: Arc<dyn CourseCatalogueQuery>,
        seeding: Arc<dyn CourseSeedingCommand>,
    ) -> Self {
        Self { catalogue, seeding }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureCourseCatalogueQuery),
            Arc::new(FixtureCourseSeedingCommand),
        )
    }
}
