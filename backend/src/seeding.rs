//! Seeding from the static course definitions.
//!
//! Shared by server startup and the `seed-courses` binary: load the
//! definition files, overlay introductions, and push everything through a
//! [`CourseSeedingCommand`]. Files that fail to load are reported as failed
//! items alongside the seeder's own results.

use camino::Utf8Path;
use course_data::{DefinitionError, Introductions, load_definitions};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::Error;
use crate::domain::ports::{
    BatchItemError, CourseSeedingCommand, SeedDocument, SeedItem, SeedItemStatus, SeedReport,
};

/// Errors that stop a definitions seeding run before any item is processed.
#[derive(Debug, Error)]
pub enum DefinitionSeedingError {
    /// The definitions directory or the introductions file was unusable.
    #[error("course definitions unavailable: {0}")]
    Definitions(#[from] DefinitionError),
    /// The seeding command itself failed.
    #[error("course seeding failed: {0}")]
    Seeding(#[from] Error),
}

/// Definitions ready for seeding plus the files that failed to load.
#[derive(Debug, Default)]
pub struct PreparedDefinitions {
    /// Documents to submit, with introductions applied.
    pub documents: Vec<SeedDocument>,
    /// Files that could not be read or parsed, as failed items.
    pub failures: Vec<SeedItem>,
}

/// Load definitions from `dir` and apply `introductions.json` if present.
///
/// # Errors
/// Returns [`DefinitionError`] when the directory cannot be opened or the
/// introductions file exists but is malformed.
pub fn prepare_definitions(dir: &Utf8Path) -> Result<PreparedDefinitions, DefinitionError> {
    let mut prepared = PreparedDefinitions::default();
    let mut definitions = Vec::new();
    for loaded in load_definitions(dir)? {
        match loaded {
            Ok(definition) => definitions.push(definition),
            Err(error) => {
                warn!(%error, "course definition failed to load");
                prepared.failures.push(SeedItem {
                    source: error.file().unwrap_or_default().to_owned(),
                    slug: None,
                    status: SeedItemStatus::Failed(BatchItemError::Invalid {
                        message: error.to_string(),
                    }),
                });
            }
        }
    }

    if let Some(introductions) = Introductions::load(dir)? {
        let applied = introductions.apply(&mut definitions);
        info!(applied, available = introductions.len(), "introductions applied");
    }

    prepared.documents = definitions
        .into_iter()
        .map(|definition| {
            let source = definition.file_name().to_owned();
            SeedDocument::new(source, definition.into_document())
        })
        .collect();
    Ok(prepared)
}

/// Seed every definition in `dir` through `command`.
///
/// # Errors
/// See [`DefinitionSeedingError`]; per-file problems are reported in the
/// returned [`SeedReport`] instead.
pub async fn seed_from_definitions(
    dir: &Utf8Path,
    command: &dyn CourseSeedingCommand,
) -> Result<SeedReport, DefinitionSeedingError> {
    let PreparedDefinitions {
        documents,
        failures,
    } = prepare_definitions(dir)?;
    let mut report = command.seed(documents).await?;
    for failure in failures {
        report.push(failure);
    }
    info!(
        %dir,
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed,
        "definitions seeded"
    );
    Ok(report)
}
