//! Driving port for batch-loading course documents.
//!
//! Both the seed endpoint and the `seed-courses` binary submit documents
//! through this port. A failing item never aborts the batch.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Error;

use super::UpsertOutcome;

/// One raw document submitted for seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedDocument {
    /// Where the document came from, such as a file name or `request[3]`.
    pub source: String,
    /// The document as authored.
    pub document: Value,
}

impl SeedDocument {
    /// Pair a document with its source label.
    pub fn new(source: impl Into<String>, document: Value) -> Self {
        Self {
            source: source.into(),
            document,
        }
    }
}

/// Why a single item failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchItemError {
    /// The document could not be parsed into a valid course.
    #[error("invalid course document: {message}")]
    Invalid {
        /// Parse or validation error text.
        message: String,
    },
    /// The repository rejected the write.
    #[error("course store write failed: {message}")]
    Storage {
        /// Repository error text.
        message: String,
    },
}

/// Result for one submitted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedItemStatus {
    /// The document has no slug and was ignored.
    Skipped,
    /// The document was written or already up to date.
    Stored(UpsertOutcome),
    /// The document was rejected.
    Failed(BatchItemError),
}

/// Per-item entry in a [`SeedReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedItem {
    /// Source label of the submitted document.
    pub source: String,
    /// Declared slug; `None` when the item was skipped.
    pub slug: Option<String>,
    /// What happened to the item.
    pub status: SeedItemStatus,
}

/// Outcome of a seeding batch.
///
/// `attempted` counts items that had a slug; `attempted == succeeded +
/// failed` and `items.len() == attempted + skipped`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// One entry per submitted document, in submission order.
    pub items: Vec<SeedItem>,
    /// Items that declared a slug.
    pub attempted: usize,
    /// Items stored or already up to date.
    pub succeeded: usize,
    /// Items rejected by validation or storage.
    pub failed: usize,
    /// Items without a slug.
    pub skipped: usize,
}

impl SeedReport {
    /// Record an item and update the counters.
    pub fn push(&mut self, item: SeedItem) {
        match &item.status {
            SeedItemStatus::Skipped => self.skipped += 1,
            SeedItemStatus::Stored(_) => {
                self.attempted += 1;
                self.succeeded += 1;
            }
            SeedItemStatus::Failed(_) => {
                self.attempted += 1;
                self.failed += 1;
            }
        }
        self.items.push(item);
    }

    /// Whether any item failed.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Number of items with the given upsert outcome.
    #[must_use]
    pub fn count_outcome(&self, outcome: UpsertOutcome) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == SeedItemStatus::Stored(outcome))
            .count()
    }
}

/// Domain use-case port for seeding.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseSeedingCommand: Send + Sync {
    /// Upsert every document with a slug, reporting each item.
    async fn seed(&self, documents: Vec<SeedDocument>) -> Result<SeedReport, Error>;
}

/// Fixture command that skips every document.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseSeedingCommand;

#[async_trait]
impl CourseSeedingCommand for FixtureCourseSeedingCommand {
    async fn seed(&self, documents: Vec<SeedDocument>) -> Result<SeedReport, Error> {
        let mut report = SeedReport::default();
        for document in documents {
            report.push(SeedItem {
                source: document.source,
                slug: None,
                status: SeedItemStatus::Skipped,
            });
        }
        Ok(report)
    }
}
