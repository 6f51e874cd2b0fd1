//! Course seeding service.
//!
//! Upserts submitted documents one by one. Each item ends up skipped,
//! stored, or failed; the batch always runs to the end.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::ports::{
    BatchItemError, CourseRepository, CourseSeedingCommand, SeedDocument, SeedItem,
    SeedItemStatus, SeedReport,
};
use crate::domain::{Course, Error};

/// Seeding service implementing [`CourseSeedingCommand`].
#[derive(Clone)]
pub struct CourseSeeder<R> {
    repository: Arc<R>,
}

impl<R> CourseSeeder<R> {
    /// Create a seeder writing to `repository`.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Keys a document may declare its slug under, in order of precedence.
const SLUG_KEYS: [&str; 2] = ["id", "slug"];

/// Slug declared by a raw document and the key it was found under.
///
/// `id` wins over `slug`; a blank value falls through to the next key.
fn declared_slug(document: &Value) -> Option<(&'static str, String)> {
    SLUG_KEYS.iter().find_map(|key| {
        document
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(|slug| (*key, slug.to_owned()))
    })
}

/// Drop every slug key except `kept`, since `id` and `slug` name one field.
fn retain_slug_key(document: &mut Value, kept: &str) {
    if let Some(object) = document.as_object_mut() {
        for key in SLUG_KEYS.iter().filter(|key| **key != kept) {
            object.remove(*key);
        }
    }
}

impl<R> CourseSeeder<R>
where
    R: CourseRepository,
{
    async fn seed_one(&self, document: Value) -> SeedItemStatus {
        let course = match serde_json::from_value::<Course>(document) {
            Ok(course) => course,
            Err(error) => {
                return SeedItemStatus::Failed(BatchItemError::Invalid {
                    message: error.to_string(),
                });
            }
        };
        match self.repository.upsert(&course).await {
            Ok(outcome) => SeedItemStatus::Stored(outcome),
            Err(error) => SeedItemStatus::Failed(BatchItemError::Storage {
                message: error.to_string(),
            }),
        }
    }
}

#[async_trait]
impl<R> CourseSeedingCommand for CourseSeeder<R>
where
    R: CourseRepository,
{
    async fn seed(&self, documents: Vec<SeedDocument>) -> Result<SeedReport, Error> {
        let mut report = SeedReport::default();
        for SeedDocument {
            source,
            mut document,
        } in documents
        {
            let declared = declared_slug(&document);
            let status = if let Some((key, _)) = declared {
                retain_slug_key(&mut document, key);
                self.seed_one(document).await
            } else {
                SeedItemStatus::Skipped
            };
            let slug = declared.map(|(_, slug)| slug);
            match &status {
                SeedItemStatus::Skipped => warn!(%source, "document has no slug; skipped"),
                SeedItemStatus::Stored(outcome) => {
                    info!(%source, slug = slug.as_deref(), ?outcome, "course stored");
                }
                SeedItemStatus::Failed(error) => {
                    warn!(%source, slug = slug.as_deref(), %error, "course rejected");
                }
            }
            report.push(SeedItem {
                source,
                slug,
                status,
            });
        }
        info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failed,
            skipped = report.skipped,
            "seeding finished"
        );
        Ok(report)
    }
}
