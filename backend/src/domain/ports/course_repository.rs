//! Driven port for course document storage.
//!
//! The catalogue service reads through this port and the seeder writes
//! through it. Adapters enforce slug uniqueness; read paths never mutate.

use async_trait::async_trait;

use crate::domain::Course;

use super::define_port_error;

define_port_error! {
    /// Errors raised by course storage adapters.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "course store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "course store query failed: {message}",
    }
}

/// What an upsert did to the stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No document with the slug existed.
    Inserted,
    /// The stored document differed and was replaced.
    Updated,
    /// The stored document already matched; nothing was written.
    Unchanged,
}

/// Port for reading and writing course documents keyed by slug.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Every stored course in insertion order.
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    /// The course with `slug`, if stored.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, CourseRepositoryError>;

    /// Insert or replace the course keyed by its slug.
    ///
    /// Calling twice with identical input reports
    /// [`UpsertOutcome::Unchanged`] the second time and leaves the stored
    /// timestamps untouched.
    async fn upsert(&self, course: &Course) -> Result<UpsertOutcome, CourseRepositoryError>;

    /// Number of stored courses.
    async fn count(&self) -> Result<u64, CourseRepositoryError>;
}

/// Fixture repository that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseRepository;

#[async_trait]
impl CourseRepository for FixtureCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(None)
    }

    async fn upsert(&self, _course: &Course) -> Result<UpsertOutcome, CourseRepositoryError> {
        Ok(UpsertOutcome::Inserted)
    }

    async fn count(&self) -> Result<u64, CourseRepositoryError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_repository_is_empty() {
        let repo = FixtureCourseRepository;
        assert!(repo.find_all().await.expect("find all").is_empty());
        assert!(repo.find_by_slug("intro-ingenieria").await.expect("find").is_none());
        assert_eq!(repo.count().await.expect("count"), 0);
    }

    #[test]
    fn errors_render_their_message() {
        let err = CourseRepositoryError::connection("pool exhausted");
        assert_eq!(err.to_string(), "course store connection failed: pool exhausted");
    }
}
